//! Deterministic session module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit clock (milliseconds passed into every operation)
//! - Seeded RNG only
//! - Stable iteration order (notes by spawn id)
//! - Platform access only through the injected capability seams
//!
//! Every state transition (throw, timer firing, track completion, per-frame
//! note tick) is serialized onto the caller's single logical event queue;
//! nothing here assumes or requires locking.

pub mod note;
pub mod session;
pub mod timers;

pub use note::Note;
pub use session::{Session, SessionEvent, SessionPhase};
pub use timers::{DeadlineKind, Deadlines};
