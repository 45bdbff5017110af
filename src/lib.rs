//! Money Toss - a short casual banknote-flinging game session
//!
//! Core modules:
//! - `sim`: Deterministic session logic (projectiles, timers, state machine)
//! - `currency`: Currency catalog and music track configuration
//! - `settings`: Persisted player preferences behind a storage seam
//! - `audio`: Music/SFX capability consumed by the session
//! - `physics`: Projectile motion capability consumed by the session

pub mod audio;
pub mod currency;
pub mod physics;
pub mod settings;
pub mod sim;

pub use currency::{CurrencyCode, CurrencyDefinition, MusicTrack, TrackList};
pub use settings::{Settings, SettingsStore};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the arcade physics step)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Viewport dimensions (portrait phone layout)
    pub const VIEWPORT_WIDTH: f32 = 360.0;
    pub const VIEWPORT_HEIGHT: f32 = 640.0;

    /// Downward gravity applied to thrown notes (pixels/s²)
    pub const GRAVITY_Y: f32 = 800.0;

    /// Horizontal launch impulse range (pixels/s, symmetric)
    pub const LAUNCH_VX_MAX: f32 = 200.0;
    /// Vertical launch impulse range (pixels/s, negative = up)
    pub const LAUNCH_VY_MIN: f32 = -800.0;
    pub const LAUNCH_VY_MAX: f32 = -600.0;
    /// Angular spin range on launch (degrees/s, symmetric)
    pub const LAUNCH_SPIN_MAX: f32 = 300.0;

    /// Notes are destroyed once outside the viewport inflated by this margin
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Height score: one point per this many pixels of throw height
    pub const HEIGHT_DIVISOR: f32 = 50.0;

    /// Music pauses after this long without a throw
    pub const MUSIC_INACTIVITY_MS: u64 = 1000;
    /// Combo streak resets after this long without a throw
    pub const COMBO_RESET_MS: u64 = 2000;
    /// Minimum streak length before combo bonuses trigger
    pub const COMBO_THRESHOLD: u32 = 3;
    /// Bonus points per streak entry when a combo triggers
    pub const COMBO_BONUS_PER_THROW: u32 = 5;
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The full viewport rectangle
    pub fn viewport() -> Self {
        Self::new(0.0, 0.0, consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT)
    }

    /// Rectangle expanded by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_inflate_contains() {
        let bounds = Rect::viewport().inflate(consts::OFFSCREEN_MARGIN);
        assert!(bounds.contains(Vec2::new(-50.0, 300.0)));
        assert!(bounds.contains(Vec2::new(180.0, 739.0)));
        assert!(!bounds.contains(Vec2::new(-101.0, 300.0)));
        assert!(!bounds.contains(Vec2::new(180.0, 741.0)));
    }
}
