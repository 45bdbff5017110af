//! Named cancellable deadlines
//!
//! The session's only waits are two delayed callbacks: the music
//! inactivity pause and the combo-streak reset. Instead of implicit timer
//! callbacks these are a small table of named slots, each holding at most
//! one pending deadline. Arming a slot replaces whatever was pending, a
//! cancelled deadline never fires, and a suspended table keeps each slot's
//! remaining time so a pause does not eat into the delay.

/// The session's named deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineKind {
    /// Pause the music after a period with no throws
    MusicInactivity,
    /// Zero the combo streak after a period with no throws
    ComboReset,
}

const ALL_KINDS: [DeadlineKind; 2] = [DeadlineKind::MusicInactivity, DeadlineKind::ComboReset];

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Absolute firing time, ms
    fire_at: Option<u64>,
    /// Remaining delay while suspended, ms
    suspended_remaining: Option<u64>,
}

/// Table of pending deadlines, one slot per kind
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadlines {
    music_inactivity: Slot,
    combo_reset: Slot,
}

impl Deadlines {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: DeadlineKind) -> &Slot {
        match kind {
            DeadlineKind::MusicInactivity => &self.music_inactivity,
            DeadlineKind::ComboReset => &self.combo_reset,
        }
    }

    fn slot_mut(&mut self, kind: DeadlineKind) -> &mut Slot {
        match kind {
            DeadlineKind::MusicInactivity => &mut self.music_inactivity,
            DeadlineKind::ComboReset => &mut self.combo_reset,
        }
    }

    /// Schedule `kind` to fire at `now_ms + delay_ms`, cancelling any
    /// pending deadline in the slot first.
    pub fn arm(&mut self, kind: DeadlineKind, now_ms: u64, delay_ms: u64) {
        *self.slot_mut(kind) = Slot {
            fire_at: Some(now_ms + delay_ms),
            suspended_remaining: None,
        };
    }

    /// Cancel the pending deadline, if any. A cancelled deadline never fires.
    pub fn cancel(&mut self, kind: DeadlineKind) {
        *self.slot_mut(kind) = Slot::default();
    }

    pub fn cancel_all(&mut self) {
        for kind in ALL_KINDS {
            self.cancel(kind);
        }
    }

    pub fn is_armed(&self, kind: DeadlineKind) -> bool {
        let slot = self.slot(kind);
        slot.fire_at.is_some() || slot.suspended_remaining.is_some()
    }

    /// Take every deadline due at `now_ms`, earliest first. Taken deadlines
    /// are cleared; suspended slots are never due.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<DeadlineKind> {
        let mut due: Vec<(u64, DeadlineKind)> = Vec::new();
        for kind in ALL_KINDS {
            if let Some(fire_at) = self.slot(kind).fire_at
                && fire_at <= now_ms
            {
                self.cancel(kind);
                due.push((fire_at, kind));
            }
        }
        due.sort_by_key(|(fire_at, _)| *fire_at);
        due.into_iter().map(|(_, kind)| kind).collect()
    }

    /// Freeze all pending deadlines, recording how long each still had to
    /// run. Called on session pause.
    pub fn suspend(&mut self, now_ms: u64) {
        for kind in ALL_KINDS {
            let slot = self.slot_mut(kind);
            if let Some(fire_at) = slot.fire_at.take() {
                slot.suspended_remaining = Some(fire_at.saturating_sub(now_ms));
            }
        }
    }

    /// Re-arm every frozen deadline with its remaining delay. Called on
    /// session resume.
    pub fn resume(&mut self, now_ms: u64) {
        for kind in ALL_KINDS {
            let slot = self.slot_mut(kind);
            if let Some(remaining) = slot.suspended_remaining.take() {
                slot.fire_at = Some(now_ms + remaining);
            }
        }
    }
}
