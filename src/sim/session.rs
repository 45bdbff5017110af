//! Session state machine
//!
//! Owns score, the combo streak, the music-activity lifecycle and the
//! end-of-session transition. All operations take the current clock in
//! milliseconds plus the capability seams they touch; every transition is
//! serialized on the caller's single logical event queue, so a throw's
//! timer re-arm is applied atomically with its score/combo update.
//!
//! Phases: `Idle → Active ⇄ Paused → Ended` (terminal). The session ends
//! exactly when the selected track finishes playing, or when the hosting
//! shell forces it; there is no score- or count-based ending.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Rect;
use crate::audio::{MusicPlayer, SoundEffect};
use crate::consts::*;
use crate::currency::{CurrencyDefinition, MusicTrack};
use crate::physics::PhysicsWorld;
use crate::settings::Settings;
use crate::sim::note::Note;
use crate::sim::timers::{DeadlineKind, Deadlines};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Scene entered, nothing thrown yet; music has not started
    Idle,
    /// At least one throw happened
    Active,
    /// Frozen; only `resume` leaves this phase
    Paused,
    /// Track finished (or the shell forced an end); terminal
    Ended,
}

/// Events the session emits for the presentation shell, synchronously
/// within the operation that caused them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    ScoreChanged(u64),
    /// A combo display cue; carries the streak length
    ComboTriggered(u32),
    SessionEnded(u64),
    PauseStateChanged(bool),
    /// Cosmetic cue for throw feedback (sound already played, shake etc.)
    ThrowFeedback,
}

/// One play-through from first throw to track completion
#[derive(Debug)]
pub struct Session {
    viewport: Rect,
    currency: &'static CurrencyDefinition,
    track: MusicTrack,
    phase: SessionPhase,
    score: u64,
    combo: u32,
    /// Track has been started at least once (a later `resume` keeps the
    /// retained position instead of restarting from zero)
    music_started: bool,
    /// Music is currently audible
    music_active: bool,
    deadlines: Deadlines,
    /// Live notes, in spawn order
    notes: Vec<Note>,
    next_note_id: u32,
    rng: Pcg32,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(seed: u64, settings: &Settings, viewport: Rect) -> Self {
        Self {
            viewport,
            currency: CurrencyDefinition::get(settings.currency),
            track: settings.music_track,
            phase: SessionPhase::Idle,
            score: 0,
            combo: 0,
            music_started: false,
            music_active: false,
            deadlines: Deadlines::new(),
            notes: Vec::new(),
            next_note_id: 1,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn music_active(&self) -> bool {
        self.music_active
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn currency(&self) -> &'static CurrencyDefinition {
        self.currency
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fling a note from `(x, y)`. Silently rejected while paused or after
    /// the session ended. The first throw of a session (or the first after
    /// an inactivity pause) brings the music up; every throw re-arms both
    /// deadlines, so a deadline sharing this tick is cancelled before it
    /// can fire.
    pub fn throw(
        &mut self,
        now_ms: u64,
        x: f32,
        y: f32,
        physics: &mut dyn PhysicsWorld,
        audio: &mut dyn MusicPlayer,
    ) {
        match self.phase {
            SessionPhase::Paused | SessionPhase::Ended => return,
            SessionPhase::Idle => self.phase = SessionPhase::Active,
            SessionPhase::Active => {}
        }

        let origin = Vec2::new(x, y);
        let handle = physics.spawn(x, y);
        let id = self.next_note_id;
        self.next_note_id += 1;
        let note = Note::spawn(&mut self.rng, id, handle, origin, self.currency);
        note.launch(&mut self.rng, physics);

        audio.effect(SoundEffect::Throw);

        // Start or resume music, then push the inactivity deadline out
        if !self.music_active {
            if self.music_started {
                audio.resume();
            } else {
                audio.play(self.track);
                self.music_started = true;
            }
            self.music_active = true;
        }
        self.deadlines
            .arm(DeadlineKind::MusicInactivity, now_ms, MUSIC_INACTIVITY_MS);

        // Score is taken at throw time, while the tracked peak still equals
        // the origin; the note's eventual flight height never re-enters it.
        self.score += u64::from(note.score_value(self.viewport.height));
        self.events.push(SessionEvent::ScoreChanged(self.score));

        self.combo += 1;
        if self.combo >= COMBO_THRESHOLD {
            self.score += u64::from(self.combo * COMBO_BONUS_PER_THROW);
            self.events.push(SessionEvent::ComboTriggered(self.combo));
            self.events.push(SessionEvent::ScoreChanged(self.score));
        }
        self.deadlines
            .arm(DeadlineKind::ComboReset, now_ms, COMBO_RESET_MS);

        self.events.push(SessionEvent::ThrowFeedback);
        self.notes.push(note);
    }

    /// Per-frame update: fire due deadlines, then tick every live note with
    /// its current physics position and compact the removals. No-op while
    /// paused or ended.
    pub fn update(
        &mut self,
        now_ms: u64,
        physics: &mut dyn PhysicsWorld,
        audio: &mut dyn MusicPlayer,
    ) {
        match self.phase {
            SessionPhase::Paused | SessionPhase::Ended => return,
            _ => {}
        }

        for kind in self.deadlines.take_due(now_ms) {
            match kind {
                DeadlineKind::MusicInactivity => {
                    if self.music_active {
                        audio.pause();
                        self.music_active = false;
                        log::debug!("music paused after {MUSIC_INACTIVITY_MS} ms of inactivity");
                    }
                }
                DeadlineKind::ComboReset => {
                    self.combo = 0;
                }
            }
        }

        // Mark first, compact second: removal during iteration must never
        // skip or double-visit a note.
        for note in &mut self.notes {
            match physics.position(note.handle) {
                Some(pos) => note.tick(pos, &self.viewport),
                None => note.alive = false,
            }
        }
        for note in self.notes.iter().filter(|n| !n.alive) {
            physics.destroy(note.handle);
        }
        self.notes.retain(|n| n.alive);
    }

    /// Freeze the session. Music pauses at its current offset and both
    /// deadlines stop counting down. Valid only from `Active`.
    pub fn pause(&mut self, now_ms: u64, audio: &mut dyn MusicPlayer) {
        if self.phase != SessionPhase::Active {
            return;
        }
        self.phase = SessionPhase::Paused;
        if self.music_active {
            audio.pause();
        }
        self.deadlines.suspend(now_ms);
        self.events.push(SessionEvent::PauseStateChanged(true));
    }

    /// Reverse of [`pause`](Self::pause). Valid only from `Paused`.
    pub fn resume(&mut self, now_ms: u64, audio: &mut dyn MusicPlayer) {
        if self.phase != SessionPhase::Paused {
            return;
        }
        self.phase = SessionPhase::Active;
        if self.music_active {
            audio.resume();
        }
        self.deadlines.resume(now_ms);
        self.events.push(SessionEvent::PauseStateChanged(false));
    }

    /// Shell callback: the selected track played to completion
    pub fn track_complete(&mut self, audio: &mut dyn MusicPlayer) {
        self.end(audio);
    }

    /// Finish the session and report the final score. Idempotent: once
    /// ended, nothing mutates the score again.
    pub fn end(&mut self, audio: &mut dyn MusicPlayer) {
        if self.phase == SessionPhase::Ended {
            return;
        }
        self.deadlines.cancel_all();
        audio.stop();
        self.music_started = false;
        self.music_active = false;
        self.phase = SessionPhase::Ended;
        log::info!("session ended, final score {}", self.score);
        self.events.push(SessionEvent::SessionEnded(self.score));
    }

    /// Tear down all live notes and return to `Idle` with a zero score.
    pub fn restart(&mut self, physics: &mut dyn PhysicsWorld, audio: &mut dyn MusicPlayer) {
        for note in &self.notes {
            physics.destroy(note.handle);
        }
        self.notes.clear();
        self.deadlines.cancel_all();
        audio.stop();
        self.score = 0;
        self.combo = 0;
        self.music_started = false;
        self.music_active = false;
        self.phase = SessionPhase::Idle;
        self.events.push(SessionEvent::ScoreChanged(0));
    }
}
