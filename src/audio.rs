//! Audio capability consumed by the session core
//!
//! The core only drives the music lifecycle (play/pause/resume/stop) and
//! fires one-shot effects; decoding and playback belong to the hosting
//! shell. Track completion travels the other way: the shell observes it
//! and calls [`Session::track_complete`](crate::sim::Session::track_complete).

use crate::currency::MusicTrack;

/// One-shot sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A note was flung
    Throw,
}

/// Music/SFX sink the session drives
pub trait MusicPlayer {
    /// Start the track from the beginning
    fn play(&mut self, track: MusicTrack);
    /// Pause, retaining the playback position
    fn pause(&mut self);
    /// Resume from the retained position
    fn resume(&mut self);
    /// Stop and discard the playback position
    fn stop(&mut self);
    /// Fire a one-shot effect
    fn effect(&mut self, effect: SoundEffect);
}

/// Silent player for headless shells and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl MusicPlayer for NullAudio {
    fn play(&mut self, track: MusicTrack) {
        log::debug!("audio: play {}", track.audio_key());
    }

    fn pause(&mut self) {
        log::debug!("audio: pause");
    }

    fn resume(&mut self) {
        log::debug!("audio: resume");
    }

    fn stop(&mut self) {
        log::debug!("audio: stop");
    }

    fn effect(&mut self, effect: SoundEffect) {
        log::debug!("audio: effect {effect:?}");
    }
}
