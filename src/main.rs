//! Money Toss entry point
//!
//! Headless demo shell: runs a scripted session at a fixed timestep and
//! logs the events the core emits. Stands in for the presentation shell
//! (menus, rendering, real audio), which consumes the same surface.

use money_toss::audio::NullAudio;
use money_toss::consts::SIM_DT;
use money_toss::physics::{ArcadePhysics, PhysicsWorld};
use money_toss::settings::{MemoryStore, SettingsStore};
use money_toss::sim::{Session, SessionEvent, SessionPhase};
use money_toss::{Rect, Settings, TrackList};

/// Demo track length; a real shell gets completion from its audio backend
const TRACK_MS: u64 = 2_500;

/// Frame duration for the demo loop
const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();
    log::info!("Money Toss (headless demo) starting...");

    let mut store = MemoryStore::new();
    // Simulate a stale blob from an old build; loading resets it
    store.set(Settings::STORAGE_KEY, r#"{"currency":"RON","musicTrack":"song2"}"#);
    let tracks = TrackList::default();
    let settings = Settings::load(&mut store, &tracks);
    settings.save(&mut store);

    let mut session = Session::new(0xC0FFEE, &settings, Rect::viewport());
    let mut physics = ArcadePhysics::new();
    let mut audio = NullAudio;

    // Scripted taps: a fast opening burst (combo), a quiet stretch (music
    // pauses), then a second burst that resumes the track.
    let script: &[(u64, f32, f32)] = &[
        (0, 180.0, 600.0),
        (200, 140.0, 560.0),
        (400, 220.0, 580.0),
        (600, 180.0, 540.0),
        (3200, 90.0, 600.0),
        (3400, 270.0, 610.0),
        (3600, 180.0, 590.0),
    ];

    let mut now: u64 = 0;
    let mut played_ms: u64 = 0;
    let mut next_throw = 0usize;

    while session.phase() != SessionPhase::Ended {
        while next_throw < script.len() && script[next_throw].0 <= now {
            let (_, x, y) = script[next_throw];
            session.throw(now, x, y, &mut physics, &mut audio);
            next_throw += 1;
        }

        physics.step(SIM_DT);
        session.update(now, &mut physics, &mut audio);

        for event in session.drain_events() {
            match event {
                SessionEvent::ScoreChanged(score) => log::info!("score: {score}"),
                SessionEvent::ComboTriggered(count) => log::info!("combo x{count}!"),
                SessionEvent::PauseStateChanged(paused) => log::info!("paused: {paused}"),
                SessionEvent::SessionEnded(score) => log::info!("game over, score {score}"),
                SessionEvent::ThrowFeedback => {}
            }
        }

        // The track only advances while it is audible
        if session.music_active() {
            played_ms += FRAME_MS;
            if played_ms >= TRACK_MS {
                session.track_complete(&mut audio);
            }
        }
        now += FRAME_MS;
    }

    for event in session.drain_events() {
        if let SessionEvent::SessionEnded(score) = event {
            log::info!("game over, score {score}");
        }
    }
    println!("Final score: {}", session.score());
}
