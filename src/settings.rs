//! Player preferences persisted across sessions
//!
//! The blob format is a small JSON object (`{"currency":"BGN",
//! "musicTrack":"song1"}`). Loading is fail-safe: any parse error, missing
//! field, or value outside the known domain discards the stored blob and
//! returns defaults. Partially trusting corrupted state is judged worse
//! than a clean reset.

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, MusicTrack, TrackList};

/// Key-value storage seam, durable across process restarts.
/// Injected rather than reached for ambiently so tests and shells can
/// supply their own backing store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and the headless demo shell
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Selected currency
    pub currency: CurrencyCode,
    /// Selected background track
    pub music_track: MusicTrack,
}

impl Settings {
    /// Storage key for the settings blob
    pub const STORAGE_KEY: &'static str = "gameSettings";

    /// Load settings from the store. On any invalidity the blob is removed
    /// and defaults are returned; a valid blob whose track is no longer in
    /// `tracks` is treated the same way.
    pub fn load(store: &mut dyn SettingsStore, tracks: &TrackList) -> Self {
        let Some(blob) = store.get(Self::STORAGE_KEY) else {
            log::info!("No stored settings, using defaults");
            return Self::default_for(tracks);
        };

        match serde_json::from_str::<Settings>(&blob) {
            Ok(settings) if tracks.contains(settings.music_track) => {
                log::info!(
                    "Loaded settings: currency={} track={}",
                    settings.currency.as_str(),
                    settings.music_track.id()
                );
                settings
            }
            Ok(settings) => {
                log::warn!(
                    "Stored track {} is not available, resetting settings",
                    settings.music_track.id()
                );
                store.remove(Self::STORAGE_KEY);
                Self::default_for(tracks)
            }
            Err(err) => {
                log::warn!("Invalid settings blob ({err}), resetting to defaults");
                store.remove(Self::STORAGE_KEY);
                Self::default_for(tracks)
            }
        }
    }

    /// Defaults: BGN plus the first available track
    pub fn default_for(tracks: &TrackList) -> Self {
        Self {
            currency: CurrencyCode::default(),
            music_track: tracks.first(),
        }
    }

    /// Persist the settings blob
    pub fn save(&self, store: &mut dyn SettingsStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}
