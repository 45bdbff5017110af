//! Currency catalog and music track configuration
//!
//! Static registry of the playable currencies (denominations and their
//! display assets) and the list of selectable background tracks.

use serde::{Deserialize, Serialize};

/// Known currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Bulgarian lev
    #[default]
    #[serde(rename = "BGN")]
    Bgn,
    /// Euro
    #[serde(rename = "EUR")]
    Eur,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Bgn => "BGN",
            CurrencyCode::Eur => "EUR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BGN" => Some(CurrencyCode::Bgn),
            "EUR" => Some(CurrencyCode::Eur),
            _ => None,
        }
    }
}

/// A currency's banknote set and display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDefinition {
    pub code: CurrencyCode,
    pub symbol: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    /// Note face values, ascending
    pub denominations: &'static [u32],
    /// Texture keys, aligned 1:1 with `denominations`
    pub asset_keys: &'static [&'static str],
    /// Fill color for generated placeholder art (0xRRGGBB)
    pub placeholder_color: u32,
}

const BGN: CurrencyDefinition = CurrencyDefinition {
    code: CurrencyCode::Bgn,
    symbol: "лв",
    name: "Български лев",
    flag: "🇧🇬",
    denominations: &[1, 5, 10, 20, 50, 100],
    asset_keys: &["bgn_1", "bgn_5", "bgn_10", "bgn_20", "bgn_50", "bgn_100"],
    placeholder_color: 0x9C27B0,
};

const EUR: CurrencyDefinition = CurrencyDefinition {
    code: CurrencyCode::Eur,
    symbol: "€",
    name: "Евро",
    flag: "🇪🇺",
    denominations: &[5, 10, 20, 50, 100, 200, 500],
    asset_keys: &[
        "eur_5", "eur_10", "eur_20", "eur_50", "eur_100", "eur_200", "eur_500",
    ],
    placeholder_color: 0x2196F3,
};

/// All known currencies
pub const CURRENCIES: &[CurrencyDefinition] = &[BGN, EUR];

impl CurrencyDefinition {
    /// Look up a currency by its code
    pub fn get(code: CurrencyCode) -> &'static CurrencyDefinition {
        match code {
            CurrencyCode::Bgn => &BGN,
            CurrencyCode::Eur => &EUR,
        }
    }

    /// Resolve a code string, falling back to BGN on anything unknown.
    /// Never fails: the fallback is logged, not surfaced.
    pub fn resolve(code: &str) -> &'static CurrencyDefinition {
        match CurrencyCode::from_str(code) {
            Some(code) => Self::get(code),
            None => {
                log::warn!("Unknown currency code {code:?}, falling back to BGN");
                &BGN
            }
        }
    }

    /// Number of distinct banknotes
    pub fn note_count(&self) -> usize {
        debug_assert_eq!(self.denominations.len(), self.asset_keys.len());
        self.denominations.len()
    }

    /// Art for the note at `index`, substituting generated placeholder art
    /// when the texture for its asset key failed to load. Gameplay never
    /// depends on whether the real image was available.
    pub fn note_art(&self, index: usize, textures: &dyn TextureLookup) -> NoteArt {
        let key = self.asset_keys[index];
        if textures.exists(key) {
            NoteArt::Image { key }
        } else {
            log::warn!("Missing texture {key:?}, generating placeholder");
            NoteArt::Placeholder {
                label: format!("{}{}", self.denominations[index], self.symbol),
                color: self.placeholder_color,
            }
        }
    }
}

/// Asset availability seam; the presentation shell knows what loaded
pub trait TextureLookup {
    fn exists(&self, key: &str) -> bool;
}

/// Display representation for a banknote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteArt {
    /// Loaded texture
    Image { key: &'static str },
    /// Generated stand-in bearing the note's face value
    Placeholder { label: String, color: u32 },
}

/// A selectable background music track (`song1`, `song2`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MusicTrack(pub u32);

impl MusicTrack {
    /// Track identifier as stored in settings
    pub fn id(&self) -> String {
        format!("song{}", self.0)
    }

    /// Audio asset key. The first track predates the numbering scheme.
    pub fn audio_key(&self) -> String {
        if self.0 == 1 {
            "bgMusic".to_string()
        } else {
            format!("bgMusic{}", self.0)
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        let num = id.strip_prefix("song")?.parse::<u32>().ok()?;
        Some(MusicTrack(num))
    }
}

impl Default for MusicTrack {
    fn default() -> Self {
        MusicTrack(1)
    }
}

impl TryFrom<String> for MusicTrack {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        MusicTrack::parse(&s).ok_or_else(|| format!("invalid music track {s:?}"))
    }
}

impl From<MusicTrack> for String {
    fn from(t: MusicTrack) -> String {
        t.id()
    }
}

/// The set of tracks offered by this build. A plain runtime list so builds
/// can ship any number of songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackList {
    tracks: Vec<MusicTrack>,
}

impl Default for TrackList {
    fn default() -> Self {
        Self {
            tracks: (1..=7).map(MusicTrack).collect(),
        }
    }
}

impl TrackList {
    pub fn new(tracks: Vec<MusicTrack>) -> Self {
        Self { tracks }
    }

    pub fn contains(&self, track: MusicTrack) -> bool {
        self.tracks.contains(&track)
    }

    pub fn tracks(&self) -> &[MusicTrack] {
        &self.tracks
    }

    /// Default selection when settings are missing or invalid
    pub fn first(&self) -> MusicTrack {
        self.tracks.first().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoTextures;
    impl TextureLookup for NoTextures {
        fn exists(&self, _key: &str) -> bool {
            false
        }
    }

    struct AllTextures;
    impl TextureLookup for AllTextures {
        fn exists(&self, _key: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_denominations_align_with_assets() {
        for def in CURRENCIES {
            assert!(def.note_count() >= 1);
            assert_eq!(def.denominations.len(), def.asset_keys.len());
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_bgn() {
        assert_eq!(CurrencyDefinition::resolve("RON").code, CurrencyCode::Bgn);
        assert_eq!(CurrencyDefinition::resolve("USD").code, CurrencyCode::Bgn);
        assert_eq!(CurrencyDefinition::resolve("EUR").code, CurrencyCode::Eur);
    }

    #[test]
    fn test_note_art_placeholder_carries_value() {
        let eur = CurrencyDefinition::get(CurrencyCode::Eur);
        assert_eq!(
            eur.note_art(0, &AllTextures),
            NoteArt::Image { key: "eur_5" }
        );
        match eur.note_art(2, &NoTextures) {
            NoteArt::Placeholder { label, color } => {
                assert_eq!(label, "20€");
                assert_eq!(color, 0x2196F3);
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_music_track_keys() {
        assert_eq!(MusicTrack(1).audio_key(), "bgMusic");
        assert_eq!(MusicTrack(4).audio_key(), "bgMusic4");
        assert_eq!(MusicTrack::parse("song3"), Some(MusicTrack(3)));
        assert_eq!(MusicTrack::parse("track3"), None);
        assert_eq!(MusicTrack::parse("song"), None);
    }

    #[test]
    fn test_track_list_membership() {
        let tracks = TrackList::default();
        assert!(tracks.contains(MusicTrack(7)));
        assert!(!tracks.contains(MusicTrack(8)));
        assert_eq!(tracks.first(), MusicTrack(1));

        let short = TrackList::new(vec![MusicTrack(2), MusicTrack(5)]);
        assert!(!short.contains(MusicTrack(1)));
        assert_eq!(short.first(), MusicTrack(2));
    }
}
