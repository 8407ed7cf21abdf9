// crates/revoice-core/src/presets.rs
//
// The fixed audio preset catalog. Eight entries, queried by id. The catalog
// is closed — an id that isn't here is a programming error on the caller's
// side, surfaced as SelectError::UnknownPresetId at the selection boundary.

use serde::{Deserialize, Serialize};

/// A canned audio track identified by id, shown with a display name and a
/// one-line description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundPreset {
    pub id:          &'static str,
    pub name:        &'static str,
    pub description: &'static str,
}

pub const PRESET_CATALOG: &[SoundPreset] = &[
    SoundPreset { id: "epic-orchestral",   name: "Epic Orchestral",   description: "Dramatic orchestral music" },
    SoundPreset { id: "ambient-nature",    name: "Ambient Nature",    description: "Peaceful nature sounds" },
    SoundPreset { id: "electronic-beat",   name: "Electronic Beat",   description: "Modern electronic music" },
    SoundPreset { id: "cinematic-tension", name: "Cinematic Tension", description: "Suspenseful background music" },
    SoundPreset { id: "upbeat-pop",        name: "Upbeat Pop",        description: "Energetic pop music" },
    SoundPreset { id: "vintage-jazz",      name: "Vintage Jazz",      description: "Classic jazz atmosphere" },
    SoundPreset { id: "sci-fi-ambient",    name: "Sci-Fi Ambient",    description: "Futuristic soundscape" },
    SoundPreset { id: "acoustic-guitar",   name: "Acoustic Guitar",   description: "Gentle acoustic melody" },
];

/// Look up a preset by id. Returns None for ids outside the catalog.
pub fn preset_by_id(id: &str) -> Option<&'static SoundPreset> {
    PRESET_CATALOG.iter().find(|p| p.id == id)
}

/// The (mock) remote stream URL for a preset. There is no backend — the URL
/// is display-only, but the mapping is fixed so `playback_source` stays
/// deterministic.
pub fn preset_stream_url(id: &str) -> String {
    format!("https://cdn.revoice.app/presets/{id}.mp3")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_entries_with_unique_ids() {
        assert_eq!(PRESET_CATALOG.len(), 8);
        for (i, a) in PRESET_CATALOG.iter().enumerate() {
            for b in &PRESET_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_finds_every_catalog_entry() {
        for p in PRESET_CATALOG {
            assert_eq!(preset_by_id(p.id), Some(p));
        }
    }

    #[test]
    fn lookup_rejects_unknown_id() {
        assert!(preset_by_id("dubstep-wobble").is_none());
        assert!(preset_by_id("").is_none());
    }

    #[test]
    fn stream_url_is_deterministic() {
        assert_eq!(
            preset_stream_url("vintage-jazz"),
            preset_stream_url("vintage-jazz"),
        );
        assert_eq!(
            preset_stream_url("epic-orchestral"),
            "https://cdn.revoice.app/presets/epic-orchestral.mp3",
        );
    }
}
