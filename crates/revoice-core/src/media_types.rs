// crates/revoice-core/src/media_types.rs
//
// Types that flow across the channel between revoice-media and revoice-ui,
// plus media-family classification. No egui, no rodio — just plain data.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media family of a local file, decided by extension.
///
/// Desktop files carry no declared MIME type, so the family is sniffed from
/// the extension the same way for every input path — the file dialog and
/// drag-and-drop go through the identical check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Audio,
    Other,
}

/// Extensions accepted as video input. Shown in the picker filter and the
/// upload hint copy.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm", "mkv", "m4v"];

/// Extensions accepted as audio upload.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "flac", "ogg", "m4a"];

impl MediaKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension()
            .unwrap_or_default()
            .to_string_lossy()
            .to_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Audio
        } else {
            MediaKind::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Other => "unknown",
        }
    }
}

/// Results sent from the EnhanceWorker thread to the UI.
///
/// Every variant carries the job_id it belongs to so stale updates from a
/// superseded run can be dropped on ingest.
#[derive(Debug, Clone)]
pub enum JobUpdate {
    /// Fabricated progress percentage, [0, 95] while the job is in flight.
    Progress { job_id: Uuid, pct: f32 },
    /// The job finished; `path` is the placeholder result file in the OS
    /// temp dir, playable as-is.
    Done { job_id: Uuid, path: PathBuf },
    /// The backend failed. Only produced when the placeholder render itself
    /// errors (source removed mid-job), but the UI treats it as any real
    /// backend failure: Failed state, retriable.
    Error { job_id: Uuid, msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extensions_classify_as_video() {
        for ext in VIDEO_EXTENSIONS {
            let p = PathBuf::from(format!("clip.{ext}"));
            assert_eq!(MediaKind::from_path(&p), MediaKind::Video, "{ext}");
        }
        // Case-insensitive.
        assert_eq!(MediaKind::from_path(Path::new("CLIP.MP4")), MediaKind::Video);
    }

    #[test]
    fn audio_extensions_classify_as_audio() {
        for ext in AUDIO_EXTENSIONS {
            let p = PathBuf::from(format!("track.{ext}"));
            assert_eq!(MediaKind::from_path(&p), MediaKind::Audio, "{ext}");
        }
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(MediaKind::from_path(Path::new("notes.txt")), MediaKind::Other);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), MediaKind::Other);
        assert_eq!(MediaKind::from_path(Path::new("archive.tar.gz")), MediaKind::Other);
    }
}
