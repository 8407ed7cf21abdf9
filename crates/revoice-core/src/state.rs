// crates/revoice-core/src/state.rs
//
// SessionState owns the three user inputs (video, audio selection, prompt)
// plus the single EnhancementJob instance. Panels read it, emit AppCommands,
// and only app.rs mutates it — same discipline as any reducer.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::job::{EnhancementJob, Trigger};
use crate::media_types::MediaKind;
use crate::presets::preset_by_id;
use crate::prompt::Prompt;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Selection-boundary failures. Both are recovered locally: the offending
/// input is rejected and the existing selection is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("{name} is not a {} file", expected.label())]
    InvalidMediaType { name: String, expected: MediaKind },
    /// Defensive — the catalog is closed, so hitting this means a caller
    /// fabricated an id.
    #[error("unknown preset id `{0}`")]
    UnknownPresetId(String),
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// The currently selected local video file. Zero or one instance lives at a
/// time; re-selection replaces it wholesale. The path is the playable
/// preview reference — nothing is copied on selection, so removal releases
/// nothing beyond the struct itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInput {
    pub id:         Uuid,
    pub path:       PathBuf,
    pub name:       String,
    pub size_bytes: u64,
}

impl VideoInput {
    fn from_path(path: PathBuf, size_bytes: u64) -> Self {
        let name = path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self { id: Uuid::new_v4(), path, name, size_bytes }
    }
}

/// An uploaded local audio file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    pub path:       PathBuf,
    pub name:       String,
    pub size_bytes: u64,
}

/// The audio track to mix in — exactly one of a catalog preset or an
/// uploaded file. Selecting either discards the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioSelection {
    Preset { id: String },
    Upload(AudioFile),
}

impl AudioSelection {
    /// Display name: the preset's catalog name, or the upload's filename.
    pub fn display_name(&self) -> &str {
        match self {
            AudioSelection::Preset { id } => {
                preset_by_id(id).map(|p| p.name).unwrap_or(id)
            }
            AudioSelection::Upload(f) => &f.name,
        }
    }
}

/// Where audition playback reads from. Pure function of the selection value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioSource {
    /// Preset tracks stream from a fixed remote URL (display-only in this
    /// build — there is no backend to serve them).
    Stream(String),
    Local(PathBuf),
}

pub fn playback_source(sel: &AudioSelection) -> AudioSource {
    match sel {
        AudioSelection::Preset { id } => {
            AudioSource::Stream(crate::presets::preset_stream_url(id))
        }
        AudioSelection::Upload(f) => AudioSource::Local(f.path.clone()),
    }
}

// ── Notices ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient toast. Raised by app.rs, auto-expired after a few seconds.
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind:   NoticeKind,
    pub title:  String,
    pub body:   String,
    pub raised: std::time::Instant,
}

// ── SessionState ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionState {
    pub video:  Option<VideoInput>,
    pub audio:  Option<AudioSelection>,
    pub prompt: Prompt,

    /// The one job instance for the session.
    #[serde(skip)]
    pub job: EnhancementJob,

    /// Transient toasts (runtime-only).
    #[serde(skip)]
    pub notices: Vec<Notice>,

    /// Temp result files released by a re-trigger or replaced selection,
    /// queued for deletion. Drained each frame by app.rs.
    #[serde(skip)]
    pub pending_cleanup: Vec<PathBuf>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            video:           None,
            audio:           None,
            prompt:          Prompt::default(),
            job:             EnhancementJob::default(),
            notices:         Vec::new(),
            pending_cleanup: Vec::new(),
        }
    }
}

impl SessionState {
    /// Select a video file. Rejects anything that isn't `video/*` — the same
    /// check for the file-dialog and the drag-and-drop path. On success any
    /// previous VideoInput is replaced wholesale.
    pub fn select_video(&mut self, path: PathBuf, size_bytes: u64) -> Result<(), SelectError> {
        if MediaKind::from_path(&path) != MediaKind::Video {
            return Err(SelectError::InvalidMediaType {
                name:     file_name_of(&path),
                expected: MediaKind::Video,
            });
        }
        self.video = Some(VideoInput::from_path(path, size_bytes));
        Ok(())
    }

    /// Clear the video input. Idempotent.
    pub fn remove_video(&mut self) {
        self.video = None;
    }

    /// Set the audio selection to a catalog preset, discarding any upload.
    pub fn select_preset(&mut self, id: &str) -> Result<(), SelectError> {
        if preset_by_id(id).is_none() {
            return Err(SelectError::UnknownPresetId(id.to_string()));
        }
        self.audio = Some(AudioSelection::Preset { id: id.to_string() });
        Ok(())
    }

    /// Set the audio selection to an uploaded file, discarding any preset.
    /// On rejection the previous selection is untouched.
    pub fn upload_audio(&mut self, path: PathBuf, size_bytes: u64) -> Result<(), SelectError> {
        if MediaKind::from_path(&path) != MediaKind::Audio {
            return Err(SelectError::InvalidMediaType {
                name:     file_name_of(&path),
                expected: MediaKind::Audio,
            });
        }
        let name = file_name_of(&path);
        self.audio = Some(AudioSelection::Upload(AudioFile { path, name, size_bytes }));
        Ok(())
    }

    pub fn set_prompt(&mut self, s: String) {
        self.prompt.set_text(s);
    }

    /// The enhance action is callable iff a video is present, the trimmed
    /// prompt is non-empty, and no job is in flight.
    pub fn can_enhance(&self) -> bool {
        self.video.is_some() && !self.prompt.is_blank() && !self.job.is_running()
    }

    /// Run the trigger transition, capturing the snapshot and queueing the
    /// previous result file (if any) for deletion.
    pub fn trigger_enhance(&mut self) -> Trigger {
        let outcome = self.job.trigger(
            self.video.as_ref(),
            self.audio.as_ref(),
            &self.prompt,
        );
        if let Some(released) = self.job.take_discarded() {
            self.pending_cleanup.push(released);
        }
        outcome
    }

    pub fn push_notice(&mut self, kind: NoticeKind, title: &str, body: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            title:  title.to_string(),
            body:   body.into(),
            raised: std::time::Instant::now(),
        });
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_remove_restores_empty_state() {
        let mut s = SessionState::default();
        s.select_video(PathBuf::from("/tmp/holiday.mp4"), 1024).unwrap();
        assert!(s.video.is_some());
        s.remove_video();
        assert!(s.video.is_none());
        // Idempotent.
        s.remove_video();
        assert!(s.video.is_none());
    }

    #[test]
    fn reselection_replaces_wholesale() {
        let mut s = SessionState::default();
        s.select_video(PathBuf::from("/tmp/a.mp4"), 10).unwrap();
        let first_id = s.video.as_ref().unwrap().id;
        s.select_video(PathBuf::from("/tmp/b.webm"), 20).unwrap();
        let v = s.video.as_ref().unwrap();
        assert_eq!(v.name, "b.webm");
        assert_eq!(v.size_bytes, 20);
        assert_ne!(v.id, first_id);
    }

    #[test]
    fn non_video_select_is_rejected_without_state_change() {
        let mut s = SessionState::default();
        s.select_video(PathBuf::from("/tmp/a.mp4"), 10).unwrap();
        let err = s.select_video(PathBuf::from("/tmp/song.mp3"), 10).unwrap_err();
        assert!(matches!(err, SelectError::InvalidMediaType { .. }));
        assert_eq!(s.video.as_ref().unwrap().name, "a.mp4");
    }

    #[test]
    fn preset_selection_last_write_wins() {
        let mut s = SessionState::default();
        s.select_preset("epic-orchestral").unwrap();
        s.select_preset("ambient-nature").unwrap();
        assert_eq!(
            s.audio,
            Some(AudioSelection::Preset { id: "ambient-nature".into() }),
        );
    }

    #[test]
    fn preset_discards_prior_upload_and_vice_versa() {
        let mut s = SessionState::default();
        s.upload_audio(PathBuf::from("/tmp/track.wav"), 5).unwrap();
        s.select_preset("vintage-jazz").unwrap();
        assert!(matches!(s.audio, Some(AudioSelection::Preset { .. })));
        s.upload_audio(PathBuf::from("/tmp/other.ogg"), 7).unwrap();
        assert!(matches!(s.audio, Some(AudioSelection::Upload(_))));
    }

    #[test]
    fn unknown_preset_id_is_rejected() {
        let mut s = SessionState::default();
        assert_eq!(
            s.select_preset("lo-fi-beats"),
            Err(SelectError::UnknownPresetId("lo-fi-beats".into())),
        );
        assert!(s.audio.is_none());
    }

    #[test]
    fn non_audio_upload_leaves_selection_unchanged() {
        let mut s = SessionState::default();
        s.select_preset("upbeat-pop").unwrap();
        let err = s.upload_audio(PathBuf::from("/tmp/movie.mp4"), 5).unwrap_err();
        assert!(matches!(err, SelectError::InvalidMediaType { .. }));
        assert_eq!(s.audio, Some(AudioSelection::Preset { id: "upbeat-pop".into() }));
    }

    #[test]
    fn playback_source_is_pure_per_selection() {
        let preset = AudioSelection::Preset { id: "sci-fi-ambient".into() };
        assert_eq!(playback_source(&preset), playback_source(&preset));
        assert_eq!(
            playback_source(&preset),
            AudioSource::Stream("https://cdn.revoice.app/presets/sci-fi-ambient.mp3".into()),
        );

        let upload = AudioSelection::Upload(AudioFile {
            path:       PathBuf::from("/tmp/track.wav"),
            name:       "track.wav".into(),
            size_bytes: 9,
        });
        assert_eq!(
            playback_source(&upload),
            AudioSource::Local(PathBuf::from("/tmp/track.wav")),
        );
    }

    #[test]
    fn can_enhance_requires_video_and_prompt() {
        let mut s = SessionState::default();
        assert!(!s.can_enhance());
        s.select_video(PathBuf::from("/tmp/a.mp4"), 10).unwrap();
        assert!(!s.can_enhance());
        s.set_prompt("   ".into());
        assert!(!s.can_enhance());
        s.set_prompt("make it epic".into());
        assert!(s.can_enhance());
        s.remove_video();
        assert!(!s.can_enhance());
    }
}
