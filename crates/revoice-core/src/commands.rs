// crates/revoice-core/src/commands.rs
//
// Every user action in ReVoice is expressed as an AppCommand.
// Panels emit these; app.rs processes them after the UI pass.
// Adding a new feature = add a variant here + one match arm in app.rs.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Video input ──────────────────────────────────────────────────────────
    /// A file chosen via the picker or dropped onto the window. Validation
    /// (the `video/*` check) happens in the handler — identically for both
    /// paths.
    SelectVideo(PathBuf),
    RemoveVideo,

    // ── Prompt ───────────────────────────────────────────────────────────────
    SetPrompt(String),

    // ── Sound selection ──────────────────────────────────────────────────────
    SelectPreset(String),
    UploadAudio(PathBuf),
    /// Start or stop audition playback of the current audio selection.
    ToggleAudition,

    // ── Enhancement ──────────────────────────────────────────────────────────
    /// The enhance / reprocess action. Runs validation, snapshots the
    /// inputs, and hands the spec to the worker on success.
    Enhance,
    /// Copy the current result file to `dest` (picked by the user in the
    /// save dialog).
    SaveResultTo(PathBuf),
}
