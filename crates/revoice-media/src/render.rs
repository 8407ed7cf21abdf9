// crates/revoice-media/src/render.rs
//
// Placeholder "rendering" and temp file cleanup.
//
// There is no real backend, so the output of a run is a byte-for-byte copy
// of the snapshot's input video, written to the OS temp dir. The contract
// upheld for callers is only that the result is *some* playable media
// reference — nothing about it reflects the prompt or the audio selection,
// and nothing downstream may assume otherwise.

use std::path::{Path, PathBuf};

use anyhow::Context;

use revoice_core::job::EnhanceSpec;

/// Filename prefix for result temp files. Cleanup refuses to touch anything
/// that doesn't carry it.
const RESULT_PREFIX: &str = "revoice_result_";

/// Copy the snapshot's video into a temp result file named after the job.
/// Fails if the source vanished between trigger and completion — the one
/// genuine backend error this build can produce.
pub fn render_placeholder(spec: &EnhanceSpec) -> anyhow::Result<PathBuf> {
    let ext = spec.video_path.extension()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let file_name = if ext.is_empty() {
        format!("{RESULT_PREFIX}{}", spec.job_id)
    } else {
        format!("{RESULT_PREFIX}{}.{ext}", spec.job_id)
    };
    let out = std::env::temp_dir().join(file_name);

    std::fs::copy(&spec.video_path, &out)
        .with_context(|| format!("copying {} to {}", spec.video_path.display(), out.display()))?;
    Ok(out)
}

/// Delete a result temp file released by a re-trigger.
/// Only deletes files matching the `revoice_result_*` pattern in the OS temp
/// dir — a wrong path queued by mistake is left alone.
pub fn cleanup_result_temp(path: &Path) {
    let in_temp = path.parent()
        .map(|p| p == std::env::temp_dir())
        .unwrap_or(false);
    let name = path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if in_temp && name.starts_with(RESULT_PREFIX) {
        if let Err(e) = std::fs::remove_file(path) {
            eprintln!("[render] cleanup_result_temp: {e}");
        }
    }
}
