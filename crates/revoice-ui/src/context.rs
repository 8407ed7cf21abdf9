// crates/revoice-ui/src/context.rs
//
// AppContext owns all runtime handles that are NOT part of SessionState.
// ReVoiceApp holds one of these plus a SessionState and the panel modules —
// nothing else.
//
//   AppContext
//     ├── worker           — the EnhanceWorker + its result channel
//     ├── audio_stream     — rodio OutputStream (must outlive the sink)
//     ├── audition_sink    — at most one Sink, managed by AuditionModule only
//     ├── audition_path    — which local file the sink is playing
//     └── audition_requested — the user's play/pause intent

use std::path::PathBuf;

use revoice_core::media_types::JobUpdate;
use revoice_core::state::{NoticeKind, SessionState};
use revoice_media::EnhanceWorker;
use rodio::{OutputStream, Sink};

use crate::revoice_log;

pub struct AppContext {
    pub worker: EnhanceWorker,

    // ── Audition (rodio) ─────────────────────────────────────────────────────
    // OutputStream MUST stay alive while the sink plays — dropping it stops
    // all audio. AuditionModule borrows it each tick via .mixer().
    pub audio_stream:       Option<OutputStream>,
    pub audition_sink:      Option<Sink>,
    pub audition_path:      Option<PathBuf>,
    pub audition_requested: bool,
}

impl AppContext {
    pub fn new(worker: EnhanceWorker) -> Self {
        // audio_stream is initialized lazily on the first tick() call.
        // Initializing here races with eframe/winit Win32 setup in
        // GUI-subsystem (double-click) mode — WASAPI init fails silently,
        // leaving audio broken for the entire session.
        Self {
            worker,
            audio_stream:       None,
            audition_sink:      None,
            audition_path:      None,
            audition_requested: false,
        }
    }

    /// Drop the sink and clear the play intent. Called on selection change,
    /// explicit stop, and track end.
    pub fn stop_audition(&mut self) {
        self.audition_sink = None;
        self.audition_path = None;
        self.audition_requested = false;
    }

    /// Drain the worker result channel into the state machine. Called once
    /// per frame from `app::poll_worker`.
    ///
    /// This is the single translation layer between raw worker output and
    /// UI-visible state. The job itself drops stale job_ids, so a result
    /// from a superseded run can never clobber a fresh one.
    pub fn ingest_job_updates(
        &mut self,
        state: &mut SessionState,
        ctx:   &egui::Context,
    ) {
        while let Ok(update) = self.worker.rx.try_recv() {
            match update {
                JobUpdate::Progress { job_id, pct } => {
                    state.job.apply_progress(job_id, pct);
                    ctx.request_repaint();
                }

                JobUpdate::Done { job_id, path } => {
                    revoice_log!("[job] {job_id} done → {}", path.display());
                    state.job.complete(job_id, path);
                    if state.job.result().is_some() {
                        state.push_notice(
                            NoticeKind::Success,
                            "Enhancement complete",
                            "Your video has been enhanced with the selected audio.",
                        );
                    }
                    ctx.request_repaint();
                }

                JobUpdate::Error { job_id, msg } => {
                    revoice_log!("[job] {job_id} failed: {msg}");
                    state.job.fail(job_id, msg);
                    if let Some(reason) = state.job.error_reason() {
                        state.push_notice(NoticeKind::Error, "Processing failed", reason);
                    }
                    ctx.request_repaint();
                }
            }
        }
    }
}
