// src/app.rs (revoice-ui)
use revoice_core::commands::AppCommand;
use revoice_core::job::Trigger;
use revoice_core::media_types::MediaKind;
use revoice_core::state::{NoticeKind, SessionState};
use revoice_media::render::cleanup_result_temp;
use revoice_media::EnhanceWorker;
use crate::context::AppContext;
use crate::revoice_log;
use crate::theme::{configure_style, ACCENT, DARK_BORDER, GREEN_DIM, RED_DIM};
use crate::modules::{
    Panel,
    audition::AuditionModule,
    prompt::PromptModule,
    result::ResultModule,
    sound::SoundModule,
    upload::UploadModule,
};
use eframe::egui;
use std::path::PathBuf;
use std::time::Duration;

/// Toast lifetime before auto-expiry.
const NOTICE_TTL: Duration = Duration::from_secs(4);

// ── App ───────────────────────────────────────────────────────────────────────

pub struct ReVoiceApp {
    state:   SessionState,
    context: AppContext,
    // Panel modules as concrete types — eliminates per-frame name-string lookup
    // and makes typos a compile error instead of a silently blank panel.
    upload:  UploadModule,
    sound:   SoundModule,
    prompt:  PromptModule,
    result:  ResultModule,
    /// Stored separately so tick() calls the concrete method, not the trait default no-op.
    audition: AuditionModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<AppCommand>,
}

impl ReVoiceApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        Self {
            state:        SessionState::default(),
            context:      AppContext::new(EnhanceWorker::new()),
            upload:       UploadModule,
            sound:        SoundModule::new(),
            prompt:       PromptModule,
            result:       ResultModule,
            audition:     AuditionModule::new(),
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: AppCommand) {
        match cmd {
            // ── Inputs ───────────────────────────────────────────────────────
            AppCommand::SelectVideo(path) => {
                let size = file_size(&path);
                if let Err(e) = self.state.select_video(path, size) {
                    self.state.push_notice(
                        NoticeKind::Error,
                        "Invalid file type",
                        format!("{e}. Please upload a video file (MP4, MOV, AVI, etc.)."),
                    );
                }
            }
            AppCommand::RemoveVideo => {
                self.state.remove_video();
            }
            AppCommand::SetPrompt(text) => {
                self.state.set_prompt(text);
            }
            AppCommand::SelectPreset(id) => {
                if let Err(e) = self.state.select_preset(&id) {
                    revoice_log!("preset selection rejected: {e}");
                } else {
                    self.context.stop_audition();
                }
            }
            AppCommand::UploadAudio(path) => {
                let size = file_size(&path);
                match self.state.upload_audio(path, size) {
                    Ok(()) => self.context.stop_audition(),
                    Err(e) => self.state.push_notice(
                        NoticeKind::Error,
                        "Invalid file type",
                        format!("{e}. Please upload an audio file (MP3, WAV, AAC, etc.)."),
                    ),
                }
            }
            AppCommand::ToggleAudition => {
                if self.context.audition_requested {
                    self.context.stop_audition();
                } else {
                    self.context.audition_requested = true;
                }
            }

            // ── Job ──────────────────────────────────────────────────────────
            AppCommand::Enhance => {
                match self.state.trigger_enhance() {
                    Trigger::Started(spec) => {
                        revoice_log!("enhancement started — job={}", spec.job_id);
                        self.context.worker.start_enhance(spec);
                    }
                    Trigger::Rejected(failure) => {
                        self.state.push_notice(
                            NoticeKind::Error,
                            "Error",
                            failure.to_string(),
                        );
                    }
                    Trigger::Ignored => {}
                }
            }
            AppCommand::SaveResultTo(dest) => {
                let Some(result) = self.state.job.result() else { return };
                match std::fs::copy(&result.path, &dest) {
                    Ok(_) => self.state.push_notice(
                        NoticeKind::Success,
                        "Download started",
                        "Your enhanced video is being downloaded.",
                    ),
                    Err(e) => self.state.push_notice(
                        NoticeKind::Error,
                        "Download failed",
                        format!("Could not write {}: {e}", dest.display()),
                    ),
                }
            }
        }
    }

    fn poll_worker(&mut self, ctx: &egui::Context) {
        // ── Pre-frame housekeeping ────────────────────────────────────────────
        for path in self.state.pending_cleanup.drain(..) {
            cleanup_result_temp(&path);
        }

        // ── Dispatch queued worker updates into the job machine ───────────────
        self.context.ingest_job_updates(&mut self.state, ctx);

        // ── Expire stale toasts ───────────────────────────────────────────────
        self.state.notices.retain(|n| n.raised.elapsed() < NOTICE_TTL);
    }

    /// Dropped files go through the same selection boundary as the dialogs:
    /// video files replace the video input, audio files the audio selection,
    /// anything else raises a toast.
    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        for file in files {
            let Some(path) = file.path else { continue };
            match MediaKind::from_path(&path) {
                MediaKind::Video => self.process_command(AppCommand::SelectVideo(path)),
                MediaKind::Audio => self.process_command(AppCommand::UploadAudio(path)),
                MediaKind::Other => self.state.push_notice(
                    NoticeKind::Error,
                    "Invalid file type",
                    format!(
                        "{} is neither a video nor an audio file.",
                        path.file_name().unwrap_or_default().to_string_lossy(),
                    ),
                ),
            }
        }
    }

    fn show_notices(&self, ctx: &egui::Context) {
        if self.state.notices.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("notices"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for notice in &self.state.notices {
                    let accent = match notice.kind {
                        NoticeKind::Error   => RED_DIM,
                        NoticeKind::Success => GREEN_DIM,
                    };
                    egui::Frame::new()
                        .fill(crate::theme::DARK_BG_2)
                        .stroke(egui::Stroke::new(1.0, accent))
                        .corner_radius(egui::CornerRadius::same(4))
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(300.0);
                            ui.label(
                                egui::RichText::new(&notice.title)
                                    .size(12.0).strong().color(accent),
                            );
                            ui.label(egui::RichText::new(&notice.body).size(11.0));
                        });
                    ui.add_space(6.0);
                }
            });
        // Toasts expire on a timer, not on input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

fn file_size(path: &PathBuf) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for ReVoiceApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.worker.shutdown();
        self.context.stop_audition();
        for path in self.state.pending_cleanup.drain(..) {
            cleanup_result_temp(&path);
        }
        if let Some(result) = self.state.job.result() {
            cleanup_result_temp(&result.path);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.poll_worker(ctx);

        egui::TopBottomPanel::top("top_panel")
            .exact_height(44.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("⚡ ReVoice")
                            .strong().size(16.0).color(ACCENT),
                    );
                    ui.separator();
                    ui.label(
                        egui::RichText::new("AI-powered sound effects for your videos")
                            .size(12.0).weak(),
                    );

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            let running = self.state.job.is_running();
                            let label = if running {
                                "⏳ Processing…"
                            } else {
                                "⚡ Enhance Video"
                            };
                            let button = egui::Button::new(
                                egui::RichText::new(label).size(13.0).strong(),
                            )
                            .min_size(egui::vec2(150.0, 30.0));
                            if ui.add_enabled(self.state.can_enhance(), button)
                                .on_disabled_hover_text(
                                    "Needs a video and a non-empty prompt",
                                )
                                .clicked()
                            {
                                self.pending_cmds.push(AppCommand::Enhance);
                            }
                        },
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |cols| {
                    // Left: inputs, top to bottom.
                    cols[0].vertical(|ui| {
                        framed(ui, |ui| self.upload.ui(ui, &self.state, &mut self.pending_cmds));
                        ui.add_space(10.0);
                        framed(ui, |ui| self.sound.ui(ui, &self.state, &mut self.pending_cmds));
                        ui.add_space(10.0);
                        framed(ui, |ui| self.prompt.ui(ui, &self.state, &mut self.pending_cmds));
                    });
                    // Right: the result panel.
                    cols[1].vertical(|ui| {
                        framed(ui, |ui| self.result.ui(ui, &self.state, &mut self.pending_cmds));
                    });
                });
            });
        });

        self.show_notices(ctx);

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<AppCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }

        // ── Tick non-rendering modules (concrete calls bypass trait no-op) ────
        self.audition.tick(&self.state, &mut self.context);
        self.sound.tick(&self.state, &mut self.context);

        // Progress arrives on worker cadence; keep repainting so the bar and
        // the audition end-of-track check advance without user input.
        if self.state.job.is_running() || self.context.audition_sink.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Shared card chrome for the input panels.
fn framed(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(crate::theme::DARK_BG_1)
        .stroke(egui::Stroke::new(1.0, DARK_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
