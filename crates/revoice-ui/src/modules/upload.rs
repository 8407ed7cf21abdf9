// crates/revoice-ui/src/modules/upload.rs
//
// Video input panel: pick a file via the dialog or drop one on the window.
// Both paths land on AppCommand::SelectVideo, where the `video/*` check is
// applied once for everyone.

use super::Panel;
use revoice_core::commands::AppCommand;
use revoice_core::media_types::VIDEO_EXTENSIONS;
use revoice_core::state::SessionState;
use crate::helpers::format::{format_size, truncate};
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{RichText, Stroke, Ui};
use rfd::FileDialog;

pub struct UploadModule;

impl Panel for UploadModule {
    fn name(&self) -> &str { "Video Input" }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<AppCommand>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🎬").size(14.0).color(ACCENT));
            ui.label(RichText::new("Video Input").size(13.0).strong());
        });
        ui.add_space(6.0);

        match &state.video {
            Some(video) => {
                // ── Selected-file card ────────────────────────────────────
                egui::Frame::new()
                    .fill(DARK_BG_3)
                    .stroke(Stroke::new(1.0, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(5))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("🎬").size(16.0).color(ACCENT));
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(truncate(&video.name, 40)).size(12.0).strong(),
                                );
                                ui.label(
                                    RichText::new(format_size(video.size_bytes))
                                        .size(10.0)
                                        .color(DARK_TEXT_DIM),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button(RichText::new("✕").size(11.0))
                                        .on_hover_text("Remove video")
                                        .clicked()
                                    {
                                        cmd.push(AppCommand::RemoveVideo);
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Preview: {}", video.path.display()))
                        .size(9.0)
                        .color(DARK_TEXT_DIM),
                );
            }
            None => {
                // ── Drop zone ─────────────────────────────────────────────
                egui::Frame::new()
                    .fill(DARK_BG_2)
                    .stroke(Stroke::new(1.0, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(5))
                    .inner_margin(egui::Margin::same(18))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("📥").size(26.0));
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new("Drag & drop your video anywhere in the window")
                                    .size(12.0),
                            );
                            ui.add_space(6.0);
                            if ui.button(RichText::new("Browse…").size(11.0)).clicked() {
                                if let Some(path) = FileDialog::new()
                                    .add_filter("Video", VIDEO_EXTENSIONS)
                                    .pick_file()
                                {
                                    cmd.push(AppCommand::SelectVideo(path));
                                }
                            }
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new("Supports MP4, MOV, AVI, WebM")
                                    .size(10.0)
                                    .color(DARK_TEXT_DIM),
                            );
                        });
                    });
            }
        }
    }
}
