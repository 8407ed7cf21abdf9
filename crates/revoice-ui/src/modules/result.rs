// crates/revoice-ui/src/modules/result.rs
//
// Result panel, driven entirely by the job state machine:
//
//   Idle        → "no result yet" placeholder
//   Validating  → transient, rendered same as Idle (it lasts one frame)
//   Running     → processing card: percentage, progress bar, hint copy
//   Completed   → result card + success banner + Reprocess / Download
//   Failed      → error banner with the failure reason, retriable
//
// Downloads default to a fixed filename; the user picks the directory in
// the save dialog.

use super::Panel;
use revoice_core::commands::AppCommand;
use revoice_core::job::JobState;
use revoice_core::state::SessionState;
use crate::helpers::format::truncate;
use crate::theme::{
    ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM, GREEN_DIM, RED_DIM,
};
use egui::{Color32, RichText, Stroke, Ui};
use rfd::FileDialog;

/// Fixed default name for downloaded results.
const DOWNLOAD_NAME: &str = "processed-video.mp4";

pub struct ResultModule;

impl Panel for ResultModule {
    fn name(&self) -> &str { "Result Video" }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<AppCommand>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("▶").size(14.0).color(ACCENT));
            ui.label(RichText::new("Result Video").size(13.0).strong());

            if state.job.state() == JobState::Completed {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("⬇ Download").size(11.0)).clicked() {
                        if let Some(dest) = FileDialog::new()
                            .set_file_name(DOWNLOAD_NAME)
                            .save_file()
                        {
                            cmd.push(AppCommand::SaveResultTo(dest));
                        }
                    }
                    if ui.button(RichText::new("🔄 Reprocess").size(11.0)).clicked() {
                        cmd.push(AppCommand::Enhance);
                    }
                });
            }
        });
        ui.add_space(8.0);

        match state.job.state() {
            JobState::Running => self.show_processing(ui, state),
            JobState::Completed => self.show_completed(ui, state),
            JobState::Failed => self.show_failed(ui, state),
            JobState::Idle | JobState::Validating => self.show_placeholder(ui),
        }
    }
}

impl ResultModule {
    fn show_placeholder(&self, ui: &mut Ui) {
        egui::Frame::new()
            .fill(DARK_BG_2)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(40))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("▶").size(30.0).color(DARK_TEXT_DIM));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("No Result Yet").size(13.0).color(DARK_TEXT_DIM),
                    );
                    ui.label(
                        RichText::new("Upload a video and configure settings to get started")
                            .size(11.0)
                            .color(DARK_TEXT_DIM),
                    );
                });
            });
    }

    fn show_processing(&self, ui: &mut Ui, state: &SessionState) {
        let pct = state.job.progress();
        let fraction = (pct / 100.0).clamp(0.0, 1.0);

        egui::Frame::new()
            .fill(DARK_BG_2)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("⏳").size(26.0).color(ACCENT));
                    ui.add_space(6.0);
                    ui.label(RichText::new("Processing Your Video").size(13.0).strong());
                    ui.label(
                        RichText::new("Adding sound effects and enhancing audio…")
                            .size(11.0)
                            .color(DARK_TEXT_DIM),
                    );
                });

                ui.add_space(14.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Progress").size(10.0).color(DARK_TEXT_DIM));
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label(
                                RichText::new(format!("{}%", pct.round() as u32))
                                    .size(10.0)
                                    .strong()
                                    .color(ACCENT),
                            );
                        },
                    );
                });

                // Progress bar — raw painter, fill tracks the fraction.
                let (bar_rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 8.0),
                    egui::Sense::hover(),
                );
                let p = ui.painter();
                p.rect_filled(bar_rect, 4.0, DARK_BG_3);
                if fraction > 0.0 {
                    let mut fill = bar_rect;
                    fill.max.x = bar_rect.min.x + bar_rect.width() * fraction;
                    p.rect_filled(fill, 4.0, ACCENT);
                }

                ui.add_space(6.0);
                ui.label(
                    RichText::new(
                        "This may take a few minutes depending on video length and complexity",
                    )
                    .size(9.0)
                    .color(DARK_TEXT_DIM),
                );
            });
    }

    fn show_completed(&self, ui: &mut Ui, state: &SessionState) {
        let Some(result) = state.job.result() else { return };
        let name = result.path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "result".into());

        egui::Frame::new()
            .fill(DARK_BG_3)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🎬").size(18.0).color(ACCENT));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(truncate(&name, 48)).size(12.0).strong());
                        ui.label(
                            RichText::new(format!("Playable at {}", result.path.display()))
                                .size(9.0)
                                .color(DARK_TEXT_DIM),
                        );
                    });
                });
            });

        ui.add_space(8.0);
        egui::Frame::new()
            .fill(Color32::from_rgb(30, 60, 40))
            .stroke(Stroke::new(1.0, GREEN_DIM))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new("Processing Complete").size(11.0).strong().color(GREEN_DIM),
                );
                ui.label(
                    RichText::new(
                        "Your video has been enhanced with the selected audio. \
                         Preview it above or download the final result.",
                    )
                    .size(10.0)
                    .color(DARK_TEXT_DIM),
                );
            });
    }

    fn show_failed(&self, ui: &mut Ui, state: &SessionState) {
        let reason = state.job.error_reason()
            .unwrap_or_else(|| "Unknown failure".into());

        egui::Frame::new()
            .fill(Color32::from_rgb(60, 25, 25))
            .stroke(Stroke::new(1.0, RED_DIM))
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Enhancement failed").size(12.0).strong().color(RED_DIM));
                ui.add_space(2.0);
                ui.label(RichText::new(&reason).size(11.0).color(RED_DIM));
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Fix the inputs and press Enhance to retry.")
                        .size(10.0)
                        .color(DARK_TEXT_DIM),
                );
            });
    }
}
