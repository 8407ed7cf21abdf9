// crates/revoice-ui/src/modules/sound.rs
//
// Sound selection panel: a preset catalog tab and an upload tab, feeding
// the mutually-exclusive AudioSelection. The summary card at the bottom
// shows whatever is selected and hosts the audition play/pause toggle.

use super::Panel;
use revoice_core::commands::AppCommand;
use revoice_core::media_types::AUDIO_EXTENSIONS;
use revoice_core::presets::{preset_by_id, PRESET_CATALOG};
use revoice_core::state::{playback_source, AudioSelection, AudioSource, SessionState};
use crate::helpers::format::{format_size, truncate};
use crate::theme::{ACCENT, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM};
use egui::{RichText, Stroke, Ui};
use rfd::FileDialog;

#[derive(Clone, Copy, PartialEq)]
enum SoundTab {
    Presets,
    Upload,
}

pub struct SoundModule {
    tab: SoundTab,
    /// Mirror of the audition state, refreshed in tick() — ui() only sees
    /// SessionState, but the sink lives in AppContext.
    playing: bool,
}

impl SoundModule {
    pub fn new() -> Self {
        Self { tab: SoundTab::Presets, playing: false }
    }
}

impl Panel for SoundModule {
    fn name(&self) -> &str { "Sound Selection" }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<AppCommand>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🎵").size(14.0).color(ACCENT));
            ui.label(RichText::new("Sound Selection").size(13.0).strong());
        });
        ui.add_space(6.0);

        // ── Tabs ──────────────────────────────────────────────────────────
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, SoundTab::Presets, "Preset Sounds");
            ui.selectable_value(&mut self.tab, SoundTab::Upload, "Upload Audio");
        });
        ui.add_space(6.0);

        match self.tab {
            SoundTab::Presets => {
                let selected_name = match &state.audio {
                    Some(AudioSelection::Preset { id }) => {
                        preset_by_id(id).map(|p| p.name).unwrap_or("?")
                    }
                    _ => "Choose a preset sound…",
                };
                egui::ComboBox::from_id_salt("preset_select")
                    .selected_text(selected_name)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for preset in PRESET_CATALOG {
                            let is_selected = matches!(
                                &state.audio,
                                Some(AudioSelection::Preset { id }) if id == preset.id
                            );
                            if ui.selectable_label(is_selected, preset.name)
                                .on_hover_text(preset.description)
                                .clicked()
                            {
                                cmd.push(AppCommand::SelectPreset(preset.id.to_string()));
                            }
                        }
                    });
            }
            SoundTab::Upload => {
                ui.vertical_centered(|ui| {
                    if ui.button(RichText::new("Choose Audio File").size(11.0)).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Audio", AUDIO_EXTENSIONS)
                            .pick_file()
                        {
                            cmd.push(AppCommand::UploadAudio(path));
                        }
                    }
                    ui.add_space(2.0);
                    ui.label(
                        RichText::new("Supports MP3, WAV, AAC, OGG")
                            .size(10.0)
                            .color(DARK_TEXT_DIM),
                    );
                });
            }
        }

        // ── Selection summary + audition toggle ───────────────────────────
        if let Some(selection) = &state.audio {
            ui.add_space(8.0);
            egui::Frame::new()
                .fill(DARK_BG_3)
                .stroke(Stroke::new(1.0, DARK_BORDER))
                .corner_radius(egui::CornerRadius::same(5))
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🔊").size(14.0).color(ACCENT));
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(truncate(selection.display_name(), 36))
                                    .size(12.0)
                                    .strong(),
                            );
                            match selection {
                                AudioSelection::Upload(file) => {
                                    ui.label(
                                        RichText::new(format_size(file.size_bytes))
                                            .size(10.0)
                                            .color(DARK_TEXT_DIM),
                                    );
                                }
                                AudioSelection::Preset { .. } => {
                                    if let AudioSource::Stream(url) = playback_source(selection) {
                                        ui.label(
                                            RichText::new(url).size(9.0).color(DARK_TEXT_DIM),
                                        );
                                    }
                                }
                            }
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                // Audition is only possible for local files;
                                // preset tracks live behind a URL with no
                                // backend to serve them.
                                let playable =
                                    matches!(selection, AudioSelection::Upload(_));
                                let icon = if self.playing { "⏸" } else { "▶" };
                                let btn = ui.add_enabled(
                                    playable,
                                    egui::Button::new(RichText::new(icon).size(11.0)),
                                );
                                if playable {
                                    if btn.clicked() {
                                        cmd.push(AppCommand::ToggleAudition);
                                    }
                                } else {
                                    btn.on_hover_text("Preset preview requires a backend");
                                }
                            },
                        );
                    });
                });
        }
    }

    fn tick(&mut self, _state: &SessionState, ctx: &mut crate::context::AppContext) {
        self.playing = ctx.audition_requested && ctx.audition_sink.is_some();
    }
}
