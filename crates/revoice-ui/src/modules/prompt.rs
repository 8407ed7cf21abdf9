// crates/revoice-ui/src/modules/prompt.rs
//
// Prompt panel: bounded free text plus suggestion chips. The 500-char cap
// is enforced in revoice-core (set_prompt truncates); char_limit here only
// keeps the widget from letting the user type past it in the first place.

use super::Panel;
use revoice_core::commands::AppCommand;
use revoice_core::prompt::{MAX_PROMPT_CHARS, SUGGESTED_PROMPTS};
use revoice_core::state::SessionState;
use crate::theme::{ACCENT, AMBER_DIM, DARK_TEXT_DIM, RED_DIM};
use egui::{RichText, Ui};

/// Remaining-chars thresholds for the readout color.
const WARN_REMAINING: usize = 50;
const CRIT_REMAINING: usize = 20;

pub struct PromptModule;

impl Panel for PromptModule {
    fn name(&self) -> &str { "Prompt" }

    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<AppCommand>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("💬").size(14.0).color(ACCENT));
            ui.label(RichText::new("Prompt").size(13.0).strong());
        });
        ui.add_space(6.0);

        let mut text = state.prompt.text().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_width(f32::INFINITY)
                .desired_rows(5)
                .char_limit(MAX_PROMPT_CHARS)
                .hint_text(
                    "Describe how you want to enhance your video with sound… \
                     e.g. 'Add epic orchestral music that builds up during \
                     action scenes'",
                ),
        );
        if response.changed() {
            cmd.push(AppCommand::SetPrompt(text));
        }

        let remaining = state.prompt.remaining_chars();
        let color = if remaining < CRIT_REMAINING {
            RED_DIM
        } else if remaining < WARN_REMAINING {
            AMBER_DIM
        } else {
            DARK_TEXT_DIM
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.label(
                RichText::new(format!("{remaining} chars left")).size(10.0).color(color),
            );
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("✨").size(11.0));
            ui.label(RichText::new("Quick suggestions:").size(11.0));
        });
        ui.horizontal_wrapped(|ui| {
            for suggestion in SUGGESTED_PROMPTS {
                if ui.small_button(RichText::new(*suggestion).size(10.0)).clicked() {
                    cmd.push(AppCommand::SetPrompt(suggestion.to_string()));
                }
            }
        });
    }
}
