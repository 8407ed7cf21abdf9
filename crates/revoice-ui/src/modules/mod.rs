// crates/revoice-ui/src/modules/mod.rs
//
// Panel registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing Panel
//   2. Add `pub mod mypanel;` below
//   3. Call it from the layout in app.rs

pub mod audition;
pub mod prompt;
pub mod result;
pub mod sound;
pub mod upload;

use revoice_core::commands::AppCommand;
use revoice_core::state::SessionState;
use egui::Ui;

/// Every panel implements this trait.
/// Panels read state, emit commands — they never mutate state directly.
pub trait Panel {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, state: &SessionState, cmd: &mut Vec<AppCommand>);
    /// Called every frame after commands are processed.
    /// Non-rendering modules (AuditionModule) use this instead of ui().
    /// Default is a no-op so rendering panels don't need to implement it.
    fn tick(&mut self, _state: &SessionState, _ctx: &mut crate::context::AppContext) {}
}
