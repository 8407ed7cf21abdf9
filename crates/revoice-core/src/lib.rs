// crates/revoice-core/src/lib.rs
//
// Pure session data and the enhancement state machine — no egui, no rodio,
// no threads. Both revoice-media and revoice-ui depend on this crate.

pub mod commands;
pub mod job;
pub mod media_types;
pub mod presets;
pub mod prompt;
pub mod state;
