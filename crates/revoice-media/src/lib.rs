// crates/revoice-media/src/lib.rs
//
// The processing backend behind the enhancement state machine. No egui
// dependency — communicates with revoice-ui via channels only.
//
// Everything here is a stand-in for a real encoder: the worker fabricates
// progress on a fixed tick and the "render" copies the input to a temp file.
// Swapping in real processing means replacing these two modules; the
// JobUpdate contract and the state machine in revoice-core stay as they are.

pub mod render;
pub mod worker;

// Re-export the main public API so revoice-ui imports are simple.
pub use worker::EnhanceWorker;
pub use revoice_core::media_types::JobUpdate;
