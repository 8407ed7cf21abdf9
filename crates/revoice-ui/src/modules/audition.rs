// crates/revoice-ui/src/modules/audition.rs
//
// AuditionModule owns audio preview playback.
// Non-rendering module — tick() is called every frame from app.rs
// after commands are processed. No egui panel is shown.

use super::Panel;
use crate::context::AppContext;
use crate::revoice_log;
use revoice_core::commands::AppCommand;
use revoice_core::state::{playback_source, AudioSource, SessionState};
use egui::Ui;
use rodio::Decoder;
use std::fs::File;
use std::io::BufReader;

/// Ticks remaining after stream creation before sinks are allowed.
///
/// In Windows GUI-subsystem mode (double-click launch), WASAPI registers its
/// audio session asynchronously after OutputStreamBuilder succeeds. Creating a
/// Sink on the same tick as the stream can silently drop the first preview.
/// 5 ticks ≈ 83ms at 60fps.
const WARMUP_TICKS: u8 = 5;

pub struct AuditionModule {
    warmup_ticks: u8,
}

impl AuditionModule {
    pub fn new() -> Self {
        Self { warmup_ticks: 0 }
    }

    /// Called every frame after commands are processed.
    /// Manages the single audition sink: creates on request, clears on
    /// stop, selection change, or track end.
    pub fn run(&mut self, state: &SessionState, ctx: &mut AppContext) {
        if !ctx.audition_requested {
            if ctx.audition_sink.is_some() {
                ctx.stop_audition();
            }
            return;
        }

        // Only locally uploaded audio can be auditioned; preset entries point
        // at remote streams and stay silent in this build.
        let Some(AudioSource::Local(path)) = state.audio.as_ref().map(playback_source) else {
            ctx.audition_requested = false;
            return;
        };

        // Selection changed mid-play: drop the old sink and rebuild below.
        if ctx.audition_path.as_ref().is_some_and(|p| *p != path) {
            ctx.stop_audition();
            ctx.audition_requested = true;
        }

        // Lazy init: create the audio stream on first use rather than at
        // AppContext::new() time. In Windows GUI-subsystem mode, WASAPI
        // requires the Win32 message loop to be running first.
        if ctx.audio_stream.is_none() {
            match rodio::OutputStreamBuilder::open_default_stream() {
                Ok(stream) => {
                    revoice_log!("audition stream ready — starting warmup");
                    ctx.audio_stream = Some(stream);
                    self.warmup_ticks = WARMUP_TICKS;
                }
                Err(e) => {
                    revoice_log!("audition stream init failed: {e}");
                    ctx.audition_requested = false;
                    return;
                }
            }
        }

        // Don't touch sinks until the warmup window has passed.
        if self.warmup_ticks > 0 {
            self.warmup_ticks -= 1;
            return;
        }

        let Some(stream) = &ctx.audio_stream else { return };

        if let Some(sink) = &ctx.audition_sink {
            // Track played to the end — reset so the button shows play again.
            if sink.empty() {
                revoice_log!("audition finished for {path:?}");
                ctx.stop_audition();
            }
            return;
        }

        revoice_log!("opening audition sink — path={path:?}");
        match File::open(&path) {
            Ok(file) => match Decoder::new(BufReader::new(file)) {
                Ok(decoder) => {
                    // Per rodio 0.21 docs: connect_new takes &Mixer obtained
                    // from OutputStream::mixer(). The stream lives in
                    // AppContext so the device stays alive.
                    let sink = rodio::Sink::connect_new(stream.mixer());
                    sink.append(decoder);
                    sink.play();
                    ctx.audition_path = Some(path);
                    ctx.audition_sink = Some(sink);
                }
                Err(e) => {
                    revoice_log!("audition decoder failed: {e}");
                    ctx.audition_requested = false;
                }
            },
            Err(e) => {
                revoice_log!("audition File::open failed for {path:?}: {e}");
                ctx.audition_requested = false;
            }
        }
    }
}

impl Panel for AuditionModule {
    fn name(&self) -> &str { "Audition" }

    fn ui(&mut self, _ui: &mut Ui, _state: &SessionState, _cmd: &mut Vec<AppCommand>) {
        // No UI panel — driven entirely by tick().
    }

    fn tick(&mut self, state: &SessionState, ctx: &mut AppContext) {
        self.run(state, ctx);
    }
}
