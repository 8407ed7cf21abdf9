// crates/revoice-media/src/worker.rs
//
// EnhanceWorker: owns the result channel and spawns one thread per job.
// All public API that revoice-ui calls lives here.
//
// The thread simulates processing: it ticks at a fixed interval for a fixed
// wall-clock duration, fabricating progress with small random increments
// capped at PROGRESS_CAP, then renders the placeholder result. The UI drains
// `rx` once per frame and feeds the updates into the state machine, which
// enforces monotonicity and the <100 ceiling on its side as well.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use rand::Rng;

use revoice_core::job::EnhanceSpec;
use revoice_core::media_types::JobUpdate;

use crate::render::render_placeholder;

/// Interval between progress reports.
const TICK: Duration = Duration::from_millis(450);

/// Total simulated processing time per job.
const PROCESS_TIME: Duration = Duration::from_secs(5);

/// Per-tick increment range, percent.
const STEP_RANGE: std::ops::Range<f32> = 2.0..10.0;

/// Highest progress a tick may report; 100 arrives only with Done.
const PROGRESS_CAP: f32 = 95.0;

pub struct EnhanceWorker {
    /// Progress / completion / error updates, drained by the UI each frame.
    pub rx:   Receiver<JobUpdate>,
    tx:       Sender<JobUpdate>,
    shutdown: Arc<AtomicBool>,
}

impl EnhanceWorker {
    pub fn new() -> Self {
        // A job produces ~12 updates; 64 is headroom for a frozen UI.
        let (tx, rx) = bounded(64);
        Self {
            rx,
            tx,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawn a background thread to process `spec`.
    ///
    /// Only one job runs at a time from the UI's perspective (the state
    /// machine refuses a trigger while Running), but a superseded thread
    /// that somehow outlives its run is harmless: its updates carry a stale
    /// job_id and are dropped on ingest.
    pub fn start_enhance(&self, spec: EnhanceSpec) {
        let tx = self.tx.clone();
        let sd = self.shutdown.clone();
        thread::spawn(move || {
            run_job(spec, &tx, &sd, TICK, PROCESS_TIME);
        });
    }

    /// Stop reporting from any in-flight job threads. They observe the flag
    /// on their next tick and exit without sending Done.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Default for EnhanceWorker {
    fn default() -> Self {
        Self::new()
    }
}

/// One simulated enhancement run. `tick` and `total` are parameters so tests
/// can run the loop in milliseconds.
fn run_job(
    spec:     EnhanceSpec,
    tx:       &Sender<JobUpdate>,
    shutdown: &AtomicBool,
    tick:     Duration,
    total:    Duration,
) {
    let job_id  = spec.job_id;
    let started = Instant::now();
    let mut rng = rand::thread_rng();
    let mut pct = 0.0_f32;

    while started.elapsed() < total {
        thread::sleep(tick);
        if shutdown.load(Ordering::Relaxed) {
            return;
        }
        pct = (pct + rng.gen_range(STEP_RANGE)).min(PROGRESS_CAP);
        if tx.send(JobUpdate::Progress { job_id, pct }).is_err() {
            return; // UI gone
        }
    }

    let update = match render_placeholder(&spec) {
        Ok(path) => JobUpdate::Done { job_id, path },
        Err(e)   => JobUpdate::Error { job_id, msg: e.to_string() },
    };
    let _ = tx.send(update);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn spec_with_source(name: &str) -> EnhanceSpec {
        let src = std::env::temp_dir().join(name);
        std::fs::write(&src, b"bytes").unwrap();
        EnhanceSpec {
            job_id:     Uuid::new_v4(),
            video_path: src,
            video_name: name.to_string(),
            audio:      None,
            prompt:     "test".into(),
        }
    }

    #[test]
    fn job_reports_monotone_progress_then_done() {
        let spec = spec_with_source("revoice_worker_src.mp4");
        let src  = spec.video_path.clone();
        let (tx, rx) = bounded(64);
        let shutdown = AtomicBool::new(false);

        run_job(
            spec,
            &tx,
            &shutdown,
            Duration::from_millis(5),
            Duration::from_millis(60),
        );
        drop(tx);

        let updates: Vec<JobUpdate> = rx.iter().collect();
        assert!(updates.len() >= 2);

        let mut last = 0.0_f32;
        for u in &updates[..updates.len() - 1] {
            match u {
                JobUpdate::Progress { pct, .. } => {
                    assert!(*pct >= last);
                    assert!(*pct <= PROGRESS_CAP);
                    last = *pct;
                }
                other => panic!("expected Progress before the end, got {other:?}"),
            }
        }
        match updates.last().unwrap() {
            JobUpdate::Done { path, .. } => {
                assert!(path.exists());
                crate::render::cleanup_result_temp(path);
            }
            other => panic!("expected Done last, got {other:?}"),
        }
        let _ = std::fs::remove_file(src);
    }

    #[test]
    fn missing_source_ends_in_error_update() {
        let spec = EnhanceSpec {
            job_id:     Uuid::new_v4(),
            video_path: PathBuf::from("/nonexistent/revoice.mp4"),
            video_name: "revoice.mp4".into(),
            audio:      None,
            prompt:     "test".into(),
        };
        let (tx, rx) = bounded(64);
        let shutdown = AtomicBool::new(false);

        run_job(
            spec,
            &tx,
            &shutdown,
            Duration::from_millis(5),
            Duration::from_millis(20),
        );
        drop(tx);

        let updates: Vec<JobUpdate> = rx.iter().collect();
        assert!(matches!(updates.last(), Some(JobUpdate::Error { .. })));
    }

    #[test]
    fn shutdown_stops_the_job_without_done() {
        let spec = spec_with_source("revoice_worker_shutdown.mp4");
        let src  = spec.video_path.clone();
        let (tx, rx) = bounded(64);
        let shutdown = AtomicBool::new(true);

        run_job(
            spec,
            &tx,
            &shutdown,
            Duration::from_millis(5),
            Duration::from_millis(60),
        );
        drop(tx);

        assert!(rx.iter().next().is_none());
        let _ = std::fs::remove_file(src);
    }
}
