// crates/revoice-core/src/job.rs
//
// The enhancement job state machine:
//
//   Idle ──trigger──▶ Validating ──ok──▶ Running ──done──▶ Completed
//                          │                 │
//                          └──reject──▶ Failed ◀──error───┘
//
//   Completed | Failed ──trigger──▶ Validating   (fresh snapshot, prior
//                                                 result discarded)
//
// Validation runs synchronously inside trigger(); Running is left only by a
// worker completion or error carrying the matching job_id. There is no
// mid-flight cancel: trigger is a no-op while Running.
//
// All transitions live here and are pure with respect to I/O: the worker
// that actually produces the result is behind a channel in revoice-media,
// so a real backend can replace the simulated one without touching this file.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prompt::Prompt;
use crate::state::{AudioSelection, VideoInput};

/// Progress ceiling while Running. 100 is reached only together with the
/// result, on complete().
const RUNNING_PROGRESS_CEIL: f32 = 99.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    #[default]
    Idle,
    Validating,
    Running,
    Completed,
    Failed,
}

/// Why a run ended in Failed. Display text is the user-facing notice copy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JobFailure {
    #[error("Upload a video file to start enhancement.")]
    MissingVideo,
    #[error("Enter an enhancement prompt before processing.")]
    MissingPrompt,
    #[error("Processing failed: {0}")]
    Backend(String),
}

/// The immutable snapshot captured at trigger time. The in-flight job works
/// over this copy, so editing the inputs afterwards cannot alter it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceSpec {
    pub job_id:     Uuid,
    pub video_path: PathBuf,
    pub video_name: String,
    pub audio:      Option<AudioSelection>,
    /// Trimmed prompt text — validation guarantees it is non-empty.
    pub prompt:     String,
}

/// A playable reference to a finished run's output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRef {
    pub job_id: Uuid,
    pub path:   PathBuf,
}

/// Outcome of a trigger call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Validation passed; hand the spec to the worker.
    Started(EnhanceSpec),
    /// Validation failed; the machine is in Failed with this reason.
    Rejected(JobFailure),
    /// A job is already Running — the trigger is a no-op.
    Ignored,
}

#[derive(Debug, Default)]
pub struct EnhancementJob {
    state:    JobState,
    progress: f32,
    /// Identity of the current (or most recent) run. Updates carrying any
    /// other id are stale and dropped.
    job_id:   Option<Uuid>,
    result:   Option<ResultRef>,
    failure:  Option<JobFailure>,
    /// Result file released by the last trigger, waiting for the caller to
    /// queue its deletion.
    discarded: Option<PathBuf>,
}

impl EnhancementJob {
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Progress percentage in [0, 100]. Strictly below 100 while Running.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn result(&self) -> Option<&ResultRef> {
        self.result.as_ref()
    }

    pub fn failure(&self) -> Option<&JobFailure> {
        self.failure.as_ref()
    }

    /// Display text of the failure, if any. Doubles as the toast body.
    pub fn error_reason(&self) -> Option<String> {
        self.failure.as_ref().map(|f| f.to_string())
    }

    pub fn is_running(&self) -> bool {
        self.state == JobState::Running
    }

    /// The user-triggered transition. Ignored while Running; otherwise
    /// enters Validating, discarding any prior result, and either starts a
    /// fresh run or lands in Failed with the validation reason.
    pub fn trigger(
        &mut self,
        video:  Option<&VideoInput>,
        audio:  Option<&AudioSelection>,
        prompt: &Prompt,
    ) -> Trigger {
        if self.state == JobState::Running {
            return Trigger::Ignored;
        }

        // Entering Validating resets the run: prior result released (the
        // caller collects it via take_discarded), progress and reason cleared.
        self.state   = JobState::Validating;
        self.progress = 0.0;
        self.failure  = None;
        if let Some(old) = self.result.take() {
            self.discarded = Some(old.path);
        }

        match Self::validate(video, prompt) {
            Err(failure) => {
                self.state   = JobState::Failed;
                self.failure = Some(failure.clone());
                Trigger::Rejected(failure)
            }
            Ok(vid) => {
                let job_id = Uuid::new_v4();
                self.job_id = Some(job_id);
                self.state  = JobState::Running;
                Trigger::Started(EnhanceSpec {
                    job_id,
                    video_path: vid.path.clone(),
                    video_name: vid.name.clone(),
                    audio:      audio.cloned(),
                    prompt:     prompt.text().trim().to_string(),
                })
            }
        }
    }

    /// The ordered validation checks: video first, then prompt.
    fn validate<'a>(
        video:  Option<&'a VideoInput>,
        prompt: &Prompt,
    ) -> Result<&'a VideoInput, JobFailure> {
        let vid = video.ok_or(JobFailure::MissingVideo)?;
        if prompt.is_blank() {
            return Err(JobFailure::MissingPrompt);
        }
        Ok(vid)
    }

    /// Apply a worker progress report. Monotone non-decreasing, capped below
    /// 100 until complete(). Dropped unless Running with a matching job_id.
    pub fn apply_progress(&mut self, job_id: Uuid, pct: f32) {
        if self.state != JobState::Running || self.job_id != Some(job_id) {
            return;
        }
        self.progress = self.progress.max(pct.min(RUNNING_PROGRESS_CEIL));
    }

    /// Worker completion: progress reaches 100 and the result reference
    /// appears in the same transition.
    pub fn complete(&mut self, job_id: Uuid, path: PathBuf) {
        if self.state != JobState::Running || self.job_id != Some(job_id) {
            return;
        }
        self.progress = 100.0;
        self.result   = Some(ResultRef { job_id, path });
        self.state    = JobState::Completed;
    }

    /// Worker error: Running → Failed with the backend reason. Retriable.
    pub fn fail(&mut self, job_id: Uuid, msg: String) {
        if self.state != JobState::Running || self.job_id != Some(job_id) {
            return;
        }
        self.failure = Some(JobFailure::Backend(msg));
        self.state   = JobState::Failed;
    }

    /// Take the result path released by the last trigger, if any, so its
    /// temp file can be deleted.
    pub fn take_discarded(&mut self) -> Option<PathBuf> {
        self.discarded.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(name: &str) -> VideoInput {
        VideoInput {
            id:         Uuid::new_v4(),
            path:       PathBuf::from(format!("/tmp/{name}")),
            name:       name.to_string(),
            size_bytes: 1 << 20,
        }
    }

    fn prompt(text: &str) -> Prompt {
        let mut p = Prompt::default();
        p.set_text(text);
        p
    }

    #[test]
    fn trigger_without_video_fails_without_running() {
        let mut job = EnhancementJob::default();
        let out = job.trigger(None, None, &prompt("add music"));
        assert_eq!(out, Trigger::Rejected(JobFailure::MissingVideo));
        assert_eq!(job.state(), JobState::Failed);
        assert!(job.error_reason().is_some());
        assert!(job.result().is_none());
    }

    #[test]
    fn trigger_with_blank_prompt_fails_with_missing_prompt() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let out = job.trigger(Some(&v), None, &prompt("   \n "));
        assert_eq!(out, Trigger::Rejected(JobFailure::MissingPrompt));
        assert_eq!(job.state(), JobState::Failed);
    }

    #[test]
    fn happy_path_runs_and_completes() {
        let mut job = EnhancementJob::default();
        assert_eq!(job.state(), JobState::Idle);

        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("  make it epic  ")) {
            Trigger::Started(spec) => spec,
            other => panic!("expected Started, got {other:?}"),
        };
        assert_eq!(job.state(), JobState::Running);
        assert_eq!(job.progress(), 0.0);
        assert_eq!(spec.video_name, "a.mp4");
        assert_eq!(spec.prompt, "make it epic"); // trimmed in the snapshot

        job.apply_progress(spec.job_id, 40.0);
        job.apply_progress(spec.job_id, 80.0);
        assert!(job.progress() < 100.0);
        assert!(job.result().is_none());

        job.complete(spec.job_id, PathBuf::from("/tmp/out.mp4"));
        assert_eq!(job.state(), JobState::Completed);
        assert_eq!(job.progress(), 100.0);
        assert_eq!(job.result().unwrap().path, PathBuf::from("/tmp/out.mp4"));
    }

    #[test]
    fn progress_is_monotone_and_capped_below_100() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };

        job.apply_progress(spec.job_id, 50.0);
        job.apply_progress(spec.job_id, 30.0); // regression ignored
        assert_eq!(job.progress(), 50.0);

        job.apply_progress(spec.job_id, 5000.0); // over-report clamped
        assert!(job.progress() < 100.0);
    }

    #[test]
    fn stale_job_updates_are_dropped() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };

        let stale = Uuid::new_v4();
        job.apply_progress(stale, 90.0);
        assert_eq!(job.progress(), 0.0);
        job.complete(stale, PathBuf::from("/tmp/stale.mp4"));
        assert_eq!(job.state(), JobState::Running);

        job.complete(spec.job_id, PathBuf::from("/tmp/real.mp4"));
        assert_eq!(job.state(), JobState::Completed);
    }

    #[test]
    fn trigger_while_running_is_ignored() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        job.apply_progress(spec.job_id, 25.0);

        assert_eq!(job.trigger(Some(&v), None, &prompt("y")), Trigger::Ignored);
        assert_eq!(job.state(), JobState::Running);
        assert_eq!(job.progress(), 25.0);
    }

    #[test]
    fn snapshot_is_insulated_from_later_edits() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let mut p = prompt("original text");
        let spec = match job.trigger(Some(&v), None, &p) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };

        // Mutate the live inputs after the trigger.
        p.set_text("edited afterwards");
        assert_eq!(spec.prompt, "original text");
        assert_eq!(spec.video_path, PathBuf::from("/tmp/a.mp4"));
    }

    #[test]
    fn reprocess_discards_prior_result_and_produces_fresh_run() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let first = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        job.complete(first.job_id, PathBuf::from("/tmp/out1.mp4"));

        let second = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        assert_ne!(first.job_id, second.job_id);
        assert_eq!(job.state(), JobState::Running);
        assert!(job.result().is_none());
        assert_eq!(job.take_discarded(), Some(PathBuf::from("/tmp/out1.mp4")));

        job.complete(second.job_id, PathBuf::from("/tmp/out2.mp4"));
        assert_eq!(job.result().unwrap().path, PathBuf::from("/tmp/out2.mp4"));
    }

    #[test]
    fn backend_failure_is_retriable() {
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        job.fail(spec.job_id, "source file vanished".into());
        assert_eq!(job.state(), JobState::Failed);
        assert_eq!(
            job.error_reason().as_deref(),
            Some("Processing failed: source file vanished"),
        );

        assert!(matches!(
            job.trigger(Some(&v), None, &prompt("x")),
            Trigger::Started(_),
        ));
        assert_eq!(job.state(), JobState::Running);
        assert!(job.error_reason().is_none());
    }

    #[test]
    fn reprocess_after_failed_validation_still_discards_result() {
        // Reprocess clears the result before validating, so a now-invalid
        // session loses the old output.
        let mut job = EnhancementJob::default();
        let v = video("a.mp4");
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        job.complete(spec.job_id, PathBuf::from("/tmp/out.mp4"));

        let out = job.trigger(None, None, &prompt("x"));
        assert_eq!(out, Trigger::Rejected(JobFailure::MissingVideo));
        assert!(job.result().is_none());
        assert_eq!(job.take_discarded(), Some(PathBuf::from("/tmp/out.mp4")));
    }

    #[test]
    fn spec_serializes_for_diagnostics() {
        let v = video("a.mp4");
        let mut job = EnhancementJob::default();
        let spec = match job.trigger(Some(&v), None, &prompt("x")) {
            Trigger::Started(spec) => spec,
            other => panic!("{other:?}"),
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: EnhanceSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
