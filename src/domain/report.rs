//! Result summaries for generation and check runs.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::task::{ConfigLabel, GeneratorFamily, TaskSpec};

/// Successful outcome of one generator task.
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub family: GeneratorFamily,
    pub label: ConfigLabel,
    pub files: Vec<PathBuf>,
}

/// A failed generator task, kept for the end-of-run summary.
#[derive(Debug)]
pub struct TaskFailure {
    pub family: GeneratorFamily,
    pub label: ConfigLabel,
    pub error: AppError,
}

impl TaskFailure {
    pub fn new(task: &TaskSpec, error: AppError) -> Self {
        Self { family: task.family, label: task.label.clone(), error }
    }
}

/// Collected result of one generation run.
///
/// Per-task failures are recorded here instead of aborting, so a user sees
/// every problem in one run.
#[derive(Debug, Default)]
pub struct RunReport {
    completed: Vec<TaskOutcome>,
    failures: Vec<TaskFailure>,
}

impl RunReport {
    pub fn record_success(&mut self, task: &TaskSpec, files: Vec<PathBuf>) {
        self.completed.push(TaskOutcome {
            family: task.family,
            label: task.label.clone(),
            files,
        });
    }

    pub fn record_failure(&mut self, task: &TaskSpec, error: AppError) {
        self.failures.push(TaskFailure::new(task, error));
    }

    pub fn completed(&self) -> &[TaskOutcome] {
        &self.completed
    }

    pub fn failures(&self) -> &[TaskFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total number of files written across all completed tasks.
    pub fn files_written(&self) -> usize {
        self.completed.iter().map(|outcome| outcome.files.len()).sum()
    }
}

/// Drift state of one artifact during a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    /// On-disk content matches the expected render.
    UpToDate,
    /// On-disk content differs from the expected render.
    Stale,
    /// Expected artifact is absent.
    Missing,
    /// Recorded in the artifact index but no longer produced.
    Orphaned,
}

/// One checked artifact.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    pub path: String,
    pub state: CheckState,
}

/// Collected result of a check run.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn record(&mut self, path: String, state: CheckState) {
        self.entries.push(CheckEntry { path, state });
    }

    /// True when every expected artifact is present and current.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|entry| entry.state == CheckState::UpToDate)
    }

    pub fn count(&self, state: CheckState) -> usize {
        self.entries.iter().filter(|entry| entry.state == state).count()
    }
}
