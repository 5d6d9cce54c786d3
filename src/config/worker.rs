//! Async task worker settings.
//!
//! The original deployment drives background work (SQL Lab queries, alert
//! reports) through an external broker; these values configure that worker
//! fleet. The worker itself lives outside this crate.

use std::collections::BTreeMap;

use serde::Serialize;

use super::constants::{
    DEFAULT_BROKER_URL, DEFAULT_RESULT_BACKEND, DEFAULT_SQL_LAB_RATE_LIMIT,
    DEFAULT_TASK_ACKS_LATE, DEFAULT_WORKER_IMPORTS, DEFAULT_WORKER_PREFETCH_MULTIPLIER,
    SQL_LAB_TASK,
};
use super::source::{self, Lookup};

/// Per-task tuning attached by name.
///
/// Rate limits are carried verbatim in the broker's own notation
/// (e.g. `100/s`); this crate never interprets them.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TaskAnnotation {
    pub rate_limit: String,
}

/// Settings for the external task queue.
#[derive(Clone, Serialize)]
pub struct WorkerSettings {
    #[serde(skip_serializing)]
    broker_url: String,
    #[serde(skip_serializing)]
    result_backend: String,
    /// Task modules the worker imports at startup
    pub imports: Vec<String>,
    pub prefetch_multiplier: u32,
    pub task_acks_late: bool,
    /// Per-task annotations, keyed by task name
    pub task_annotations: BTreeMap<String, TaskAnnotation>,
}

impl std::fmt::Debug for WorkerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerSettings")
            .field("broker_url", &"[REDACTED]")
            .field("result_backend", &"[REDACTED]")
            .field("imports", &self.imports)
            .field("prefetch_multiplier", &self.prefetch_multiplier)
            .field("task_acks_late", &self.task_acks_late)
            .field("task_annotations", &self.task_annotations)
            .finish()
    }
}

impl WorkerSettings {
    pub(crate) fn resolve(lookup: Lookup<'_>) -> Self {
        let mut task_annotations = BTreeMap::new();
        task_annotations.insert(
            SQL_LAB_TASK.to_string(),
            TaskAnnotation {
                rate_limit: source::string_or(
                    lookup,
                    "SQL_LAB_RATE_LIMIT",
                    DEFAULT_SQL_LAB_RATE_LIMIT,
                ),
            },
        );

        Self {
            broker_url: source::string_or(lookup, "CELERY_BROKER_URL", DEFAULT_BROKER_URL),
            result_backend: source::string_or(
                lookup,
                "CELERY_RESULT_BACKEND",
                DEFAULT_RESULT_BACKEND,
            ),
            imports: source::list_or(lookup, "CELERY_IMPORTS", DEFAULT_WORKER_IMPORTS),
            prefetch_multiplier: source::parse_or(
                lookup,
                "CELERY_WORKER_PREFETCH_MULTIPLIER",
                DEFAULT_WORKER_PREFETCH_MULTIPLIER,
            ),
            task_acks_late: source::bool_or(
                lookup,
                "CELERY_TASK_ACKS_LATE",
                DEFAULT_TASK_ACKS_LATE,
            ),
            task_annotations,
        }
    }

    /// Broker endpoint used to dispatch background tasks.
    pub fn broker_url(&self) -> &str {
        &self.broker_url
    }

    /// Store used to persist task outcomes.
    pub fn result_backend(&self) -> &str {
        &self.result_backend
    }
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self::resolve(&|_| None)
    }
}
