//! Progress data shapes and the reporter capability interface

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Level;
use uuid::Uuid;

/// Severity of a progress [`Message`].
///
/// Severity is purely descriptive: a `Warning` or `Error` message never
/// alters control flow or fails the operation that emitted it. Failure is
/// communicated exclusively through the operation's returned error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Map to a tracing level for downstream logging.
    #[must_use]
    pub fn tracing_level(self) -> Level {
        match self {
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

/// Top-level unit of a long-running operation (e.g. "Install").
///
/// Delivered to the reporter twice: once at start with `ended_at == None`,
/// and again at end with `ended_at` populated. Consumers distinguish the two
/// by that field, not by delivery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: Uuid,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// A phase within an [`Action`].
///
/// `action_id` is `None` for a task begun while no action was open. Such
/// orphaned tasks are valid, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub action_id: Option<Uuid>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Fine-grained progress within a [`Task`]. `task_id` follows the same
/// orphan rule as [`Task::action_id`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: Uuid,
    pub task_id: Option<Uuid>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// A message emitted during an operation, correlated to whatever
/// action/task/step identifiers were open at emission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub action_id: Option<Uuid>,
    pub task_id: Option<Uuid>,
    pub step_id: Option<Uuid>,
}

/// Capability interface for receiving progress events.
///
/// Each event carries the full current state of its entity rather than a
/// delta. Reporters shared across concurrently running operations must be
/// safe for concurrent invocation; wrap a non-reentrant implementation in
/// [`crate::MutexReporter`] before sharing it.
pub trait ProgressReporter {
    /// Called when an action starts or ends.
    fn on_action(&self, action: Action);

    /// Called when a task starts or ends.
    fn on_task(&self, task: Task);

    /// Called when a step starts or ends.
    fn on_step(&self, step: Step);

    /// Called when a message is emitted.
    fn on_message(&self, message: Message);
}

/// A reporter shared between a backend and the operations running against it.
pub type SharedReporter = Arc<dyn ProgressReporter + Send + Sync>;
