//! Provided reporter implementations: silent sink, mutual-exclusion
//! decorator, and tracing bridge.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::{Action, Message, ProgressReporter, Severity, Step, Task};

/// A reporter that discards every event.
///
/// Useful as an explicit stand-in where an API requires a reporter but the
/// caller wants silence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_action(&self, _action: Action) {}
    fn on_task(&self, _task: Task) {}
    fn on_step(&self, _step: Step) {}
    fn on_message(&self, _message: Message) {}
}

/// Decorator that serializes event delivery to a wrapped reporter.
///
/// The inner reporter does not need to be reentrant-safe on its own: the lock
/// is held only for the duration of a single event dispatch, never across
/// I/O. Wrap a reporter in this before sharing it across concurrently
/// running helpers.
#[derive(Debug, Default)]
pub struct MutexReporter<R> {
    inner: Mutex<R>,
}

impl<R> MutexReporter<R> {
    /// Wrap a reporter in a mutual-exclusion lock.
    pub fn new(inner: R) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Consume the decorator and return the wrapped reporter.
    pub fn into_inner(self) -> R {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, R> {
        // A reporter that panicked mid-event leaves consistent-enough state
        // for delivery to continue.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: ProgressReporter> ProgressReporter for MutexReporter<R> {
    fn on_action(&self, action: Action) {
        self.lock().on_action(action);
    }

    fn on_task(&self, task: Task) {
        self.lock().on_task(task);
    }

    fn on_step(&self, step: Step) {
        self.lock().on_step(step);
    }

    fn on_message(&self, message: Message) {
        self.lock().on_message(message);
    }
}

/// Reporter that forwards progress events to the `tracing` subscriber.
///
/// Begin/end events log at debug level; messages log at the level mapped
/// from their severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn on_action(&self, action: Action) {
        if action.ended_at.is_some() {
            tracing::debug!(id = %action.id, name = %action.name, "action ended");
        } else {
            tracing::debug!(id = %action.id, name = %action.name, "action started");
        }
    }

    fn on_task(&self, task: Task) {
        let action = task.action_id.map(|id| id.to_string()).unwrap_or_default();
        if task.ended_at.is_some() {
            tracing::debug!(id = %task.id, %action, name = %task.name, "task ended");
        } else {
            tracing::debug!(id = %task.id, %action, name = %task.name, "task started");
        }
    }

    fn on_step(&self, step: Step) {
        let task = step.task_id.map(|id| id.to_string()).unwrap_or_default();
        if step.ended_at.is_some() {
            tracing::debug!(id = %step.id, %task, name = %step.name, "step ended");
        } else {
            tracing::debug!(id = %step.id, %task, name = %step.name, "step started");
        }
    }

    fn on_message(&self, message: Message) {
        match message.severity {
            Severity::Info => tracing::info!(text = %message.text, "progress"),
            Severity::Warning => tracing::warn!(text = %message.text, "progress"),
            Severity::Error => tracing::error!(text = %message.text, "progress"),
        }
    }
}
