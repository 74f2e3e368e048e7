//! Stateful per-operation progress tracker

use chrono::Utc;
use uuid::Uuid;

use crate::model::{Action, Message, Severity, SharedReporter, Step, Task};

/// Tracks the single active Action/Task/Step path for one operation
/// invocation and emits well-formed, correlated events.
///
/// At most one action, one task, and one step are open at any time. Ending a
/// level implicitly clears everything below it, so a task begun after
/// `end_action` carries no `action_id`.
///
/// A helper belongs to exactly one in-flight operation; concurrent operations
/// each construct their own helper and share only the reporter, which must
/// itself be safe for concurrent use.
pub struct ProgressHelper {
    reporter: Option<SharedReporter>,
    current_action: Option<Action>,
    current_task: Option<Task>,
    current_step: Option<Step>,
}

impl ProgressHelper {
    /// Create a helper from a backend-level default reporter and a per-call
    /// override. The override wins when both are present; with neither, the
    /// helper no-ops every operation and `begin_*` calls return `None`.
    #[must_use]
    pub fn new(
        default_reporter: Option<SharedReporter>,
        override_reporter: Option<SharedReporter>,
    ) -> Self {
        Self {
            reporter: override_reporter.or(default_reporter),
            current_action: None,
            current_task: None,
            current_step: None,
        }
    }

    /// Whether a reporter is bound; an inactive helper no-ops everything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.reporter.is_some()
    }

    /// Start a new action and return its identifier.
    pub fn begin_action(&mut self, name: impl Into<String>) -> Option<Uuid> {
        let reporter = self.reporter.clone()?;
        let action = Action {
            id: Uuid::new_v4(),
            name: name.into(),
            started_at: Utc::now(),
            ended_at: None,
        };
        reporter.on_action(action.clone());
        let id = action.id;
        self.current_action = Some(action);
        Some(id)
    }

    /// End the current action, clearing any still-open task and step.
    pub fn end_action(&mut self) {
        let Some(reporter) = self.reporter.clone() else {
            return;
        };
        let Some(mut action) = self.current_action.take() else {
            return;
        };
        action.ended_at = Some(Utc::now());
        reporter.on_action(action);
        self.current_task = None;
        self.current_step = None;
    }

    /// Start a new task within the current action (orphaned if none is open)
    /// and return its identifier.
    pub fn begin_task(&mut self, name: impl Into<String>) -> Option<Uuid> {
        let reporter = self.reporter.clone()?;
        let task = Task {
            id: Uuid::new_v4(),
            action_id: self.current_action.as_ref().map(|action| action.id),
            name: name.into(),
            started_at: Utc::now(),
            ended_at: None,
        };
        reporter.on_task(task.clone());
        let id = task.id;
        self.current_task = Some(task);
        Some(id)
    }

    /// End the current task, clearing any still-open step.
    pub fn end_task(&mut self) {
        let Some(reporter) = self.reporter.clone() else {
            return;
        };
        let Some(mut task) = self.current_task.take() else {
            return;
        };
        task.ended_at = Some(Utc::now());
        reporter.on_task(task);
        self.current_step = None;
    }

    /// Start a new step within the current task (orphaned if none is open)
    /// and return its identifier.
    pub fn begin_step(&mut self, name: impl Into<String>) -> Option<Uuid> {
        let reporter = self.reporter.clone()?;
        let step = Step {
            id: Uuid::new_v4(),
            task_id: self.current_task.as_ref().map(|task| task.id),
            name: name.into(),
            started_at: Utc::now(),
            ended_at: None,
        };
        reporter.on_step(step.clone());
        let id = step.id;
        self.current_step = Some(step);
        Some(id)
    }

    /// End the current step.
    pub fn end_step(&mut self) {
        let Some(reporter) = self.reporter.clone() else {
            return;
        };
        let Some(mut step) = self.current_step.take() else {
            return;
        };
        step.ended_at = Some(Utc::now());
        reporter.on_step(step);
    }

    /// Emit an informational message.
    pub fn info(&self, text: impl Into<String>) {
        self.message(Severity::Info, text);
    }

    /// Emit a warning message. Does not fail the operation.
    pub fn warning(&self, text: impl Into<String>) {
        self.message(Severity::Warning, text);
    }

    /// Emit an error message. Does not fail the operation; failure is
    /// reported through the operation's returned error.
    pub fn error(&self, text: impl Into<String>) {
        self.message(Severity::Error, text);
    }

    fn message(&self, severity: Severity, text: impl Into<String>) {
        let Some(reporter) = self.reporter.as_ref() else {
            return;
        };
        reporter.on_message(Message {
            severity,
            text: text.into(),
            timestamp: Utc::now(),
            action_id: self.current_action.as_ref().map(|action| action.id),
            task_id: self.current_task.as_ref().map(|task| task.id),
            step_id: self.current_step.as_ref().map(|step| step.id),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::model::ProgressReporter;

    #[derive(Debug)]
    enum Event {
        Action(Action),
        Task(Task),
        Step(Step),
        Message(Message),
    }

    #[derive(Default)]
    struct Capture {
        events: Mutex<Vec<Event>>,
    }

    impl Capture {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl ProgressReporter for Capture {
        fn on_action(&self, action: Action) {
            self.events.lock().unwrap().push(Event::Action(action));
        }
        fn on_task(&self, task: Task) {
            self.events.lock().unwrap().push(Event::Task(task));
        }
        fn on_step(&self, step: Step) {
            self.events.lock().unwrap().push(Event::Step(step));
        }
        fn on_message(&self, message: Message) {
            self.events.lock().unwrap().push(Event::Message(message));
        }
    }

    fn helper_with_capture() -> (ProgressHelper, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let helper = ProgressHelper::new(None, Some(capture.clone() as SharedReporter));
        (helper, capture)
    }

    #[test]
    fn inert_helper_returns_none_and_emits_nothing() {
        let mut helper = ProgressHelper::new(None, None);
        assert!(!helper.is_active());
        assert!(helper.begin_action("Install").is_none());
        assert!(helper.begin_task("Download").is_none());
        assert!(helper.begin_step("Fetch").is_none());
        helper.info("ignored");
        helper.end_step();
        helper.end_task();
        helper.end_action();
    }

    #[test]
    fn override_wins_over_default() {
        let default = Arc::new(Capture::default());
        let preferred = Arc::new(Capture::default());
        let mut helper = ProgressHelper::new(
            Some(default.clone() as SharedReporter),
            Some(preferred.clone() as SharedReporter),
        );
        let _ = helper.begin_action("Search");
        assert!(default.take().is_empty());
        assert_eq!(preferred.take().len(), 1);
    }

    #[test]
    fn default_used_when_no_override() {
        let default = Arc::new(Capture::default());
        let mut helper = ProgressHelper::new(Some(default.clone() as SharedReporter), None);
        assert!(helper.is_active());
        let _ = helper.begin_action("Search");
        assert_eq!(default.take().len(), 1);
    }

    #[test]
    fn begin_emits_open_entity_and_end_emits_closed() {
        let (mut helper, capture) = helper_with_capture();
        let id = helper.begin_action("Install").unwrap();
        helper.end_action();

        let events = capture.take();
        assert_eq!(events.len(), 2);
        match (&events[0], &events[1]) {
            (Event::Action(started), Event::Action(ended)) => {
                assert_eq!(started.id, id);
                assert_eq!(ended.id, id);
                assert!(started.ended_at.is_none());
                assert!(ended.ended_at.is_some());
                assert_eq!(started.name, "Install");
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn task_and_step_carry_parent_ids() {
        let (mut helper, capture) = helper_with_capture();
        let action_id = helper.begin_action("Install").unwrap();
        let task_id = helper.begin_task("Download").unwrap();
        let _ = helper.begin_step("Fetch archive").unwrap();

        let events = capture.take();
        match &events[1] {
            Event::Task(task) => assert_eq!(task.action_id, Some(action_id)),
            other => panic!("expected task event, got {other:?}"),
        }
        match &events[2] {
            Event::Step(step) => assert_eq!(step.task_id, Some(task_id)),
            other => panic!("expected step event, got {other:?}"),
        }
    }

    #[test]
    fn orphaned_task_and_step_have_no_parent() {
        let (mut helper, capture) = helper_with_capture();
        helper.begin_task("Standalone").unwrap();
        helper.end_task();
        helper.begin_step("Loose").unwrap();

        let events = capture.take();
        match &events[0] {
            Event::Task(task) => assert!(task.action_id.is_none()),
            other => panic!("expected task event, got {other:?}"),
        }
        match &events[2] {
            Event::Step(step) => assert!(step.task_id.is_none()),
            other => panic!("expected step event, got {other:?}"),
        }
    }

    #[test]
    fn end_action_cascades_to_task_and_step() {
        let (mut helper, capture) = helper_with_capture();
        let _ = helper.begin_action("Upgrade");
        let _ = helper.begin_task("Resolve");
        let _ = helper.begin_step("Fetch index");
        helper.end_action();

        // The cascaded task/step are cleared without end events; only the
        // action is re-emitted.
        let events = capture.take();
        assert_eq!(events.len(), 4);

        // A task begun after the cascade is orphaned.
        let _ = helper.begin_task("After");
        match &capture.take()[0] {
            Event::Task(task) => assert!(task.action_id.is_none()),
            other => panic!("expected task event, got {other:?}"),
        }

        // The cascaded step stays cleared: end_step is a no-op and only the
        // "After" task's end event is delivered.
        helper.end_step();
        helper.end_task();
        let events = capture.take();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Event::Task(task) => {
                assert_eq!(task.name, "After");
                assert!(task.ended_at.is_some());
            }
            other => panic!("expected task end event, got {other:?}"),
        }
    }

    #[test]
    fn end_task_clears_open_step() {
        let (mut helper, capture) = helper_with_capture();
        let _ = helper.begin_task("Download");
        let _ = helper.begin_step("Fetch");
        helper.end_task();
        helper.end_step(); // cleared by end_task, so no event

        let events = capture.take();
        assert_eq!(events.len(), 3);
        match &events[2] {
            Event::Task(task) => assert!(task.ended_at.is_some()),
            other => panic!("expected task end event, got {other:?}"),
        }
    }

    #[test]
    fn messages_attach_open_identifiers() {
        let (mut helper, capture) = helper_with_capture();
        helper.info("before anything");
        let action_id = helper.begin_action("Install").unwrap();
        let task_id = helper.begin_task("Download").unwrap();
        let step_id = helper.begin_step("Fetch").unwrap();
        helper.warning("slow mirror");

        let events = capture.take();
        match &events[0] {
            Event::Message(message) => {
                assert_eq!(message.severity, Severity::Info);
                assert!(message.action_id.is_none());
                assert!(message.task_id.is_none());
                assert!(message.step_id.is_none());
            }
            other => panic!("expected message event, got {other:?}"),
        }
        match &events[4] {
            Event::Message(message) => {
                assert_eq!(message.severity, Severity::Warning);
                assert_eq!(message.action_id, Some(action_id));
                assert_eq!(message.task_id, Some(task_id));
                assert_eq!(message.step_id, Some(step_id));
                assert_eq!(message.text, "slow mirror");
            }
            other => panic!("expected message event, got {other:?}"),
        }
    }

    #[test]
    fn identifiers_are_unique_across_begins() {
        let (mut helper, _capture) = helper_with_capture();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(helper.begin_action("a").unwrap()));
            assert!(seen.insert(helper.begin_task("t").unwrap()));
            assert!(seen.insert(helper.begin_step("s").unwrap()));
            helper.end_action();
        }
    }
}
