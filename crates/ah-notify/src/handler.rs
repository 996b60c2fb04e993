//! The event-to-notification handler.

use crate::notifier::notify_command;
use ah_core::{CommandRunner, Event, EventKind, HookError};

/// Notification title, fixed for every qualifying event.
pub const NOTIFY_TITLE: &str = "OpenCode";

/// Notification body, fixed for every qualifying event. Both recognized
/// event kinds produce the identical message.
pub const NOTIFY_BODY: &str = "OpenCode needs your attention";

/// Maps lifecycle events to desktop notifications.
///
/// Holds only the command-execution capability extracted from the host
/// context at registration. Stateless across dispatches.
pub struct NotificationHandler<R> {
    runner: R,
}

impl<R: CommandRunner> NotificationHandler<R> {
    pub(crate) fn new(runner: R) -> Self {
        NotificationHandler { runner }
    }

    /// Handle one dispatched event.
    ///
    /// `session.idle` and `permission.asked` each issue exactly one
    /// notification command; every other kind is a no-op. May suspend while
    /// the external command runs. A failing command is returned unchanged:
    /// no retry, no fallback, no local logging of the failure.
    pub async fn on_event(&self, event: &Event) -> Result<(), HookError> {
        match event.kind() {
            EventKind::SessionIdle | EventKind::PermissionAsked => {
                let cmd = notify_command(NOTIFY_TITLE, NOTIFY_BODY);
                self.runner.run(&cmd.program, &cmd.args).await
            }
            EventKind::Other => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every invocation instead of spawning anything.
    #[derive(Clone, Default)]
    struct RecordingRunner {
        invocations: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(&self, program: &str, args: &[String]) -> Result<(), HookError> {
            self.invocations
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            Ok(())
        }
    }

    /// Fails every invocation, as if the notifier exited abnormally.
    struct FailingRunner;

    #[async_trait]
    impl CommandRunner for FailingRunner {
        async fn run(&self, program: &str, _args: &[String]) -> Result<(), HookError> {
            Err(HookError::CommandFailed {
                program: program.to_string(),
                code: 1,
            })
        }
    }

    fn handler(runner: &RecordingRunner) -> NotificationHandler<RecordingRunner> {
        NotificationHandler::new(runner.clone())
    }

    fn recorded(runner: &RecordingRunner) -> Vec<(String, Vec<String>)> {
        runner.invocations.lock().unwrap().clone()
    }

    /// The full command as one string, for platform-independent asserts.
    fn flat(invocation: &(String, Vec<String>)) -> String {
        format!("{} {}", invocation.0, invocation.1.join(" "))
    }

    #[tokio::test]
    async fn test_session_idle_issues_one_notification() {
        let runner = RecordingRunner::default();
        handler(&runner)
            .on_event(&Event::of_type("session.idle"))
            .await
            .unwrap();

        let calls = recorded(&runner);
        assert_eq!(calls.len(), 1);
        assert!(flat(&calls[0]).contains(NOTIFY_TITLE));
        assert!(flat(&calls[0]).contains(NOTIFY_BODY));
    }

    #[tokio::test]
    async fn test_permission_asked_issues_one_notification() {
        let runner = RecordingRunner::default();
        handler(&runner)
            .on_event(&Event::of_type("permission.asked"))
            .await
            .unwrap();

        let calls = recorded(&runner);
        assert_eq!(calls.len(), 1);
        assert!(flat(&calls[0]).contains(NOTIFY_BODY));
    }

    #[tokio::test]
    async fn test_both_kinds_send_identical_message() {
        let runner = RecordingRunner::default();
        let h = handler(&runner);
        h.on_event(&Event::of_type("session.idle")).await.unwrap();
        h.on_event(&Event::of_type("permission.asked")).await.unwrap();

        let calls = recorded(&runner);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test]
    async fn test_unrecognized_event_issues_nothing() {
        let runner = RecordingRunner::default();
        handler(&runner)
            .on_event(&Event::of_type("file.saved"))
            .await
            .unwrap();
        assert!(recorded(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_missing_type_issues_nothing_and_no_error() {
        let runner = RecordingRunner::default();
        let event: Event = serde_json::from_str("{}").unwrap();
        handler(&runner).on_event(&event).await.unwrap();
        assert!(recorded(&runner).is_empty());
    }

    #[tokio::test]
    async fn test_no_deduplication_across_dispatches() {
        let runner = RecordingRunner::default();
        let h = handler(&runner);
        let event = Event::of_type("session.idle");
        h.on_event(&event).await.unwrap();
        h.on_event(&event).await.unwrap();
        assert_eq!(recorded(&runner).len(), 2);
    }

    #[tokio::test]
    async fn test_command_failure_propagates() {
        let h = NotificationHandler::new(FailingRunner);
        let err = h
            .on_event(&Event::of_type("session.idle"))
            .await
            .unwrap_err();
        assert!(matches!(err, HookError::CommandFailed { code: 1, .. }));
    }

    #[tokio::test]
    async fn test_command_failure_not_raised_for_filtered_event() {
        let h = NotificationHandler::new(FailingRunner);
        // Filtered events never reach the runner, so nothing can fail.
        assert!(h.on_event(&Event::of_type("file.saved")).await.is_ok());
    }
}
