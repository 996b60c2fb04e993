//! Host-runtime registration.

use crate::handler::NotificationHandler;
use ah_core::CommandRunner;
use std::path::PathBuf;

/// Capability bundle supplied by the host runtime at registration time.
///
/// Mirrors what the OpenCode plugin runtime hands a plugin: project and
/// client identifiers, a command-execution capability, and the directory /
/// worktree the session runs in. The bundle lives only for the duration of
/// [`register`]; nothing but the runner is retained.
pub struct HostContext<R> {
    pub project: Option<String>,
    pub client: Option<String>,
    pub runner: R,
    pub directory: PathBuf,
    pub worktree: Option<PathBuf>,
}

/// Register the notification handler with the host context.
///
/// The handler's contract is narrowed to the command-execution capability;
/// the contextual identifiers are dropped here.
pub fn register<R: CommandRunner>(ctx: HostContext<R>) -> NotificationHandler<R> {
    tracing::debug!(
        project = ctx.project.as_deref(),
        directory = %ctx.directory.display(),
        "Registering notification handler"
    );
    NotificationHandler::new(ctx.runner)
}
