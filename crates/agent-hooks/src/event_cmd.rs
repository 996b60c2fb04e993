//! `ah event`: one lifecycle event in, at most one notification out.

use ah_core::{Event, HookError, ProcessRunner};
use ah_notify::{HostContext, register};
use anyhow::{Context, Result};
use std::io::Read;

pub async fn run() -> Result<()> {
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("Failed to read event from stdin")?;

    let event: Event = serde_json::from_str(&payload)
        .map_err(|e| HookError::InvalidPayload(e.to_string()))?;
    tracing::debug!(event_type = event.event_type.as_deref(), "Dispatching lifecycle event");

    let directory = std::env::current_dir().context("Failed to resolve working directory")?;
    let handler = register(HostContext {
        project: None,
        client: None,
        runner: ProcessRunner,
        directory,
        worktree: None,
    });

    // A failed notification command surfaces here and exits non-zero; the
    // host decides what to do with that.
    handler.on_event(&event).await?;
    Ok(())
}
