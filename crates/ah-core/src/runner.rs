//! Command-execution capability.
//!
//! Handlers never build shell strings; every invocation is a program plus an
//! argv list. The trait is the narrow seam the host context is reduced to at
//! registration time, and the seam tests double through.

use crate::error::HookError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Capability to run one external command to completion.
///
/// No timeout and no retry: a call either finishes or fails, and the failure
/// is the caller's to handle.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), HookError>;
}

/// Production runner backed by `tokio::process`.
///
/// All stdio is detached: hook protocols own the parent's stdout, and the
/// notifier's output is of no interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<(), HookError> {
        tracing::debug!(program, ?args, "Running external command");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| HookError::CommandSpawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(HookError::CommandFailed {
                program: program.to_string(),
                code: status.code().unwrap_or(-1),
            })
        }
    }
}
