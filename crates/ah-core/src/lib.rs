//! Core types shared by the agent-hooks crates.
//!
//! - [`Event`] / [`EventKind`]: lifecycle events as delivered by a host
//!   runtime (OpenCode), classified into an explicit tagged set.
//! - [`HookError`]: the error surface of the hook executables.
//! - [`CommandRunner`]: the command-execution capability handlers depend on,
//!   with [`ProcessRunner`] as the production implementation.

pub mod error;
pub mod event;
pub mod runner;

// Re-export key types
pub use error::HookError;
pub use event::{Event, EventKind};
pub use runner::{CommandRunner, ProcessRunner};
