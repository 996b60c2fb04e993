//! Desktop notifications for OpenCode lifecycle events.
//!
//! The host runtime dispatches lifecycle events; this crate's handler reacts
//! to `session.idle` and `permission.asked` by issuing one desktop
//! notification per event, and ignores everything else. The handler is
//! stateless: each dispatch is independent, nothing is deduplicated, and a
//! failed notification propagates to the host unchanged.

pub mod handler;
pub mod host;
pub mod notifier;

// Re-export key types
pub use handler::{NOTIFY_BODY, NOTIFY_TITLE, NotificationHandler};
pub use host::{HostContext, register};
pub use notifier::{NotifyCommand, notifier_program, notify_command};
