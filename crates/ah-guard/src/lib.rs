//! Damage control: PreToolUse screening for coding-assistant tool calls.
//!
//! One tool call comes in (tool name plus tool input), one [`Decision`] comes
//! out: allow, ask, or deny. Screening covers the `Bash`, `Edit`, `Write`,
//! `Read` and `Grep` tools; unknown tools are allowed untouched.
//!
//! ## Pattern configuration
//!
//! Four sections, loaded from YAML:
//!
//! ```yaml
//! bashToolPatterns:
//!   - pattern: 'git\s+reset\s+--hard'
//!     reason: "git reset --hard discards uncommitted work"
//!   - pattern: 'sudo\b'
//!     reason: "Privilege escalation"
//!     ask: true
//! zeroAccessPaths:
//!   - ~/.ssh
//!   - "*.pem"
//! readOnlyPaths:
//!   - /etc/
//! noDeletePaths:
//!   - .gitignore
//! ```
//!
//! A built-in default set is embedded in the crate and forms the lowest
//! configuration layer; an on-disk pattern set (single `patterns.yaml` or a
//! `patterns/` directory merged file-by-file) extends it. An explicit
//! override path replaces the built-ins entirely.

pub mod config;
pub mod defaults;
pub mod ops;
pub mod path_match;
pub mod screen;

// Re-export key types
pub use config::{BashPattern, PatternSet, load_patterns};
pub use defaults::builtin_patterns;
pub use screen::{Decision, ToolCall, invalid_patterns, screen};
