//! `ah pretooluse`: the Claude Code PreToolUse hook protocol.
//!
//! Exit codes: 0 allow (ask decisions additionally print hook JSON on
//! stdout), 2 deny (reason on stderr, fed back to the model), 1 malformed
//! input.

use ah_guard::{Decision, ToolCall, load_patterns, screen};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Deny output truncates the offending command/path to this many chars.
const TARGET_TRUNCATE: usize = 100;

pub fn run(patterns_override: Option<&Path>) -> i32 {
    let mut payload = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut payload) {
        eprintln!("Error reading input: {e}");
        return 1;
    }

    let call: ToolCall = match serde_json::from_str(&payload) {
        Ok(call) => call,
        Err(e) => {
            eprintln!("Error: Invalid JSON input: {e}");
            return 1;
        }
    };

    let project_dir = std::env::var_os("CLAUDE_PROJECT_DIR").map(PathBuf::from);
    let patterns = load_patterns(project_dir.as_deref(), patterns_override);

    match screen(&call, &patterns) {
        Decision::Allow => 0,
        Decision::Ask { reason } => {
            let output = json!({
                "hookSpecificOutput": {
                    "hookEventName": "PreToolUse",
                    "permissionDecision": "ask",
                    "permissionDecisionReason": reason,
                }
            });
            println!("{output}");
            0
        }
        Decision::Deny { reason } => {
            block(&reason, call.target());
            2
        }
    }
}

fn block(reason: &str, context: &str) {
    let truncated: String = if context.chars().count() > TARGET_TRUNCATE {
        let head: String = context.chars().take(TARGET_TRUNCATE).collect();
        format!("{head}...")
    } else {
        context.to_string()
    };
    eprintln!("SECURITY: {reason}");
    eprintln!("Target: {truncated}");
}
