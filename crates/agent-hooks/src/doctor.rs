//! `ah doctor`: environment and configuration checks.

use ah_guard::{invalid_patterns, load_patterns};
use ah_notify::notifier_program;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(patterns_override: Option<&Path>) -> Result<()> {
    let notifier = notifier_program();
    match which::which(notifier) {
        Ok(path) => println!("notifier: ok ({notifier} at {})", path.display()),
        Err(_) => {
            println!("notifier: missing ({notifier} not on PATH, notifications will fail)")
        }
    }

    let project_dir = std::env::var_os("CLAUDE_PROJECT_DIR").map(PathBuf::from);
    let patterns = load_patterns(project_dir.as_deref(), patterns_override);
    println!(
        "patterns: {} bash, {} zero-access, {} read-only, {} no-delete",
        patterns.bash_tool_patterns.len(),
        patterns.zero_access_paths.len(),
        patterns.read_only_paths.len(),
        patterns.no_delete_paths.len(),
    );

    let invalid = invalid_patterns(&patterns);
    if invalid.is_empty() {
        println!("patterns: all regexes compile");
    } else {
        for pattern in &invalid {
            println!("patterns: invalid regex (skipped at runtime): {pattern}");
        }
    }

    Ok(())
}
