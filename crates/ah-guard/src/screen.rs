//! Tool-call screening: one call in, one decision out.

use crate::config::{BashPattern, PatternSet};
use crate::ops::{no_delete_blocked, read_only_blocked};
use crate::path_match::{expand_tilde, glob_to_regex, is_glob_pattern, match_path};
use regex::RegexBuilder;
use serde::Deserialize;

/// Anchors a pattern to command position: start of string or right after a
/// shell separator (`;` `|` `&` or an opening paren). Keeps command-like
/// words inside quoted arguments (commit messages, `docker exec` operands)
/// from matching. Patterns opt out with `match_anywhere`.
pub const CMD_POSITION_PREFIX: &str = r"(?:^|[;|&(]\s*)";

/// A PreToolUse record: tool name plus the tool's input object.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: serde_json::Value,
}

impl ToolCall {
    fn input_str(&self, key: &str) -> &str {
        self.tool_input
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// The input a decision is about, used as error context when a call is
    /// denied.
    pub fn target(&self) -> &str {
        match self.tool_name.as_str() {
            "Bash" => self.input_str("command"),
            "Grep" => self.input_str("path"),
            _ => self.input_str("file_path"),
        }
    }
}

/// Screening outcome. `Deny` reasons carry the full `Blocked: …` text the
/// host feeds back to the model; `Ask` reasons are the bare justification
/// shown in the permission prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Ask { reason: String },
    Deny { reason: String },
}

/// Screen one tool call. Unknown tools and absent inputs are allowed:
/// filtering, not an error.
pub fn screen(call: &ToolCall, patterns: &PatternSet) -> Decision {
    match call.tool_name.as_str() {
        "Bash" => screen_bash(call.input_str("command"), patterns),
        "Edit" => screen_file_mutation(call.input_str("file_path"), patterns, "edit"),
        "Write" => screen_file_mutation(call.input_str("file_path"), patterns, "write"),
        "Read" => screen_read(call.input_str("file_path"), patterns),
        "Grep" => screen_grep(call.input_str("path"), patterns),
        _ => Decision::Allow,
    }
}

/// Bash screening: configured patterns first (first match decides), then
/// zero-access mentions, then read-only modifications, then no-delete
/// deletions.
pub fn screen_bash(command: &str, patterns: &PatternSet) -> Decision {
    if command.is_empty() {
        return Decision::Allow;
    }

    for entry in &patterns.bash_tool_patterns {
        if bash_pattern_matches(entry, command) {
            return if entry.ask {
                Decision::Ask {
                    reason: entry.reason.clone(),
                }
            } else {
                Decision::Deny {
                    reason: format!("Blocked: {}", entry.reason),
                }
            };
        }
    }

    for zero_path in &patterns.zero_access_paths {
        if command_mentions_path(command, zero_path) {
            let noun = if is_glob_pattern(zero_path) {
                "pattern"
            } else {
                "path"
            };
            return Decision::Deny {
                reason: format!(
                    "Blocked: zero-access {noun} {zero_path} (no operations allowed)"
                ),
            };
        }
    }

    for read_only in &patterns.read_only_paths {
        if let Some(reason) =
            check_path_patterns(command, read_only, &read_only_blocked(), "read-only path")
        {
            return Decision::Deny { reason };
        }
    }

    for no_delete in &patterns.no_delete_paths {
        if let Some(reason) =
            check_path_patterns(command, no_delete, &no_delete_blocked(), "no-delete path")
        {
            return Decision::Deny { reason };
        }
    }

    Decision::Allow
}

/// Patterns whose regex does not compile (they are skipped during
/// screening). Surfaced by `ah doctor`.
pub fn invalid_patterns(patterns: &PatternSet) -> Vec<String> {
    patterns
        .bash_tool_patterns
        .iter()
        .filter(|entry| {
            RegexBuilder::new(&entry.pattern)
                .case_insensitive(true)
                .build()
                .is_err()
        })
        .map(|entry| entry.pattern.clone())
        .collect()
}

fn bash_pattern_matches(entry: &BashPattern, command: &str) -> bool {
    let source = if entry.match_anywhere {
        entry.pattern.clone()
    } else {
        format!("{CMD_POSITION_PREFIX}{}", entry.pattern)
    };
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(re) => re.is_match(command),
        Err(e) => {
            tracing::warn!("Skipping invalid bash pattern '{}': {}", entry.pattern, e);
            false
        }
    }
}

/// Zero-access check for commands: any mention counts. Globs match
/// case-insensitively via their regex form; literal paths are substring
/// matches in both the written and tilde-expanded spelling.
fn command_mentions_path(command: &str, zero_path: &str) -> bool {
    if is_glob_pattern(zero_path) {
        match RegexBuilder::new(&glob_to_regex(zero_path))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re.is_match(command),
            Err(_) => false,
        }
    } else {
        let expanded = expand_tilde(zero_path);
        command.contains(expanded.as_str()) || command.contains(zero_path)
    }
}

/// Apply operation templates for one protected path against a command.
fn check_path_patterns(
    command: &str,
    path: &str,
    templates: &[(&str, &str)],
    path_type: &str,
) -> Option<String> {
    if is_glob_pattern(path) {
        let glob_regex = glob_to_regex(path);
        for (template, operation) in templates {
            let cmd_prefix = template.replace("{path}", "");
            if cmd_prefix.is_empty() {
                continue;
            }
            let Ok(re) = RegexBuilder::new(&format!("{cmd_prefix}{glob_regex}"))
                .case_insensitive(true)
                .build()
            else {
                continue;
            };
            if re.is_match(command) {
                return Some(format!(
                    "Blocked: {operation} operation on {path_type} {path}"
                ));
            }
        }
    } else {
        let expanded = expand_tilde(path);
        for (template, operation) in templates {
            let candidates = [
                template.replace("{path}", &regex::escape(&expanded)),
                template.replace("{path}", &regex::escape(path)),
            ];
            let matched = candidates.iter().any(|pattern| {
                regex::Regex::new(pattern)
                    .map(|re| re.is_match(command))
                    .unwrap_or(false)
            });
            if matched {
                return Some(format!(
                    "Blocked: {operation} operation on {path_type} {path}"
                ));
            }
        }
    }
    None
}

/// Edit/Write screening: zero-access and read-only targets are denied.
fn screen_file_mutation(file_path: &str, patterns: &PatternSet, verb: &str) -> Decision {
    if file_path.is_empty() {
        return Decision::Allow;
    }

    for zero_path in &patterns.zero_access_paths {
        if match_path(file_path, zero_path) {
            return Decision::Deny {
                reason: format!(
                    "Blocked {verb} to zero-access path {zero_path} (no operations allowed)"
                ),
            };
        }
    }

    for read_only in &patterns.read_only_paths {
        if match_path(file_path, read_only) {
            return Decision::Deny {
                reason: format!("Blocked {verb} to read-only path {read_only}"),
            };
        }
    }

    Decision::Allow
}

/// Read screening: zero-access only (reading read-only paths is fine).
fn screen_read(file_path: &str, patterns: &PatternSet) -> Decision {
    if file_path.is_empty() {
        return Decision::Allow;
    }

    for zero_path in &patterns.zero_access_paths {
        if match_path(file_path, zero_path) {
            return Decision::Deny {
                reason: format!(
                    "Blocked read of zero-access path {zero_path} (no operations allowed)"
                ),
            };
        }
    }

    Decision::Allow
}

/// Grep screening: searching inside a zero-access path is denied.
fn screen_grep(search_path: &str, patterns: &PatternSet) -> Decision {
    if search_path.is_empty() {
        return Decision::Allow;
    }

    for zero_path in &patterns.zero_access_paths {
        if match_path(search_path, zero_path) {
            return Decision::Deny {
                reason: format!(
                    "Blocked grep in zero-access path {zero_path} (no operations allowed)"
                ),
            };
        }
    }

    Decision::Allow
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
