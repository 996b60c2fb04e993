//! Operation pattern templates for path-based Bash checks.
//!
//! Each template carries a `{path}` placeholder that is filled with either an
//! escaped literal path or a glob-derived regex fragment. The operation label
//! ends up in the deny reason.

/// Operations that overwrite a file's contents.
pub const WRITE_PATTERNS: &[(&str, &str)] = &[
    (r">\s*{path}", "write"),
    (r"\btee\s+.*{path}", "write"),
];

/// Operations that append to a file.
pub const APPEND_PATTERNS: &[(&str, &str)] = &[(r">>\s*{path}", "append")];

/// In-place editors.
pub const EDIT_PATTERNS: &[(&str, &str)] = &[
    (r"\bsed\s+-i.*{path}", "edit"),
    (r"\bperl\s+-[^\s]*i.*{path}", "edit"),
    (r"\bawk\s+-i\s+inplace.*{path}", "edit"),
];

/// Moves and copies onto a path.
pub const MOVE_COPY_PATTERNS: &[(&str, &str)] = &[
    (r"\bmv\s+.*\s+{path}", "move"),
    (r"\bcp\s+.*\s+{path}", "copy"),
];

/// Deletions.
pub const DELETE_PATTERNS: &[(&str, &str)] = &[
    (r"\brm\s+.*{path}", "delete"),
    (r"\bunlink\s+.*{path}", "delete"),
    (r"\brmdir\s+.*{path}", "delete"),
    (r"\bshred\s+.*{path}", "delete"),
];

/// Ownership and mode changes.
pub const PERMISSION_PATTERNS: &[(&str, &str)] = &[
    (r"\bchmod\s+.*{path}", "chmod"),
    (r"\bchown\s+.*{path}", "chown"),
    (r"\bchgrp\s+.*{path}", "chgrp"),
];

/// Truncations.
pub const TRUNCATE_PATTERNS: &[(&str, &str)] = &[
    (r"\btruncate\s+.*{path}", "truncate"),
    (r":\s*>\s*{path}", "truncate"),
];

/// Every operation that modifies a read-only path.
pub fn read_only_blocked() -> Vec<(&'static str, &'static str)> {
    [
        WRITE_PATTERNS,
        APPEND_PATTERNS,
        EDIT_PATTERNS,
        MOVE_COPY_PATTERNS,
        DELETE_PATTERNS,
        PERMISSION_PATTERNS,
        TRUNCATE_PATTERNS,
    ]
    .concat()
}

/// Operations blocked on no-delete paths.
pub fn no_delete_blocked() -> Vec<(&'static str, &'static str)> {
    DELETE_PATTERNS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_blocked_includes_all_categories() {
        let ops = read_only_blocked();
        for label in ["write", "append", "edit", "move", "copy", "delete", "chmod", "truncate"] {
            assert!(
                ops.iter().any(|(_, op)| *op == label),
                "missing operation label {label}"
            );
        }
    }

    #[test]
    fn test_no_delete_blocked_is_delete_only() {
        let ops = no_delete_blocked();
        assert!(!ops.is_empty());
        assert!(ops.iter().all(|(_, op)| *op == "delete"));
    }

    #[test]
    fn test_templates_compile_with_a_literal_path() {
        let path = regex::escape("/etc/hosts");
        for (template, _) in read_only_blocked() {
            let pattern = template.replace("{path}", &path);
            assert!(
                regex::Regex::new(&pattern).is_ok(),
                "template does not compile: {template}"
            );
        }
    }
}
