//! Glob and literal path matching.

use std::path::{Path, PathBuf};

/// True when the pattern contains glob wildcards.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Convert a glob pattern to a regex fragment for matching inside commands.
///
/// `*` and `?` deliberately stop at whitespace and `/` so a glob like
/// `*.pem` matches one argument token, not half the command line.
pub fn glob_to_regex(glob: &str) -> String {
    let mut out = String::new();
    for ch in glob.chars() {
        match ch {
            '*' => out.push_str(r"[^\s/]*"),
            '?' => out.push_str(r"[^\s/]"),
            c if r"\.^$+{}[]|()".contains(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Expand a leading `~` to the user's home directory, when one is known.
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    if path == "~" {
        home.display().to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.display())
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Lexical path normalization: collapses `.`, `..` and duplicate separators
/// without touching the filesystem.
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for comp in path.split('/') {
        match comp {
            "" | "." => {}
            ".." => {
                let last_is_parent = parts.last().is_some_and(|c| *c == "..");
                if last_is_parent || (parts.is_empty() && !absolute) {
                    parts.push("..");
                } else if !parts.is_empty() {
                    parts.pop();
                }
                // `..` at an absolute root collapses away
            }
            c => parts.push(c),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

const GLOB_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

fn fnmatch(candidate: &str, pattern: &str) -> bool {
    match glob::Pattern::new(pattern) {
        Ok(p) => p.matches_with(candidate, GLOB_OPTIONS),
        Err(_) => false,
    }
}

/// Match a file path against a configured pattern (glob or prefix).
///
/// Glob patterns are tried against the basename (both the raw and
/// tilde-expanded pattern) and against the full normalized path. Non-glob
/// patterns are tilde-expanded prefix matches, with a trailing-slash-stripped
/// exact compare as the fallback.
pub fn match_path(file_path: &str, pattern: &str) -> bool {
    let expanded_pattern = expand_tilde(pattern);
    let normalized = normalize_path(file_path);
    let expanded_normalized = expand_tilde(&normalized);

    if is_glob_pattern(pattern) {
        let basename = Path::new(&expanded_normalized)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if fnmatch(&basename, &expanded_pattern) {
            return true;
        }
        if fnmatch(&basename, pattern) {
            return true;
        }
        return fnmatch(&expanded_normalized, &expanded_pattern);
    }

    if expanded_normalized.starts_with(&expanded_pattern) {
        return true;
    }
    expanded_normalized == expanded_pattern.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("*.pem"));
        assert!(is_glob_pattern("file?.txt"));
        assert!(is_glob_pattern("[abc].txt"));
        assert!(!is_glob_pattern("/etc/hosts"));
        assert!(!is_glob_pattern("~/.ssh"));
    }

    #[test]
    fn test_glob_to_regex_star_stops_at_separator() {
        let re = regex::Regex::new(&glob_to_regex("*.pem")).unwrap();
        assert!(re.is_match("cat server.pem"));
        assert!(!re.is_match("cat server.pet"));
        // `*` must not swallow a path separator
        let m = re.find("dir/server.pem").unwrap();
        assert_eq!(m.as_str(), "server.pem");
    }

    #[test]
    fn test_glob_to_regex_escapes_metacharacters() {
        let re = regex::Regex::new(&glob_to_regex("a+b(c).txt")).unwrap();
        assert!(re.is_match("cat a+b(c).txt"));
        assert!(!re.is_match("cat aab(c)_txt"));
    }

    #[test]
    fn test_glob_to_regex_question_mark() {
        let re = regex::Regex::new(&glob_to_regex("file?.txt")).unwrap();
        assert!(re.is_match("rm file1.txt"));
        assert!(!re.is_match("rm file.txt"));
        assert!(!re.is_match("rm file/.txt"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/etc/hosts"), "/etc/hosts");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
        // `~user` forms are not expanded
        assert_eq!(expand_tilde("~other/x"), "~other/x");
    }

    #[test]
    fn test_expand_tilde_home() {
        let expanded = expand_tilde("~/.ssh");
        assert!(expanded.ends_with("/.ssh"));
        assert!(!expanded.starts_with("~/") || home_dir().is_none());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a/b/../c"), "/a/c");
        assert_eq!(normalize_path("/a//b/./c/"), "/a/b/c");
        assert_eq!(normalize_path("a/./b"), "a/b");
        assert_eq!(normalize_path("./"), ".");
        assert_eq!(normalize_path("/../x"), "/x");
        assert_eq!(normalize_path("../x"), "../x");
    }

    #[test]
    fn test_match_path_glob_basename() {
        assert!(match_path("/tmp/server.pem", "*.pem"));
        assert!(match_path("/project/.env.local", ".env*"));
        assert!(!match_path("/tmp/server.txt", "*.pem"));
    }

    #[test]
    fn test_match_path_glob_case_insensitive() {
        assert!(match_path("/tmp/myServiceAccountKey.json", "*serviceaccount*.json"));
        assert!(match_path("/tmp/GCP-Credentials.JSON", "*credentials*.json"));
    }

    #[test]
    fn test_match_path_literal_prefix() {
        assert!(match_path("/etc/hosts", "/etc/"));
        assert!(match_path("/etc/ssh/sshd_config", "/etc/"));
        assert!(!match_path("/tmp/etc/hosts", "/etc/"));
    }

    #[test]
    fn test_match_path_literal_exact_with_trailing_slash() {
        assert!(match_path("/var/log", "/var/log/"));
    }

    #[test]
    fn test_match_path_tilde_expansion_is_consistent() {
        // Build the candidate from the same expansion the matcher uses, so
        // the test holds whether or not a home directory is known.
        let file = format!("{}/id_rsa", expand_tilde("~/.ssh"));
        assert!(match_path(&file, "~/.ssh"));
    }

    #[test]
    fn test_match_path_normalizes_dot_segments() {
        assert!(match_path("/etc/./hosts", "/etc/"));
        assert!(match_path("/srv/../etc/hosts", "/etc/"));
    }
}
