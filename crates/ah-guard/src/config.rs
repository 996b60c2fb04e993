//! Pattern-set configuration loading.
//!
//! Layering follows the usual priority story: built-in defaults are the
//! lowest layer, an on-disk pattern set found in the project or user config
//! extends them, and an explicit override path replaces them outright.
//!
//! On-disk form is either a single `patterns.yaml` or a `patterns/`
//! directory whose `*.yaml`/`*.yml` files are merged in sorted order
//! (`.yaml` before `.yml`, no file loaded twice).

use crate::defaults::builtin_patterns;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One configured Bash regex pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BashPattern {
    pub pattern: String,
    #[serde(default = "default_reason")]
    pub reason: String,
    /// Ask for interactive permission instead of denying outright.
    #[serde(default)]
    pub ask: bool,
    /// Skip command-position anchoring (needed for redirects and other
    /// mid-command constructs).
    #[serde(default)]
    pub match_anywhere: bool,
}

fn default_reason() -> String {
    "Blocked by pattern".to_string()
}

/// The four screening sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternSet {
    pub bash_tool_patterns: Vec<BashPattern>,
    pub zero_access_paths: Vec<String>,
    pub read_only_paths: Vec<String>,
    pub no_delete_paths: Vec<String>,
}

impl PatternSet {
    /// Append another set's entries onto self. Earlier entries keep priority:
    /// Bash patterns are evaluated in order and the first match wins.
    pub fn merge_with(&mut self, other: PatternSet) {
        self.bash_tool_patterns.extend(other.bash_tool_patterns);
        self.zero_access_paths.extend(other.zero_access_paths);
        self.read_only_paths.extend(other.read_only_paths);
        self.no_delete_paths.extend(other.no_delete_paths);
    }

    pub fn is_empty(&self) -> bool {
        self.bash_tool_patterns.is_empty()
            && self.zero_access_paths.is_empty()
            && self.read_only_paths.is_empty()
            && self.no_delete_paths.is_empty()
    }

    /// Load from a YAML file, returning an empty set on error.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(set) => set,
                Err(e) => {
                    tracing::warn!("Failed to parse pattern set at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read pattern set at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and merge every YAML file under a patterns directory.
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut merged = Self::default();
        for file in yaml_files(dir) {
            merged.merge_with(Self::load_from_file(&file));
        }
        merged
    }
}

/// All `*.yaml`/`*.yml` files under `dir`, recursively, in deterministic
/// order: sorted within each extension, `.yaml` first, duplicates skipped.
fn yaml_files(dir: &Path) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();
    for ext in ["yaml", "yml"] {
        let pattern = format!("{}/**/*.{ext}", dir.display());
        let Ok(paths) = glob::glob(&pattern) else {
            continue;
        };
        let mut batch: Vec<PathBuf> = paths.flatten().collect();
        batch.sort();
        for path in batch {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }
    files
}

/// Candidate on-disk sources, highest priority first.
fn candidate_sources(project_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(project) = project_dir {
        let root = project.join(".claude/hooks/damage-control");
        candidates.push(root.join("patterns"));
        candidates.push(root.join("patterns.yaml"));
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "agent-hooks") {
        candidates.push(dirs.config_dir().join("patterns"));
        candidates.push(dirs.config_dir().join("patterns.yaml"));
    }
    candidates
}

fn load_source(path: &Path) -> PatternSet {
    if path.is_dir() {
        PatternSet::load_from_dir(path)
    } else {
        PatternSet::load_from_file(path)
    }
}

/// Resolve and load the effective pattern set.
///
/// `override_path` (the CLI's `--patterns`) replaces everything, built-ins
/// included. Otherwise the first existing source (project dir, then user
/// config dir) extends the built-in defaults; with no source on disk the
/// built-ins stand alone.
pub fn load_patterns(project_dir: Option<&Path>, override_path: Option<&Path>) -> PatternSet {
    if let Some(path) = override_path {
        return load_source(path);
    }

    let mut patterns = builtin_patterns();
    if let Some(source) = candidate_sources(project_dir)
        .into_iter()
        .find(|p| p.exists())
    {
        tracing::debug!("Extending built-in patterns from {}", source.display());
        patterns.merge_with(load_source(&source));
    }
    patterns
}
