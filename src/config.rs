//! Rule configuration for supercheck.
//!
//! Configuration is a small YAML document; every field is optional and a
//! missing file behaves the same as an all-default one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::MemberKind;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["supercheck.yaml", ".supercheck.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Suppress reports for overriding methods.
    pub ignore_methods: bool,
    /// Suppress reports for overriding getters.
    pub ignore_getters: bool,
    /// Suppress reports for overriding setters.
    pub ignore_setters: bool,
    /// Glob patterns for paths to exclude from scanning
    /// (e.g., "**/generated/**").
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether reports for the given member kind are suppressed.
    ///
    /// Constructors are never reported, so the lookup only covers the three
    /// reportable kinds.
    pub fn is_ignored(&self, kind: MemberKind) -> bool {
        match kind {
            MemberKind::Method => self.ignore_methods,
            MemberKind::Getter => self.ignore_getters,
            MemberKind::Setter => self.ignore_setters,
            MemberKind::Constructor => false,
        }
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive
    /// directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Discover a config file in the current directory.
pub fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
