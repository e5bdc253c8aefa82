//! # Policy Configuration
//!
//! [`PolicyConfig`] describes where the public suffix table and the
//! blacklist come from. [`PolicyConfig::build_tables`] reads every source,
//! normalizes the entries, and returns the [`PolicyTables`] the authority
//! is constructed with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ipe_policy::{PolicyTables, SuffixTable};

use crate::error::ConfigError;
use crate::list::{normalize_entry, parse_list};

/// Sources for a single table: list files plus inline entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSource {
    /// List files to read.
    #[serde(default)]
    pub files: Vec<PathBuf>,
    /// Entries given directly in the config.
    #[serde(default)]
    pub entries: Vec<String>,
}

impl TableSource {
    /// Read and normalize every entry. Relative file paths are joined to `base_dir`.
    fn load(&self, base_dir: &Path, table: &str) -> Result<SuffixTable, ConfigError> {
        let mut entries = Vec::new();

        for (idx, raw) in self.entries.iter().enumerate() {
            entries.push(normalize_entry(raw, "inline", idx + 1)?);
        }

        for file in &self.files {
            let path = if file.is_relative() {
                base_dir.join(file)
            } else {
                file.clone()
            };
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let parsed = parse_list(&content, &path.display().to_string())?;
            if parsed.skipped > 0 {
                tracing::warn!(
                    table,
                    path = %path.display(),
                    skipped = parsed.skipped,
                    "skipped wildcard, exception, or non-ASCII rules"
                );
            }
            tracing::debug!(
                table,
                path = %path.display(),
                entries = parsed.entries.len(),
                "loaded list file"
            );
            entries.extend(parsed.entries);
        }

        Ok(SuffixTable::from_entries(entries))
    }
}

/// Policy table configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Public suffix table sources.
    #[serde(default)]
    pub public_suffix: TableSource,
    /// Blacklist sources.
    #[serde(default)]
    pub blacklist: TableSource,
    /// Directory relative list paths resolve against. Set by
    /// [`PolicyConfig::load`] to the config file's directory.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl PolicyConfig {
    /// Parse a config from YAML text. Relative paths resolve against the
    /// current directory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: PolicyConfig = serde_yaml::from_str(yaml)?;
        config.base_dir = PathBuf::from(".");
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: PolicyConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(path = %path.display(), "loaded policy config");
        Ok(config)
    }

    /// Read every source and build the policy tables.
    pub fn build_tables(&self) -> Result<PolicyTables, ConfigError> {
        let public_suffixes = self.public_suffix.load(&self.base_dir, "public_suffix")?;
        let blacklist = self.blacklist.load(&self.base_dir, "blacklist")?;
        tracing::info!(
            public_suffixes = public_suffixes.len(),
            blacklist = blacklist.len(),
            "built policy tables"
        );
        Ok(PolicyTables::new(public_suffixes, blacklist))
    }
}
