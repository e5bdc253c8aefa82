//! # Configuration Errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading policy configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config or list file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`PolicyConfig`](crate::PolicyConfig).
    #[error("invalid policy config {}: {source}", path.display())]
    Yaml {
        /// The config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A list entry contains bytes outside the DNS character set.
    #[error("invalid entry {entry:?} in {origin} line {line}")]
    InvalidEntry {
        /// File path, or `"inline"` for entries given in the config itself.
        origin: String,
        /// 1-based line number (entry index for inline entries).
        line: usize,
        /// The offending entry as written.
        entry: String,
    },
}
