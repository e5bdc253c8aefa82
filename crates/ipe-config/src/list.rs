//! # List File Parsing
//!
//! Parses plain domain lists: the public suffix list (`.dat`) format and
//! the simpler one-name-per-line blacklist format share one parser.
//!
//! - Leading and trailing whitespace is trimmed; only the first
//!   whitespace-separated token of a line is used.
//! - Blank lines and lines starting with `//` or `#` are ignored.
//! - Wildcard (`*.`) and exception (`!`) rules cannot be expressed as set
//!   membership and are skipped.
//! - Entries written in Unicode (IDN rules) are skipped; the engine never
//!   accepts IDN names, so they could not match.
//! - Remaining entries lose a single trailing `.` and are lower-cased.
//!   An entry with any other byte outside `[A-Za-z0-9.-]` is an error.

use crate::error::ConfigError;

/// Result of parsing one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    /// Normalized entries, in file order.
    pub entries: Vec<String>,
    /// Rules that were recognized but cannot be represented.
    pub skipped: usize,
}

/// Parse list `content`. `origin` names the source in error messages.
pub fn parse_list(content: &str, origin: &str) -> Result<ParsedList, ConfigError> {
    let mut parsed = ParsedList::default();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }
        let token = line.split_whitespace().next().unwrap_or(line);
        if token.starts_with("*.") || token.starts_with('!') || !token.is_ascii() {
            parsed.skipped += 1;
            continue;
        }
        parsed.entries.push(normalize_entry(token, origin, idx + 1)?);
    }
    Ok(parsed)
}

/// Normalize one entry: strip a trailing dot, check bytes, lower-case.
pub(crate) fn normalize_entry(raw: &str, origin: &str, line: usize) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-');
    if !valid {
        return Err(ConfigError::InvalidEntry {
            origin: origin.to_string(),
            line,
            entry: raw.to_string(),
        });
    }
    Ok(name.to_ascii_lowercase())
}
