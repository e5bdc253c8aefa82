//! # Label-Wise Suffix Matching
//!
//! Tests whether a domain, given as its ordered labels, ends in an entry
//! of a [`SuffixTable`]. Candidates are formed by joining `labels[i..]`
//! and are tried from the whole name (`i = 0`) down to the final label,
//! so the *longest* suffix present in the table decides the outcome.
//!
//! ## Proper vs. any match
//!
//! With `proper_suffix` set, a match on the whole name is refused: there
//! must be at least one label in front of the matched suffix. Public
//! suffix eligibility uses this mode (`com` alone is not issuable). The
//! blacklist uses `proper_suffix = false` so an exact blacklisted name is
//! caught as well as its subdomains.
//!
//! Because the longest match decides, a name equal to a table entry is
//! refused in proper mode even if a shorter entry would also match
//! (`co.uk` with `{co.uk, uk}` is not a proper match).

use std::collections::HashSet;

/// An immutable set of lower-case ASCII suffix strings.
///
/// Entries are stored exactly as given. Callers building a table are
/// responsible for normalizing entries to lower case; the engine compares
/// them against lower-cased input and never re-normalizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    entries: HashSet<String>,
}

impl SuffixTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-normalized entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(candidate)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SuffixTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Label-wise suffix match of `labels` against `table`.
///
/// Returns at the first (longest) candidate found in the table. When
/// `proper_suffix` is set, a match at `i = 0` yields `false`.
pub fn suffix_match<S: AsRef<str>>(labels: &[S], table: &SuffixTable, proper_suffix: bool) -> bool {
    for i in 0..labels.len() {
        let candidate = join_labels(&labels[i..]);
        if table.contains(&candidate) {
            return !proper_suffix || i > 0;
        }
    }
    false
}

/// Join labels with `.`.
pub(crate) fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(label.as_ref());
    }
    out
}
