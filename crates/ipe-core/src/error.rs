//! # Policy Error Taxonomy
//!
//! A closed set of four refusal kinds. Every rejection produced by the
//! issuance policy engine is exactly one of these; exhaustive `match` on
//! [`PolicyErrorKind`] lets the protocol layer translate each one into a
//! client-facing problem response without a catch-all arm.
//!
//! The outcomes are terminal. The decision is a pure function of the
//! identifier and the immutable tables, so retrying an unchanged request
//! produces the same error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of a policy refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyErrorKind {
    /// The identifier type is not supported.
    InvalidIdentifier,
    /// The value fails the character class, length, IP-literal,
    /// label-count, or per-label structural rules.
    Syntax,
    /// The name does not sit under a recognized public suffix with at
    /// least one additional label.
    NonPublic,
    /// The name, or an ancestor of it, is explicitly denied.
    Blacklisted,
}

impl PolicyErrorKind {
    /// Returns all error kinds in canonical order.
    pub fn all_kinds() -> &'static [PolicyErrorKind] {
        &[
            Self::InvalidIdentifier,
            Self::Syntax,
            Self::NonPublic,
            Self::Blacklisted,
        ]
    }

    /// Human-readable message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "invalid identifier type",
            Self::Syntax => "syntax error",
            Self::NonPublic => "name does not end in a public suffix",
            Self::Blacklisted => "name is blacklisted",
        }
    }
}

impl std::fmt::Display for PolicyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A policy refusal: its [`PolicyErrorKind`] plus optional diagnostic detail.
///
/// The detail is free-form and exists for operators reading logs. Two
/// errors of the same kind are the same outcome regardless of detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{}", render_detail(.detail))]
pub struct PolicyError {
    kind: PolicyErrorKind,
    detail: Option<String>,
}

fn render_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

impl PolicyError {
    /// Create an error of the given kind with no detail.
    pub fn new(kind: PolicyErrorKind) -> Self {
        Self { kind, detail: None }
    }

    /// Create an error of the given kind with diagnostic detail.
    pub fn with_detail(kind: PolicyErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }

    /// Shorthand for an [`PolicyErrorKind::InvalidIdentifier`] error.
    pub fn invalid_identifier(detail: impl Into<String>) -> Self {
        Self::with_detail(PolicyErrorKind::InvalidIdentifier, detail)
    }

    /// Shorthand for a [`PolicyErrorKind::Syntax`] error.
    pub fn syntax(detail: impl Into<String>) -> Self {
        Self::with_detail(PolicyErrorKind::Syntax, detail)
    }

    /// Shorthand for a [`PolicyErrorKind::NonPublic`] error.
    pub fn non_public() -> Self {
        Self::new(PolicyErrorKind::NonPublic)
    }

    /// Shorthand for a [`PolicyErrorKind::Blacklisted`] error.
    pub fn blacklisted() -> Self {
        Self::new(PolicyErrorKind::Blacklisted)
    }

    /// The kind of this refusal.
    pub fn kind(&self) -> PolicyErrorKind {
        self.kind
    }

    /// Diagnostic detail, if any was attached.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<PolicyErrorKind> for PolicyError {
    fn from(kind: PolicyErrorKind) -> Self {
        Self::new(kind)
    }
}
