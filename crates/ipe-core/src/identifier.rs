//! # Identifiers
//!
//! The protocol-level representation of what a certificate is being
//! requested for. An identifier is a `{type, value}` pair created by the
//! issuance-protocol layer from a client's request; the policy engine
//! never persists or mutates it.
//!
//! Only DNS identifiers are currently supported. Any other type string
//! received on the wire is preserved as [`IdentifierType::Unsupported`] so
//! the policy engine can reject it explicitly instead of failing to parse.

use serde::{Deserialize, Serialize};

/// The type tag of an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdentifierType {
    /// A fully-qualified DNS name.
    Dns,
    /// Any type string the engine does not understand.
    Unsupported(String),
}

impl IdentifierType {
    /// Returns the wire name of this identifier type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dns => "dns",
            Self::Unsupported(other) => other,
        }
    }
}

impl From<String> for IdentifierType {
    fn from(s: String) -> Self {
        if s == "dns" {
            Self::Dns
        } else {
            Self::Unsupported(s)
        }
    }
}

impl From<&str> for IdentifierType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<IdentifierType> for String {
    fn from(t: IdentifierType) -> Self {
        match t {
            IdentifierType::Dns => "dns".to_string(),
            IdentifierType::Unsupported(other) => other,
        }
    }
}

impl std::fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested identifier: a type tag plus the raw value supplied by the client.
///
/// The value is kept exactly as received. Normalization (lower-casing)
/// happens inside the policy engine and never writes back here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier type tag.
    #[serde(rename = "type")]
    pub kind: IdentifierType,
    /// The raw identifier value.
    pub value: String,
}

impl Identifier {
    /// Create an identifier with an explicit type.
    pub fn new(kind: IdentifierType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Create a DNS identifier.
    pub fn dns(value: impl Into<String>) -> Self {
        Self::new(IdentifierType::Dns, value)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
