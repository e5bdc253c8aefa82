//! # Challenge Descriptors
//!
//! A challenge is one method by which a client proves control over an
//! identifier before a certificate is issued. A [`ChallengeOffer`] pairs
//! an ordered list of challenges with a list of *combinations*: each
//! combination is a set of indices into the challenge list that, completed
//! together, satisfy the proof-of-control requirement.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes in a challenge token.
pub const TOKEN_BYTES: usize = 32;

/// The proof-of-control methods the CA knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    /// Provision a resource over plain HTTP at a well-known path.
    #[serde(rename = "simpleHttp")]
    SimpleHttp,
    /// Serve a specially crafted certificate via TLS SNI.
    #[serde(rename = "dvsni")]
    Dvsni,
    /// Publish a DNS record under the identifier.
    #[serde(rename = "dns")]
    Dns,
}

impl ChallengeType {
    /// Returns the wire name of this challenge type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleHttp => "simpleHttp",
            Self::Dvsni => "dvsni",
            Self::Dns => "dns",
        }
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation status of a single challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    /// Offered, not yet attempted.
    Pending,
    /// Completed successfully.
    Valid,
    /// Attempted and failed.
    Invalid,
}

/// A single challenge descriptor as offered to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// The challenge method.
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    /// Current validation status.
    pub status: ChallengeStatus,
    /// Random hex token binding the client's response to this challenge.
    pub token: String,
}

impl Challenge {
    /// Create a pending challenge of the given type with a fresh random token.
    pub fn new(kind: ChallengeType) -> Self {
        Self {
            kind,
            status: ChallengeStatus::Pending,
            token: new_token(),
        }
    }

    /// A pending HTTP-based challenge.
    pub fn simple_http() -> Self {
        Self::new(ChallengeType::SimpleHttp)
    }

    /// A pending TLS-SNI-based challenge.
    pub fn dvsni() -> Self {
        Self::new(ChallengeType::Dvsni)
    }

    /// A pending DNS-record-based challenge.
    pub fn dns() -> Self {
        Self::new(ChallengeType::Dns)
    }
}

/// Generate a random challenge token from the OS CSPRNG.
fn new_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// The challenges offered for an identifier and the acceptable combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOffer {
    /// Offered challenges, in presentation order.
    pub challenges: Vec<Challenge>,
    /// Sets of indices into `challenges`; completing every challenge in
    /// any one set proves control.
    pub combinations: Vec<Vec<usize>>,
}

impl ChallengeOffer {
    /// Whether every combination is non-empty and refers only to offered challenges.
    pub fn is_well_formed(&self) -> bool {
        self.combinations.iter().all(|combo| {
            !combo.is_empty() && combo.iter().all(|&i| i < self.challenges.len())
        })
    }

    /// Whether the set of completed challenge indices satisfies some combination.
    pub fn is_satisfied_by(&self, completed: &[usize]) -> bool {
        self.combinations
            .iter()
            .any(|combo| combo.iter().all(|i| completed.contains(i)))
    }
}
