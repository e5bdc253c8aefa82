//! # Policy Authority
//!
//! [`PolicyAuthority`] is the issuance decision point. It owns the shared,
//! immutable [`PolicyTables`] and a [`ChallengePolicy`], and exposes:
//!
//! - [`PolicyAuthority::willing_to_issue`] — the gate the issuance pipeline
//!   must pass before any signing step.
//! - [`PolicyAuthority::challenges_for`] — the challenge offer for an
//!   accepted identifier.
//! - [`PolicyAuthority::psl_plus_one`] — the registrable domain of a name.
//!
//! ## Decision order
//!
//! ```text
//! type == dns ──▶ syntax ──▶ proper PSL match ──▶ no blacklist match ──▶ Ok
//!      │            │              │                      │
//!  InvalidIdentifier Syntax     NonPublic            Blacklisted
//! ```
//!
//! ## Concurrency
//!
//! Tables are built once and shared behind an `Arc`; nothing mutates them
//! afterwards. A `PolicyAuthority` is `Send + Sync` and cheap to clone, so
//! any number of threads may call it at once without synchronization.
//! Replacing the tables means constructing a new authority; there is no
//! in-place reload.

use std::sync::Arc;

use ipe_core::{ChallengeOffer, Identifier, IdentifierType, PolicyError};

use crate::challenges::{ChallengePolicy, StaticChallengePolicy};
use crate::registrable::{psl_plus_one, RegistrableDomainError};
use crate::suffix::{suffix_match, SuffixTable};
use crate::syntax::validate_dns_name;

/// The lookup tables a policy authority decides against.
///
/// Both tables must contain lower-case ASCII entries only. The authority
/// does not normalize them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTables {
    /// Suffixes under which registrants may obtain names.
    pub public_suffixes: SuffixTable,
    /// Names that must never receive a certificate, with their subdomains.
    pub blacklist: SuffixTable,
}

impl PolicyTables {
    /// Bundle a public suffix table and a blacklist.
    pub fn new(public_suffixes: SuffixTable, blacklist: SuffixTable) -> Self {
        Self {
            public_suffixes,
            blacklist,
        }
    }
}

/// Enforces CA issuance policy.
#[derive(Debug, Clone)]
pub struct PolicyAuthority {
    tables: Arc<PolicyTables>,
    challenge_policy: Arc<dyn ChallengePolicy>,
}

impl PolicyAuthority {
    /// Create an authority with the static challenge policy.
    pub fn new(tables: PolicyTables) -> Self {
        Self::with_challenge_policy(tables, StaticChallengePolicy)
    }

    /// Create an authority with a custom challenge policy.
    pub fn with_challenge_policy(
        tables: PolicyTables,
        challenge_policy: impl ChallengePolicy + 'static,
    ) -> Self {
        tracing::info!(
            public_suffixes = tables.public_suffixes.len(),
            blacklist = tables.blacklist.len(),
            "policy authority starting"
        );
        Self {
            tables: Arc::new(tables),
            challenge_policy: Arc::new(challenge_policy),
        }
    }

    /// The tables this authority decides against.
    pub fn tables(&self) -> &PolicyTables {
        &self.tables
    }

    /// Decide whether the CA will issue for `identifier`.
    ///
    /// The identifier must be a DNS name that passes every syntax check,
    /// ends in a public suffix with at least one label in front of it,
    /// and is neither a blacklisted name nor a subdomain of one.
    ///
    /// Total over all inputs and free of side effects; recording the
    /// decision is the caller's job. Blacklist lookups are not constant
    /// time.
    pub fn willing_to_issue(&self, identifier: &Identifier) -> Result<(), PolicyError> {
        if identifier.kind != IdentifierType::Dns {
            return Err(PolicyError::invalid_identifier(format!(
                "unsupported identifier type {:?}",
                identifier.kind.as_str()
            )));
        }

        let name = validate_dns_name(&identifier.value)?;
        let labels = name.labels();

        if !suffix_match(labels, &self.tables.public_suffixes, true) {
            return Err(PolicyError::non_public());
        }

        if suffix_match(labels, &self.tables.blacklist, false) {
            return Err(PolicyError::blacklisted());
        }

        Ok(())
    }

    /// Challenges and acceptable combinations for `identifier`.
    pub fn challenges_for(&self, identifier: &Identifier) -> ChallengeOffer {
        self.challenge_policy.challenges_for(identifier)
    }

    /// Registrable domain (eTLD+1) of `domain` under this authority's
    /// public suffix table.
    pub fn psl_plus_one(&self, domain: &str) -> Result<String, RegistrableDomainError> {
        psl_plus_one(domain, &self.tables.public_suffixes)
    }
}
