//! # Registrable Domain Extraction (PSL+1)
//!
//! Computes the registrable domain of a name: the shortest right-anchored
//! label sequence consisting of a public suffix plus exactly one label in
//! front of it. For `www.example.co.uk` with `co.uk` in the table this is
//! `example.co.uk`.
//!
//! This function does not check DNS syntax. Callers that accept input
//! from clients should run [`validate_dns_name`](crate::validate_dns_name)
//! first and pass the canonical form.

use thiserror::Error;

use crate::suffix::{join_labels, suffix_match, SuffixTable};

/// Errors from registrable-domain extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrableDomainError {
    /// The name has a single label.
    #[error("name has only one label")]
    TooFewLabels,

    /// The name does not end in a public suffix with a label in front of it.
    #[error("name does not have a public suffix")]
    NoPublicSuffix,

    /// The full name is a proper suffix match but no split point is.
    /// Indicates a defect in the matcher, not bad input.
    #[error("no registrable split point found for {domain:?}")]
    Inconsistent {
        /// The name being processed.
        domain: String,
    },
}

/// Return the registrable domain (eTLD+1) of `domain`.
pub fn psl_plus_one(domain: &str, public_suffixes: &SuffixTable) -> Result<String, RegistrableDomainError> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(RegistrableDomainError::TooFewLabels);
    }
    if !suffix_match(&labels, public_suffixes, true) {
        return Err(RegistrableDomainError::NoPublicSuffix);
    }

    // Start one label short of the whole name and walk toward the first
    // label; the first proper match is the shortest registrable suffix.
    for i in (0..labels.len() - 1).rev() {
        if suffix_match(&labels[i..], public_suffixes, true) {
            return Ok(join_labels(&labels[i..]));
        }
    }

    Err(RegistrableDomainError::Inconsistent {
        domain: domain.to_string(),
    })
}
