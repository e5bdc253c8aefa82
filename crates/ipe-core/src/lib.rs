//! # ipe-core — Foundational Types for the Issuance Policy Engine
//!
//! Defines the values that cross the boundary between the policy engine
//! and its callers: the requested [`Identifier`], the closed
//! [`PolicyError`] taxonomy returned when issuance is refused, and the
//! [`Challenge`] descriptors offered to a client for proving control.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ipe-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Public data types derive `Debug`, `Clone`, and `Serialize`/`Deserialize`.

pub mod challenge;
pub mod error;
pub mod identifier;

// Re-export primary types for ergonomic imports.
pub use challenge::{Challenge, ChallengeOffer, ChallengeStatus, ChallengeType};
pub use error::{PolicyError, PolicyErrorKind};
pub use identifier::{Identifier, IdentifierType};
