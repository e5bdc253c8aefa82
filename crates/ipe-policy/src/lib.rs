//! # ipe-policy — Issuance Policy Decision Engine
//!
//! Decides whether the CA is willing to issue a certificate for a
//! requested identifier, and which challenges a client may complete to
//! prove control of it.
//!
//! ## Architecture
//!
//! - **Suffix** (`suffix.rs`): label-wise longest-suffix matching against
//!   an immutable [`SuffixTable`]. Used twice with different semantics:
//!   a *proper* match for public-suffix eligibility, *any* match for the
//!   blacklist.
//!
//! - **Syntax** (`syntax.rs`): the ordered DNS name checks (character
//!   class, length, IP literal, label count, per-label rules). Produces a
//!   normalized [`DnsName`].
//!
//! - **Registrable** (`registrable.rs`): eTLD+1 extraction built on the
//!   suffix matcher.
//!
//! - **Authority** (`authority.rs`): [`PolicyAuthority`], which owns the
//!   shared [`PolicyTables`] and runs the issuance decision.
//!
//! - **Challenges** (`challenges.rs`): the [`ChallengePolicy`] seam and
//!   today's [`StaticChallengePolicy`].
//!
//! ## Crate Policy
//!
//! - Depends on `ipe-core` only.
//! - Every decision is a pure function of its input and the tables. No
//!   I/O, no locks, no interior mutability.
//! - Table keys are trusted to be lower-case ASCII; the engine normalizes
//!   the requested name but never the tables.

pub mod authority;
pub mod challenges;
pub mod registrable;
pub mod suffix;
pub mod syntax;

pub use authority::{PolicyAuthority, PolicyTables};
pub use challenges::{ChallengePolicy, StaticChallengePolicy};
pub use registrable::{psl_plus_one, RegistrableDomainError};
pub use suffix::{suffix_match, SuffixTable};
pub use syntax::{validate_dns_name, DnsName};
