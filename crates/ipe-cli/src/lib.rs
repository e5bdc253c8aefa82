//! # ipe-cli — Issuance Policy Command-Line Interface
//!
//! Operator tooling around the policy engine: ask whether the CA would
//! issue for a set of names, compute registrable domains, and inspect the
//! challenge offer.
//!
//! ## Subcommands
//!
//! - `check` — run the issuance decision for each name
//! - `registrable` — print the registrable domain (eTLD+1) of each name
//! - `challenges` — print the challenge offer for a name
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; decisions are delegated to `ipe-policy`.
//! - Handlers return a process exit code; errors propagate as `anyhow`.

use std::path::Path;

use anyhow::{Context, Result};

use ipe_config::PolicyConfig;
use ipe_policy::PolicyAuthority;

pub mod challenges;
pub mod check;
pub mod registrable;

/// Build a policy authority from the config file at `config`.
pub fn load_authority(config: Option<&Path>) -> Result<PolicyAuthority> {
    let path = config.context("--config is required for this command")?;
    let config = PolicyConfig::load(path)
        .with_context(|| format!("failed to load policy config {}", path.display()))?;
    let tables = config
        .build_tables()
        .with_context(|| format!("failed to build policy tables from {}", path.display()))?;
    Ok(PolicyAuthority::new(tables))
}
