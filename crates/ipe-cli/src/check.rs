//! # Check Subcommand
//!
//! Runs the issuance decision for each name and reports the outcome.
//! Each decision is also emitted as a structured `tracing` event so the
//! run leaves an audit trail.
//!
//! Exit status is 0 when every name is accepted and 1 otherwise.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ipe_core::{Identifier, IdentifierType, PolicyErrorKind};
use ipe_policy::PolicyAuthority;

/// Arguments for the `ipe check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifier type to present with each name.
    #[arg(long = "type", default_value = "dns")]
    pub identifier_type: String,

    /// Print one JSON object per name instead of text.
    #[arg(long)]
    pub json: bool,

    /// Names to check.
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Outcome of one decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The identifier presented to the authority.
    pub identifier: Identifier,
    /// Whether issuance is permitted.
    pub accepted: bool,
    /// Refusal kind, when refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<PolicyErrorKind>,
    /// Refusal message, when refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decide every name under `kind`.
pub fn check_names(pa: &PolicyAuthority, kind: &IdentifierType, names: &[String]) -> Vec<CheckReport> {
    names
        .iter()
        .map(|name| {
            let identifier = Identifier::new(kind.clone(), name.as_str());
            let report = match pa.willing_to_issue(&identifier) {
                Ok(()) => CheckReport {
                    identifier,
                    accepted: true,
                    kind: None,
                    error: None,
                },
                Err(e) => CheckReport {
                    identifier,
                    accepted: false,
                    kind: Some(e.kind()),
                    error: Some(e.to_string()),
                },
            };
            tracing::info!(
                identifier = %report.identifier,
                accepted = report.accepted,
                kind = ?report.kind,
                "issuance decision"
            );
            report
        })
        .collect()
}

/// Write reports as text or JSON lines.
pub fn write_reports(out: &mut impl Write, reports: &[CheckReport], json: bool) -> Result<()> {
    for report in reports {
        if json {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
        } else if report.accepted {
            writeln!(out, "ACCEPT {}", report.identifier.value)?;
        } else {
            writeln!(
                out,
                "REJECT {}: {}",
                report.identifier.value,
                report.error.as_deref().unwrap_or_default()
            )?;
        }
    }
    Ok(())
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, config: Option<&Path>) -> Result<u8> {
    let pa = crate::load_authority(config)?;
    let kind = IdentifierType::from(args.identifier_type.as_str());
    let reports = check_names(&pa, &kind, &args.names);

    let stdout = std::io::stdout();
    write_reports(&mut stdout.lock(), &reports, args.json)?;

    Ok(if reports.iter().all(|r| r.accepted) { 0 } else { 1 })
}
