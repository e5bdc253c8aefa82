//! # Challenges Subcommand
//!
//! Prints the challenge offer for a name. The static policy does not
//! depend on the tables, so no config file is needed.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use ipe_core::{ChallengeOffer, Identifier};
use ipe_policy::{ChallengePolicy, StaticChallengePolicy};

/// Arguments for the `ipe challenges` subcommand.
#[derive(Args, Debug)]
pub struct ChallengesArgs {
    /// Print the offer as JSON.
    #[arg(long)]
    pub json: bool,

    /// The DNS name to build an offer for.
    pub name: String,
}

/// Write an offer as text or JSON.
pub fn write_offer(out: &mut impl Write, offer: &ChallengeOffer, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(offer)?)?;
        return Ok(());
    }
    for (i, challenge) in offer.challenges.iter().enumerate() {
        writeln!(out, "[{i}] {} {}", challenge.kind, challenge.token)?;
    }
    for combo in &offer.combinations {
        let indices: Vec<String> = combo.iter().map(|i| i.to_string()).collect();
        writeln!(out, "combination: {}", indices.join(" + "))?;
    }
    Ok(())
}

/// Execute the challenges subcommand.
pub fn run_challenges(args: &ChallengesArgs) -> Result<u8> {
    let offer = StaticChallengePolicy.challenges_for(&Identifier::dns(args.name.as_str()));
    let stdout = std::io::stdout();
    write_offer(&mut stdout.lock(), &offer, args.json)?;
    Ok(0)
}
