//! # ipe CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ipe_cli::challenges::{run_challenges, ChallengesArgs};
use ipe_cli::check::{run_check, CheckArgs};
use ipe_cli::registrable::{run_registrable, RegistrableArgs};

/// Issuance policy engine CLI.
///
/// Checks names against the CA's issuance policy, computes registrable
/// domains, and shows the challenges offered for a name.
#[derive(Parser, Debug)]
#[command(name = "ipe", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the policy configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide whether the CA would issue for each name.
    Check(CheckArgs),

    /// Print the registrable domain (eTLD+1) of each name.
    Registrable(RegistrableArgs),

    /// Show the challenge offer for a name.
    Challenges(ChallengesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Check(args) => run_check(&args, config),
        Commands::Registrable(args) => run_registrable(&args, config),
        Commands::Challenges(args) => run_challenges(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_check() {
        let cli = Cli::try_parse_from(["ipe", "--config", "policy.yaml", "check", "foo.com", "bar.net"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("policy.yaml")));
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.names, vec!["foo.com", "bar.net"]);
            assert_eq!(args.identifier_type, "dns");
            assert!(!args.json);
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_check_with_type_and_json() {
        let cli = Cli::try_parse_from(["ipe", "check", "--type", "ip", "--json", "10.0.0.1"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.identifier_type, "ip");
            assert!(args.json);
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_check_requires_names() {
        assert!(Cli::try_parse_from(["ipe", "check"]).is_err());
    }

    #[test]
    fn cli_parse_registrable() {
        let cli = Cli::try_parse_from(["ipe", "registrable", "www.example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Registrable(_)));
    }

    #[test]
    fn cli_parse_challenges() {
        let cli = Cli::try_parse_from(["ipe", "challenges", "--json", "example.com"]).unwrap();
        if let Commands::Challenges(args) = cli.command {
            assert!(args.json);
            assert_eq!(args.name, "example.com");
        } else {
            panic!("expected challenges");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ipe", "check", "foo.com", "--config", "p.yaml", "-vv", "--log-json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.log_json);
        assert_eq!(cli.config, Some(PathBuf::from("p.yaml")));
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["ipe"]).is_err());
    }

    #[test]
    fn check_without_config_fails() {
        let args = CheckArgs {
            identifier_type: "dns".to_string(),
            json: false,
            names: vec!["foo.com".to_string()],
        };
        let err = run_check(&args, None).unwrap_err();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn check_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.yaml");
        std::fs::write(
            &path,
            "public_suffix:\n  entries: [com]\nblacklist:\n  entries: [example.com]\n",
        )
        .unwrap();
        let accepted = CheckArgs {
            identifier_type: "dns".to_string(),
            json: false,
            names: vec!["foo.com".to_string()],
        };
        assert_eq!(run_check(&accepted, Some(path.as_path())).unwrap(), 0);
        let refused = CheckArgs {
            identifier_type: "dns".to_string(),
            json: false,
            names: vec!["foo.com".to_string(), "www.example.com".to_string()],
        };
        assert_eq!(run_check(&refused, Some(path.as_path())).unwrap(), 1);
    }
}
