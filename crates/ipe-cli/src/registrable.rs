//! # Registrable Subcommand
//!
//! Prints the registrable domain (eTLD+1) of each name under the
//! configured public suffix table. Names are lower-cased first; no other
//! syntax checking is applied.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;

use ipe_policy::PolicyAuthority;

/// Arguments for the `ipe registrable` subcommand.
#[derive(Args, Debug)]
pub struct RegistrableArgs {
    /// Names to reduce to their registrable domain.
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Write `<name> <registrable>` or `<name> error: <reason>` per name.
/// Returns whether every name had a registrable domain.
pub fn write_registrable(out: &mut impl Write, pa: &PolicyAuthority, names: &[String]) -> Result<bool> {
    let mut all_ok = true;
    for name in names {
        match pa.psl_plus_one(&name.to_ascii_lowercase()) {
            Ok(domain) => writeln!(out, "{name} {domain}")?,
            Err(e) => {
                all_ok = false;
                writeln!(out, "{name} error: {e}")?;
            }
        }
    }
    Ok(all_ok)
}

/// Execute the registrable subcommand.
pub fn run_registrable(args: &RegistrableArgs, config: Option<&Path>) -> Result<u8> {
    let pa = crate::load_authority(config)?;
    let stdout = std::io::stdout();
    let all_ok = write_registrable(&mut stdout.lock(), &pa, &args.names)?;
    Ok(if all_ok { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipe_policy::{PolicyTables, SuffixTable};

    #[test]
    fn test_write_registrable() {
        let pa = PolicyAuthority::new(PolicyTables::new(
            SuffixTable::from_entries(["com", "co.uk"]),
            SuffixTable::new(),
        ));
        let names = vec![
            "WWW.Example.com".to_string(),
            "shop.example.co.uk".to_string(),
            "com".to_string(),
        ];
        let mut buf = Vec::new();
        let all_ok = write_registrable(&mut buf, &pa, &names).unwrap();
        assert!(!all_ok);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "WWW.Example.com example.com\n\
             shop.example.co.uk example.co.uk\n\
             com error: name has only one label\n"
        );
    }
}
