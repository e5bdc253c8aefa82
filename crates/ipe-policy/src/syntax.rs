//! # DNS Name Syntax Validation
//!
//! Checks a raw requested name against the CA's DNS hostname rules and
//! produces a normalized [`DnsName`]. The checks run in a fixed order and
//! the first failure short-circuits with a [`PolicyErrorKind::Syntax`]
//! error:
//!
//! 1. Every byte is in `[A-Za-z0-9.-]`.
//! 2. The name is lower-cased.
//! 3. Total length is at most [`MAX_NAME_LENGTH`] bytes.
//! 4. The name does not parse as an IPv4 or IPv6 literal.
//! 5. The label count is within `[MIN_LABELS, MAX_LABELS]`.
//! 6. Each label is 1 to [`MAX_LABEL_LENGTH`] bytes, starts with an
//!    alphanumeric, continues with alphanumerics or hyphens, and does not
//!    carry the `xn--` IDN prefix.
//!
//! Underscores are rejected even though some DNS deployments accept them.
//!
//! [`PolicyErrorKind::Syntax`]: ipe_core::PolicyErrorKind::Syntax

use std::net::IpAddr;

use ipe_core::PolicyError;

use crate::suffix::join_labels;

/// Maximum total length of a name, in bytes.
pub const MAX_NAME_LENGTH: usize = 255;

/// Minimum number of labels.
pub const MIN_LABELS: usize = 2;

/// Maximum number of labels.
pub const MAX_LABELS: usize = 10;

/// Maximum length of a single label, in bytes.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Label prefix marking an IDN (punycode) label.
const PUNYCODE_PREFIX: &str = "xn--";

/// A DNS name that passed every syntax check, in lower-case canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsName {
    labels: Vec<String>,
}

impl DnsName {
    /// Validate and normalize a raw name.
    pub fn parse(raw: &str) -> Result<Self, PolicyError> {
        validate_dns_name(raw)
    }

    /// The labels, left to right.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The normalized name as a single string.
    pub fn to_canonical(&self) -> String {
        join_labels(&self.labels)
    }
}

impl std::fmt::Display for DnsName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

/// Whether a byte is in the DNS hostname character set.
fn is_dns_character(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'-'
}

/// Run the ordered syntax checks on `raw`.
pub fn validate_dns_name(raw: &str) -> Result<DnsName, PolicyError> {
    if let Some(pos) = raw.bytes().position(|b| !is_dns_character(b)) {
        return Err(PolicyError::syntax(format!(
            "invalid character at byte {pos}"
        )));
    }

    let name = raw.to_ascii_lowercase();
    if name.len() > MAX_NAME_LENGTH {
        return Err(PolicyError::syntax(format!(
            "name is {} bytes, limit is {MAX_NAME_LENGTH}",
            name.len()
        )));
    }

    if name.parse::<IpAddr>().is_ok() {
        return Err(PolicyError::syntax("name is an IP address literal"));
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < MIN_LABELS || labels.len() > MAX_LABELS {
        return Err(PolicyError::syntax(format!(
            "name has {} labels, allowed range is {MIN_LABELS}..={MAX_LABELS}",
            labels.len()
        )));
    }

    for label in &labels {
        check_label(label)?;
    }

    Ok(DnsName {
        labels: labels.into_iter().map(str::to_string).collect(),
    })
}

fn check_label(label: &str) -> Result<(), PolicyError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(PolicyError::syntax(format!(
            "label length {} outside 1..={MAX_LABEL_LENGTH}",
            label.len()
        )));
    }

    let bytes = label.as_bytes();
    let well_formed = bytes[0].is_ascii_alphanumeric()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'-');
    if !well_formed {
        return Err(PolicyError::syntax(format!("malformed label {label:?}")));
    }

    if label.starts_with(PUNYCODE_PREFIX) {
        return Err(PolicyError::syntax(format!(
            "IDN label {label:?} is not supported"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipe_core::PolicyErrorKind;
    use proptest::prelude::*;

    fn assert_syntax_error(raw: &str) {
        match validate_dns_name(raw) {
            Err(e) => assert_eq!(e.kind(), PolicyErrorKind::Syntax, "{raw:?}: {e}"),
            Ok(name) => panic!("{raw:?} unexpectedly accepted as {name}"),
        }
    }

    #[test]
    fn test_accepts_ordinary_names() {
        let name = validate_dns_name("www.Example.COM").unwrap();
        assert_eq!(name.labels(), &["www", "example", "com"]);
        assert_eq!(name.to_canonical(), "www.example.com");
        assert_eq!(name.to_string(), "www.example.com");
        assert!(validate_dns_name("a-b.c0.net").is_ok());
        assert!(validate_dns_name("1password.com").is_ok());
    }

    #[test]
    fn test_trailing_hyphen_allowed() {
        // Only the leading character is constrained.
        assert!(validate_dns_name("foo-.com").is_ok());
    }

    #[test]
    fn test_rejects_bad_characters() {
        assert_syntax_error("under_score.com");
        assert_syntax_error("space here.com");
        assert_syntax_error("bang!.com");
        assert_syntax_error("caf\u{e9}.com");
        assert_syntax_error("colon:8080.com");
        assert_syntax_error("star.*.com");
    }

    #[test]
    fn test_rejects_too_few_labels() {
        assert_syntax_error("");
        assert_syntax_error("com");
        assert_syntax_error("localhost");
    }

    #[test]
    fn test_rejects_too_many_labels() {
        assert!(validate_dns_name("a.b.c.d.e.f.g.h.i.com").is_ok());
        assert_syntax_error("a.b.c.d.e.f.g.h.i.j.com");
    }

    #[test]
    fn test_rejects_empty_labels() {
        assert_syntax_error(".com");
        assert_syntax_error("example..com");
        assert_syntax_error("example.com.");
        assert_syntax_error(".");
    }

    #[test]
    fn test_rejects_leading_hyphen() {
        assert_syntax_error("-foo.com");
        assert_syntax_error("foo.-com");
    }

    #[test]
    fn test_rejects_punycode() {
        assert_syntax_error("xn--bcher-kva.com");
        assert_syntax_error("www.XN--bcher-kva.com");
        assert!(validate_dns_name("xn-bcher.com").is_ok());
    }

    #[test]
    fn test_rejects_ip_literals() {
        assert_syntax_error("127.0.0.1");
        assert_syntax_error("10.0.0.255");
        // IPv6 literals never get past the character class.
        assert_syntax_error("::1");
        assert_syntax_error("2001:db8::1");
    }

    #[test]
    fn test_numeric_non_ip_names_pass_syntax() {
        assert!(validate_dns_name("1.2.3").is_ok());
        assert!(validate_dns_name("256.1.1.1").is_ok());
    }

    #[test]
    fn test_label_length_boundary() {
        let ok = format!("{}.com", "a".repeat(63));
        assert!(validate_dns_name(&ok).is_ok());
        let too_long = format!("{}.com", "a".repeat(64));
        assert_syntax_error(&too_long);
    }

    #[test]
    fn test_total_length_boundary() {
        // Four 63-byte labels plus "com" and dots: 4*63 + 3 + 4 = 259 bytes.
        let label = "a".repeat(63);
        let too_long = format!("{label}.{label}.{label}.{label}.com");
        assert!(too_long.len() > MAX_NAME_LENGTH);
        assert_syntax_error(&too_long);

        // 63 + 63 + 63 + 61 + 3 dots = 253 bytes.
        let short = "b".repeat(61);
        let fits = format!("{label}.{label}.{label}.{short}");
        assert!(fits.len() <= MAX_NAME_LENGTH);
        assert!(validate_dns_name(&fits).is_ok());
    }

    #[test]
    fn test_error_carries_detail() {
        let err = validate_dns_name("under_score.com").unwrap_err();
        assert_eq!(err.detail(), Some("invalid character at byte 5"));
    }

    proptest! {
        /// Validation never panics, whatever the input.
        #[test]
        fn validate_is_total(raw in ".{0,300}") {
            let _ = validate_dns_name(&raw);
        }

        /// Any name of 2..=10 well-formed lower-case labels is accepted.
        #[test]
        fn well_formed_names_accepted(
            labels in prop::collection::vec("[a-wyz0-9][a-z0-9-]{0,20}", 2..=10)
        ) {
            let raw = labels.join(".");
            prop_assume!(raw.parse::<IpAddr>().is_err());
            let name = validate_dns_name(&raw);
            prop_assert!(name.is_ok(), "{raw:?} rejected: {:?}", name.err());
        }

        /// Case does not affect the outcome or the canonical form.
        #[test]
        fn case_insensitive(raw in "[a-zA-Z0-9.-]{0,40}") {
            let upper = validate_dns_name(&raw.to_ascii_uppercase());
            let lower = validate_dns_name(&raw.to_ascii_lowercase());
            prop_assert_eq!(upper.is_ok(), lower.is_ok());
            if let (Ok(u), Ok(l)) = (upper, lower) {
                prop_assert_eq!(u, l);
            }
        }
    }
}
