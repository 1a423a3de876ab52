//! # Gmail Address Model
//!
//! Defines the base address every alias is derived from.
//!
//! An address is accepted when it has the shape `local-part@domain` where:
//! * the domain is `gmail.com` or `googlemail.com` (case-insensitive),
//! * the local part is one or more of `A-Z a-z 0-9 . _ % + -`.
//!
//! The domain is kept exactly as typed so generated aliases echo the input.

use std::fmt;
use std::str::FromStr;

use crate::error::AliasError;

/// Domains that deliver into a Gmail inbox.
pub const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

/// A validated Gmail base address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GmailAddress {
    local_part: String,
    domain: String,
}

impl GmailAddress {
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl FromStr for GmailAddress {
    type Err = AliasError;

    /// Parses `s` into a [`GmailAddress`].
    ///
    /// Surrounding whitespace is not trimmed: `" jane@gmail.com"` is rejected
    /// just like any other character outside the local-part alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((local_part, domain)) = s.split_once('@') else {
            return Err(AliasError::InvalidAddress(s.to_string()));
        };

        if !is_valid_local_part(local_part) || !is_gmail_domain(domain) {
            return Err(AliasError::InvalidAddress(s.to_string()));
        }

        Ok(Self {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
        })
    }
}

impl fmt::Display for GmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// Returns `true` iff `address` is a well-formed Gmail address.
///
/// Never panics, whatever the input.
pub fn validate(address: &str) -> bool {
    address.parse::<GmailAddress>().is_ok()
}

fn is_valid_local_part(local_part: &str) -> bool {
    !local_part.is_empty() && local_part.chars().all(is_local_part_char)
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_gmail_domain(domain: &str) -> bool {
    GMAIL_DOMAINS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(domain))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_accepts_gmail_shapes() {
        assert!(validate("jane@gmail.com"));
        assert!(validate("jane.doe@googlemail.com"));
        assert!(validate("Jane_Doe+news@GMAIL.COM"));
        assert!(validate("a%b-c@GoogleMail.Com"));
    }

    #[test]
    fn test_validate_rejects_everything_else() {
        assert!(!validate(""));
        assert!(!validate("jane"));
        assert!(!validate("@gmail.com"));
        assert!(!validate("jane@"));
        assert!(!validate("jane@yahoo.com"));
        assert!(!validate("jane@gmail.com.evil"));
        assert!(!validate("jane@@gmail.com"));
        assert!(!validate("ja ne@gmail.com"));
        assert!(!validate(" jane@gmail.com"));
        assert!(!validate("jäne@gmail.com"));
    }

    #[test]
    fn test_parse_keeps_parts_as_typed() {
        let addr: GmailAddress = "Jane.Doe@GMail.com".parse().unwrap();
        assert_eq!(addr.local_part(), "Jane.Doe");
        assert_eq!(addr.domain(), "GMail.com");
        assert_eq!(addr.to_string(), "Jane.Doe@GMail.com");
    }

    #[test]
    fn test_parse_reports_offending_input() {
        assert_eq!(
            "nobody@example.org".parse::<GmailAddress>(),
            Err(AliasError::InvalidAddress("nobody@example.org".to_string()))
        );
    }

    /// Independent reading of
    /// `^[A-Za-z0-9._%+-]+@(gmail\.com|googlemail\.com)$` with the `i` flag.
    fn matches_gmail_pattern(s: &str) -> bool {
        let Some(at) = s.find('@') else {
            return false;
        };
        let (local, domain) = (&s[..at], &s[at + 1..]);
        let local_ok = !local.is_empty()
            && local
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b"._%+-".contains(&b));
        let domain = domain.to_ascii_lowercase();
        local_ok && (domain == "gmail.com" || domain == "googlemail.com")
    }

    proptest! {
        #[test]
        fn test_validate_agrees_with_pattern_on_near_misses(
            s in "[A-Za-z0-9._%+ @!ä-]{0,8}(@|@@)?(gmail|GMail|googlemail|gmai1|yahoo)?(\\.com|\\.COM|\\.co|com)?[ .]?"
        ) {
            prop_assert_eq!(validate(&s), matches_gmail_pattern(&s));
        }

        #[test]
        fn test_validate_agrees_with_pattern_on_arbitrary_input(s in "\\PC*") {
            prop_assert_eq!(validate(&s), matches_gmail_pattern(&s));
        }

        #[test]
        fn test_validate_matches_pattern(
            local in "[A-Za-z0-9._%+-]{1,20}",
            domain in "(?i)(gmail\\.com|googlemail\\.com)"
        ) {
            let address = format!("{local}@{domain}");
            prop_assert!(validate(&address));
        }

        #[test]
        fn test_validate_is_pure(s in "\\PC*") {
            prop_assert_eq!(validate(&s), validate(&s));
        }

        #[test]
        fn test_validate_rejects_foreign_domains(
            local in "[a-z]{1,10}",
            domain in "[a-z]{1,10}\\.(org|net|io)"
        ) {
            let address = format!("{local}@{domain}");
            prop_assert!(!validate(&address));
        }
    }
}
