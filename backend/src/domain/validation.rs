//! Field-level validation helpers shared by contacts and accounts.
//!
//! Form payloads are loosely typed: any field that is not text is treated as
//! an empty string rather than rejected, and unknown fields are ignored.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Atoms may carry non-ASCII letters, as may domain labels. The
        // top-level domain is alphabetic or an `xn--` punycode label.
        let utf8 = r"\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";
        let atom = format!(r"[A-Za-z0-9!#$%&'*+/=?^_`{{|}}~{utf8}-]+");
        let label_char = format!("[A-Za-z0-9{utf8}]");
        let label = format!("{label_char}(?:[A-Za-z0-9{utf8}-]{{0,61}}{label_char})?");
        let tld = format!("(?:[A-Za-z{utf8}]{{2,63}}|xn--[A-Za-z0-9-]{{2,59}})");
        let pattern = format!(r"^{atom}(?:\.{atom})*@(?:{label}\.)+{tld}$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Maximum accepted email length, matching the SMTP path limit.
pub const EMAIL_MAX: usize = 254;

/// Check that `email` is a syntactically valid address.
///
/// # Examples
/// ```
/// use agenda::domain::validation::is_well_formed_email;
///
/// assert!(is_well_formed_email("ana@example.com"));
/// assert!(!is_well_formed_email("ana@example"));
/// ```
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX && email_regex().is_match(email)
}

/// Deserialize any JSON value as text, mapping non-strings to `""`.
///
/// Use with `#[serde(default, deserialize_with = "text_or_empty")]`.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("a@a.com")]
    #[case("user.name+tag@sub.example.org")]
    #[case("o'neil@example.co.uk")]
    #[case("joão@exemplo.com.br")]
    #[case("ana@exemplo.xn--p1ai")]
    #[case("ana@açaí.com.br")]
    fn accepts_well_formed_addresses(#[case] email: &str) {
        assert!(is_well_formed_email(email), "{email} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("user")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@example")]
    #[case("user@@example.com")]
    #[case("user name@example.com")]
    #[case("user@-example.com")]
    #[case("user..name@example.com")]
    #[case("user@example.c0m")]
    #[case("joão silva@exemplo.com")]
    fn rejects_malformed_addresses(#[case] email: &str) {
        assert!(!is_well_formed_email(email), "{email} should be rejected");
    }

    #[rstest]
    fn rejects_overlong_addresses() {
        let email = format!("{}@example.com", "a".repeat(EMAIL_MAX));
        assert!(!is_well_formed_email(&email));
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "text_or_empty")]
        field: String,
    }

    #[rstest]
    #[case(json!({ "field": "kept" }), "kept")]
    #[case(json!({ "field": 42 }), "")]
    #[case(json!({ "field": null }), "")]
    #[case(json!({ "field": ["a"] }), "")]
    #[case(json!({ "field": { "nested": true } }), "")]
    #[case(json!({}), "")]
    fn coerces_non_text_to_empty(#[case] input: Value, #[case] expected: &str) {
        let payload: Payload = serde_json::from_value(input).expect("payload deserialises");
        assert_eq!(payload.field, expected);
    }
}
