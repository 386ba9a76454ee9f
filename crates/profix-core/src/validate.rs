//! Predicates over free-text form input
//!
//! Two phone checks coexist on purpose: the booking form uses the strict
//! UAE pattern, the booking endpoint only checks the digit count. An
//! 11-digit number passes the endpoint and fails the form.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// +971 XX XXX XXXX, 0XX XXX XXXX or the bare 9-digit subscriber number
static UAE_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(971|0)?[0-9]{9}$").expect("valid UAE phone regex"));

/// Digit count accepted by the booking endpoint
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 9..=15;

/// Strip everything but ASCII digits
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Permissive email check: `local@domain.tld` with no whitespace and a
/// single `@`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strict UAE mobile/landline check after stripping formatting
pub fn is_valid_uae_phone(phone: &str) -> bool {
    UAE_PHONE_RE.is_match(&digits_only(phone))
}

/// Loose international check used by the booking endpoint: 9 to 15 digits
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_DIGITS.contains(&digits_only(phone).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.ae"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("test.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@example"));
        assert!(!is_valid_email("te st@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_uae_phone() {
        assert!(is_valid_uae_phone("+971501234567"));
        assert!(is_valid_uae_phone("971501234567"));
        assert!(is_valid_uae_phone("0501234567"));
        assert!(is_valid_uae_phone("501234567"));
        assert!(is_valid_uae_phone("+971 50 123 4567"));
        assert!(is_valid_uae_phone("050-123-4567"));
    }

    #[test]
    fn test_invalid_uae_phone() {
        assert!(!is_valid_uae_phone("123"));
        assert!(!is_valid_uae_phone("abcdefghij"));
        assert!(!is_valid_uae_phone(""));
        assert!(!is_valid_uae_phone("15012345678"));
        assert!(!is_valid_uae_phone("+44 20 7946 0958"));
    }

    #[test]
    fn test_generic_phone_length() {
        assert!(is_valid_phone("501234567"));
        assert!(is_valid_phone("+971501234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("phone"));
    }

    #[test]
    fn test_endpoint_and_form_checks_disagree_on_eleven_digits() {
        let eleven = "15012345678";
        assert!(is_valid_phone(eleven));
        assert!(!is_valid_uae_phone(eleven));
    }

    #[test]
    fn test_digits_only_ignores_non_ascii_digits() {
        assert_eq!(digits_only("+971 (50) 123-4567"), "971501234567");
        assert_eq!(digits_only("٠١٢"), "");
    }
}
