//! Common validation functions for registration input

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Date format accepted for dates of birth
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{3,32}$").expect("username pattern is valid"));

/// Check if a string is not empty
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check if a username uses only the allowed characters and length
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}

/// Check if a password satisfies the minimum length
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Parse a `YYYY-MM-DD` date of birth, rejecting dates that are not in the past
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()?;
    if date < Utc::now().date_naive() {
        Some(date)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice_01.b-c"));
        assert!(!is_valid_username("al"));
        assert!(!is_valid_username("alice smith"));
        assert!(!is_valid_username(&"a".repeat(33)));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_valid_password("correct horse"));
        assert!(!is_valid_password("short"));
    }

    #[test]
    fn test_date_of_birth_parsing() {
        assert_eq!(
            parse_date_of_birth("1990-04-12"),
            NaiveDate::from_ymd_opt(1990, 4, 12)
        );
        assert!(parse_date_of_birth("12/04/1990").is_none());
        assert!(parse_date_of_birth("2999-01-01").is_none());
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("abc", 1, 3));
        assert!(!length_between("", 1, 3));
        assert!(not_empty(" x "));
        assert!(!not_empty("   "));
    }
}
