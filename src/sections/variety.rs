//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// Characters that count as special. Fixed set: anything outside it
/// (spaces, underscores, non-ASCII symbols) does not qualify.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Character-class checks for a password. ASCII ranges only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarietyChecks {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl VarietyChecks {
    /// Score contribution: one point per character class present.
    pub fn points(self) -> u8 {
        [
            self.has_upper,
            self.has_lower,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }
}

/// Checks which character classes appear in the password.
pub fn character_variety_section(password: &SecretString) -> VarietyChecks {
    let pwd = password.expose_secret();
    VarietyChecks {
        has_upper: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}
