//! Length section - checks the password against both length thresholds.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Length checks for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthChecks {
    /// Character length >= 8.
    pub min_length: bool,
    /// Character length >= 12.
    pub long_length: bool,
}

impl LengthChecks {
    /// Score contribution: one point per satisfied check.
    pub fn points(self) -> u8 {
        self.min_length as u8 + self.long_length as u8
    }
}

/// Checks whether the password meets the minimum and long length thresholds.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> LengthChecks {
    let len = password.expose_secret().chars().count();
    LengthChecks {
        min_length: len >= MIN_LENGTH,
        long_length: len >= LONG_LENGTH,
    }
}
