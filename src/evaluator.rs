//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{character_variety_section, length_section};
use crate::types::{StrengthReport, StrengthScore};

/// Evaluates password strength and returns a detailed report.
///
/// Total function: every input, including the empty string, produces a
/// report. The score sums one point per satisfied check (length >= 8,
/// length >= 12, and each of the four character classes); the tier follows
/// from the score alone and the color from the tier.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` containing the tier and the individual checks.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let length = length_section(password);
    let variety = character_variety_section(password);

    let score = StrengthScore::new(length.points() + variety.points());
    let strength = score.strength();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score={} tier={:?}",
        score.value(),
        strength
    );

    StrengthReport {
        strength,
        color_class: strength.color_class(),
        has_upper: variety.has_upper,
        has_lower: variety.has_lower,
        has_digit: variety.has_digit,
        has_special: variety.has_special,
        min_length: length.min_length,
    }
}
