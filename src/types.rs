//! Core value types: strength tiers, presentation colors, score, report.

use serde::Serialize;

/// Strength tier assigned to an evaluated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Presentation color for this tier.
    ///
    /// Fixed mapping, depends on nothing but the tier itself:
    /// Weak is red, Medium yellow, Strong green.
    pub fn color_class(self) -> ColorClass {
        match self {
            Strength::Weak => ColorClass::Red,
            Strength::Medium => ColorClass::Yellow,
            Strength::Strong => ColorClass::Green,
        }
    }
}

/// Presentation-only tag derived from [`Strength`], used for UI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorClass {
    Red,
    Yellow,
    Green,
}

impl ColorClass {
    /// CSS class the HTML view styles the tier label with.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorClass::Red => "text-red-600",
            ColorClass::Yellow => "text-yellow-600",
            ColorClass::Green => "text-green-600",
        }
    }
}

/// Aggregate score, one point per satisfied check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Highest reachable score: two length checks plus four character classes.
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Maps the score to a tier. First match wins.
    pub fn strength(self) -> Strength {
        if self.0 >= 5 {
            Strength::Strong
        } else if self.0 >= 3 {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

/// Outcome of a single password evaluation.
///
/// A plain value: no identity beyond its fields, created fresh per
/// evaluation and never stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub strength: Strength,
    pub color_class: ColorClass,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Reflects the length >= 8 check only. The >= 12 check feeds the
    /// score but is not exposed separately.
    pub min_length: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_class_per_tier() {
        assert_eq!(Strength::Weak.color_class(), ColorClass::Red);
        assert_eq!(Strength::Medium.color_class(), ColorClass::Yellow);
        assert_eq!(Strength::Strong.color_class(), ColorClass::Green);
    }

    #[test]
    fn test_css_class_per_color() {
        assert_eq!(ColorClass::Red.css_class(), "text-red-600");
        assert_eq!(ColorClass::Yellow.css_class(), "text-yellow-600");
        assert_eq!(ColorClass::Green.css_class(), "text-green-600");
    }

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(StrengthScore::new(0).strength(), Strength::Weak);
        assert_eq!(StrengthScore::new(2).strength(), Strength::Weak);
        assert_eq!(StrengthScore::new(3).strength(), Strength::Medium);
        assert_eq!(StrengthScore::new(4).strength(), Strength::Medium);
        assert_eq!(StrengthScore::new(5).strength(), Strength::Strong);
        assert_eq!(StrengthScore::new(6).strength(), Strength::Strong);
    }

    #[test]
    fn test_report_serializes_with_camel_case_names() {
        let report = StrengthReport {
            strength: Strength::Weak,
            color_class: ColorClass::Red,
            has_upper: false,
            has_lower: true,
            has_digit: false,
            has_special: false,
            min_length: true,
        };

        let json = serde_json::to_value(&report).expect("Failed to serialize");
        assert_eq!(json["strength"], "Weak");
        assert_eq!(json["colorClass"], "Red");
        assert_eq!(json["hasUpper"], false);
        assert_eq!(json["hasLower"], true);
        assert_eq!(json["hasDigit"], false);
        assert_eq!(json["hasSpecial"], false);
        assert_eq!(json["minLength"], true);
    }
}
