//! Percentage value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rate expressed in percent, e.g. `62.5` for 62.5%.
///
/// Displays rounded to one decimal place, dropping the decimal when the
/// rounded value is integral (`50%`, `33.3%`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a percentage from a percent value.
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Creates `part / whole` as a percentage, zero when `whole` is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self(part as f64 / whole as f64 * 100.0)
    }

    /// Returns the value in percent.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Signed difference in percentage points (`self - other`).
    pub fn points_since(&self, other: Percentage) -> f64 {
        self.0 - other.0
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a percent value per the journal's display rule.
pub fn format_percent(value: f64) -> String {
    // -0.0 would print as "-0%"
    let rounded = round1(value) + 0.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_percent(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_computes_ratio() {
        assert_eq!(Percentage::of(1, 4).value(), 25.0);
        assert_eq!(Percentage::of(3, 3).value(), 100.0);
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        let p = Percentage::of(0, 0);
        assert_eq!(p, Percentage::ZERO);
        assert!(!p.value().is_nan());
    }

    #[test]
    fn integral_values_display_without_decimal() {
        assert_eq!(Percentage::new(50.0).to_string(), "50%");
        assert_eq!(Percentage::ZERO.to_string(), "0%");
        assert_eq!(Percentage::new(100.0).to_string(), "100%");
    }

    #[test]
    fn fractional_values_display_one_decimal() {
        assert_eq!(Percentage::of(1, 3).to_string(), "33.3%");
        assert_eq!(Percentage::of(2, 3).to_string(), "66.7%");
        assert_eq!(Percentage::new(12.25).to_string(), "12.3%");
    }

    #[test]
    fn values_rounding_to_integer_drop_decimal() {
        assert_eq!(Percentage::new(99.96).to_string(), "100%");
        assert_eq!(format_percent(-5.04), "-5%");
    }

    #[test]
    fn points_since_is_a_difference_not_a_ratio() {
        let current = Percentage::new(40.0);
        let previous = Percentage::new(25.0);
        assert!((current.points_since(previous) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(5.55555), 5.6);
        assert_eq!(round1(-5.55555), -5.6);
        assert_eq!(round1(0.04), 0.0);
    }
}
