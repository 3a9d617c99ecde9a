//! Common types for confidence intervals

use std::fmt;
use survey_core::{Error, Result};

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Build a symmetric interval around an estimate
    pub fn around(estimate: f64, margin: f64, confidence_level: f64) -> Self {
        Self::new(estimate - margin, estimate + margin, estimate, confidence_level)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.2}, {:.2}], estimate: {:.2}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level validated to lie in the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level.
    ///
    /// Fails with [`Error::InvalidParameter`] if the level is not in (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Cumulative probability at which the two-tailed quantile is taken
    pub fn quantile_probability(&self) -> f64 {
        self.0 + self.tail_probability()
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0, 5.0, 0.95);

        assert_eq!(ci.width(), 6.0);
        assert_eq!(ci.margin_of_error(), 3.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
    }

    #[test]
    fn test_interval_around_estimate() {
        let ci = ConfidenceInterval::around(10.0, 1.5, 0.9);
        assert_eq!(ci.lower, 8.5);
        assert_eq!(ci.upper, 11.5);
        assert_eq!(ci.estimate, 10.0);
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95).unwrap();
        assert_eq!(level.value(), 0.95);
        assert_relative_eq!(level.alpha(), 0.05, epsilon = 1e-10);
        assert_relative_eq!(level.tail_probability(), 0.025, epsilon = 1e-10);
        assert_relative_eq!(level.quantile_probability(), 0.975, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_confidence_levels() {
        for level in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            assert!(matches!(
                ConfidenceLevel::new(level).unwrap_err(),
                Error::InvalidParameter(_)
            ));
        }
    }

    #[test]
    fn test_display() {
        let ci = ConfidenceInterval::new(2.5, 7.5, 5.0, 0.95);
        assert_eq!(format!("{ci}"), "95.0% CI: [2.50, 7.50], estimate: 5.00");

        let level = ConfidenceLevel::NINETY_NINE;
        assert_eq!(format!("{level}"), "99.0%");
    }
}
