use std::fmt;

use serde::{Deserialize, Serialize};

/// Advisory grade of a Tauc fit, derived from its coefficient of determination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitQuality {
    /// `r² < 0.90`.
    Poor,
    /// `0.90 <= r² < 0.95`.
    Fair,
    /// `0.95 <= r² < 0.99`.
    Good,
    /// `r² >= 0.99`.
    Excellent,
}

impl FitQuality {
    /// Grades a fit. NaN grades as poor.
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.99 {
            FitQuality::Excellent
        } else if r_squared >= 0.95 {
            FitQuality::Good
        } else if r_squared >= 0.90 {
            FitQuality::Fair
        } else {
            FitQuality::Poor
        }
    }

    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            FitQuality::Poor => "poor",
            FitQuality::Fair => "fair",
            FitQuality::Good => "good",
            FitQuality::Excellent => "excellent",
        }
    }
}

impl fmt::Display for FitQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::FitQuality;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(FitQuality::from_r_squared(0.99), FitQuality::Excellent);
        assert_eq!(FitQuality::from_r_squared(0.989_999), FitQuality::Good);
        assert_eq!(FitQuality::from_r_squared(0.95), FitQuality::Good);
        assert_eq!(FitQuality::from_r_squared(0.90), FitQuality::Fair);
        assert_eq!(FitQuality::from_r_squared(0.5), FitQuality::Poor);
        assert_eq!(FitQuality::from_r_squared(f64::NAN), FitQuality::Poor);
        assert!(FitQuality::Excellent > FitQuality::Fair);
    }
}
