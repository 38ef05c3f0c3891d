//! Ordinary least-squares helpers shared by the spectral and kinetic fits.

use serde::{Deserialize, Serialize};

/// Straight line `y = slope * x + intercept` with its coefficient of determination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Fitted slope.
    pub slope: f64,
    /// Fitted intercept on the y axis.
    pub intercept: f64,
    /// Coefficient of determination `1 - SS_res / SS_tot`.
    pub r_squared: f64,
    /// Number of points that entered the fit.
    pub points: usize,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns the root of the fitted line, or `None` for a horizontal line.
    pub fn x_intercept(&self) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        let root = -self.intercept / self.slope;
        root.is_finite().then_some(root)
    }
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Fits `y = slope * x + intercept` by ordinary least squares.
///
/// Returns `None` when the slices differ in length, hold fewer than two points,
/// when every `x` coincides (zero normal-equation denominator) or when the
/// resulting coefficients are not finite. A flat `y` series reports
/// `r_squared = 0`.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }

    let y_mean = mean(ys);
    let (mut ss_tot, mut ss_res) = (0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let predicted = slope * x + intercept;
        ss_tot += (y - y_mean).powi(2);
        ss_res += (y - predicted).powi(2);
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        0.0
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
        points: xs.len(),
    })
}
