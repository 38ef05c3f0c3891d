use chemkit_core::{ChemError, EstimationErrorKind};
use serde::{Deserialize, Serialize};

use crate::tauc::TaucPoint;

/// Points kept on each side of the steepest local slope by default.
pub const DEFAULT_WINDOW_HALF_WIDTH: usize = 10;
/// Smallest window accepted for the least-squares fit.
pub const MIN_REGION_POINTS: usize = 3;

/// Window of energy-sorted Tauc points assumed to lie on the absorption edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegion {
    /// First index of the window (inclusive).
    pub start: usize,
    /// One past the last index of the window.
    pub end: usize,
    /// Index with the steepest centered local slope.
    pub peak_index: usize,
    /// Centered local slope at `peak_index`.
    pub peak_slope: f64,
    /// Energy of the first point in the window.
    pub energy_min: f64,
    /// Energy of the last point in the window.
    pub energy_max: f64,
}

impl LinearRegion {
    /// Number of points in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window holds no points.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

fn centered_slope(points: &[TaucPoint], idx: usize) -> Option<f64> {
    let prev = points[idx - 1];
    let next = points[idx + 1];
    let dx = next.x - prev.x;
    if dx == 0.0 || !dx.is_finite() {
        return None;
    }
    let slope = (next.y - prev.y) / dx;
    slope.is_finite().then_some(slope)
}

/// Locates the steepest part of the absorption edge.
///
/// `points` must already be sorted by energy. Every interior point gets the
/// slope between its two neighbours; the largest absolute value wins and ties go
/// to the lowest index. The window spans `half_width` points on each side of it,
/// clipped to the slice.
pub fn find_linear_region(points: &[TaucPoint], half_width: usize) -> Result<LinearRegion, ChemError> {
    let mut best: Option<(usize, f64)> = None;
    for idx in 1..points.len().saturating_sub(1) {
        let Some(slope) = centered_slope(points, idx) else {
            continue;
        };
        if best.map_or(true, |(_, current)| slope.abs() > current.abs()) {
            best = Some((idx, slope));
        }
    }

    let Some((peak_index, peak_slope)) = best else {
        return Err(ChemError::estimation(
            EstimationErrorKind::NoLinearRegion,
            "no local slope could be computed from the sorted points",
        )
        .with_context("points", points.len()));
    };

    let start = peak_index.saturating_sub(half_width);
    let end = peak_index
        .saturating_add(half_width)
        .saturating_add(1)
        .min(points.len());
    if end - start < MIN_REGION_POINTS {
        return Err(ChemError::estimation(
            EstimationErrorKind::NoLinearRegion,
            format!("linear region holds fewer than {MIN_REGION_POINTS} points"),
        )
        .with_context("window", end - start)
        .with_context("peak_index", peak_index));
    }

    log::debug!(
        "steepest edge at index {peak_index} (slope {peak_slope:.6}), window {start}..{end}"
    );
    Ok(LinearRegion {
        start,
        end,
        peak_index,
        peak_slope,
        energy_min: points[start].x,
        energy_max: points[end - 1].x,
    })
}
