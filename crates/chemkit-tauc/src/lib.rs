#![deny(missing_docs)]
#![doc = "Tauc-plot bandgap estimation: sample normalization, steepest-edge window selection, least-squares extrapolation and fit classification."]

/// Bandgap estimation entry points and the result aggregate.
pub mod estimator;
/// Advisory fit-quality grading.
pub mod quality;
/// Steepest-edge linear region selection.
pub mod region;
/// Raw observations, band types and estimator options.
pub mod sample;
/// Tauc transform of normalized samples.
pub mod tauc;

pub use estimator::{estimate_bandgap, format_equation, BandgapEstimate, BandgapEstimator};
pub use quality::FitQuality;
pub use region::{find_linear_region, LinearRegion, DEFAULT_WINDOW_HALF_WIDTH, MIN_REGION_POINTS};
pub use sample::{normalize_samples, BandType, EstimatorOptions, RawSample, Sample, MIN_SAMPLES};
pub use tauc::{tauc_points, tauc_transform, TaucPoint};
