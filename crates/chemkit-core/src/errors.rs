//! Structured error types shared across chemkit crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`ChemError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (sample counts, offending values, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Failure modes of the bandgap estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationErrorKind {
    /// Fewer than the minimum number of raw samples were supplied.
    InsufficientData,
    /// Too few samples survived normalization.
    InsufficientValidData,
    /// Too few finite points remained after the Tauc transform.
    CalculationError,
    /// The steepest-edge window did not contain enough points.
    NoLinearRegion,
    /// The least-squares step produced a non-finite line.
    FitFailed,
    /// The fitted line does not rise with energy.
    NegativeSlope,
    /// The x-intercept fell outside the accepted energy range.
    UnreasonableBandgap,
    /// Thickness or concentration options were not positive finite numbers.
    InvalidOptions,
}

impl EstimationErrorKind {
    /// Returns the stable kebab-case code stored in [`ErrorInfo::code`].
    pub fn code(self) -> &'static str {
        match self {
            EstimationErrorKind::InsufficientData => "insufficient-data",
            EstimationErrorKind::InsufficientValidData => "insufficient-valid-data",
            EstimationErrorKind::CalculationError => "calculation-error",
            EstimationErrorKind::NoLinearRegion => "no-linear-region",
            EstimationErrorKind::FitFailed => "fit-failed",
            EstimationErrorKind::NegativeSlope => "negative-slope",
            EstimationErrorKind::UnreasonableBandgap => "unreasonable-bandgap",
            EstimationErrorKind::InvalidOptions => "invalid-options",
        }
    }
}

impl Display for EstimationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical error type for chemkit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ChemError {
    /// Malformed caller input (files, records, CLI arguments).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Unit conversion and optical transform errors.
    #[error("conversion error: {0}")]
    Conversion(ErrorInfo),
    /// Bandgap estimation errors.
    #[error("estimation error [{kind}]: {info}")]
    Estimation {
        /// Machine readable failure mode.
        kind: EstimationErrorKind,
        /// Structured payload.
        info: ErrorInfo,
    },
    /// Reaction kinetics errors.
    #[error("kinetics error: {0}")]
    Kinetics(ErrorInfo),
    /// Metadata cache and DOI lookup errors.
    #[error("cache error: {0}")]
    Cache(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl ChemError {
    /// Builds an estimation error whose code mirrors the supplied kind.
    pub fn estimation(kind: EstimationErrorKind, message: impl Into<String>) -> Self {
        ChemError::Estimation {
            kind,
            info: ErrorInfo::new(kind.code(), message),
        }
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ChemError::Input(info)
            | ChemError::Conversion(info)
            | ChemError::Kinetics(info)
            | ChemError::Cache(info)
            | ChemError::Serde(info) => info,
            ChemError::Estimation { info, .. } => info,
        }
    }

    /// Returns the estimation failure mode, if this is an estimation error.
    pub fn estimation_kind(&self) -> Option<EstimationErrorKind> {
        match self {
            ChemError::Estimation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Adds a context entry to the wrapped payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let info = match &mut self {
            ChemError::Input(info)
            | ChemError::Conversion(info)
            | ChemError::Kinetics(info)
            | ChemError::Cache(info)
            | ChemError::Serde(info) => info,
            ChemError::Estimation { info, .. } => info,
        };
        info.context.insert(key.into(), value.to_string());
        self
    }
}
