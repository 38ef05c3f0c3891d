use chemkit_core::errors::{ChemError, ErrorInfo, EstimationErrorKind};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("samples", 4)
        .with_context("reason", "example")
}

#[test]
fn conversion_error_surface() {
    let err = ChemError::Conversion(sample_info("invalid-wavelength", "wavelength must be positive"));
    assert_eq!(err.info().code, "invalid-wavelength");
    assert_eq!(err.info().context.get("samples").map(String::as_str), Some("4"));
    assert_eq!(err.estimation_kind(), None);
}

#[test]
fn estimation_error_code_tracks_kind() {
    let err = ChemError::estimation(EstimationErrorKind::NegativeSlope, "slope must be positive");
    assert_eq!(err.estimation_kind(), Some(EstimationErrorKind::NegativeSlope));
    assert_eq!(err.info().code, "negative-slope");
    assert!(err.to_string().contains("negative-slope"));
}

#[test]
fn context_can_be_added_after_construction() {
    let err = ChemError::estimation(EstimationErrorKind::InsufficientData, "too few samples")
        .with_context("received", 3);
    assert_eq!(err.info().context.get("received").map(String::as_str), Some("3"));
}

#[test]
fn display_includes_hint_and_context() {
    let info = sample_info("C001", "rank mismatch").with_hint("supply more points");
    let rendered = ChemError::Kinetics(info).to_string();
    assert!(rendered.starts_with("kinetics error: rank mismatch (code: C001)"));
    assert!(rendered.contains("reason=example"));
    assert!(rendered.contains("hint: supply more points"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = ChemError::estimation(EstimationErrorKind::FitFailed, "non-finite slope");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Estimation");
    assert_eq!(json["detail"]["kind"], "fit_failed");
    let restored: ChemError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, err);
}

#[test]
fn every_kind_has_distinct_code() {
    let kinds = [
        EstimationErrorKind::InsufficientData,
        EstimationErrorKind::InsufficientValidData,
        EstimationErrorKind::CalculationError,
        EstimationErrorKind::NoLinearRegion,
        EstimationErrorKind::FitFailed,
        EstimationErrorKind::NegativeSlope,
        EstimationErrorKind::UnreasonableBandgap,
        EstimationErrorKind::InvalidOptions,
    ];
    let codes: std::collections::BTreeSet<_> = kinds.iter().map(|kind| kind.code()).collect();
    assert_eq!(codes.len(), kinds.len());
}
