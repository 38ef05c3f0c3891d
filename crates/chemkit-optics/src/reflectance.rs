use chemkit_core::ChemError;

use crate::conversion_error;

/// Normalizes a reflectance or transmittance reading to a fraction.
///
/// Values above 1 are read as percentages and divided by 100. Non-finite input
/// is passed through so the caller's range check rejects it.
pub fn normalize_fraction(value: f64) -> f64 {
    if value > 1.0 {
        value / 100.0
    } else {
        value
    }
}

/// Kubelka-Munk remission function `F(R) = (1 - R)² / (2R)`.
///
/// `R` may be a fraction or a percentage. The normalized value must lie strictly
/// between 0 and 1.
pub fn kubelka_munk(reflectance: f64) -> Result<f64, ChemError> {
    let r = normalize_fraction(reflectance);
    if !r.is_finite() || r <= 0.0 || r >= 1.0 {
        return Err(conversion_error(
            "invalid-reflectance",
            "reflectance must lie strictly between 0 and 1 (or 0 and 100 %)",
            reflectance,
        ));
    }
    Ok((1.0 - r).powi(2) / (2.0 * r))
}

/// Absorption coefficient `α = -ln(T) / d` from transmittance and thickness.
///
/// `T` may be a fraction or a percentage and must normalize into (0, 1].
/// The result carries the inverse unit of `thickness`.
pub fn absorption_coefficient(transmittance: f64, thickness: f64) -> Result<f64, ChemError> {
    let t = normalize_fraction(transmittance);
    if !t.is_finite() || t <= 0.0 || t > 1.0 {
        return Err(conversion_error(
            "invalid-transmittance",
            "transmittance must lie in (0, 1] (or (0, 100] %)",
            transmittance,
        ));
    }
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(conversion_error(
            "invalid-thickness",
            "thickness must be a positive finite number",
            thickness,
        ));
    }
    Ok(-t.ln() / thickness)
}
