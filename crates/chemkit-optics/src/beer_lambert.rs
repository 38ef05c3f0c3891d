use chemkit_core::ChemError;

use crate::conversion_error;
use crate::reflectance::normalize_fraction;

fn positive(code: &str, what: &str, value: f64) -> Result<f64, ChemError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(conversion_error(
            code,
            format!("{what} must be a positive finite number"),
            value,
        ));
    }
    Ok(value)
}

/// Absorbance `A = ε·l·c` for molar absorptivity (M⁻¹cm⁻¹), path (cm) and
/// concentration (M).
pub fn absorbance(molar_absorptivity: f64, path_cm: f64, concentration_m: f64) -> Result<f64, ChemError> {
    let epsilon = positive("invalid-absorptivity", "molar absorptivity", molar_absorptivity)?;
    let path = positive("invalid-path-length", "path length", path_cm)?;
    if !concentration_m.is_finite() || concentration_m < 0.0 {
        return Err(conversion_error(
            "invalid-concentration",
            "concentration must be a non-negative finite number",
            concentration_m,
        ));
    }
    Ok(epsilon * path * concentration_m)
}

/// Concentration `c = A / (ε·l)`.
pub fn concentration(absorbance: f64, molar_absorptivity: f64, path_cm: f64) -> Result<f64, ChemError> {
    if !absorbance.is_finite() || absorbance < 0.0 {
        return Err(conversion_error(
            "invalid-absorbance",
            "absorbance must be a non-negative finite number",
            absorbance,
        ));
    }
    let epsilon = positive("invalid-absorptivity", "molar absorptivity", molar_absorptivity)?;
    let path = positive("invalid-path-length", "path length", path_cm)?;
    Ok(absorbance / (epsilon * path))
}

/// Absorbance `A = -log10(T)`; `T` accepts a fraction or a percentage.
pub fn transmittance_to_absorbance(transmittance: f64) -> Result<f64, ChemError> {
    let t = normalize_fraction(transmittance);
    if !t.is_finite() || t <= 0.0 || t > 1.0 {
        return Err(conversion_error(
            "invalid-transmittance",
            "transmittance must lie in (0, 1] (or (0, 100] %)",
            transmittance,
        ));
    }
    Ok(-t.log10())
}

/// Fractional transmittance `T = 10^(-A)`.
pub fn absorbance_to_transmittance(absorbance: f64) -> Result<f64, ChemError> {
    if !absorbance.is_finite() {
        return Err(conversion_error(
            "invalid-absorbance",
            "absorbance must be finite",
            absorbance,
        ));
    }
    Ok(10f64.powf(-absorbance))
}
