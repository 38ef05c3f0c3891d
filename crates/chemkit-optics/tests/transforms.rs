use chemkit_optics::{
    absorbance, absorbance_to_transmittance, absorption_coefficient, concentration, kubelka_munk,
    spin_state, splitting_from_wavelength, transmittance_to_absorbance, SpinState,
};

#[test]
fn kubelka_munk_boundaries_are_errors() {
    for bad in [0.0, 1.0, 100.0, -0.2, 150.0, f64::NAN] {
        let err = kubelka_munk(bad).unwrap_err();
        assert_eq!(err.info().code, "invalid-reflectance", "input {bad}");
    }
}

#[test]
fn kubelka_munk_accepts_fraction_and_percent() {
    let fraction = kubelka_munk(0.5).expect("fraction");
    let percent = kubelka_munk(50.0).expect("percent");
    assert!((fraction - 0.25).abs() < 1e-12);
    assert_eq!(fraction, percent);
}

#[test]
fn absorption_coefficient_follows_log_law() {
    let alpha = absorption_coefficient(0.5, 2.0).expect("alpha");
    assert!((alpha - std::f64::consts::LN_2 / 2.0).abs() < 1e-12);
    assert_eq!(absorption_coefficient(100.0, 1.0).expect("full transmission"), 0.0);
    assert_eq!(
        absorption_coefficient(0.0, 1.0).unwrap_err().info().code,
        "invalid-transmittance"
    );
    assert_eq!(
        absorption_coefficient(0.5, 0.0).unwrap_err().info().code,
        "invalid-thickness"
    );
    assert!(absorption_coefficient(250.0, 1.0).is_err());
}

#[test]
fn beer_lambert_relations_invert() {
    let a = absorbance(1.2e4, 1.0, 5e-5).expect("absorbance");
    assert!((a - 0.6).abs() < 1e-12);
    let c = concentration(a, 1.2e4, 1.0).expect("concentration");
    assert!((c - 5e-5).abs() < 1e-15);
    assert!(concentration(0.6, 0.0, 1.0).is_err());
    assert!(absorbance(1.0, -1.0, 1.0).is_err());

    let t = absorbance_to_transmittance(1.0).expect("transmittance");
    assert!((t - 0.1).abs() < 1e-12);
    assert!((transmittance_to_absorbance(10.0).expect("absorbance") - 1.0).abs() < 1e-12);
    assert!(transmittance_to_absorbance(0.0).is_err());
}

#[test]
fn crystal_field_splitting_units() {
    let split = splitting_from_wavelength(500.0).expect("splitting");
    assert!((split.energy_ev - 2.479_68).abs() < 1e-9);
    assert!((split.wavenumber_cm1 - 20_000.0).abs() < 5.0);
    assert!((split.energy_kj_mol - 239.25).abs() < 0.1);
    assert!(splitting_from_wavelength(0.0).is_err());
}

#[test]
fn spin_state_compares_against_pairing_energy() {
    assert_eq!(spin_state(3.0, 2.0).expect("state"), SpinState::LowSpin);
    assert_eq!(spin_state(1.0, 2.0).expect("state"), SpinState::HighSpin);
    assert_eq!(spin_state(2.0, 2.0).expect("state"), SpinState::HighSpin);
    assert!(spin_state(-1.0, 2.0).is_err());
    assert_eq!(
        serde_json::to_string(&SpinState::LowSpin).expect("json"),
        "\"low_spin\""
    );
}
