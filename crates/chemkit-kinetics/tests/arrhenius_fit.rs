use chemkit_kinetics::{
    activation_energy, fit_arrhenius, half_life_first_order, rate_constant, ArrheniusPoint,
    GAS_CONSTANT,
};
use proptest::prelude::*;

fn synthetic(a: f64, ea: f64, temperatures: &[f64]) -> Vec<ArrheniusPoint> {
    temperatures
        .iter()
        .map(|&t| ArrheniusPoint {
            temperature_k: t,
            rate_constant: rate_constant(a, ea, t).expect("rate"),
        })
        .collect()
}

#[test]
fn rate_constant_matches_closed_form() {
    let k = rate_constant(1e13, 50_000.0, 300.0).expect("rate");
    let expected = 1e13 * (-50_000.0 / (GAS_CONSTANT * 300.0)).exp();
    assert!((k - expected).abs() / expected < 1e-12);
    assert_eq!(rate_constant(1e13, 0.0, 300.0).expect("rate"), 1e13);
    assert_eq!(
        rate_constant(1e13, 50_000.0, 0.0).unwrap_err().info().code,
        "invalid-temperature"
    );
    assert!(rate_constant(-1.0, 50_000.0, 300.0).is_err());
}

#[test]
fn two_point_activation_energy_recovers_input() {
    let ea = 75_000.0;
    let k1 = rate_constant(1e10, ea, 300.0).expect("k1");
    let k2 = rate_constant(1e10, ea, 350.0).expect("k2");
    let recovered = activation_energy(k1, 300.0, k2, 350.0).expect("ea");
    assert!((recovered - ea).abs() < 1e-6);
    assert_eq!(
        activation_energy(k1, 300.0, k2, 300.0).unwrap_err().info().code,
        "degenerate-temperatures"
    );
}

#[test]
fn multi_point_fit_recovers_parameters() {
    let points = synthetic(2.5e11, 62_000.0, &[280.0, 300.0, 320.0, 340.0, 360.0]);
    let fit = fit_arrhenius(&points).expect("fit");
    assert!((fit.activation_energy_j_mol - 62_000.0).abs() < 1e-4);
    assert!((fit.activation_energy_kj_mol() - 62.0).abs() < 1e-7);
    assert!((fit.pre_exponential / 2.5e11 - 1.0).abs() < 1e-8);
    assert!((fit.r_squared - 1.0).abs() < 1e-12);
    let predicted = fit.rate_at(310.0).expect("rate");
    let expected = rate_constant(2.5e11, 62_000.0, 310.0).expect("rate");
    assert!((predicted / expected - 1.0).abs() < 1e-8);
}

#[test]
fn invalid_points_are_reported_with_their_index() {
    let mut points = synthetic(1e9, 40_000.0, &[300.0, 320.0, 340.0]);
    points[1].rate_constant = 0.0;
    let err = fit_arrhenius(&points).unwrap_err();
    assert_eq!(err.info().code, "invalid-rate-constant");
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("1"));

    assert_eq!(
        fit_arrhenius(&points[..1]).unwrap_err().info().code,
        "insufficient-points"
    );
    let same = synthetic(1e9, 40_000.0, &[300.0, 300.0]);
    assert_eq!(
        fit_arrhenius(&same).unwrap_err().info().code,
        "degenerate-temperatures"
    );
}

#[test]
fn half_life_is_ln2_over_k() {
    assert!((half_life_first_order(0.1).expect("t½") - 6.931_471_805_599_453).abs() < 1e-12);
    assert!(half_life_first_order(0.0).is_err());
}

proptest! {
    #[test]
    fn fitted_activation_energy_is_stable(ea in 1_000.0f64..200_000.0, a in 1e3f64..1e15) {
        let points = synthetic(a, ea, &[290.0, 310.0, 330.0, 350.0]);
        let fit = fit_arrhenius(&points).expect("fit");
        prop_assert!((fit.activation_energy_j_mol - ea).abs() / ea < 1e-6);
    }
}
