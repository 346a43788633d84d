//! Component value extraction tests

use approx::assert_relative_eq;
use num_complex::Complex64;
use smith_core::component::{
    capacitor_reactance, classify, inductor_reactance, reactance_to_capacitance,
    reactance_to_inductance, series_component_for, shunt_component_for,
};
use smith_core::{ComponentKind, ComponentValue};

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_inductance_round_trip() {
    for l in [1e-12, 4.7e-9, 1e-6, 0.01] {
        for f in [1e3, 1e6, 2.4e9, 77e9] {
            let back = reactance_to_inductance(inductor_reactance(l, f), f);
            assert_relative_eq!(back, l, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_capacitance_round_trip() {
    for c in [1e-15, 2.2e-12, 1e-9, 1e-6] {
        for f in [1e3, 1e6, 2.4e9, 77e9] {
            let back = reactance_to_capacitance(capacitor_reactance(c, f), f);
            assert_relative_eq!(back, c, max_relative = 1e-12);
        }
    }
}

// ============================================================================
// Classification and steps
// ============================================================================

#[test]
fn test_classify_signs() {
    assert_eq!(classify(Complex64::new(10.0, 5.0), 1e9).kind, ComponentKind::Inductor);
    assert_eq!(classify(Complex64::new(10.0, -5.0), 1e9).kind, ComponentKind::Capacitor);
    assert_eq!(classify(Complex64::new(10.0, 0.0), 1e9).kind, ComponentKind::Resistor);
}

#[test]
fn test_series_then_shunt_steps() {
    let f = 1e9;
    // 25 Ω -> 25 + j43.3 Ω -> 100 Ω is the classic L match
    let z_load = Complex64::new(25.0, 0.0);
    let z_mid = Complex64::new(25.0, 25.0 * 3.0_f64.sqrt());
    let series = series_component_for(z_load, z_mid, f);
    assert_eq!(series.kind, ComponentKind::Inductor);
    assert_relative_eq!(inductor_reactance(series.value, f), z_mid.im, epsilon = 1e-9);

    let y_mid = 1.0 / z_mid;
    let y_target = Complex64::new(0.01, 0.0);
    let shunt = shunt_component_for(y_mid, y_target, f);
    assert_eq!(shunt.kind, ComponentKind::Capacitor);
    assert_relative_eq!(
        shunt.value * 2.0 * std::f64::consts::PI * f,
        -y_mid.im,
        max_relative = 1e-12
    );
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_value_with_unit() {
    let cases = [
        (ComponentKind::Resistor, 2.2e6, "2.200 MΩ"),
        (ComponentKind::Resistor, 47.0, "47.000 Ω"),
        (ComponentKind::Inductor, 1.5e-6, "1.500 µH"),
        (ComponentKind::Inductor, 2.5e-3, "2.500 mH"),
        (ComponentKind::Capacitor, 3.3e-9, "3.300 nF"),
        (ComponentKind::Capacitor, 1e-13, "100.000 fF"),
    ];
    for (kind, value, expected) in cases {
        assert_eq!(ComponentValue::new(kind, value, 1e9).value_with_unit(), expected);
    }
    assert_eq!(ComponentValue::none().to_string(), "0.000");
}
