//! Reactance/susceptance to L/C conversions at a frequency

use num_complex::Complex64;

use super::{ComponentKind, ComponentValue};
use crate::constants::{EPSILON, MIN_COMPONENT_VALUE, REACTANCE_SENTINEL, TWO_PI};
use crate::frequency::phase_constant;

#[inline]
fn omega(freq_hz: f64) -> f64 {
    TWO_PI * freq_hz
}

/// Classify an impedance as the single component that would produce its
/// imaginary part
///
/// A purely resistive impedance yields a resistor with frequency 0.
pub fn classify(z: Complex64, freq_hz: f64) -> ComponentValue {
    let x = z.im;
    if x.abs() < EPSILON {
        resistance(z.re)
    } else if x > 0.0 {
        inductance_from_reactance(x, freq_hz)
    } else {
        capacitance_from_reactance(x, freq_hz)
    }
}

pub fn resistance(r: f64) -> ComponentValue {
    ComponentValue::new(ComponentKind::Resistor, r, 0.0)
}

/// L = X / (2πf)
pub fn inductance_from_reactance(x: f64, freq_hz: f64) -> ComponentValue {
    ComponentValue::new(
        ComponentKind::Inductor,
        reactance_to_inductance(x, freq_hz),
        freq_hz,
    )
}

/// C = -1 / (2πfX)
pub fn capacitance_from_reactance(x: f64, freq_hz: f64) -> ComponentValue {
    ComponentValue::new(
        ComponentKind::Capacitor,
        reactance_to_capacitance(x, freq_hz),
        freq_hz,
    )
}

/// X = 2πfL
pub fn inductor_reactance(l_henry: f64, freq_hz: f64) -> f64 {
    omega(freq_hz) * l_henry
}

/// X = -1 / (2πfC), or -1e12 for a vanishing capacitor or frequency
pub fn capacitor_reactance(c_farad: f64, freq_hz: f64) -> f64 {
    if c_farad < MIN_COMPONENT_VALUE || freq_hz < EPSILON {
        return REACTANCE_SENTINEL;
    }
    -1.0 / (omega(freq_hz) * c_farad)
}

/// B = -1 / (2πfL), or -1e12 for a vanishing inductor or frequency
pub fn inductor_susceptance(l_henry: f64, freq_hz: f64) -> f64 {
    if l_henry < MIN_COMPONENT_VALUE || freq_hz < EPSILON {
        return REACTANCE_SENTINEL;
    }
    -1.0 / (omega(freq_hz) * l_henry)
}

/// B = 2πfC
pub fn capacitor_susceptance(c_farad: f64, freq_hz: f64) -> f64 {
    omega(freq_hz) * c_farad
}

/// Input susceptance tan(βl)/Zc of an open-circuited stub of `length` metres
pub fn open_stub_susceptance(length: f64, zc: f64, freq_hz: f64) -> f64 {
    (phase_constant(freq_hz) * length).tan() / zc
}

/// Input susceptance -1/(Zc·tan(βl)) of a short-circuited stub, or -1e12
/// when the stub is electrically a short
pub fn short_stub_susceptance(length: f64, zc: f64, freq_hz: f64) -> f64 {
    let t = (phase_constant(freq_hz) * length).tan();
    if t.abs() < EPSILON {
        return REACTANCE_SENTINEL;
    }
    -1.0 / (zc * t)
}

/// Inductance (H) presenting reactance `x`; 0 below 1e-12 Hz
pub fn reactance_to_inductance(x: f64, freq_hz: f64) -> f64 {
    if freq_hz < EPSILON {
        return 0.0;
    }
    x / omega(freq_hz)
}

/// Capacitance (F) presenting reactance `x`; 0 for a vanishing `x` or frequency
pub fn reactance_to_capacitance(x: f64, freq_hz: f64) -> f64 {
    if freq_hz < EPSILON || x.abs() < EPSILON {
        return 0.0;
    }
    -1.0 / (omega(freq_hz) * x)
}

/// Capacitance (F) presenting susceptance `b`; 0 below 1e-12 Hz
pub fn susceptance_to_capacitance(b: f64, freq_hz: f64) -> f64 {
    if freq_hz < EPSILON {
        return 0.0;
    }
    b / omega(freq_hz)
}

/// Inductance (H) presenting susceptance `b`; 0 for a vanishing `b` or frequency
pub fn susceptance_to_inductance(b: f64, freq_hz: f64) -> f64 {
    if freq_hz < EPSILON || b.abs() < EPSILON {
        return 0.0;
    }
    -1.0 / (omega(freq_hz) * b)
}

/// Series component moving `z_current` to the reactance of `z_target`
pub fn series_component_for(z_current: Complex64, z_target: Complex64, freq_hz: f64) -> ComponentValue {
    let delta_x = z_target.im - z_current.im;
    match kind_from_reactance(delta_x) {
        ComponentKind::Inductor => inductance_from_reactance(delta_x, freq_hz),
        ComponentKind::Capacitor => capacitance_from_reactance(delta_x, freq_hz),
        ComponentKind::Resistor
        | ComponentKind::TransmissionLine
        | ComponentKind::OpenStub
        | ComponentKind::ShortStub
        | ComponentKind::None => ComponentValue::none(),
    }
}

/// Shunt component moving `y_current` to the susceptance of `y_target`
///
/// A positive susceptance step is a capacitor, a negative one an inductor.
pub fn shunt_component_for(y_current: Complex64, y_target: Complex64, freq_hz: f64) -> ComponentValue {
    let delta_b = y_target.im - y_current.im;
    match kind_from_susceptance(delta_b) {
        ComponentKind::Capacitor => ComponentValue::new(
            ComponentKind::Capacitor,
            susceptance_to_capacitance(delta_b, freq_hz),
            freq_hz,
        ),
        ComponentKind::Inductor => ComponentValue::new(
            ComponentKind::Inductor,
            susceptance_to_inductance(delta_b, freq_hz),
            freq_hz,
        ),
        ComponentKind::Resistor
        | ComponentKind::TransmissionLine
        | ComponentKind::OpenStub
        | ComponentKind::ShortStub
        | ComponentKind::None => ComponentValue::none(),
    }
}

/// Inductor for X > 0, capacitor for X < 0, none near zero
pub fn kind_from_reactance(x: f64) -> ComponentKind {
    if x.abs() < EPSILON {
        ComponentKind::None
    } else if x > 0.0 {
        ComponentKind::Inductor
    } else {
        ComponentKind::Capacitor
    }
}

/// Capacitor for B > 0, inductor for B < 0, none near zero
pub fn kind_from_susceptance(b: f64) -> ComponentKind {
    if b.abs() < EPSILON {
        ComponentKind::None
    } else if b > 0.0 {
        ComponentKind::Capacitor
    } else {
        ComponentKind::Inductor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_classify() {
        let r = classify(Complex64::new(75.0, 0.0), 1e9);
        assert_eq!(r.kind, ComponentKind::Resistor);
        assert_eq!(r.value, 75.0);
        assert_eq!(r.frequency, 0.0);

        let l = classify(Complex64::new(50.0, 2.0 * PI * 1e9 * 10e-9), 1e9);
        assert_eq!(l.kind, ComponentKind::Inductor);
        assert_relative_eq!(l.value, 10e-9, epsilon = 1e-20);

        let c = classify(Complex64::new(50.0, -1.0 / (2.0 * PI * 1e9 * 1e-12)), 1e9);
        assert_eq!(c.kind, ComponentKind::Capacitor);
        assert_relative_eq!(c.value, 1e-12, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_guards() {
        assert_eq!(capacitance_from_reactance(0.0, 1e9).value, 0.0);
        assert_eq!(capacitance_from_reactance(-50.0, 0.0).value, 0.0);
        assert_eq!(inductance_from_reactance(50.0, 0.0).value, 0.0);
        assert_eq!(capacitor_reactance(0.0, 1e9), REACTANCE_SENTINEL);
        assert_eq!(inductor_susceptance(1e-20, 1e9), REACTANCE_SENTINEL);
        assert_eq!(susceptance_to_inductance(0.0, 1e9), 0.0);
    }

    #[test]
    fn test_reactance_inverses() {
        let f = 2.4e9;
        let l = 3.3e-9;
        let c = 1.8e-12;
        assert_relative_eq!(reactance_to_inductance(inductor_reactance(l, f), f), l, max_relative = 1e-12);
        assert_relative_eq!(reactance_to_capacitance(capacitor_reactance(c, f), f), c, max_relative = 1e-12);
        assert_relative_eq!(susceptance_to_capacitance(capacitor_susceptance(c, f), f), c, max_relative = 1e-12);
        assert_relative_eq!(susceptance_to_inductance(inductor_susceptance(l, f), f), l, max_relative = 1e-12);
    }

    #[test]
    fn test_series_component_for() {
        let f = 1e9;
        let none = series_component_for(Complex64::new(50.0, 10.0), Complex64::new(50.0, 10.0), f);
        assert!(none.is_none());

        let l = series_component_for(Complex64::new(50.0, 0.0), Complex64::new(50.0, 50.0), f);
        assert_eq!(l.kind, ComponentKind::Inductor);
        assert_relative_eq!(l.value, 50.0 / (2.0 * PI * f), max_relative = 1e-12);

        let c = series_component_for(Complex64::new(50.0, 0.0), Complex64::new(50.0, -50.0), f);
        assert_eq!(c.kind, ComponentKind::Capacitor);
        assert_relative_eq!(c.value, 1.0 / (2.0 * PI * f * 50.0), max_relative = 1e-12);
    }

    #[test]
    fn test_shunt_component_sign_convention() {
        let f = 1e9;
        let c = shunt_component_for(Complex64::new(0.02, 0.0), Complex64::new(0.02, 0.01), f);
        assert_eq!(c.kind, ComponentKind::Capacitor);
        assert_relative_eq!(c.value, 0.01 / (2.0 * PI * f), max_relative = 1e-12);

        let l = shunt_component_for(Complex64::new(0.02, 0.0), Complex64::new(0.02, -0.01), f);
        assert_eq!(l.kind, ComponentKind::Inductor);
        assert_relative_eq!(l.value, 1.0 / (2.0 * PI * f * 0.01), max_relative = 1e-12);
    }

    #[test]
    fn test_kind_from_sign() {
        assert_eq!(kind_from_reactance(1.0), ComponentKind::Inductor);
        assert_eq!(kind_from_reactance(-1.0), ComponentKind::Capacitor);
        assert_eq!(kind_from_reactance(1e-13), ComponentKind::None);
        assert_eq!(kind_from_susceptance(1.0), ComponentKind::Capacitor);
        assert_eq!(kind_from_susceptance(-1.0), ComponentKind::Inductor);
    }
}
