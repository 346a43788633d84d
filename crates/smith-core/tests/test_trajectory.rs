//! Trajectory tests
//!
//! Chaining, cascading edits and removal.

use approx::assert_relative_eq;
use num_complex::Complex64;
use smith_core::{ComponentKind, Locus, MatchingElement, SmithError, Trajectory};

fn load() -> Complex64 {
    Complex64::new(30.0, -20.0)
}

fn build(values: [f64; 3]) -> Trajectory {
    let mut t = Trajectory::new(load(), 1e9);
    t.add_series(ComponentKind::Inductor, values[0]);
    t.add_shunt(ComponentKind::Capacitor, values[1]);
    t.add_series(ComponentKind::Capacitor, values[2]);
    t
}

// ============================================================================
// Cascading update
// ============================================================================

#[test]
fn test_update_first_segment_matches_rebuild() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    t.update_segment_value(0, 8e-9).unwrap();
    let rebuilt = build([8e-9, 2e-12, 10e-12]);

    let end = t.segment(2).and_then(|s| s.end_point()).map(|p| p.impedance);
    let expected = rebuilt.segment(2).and_then(|s| s.end_point()).map(|p| p.impedance);
    assert_eq!(end, expected);
    assert_eq!(t.current_impedance(), rebuilt.current_impedance());
}

#[test]
fn test_update_middle_segment_keeps_prefix() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    let first = t.segments()[0].clone();
    t.update_segment_value(1, 4e-12).unwrap();
    assert_eq!(t.segments()[0], first);
    assert_eq!(t.segments()[1].element.value, 4e-12);
    assert_eq!(t.current_impedance(), build([5e-9, 4e-12, 10e-12]).current_impedance());
}

#[test]
fn test_update_out_of_range() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    let err = t.update_segment_value(3, 1.0).unwrap_err();
    assert_eq!(err, SmithError::SegmentIndex { index: 3, len: 3 });
    assert_eq!(err.to_string(), "segment index 3 out of range for trajectory with 3 segments");
}

// ============================================================================
// Chaining and removal
// ============================================================================

#[test]
fn test_segments_chain_exactly() {
    let t = build([5e-9, 2e-12, 10e-12]);
    assert_eq!(t.segments()[0].points[0].impedance, load());
    for pair in t.segments().windows(2) {
        assert_eq!(
            pair[0].end_point().map(|p| p.impedance),
            pair[1].start_point().map(|p| p.impedance)
        );
    }
    let loci: Vec<Locus> = t.segments().iter().map(|s| s.locus).collect();
    assert_eq!(loci, vec![Locus::ConstantR, Locus::ConstantG, Locus::ConstantR]);
}

#[test]
fn test_interior_removal_equals_rebuild() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    t.remove_segment(1).unwrap();

    let mut expected = Trajectory::new(load(), 1e9);
    expected.add_series(ComponentKind::Inductor, 5e-9);
    expected.add_series(ComponentKind::Capacitor, 10e-12);
    assert_eq!(t.segments(), expected.segments());
}

#[test]
fn test_remove_last_and_clear() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    let last = t.remove_last_segment().map(|s| s.element.kind);
    assert_eq!(last, Some(ComponentKind::Capacitor));
    assert_eq!(t.len(), 2);
    t.clear();
    assert!(t.is_empty());
    assert_eq!(t.current_impedance(), load());
    assert!(t.remove_last_segment().is_none());
}

// ============================================================================
// Physical checks
// ============================================================================

#[test]
fn test_series_resistor_moves_along_constant_x() {
    let mut t = Trajectory::new(load(), 1e9);
    let seg = t.add_series(ComponentKind::Resistor, 20.0);
    assert!(seg.points.iter().all(|p| p.impedance.im == -20.0));
    assert_relative_eq!(t.current_impedance().re, 50.0, epsilon = 1e-12);
}

#[test]
fn test_shunt_inductor_reduces_susceptance() {
    let mut t = Trajectory::new(Complex64::new(50.0, 0.0), 1e9);
    t.add_shunt(ComponentKind::Inductor, 10e-9);
    let y = 1.0 / t.current_impedance();
    assert_relative_eq!(y.re, 0.02, epsilon = 1e-12);
    assert!(y.im < 0.0);
}

#[test]
fn test_preview_matches_add() {
    let mut t = build([5e-9, 2e-12, 10e-12]);
    let element = MatchingElement::shunt(ComponentKind::Resistor, 200.0);
    let preview = t.preview_element(element);
    let added = t.add_element(element).clone();
    assert_eq!(preview, added);
    assert_eq!(added.index, 3);
}
