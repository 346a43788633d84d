//! Matching synthesizer presentation tests
//!
//! Labels, descriptions and component names of synthesized candidates.

use num_complex::Complex64;
use smith_core::{ComponentKind, Connection, MatchingCalculator, MatchingTopology};

fn stub_calc() -> MatchingCalculator {
    MatchingCalculator::new(Complex64::new(50.0, 0.0), Complex64::new(100.0, 50.0), 1e9)
}

// ============================================================================
// Enumeration order
// ============================================================================

#[test]
fn test_stub_enumeration_order() {
    let topologies: Vec<_> = stub_calc().single_stub().iter().map(|s| s.topology()).collect();
    assert_eq!(
        topologies,
        vec![
            MatchingTopology::SingleStubOpen,
            MatchingTopology::SingleStubShort,
            MatchingTopology::SingleStubOpen,
            MatchingTopology::SingleStubShort,
        ]
    );
}

#[test]
fn test_stub_lengths_within_half_wave() {
    let half_wave = 299_792_458.0 / 1e9 / 2.0;
    for sol in stub_calc().single_stub() {
        let stub = sol.elements()[0];
        let line = sol.elements()[1];
        assert_eq!(stub.connection, Connection::Shunt);
        assert_eq!(line.kind, ComponentKind::TransmissionLine);
        for length in [stub.value, line.value] {
            assert!((0.0..half_wave).contains(&length), "length {}", length);
        }
        assert_eq!(line.line_impedance, Some(50.0));
    }
}

// ============================================================================
// Descriptions and component names
// ============================================================================

#[test]
fn test_l_section_description() {
    let calc = MatchingCalculator::new(Complex64::new(200.0, 0.0), Complex64::new(50.0, 0.0), 1e9);
    let sol = &calc.l_section()[0];
    let text = sol.description();
    assert!(text.starts_with("L-Section: Shunt "), "{}", text);
    assert!(text.contains(" → Series "), "{}", text);
    assert_eq!(sol.to_string(), text);
}

#[test]
fn test_stub_designators() {
    let solutions = stub_calc().single_stub();
    assert_eq!(
        solutions[0].designators(),
        vec![Some("TLO1".to_string()), Some("TL1".to_string())]
    );
    assert_eq!(
        solutions[1].designators(),
        vec![Some("TLS1".to_string()), Some("TL1".to_string())]
    );
}

#[test]
fn test_quarter_wave_with_cancellation() {
    let calc = MatchingCalculator::new(Complex64::new(50.0, 0.0), Complex64::new(100.0, 30.0), 1e9);
    let sol = &calc.quarter_wave()[0];
    assert_eq!(sol.elements()[1].kind, ComponentKind::Capacitor);
    assert_eq!(sol.designators(), vec![Some("TL1".to_string()), Some("C1".to_string())]);
    assert_eq!(
        sol.description(),
        format!("Quarter-Wave: Series Transmission Line {} → {}", sol.elements()[0].value_string(), sol.elements()[1].summary())
    );
}
