//! Two-element L-section matching

use super::core::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};
use crate::constants::{EPSILON, MATCH_TOL};

impl MatchingCalculator {
    /// L-section candidates
    ///
    /// For Rs > Rl the shunt element sits on the source side
    /// ([`MatchingTopology::LSection`]); for Rs < Rl the series element does
    /// ([`MatchingTopology::LSectionReversed`]). Each case has two branches,
    /// one per sign of Q. Equal resistances need only a series element that
    /// cancels the reactance difference.
    pub fn l_section(&self) -> Vec<MatchingSolution> {
        if !self.has_resistive_terminations() {
            return Vec::new();
        }

        let f = self.frequency;
        let (rs, xs) = (self.source_z.re, self.source_z.im);
        let (rl, xl) = (self.load_z.re, self.load_z.im);

        let solutions: Vec<MatchingSolution> = if (rs - rl).abs() < EPSILON {
            let dx = xl - xs;
            if dx.abs() <= EPSILON {
                Vec::new()
            } else {
                vec![self.solution(
                    MatchingTopology::LSection,
                    vec![MatchingElement::from_reactance(-dx, f)],
                )]
            }
        } else if rs > rl {
            let q = (rs / rl - 1.0).sqrt();
            [1.0, -1.0]
                .iter()
                .map(|sign| {
                    let b = sign * q / rs;
                    let x = sign * q * rl - xl;
                    self.solution(
                        MatchingTopology::LSection,
                        vec![
                            MatchingElement::from_susceptance(b, f),
                            MatchingElement::from_reactance(x, f),
                        ],
                    )
                })
                .collect()
        } else {
            let q = (rl / rs - 1.0).sqrt();
            [1.0, -1.0]
                .iter()
                .map(|sign| {
                    let x = sign * q * rs - xs;
                    let b = sign * q / rl;
                    self.solution(
                        MatchingTopology::LSectionReversed,
                        vec![
                            MatchingElement::from_reactance(x, f),
                            MatchingElement::from_susceptance(b, f),
                        ],
                    )
                })
                .collect()
        };

        log::debug!("L-section: {} candidate(s)", solutions.len());
        solutions
    }

    /// True when the load already equals the source within tolerance
    pub fn is_matched(&self) -> bool {
        (self.source_z - self.load_z).norm() < MATCH_TOL
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::component::{ComponentKind, Connection};
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    /// Replay `elements` from the load end with plain circuit algebra
    pub(crate) fn apply_from_load(elements: &[MatchingElement], load: Complex64, f: f64) -> Complex64 {
        elements.iter().rev().fold(load, |z, e| match e.connection {
            Connection::Series => z + Complex64::new(0.0, e.reactance(f)),
            Connection::Shunt => 1.0 / (1.0 / z + Complex64::new(0.0, e.susceptance(f))),
        })
    }

    #[test]
    fn test_source_above_load() {
        let calc = MatchingCalculator::new(Complex64::new(200.0, 0.0), Complex64::new(50.0, 0.0), 1e9);
        let sols = calc.l_section();
        assert_eq!(sols.len(), 2);
        for sol in &sols {
            assert_eq!(sol.topology(), MatchingTopology::LSection);
            assert_eq!(sol.elements()[0].connection, Connection::Shunt);
            assert_eq!(sol.elements()[1].connection, Connection::Series);
            let z = apply_from_load(sol.elements(), calc.load_impedance(), 1e9);
            assert_relative_eq!(z.re, 200.0, max_relative = 1e-9);
            assert!(z.im.abs() < 1e-6);
        }
        // positive branch: shunt C, series L
        assert_eq!(sols[0].elements()[0].kind, ComponentKind::Capacitor);
        assert_eq!(sols[0].elements()[1].kind, ComponentKind::Inductor);
    }

    #[test]
    fn test_source_below_load() {
        let calc = MatchingCalculator::new(Complex64::new(50.0, 0.0), Complex64::new(200.0, 0.0), 1e9);
        let sols = calc.l_section();
        assert_eq!(sols.len(), 2);
        for sol in &sols {
            assert_eq!(sol.topology(), MatchingTopology::LSectionReversed);
            assert_relative_eq!(sol.network_q(), 3.0_f64.sqrt(), epsilon = 1e-15);
            let z = apply_from_load(sol.elements(), calc.load_impedance(), 1e9);
            assert_relative_eq!(z.re, 50.0, max_relative = 1e-9);
            assert!(z.im.abs() < 1e-6);
        }
    }

    #[test]
    fn test_reactive_load_above() {
        let calc = MatchingCalculator::new(Complex64::new(100.0, 0.0), Complex64::new(25.0, 30.0), 2.4e9);
        for sol in calc.l_section() {
            let z = apply_from_load(sol.elements(), calc.load_impedance(), 2.4e9);
            assert_relative_eq!(z.re, 100.0, max_relative = 1e-9);
            assert!(z.im.abs() < 1e-6);
        }
    }

    #[test]
    fn test_equal_resistance() {
        let calc = MatchingCalculator::new(Complex64::new(50.0, 10.0), Complex64::new(50.0, -20.0), 1e9);
        let sols = calc.l_section();
        assert_eq!(sols.len(), 1);
        let elem = sols[0].elements()[0];
        assert_eq!(elem.kind, ComponentKind::Inductor);
        assert_relative_eq!(elem.reactance(1e9), 30.0, epsilon = 1e-9);

        let matched = MatchingCalculator::new(Complex64::new(50.0, 5.0), Complex64::new(50.0, 5.0), 1e9);
        assert!(matched.l_section().is_empty());
        assert!(matched.is_matched());
    }

    #[test]
    fn test_non_positive_resistance() {
        let calc = MatchingCalculator::new(Complex64::new(50.0, 0.0), Complex64::new(0.0, 20.0), 1e9);
        assert!(calc.l_section().is_empty());
        let calc = MatchingCalculator::new(Complex64::new(-5.0, 0.0), Complex64::new(50.0, 0.0), 1e9);
        assert!(calc.l_section().is_empty());
    }
}
