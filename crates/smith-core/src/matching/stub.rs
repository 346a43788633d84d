//! Single shunt-stub matching
//!
//! A length `d` of line (characteristic impedance z0) moves the load onto
//! the g = 1 circle; a shunt stub at that point cancels the remaining
//! susceptance. Each line position gets an open and a short stub.

use num_complex::Complex64;

use super::core::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};
use crate::component::{ComponentKind, Connection};
use crate::constants::{EPSILON, MATCH_TOL};
use crate::frequency::{phase_constant, wavelength};

/// Shift a length into [0, λ/2)
fn wrap_half_wave(length: f64, lambda: f64) -> f64 {
    let half = lambda / 2.0;
    let wrapped = length.rem_euclid(half);
    if wrapped >= half {
        0.0
    } else {
        wrapped
    }
}

impl MatchingCalculator {
    /// Single-stub candidates referenced to z0
    ///
    /// Up to four candidates in enumeration order: for each line position
    /// (plus root, then minus root) the open stub, then the short stub.
    /// Elements are `[stub, line]`, the line on the load side.
    pub fn single_stub(&self) -> Vec<MatchingSolution> {
        if !self.has_resistive_terminations() || self.frequency < EPSILON || self.z0 <= 0.0 {
            return Vec::new();
        }

        let y_load = 1.0 / (self.load_z / self.z0);
        let (g, b) = (y_load.re, y_load.im);
        if (g - 1.0).abs() < MATCH_TOL && b.abs() < MATCH_TOL {
            log::debug!("single stub: load already matched");
            return Vec::new();
        }

        let lambda = wavelength(self.frequency);
        let beta = phase_constant(self.frequency);

        // Roots of Re(y(d)) = 1 for t = tan(βd), in load impedance terms
        let z_norm = self.load_z / self.z0;
        let (r, x) = (z_norm.re, z_norm.im);
        let roots = if (r - 1.0).abs() < MATCH_TOL {
            [-x / 2.0, -x / 2.0]
        } else {
            let disc = (r * ((1.0 - r).powi(2) + x * x)).sqrt();
            [(x + disc) / (r - 1.0), (x - disc) / (r - 1.0)]
        };

        let j = Complex64::i();
        let mut solutions = Vec::with_capacity(4);
        for t in roots {
            let mut d = t.atan() / beta;
            if d < 0.0 {
                d += lambda / 2.0;
            }

            let y_in = (y_load + j * t) / (1.0 + j * t * y_load);
            let stub_b = -y_in.im;

            let l_open = wrap_half_wave(stub_b.atan() / beta, lambda);
            let l_short = wrap_half_wave(-(1.0 / stub_b).atan() / beta, lambda);

            let line = MatchingElement::line(
                ComponentKind::TransmissionLine,
                Connection::Series,
                d,
                self.z0,
            );
            for (topology, kind, length) in [
                (MatchingTopology::SingleStubOpen, ComponentKind::OpenStub, l_open),
                (MatchingTopology::SingleStubShort, ComponentKind::ShortStub, l_short),
            ] {
                let stub = MatchingElement::line(kind, Connection::Shunt, length, self.z0);
                solutions.push(self.solution(topology, vec![stub, line]));
            }
        }

        log::debug!("single stub: {} candidate(s)", solutions.len());
        solutions
    }
}
