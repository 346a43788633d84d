//! Quarter-wave transformer

use super::core::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};
use crate::component::{ComponentKind, Connection};
use crate::constants::{EPSILON, MATCH_TOL};
use crate::frequency::wavelength;

impl MatchingCalculator {
    /// λ/4 line of impedance sqrt(Rs·Rl)
    ///
    /// A reactive load first gets a series element cancelling its reactance,
    /// so the elements are `[line, cancel]` with the canceller at the load.
    pub fn quarter_wave(&self) -> Vec<MatchingSolution> {
        if !self.has_resistive_terminations() || self.frequency < EPSILON {
            return Vec::new();
        }

        let rs = self.source_z.re;
        let rl = self.load_z.re;
        let xl = self.load_z.im;
        let z_qw = (rs * rl).sqrt();
        let length = wavelength(self.frequency) / 4.0;

        let line = MatchingElement::line(
            ComponentKind::TransmissionLine,
            Connection::Series,
            length,
            z_qw,
        );
        let elements = if xl.abs() < MATCH_TOL {
            vec![line]
        } else {
            vec![line, MatchingElement::from_reactance(-xl, self.frequency)]
        };

        log::debug!("quarter-wave: Zqw = {:.4} Ω, {} element(s)", z_qw, elements.len());
        vec![self.solution(MatchingTopology::QuarterWave, elements)]
    }
}
