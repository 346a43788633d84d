//! Three-element Pi and T networks with a chosen loaded Q
//!
//! Both split the match into two L-sections through a virtual resistance:
//! below both terminations for Pi, above both for T. A higher Q narrows the
//! bandwidth. Load and source reactances are not absorbed.

use super::core::{MatchingCalculator, MatchingElement, MatchingSolution, MatchingTopology};

impl MatchingCalculator {
    /// Pi-network: shunt C, series L, shunt C
    pub fn pi_network(&self, target_q: f64) -> Vec<MatchingSolution> {
        if !self.has_resistive_terminations() || !target_q.is_finite() {
            return Vec::new();
        }

        let f = self.frequency;
        let rs = self.source_z.re;
        let rl = self.load_z.re;
        let r_virt = rs.min(rl) / (1.0 + target_q * target_q);

        let q1 = (rs / r_virt - 1.0).sqrt();
        let q2 = (rl / r_virt - 1.0).sqrt();
        let b1 = q1 / rs;
        let b2 = q2 / rl;
        let x = q1 * r_virt + q2 * r_virt;

        let solution = self.solution(
            MatchingTopology::PiNetwork,
            vec![
                MatchingElement::from_susceptance(b1, f),
                MatchingElement::from_reactance(x, f),
                MatchingElement::from_susceptance(b2, f),
            ],
        );
        log::debug!("Pi-network (Q = {}): 1 candidate", target_q);
        vec![solution]
    }

    /// T-network: series L, shunt C, series L
    pub fn t_network(&self, target_q: f64) -> Vec<MatchingSolution> {
        if !self.has_resistive_terminations() || !target_q.is_finite() {
            return Vec::new();
        }

        let f = self.frequency;
        let rs = self.source_z.re;
        let rl = self.load_z.re;
        let r_virt = rs.max(rl) * (1.0 + target_q * target_q);

        let q1 = (r_virt / rs - 1.0).sqrt();
        let q2 = (r_virt / rl - 1.0).sqrt();
        let x1 = q1 * rs;
        let x2 = q2 * rl;
        let b = q1 / r_virt + q2 / r_virt;

        let solution = self.solution(
            MatchingTopology::TNetwork,
            vec![
                MatchingElement::from_reactance(x1, f),
                MatchingElement::from_susceptance(b, f),
                MatchingElement::from_reactance(x2, f),
            ],
        );
        log::debug!("T-network (Q = {}): 1 candidate", target_q);
        vec![solution]
    }
}
