//! WASM bindings for matching network synthesis

use num_complex::Complex64;
use smith_core::constants::{DEFAULT_TARGET_Q, DEFAULT_Z0};
use smith_core::{MatchingCalculator, MatchingSolution};
use wasm_bindgen::prelude::*;

use crate::complex_to_array;
use js_sys::Float64Array;

/// A synthesized matching network for WASM
#[wasm_bindgen]
pub struct WasmMatchingSolution {
    inner: MatchingSolution,
}

#[wasm_bindgen]
impl WasmMatchingSolution {
    /// Topology label, e.g. "Pi-Network"
    #[wasm_bindgen(getter)]
    pub fn topology(&self) -> String {
        self.inner.label().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.inner.description()
    }

    #[wasm_bindgen(getter, js_name = elementCount)]
    pub fn element_count(&self) -> usize {
        self.inner.element_count()
    }

    #[wasm_bindgen(getter, js_name = networkQ)]
    pub fn network_q(&self) -> f64 {
        self.inner.network_q()
    }

    #[wasm_bindgen(getter)]
    pub fn z0(&self) -> f64 {
        self.inner.z0()
    }

    /// False when the network misses its target impedance
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// `[re, im]` of the impedance presented at the source end
    #[wasm_bindgen(js_name = inputImpedance)]
    pub fn input_impedance(&self) -> Float64Array {
        complex_to_array(self.inner.input_impedance())
    }

    /// Element summaries, source side first (e.g. "Shunt 3.18 pF")
    pub fn summaries(&self) -> Vec<String> {
        self.inner.elements().iter().map(|e| e.summary()).collect()
    }

    /// Element values in base units, source side first
    pub fn values(&self) -> Float64Array {
        let values: Vec<f64> = self.inner.elements().iter().map(|e| e.value).collect();
        Float64Array::from(values.as_slice())
    }

    /// Component names per element ("C1", "L1", ...; empty for none)
    pub fn designators(&self) -> Vec<String> {
        self.inner
            .designators()
            .into_iter()
            .map(|d| d.unwrap_or_default())
            .collect()
    }
}

impl WasmMatchingSolution {
    pub fn inner(&self) -> &MatchingSolution {
        &self.inner
    }
}

fn wrap(solutions: Vec<MatchingSolution>) -> Vec<WasmMatchingSolution> {
    solutions
        .into_iter()
        .map(|inner| WasmMatchingSolution { inner })
        .collect()
}

/// Matching network synthesizer for WASM
#[wasm_bindgen]
pub struct WasmMatchingCalculator {
    inner: MatchingCalculator,
}

#[wasm_bindgen]
impl WasmMatchingCalculator {
    /// Create a calculator
    ///
    /// @param rs, xs - Source resistance and reactance in Ω
    /// @param rl, xl - Load resistance and reactance in Ω
    /// @param frequency - Design frequency in Hz
    /// @param z0 - Reference impedance for the line topologies (default 50 Ω)
    #[wasm_bindgen(constructor)]
    pub fn new(rs: f64, xs: f64, rl: f64, xl: f64, frequency: f64, z0: Option<f64>) -> WasmMatchingCalculator {
        let inner = MatchingCalculator::new(Complex64::new(rs, xs), Complex64::new(rl, xl), frequency)
            .with_z0(z0.unwrap_or(DEFAULT_Z0));
        WasmMatchingCalculator { inner }
    }

    #[wasm_bindgen(js_name = setSource)]
    pub fn set_source(&mut self, rs: f64, xs: f64) {
        self.inner.set_source_impedance(Complex64::new(rs, xs));
    }

    #[wasm_bindgen(js_name = setLoad)]
    pub fn set_load(&mut self, rl: f64, xl: f64) {
        self.inner.set_load_impedance(Complex64::new(rl, xl));
    }

    #[wasm_bindgen(js_name = setFrequency)]
    pub fn set_frequency(&mut self, freq_hz: f64) {
        self.inner.set_frequency(freq_hz);
    }

    /// Load impedance as `[re, im]`
    #[wasm_bindgen(getter)]
    pub fn load(&self) -> Float64Array {
        complex_to_array(self.inner.load_impedance())
    }

    #[wasm_bindgen(js_name = isMatched)]
    pub fn is_matched(&self) -> bool {
        self.inner.is_matched()
    }

    #[wasm_bindgen(js_name = lSection)]
    pub fn l_section(&self) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.l_section())
    }

    #[wasm_bindgen(js_name = piNetwork)]
    pub fn pi_network(&self, target_q: Option<f64>) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.pi_network(target_q.unwrap_or(DEFAULT_TARGET_Q)))
    }

    #[wasm_bindgen(js_name = tNetwork)]
    pub fn t_network(&self, target_q: Option<f64>) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.t_network(target_q.unwrap_or(DEFAULT_TARGET_Q)))
    }

    #[wasm_bindgen(js_name = singleStub)]
    pub fn single_stub(&self) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.single_stub())
    }

    #[wasm_bindgen(js_name = quarterWave)]
    pub fn quarter_wave(&self) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.quarter_wave())
    }

    #[wasm_bindgen(js_name = calculateAll)]
    pub fn calculate_all(&self) -> Vec<WasmMatchingSolution> {
        wrap(self.inner.calculate_all())
    }
}
