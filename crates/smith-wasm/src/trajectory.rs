//! WASM bindings for Trajectory class

use js_sys::Float64Array;
use num_complex::Complex64;
use smith_core::constants::DEFAULT_Z0;
use smith_core::math::ChartFrame;
use smith_core::Trajectory;
use wasm_bindgen::prelude::*;

use crate::matching::WasmMatchingSolution;
use crate::{complex_to_array, interleave, parse_kind};

/// Impedance path of a component chain for WASM
#[wasm_bindgen]
pub struct WasmTrajectory {
    inner: Trajectory,
}

#[wasm_bindgen]
impl WasmTrajectory {
    /// Create an empty trajectory starting at the load `rl + j·xl`
    ///
    /// @param frequency - Frequency in Hz
    /// @param z0 - Reference impedance (default 50 Ω)
    /// @param arc_points - Samples per segment (default 50)
    #[wasm_bindgen(constructor)]
    pub fn new(
        rl: f64,
        xl: f64,
        frequency: f64,
        z0: Option<f64>,
        arc_points: Option<usize>,
    ) -> Result<WasmTrajectory, JsValue> {
        let mut inner = Trajectory::new(Complex64::new(rl, xl), frequency);
        if let Some(points) = arc_points {
            inner = inner.with_arc_points(points);
        }
        inner
            .set_z0(z0.unwrap_or(DEFAULT_Z0))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmTrajectory { inner })
    }

    #[wasm_bindgen(js_name = setLoad)]
    pub fn set_load(&mut self, rl: f64, xl: f64) {
        self.inner.set_load_impedance(Complex64::new(rl, xl));
    }

    #[wasm_bindgen(js_name = setFrequency)]
    pub fn set_frequency(&mut self, freq_hz: f64) {
        self.inner.set_frequency(freq_hz);
    }

    /// Append a series component ("R", "L" or "C"; value in Ω, H or F)
    #[wasm_bindgen(js_name = addSeries)]
    pub fn add_series(&mut self, kind: &str, value: f64) -> Result<(), JsValue> {
        self.inner.add_series(parse_kind(kind)?, value);
        Ok(())
    }

    /// Append a shunt component ("R", "L" or "C"; value in Ω, H or F)
    #[wasm_bindgen(js_name = addShunt)]
    pub fn add_shunt(&mut self, kind: &str, value: f64) -> Result<(), JsValue> {
        self.inner.add_shunt(parse_kind(kind)?, value);
        Ok(())
    }

    #[wasm_bindgen(js_name = updateSegmentValue)]
    pub fn update_segment_value(&mut self, index: usize, value: f64) -> Result<(), JsValue> {
        self.inner
            .update_segment_value(index, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = removeLastSegment)]
    pub fn remove_last_segment(&mut self) -> bool {
        self.inner.remove_last_segment().is_some()
    }

    #[wasm_bindgen(js_name = removeSegment)]
    pub fn remove_segment(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner
            .remove_segment(index)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(js_name = applySolution)]
    pub fn apply_solution(&mut self, solution: &WasmMatchingSolution) {
        self.inner.apply_solution(solution.inner());
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// End impedance as `[re, im]`
    #[wasm_bindgen(js_name = currentImpedance)]
    pub fn current_impedance(&self) -> Float64Array {
        complex_to_array(self.inner.current_impedance())
    }

    #[wasm_bindgen(js_name = currentVswr)]
    pub fn current_vswr(&self) -> f64 {
        self.inner.current_vswr()
    }

    pub fn labels(&self) -> Vec<String> {
        self.inner.segments().iter().map(|s| s.label.clone()).collect()
    }

    /// Γ of every sample as `[re0, im0, re1, im1, ...]`
    #[wasm_bindgen(js_name = gammaPath)]
    pub fn gamma_path(&self) -> Float64Array {
        interleave(&self.inner.gamma_path())
    }

    /// Γ samples of one segment, interleaved
    #[wasm_bindgen(js_name = segmentGammas)]
    pub fn segment_gammas(&self, index: usize) -> Result<Float64Array, JsValue> {
        self.inner
            .segment(index)
            .map(|s| interleave(&s.gammas()))
            .ok_or_else(|| JsValue::from_str(&format!("segment index {} out of range", index)))
    }

    /// Whole path in canvas coordinates `[x0, y0, x1, y1, ...]` for a chart
    /// centred at (cx, cy) with the given radius
    #[wasm_bindgen(js_name = planePath)]
    pub fn plane_path(&self, cx: f64, cy: f64, radius: f64) -> Float64Array {
        let frame = ChartFrame::new(cx, cy, radius);
        let flat: Vec<f64> = self
            .inner
            .gamma_path()
            .into_iter()
            .flat_map(|g| {
                let (x, y) = frame.gamma_to_plane(g);
                [x, y]
            })
            .collect();
        Float64Array::from(flat.as_slice())
    }
}
