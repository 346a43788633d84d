//! WASM bindings for smith-core
//!
//! This module exposes the Smith chart matching engine to JavaScript/WASM.
//! Complex numbers cross the boundary as `[re, im]` pairs; paths are
//! interleaved `Float64Array`s.

use js_sys::Float64Array;
use num_complex::Complex64;
use smith_core::component::format_value;
use smith_core::constants::DEFAULT_Z0;
use smith_core::math;
use smith_core::{ComponentKind, SmithError};
use wasm_bindgen::prelude::*;

mod matching;
mod trajectory;

pub use matching::{WasmMatchingCalculator, WasmMatchingSolution};
pub use trajectory::WasmTrajectory;

/// `[re, im]` as a Float64Array
pub(crate) fn complex_to_array(z: Complex64) -> Float64Array {
    Float64Array::from([z.re, z.im].as_slice())
}

/// Flatten complex values into `[re0, im0, re1, im1, ...]`
pub(crate) fn interleave(values: &[Complex64]) -> Float64Array {
    let flat: Vec<f64> = values.iter().flat_map(|z| [z.re, z.im]).collect();
    Float64Array::from(flat.as_slice())
}

pub(crate) fn parse_kind(kind: &str) -> Result<ComponentKind, JsValue> {
    kind.parse()
        .map_err(|e: SmithError| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Γ of `re + j·im` against `z0` (default 50 Ω), as `[re, im]`
#[wasm_bindgen(js_name = impedanceToGamma)]
pub fn impedance_to_gamma(re: f64, im: f64, z0: Option<f64>) -> Float64Array {
    let gamma = math::impedance_to_gamma(Complex64::new(re, im), z0.unwrap_or(DEFAULT_Z0));
    complex_to_array(gamma)
}

/// Impedance at Γ, as `[re, im]`; the open circuit maps to `[1e12, 0]`
#[wasm_bindgen(js_name = gammaToImpedance)]
pub fn gamma_to_impedance(re: f64, im: f64, z0: Option<f64>) -> Float64Array {
    let z = math::gamma_to_impedance(Complex64::new(re, im), z0.unwrap_or(DEFAULT_Z0));
    complex_to_array(z)
}

#[wasm_bindgen(js_name = gammaToVswr)]
pub fn gamma_to_vswr(gamma_mag: f64) -> f64 {
    math::gamma_to_vswr(gamma_mag)
}

#[wasm_bindgen(js_name = gammaToReturnLoss)]
pub fn gamma_to_return_loss(re: f64, im: f64) -> f64 {
    math::gamma_to_return_loss(Complex64::new(re, im))
}

/// Format a base value with its prefix, e.g. `formatValue("C", 3.2e-12)`
#[wasm_bindgen(js_name = formatValue)]
pub fn format_component_value(kind: &str, value: f64, precision: Option<usize>) -> Result<String, JsValue> {
    Ok(format_value(parse_kind(kind)?, value, precision.unwrap_or(3)))
}
