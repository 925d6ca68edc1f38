//! Browser bindings
use wasm_bindgen::prelude::*;

use crate::expr::compile;
use crate::newton::{self, Params};
use crate::session::VARIABLE;

/// Runs Newton's method on a formula and returns the iterates.
///
/// A rejected formula is reported as a JS string carrying the parse error.
#[wasm_bindgen]
pub fn newton_trace(
    source: &str,
    x0: f64,
    tol: f64,
    max_steps: usize,
) -> Result<Box<[f64]>, JsValue> {
    let function = compile(source, VARIABLE).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let params = Params::new().with_tol(tol).with_max_steps(max_steps);
    let result = newton::solve(&function, x0, &params);
    Ok(result.trace.into_vec().into_boxed_slice())
}

/// Returns the symbolic derivative of a formula as text.
#[wasm_bindgen]
pub fn derivative_text(source: &str) -> Result<String, JsValue> {
    compile(source, VARIABLE)
        .map(|function| function.derivative_expr().to_string())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
