use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `console.log` of the hosting browser.
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn log_line(line: &str);
}

/// Sends `println` output of the solver to the browser console.
macro_rules! println {
    ($($t:tt)*) => (crate::console::log_line(&format!($($t)*)))
}
