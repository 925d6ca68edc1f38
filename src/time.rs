//! Wall-clock measurement that also works in the browser
#[cfg(not(feature = "wasm"))]
use std::time::Instant;

#[cfg(not(feature = "wasm"))]
pub fn now() -> Instant {
    Instant::now()
}

#[cfg(not(feature = "wasm"))]
pub fn until_now(t: Instant) -> f64 {
    t.elapsed().as_secs_f64()
}

/// Milliseconds from `performance.now()`, or `0.0` outside a window context.
#[cfg(feature = "wasm")]
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now())
}

#[cfg(feature = "wasm")]
pub fn until_now(t: f64) -> f64 {
    (now() - t) / 1000.0
}
