//! Find roots of single-variable formulas with Newton's method.
//!
//! A formula such as `sin(5*x) - x + exp(x) - 2` is compiled once into an
//! evaluator for the function and one for its symbolic derivative. Newton's
//! method then runs from any number of starting guesses and reports the root
//! estimate, why it stopped and every iterate along the way.
//!
//! ```
//! use newton_trace::{compile, newton, StatusCode};
//!
//! let f = compile("x^3 - 2*x + 1", "x").unwrap();
//! let result = newton::solve(&f, 1.5, &newton::Params::new());
//! assert_eq!(result.code, StatusCode::Converged);
//! assert!((result.root - 1.0).abs() < 1e-5);
//! assert_eq!(result.trace[0], 1.5);
//! ```
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
#[macro_use]
mod console;

mod error;
pub mod expr;
mod function;
pub mod newton;
pub mod plot;
pub mod session;
mod status;
mod time;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::expr::{compile, CompiledFunction, ParseError};
pub use crate::function::{FnPair, Function};
pub use crate::status::{SolveResult, StatusCode};
