//! Newton's method with iteration trace
//!
//! Each run starts from one guess and ends in exactly one of three ways:
//! [`Converged`](crate::StatusCode::Converged) once `|f(x)| < tol`,
//! [`ZeroDerivative`](crate::StatusCode::ZeroDerivative) when `f'(x)` is
//! exactly zero, or
//! [`MaxIterationsExceeded`](crate::StatusCode::MaxIterationsExceeded) when
//! the step budget runs out. None of these is an error; the trace shows what
//! happened either way.

mod params;
mod solve;
mod trace;

pub use self::params::Params;
pub use self::trace::Trace;
pub use solve::{solve, solve_with_callback};
