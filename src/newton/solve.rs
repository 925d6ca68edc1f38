use super::params::Params;
use crate::function::Function;
use crate::status::{SolveResult, StatusCode};
use crate::time;

/// Uses Newton's method to look for a root of `function` starting from `x0`.
pub fn solve(function: &dyn Function, x0: f64, params: &Params) -> SolveResult {
    solve_with_callback(function, x0, params, None)
}

fn log_header() {
    println!(
        "{:>10} {:>10} {:>14} {:>14} {:>14}",
        "step", "time", "x", "f(x)", "f'(x)",
    )
}

fn log_row(step: usize, elapsed: f64, x: f64, fx: f64, dfx: Option<f64>) {
    match dfx {
        Some(dfx) => println!(
            "{:10} {:10.2} {:14.6} {:14.6e} {:14.6e}",
            step, elapsed, x, fx, dfx
        ),
        None => println!(
            "{:10} {:10.2} {:14.6} {:14.6e} {:>14}",
            step, elapsed, x, fx, ""
        ),
    }
}

/// Uses Newton's method starting from `x0`, consulting `callback` before every step.
///
/// The callback sees the result as it stands; returning `true` stops the run
/// with [`StatusCode::Interrupted`].
pub fn solve_with_callback(
    function: &dyn Function,
    x0: f64,
    params: &Params,
    callback: Option<&dyn Fn(&SolveResult) -> bool>,
) -> SolveResult {
    let start = time::now();
    let mut result = SolveResult::new(x0);
    let mut x = x0;

    if params.verbose > 0 {
        log_header();
    }

    for step in 0..params.max_steps {
        // update steps and time
        result.steps = step;
        let elapsed = time::until_now(start);
        result.time = elapsed;

        // handle callback
        if let Some(callback_fn) = callback {
            if callback_fn(&result) {
                result.code = StatusCode::Interrupted;
                break;
            }
        }

        // check for convergence
        let fx = function.evaluate(x);
        if fx.abs() < params.tol {
            result.code = StatusCode::Converged;
            if params.verbose > 0 {
                log_row(step, elapsed, x, fx, None);
            }
            break;
        }

        let dfx = function.derivative(x);
        let singular = dfx == 0.0;

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || singular) {
            log_row(step, elapsed, x, fx, Some(dfx));
        }

        if singular {
            result.code = StatusCode::ZeroDerivative;
            break;
        }

        x = x - fx / dfx;
        result.trace.push(x);
        result.root = x;
    }

    if result.code == StatusCode::Running {
        result.code = StatusCode::MaxIterationsExceeded;
    }
    result.steps = result.trace.len() - 1;
    result.time = time::until_now(start);

    if params.verbose > 0 && needs_closing_row(result.code) {
        log_row(
            result.steps,
            result.time,
            result.root,
            function.evaluate(result.root),
            None,
        );
    }
    result
}

/// Outcomes whose last iterate has not been printed by the loop.
fn needs_closing_row(code: StatusCode) -> bool {
    matches!(
        code,
        StatusCode::MaxIterationsExceeded | StatusCode::Interrupted
    )
}
