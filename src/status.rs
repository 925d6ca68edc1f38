use serde::{Deserialize, Serialize};

use crate::newton::Trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of a Newton run
pub enum StatusCode {
    /// Iteration not finished yet
    Running,
    /// |f(x)| dropped below the tolerance
    Converged,
    /// The derivative was exactly zero at the current iterate
    ZeroDerivative,
    /// Maximum number of steps reached
    MaxIterationsExceeded,
    /// Stopped by the callback function
    Interrupted,
}

#[derive(Clone, Debug, Serialize)]
/// Root estimate, termination reason and iteration path of one Newton run
pub struct SolveResult {
    /// Best known estimate, always the last element of `trace`
    pub root: f64,
    /// All iterates, starting with the initial guess
    pub trace: Trace,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted Newton updates
    pub steps: usize,
    /// Elapsed time (in seconds), ignored when comparing results
    pub time: f64,
}

impl SolveResult {
    /// Creates a running result holding only the initial guess.
    pub(crate) fn new(x0: f64) -> SolveResult {
        SolveResult {
            root: x0,
            trace: Trace::new(x0),
            code: StatusCode::Running,
            steps: 0,
            time: 0.0,
        }
    }

    /// Checks whether the run ended close to a root.
    pub fn is_converged(&self) -> bool {
        self.code == StatusCode::Converged
    }
}

/// Results are equal when the runs took the same path, bit for bit.
impl PartialEq for SolveResult {
    fn eq(&self, other: &Self) -> bool {
        self.root.to_bits() == other.root.to_bits()
            && self.trace == other.trace
            && self.code == other.code
            && self.steps == other.steps
    }
}
