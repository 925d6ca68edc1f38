/// Parameters of Newton's method
#[derive(Clone, Debug)]
pub struct Params {
    /// Termination tolerance on |f(x)|
    pub tol: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
}

impl Params {
    const DEFAULT_TOL: f64 = 1e-6;
    const DEFAULT_MAX_STEPS: usize = 100;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            tol: Self::DEFAULT_TOL,
            max_steps: Self::DEFAULT_MAX_STEPS,
            verbose: 0,
        }
    }

    /// Sets the termination tolerance.
    ///
    /// A tolerance `<= 0` can never be met, so every run uses up all steps.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the logging frequency.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
