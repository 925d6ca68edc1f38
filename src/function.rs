/// A real function of one variable together with its derivative
///
/// This is all [`newton::solve`](crate::newton::solve) needs to know about a
/// formula. Both methods may return NaN or ±∞.
pub trait Function {
    /// Value of the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
    /// Value of the derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

/// A [`Function`] made of two closures
pub struct FnPair<F, DF> {
    f: F,
    df: DF,
}

impl<F, DF> FnPair<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    /// Pairs a function with its derivative.
    pub fn new(f: F, df: DF) -> Self {
        FnPair { f, df }
    }
}

impl<F, DF> Function for FnPair<F, DF>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}
