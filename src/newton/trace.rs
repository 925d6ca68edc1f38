use std::ops::Deref;

use serde::Serialize;

/// Ordered iterates of one Newton run, starting with the initial guess
///
/// A trace is only ever appended to by the solver and is never empty.
/// It dereferences to a slice for reading.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<f64>);

impl Trace {
    pub(crate) fn new(x0: f64) -> Self {
        Trace(vec![x0])
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.0.push(x);
    }

    /// The initial guess.
    pub fn initial(&self) -> f64 {
        self.0[0]
    }

    /// The latest iterate.
    pub fn latest(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Consumes the trace and returns the iterates.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// Iterates are compared bit for bit, so NaN equals NaN and `0.0` differs from `-0.0`.
impl PartialEq for Trace {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Deref for Trace {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}
