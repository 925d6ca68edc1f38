//! Formula session for interactive front-ends
//!
//! A front-end usually asks for one formula and then tries many guesses. The
//! session keeps recently compiled formulas so that switching back and forth
//! between them does not parse and differentiate again. It holds no solver
//! state: every [`Session::solve`] is an independent run.
use std::sync::Arc;

use caches::{Cache, RawLRU};

use crate::error::ParseError;
use crate::expr::{compile, CompiledFunction};
use crate::newton::{self, Params};
use crate::status::SolveResult;

/// Variable every formula is written in.
pub const VARIABLE: &str = "x";

/// A cache of compiled formulas keyed by their source text
pub struct Session {
    cache: RawLRU<String, Arc<CompiledFunction>>,
}

impl Session {
    /// Number of formulas kept by [`Session::new`].
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates a session keeping the [`Session::DEFAULT_CAPACITY`] most recent formulas.
    pub fn new() -> Session {
        Session {
            cache: RawLRU::new(Self::DEFAULT_CAPACITY).unwrap(),
        }
    }

    /// Creates a session keeping the `capacity` most recent formulas.
    ///
    /// Returns `None` for a capacity of zero.
    pub fn with_capacity(capacity: usize) -> Option<Session> {
        RawLRU::new(capacity).ok().map(|cache| Session { cache })
    }

    /// Compiles `source`, reusing an earlier compilation of the same text.
    ///
    /// Rejected formulas are not remembered.
    pub fn compile(&mut self, source: &str) -> Result<Arc<CompiledFunction>, ParseError> {
        let key = source.to_string();
        if let Some(function) = self.cache.get(&key).cloned() {
            return Ok(function);
        }
        let function = Arc::new(compile(source, VARIABLE)?);
        self.cache.put(key, Arc::clone(&function));
        Ok(function)
    }

    /// Compiles `source` if necessary and runs Newton's method from `x0`.
    pub fn solve(
        &mut self,
        source: &str,
        x0: f64,
        params: &Params,
    ) -> Result<SolveResult, ParseError> {
        let function = self.compile(source)?;
        Ok(newton::solve(&*function, x0, params))
    }

    /// Number of remembered formulas.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Checks whether no formula is remembered.
    pub fn is_empty(&self) -> bool {
        self.cache.len() == 0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
