use thiserror::Error;

/// Reasons a formula is rejected by [`compile`](crate::expr::compile)
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The formula contains a character or word outside the accepted set
    #[error(
        "invalid input at position {}: use only numbers, x, the operators + - * / ^ and the functions sin, cos, tan, asin, acos, atan, exp, ln, log, sqrt",
        .position + 1
    )]
    InvalidCharacters {
        /// Character offset of the first rejected character (0-indexed)
        position: usize,
    },
    /// The formula only uses accepted tokens but does not form an expression
    #[error("malformed expression: {reason}")]
    MalformedExpression {
        /// What the parser tripped over
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedExpression {
            reason: reason.into(),
        }
    }
}
