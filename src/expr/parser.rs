use super::lexer::Token;
use super::{BinaryOp, Expr, Func};
use crate::error::ParseError;

/// Unary `-`/`+` bind tighter than `*` but looser than `^`, so `-x^2` is `-(x^2)`.
const UNARY_PRECEDENCE: u8 = 25;

/// Deepest nesting a formula may reach.
///
/// Counts parentheses, calls, signs and operator chains alike, and bounds
/// both the parser's recursion and the depth of the resulting tree.
const MAX_DEPTH: usize = 256;

fn too_deep() -> ParseError {
    ParseError::malformed("formula nested too deeply")
}

/// Depth of a node over children of depth `depth`.
fn deeper(depth: usize) -> Result<usize, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(too_deep());
    }
    Ok(depth + 1)
}

/// Parses tokens into an expression tree by precedence climbing.
pub(crate) fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::malformed("empty formula"));
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let (expr, _) = parser.parse_expr(0)?;
    match parser.current() {
        None => Ok(expr),
        Some(token) => Err(ParseError::malformed(format!(
            "unexpected '{}' after complete expression",
            token
        ))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Number of active `parse_expr` calls
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect_right_paren(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(Token::RightParen) => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(ParseError::malformed(format!(
                "expected ')' but found '{}'",
                token
            ))),
            None => Err(ParseError::malformed("missing ')'")),
        }
    }

    /// Parses an expression and returns it with its tree depth.
    fn parse_expr(&mut self, min_precedence: u8) -> Result<(Expr, usize), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(too_deep());
        }
        self.nesting += 1;
        let parsed = self.parse_binary(min_precedence);
        self.nesting -= 1;
        parsed
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut depth) = self.parse_prefix()?;

        while let Some(Token::Operator(op)) = self.current() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();

            // right associative for power, left for others
            let next_precedence = if op == BinaryOp::Pow {
                precedence
            } else {
                precedence + 1
            };
            let (right, right_depth) = self.parse_expr(next_precedence)?;
            depth = deeper(depth.max(right_depth))?;
            left = Expr::binary(op, left, right);
        }

        Ok((left, depth))
    }

    fn parse_prefix(&mut self) -> Result<(Expr, usize), ParseError> {
        let token = self
            .current()
            .ok_or_else(|| ParseError::malformed("missing operand at end of formula"))?;
        self.advance();

        match token {
            Token::Number(n) => Ok((Expr::Constant(n), 1)),
            Token::Variable => Ok((Expr::Variable("x".to_string()), 1)),
            Token::Func(func) => self.parse_call(func),
            Token::Operator(BinaryOp::Sub) => match self.parse_expr(UNARY_PRECEDENCE)? {
                (Expr::Constant(c), depth) => Ok((Expr::Constant(-c), depth)),
                (other, depth) => Ok((
                    Expr::binary(BinaryOp::Mul, Expr::Constant(-1.0), other),
                    deeper(depth)?,
                )),
            },
            Token::Operator(BinaryOp::Add) => self.parse_expr(UNARY_PRECEDENCE),
            Token::LeftParen => {
                let parsed = self.parse_expr(0)?;
                self.expect_right_paren()?;
                Ok(parsed)
            }
            Token::Operator(op) => Err(ParseError::malformed(format!(
                "operator '{}' is missing its left operand",
                op.symbol()
            ))),
            Token::RightParen => Err(ParseError::malformed("unexpected ')'")),
        }
    }

    fn parse_call(&mut self, func: Func) -> Result<(Expr, usize), ParseError> {
        match self.current() {
            Some(Token::LeftParen) => self.advance(),
            _ => {
                return Err(ParseError::malformed(format!(
                    "function '{}' must be followed by '('",
                    func.name()
                )))
            }
        }
        if let Some(Token::RightParen) = self.current() {
            return Err(ParseError::malformed(format!(
                "function '{}' needs an argument",
                func.name()
            )));
        }
        let (arg, depth) = self.parse_expr(0)?;
        self.expect_right_paren()?;
        Ok((Expr::call(func, arg), deeper(depth)?))
    }
}
