use std::fmt;

use super::{BinaryOp, Func};
use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Variable,
    Func(Func),
    Operator(BinaryOp),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Variable => write!(f, "x"),
            Token::Func(func) => write!(f, "{}", func.name()),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Splits a whitelisted formula into tokens.
///
/// Both `^` and `**` become [`BinaryOp::Pow`].
pub(crate) fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut chars = source.chars().enumerate().peekable();
    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '+' => Token::Operator(BinaryOp::Add),
            '-' => Token::Operator(BinaryOp::Sub),
            '/' => Token::Operator(BinaryOp::Div),
            '^' => Token::Operator(BinaryOp::Pow),
            '*' => {
                if let Some(&(_, '*')) = chars.peek() {
                    chars.next();
                    Token::Operator(BinaryOp::Pow)
                } else {
                    Token::Operator(BinaryOp::Mul)
                }
            }
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            c if c.is_ascii_alphanumeric() => {
                let mut word = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_alphanumeric() {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                word_token(&word).ok_or(ParseError::InvalidCharacters { position })?
            }
            _ => return Err(ParseError::InvalidCharacters { position }),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

fn word_token(word: &str) -> Option<Token> {
    if word == "x" {
        return Some(Token::Variable);
    }
    if let Some(func) = Func::from_name(word) {
        return Some(Token::Func(func));
    }
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return word.parse().ok().map(Token::Number);
    }
    None
}
