//! Lexical pre-filter run before any parsing
use super::Func;
use crate::error::ParseError;

/// Operator and bracket characters that may appear between words.
const SYMBOLS: &str = "+-*/^()";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_allowed_word(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_digit()) || word == "x" || Func::from_name(word).is_some()
}

/// Checks that `source` only consists of accepted characters and words.
///
/// Words are maximal runs of letters, digits and underscores. Each word must
/// be a plain digit run, the variable `x` or a known function name, so `2x`,
/// `x2` and `sinx` are rejected as a whole.
pub(crate) fn check(source: &str) -> Result<(), ParseError> {
    if source.is_empty() {
        return Err(ParseError::InvalidCharacters { position: 0 });
    }
    let mut chars = source.chars().enumerate().peekable();
    let mut word = String::new();
    while let Some((position, c)) = chars.next() {
        if is_word_char(c) {
            word.clear();
            word.push(c);
            while let Some(&(_, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                word.push(next);
                chars.next();
            }
            if !is_allowed_word(&word) {
                return Err(ParseError::InvalidCharacters { position });
            }
        } else if !(c.is_whitespace() || SYMBOLS.contains(c)) {
            return Err(ParseError::InvalidCharacters { position });
        }
    }
    Ok(())
}
