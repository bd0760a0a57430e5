//! Calc Lexer - Tokenizer for arithmetic expressions.
//!
//! Turns an expression such as `2 + 3 * (4 - 1) ** 2` into a flat sequence of
//! [`Token`]s: numbers, binary operators and parentheses.
//!
//! # Pipeline
//!
//! 1. All whitespace is removed, so `2 3` reads as `23` and `* *` as `**`.
//! 2. The remaining text is scanned with a `logos` lexer. Longest match makes
//!    `**` win over `*`.
//! 3. A `-` in sign position (start of input, after an operator, after `(`)
//!    that is directly followed by a numeral is folded into a negative
//!    literal. A `-` followed by anything else is left as an operator.
//!
//! Structural problems (doubled operators, a trailing operator, unbalanced
//! parentheses) are not detected here; they surface during evaluation.

mod raw_token;
mod token;

use logos::Logos;
use thiserror::Error;

use raw_token::RawToken;
pub use token::{display_tokens, BinaryOp, Token};

/// Errors produced while tokenizing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token. `offset` is a byte offset into the
    /// whitespace-stripped input.
    #[error("unexpected character '{ch}' at position {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
    /// A numeral that could not be read as a float.
    #[error("invalid number literal '{literal}'")]
    InvalidNumber { literal: String },
}

/// Tokenize an expression.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let source: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let raw = scan(&source)?;

    let mut tokens = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        let (tag, slice) = raw[i];
        if tag == RawToken::Minus && (i == 0 || raw[i - 1].0.starts_operand()) {
            if let Some(&(RawToken::Number, digits)) = raw.get(i + 1) {
                tokens.push(Token::Number(-parse_number(digits)?));
                i += 2;
                continue;
            }
        }
        tokens.push(cook(tag, slice)?);
        i += 1;
    }
    Ok(tokens)
}

/// Run the raw lexer, keeping each tag with its source slice.
fn scan(source: &str) -> Result<Vec<(RawToken, &str)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut raw = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(tag) => raw.push((tag, &source[span])),
            Err(()) => {
                let ch = source[span.start..].chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    offset: span.start,
                });
            }
        }
    }
    Ok(raw)
}

fn cook(tag: RawToken, slice: &str) -> Result<Token, LexError> {
    Ok(match tag {
        RawToken::Number => Token::Number(parse_number(slice)?),
        RawToken::Plus => Token::Operator(BinaryOp::Add),
        RawToken::Minus => Token::Operator(BinaryOp::Sub),
        RawToken::Star => Token::Operator(BinaryOp::Mul),
        RawToken::Slash => Token::Operator(BinaryOp::Div),
        RawToken::StarStar => Token::Operator(BinaryOp::Pow),
        RawToken::LParen => Token::LeftParen,
        RawToken::RParen => Token::RightParen,
    })
}

fn parse_number(literal: &str) -> Result<f64, LexError> {
    literal.parse().map_err(|_| LexError::InvalidNumber {
        literal: literal.to_owned(),
    })
}
