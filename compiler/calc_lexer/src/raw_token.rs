//! `logos`-generated raw scanner.
//!
//! Raw tokens carry no values; the slice is cooked into a [`crate::Token`]
//! once sign folding has looked at the neighbours.

use logos::Logos;

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    #[token("**")]
    StarStar,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl RawToken {
    /// A `-` right after this token is a sign.
    pub(crate) fn starts_operand(self) -> bool {
        !matches!(self, RawToken::Number | RawToken::RParen)
    }
}
