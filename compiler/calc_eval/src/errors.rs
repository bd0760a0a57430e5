//! Error types for evaluation.
//!
//! Four kinds, all fatal for the `evaluate` call that raised them:
//!
//! | Type | Raised by | Example |
//! |------|-----------|---------|
//! | [`LexError`] | tokenizer | `2 $ 3` |
//! | [`EvalError`] | evaluator (structure) | `(2+3`, `2+`, `2(3)` |
//! | [`DispatchError`] | coordinator | operator without a registered handler |
//! | [`DomainError`] | operation handler | `5/0` |
//!
//! [`CalcError`] wraps them for the public API.

use calc_lexer::BinaryOp;
pub use calc_lexer::LexError;
use thiserror::Error;

use crate::channel::Participant;

/// Structural problems found while reducing a token sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("operator {op} in invalid position")]
    InvalidOperatorPosition { op: BinaryOp },
    #[error("operator {op} is missing a numeric operand")]
    MissingOperand { op: BinaryOp },
    #[error("empty expression")]
    EmptyExpression,
    #[error("residual tokens after evaluation: {remaining}")]
    ResidualTokens { remaining: String },
}

/// Failures of the request/response exchange with a handler.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unsupported operator: {symbol}")]
    UnsupportedOperator { symbol: String },
    #[error("no response from {handler}")]
    NoResponse { handler: Participant },
}

/// Arithmetic failures inside a handler.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Category of a [`CalcError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Eval,
    Dispatch,
    Domain,
}

/// Any failure of a top-level evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(_) => ErrorKind::Lex,
            CalcError::Eval(_) => ErrorKind::Eval,
            CalcError::Dispatch(_) => ErrorKind::Dispatch,
            CalcError::Domain(_) => ErrorKind::Domain,
        }
    }
}

/// Result of evaluation.
pub type CalcResult<T = f64> = Result<T, CalcError>;
