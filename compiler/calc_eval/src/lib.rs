//! Calc Eval - Precedence-tier evaluator for arithmetic expressions.
//!
//! # Architecture
//!
//! - [`Calculator`]: the engine. `evaluate`, `log`, `statistics`,
//!   `reset_statistics` are the whole public surface a front end needs.
//! - [`Coordinator`]: reduces tokens: groups first, then the power,
//!   multiply/divide and add/subtract tiers, each left to right.
//! - [`Broker`]: ordered in-memory mailbox carrying [`Message`] envelopes
//!   between the coordinator and the handlers, with a history of every
//!   envelope of the current session.
//! - [`OperationHandler`]: one per operator; applies the arithmetic, counts
//!   invocations and writes trace lines.
//! - [`HandlerRegistry`]: operator symbol to handler.
//!
//! Everything runs on the caller's thread. A binary operation is a
//! synchronous request/response pair: the coordinator sends, steps the
//! handler, and collects the reply before moving on.
//!
//! # Re-exports
//!
//! Token types come from `calc_lexer`: `Token`, `BinaryOp`, `tokenize`.

mod calculator;
mod channel;
mod errors;
mod evaluator;
mod handler;
mod registry;
mod session;
mod shared;
mod stack;

pub use calc_lexer::{tokenize, BinaryOp, Token};

pub use calculator::{Calculator, CalculatorBuilder};
pub use channel::{Broker, Message, MessageKind, Participant, Payload};
pub use errors::{
    CalcError, CalcResult, DispatchError, DomainError, ErrorKind, EvalError, LexError,
};
pub use evaluator::Coordinator;
pub use handler::{apply, OperationHandler};
pub use registry::HandlerRegistry;
pub use session::{format_value, SessionLog, Statistics};
pub use shared::SharedCalculator;
pub use stack::ensure_sufficient_stack;
