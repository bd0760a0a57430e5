//! The coordinator: reduces a token sequence to a single number.
//!
//! # Algorithm
//!
//! 1. **Groups.** Scan left to right. At each `(` find its matching `)` by
//!    depth counting, evaluate the enclosed tokens by recursing into
//!    [`Coordinator::evaluate_tokens`], and splice the value back in place
//!    of the whole group. A `-` in sign position directly before the group
//!    negates its value (`-(2+3)` is `-5`).
//! 2. **Tiers.** For each tier in [`BinaryOp::TIERS`] (power, then
//!    multiply/divide, then add/subtract) scan left to right. Each operator
//!    of the tier is dispatched with its left and right neighbours and the
//!    three-token window is replaced by the result. The scan index is not
//!    advanced after a replacement, which makes every tier left-associative:
//!    `8/4/2` is `1` and `2**3**2` is `64`.
//! 3. **Termination.** Exactly one number must remain.
//!
//! Every binary application goes through [`Coordinator::dispatch`]: a
//! request envelope to the handler, one step of the handler, and the
//! response envelope back.

use calc_lexer::{display_tokens, tokenize, BinaryOp, Token};

use crate::channel::{Broker, Message, Participant};
use crate::errors::{CalcResult, DispatchError, EvalError};
use crate::registry::HandlerRegistry;
use crate::session::SessionLog;
use crate::stack::ensure_sufficient_stack;

/// Per-evaluation view over the engine's registry, channel and log.
pub struct Coordinator<'a> {
    registry: &'a mut HandlerRegistry,
    broker: &'a mut Broker,
    log: &'a mut SessionLog,
}

impl<'a> Coordinator<'a> {
    pub fn new(
        registry: &'a mut HandlerRegistry,
        broker: &'a mut Broker,
        log: &'a mut SessionLog,
    ) -> Self {
        Coordinator {
            registry,
            broker,
            log,
        }
    }

    /// Tokenize and evaluate `expression`.
    pub fn run(&mut self, expression: &str) -> CalcResult {
        let tokens = tokenize(expression)?;
        self.log
            .push(format!("[IO] tokens: {}", display_tokens(&tokens)));
        self.evaluate_tokens(tokens)
    }

    /// Reduce a token sequence to its value.
    pub fn evaluate_tokens(&mut self, mut tokens: Vec<Token>) -> CalcResult {
        self.resolve_groups(&mut tokens)?;
        for tier in 0..BinaryOp::TIERS.len() {
            self.reduce_tier(&mut tokens, tier)?;
        }
        match tokens.as_slice() {
            [Token::Number(value)] => Ok(*value),
            [] => Err(EvalError::EmptyExpression.into()),
            rest => Err(EvalError::ResidualTokens {
                remaining: display_tokens(rest),
            }
            .into()),
        }
    }

    fn resolve_groups(&mut self, tokens: &mut Vec<Token>) -> CalcResult<()> {
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i] {
                Token::LeftParen => {
                    let close = matching_paren(tokens, i).ok_or(EvalError::UnbalancedParentheses)?;
                    let inner = tokens[i + 1..close].to_vec();
                    self.log.push(format!(
                        "[IO] evaluating group: {}",
                        display_tokens(&inner)
                    ));
                    let mut value = ensure_sufficient_stack(|| self.evaluate_tokens(inner))?;

                    let mut start = i;
                    if is_sign_position(tokens, i) {
                        start = i - 1;
                        value = -value;
                    }
                    tokens[start] = Token::Number(value);
                    tokens.drain(start + 1..=close);
                    i = start + 1;
                }
                Token::RightParen => return Err(EvalError::UnbalancedParentheses.into()),
                Token::Number(_) | Token::Operator(_) => i += 1,
            }
        }
        Ok(())
    }

    fn reduce_tier(&mut self, tokens: &mut Vec<Token>, tier: usize) -> CalcResult<()> {
        let mut i = 0;
        while i < tokens.len() {
            let op = match tokens[i] {
                Token::Operator(op) if op.tier() == tier => op,
                _ => {
                    i += 1;
                    continue;
                }
            };
            if i == 0 || i + 1 == tokens.len() {
                return Err(EvalError::InvalidOperatorPosition { op }.into());
            }
            let (Some(left), Some(right)) = (tokens[i - 1].as_number(), tokens[i + 1].as_number())
            else {
                return Err(EvalError::MissingOperand { op }.into());
            };

            let value = self.dispatch(op.as_symbol(), left, right)?;
            tokens[i - 1] = Token::Number(value);
            tokens.drain(i..=i + 1);
        }
        Ok(())
    }

    /// Route one binary operation to its handler and wait for the result.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dispatch(&mut self, symbol: &str, left: f64, right: f64) -> CalcResult {
        let unsupported = || DispatchError::UnsupportedOperator {
            symbol: symbol.to_owned(),
        };
        let op = BinaryOp::from_symbol(symbol).ok_or_else(unsupported)?;
        let handler = self
            .registry
            .get_mut(op.as_symbol())
            .ok_or_else(unsupported)?;
        let id = handler.id();

        self.broker
            .send(Message::request(Participant::Coordinator, id, left, right));
        self.log
            .push(format!("[IO] -> sending to {id}: {left} {symbol} {right}"));

        handler.step(self.broker, self.log)?;

        let value = self
            .broker
            .take_for(Participant::Coordinator)
            .first()
            .and_then(Message::value)
            .ok_or(DispatchError::NoResponse { handler: id })?;
        self.log.push(format!("[IO] <- received from {id}: {value}"));
        Ok(value)
    }
}

/// Index of the `)` closing the `(` at `open`.
fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens[open..].iter().enumerate() {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            Token::Number(_) | Token::Operator(_) => {}
        }
    }
    None
}

/// Whether the token before `index` is a `-` acting as a sign.
fn is_sign_position(tokens: &[Token], index: usize) -> bool {
    index > 0
        && tokens[index - 1] == Token::Operator(BinaryOp::Sub)
        && (index == 1 || tokens[index - 2].starts_operand())
}
