//! Operation handlers.
//!
//! One handler per binary operator. A handler owns its invocation counter;
//! the counter only moves on successful applications and persists across
//! evaluations until reset.

use calc_lexer::BinaryOp;

use crate::channel::{Broker, Message, Participant, Payload};
use crate::errors::DomainError;
use crate::session::SessionLog;

/// Apply `op` to two floats.
///
/// Division by zero is the only domain error; everything else follows IEEE
/// semantics (`inf`/`NaN` propagate).
pub fn apply(op: BinaryOp, left: f64, right: f64) -> Result<f64, DomainError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div if right == 0.0 => Err(DomainError::DivisionByZero),
        BinaryOp::Div => Ok(left / right),
        BinaryOp::Pow => Ok(left.powf(right)),
    }
}

/// Stateless arithmetic plus a usage counter.
#[derive(Clone, Debug)]
pub struct OperationHandler {
    op: BinaryOp,
    invocations: u64,
}

impl OperationHandler {
    pub fn new(op: BinaryOp) -> Self {
        OperationHandler { op, invocations: 0 }
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Statistics key.
    pub fn name(&self) -> &'static str {
        self.op.name()
    }

    pub fn symbol(&self) -> &'static str {
        self.op.as_symbol()
    }

    /// This handler's channel address.
    pub fn id(&self) -> Participant {
        Participant::Handler(self.op)
    }

    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    pub fn reset(&mut self) {
        self.invocations = 0;
    }

    /// Apply without touching the counter or the log.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, DomainError> {
        apply(self.op, left, right)
    }

    /// Apply, count and log one operation.
    fn perform(&mut self, left: f64, right: f64, log: &mut SessionLog) -> Result<f64, DomainError> {
        let tag = self.name().to_uppercase();
        match self.apply(left, right) {
            Ok(value) => {
                self.invocations += 1;
                log.push(format!("[{tag}] {left} {} {right} = {value}", self.symbol()));
                Ok(value)
            }
            Err(err) => {
                log.push(format!("[{tag}] error: {err}"));
                Err(err)
            }
        }
    }

    /// Process this handler's mail: answer every pending request addressed
    /// to it with a response to the request's sender.
    ///
    /// A domain error stops processing and propagates; no response is sent
    /// for the failed request.
    pub fn step(&mut self, broker: &mut Broker, log: &mut SessionLog) -> Result<(), DomainError> {
        let id = self.id();
        for message in broker.take_for(id) {
            let Payload::Request {
                operands: (left, right),
            } = message.payload()
            else {
                tracing::warn!(handler = %id, "ignoring non-request message");
                continue;
            };
            let value = self.perform(left, right, log)?;
            broker.send(Message::response(id, message.sender(), value));
        }
        Ok(())
    }
}
