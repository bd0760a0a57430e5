//! In-memory message channel between the coordinator and the handlers.
//!
//! The [`Broker`] keeps a FIFO queue of undelivered [`Message`]s plus an
//! append-only history of every message sent since the last reset. A
//! message leaves the pending queue exactly once, when its receiver takes
//! it, and stays in the history.
//!
//! Nothing here is concurrent: sending and delivering happen back to back
//! on the caller's stack. The channel exists to keep the evaluator's control
//! flow apart from each operation's arithmetic and bookkeeping.

use std::collections::VecDeque;
use std::fmt;

use calc_lexer::BinaryOp;

/// Endpoint of a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The evaluator that issues requests.
    Coordinator,
    /// The handler responsible for one operator.
    Handler(BinaryOp),
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Coordinator => f.write_str("coordinator"),
            Participant::Handler(op) => {
                let id = match op {
                    BinaryOp::Add => "add_handler",
                    BinaryOp::Sub => "subtract_handler",
                    BinaryOp::Mul => "multiply_handler",
                    BinaryOp::Div => "divide_handler",
                    BinaryOp::Pow => "power_handler",
                };
                f.write_str(id)
            }
        }
    }
}

/// Envelope contents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Payload {
    /// Apply the receiver's operation to `(left, right)`.
    Request { operands: (f64, f64) },
    /// Value computed for the matching request.
    Response { value: f64 },
}

/// Kind of a message, derived from its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Operation,
    Result,
}

/// An immutable envelope.
///
/// Requests and responses pair up 1:1 by channel order; there is never more
/// than one request outstanding, so no correlation id is carried.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    sender: Participant,
    receiver: Participant,
    payload: Payload,
}

impl Message {
    pub fn request(sender: Participant, receiver: Participant, left: f64, right: f64) -> Self {
        Message {
            sender,
            receiver,
            payload: Payload::Request {
                operands: (left, right),
            },
        }
    }

    pub fn response(sender: Participant, receiver: Participant, value: f64) -> Self {
        Message {
            sender,
            receiver,
            payload: Payload::Response { value },
        }
    }

    pub fn sender(&self) -> Participant {
        self.sender
    }

    pub fn receiver(&self) -> Participant {
        self.receiver
    }

    pub fn payload(&self) -> Payload {
        self.payload
    }

    pub fn kind(&self) -> MessageKind {
        match self.payload {
            Payload::Request { .. } => MessageKind::Operation,
            Payload::Response { .. } => MessageKind::Result,
        }
    }

    /// Operands of a request.
    pub fn operands(&self) -> Option<(f64, f64)> {
        match self.payload {
            Payload::Request { operands } => Some(operands),
            Payload::Response { .. } => None,
        }
    }

    /// Value of a response.
    pub fn value(&self) -> Option<f64> {
        match self.payload {
            Payload::Response { value } => Some(value),
            Payload::Request { .. } => None,
        }
    }
}

/// Ordered mailbox shared by all participants.
#[derive(Debug)]
pub struct Broker {
    pending: VecDeque<Message>,
    history: Vec<Message>,
    record_history: bool,
}

impl Broker {
    pub fn new(record_history: bool) -> Self {
        Broker {
            pending: VecDeque::new(),
            history: Vec::new(),
            record_history,
        }
    }

    /// Enqueue a message, recording it in the history when enabled.
    pub fn send(&mut self, message: Message) {
        if self.record_history {
            self.history.push(message.clone());
        }
        tracing::trace!(
            sender = %message.sender,
            receiver = %message.receiver,
            kind = ?message.kind(),
            "message sent"
        );
        self.pending.push_back(message);
    }

    /// Remove and return every pending message addressed to `receiver`,
    /// oldest first. Messages for other receivers keep their order.
    pub fn take_for(&mut self, receiver: Participant) -> Vec<Message> {
        let (taken, kept): (Vec<Message>, Vec<Message>) = self
            .pending
            .drain(..)
            .partition(|message| message.receiver == receiver);
        self.pending = kept.into();
        taken
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn records_history(&self) -> bool {
        self.record_history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new(true)
    }
}
