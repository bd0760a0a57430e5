//! The public engine: [`Calculator`] and its [`CalculatorBuilder`].

use calc_lexer::BinaryOp;

use crate::channel::{Broker, Message};
use crate::errors::CalcResult;
use crate::evaluator::Coordinator;
use crate::registry::HandlerRegistry;
use crate::session::{format_value, SessionLog, Statistics};

/// Builder for creating [`Calculator`] instances with various configurations.
pub struct CalculatorBuilder {
    operators: Vec<BinaryOp>,
    record_history: bool,
    trace_log: bool,
}

impl CalculatorBuilder {
    /// Create a builder with every operator enabled and history recording on.
    pub fn new() -> Self {
        Self {
            operators: BinaryOp::ALL.to_vec(),
            record_history: true,
            trace_log: false,
        }
    }

    /// Set which operators get a handler.
    ///
    /// Disabled operators still tokenize; using one fails at dispatch time
    /// with an unsupported-operator error.
    #[must_use]
    pub fn operators(mut self, ops: impl IntoIterator<Item = BinaryOp>) -> Self {
        self.operators = ops.into_iter().collect();
        self
    }

    /// Keep (or drop) the envelope history of each evaluation.
    #[must_use]
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Mirror session log lines to `tracing` at debug level.
    #[must_use]
    pub fn trace_log(mut self, enabled: bool) -> Self {
        self.trace_log = enabled;
        self
    }

    pub fn build(self) -> Calculator {
        Calculator {
            registry: HandlerRegistry::with_operators(self.operators),
            broker: Broker::new(self.record_history),
            log: SessionLog::new(self.trace_log),
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic evaluation engine.
///
/// Owns the handler registry (whose counters are the statistics), the
/// message channel and the session log. One evaluation runs at a time:
/// [`Calculator::evaluate`] clears the log, the pending queue and the
/// history before it starts. Share an engine across threads through
/// [`crate::SharedCalculator`], which serializes calls.
#[derive(Debug)]
pub struct Calculator {
    registry: HandlerRegistry,
    broker: Broker,
    log: SessionLog,
}

impl Calculator {
    pub fn new() -> Self {
        CalculatorBuilder::new().build()
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Evaluate an expression, starting a new session.
    ///
    /// On failure the error is the last log line and no value is produced.
    /// Handlers that ran before the failure keep their counts.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, expression: &str) -> CalcResult {
        self.log.clear();
        self.broker.clear_history();
        self.broker.clear_pending();
        self.log.push(format!("[IO] new expression: {expression}"));

        let outcome = self.coordinator().run(expression);
        match &outcome {
            Ok(value) => {
                self.log
                    .push(format!("[IO] result: {}", format_value(*value)));
                tracing::debug!(value = *value, "evaluation finished");
            }
            Err(err) => {
                self.log.push(format!("[IO] error: {err}"));
                tracing::debug!(error = %err, kind = ?err.kind(), "evaluation failed");
            }
        }
        outcome
    }

    /// Dispatch a single operation by symbol within the current session.
    pub fn dispatch(&mut self, symbol: &str, left: f64, right: f64) -> CalcResult {
        self.coordinator().dispatch(symbol, left, right)
    }

    /// Trace lines of the most recent evaluation.
    pub fn log(&self) -> &[String] {
        self.log.lines()
    }

    /// Envelopes exchanged during the most recent evaluation.
    pub fn history(&self) -> &[Message] {
        self.broker.history()
    }

    /// Invocation counts since the last reset.
    pub fn statistics(&self) -> Statistics {
        self.registry.statistics()
    }

    pub fn reset_statistics(&mut self) {
        self.registry.reset_statistics();
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    fn coordinator(&mut self) -> Coordinator<'_> {
        Coordinator::new(&mut self.registry, &mut self.broker, &mut self.log)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
