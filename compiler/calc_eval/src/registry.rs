//! Dispatch registry: operator symbol to operation handler.

use calc_lexer::BinaryOp;
use rustc_hash::FxHashMap;

use crate::handler::OperationHandler;
use crate::session::Statistics;

/// Owns the registered handlers and maps each symbol to its slot.
///
/// Handlers are kept in registration order so statistics read the same way
/// every time.
#[derive(Clone, Debug)]
pub struct HandlerRegistry {
    handlers: Vec<OperationHandler>,
    by_symbol: FxHashMap<&'static str, usize>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        HandlerRegistry {
            handlers: Vec::new(),
            by_symbol: FxHashMap::default(),
        }
    }

    /// Create a registry with a handler for each of `ops`. Duplicates are
    /// registered once.
    pub fn with_operators(ops: impl IntoIterator<Item = BinaryOp>) -> Self {
        let mut registry = Self::empty();
        for op in ops {
            registry.register(op);
        }
        registry
    }

    /// Register a handler for `op`. Returns `false` if one already exists.
    pub fn register(&mut self, op: BinaryOp) -> bool {
        if self.by_symbol.contains_key(op.as_symbol()) {
            return false;
        }
        self.by_symbol.insert(op.as_symbol(), self.handlers.len());
        self.handlers.push(OperationHandler::new(op));
        true
    }

    pub fn get(&self, symbol: &str) -> Option<&OperationHandler> {
        self.by_symbol.get(symbol).map(|&slot| &self.handlers[slot])
    }

    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut OperationHandler> {
        self.by_symbol
            .get(symbol)
            .map(|&slot| &mut self.handlers[slot])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn handlers(&self) -> &[OperationHandler] {
        &self.handlers
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invocation counts of every registered handler.
    pub fn statistics(&self) -> Statistics {
        Statistics::new(
            self.handlers
                .iter()
                .map(|handler| (handler.name(), handler.invocations()))
                .collect(),
        )
    }

    /// Zero every invocation counter.
    pub fn reset_statistics(&mut self) {
        for handler in &mut self.handlers {
            handler.reset();
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_operators(BinaryOp::ALL)
    }
}
