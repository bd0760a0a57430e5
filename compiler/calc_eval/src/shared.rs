//! Thread-safe shared engine wrapper.
//!
//! The engine supports one evaluation at a time. `SharedCalculator` holds
//! the lock for a whole call, so callers on different threads are
//! serialized and each sees the log of its own evaluation.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::calculator::Calculator;
use crate::errors::CalcResult;
use crate::session::Statistics;

/// Cloneable handle to a [`Calculator`] behind a mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedCalculator(Arc<Mutex<Calculator>>);

impl SharedCalculator {
    pub fn new(calculator: Calculator) -> Self {
        SharedCalculator(Arc::new(Mutex::new(calculator)))
    }

    /// Lock the engine for several calls in a row.
    pub fn lock(&self) -> MutexGuard<'_, Calculator> {
        self.0.lock()
    }

    /// Evaluate and return the value together with that evaluation's log.
    pub fn evaluate(&self, expression: &str) -> (CalcResult, Vec<String>) {
        let mut calculator = self.0.lock();
        let outcome = calculator.evaluate(expression);
        (outcome, calculator.log().to_vec())
    }

    pub fn statistics(&self) -> Statistics {
        self.0.lock().statistics()
    }

    pub fn reset_statistics(&self) {
        self.0.lock().reset_statistics();
    }
}
