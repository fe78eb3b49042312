//! Core arithmetic state machine.
//!
//! Holds a running accumulator and at most one pending binary operator.
//! Every call resolves the operator queued by the *previous* call against the
//! new operand, the way a physical calculator does.

use crate::error::{EngineError, Result};
use crate::operation::Operation;
use crate::rounding::{round_half_up, ROUND_PLACES};
use log::debug;

/// The calculator engine.
///
/// # State
///
/// - `accumulator` starts at `0`.
/// - `pending` starts as [`Operation::Result`], which doubles as the idle tag:
///   the engine is mid-expression iff the pending operator is anything else.
///
/// # Non-finite results
///
/// Division by zero, overflow and invalid powers never panic or fail. The
/// engine resets itself and hands back the infinity or NaN so the caller can
/// show an error.
///
/// # Examples
///
/// ```
/// use calculator_engine::{Calculator, Operation};
///
/// let mut calc = Calculator::new();
/// calc.apply(Operation::Add, 5.0);
/// calc.apply(Operation::Add, 3.0);
/// assert_eq!(calc.apply(Operation::Result, 0.0), 8.0);
/// assert!(!calc.in_binary_operation());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    accumulator: f64,
    pending: Operation,
}

impl Calculator {
    /// Creates an idle engine with a zero accumulator.
    pub fn new() -> Self {
        Calculator {
            accumulator: 0.0,
            pending: Operation::Result,
        }
    }

    /// Applies `requested` with the freshly entered `operand`.
    ///
    /// Returns the new accumulator, rounded to [`ROUND_PLACES`] fractional
    /// digits, or the raw non-finite value if the computation blew up (in
    /// which case the engine has already been reset).
    pub fn apply(&mut self, requested: Operation, operand: f64) -> f64 {
        self.resolve_pending(operand);
        self.pending = requested;

        match requested {
            Operation::Square => {
                self.accumulator = operand * operand;
                self.pending = Operation::Result;
            }
            Operation::Negate => {
                self.accumulator = -self.accumulator;
                self.pending = Operation::Result;
            }
            Operation::Result
            | Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => {}
        }

        if !self.accumulator.is_finite() {
            let value = self.accumulator;
            debug!("{} {} produced {}, resetting", requested, operand, value);
            self.reset();
            return value;
        }

        self.accumulator = round_half_up(self.accumulator, ROUND_PLACES);
        debug!(
            "{} {} -> accumulator {}, pending {}",
            requested, operand, self.accumulator, self.pending
        );
        self.accumulator
    }

    /// Same transition as [`Calculator::apply`], with the non-finite case
    /// reported as [`EngineError::NonFiniteResult`].
    pub fn apply_checked(&mut self, requested: Operation, operand: f64) -> Result<f64> {
        let value = self.apply(requested, operand);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EngineError::NonFiniteResult(value))
        }
    }

    /// Returns `true` while a binary operator waits for its right-hand operand.
    pub fn in_binary_operation(&self) -> bool {
        self.pending != Operation::Result
    }

    /// Clears the accumulator and any pending operator.
    pub fn reset(&mut self) {
        self.pending = Operation::Result;
        self.accumulator = 0.0;
    }

    fn resolve_pending(&mut self, operand: f64) {
        match self.pending {
            Operation::Result => self.accumulator = operand,
            Operation::Add => self.accumulator += operand,
            Operation::Subtract => self.accumulator -= operand,
            Operation::Multiply => self.accumulator *= operand,
            Operation::Divide => self.accumulator /= operand,
            Operation::Power => self.accumulator = self.accumulator.powf(operand),
            // unary operators never stay pending
            Operation::Square | Operation::Negate => {}
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
