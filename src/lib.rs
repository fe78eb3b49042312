//! # Calculator Engine
//!
//! A four-function calculator modeled as a small state machine: a running
//! accumulator plus at most one pending binary operator, the way a physical
//! calculator behaves. There is no expression parsing and no precedence.
//!
//! ## Design Principles
//!
//! - **One pending operator**: each call resolves the operator queued by the
//!   previous call, then queues its own
//! - **Unary keys resolve immediately**: square and negate never stay pending
//! - **Errors by sentinel**: infinity or NaN is returned after an automatic
//!   reset; [`Calculator::apply_checked`] offers the same as a `Result`
//! - **Decimal rounding**: results are rounded half-up to 15 fractional digits
//!   via `rust_decimal`
//!
//! ## Example
//!
//! ```
//! use calculator_engine::{Calculator, Operation};
//!
//! let mut calc = Calculator::new();
//! calc.apply(Operation::Divide, 1.0);
//! assert_eq!(calc.apply(Operation::Result, 3.0), 0.333333333333333);
//!
//! calc.apply(Operation::Divide, 1.0);
//! assert!(calc.apply(Operation::Result, 0.0).is_infinite());
//! assert!(!calc.in_binary_operation());
//! ```

pub mod engine;
pub mod error;
pub mod key;
pub mod operation;
pub mod rounding;
pub mod session;
pub mod tape;

pub use engine::Calculator;
pub use error::{EngineError, Result};
pub use key::{Key, KeyRecord};
pub use operation::Operation;
pub use rounding::{round_half_up, ROUND_PLACES};
pub use session::{format_number, Session, ERROR_INDICATOR};
pub use tape::TapeRunner;
