//! Calculator operators.
//!
//! A single closed set covers both the operator a caller requests and the
//! operator the engine keeps pending, so every `match` over it is exhaustive.

use std::fmt;

/// An operator that can be applied to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// "=": resolve whatever is pending and stop. Also the idle tag.
    Result,

    /// Binary addition.
    Add,

    /// Binary subtraction.
    Subtract,

    /// Binary multiplication.
    Multiply,

    /// Binary division.
    Divide,

    /// Binary exponentiation, `accumulator ^ operand`.
    Power,

    /// Unary: squares the freshly entered operand.
    Square,

    /// Unary: flips the sign of the accumulator.
    Negate,
}

impl Operation {
    /// Every operator, in keypad order.
    pub const ALL: [Operation; 8] = [
        Operation::Result,
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Square,
        Operation::Negate,
    ];

    /// Returns `true` for operators that stay pending until the next operand.
    ///
    /// `Result` and the unary keys resolve and leave the engine idle.
    pub fn is_binary(self) -> bool {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => true,
            Operation::Result | Operation::Square | Operation::Negate => false,
        }
    }

    /// Keypad symbol, also used as the tape token.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Result => "=",
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Square => "sqr",
            Operation::Negate => "neg",
        }
    }

    /// Looks up an operator by keypad symbol (case-insensitive).
    ///
    /// `enter` is accepted as an alias for `=`.
    pub fn from_symbol(symbol: &str) -> Option<Operation> {
        let symbol = symbol.trim().to_lowercase();
        if symbol == "enter" {
            return Some(Operation::Result);
        }
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_queued_operators_are_binary() {
        let binary: Vec<_> = Operation::ALL.iter().filter(|op| op.is_binary()).collect();
        assert_eq!(binary.len(), 5);
        assert!(!Operation::Result.is_binary());
        assert!(!Operation::Square.is_binary());
        assert!(!Operation::Negate.is_binary());
    }

    #[test]
    fn test_symbol_lookup() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol(" SQR "), Some(Operation::Square));
        assert_eq!(Operation::from_symbol("Enter"), Some(Operation::Result));
        assert_eq!(Operation::from_symbol("log"), None);
    }
}
