//! Keystroke session: turns key presses into engine calls and renders the
//! display and status line.
//!
//! The session owns the entry buffer the user is typing into. Operator keys
//! parse that buffer (an empty buffer counts as `0`) and feed it to the
//! engine; non-numeric text or a non-finite result shows [`ERROR_INDICATOR`]
//! and starts over.

use crate::engine::Calculator;
use crate::error::{EngineError, Result};
use crate::key::Key;
use crate::operation::Operation;
use log::{debug, warn};

/// Status text shown after invalid input or a non-finite result.
pub const ERROR_INDICATOR: &str = "Error";

/// One interactive calculator: an engine plus its entry buffer and status line.
///
/// # Display states
///
/// - While building input, `display()` is the text typed so far.
/// - After `=` or a unary key, `display()` shows the result. The next digit
///   starts a fresh calculation; the next operator chains on the result.
/// - After a binary operator, `status()` shows the running value and the
///   operator symbol, e.g. `"8 +"`.
#[derive(Debug, Clone)]
pub struct Session {
    calc: Calculator,
    entry: String,
    status: String,
    building_input: bool,
}

impl Session {
    /// Creates a cleared session.
    pub fn new() -> Self {
        Session {
            calc: Calculator::new(),
            entry: String::new(),
            status: String::new(),
            building_input: true,
        }
    }

    /// Handles a single keystroke.
    pub fn press(&mut self, key: Key) {
        debug!("Key {}", key);
        match key {
            Key::Digit(_) | Key::Point => {
                if let Some(c) = key.as_char() {
                    self.push(c);
                }
            }
            Key::Operator(op) => self.action(op),
            Key::Clear => self.clear(),
        }
    }

    /// Appends a character to the entry buffer.
    ///
    /// If a result is being displayed, the session is cleared first.
    /// Characters that would not leave a (partial) decimal number are dropped.
    pub fn push(&mut self, c: char) {
        if !self.building_input {
            self.clear();
        }

        let mut candidate = self.entry.clone();
        candidate.push(c);
        if is_partial_number(&candidate) {
            self.entry = candidate;
        } else {
            debug!("Rejected {:?} after {:?}", c, self.entry);
        }
    }

    /// Resets the engine and empties the entry buffer and status line.
    pub fn clear(&mut self) {
        self.calc.reset();
        self.start_next_input();
        self.status.clear();
    }

    /// Applies `op` to the current entry.
    pub fn action(&mut self, op: Operation) {
        let operand = match self.parse_entry() {
            Ok(value) => value,
            Err(e) => {
                warn!("{}", e);
                self.show_error();
                return;
            }
        };

        let value = self.calc.apply(op, operand);
        if !value.is_finite() {
            warn!("{} {} gave {}", op, operand, value);
            self.show_error();
            return;
        }

        if op.is_binary() {
            self.status = format!("{} {}", format_number(value), op.symbol());
            self.start_next_input();
        } else {
            self.status.clear();
            self.entry = format_number(value);
            self.building_input = false;
        }
    }

    /// Parses the entry buffer as an operand. An empty buffer is `0`.
    pub fn parse_entry(&self) -> Result<f64> {
        let text = self.entry.trim();
        if text.is_empty() {
            return Ok(0.0);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(EngineError::InvalidOperand(text.to_string())),
        }
    }

    /// Text in the main display.
    pub fn display(&self) -> &str {
        &self.entry
    }

    /// Running-value and pending-operator indicator, or [`ERROR_INDICATOR`].
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns `true` while the error indicator is shown.
    pub fn is_error(&self) -> bool {
        self.status == ERROR_INDICATOR
    }

    /// Returns `true` while a binary operator waits for its operand.
    pub fn in_binary_operation(&self) -> bool {
        self.calc.in_binary_operation()
    }

    fn start_next_input(&mut self) {
        self.entry.clear();
        self.building_input = true;
    }

    fn show_error(&mut self) {
        self.status = ERROR_INDICATOR.to_string();
        self.calc.reset();
        self.start_next_input();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a value for display.
///
/// Integral values have no fractional part (`8`, not `8.0`); everything else
/// uses the shortest decimal representation that round-trips, always in
/// positional form (`0.00000015`, never `1.5E-7`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.floor() == value {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Matches `-?[0-9]*\.?[0-9]*`.
fn is_partial_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}
