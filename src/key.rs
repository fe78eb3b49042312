//! Keystroke models for tape parsing and session input.

use crate::operation::Operation;
use serde::Deserialize;
use std::fmt;

/// Raw keystroke row as read from a tape CSV.
#[derive(Debug, Deserialize)]
pub struct KeyRecord {
    /// Key token: a digit, `.`, an operator symbol, `sqr`, `neg` or `ce`
    pub key: String,
}

impl KeyRecord {
    /// Parses the raw CSV record into a typed key.
    ///
    /// Returns `None` for unknown tokens.
    pub fn parse(&self) -> Option<Key> {
        Key::from_token(&self.key)
    }
}

/// A single calculator keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0..=9`.
    Digit(u8),

    /// The decimal point.
    Point,

    /// An operator key, including `=` and the unary keys.
    Operator(Operation),

    /// "CE": clear the entry and reset the engine.
    Clear,
}

impl Key {
    /// Parses a tape token. Case and surrounding whitespace are ignored.
    pub fn from_token(token: &str) -> Option<Key> {
        let token = token.trim().to_lowercase();

        match token.as_str() {
            "." => Some(Key::Point),
            "ce" | "clear" => Some(Key::Clear),
            t if t.len() == 1 && t.as_bytes()[0].is_ascii_digit() => {
                Some(Key::Digit(t.as_bytes()[0] - b'0'))
            }
            t => Operation::from_symbol(t).map(Key::Operator),
        }
    }

    /// The character this key appends to the entry buffer, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Point => Some('.'),
            Key::Operator(_) | Key::Clear => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::Point => f.write_str("."),
            Key::Operator(op) => write!(f, "{}", op),
            Key::Clear => f.write_str("ce"),
        }
    }
}
