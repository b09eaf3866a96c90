use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five operator keys. `Equals` finalizes a pending computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "=")]
    Equals,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equals,
    ];

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '=' => Ok(Operator::Equals),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Equals => '=',
        }
    }

    /// Division by zero is not checked; the IEEE result is returned as-is.
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            Operator::Divide => first / second,
            Operator::Multiply => first * second,
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Equals => second,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        Operator::from_symbol(symbol)
    }
}

/// A single decimal digit, `'0'..='9'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_digit() {
            Ok(Digit(c))
        } else {
            Err(CalcError::InvalidDigit(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self> {
        Digit::new(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState {
    pub first_operand: f64,
    pub pending_operator: Option<Operator>,
    pub awaiting_next: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            first_operand: 0.0,
            pending_operator: None,
            awaiting_next: false,
        }
    }
}

/// What the session looks like after one event has been handled.
///
/// A non-finite `first_operand` (after dividing by zero) is written as the
/// string `"Infinity"`, `"-Infinity"` or `"NaN"` so the JSON reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    #[serde(with = "operand")]
    pub first_operand: f64,
    pub pending_operator: Option<Operator>,
    pub awaiting_next: bool,
}

mod operand {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value > 0.0 {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(text) => text
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid operand: {:?}", text))),
        }
    }
}
