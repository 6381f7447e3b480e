use crate::error::StyleValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric plotly attribute that remembers how it was written.
///
/// Plotly accepts `16` and `16.0` interchangeably, so both spellings load, and each
/// serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(serde_json::Number);

impl Number {
    pub fn from_f64(value: f64) -> Result<Self, StyleValueError> {
        serde_json::Number::from_f64(value)
            .map(Self)
            .ok_or(StyleValueError::NonFiniteNumber(value))
    }

    pub fn as_f64(&self) -> f64 {
        // Without arbitrary precision every JSON number has an f64 form
        self.0.as_f64().unwrap_or(f64::NAN)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Whether the literal was written without a fraction or exponent
    pub fn is_integer(&self) -> bool {
        !self.0.is_f64()
    }

    pub fn is_negative(&self) -> bool {
        self.as_f64() < 0.0
    }
}

impl Default for Number {
    fn default() -> Self {
        Self(serde_json::Number::from(0u32))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(value.into())
    }
}

impl TryFrom<f64> for Number {
    type Error = StyleValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
