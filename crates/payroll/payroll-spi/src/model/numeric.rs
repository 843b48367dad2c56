//! Serde helpers for decimal columns.
//!
//! Aggregates travel as numeric strings (`"12345.00"`), the way SQL
//! drivers emit `NUMERIC` columns. Reading accepts either a string or a
//! JSON number.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// A decimal as it arrives on the wire: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// The numeric value; `None` when the text does not parse
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(n) => Some(*n),
            NumericValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

fn read<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = NumericValue::deserialize(deserializer)?;
    value.to_f64().ok_or_else(|| match value {
        NumericValue::Text(s) => D::Error::custom(format!("'{}' is not a numeric string", s)),
        NumericValue::Number(n) => D::Error::custom(format!("{} is not a number", n)),
    })
}

/// Money: two decimals
pub mod money {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        read(deserializer)
    }
}

/// Averages: four decimals
pub mod average {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.4}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        read(deserializer)
    }
}
