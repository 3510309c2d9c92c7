//! Loosely-typed transaction amounts and their coercion to real numbers.
//!
//! Amounts arrive as JSON numbers, strings, or already-typed decimals. Coercion
//! is total: every input either yields a finite real number or is rejected as
//! not being a number. Values `rust_decimal` can hold are kept exact; anything
//! it would overflow or round to zero is kept as an `f64` so the sign stays
//! right.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// An amount as supplied by the caller, before coercion.
///
/// JSON values of any other shape (booleans, arrays, objects) land in `Other`
/// and never coerce.
///
/// # Examples
///
/// ```
/// use transaction_validator::AmountInput;
///
/// assert!(AmountInput::from("12.50").coerce().is_some());
/// assert!(AmountInput::from("abc").coerce().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
    #[serde(skip_deserializing)]
    Decimal(Decimal),
}

/// A coerced amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Fits in a `Decimal` without losing its sign
    Exact(Decimal),

    /// Finite, but outside what a `Decimal` represents faithfully
    Approximate(f64),
}

impl Amount {
    /// Returns `true` if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        match self {
            Amount::Exact(d) => *d > Decimal::ZERO,
            Amount::Approximate(f) => *f > 0.0,
        }
    }
}

impl AmountInput {
    /// Coerces the amount to a real number.
    ///
    /// Returns `None` when the value is not representable as a real number:
    /// unparseable text, NaN, infinities, or non-numeric JSON values.
    pub fn coerce(&self) -> Option<Amount> {
        match self {
            AmountInput::Integer(i) => Some(Amount::Exact(Decimal::from(*i))),
            AmountInput::Float(f) => coerce_float(*f),
            AmountInput::Decimal(d) => Some(Amount::Exact(*d)),
            AmountInput::Text(s) => parse_amount_text(s),
            AmountInput::Other(_) => None,
        }
    }
}

fn coerce_float(f: f64) -> Option<Amount> {
    if !f.is_finite() {
        return None;
    }
    match Decimal::from_f64(f) {
        Some(d) if !d.is_zero() || f == 0.0 => Some(Amount::Exact(d)),
        _ => Some(Amount::Approximate(f)),
    }
}

/// Parses a textual amount, accepting plain and scientific notation.
fn parse_amount_text(s: &str) -> Option<Amount> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let exact = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok();
    let real = trimmed.parse::<f64>().ok().filter(|f| f.is_finite());

    match (exact, real) {
        // Rounded to zero by the decimal scale
        (Some(d), Some(f)) if d.is_zero() && f != 0.0 => Some(Amount::Approximate(f)),
        (Some(d), _) => Some(Amount::Exact(d)),
        (None, Some(f)) => Some(Amount::Approximate(f)),
        (None, None) => None,
    }
}

impl From<i32> for AmountInput {
    fn from(value: i32) -> Self {
        AmountInput::Integer(i64::from(value))
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Integer(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Float(value)
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        AmountInput::Decimal(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}
