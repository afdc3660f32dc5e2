//! Pairwise currency conversion through the base currency.

use crate::rates::RateTable;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
    #[error("No conversion available for currency: {0}")]
    Unconvertible(String),
}

/// Converts `amount` from one currency to another via the base currency.
///
/// No rounding is applied; display precision is a presentation concern.
pub fn convert(
    amount: f64,
    from_code: &str,
    to_code: &str,
    table: &RateTable,
) -> Result<f64, ConvertError> {
    let from = table
        .get(from_code)
        .ok_or_else(|| ConvertError::UnknownCurrency(from_code.to_string()))?;
    let to = table
        .get(to_code)
        .ok_or_else(|| ConvertError::UnknownCurrency(to_code.to_string()))?;

    // A zero value comes from a zero remote rate; dividing by it would give
    // infinity, so surface it as an explicit failure instead.
    if to.value_in_base == 0.0 {
        return Err(ConvertError::Unconvertible(to_code.to_string()));
    }

    let amount_in_base = amount * from.value_in_base;
    Ok(amount_in_base / to.value_in_base)
}
