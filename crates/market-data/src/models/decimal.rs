//! Tolerant decoding of upstream JSON numbers into [`Decimal`].
//!
//! Numbers are read in their original textual form. Values `Decimal` cannot
//! hold exactly are approximated instead of failing the whole payload: too
//! many fractional digits round, magnitudes above `Decimal::MAX` saturate.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Parse a JSON number literal, approximating when it is out of range.
fn parse_lenient(text: &str) -> Option<Decimal> {
    let exact = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    };
    if let Ok(value) = exact {
        return Some(value);
    }

    let float = f64::from_str(text).ok().filter(|f| f.is_finite())?;
    let approximated = Decimal::from_f64(float).unwrap_or(if float.abs() < 1.0 {
        Decimal::ZERO
    } else if float.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    });
    warn!("Number {} out of decimal range, stored as {}", text, approximated);
    Some(approximated)
}

fn decode<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => {
            let text = number.to_string();
            parse_lenient(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid number: {}", text)))
        }
        None => Ok(None),
    }
}

/// `null` or absent decodes as zero.
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(decode(deserializer)?.unwrap_or_default())
}

pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    decode(deserializer)
}
