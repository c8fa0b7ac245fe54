//! Numeric prices stored in whole cents.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::PriceError;

const CURRENCY_SIGN: char = '$';

/// A price in US cents.
///
/// Displays as `$12` for whole dollar amounts and `$3.60` otherwise.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "PriceRepr", into = "String")]
pub struct Price(u64);

// yaml authors may write `$3.60`, `"12"` or a bare `12`. A bare `3.60` is
// read as a float, which is rejected rather than rounded.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Whole(u64),
    Decimal(f64),
    Text(String),
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Multiplies the price by a quantity, saturating at the largest
    /// representable amount.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = self.cents() / 100;
        let cents = self.cents() % 100;

        if cents == 0 {
            write!(f, "{CURRENCY_SIGN}{dollars}")
        } else {
            write!(f, "{CURRENCY_SIGN}{dollars}.{cents:02}")
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = trimmed
            .strip_prefix(CURRENCY_SIGN)
            .unwrap_or(trimmed)
            .trim();

        if amount.is_empty() {
            return Err(PriceError::Empty);
        }

        let (whole, fraction) = match amount.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (amount, ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

        if whole.is_empty()
            || !all_digits(whole)
            || !all_digits(fraction)
            || (amount.contains('.') && fraction.is_empty())
        {
            return Err(PriceError::Invalid(s.to_string()));
        }

        if fraction.len() > 2 {
            return Err(PriceError::TooPrecise(s.to_string()));
        }

        let overflow = || PriceError::Overflow(s.to_string());

        let dollars: u64 = whole.parse().map_err(|_| overflow())?;

        // "3.6" means 60 cents, not 6
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse().map_err(|_| overflow())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(overflow)
    }
}

impl TryFrom<PriceRepr> for Price {
    type Error = PriceError;

    fn try_from(value: PriceRepr) -> Result<Self, Self::Error> {
        match value {
            PriceRepr::Whole(dollars) => dollars
                .checked_mul(100)
                .map(Price)
                .ok_or_else(|| PriceError::Overflow(dollars.to_string())),
            PriceRepr::Decimal(amount) => Err(PriceError::Unquoted(amount.to_string())),
            PriceRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "./price_tests.rs"]
mod tests;
