//! Currency-tagged monetary value.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, ValidationResult};

/// Rounding applied when an amount is displayed. Amounts are never rounded at
/// construction.
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Currencies supported by the payment system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    BRL,
}

impl Currency {
    /// Returns the number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD | Currency::BRL => 2,
        }
    }

    /// Returns the display tag printed before amounts.
    pub fn tag(&self) -> &'static str {
        match self {
            Currency::USD => "US$",
            Currency::BRL => "R$",
        }
    }

    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::BRL => "BRL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "BRL" => Ok(Currency::BRL),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}

/// A strictly positive amount in a given currency.
///
/// The only way to obtain one is through [`Money::create`] (or the per-currency
/// shortcuts), so `amount > 0` holds for every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Validates `amount` and tags it with `currency`.
    pub fn create(currency: Currency, amount: Decimal) -> ValidationResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount.into());
        }
        Ok(Self { amount, currency })
    }

    /// Shortcut for [`Money::create`] in BRL.
    pub fn brl(amount: Decimal) -> ValidationResult<Self> {
        Self::create(Currency::BRL, amount)
    }

    /// Shortcut for [`Money::create`] in USD.
    pub fn usd(amount: Decimal) -> ValidationResult<Self> {
        Self::create(Currency::USD, amount)
    }

    /// Returns the amount exactly as supplied.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the display tag of the currency.
    pub fn tag(&self) -> &'static str {
        self.currency.tag()
    }

    /// Returns the amount rounded to the currency's decimal places.
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(self.currency.decimal_places(), DISPLAY_ROUNDING)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through precision: `rescale` keeps a smaller scale near the mantissa limit.
        let places = self.currency.decimal_places() as usize;
        write!(f, "{} {:.*}", self.tag(), places, self.rounded())
    }
}
