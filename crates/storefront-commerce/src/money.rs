//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Arithmetic never rounds; rounding to two
//! places happens only when a value is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Decimal places shown when a value is displayed.
pub const DISPLAY_PLACES: u32 = 2;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount.
///
/// The currency is a presentation concern supplied at display time; every
/// amount inside one storefront shares the configured currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wrap a decimal amount.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a count of hundredths.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_cents(129_999);
    /// assert_eq!(price.display_amount(), "1299.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact, unrounded amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, quantity: i64) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }

    /// Multiply by a decimal rate (e.g., a tax rate of `0.07`).
    pub fn multiply_rate(&self, rate: Decimal) -> Money {
        Money(self.0 * rate)
    }

    /// Round to display precision, half away from zero.
    pub fn rounded(&self) -> Money {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DISPLAY_PLACES);
        Money(value)
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        self.rounded().0.to_string()
    }

    /// Format with the currency symbol (e.g., "$49.99").
    pub fn display(&self, currency: Currency) -> String {
        if self.is_negative() {
            let positive = Money(-self.0);
            format!("-{}{}", currency.symbol(), positive.display_amount())
        } else {
            format!("{}{}", currency.symbol(), self.display_amount())
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.multiply(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Currency::default()))
    }
}
