//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., pounds, not piastres).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format the amount without a currency marker.
    ///
    /// Whole amounts drop their decimals (`50`), anything else keeps two (`19.90`).
    #[must_use]
    pub fn amount_display(&self) -> String {
        if self.amount.fract().is_zero() {
            self.amount.normalize().to_string()
        } else {
            format!("{:.2}", self.amount)
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.amount_display();
        match self.currency_code {
            CurrencyCode::EGP => write!(f, "{amount} EGP"),
            other => write!(f, "{}{amount}", other.symbol()),
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EGP,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::EGP => "E£",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EGP" => Ok(Self::EGP),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

/// Percentage saved when a product moved from `old_price` to `price`.
///
/// Computes `round((old - new) / old * 100)`, rounding halves away from zero.
/// Returns `None` when there is no saving to show: no old price, a
/// non-positive old price, or an old price not above the current one.
#[must_use]
pub fn discount_percent(price: Decimal, old_price: Option<Decimal>) -> Option<u32> {
    let old = old_price?;
    if old <= Decimal::ZERO || old <= price {
        return None;
    }
    (old - price)
        .checked_div(old)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_whole_amount() {
        let price = Price::new(Decimal::new(5000, 2), CurrencyCode::EGP);
        assert_eq!(price.to_string(), "50 EGP");
    }

    #[test]
    fn test_price_display_fractional_amount() {
        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$19.99");

        let price = Price::new(Decimal::new(199, 1), CurrencyCode::GBP);
        assert_eq!(price.to_string(), "£19.90");
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("egp".parse::<CurrencyCode>(), Ok(CurrencyCode::EGP));
        assert_eq!(" USD ".parse::<CurrencyCode>(), Ok(CurrencyCode::USD));
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_discount_percent_rounds() {
        // (150 - 100) / 150 = 33.33% -> 33
        assert_eq!(
            discount_percent(Decimal::from(100), Some(Decimal::from(150))),
            Some(33)
        );
        // (200 - 150) / 200 = 25%
        assert_eq!(
            discount_percent(Decimal::from(150), Some(Decimal::from(200))),
            Some(25)
        );
        // (8 - 7) / 8 = 12.5% -> 13
        assert_eq!(
            discount_percent(Decimal::from(7), Some(Decimal::from(8))),
            Some(13)
        );
    }

    #[test]
    fn test_discount_percent_none_without_saving() {
        assert_eq!(discount_percent(Decimal::from(100), None), None);
        assert_eq!(
            discount_percent(Decimal::from(100), Some(Decimal::from(100))),
            None
        );
        assert_eq!(
            discount_percent(Decimal::from(100), Some(Decimal::from(80))),
            None
        );
        assert_eq!(
            discount_percent(Decimal::from(-5), Some(Decimal::ZERO)),
            None
        );
    }
}
