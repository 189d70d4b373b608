//! Catalog sort orders.

use serde::{Deserialize, Serialize};

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Ascending price.
    PriceLow,
    /// Descending price.
    PriceHigh,
    /// Case-insensitive lexicographic name.
    Name,
    /// Descending rating; unrated products count as zero.
    Rating,
    /// Descending id; products without an id go last.
    #[default]
    Newest,
}

impl SortOrder {
    /// Parse a sort key, falling back to [`SortOrder::Newest`] for unknown keys.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceLow => write!(f, "price-low"),
            Self::PriceHigh => write!(f, "price-high"),
            Self::Name => write!(f, "name"),
            Self::Rating => write!(f, "rating"),
            Self::Newest => write!(f, "newest"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "name" => Ok(Self::Name),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_round_trips_through_display() {
        for order in [
            SortOrder::PriceLow,
            SortOrder::PriceHigh,
            SortOrder::Name,
            SortOrder::Rating,
            SortOrder::Newest,
        ] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(SortOrder::parse_or_default("price-high"), SortOrder::PriceHigh);
        assert_eq!(SortOrder::parse_or_default("bogus"), SortOrder::Newest);
    }
}
