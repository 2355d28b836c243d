//! Totals derived from a cart snapshot.

use crate::cart::CartState;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Item count and price of a cart, computed on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of entry quantities.
    pub quantity: u64,
    /// Sum of quantity times unit price.
    pub price: Money,
}

impl CartTotals {
    /// Compute totals for a state.
    ///
    /// Returns an error only if the price sum overflows.
    pub fn from_state(state: &CartState, currency: Currency) -> Result<Self, CommerceError> {
        Ok(Self {
            quantity: total_quantity(state),
            price: total_price(state, currency)?,
        })
    }
}

/// Sum of quantities across entries.
pub fn total_quantity(state: &CartState) -> u64 {
    state.entries().map(|e| u64::from(e.quantity)).sum()
}

/// Sum of quantity times unit price across entries.
pub fn total_price(state: &CartState, currency: Currency) -> Result<Money, CommerceError> {
    let lines = state
        .entries()
        .map(|e| e.line_total(currency).ok_or(CommerceError::Overflow))
        .collect::<Result<Vec<_>, _>>()?;
    Money::try_sum(lines.iter(), currency).ok_or(CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::ProductSummary;
    use crate::ids::ProductId;

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::from_state(&CartState::default(), Currency::INR).unwrap();
        assert_eq!(totals.quantity, 0);
        assert!(totals.price.is_zero());
    }

    #[test]
    fn test_add_add_increment_scenario() {
        let mut store = CartStore::new();
        store.add_to_cart(ProductSummary::new(ProductId::new(1), "A", 10.0));
        store.add_to_cart(ProductSummary::new(ProductId::new(2), "B", 5.0));
        store.increment_quantity(ProductId::new(1));

        let totals = CartTotals::from_state(store.state(), Currency::INR).unwrap();
        assert_eq!(totals.quantity, 3);
        assert_eq!(totals.price, Money::new(2500, Currency::INR));
        assert_eq!(totals.price.display(), "\u{20b9}25.00");
    }

    #[test]
    fn test_fractional_prices_sum_exactly() {
        let mut store = CartStore::new();
        store.add_to_cart(ProductSummary::new(ProductId::new(1), "A", 0.1));
        store.add_to_cart(ProductSummary::new(ProductId::new(2), "B", 0.2));
        let price = total_price(store.state(), Currency::INR).unwrap();
        assert_eq!(price.amount_minor, 30);
    }
}
