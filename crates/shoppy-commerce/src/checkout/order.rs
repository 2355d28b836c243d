//! Order summary and confirmation types.

use crate::cart::{CartState, CartStore, CartTotals};
use crate::checkout::CheckoutForm;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product line of an order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product id.
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// Unit price times quantity.
    pub line_total: Money,
}

/// What the customer is about to order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Lines in cart display order.
    pub lines: Vec<OrderLine>,
    /// Total number of items.
    pub item_count: u64,
    /// Grand total.
    pub total: Money,
}

impl OrderSummary {
    /// Summarize the cart. Fails if it is empty or the total overflows.
    pub fn from_state(state: &CartState, currency: Currency) -> Result<Self, CommerceError> {
        if state.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let lines = state
            .entries()
            .map(|entry| {
                Ok(OrderLine {
                    product_id: entry.product.id,
                    title: entry.product.title.clone(),
                    quantity: entry.quantity,
                    unit_price: entry.product.unit_price(currency),
                    line_total: entry.line_total(currency).ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let totals = CartTotals::from_state(state, currency)?;

        Ok(Self {
            lines,
            item_count: totals.quantity,
            total: totals.price,
        })
    }
}

/// Record of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order number.
    pub order_id: OrderId,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Customer details.
    pub customer: CheckoutForm,
    /// What was ordered.
    pub summary: OrderSummary,
}

/// Summarize the cart, validate the form, then clear the cart.
///
/// An empty cart is reported before any form problem. On error the cart is
/// left as it was.
pub fn complete_order(
    store: &mut CartStore,
    form: &CheckoutForm,
    currency: Currency,
) -> Result<OrderConfirmation, CommerceError> {
    let summary = OrderSummary::from_state(store.state(), currency)?;
    form.validate()?;

    let confirmation = OrderConfirmation {
        order_id: OrderId::generate(),
        placed_at: Utc::now(),
        customer: form.clone(),
        summary,
    };
    store.clear_cart();
    tracing::info!(order_id = %confirmation.order_id, "order placed");
    Ok(confirmation)
}
