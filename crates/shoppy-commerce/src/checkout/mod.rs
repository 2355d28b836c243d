//! Checkout module.
//!
//! Contains the customer details form, the order summary shown before
//! placing an order, and the confirmation produced afterwards.

mod form;
mod order;

pub use form::CheckoutForm;
pub use order::{complete_order, OrderConfirmation, OrderLine, OrderSummary};
