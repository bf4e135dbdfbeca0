//! What-if estimation for a hypothetical new order.
//!
//! The estimate is the time to clear the current queue plus the new order's
//! own processing time. It never touches the loaded plan.

mod form;
mod fulfillment;

pub use form::{NewOrderData, NewOrderForm, ValidationError};
pub use fulfillment::{estimate_fulfillment, format_fulfillment, FulfillmentEstimate};
