//! Order history module.
//!
//! Contains historical orders, the read-only registry, and the status
//! tracking views derived from an order.

mod order;
mod registry;
mod tracking;

pub use order::{Order, OrderItem, OrderStatus};
pub use registry::OrderRegistry;
pub use tracking::{
    card_footer, display_date, OrderProgress, ProgressStep, StatusNotice, DATE_DISPLAY_FORMAT,
};
