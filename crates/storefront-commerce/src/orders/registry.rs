//! Read-only order registry and the sample order history.

use crate::ids::OrderId;
use crate::money::Money;
use crate::orders::{Order, OrderStatus};
use chrono::NaiveDate;
use std::sync::OnceLock;

/// Historical orders, in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRegistry {
    orders: Vec<Order>,
}

impl OrderRegistry {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The process-wide sample order history.
    pub fn sample() -> &'static OrderRegistry {
        static SAMPLE: OnceLock<OrderRegistry> = OnceLock::new();
        SAMPLE.get_or_init(|| OrderRegistry::new(sample_orders()))
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up an order by id.
    pub fn find_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Id for the next order: one past the highest `ORD-<digits>` number.
    ///
    /// Ids that do not follow the format are ignored.
    pub fn next_order_id(&self) -> OrderId {
        let highest = self
            .orders
            .iter()
            .filter_map(|o| o.id.number())
            .max()
            .unwrap_or(FIRST_ORDER_NUMBER - 1);
        OrderId::from_number(highest + 1)
    }
}

const FIRST_ORDER_NUMBER: u64 = 10_001;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn sample_orders() -> Vec<Order> {
    vec![
        Order::new("ORD-12345", date(2025, 3, 25), OrderStatus::Delivered, Money::from_cents(154_998))
            .with_item("1", 1)
            .with_item("2", 1)
            .with_tracking_number("TRK123456789")
            .with_estimated_delivery(date(2025, 3, 28)),
        Order::new("ORD-12346", date(2025, 4, 1), OrderStatus::Shipped, Money::from_cents(34_999))
            .with_item("3", 1)
            .with_tracking_number("TRK987654321")
            .with_estimated_delivery(date(2025, 4, 8)),
        Order::new("ORD-12347", date(2025, 4, 3), OrderStatus::Processing, Money::from_cents(21_998))
            .with_item("4", 1)
            .with_item("8", 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_history() {
        let registry = OrderRegistry::sample();
        let ids: Vec<&str> = registry.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-12345", "ORD-12346", "ORD-12347"]);

        let shipped = registry.find_by_id(&OrderId::new("ORD-12346")).unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.tracking_number.as_deref(), Some("TRK987654321"));
        assert_eq!(shipped.estimated_delivery, NaiveDate::from_ymd_opt(2025, 4, 8));
        assert_eq!(shipped.total.display_amount(), "349.99");
    }

    #[test]
    fn test_unknown_order_is_not_found() {
        assert!(OrderRegistry::sample()
            .find_by_id(&OrderId::new("ORD-99999"))
            .is_none());
    }

    #[test]
    fn test_next_order_id() {
        assert_eq!(OrderRegistry::sample().next_order_id().as_str(), "ORD-12348");
        assert_eq!(OrderRegistry::default().next_order_id().as_str(), "ORD-10001");

        let odd = OrderRegistry::new(vec![Order::new(
            "legacy",
            date(2024, 1, 1),
            OrderStatus::Cancelled,
            Money::zero(),
        )]);
        assert_eq!(odd.next_order_id().as_str(), "ORD-10001");
    }
}
