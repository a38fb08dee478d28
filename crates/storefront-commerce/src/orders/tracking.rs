//! Status views derived from an order: the tracking notice, the progress
//! track and the order card footer.
//!
//! The estimated delivery date doubles as the delivered date; orders carry
//! no separate delivery timestamp.

use crate::orders::{Order, OrderStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Date format used on order pages, e.g. `3/28/2025`.
pub const DATE_DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

pub fn display_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Notice block shown at the top of the order detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusNotice {
    Processing,
    Shipped {
        estimated_delivery: Option<NaiveDate>,
        /// Omitted from the notice when absent.
        tracking_number: Option<String>,
    },
    Delivered {
        delivered_on: Option<NaiveDate>,
    },
}

impl StatusNotice {
    /// Notice for an order. Cancelled orders have none.
    pub fn for_order(order: &Order) -> Option<Self> {
        match order.status {
            OrderStatus::Processing => Some(StatusNotice::Processing),
            OrderStatus::Shipped => Some(StatusNotice::Shipped {
                estimated_delivery: order.estimated_delivery,
                tracking_number: order.tracking_number.clone(),
            }),
            OrderStatus::Delivered => Some(StatusNotice::Delivered {
                delivered_on: order.estimated_delivery,
            }),
            OrderStatus::Cancelled => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            StatusNotice::Processing => "Order Processing",
            StatusNotice::Shipped { .. } => "Order Shipped",
            StatusNotice::Delivered { .. } => "Order Delivered",
        }
    }

    pub fn message(&self) -> String {
        match self {
            StatusNotice::Processing => {
                "Your order is being prepared. We'll update you when it ships.".to_string()
            }
            StatusNotice::Shipped {
                estimated_delivery: Some(date),
                ..
            } => format!(
                "Your order is on the way! Estimated delivery: {}",
                display_date(*date)
            ),
            StatusNotice::Shipped { .. } => "Your order is on the way!".to_string(),
            StatusNotice::Delivered {
                delivered_on: Some(date),
            } => format!("Your order was delivered on {}.", display_date(*date)),
            StatusNotice::Delivered { .. } => "Your order was delivered.".to_string(),
        }
    }

    pub fn tracking_number(&self) -> Option<&str> {
        match self {
            StatusNotice::Shipped {
                tracking_number, ..
            } => tracking_number.as_deref(),
            _ => None,
        }
    }
}

/// One point on the progress track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub name: &'static str,
    pub complete: bool,
}

/// Processing, Shipped, Delivered track with the filled bar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderProgress {
    pub steps: [ProgressStep; 3],
    /// Bar width in percent: 33, 66 or 100.
    pub percent: u8,
}

impl OrderProgress {
    const TRACK: [(OrderStatus, &'static str); 3] = [
        (OrderStatus::Processing, "Processing"),
        (OrderStatus::Shipped, "Shipped"),
        (OrderStatus::Delivered, "Delivered"),
    ];

    /// Progress for an order. Cancelled orders show no track.
    pub fn for_order(order: &Order) -> Option<Self> {
        let reached = order.status.rank()?;
        let steps = Self::TRACK.map(|(status, name)| ProgressStep {
            name,
            complete: status.rank().is_some_and(|rank| rank <= reached),
        });
        let percent = match order.status {
            OrderStatus::Processing => 33,
            OrderStatus::Shipped => 66,
            _ => 100,
        };
        Some(Self { steps, percent })
    }

    pub fn completed(&self) -> usize {
        self.steps.iter().filter(|s| s.complete).count()
    }
}

/// Footer line of an order card in the order list.
pub fn card_footer(order: &Order) -> Option<String> {
    match order.status {
        OrderStatus::Processing => Some("Preparing your order".to_string()),
        OrderStatus::Shipped => order
            .estimated_delivery
            .map(|date| format!("Est. delivery: {}", display_date(date))),
        OrderStatus::Delivered => Some(match order.estimated_delivery {
            Some(date) => format!("Delivered on {}", display_date(date)),
            None => "Delivered".to_string(),
        }),
        OrderStatus::Cancelled => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(status: OrderStatus) -> Order {
        Order::new("ORD-1", date(2025, 4, 1), status, Money::from_cents(34_999)).with_item("3", 1)
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(date(2025, 3, 28)), "3/28/2025");
        assert_eq!(display_date(date(2025, 12, 5)), "12/5/2025");
    }

    #[test]
    fn test_processing_notice() {
        let notice = StatusNotice::for_order(&order(OrderStatus::Processing)).unwrap();
        assert_eq!(notice.heading(), "Order Processing");
        assert_eq!(
            notice.message(),
            "Your order is being prepared. We'll update you when it ships."
        );
        assert_eq!(notice.tracking_number(), None);
    }

    #[test]
    fn test_shipped_notice_with_tracking() {
        let shipped = order(OrderStatus::Shipped)
            .with_tracking_number("TRK987654321")
            .with_estimated_delivery(date(2025, 4, 8));
        let notice = StatusNotice::for_order(&shipped).unwrap();
        assert_eq!(notice.heading(), "Order Shipped");
        assert_eq!(
            notice.message(),
            "Your order is on the way! Estimated delivery: 4/8/2025"
        );
        assert_eq!(notice.tracking_number(), Some("TRK987654321"));
    }

    #[test]
    fn test_shipped_without_tracking_omits_block() {
        let shipped = order(OrderStatus::Shipped).with_estimated_delivery(date(2025, 4, 8));
        let notice = StatusNotice::for_order(&shipped).unwrap();
        assert_eq!(notice.tracking_number(), None);
        assert!(notice.message().contains("Estimated delivery: 4/8/2025"));
    }

    #[test]
    fn test_delivered_notice_uses_estimate() {
        let delivered = order(OrderStatus::Delivered).with_estimated_delivery(date(2025, 3, 28));
        let notice = StatusNotice::for_order(&delivered).unwrap();
        assert_eq!(notice.message(), "Your order was delivered on 3/28/2025.");
    }

    #[test]
    fn test_cancelled_has_no_notice_or_progress() {
        let cancelled = order(OrderStatus::Cancelled);
        assert_eq!(StatusNotice::for_order(&cancelled), None);
        assert_eq!(OrderProgress::for_order(&cancelled), None);
        assert_eq!(card_footer(&cancelled), None);
    }

    #[test]
    fn test_progress_steps() {
        let processing = OrderProgress::for_order(&order(OrderStatus::Processing)).unwrap();
        assert_eq!(processing.percent, 33);
        assert_eq!(processing.completed(), 1);

        let shipped = OrderProgress::for_order(&order(OrderStatus::Shipped)).unwrap();
        assert_eq!(shipped.percent, 66);
        assert!(shipped.steps[1].complete);
        assert!(!shipped.steps[2].complete);

        let delivered = OrderProgress::for_order(&order(OrderStatus::Delivered)).unwrap();
        assert_eq!(delivered.percent, 100);
        assert_eq!(delivered.completed(), 3);
    }

    #[test]
    fn test_card_footer() {
        assert_eq!(
            card_footer(&order(OrderStatus::Processing)).as_deref(),
            Some("Preparing your order")
        );
        assert_eq!(card_footer(&order(OrderStatus::Shipped)), None);
        let shipped = order(OrderStatus::Shipped).with_estimated_delivery(date(2025, 4, 8));
        assert_eq!(card_footer(&shipped).as_deref(), Some("Est. delivery: 4/8/2025"));
        let delivered = order(OrderStatus::Delivered).with_estimated_delivery(date(2025, 3, 28));
        assert_eq!(card_footer(&delivered).as_deref(), Some("Delivered on 3/28/2025"));
    }
}
