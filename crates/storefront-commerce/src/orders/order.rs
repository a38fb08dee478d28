//! Order types.

use crate::cart::CartLineView;
use crate::catalog::Catalog;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::CommerceError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order being prepared.
    Processing,
    /// Order handed to the carrier.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Badge label.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Position on the processing < shipped < delivered track.
    ///
    /// Cancelled orders are off the track.
    pub fn rank(&self) -> Option<u8> {
        match self {
            OrderStatus::Processing => Some(0),
            OrderStatus::Shipped => Some(1),
            OrderStatus::Delivered => Some(2),
            OrderStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidStatus(s.to_string()))
    }
}

/// A product reference inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A historical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `ORD-<digits>`.
    pub id: OrderId,
    /// Date the order was placed.
    pub date: NaiveDate,
    pub status: OrderStatus,
    /// Amount charged, as recorded at order time.
    pub total: Money,
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, date: NaiveDate, status: OrderStatus, total: Money) -> Self {
        Self {
            id: id.into(),
            date,
            status,
            total,
            items: Vec::new(),
            tracking_number: None,
            estimated_delivery: None,
        }
    }

    pub fn with_item(mut self, product_id: impl Into<ProductId>, quantity: i64) -> Self {
        self.items.push(OrderItem {
            product_id: product_id.into(),
            quantity,
        });
        self
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    pub fn with_estimated_delivery(mut self, date: NaiveDate) -> Self {
        self.estimated_delivery = Some(date);
        self
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// "1 item" or "N items".
    pub fn item_count_label(&self) -> String {
        let count = self.item_count();
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{count} items")
        }
    }

    /// Items resolved against the catalog.
    ///
    /// Items whose product no longer exists are left out.
    pub fn lines(&self, catalog: &Catalog) -> Vec<CartLineView> {
        self.items
            .iter()
            .filter_map(|item| {
                let product = catalog.product(&item.product_id);
                if product.is_none() {
                    tracing::warn!(
                        order = %self.id,
                        product = %item.product_id,
                        "order item references unknown product"
                    );
                }
                product.map(|p| CartLineView::new(p, item.quantity))
            })
            .collect()
    }

    /// Image of the first item's product, used as the order card thumbnail.
    pub fn cover_image<'a>(&self, catalog: &'a Catalog) -> Option<&'a str> {
        let first = self.items.first()?;
        catalog.product(&first.product_id).map(|p| p.image.as_str())
    }
}
