use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Possible lifecycle states for a customer order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order was submitted at checkout and awaits confirmation.
    #[default]
    Pending,
    /// Order has been confirmed with the customer.
    Confirmed,
    /// Order has been delivered.
    Delivered,
    /// Order was cancelled and should not be processed further.
    Cancelled,
}

impl OrderStatus {
    /// Stable string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status `{other}`")),
        }
    }
}

/// Domain representation of a customer order.
///
/// The order stores a point-in-time copy of the exchange rate
/// (`usd_to_lyd_snapshot`) and of every item's prices. Later changes to the
/// stored rate or to product rows never alter an existing order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Customer name captured at checkout.
    pub customer_name: String,
    /// Customer phone number captured at checkout.
    pub customer_phone: String,
    /// Optional free-text notes from the customer.
    pub notes: Option<String>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Order total in LYD cents, frozen at creation.
    pub total_lyd_cents: i64,
    /// USD to LYD rate frozen at creation.
    pub usd_to_lyd_snapshot: f64,
    /// Line items copied at creation time.
    pub items: Vec<OrderItem>,
    /// Timestamp for when the order record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the order record.
    pub updated_at: NaiveDateTime,
}

/// A single frozen order line.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Unique identifier of the line.
    pub id: i32,
    /// Owning order identifier.
    pub order_id: i32,
    /// Product the line was created from, if it still exists.
    pub product_id: Option<i32>,
    /// Product name copied at creation time.
    pub name: String,
    /// USD base price in cents copied at creation time.
    pub base_price_cents: i64,
    /// LYD display price in cents computed and frozen at creation time.
    pub display_price_lyd_cents: i64,
    /// Quantity ordered.
    pub quantity: i32,
    /// Timestamp for when the line was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new order with its lines.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Customer name captured at checkout.
    pub customer_name: String,
    /// Customer phone number captured at checkout.
    pub customer_phone: String,
    /// Optional free-text notes from the customer.
    pub notes: Option<String>,
    /// Initial lifecycle status.
    pub status: OrderStatus,
    /// Order total in LYD cents.
    pub total_lyd_cents: i64,
    /// USD to LYD rate to freeze on the order.
    pub usd_to_lyd_snapshot: f64,
    /// Lines to insert together with the order.
    pub items: Vec<NewOrderItem>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new order payload with the supplied customer and snapshot.
    pub fn new(
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        usd_to_lyd_snapshot: f64,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            notes: None,
            status: OrderStatus::default(),
            total_lyd_cents: 0,
            usd_to_lyd_snapshot,
            items: Vec::new(),
            updated_at: now,
        }
    }

    /// Attach customer notes to the payload.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach a line item and add it to the running total.
    pub fn with_item(mut self, item: NewOrderItem) -> Self {
        self.total_lyd_cents += item.display_price_lyd_cents * i64::from(item.quantity);
        self.items.push(item);
        self
    }
}

/// Payload for one order line.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// Product the line is created from.
    pub product_id: Option<i32>,
    /// Product name to copy.
    pub name: String,
    /// USD base price in cents to copy.
    pub base_price_cents: i64,
    /// LYD display price in cents to freeze.
    pub display_price_lyd_cents: i64,
    /// Quantity ordered.
    pub quantity: i32,
}

/// Patch data applied when updating an existing order.
#[derive(Debug, Clone)]
pub struct UpdateOrder {
    /// Optional status update.
    pub status: Option<OrderStatus>,
    /// Optional notes update, inner `None` clears the value.
    pub notes: Option<Option<String>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateOrder {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            status: None,
            notes: None,
            updated_at: now,
        }
    }

    /// Update the order status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Update the notes, using `None` to clear an existing value.
    pub fn notes(mut self, notes: Option<impl Into<String>>) -> Self {
        self.notes = Some(notes.map(|value| value.into()));
        self
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional search term matched against customer name and phone.
    pub search: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter the results by a search term applied to the customer fields.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn with_item_accumulates_the_total() {
        let order = NewOrder::new("Ali", "0910000000", 5.1)
            .with_item(NewOrderItem {
                product_id: Some(1),
                name: "Headset".into(),
                base_price_cents: 2000,
                display_price_lyd_cents: 10200,
                quantity: 2,
            })
            .with_item(NewOrderItem {
                product_id: None,
                name: "Mouse pad".into(),
                base_price_cents: 500,
                display_price_lyd_cents: 2550,
                quantity: 1,
            });

        assert_eq!(order.total_lyd_cents, 2 * 10200 + 2550);
        assert_eq!(order.items.len(), 2);
    }
}
