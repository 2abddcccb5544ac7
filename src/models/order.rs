use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderItem as DomainOrderItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub status: String,
    pub total_lyd_cents: i64,
    pub usd_to_lyd_snapshot: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub notes: Option<&'a str>,
    pub status: &'a str,
    pub total_lyd_cents: i64,
    pub usd_to_lyd_snapshot: f64,
    pub updated_at: NaiveDateTime,
}

/// Full-row changeset over the mutable order columns; the repository merges
/// the domain patch into the current row before building this.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateOrder<'a> {
    pub status: &'a str,
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub name: String,
    pub base_price_cents: i64,
    pub display_price_lyd_cents: i64,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub name: &'a str,
    pub base_price_cents: i64,
    pub display_price_lyd_cents: i64,
    pub quantity: i32,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            notes: value.notes,
            // Unknown stored values degrade to the initial status rather
            // than failing the whole read.
            status: value.status.parse().unwrap_or_default(),
            total_lyd_cents: value.total_lyd_cents,
            usd_to_lyd_snapshot: value.usd_to_lyd_snapshot,
            items: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            name: value.name,
            base_price_cents: value.base_price_cents,
            display_price_lyd_cents: value.display_price_lyd_cents,
            quantity: value.quantity,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_name: value.customer_name.as_str(),
            customer_phone: value.customer_phone.as_str(),
            notes: value.notes.as_deref(),
            status: value.status.as_str(),
            total_lyd_cents: value.total_lyd_cents,
            usd_to_lyd_snapshot: value.usd_to_lyd_snapshot,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    /// Bind a domain line item to its parent order row.
    pub fn from_domain(order_id: i32, value: &'a DomainNewOrderItem) -> Self {
        Self {
            order_id,
            product_id: value.product_id,
            name: value.name.as_str(),
            base_price_cents: value.base_price_cents,
            display_price_lyd_cents: value.display_price_lyd_cents,
            quantity: value.quantity,
        }
    }
}
