use serde::Deserialize;

use crate::domain::order::{NewOrder, NewOrderItem, Order, OrderListQuery, UpdateOrder};
use crate::domain::pricing;
use crate::forms::orders::{CheckoutForm, UpdateOrderStatusForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{OrderReader, OrderWriter, ProductReader, SettingsReader};
use crate::services::{ServiceError, ServiceResult, settings};

/// Query parameters accepted by the admin orders listing.
#[derive(Debug, Default, Deserialize)]
pub struct AdminOrdersQuery {
    /// Optional status filter (`pending`, `confirmed`, ...).
    pub status: Option<String>,
    /// Optional search string matched against customer fields.
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Creates an order from a checkout submission.
///
/// This is the one place a computed price is frozen: the current exchange
/// rate is copied onto the order (`usd_to_lyd_snapshot`) and every line's
/// LYD display price is computed with it and stored. Later rate changes
/// affect the catalog only, never this order.
pub fn create_order<R>(repo: &R, form: CheckoutForm) -> ServiceResult<Order>
where
    R: ProductReader + SettingsReader + OrderWriter + ?Sized,
{
    let checkout = form
        .into_checkout()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let rate = settings::current_rate(repo);
    let mut new_order = NewOrder::new(checkout.customer_name, checkout.customer_phone, rate);

    if let Some(notes) = checkout.notes {
        new_order = new_order.with_notes(notes);
    }

    for line in &checkout.items {
        let product = repo
            .get_product_by_id(line.product_id)
            .map_err(ServiceError::from)?
            .filter(|product| product.is_active && product.in_stock)
            .ok_or_else(|| {
                ServiceError::Form(format!("product {} is not available", line.product_id))
            })?;

        let display_price_lyd = pricing::display_price_lyd(product.base_price_usd(), rate);

        new_order = new_order.with_item(NewOrderItem {
            product_id: Some(product.id),
            name: product.name.clone(),
            base_price_cents: product.base_price_cents,
            display_price_lyd_cents: pricing::amount_to_cents(display_price_lyd),
            quantity: line.quantity,
        });
    }

    repo.create_order(&new_order).map_err(ServiceError::from)
}

/// Lists orders for the admin back office.
pub fn list_orders<R>(repo: &R, query: AdminOrdersQuery) -> ServiceResult<Paginated<Order>>
where
    R: OrderReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(status) = query.status.as_deref() {
        let status = status
            .parse()
            .map_err(|err: String| ServiceError::Form(err))?;
        list_query = list_query.status(status);
    }

    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term.clone());
    }

    let (total, items) = repo.list_orders(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}

/// Loads a single order with its frozen lines.
pub fn get_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Moves an order to a new lifecycle status.
pub fn update_order_status<R>(
    repo: &R,
    order_id: i32,
    form: UpdateOrderStatusForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let status = form
        .parsed_status()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let updates = UpdateOrder::new().status(status);
    repo.update_order(order_id, &updates)
        .map_err(ServiceError::from)
}
