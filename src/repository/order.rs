use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem as DomainOrderItem,
        OrderListQuery, UpdateOrder as DomainUpdateOrder,
    },
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem, UpdateOrder as DbUpdateOrder,
    },
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        if let Some(db_order) = order {
            let mut domain: DomainOrder = db_order.into();
            let mut items = load_items_for_orders(&mut conn, &[domain.id])?;
            domain.items = items.remove(&domain.id).unwrap_or_default();
            Ok(Some(domain))
        } else {
            Ok(None)
        }
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut count_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            count_query = count_query.filter(orders::status.eq(status.as_str()));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            count_query = count_query.filter(
                orders::customer_name
                    .like(pattern.clone())
                    .or(orders::customer_phone.like(pattern)),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items_query = items_query.filter(orders::status.eq(status.as_str()));
        }

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items_query = items_query.filter(
                orders::customer_name
                    .like(pattern.clone())
                    .or(orders::customer_phone.like(pattern)),
            );
        }

        items_query = items_query.order(orders::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_orders = items_query.load::<DbOrder>(&mut conn)?;

        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();
        let mut item_map = load_items_for_orders(&mut conn, &order_ids)?;

        let mut domain_orders = Vec::with_capacity(db_orders.len());
        for db_order in db_orders {
            let mut domain: DomainOrder = db_order.into();
            domain.items = item_map.remove(&domain.id).unwrap_or_default();
            domain_orders.push(domain);
        }

        Ok((total, domain_orders))
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let created = conn.transaction::<DbOrder, diesel::result::Error, _>(|conn| {
            let db_new = DbNewOrder::from(new_order);
            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            let db_items: Vec<DbNewOrderItem> = new_order
                .items
                .iter()
                .map(|item| DbNewOrderItem::from_domain(created.id, item))
                .collect();

            diesel::insert_into(order_items::table)
                .values(&db_items)
                .execute(conn)?;

            Ok(created)
        })?;

        let mut domain: DomainOrder = created.into();
        let mut items = load_items_for_orders(&mut conn, &[domain.id])?;
        domain.items = items.remove(&domain.id).unwrap_or_default();

        Ok(domain)
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let current = orders::table
            .filter(orders::id.eq(order_id))
            .first::<DbOrder>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        let mut merged: DomainOrder = current.into();
        if let Some(status) = updates.status {
            merged.status = status;
        }
        if let Some(notes) = &updates.notes {
            merged.notes = notes.clone();
        }
        merged.updated_at = updates.updated_at;

        let db_updates = DbUpdateOrder {
            status: merged.status.as_str(),
            notes: merged.notes.as_deref(),
            updated_at: merged.updated_at,
        };

        let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
            .set(&db_updates)
            .get_result::<DbOrder>(&mut conn)?;

        let mut domain: DomainOrder = updated.into();
        let mut items = load_items_for_orders(&mut conn, &[domain.id])?;
        domain.items = items.remove(&domain.id).unwrap_or_default();

        Ok(domain)
    }
}

fn load_items_for_orders(
    conn: &mut SqliteConnection,
    order_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainOrderItem>>> {
    use crate::schema::order_items;

    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = order_items::table
        .filter(order_items::order_id.eq_any(order_ids))
        .order(order_items::created_at.asc())
        .load::<DbOrderItem>(conn)?;

    let mut map: HashMap<i32, Vec<DomainOrderItem>> = HashMap::new();
    for row in rows {
        map.entry(row.order_id).or_default().push(row.into());
    }

    Ok(map)
}
