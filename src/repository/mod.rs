use crate::db::{DbConnection, DbPool};
use crate::domain::order::{NewOrder, Order, OrderListQuery, UpdateOrder};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::settings::Setting;
use crate::domain::taxonomy::CategoryTree;

pub mod errors;
pub mod order;
pub mod product;
pub mod settings;
pub mod taxonomy;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

/// Write operations over order records.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
}

/// Read-only operations over the category taxonomy.
pub trait TaxonomyReader {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryTree>>;
}

/// Write operations over the category taxonomy.
pub trait TaxonomyWriter {
    /// Upsert the static seed taxonomy; returns the number of categories
    /// written. Safe to run on every startup.
    fn seed_taxonomy(&self) -> RepositoryResult<usize>;
}

/// Read-only operations over the key-value settings table.
pub trait SettingsReader {
    fn get_setting(&self, key: &str) -> RepositoryResult<Option<Setting>>;
}

/// Write operations over the key-value settings table.
pub trait SettingsWriter {
    fn set_setting(&self, key: &str, value: &str) -> RepositoryResult<Setting>;
}
