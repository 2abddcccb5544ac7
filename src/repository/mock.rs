use mockall::mock;

use super::{
    OrderReader, OrderWriter, ProductReader, ProductWriter, SettingsReader, SettingsWriter,
    TaxonomyReader, TaxonomyWriter,
};
use crate::domain::{
    order::{NewOrder, Order, OrderListQuery, UpdateOrder},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    settings::Setting,
    taxonomy::CategoryTree,
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    }
}

mock! {
    pub TaxonomyReader {}

    impl TaxonomyReader for TaxonomyReader {
        fn list_categories(&self) -> RepositoryResult<Vec<CategoryTree>>;
    }
}

mock! {
    pub TaxonomyWriter {}

    impl TaxonomyWriter for TaxonomyWriter {
        fn seed_taxonomy(&self) -> RepositoryResult<usize>;
    }
}

mock! {
    pub SettingsReader {}

    impl SettingsReader for SettingsReader {
        fn get_setting(&self, key: &str) -> RepositoryResult<Option<Setting>>;
    }
}

mock! {
    pub SettingsWriter {}

    impl SettingsWriter for SettingsWriter {
        fn set_setting(&self, key: &str, value: &str) -> RepositoryResult<Setting>;
    }
}
