use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub base_price_cents: i64,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub in_stock: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub name_en: Option<&'a str>,
    pub description: Option<&'a str>,
    pub description_en: Option<&'a str>,
    pub base_price_cents: i64,
    pub category_id: Option<&'a str>,
    pub subcategory_id: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_active: bool,
    pub in_stock: bool,
    pub updated_at: NaiveDateTime,
}

/// Full-row changeset; the repository merges the domain patch into the
/// current row before building this.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub name_en: Option<&'a str>,
    pub description: Option<&'a str>,
    pub description_en: Option<&'a str>,
    pub base_price_cents: i64,
    pub category_id: Option<&'a str>,
    pub subcategory_id: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub is_active: bool,
    pub in_stock: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            name_en: value.name_en,
            description: value.description,
            description_en: value.description_en,
            base_price_cents: value.base_price_cents,
            category_id: value.category_id,
            subcategory_id: value.subcategory_id,
            category: value.category,
            image_url: value.image_url,
            is_active: value.is_active,
            in_stock: value.in_stock,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            name_en: value.name_en.as_deref(),
            description: value.description.as_deref(),
            description_en: value.description_en.as_deref(),
            base_price_cents: value.base_price_cents,
            category_id: value.category_id.as_deref(),
            subcategory_id: value.subcategory_id.as_deref(),
            image_url: value.image_url.as_deref(),
            is_active: value.is_active,
            in_stock: value.in_stock,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            name: value.name.as_str(),
            name_en: value.name_en.as_deref(),
            description: value.description.as_deref(),
            description_en: value.description_en.as_deref(),
            base_price_cents: value.base_price_cents,
            category_id: value.category_id.as_deref(),
            subcategory_id: value.subcategory_id.as_deref(),
            image_url: value.image_url.as_deref(),
            is_active: value.is_active,
            in_stock: value.in_stock,
            updated_at: value.updated_at,
        }
    }
}
