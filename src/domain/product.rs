use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::classifier::ProductText;
use crate::pagination::Pagination;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Arabic product name.
    pub name: String,
    /// Optional English product name.
    pub name_en: Option<String>,
    /// Optional Arabic description.
    pub description: Option<String>,
    /// Optional English description.
    pub description_en: Option<String>,
    /// Authoritative price in USD cents; display prices derive from it.
    pub base_price_cents: i64,
    /// Explicit category override set by an administrator.
    pub category_id: Option<String>,
    /// Explicit subcategory override set by an administrator.
    pub subcategory_id: Option<String>,
    /// Legacy free-text category label; kept for old rows, never authoritative.
    pub category: Option<String>,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Whether the product is visible on the storefront.
    pub is_active: bool,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Base price in decimal USD.
    pub fn base_price_usd(&self) -> f64 {
        crate::domain::pricing::cents_to_amount(self.base_price_cents)
    }

    /// Textual fields fed into the classifier.
    pub fn text(&self) -> ProductText<'_> {
        ProductText {
            name: Some(self.name.as_str()),
            name_en: self.name_en.as_deref(),
            description: self.description.as_deref(),
            description_en: self.description_en.as_deref(),
        }
    }

    /// The administrator-set category pair, when both halves are present and
    /// non-empty. The classifier is only consulted when this returns `None`.
    pub fn explicit_category(&self) -> Option<(&str, &str)> {
        let category_id = self
            .category_id
            .as_deref()
            .filter(|value| !value.trim().is_empty())?;
        let subcategory_id = self
            .subcategory_id
            .as_deref()
            .filter(|value| !value.trim().is_empty())?;
        Some((category_id, subcategory_id))
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Arabic product name.
    pub name: String,
    /// Optional English product name.
    pub name_en: Option<String>,
    /// Optional Arabic description.
    pub description: Option<String>,
    /// Optional English description.
    pub description_en: Option<String>,
    /// Price in USD cents.
    pub base_price_cents: i64,
    /// Optional explicit category override.
    pub category_id: Option<String>,
    /// Optional explicit subcategory override.
    pub subcategory_id: Option<String>,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Whether the product is visible on the storefront.
    pub is_active: bool,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and price.
    pub fn new(name: impl Into<String>, base_price_cents: i64) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            name_en: None,
            description: None,
            description_en: None,
            base_price_cents,
            category_id: None,
            subcategory_id: None,
            image_url: None,
            is_active: true,
            in_stock: true,
            updated_at: now,
        }
    }

    /// Attach an English name to the payload.
    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    /// Attach an Arabic description to the payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an English description to the payload.
    pub fn with_description_en(mut self, description_en: impl Into<String>) -> Self {
        self.description_en = Some(description_en.into());
        self
    }

    /// Pin the product to an explicit category pair.
    pub fn with_category(
        mut self,
        category_id: impl Into<String>,
        subcategory_id: impl Into<String>,
    ) -> Self {
        self.category_id = Some(category_id.into());
        self.subcategory_id = Some(subcategory_id.into());
        self
    }

    /// Attach an image URL to the payload.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Mark the product as hidden from the storefront.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional English name update, inner `None` clears the value.
    pub name_en: Option<Option<String>>,
    /// Optional description update, inner `None` clears the value.
    pub description: Option<Option<String>>,
    /// Optional English description update, inner `None` clears the value.
    pub description_en: Option<Option<String>>,
    /// Optional price update in USD cents.
    pub base_price_cents: Option<i64>,
    /// Optional category override update, inner `None` clears the override.
    pub category_id: Option<Option<String>>,
    /// Optional subcategory override update, inner `None` clears the override.
    pub subcategory_id: Option<Option<String>>,
    /// Optional image URL update, inner `None` clears the value.
    pub image_url: Option<Option<String>>,
    /// Optional visibility toggle.
    pub is_active: Option<bool>,
    /// Optional stock toggle.
    pub in_stock: Option<bool>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            name_en: None,
            description: None,
            description_en: None,
            base_price_cents: None,
            category_id: None,
            subcategory_id: None,
            image_url: None,
            is_active: None,
            in_stock: None,
            updated_at: now,
        }
    }

    /// Update the Arabic name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the English name, using `None` to clear an existing value.
    pub fn name_en(mut self, name_en: Option<impl Into<String>>) -> Self {
        self.name_en = Some(name_en.map(|value| value.into()));
        self
    }

    /// Update the Arabic description, using `None` to clear an existing value.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(|value| value.into()));
        self
    }

    /// Update the English description, using `None` to clear an existing value.
    pub fn description_en(mut self, description_en: Option<impl Into<String>>) -> Self {
        self.description_en = Some(description_en.map(|value| value.into()));
        self
    }

    /// Update the base price.
    pub fn base_price_cents(mut self, base_price_cents: i64) -> Self {
        self.base_price_cents = Some(base_price_cents);
        self
    }

    /// Update the explicit category pair, using `None` to hand the product
    /// back to the classifier.
    pub fn category(mut self, pair: Option<(impl Into<String>, impl Into<String>)>) -> Self {
        match pair {
            Some((category_id, subcategory_id)) => {
                self.category_id = Some(Some(category_id.into()));
                self.subcategory_id = Some(Some(subcategory_id.into()));
            }
            None => {
                self.category_id = Some(None);
                self.subcategory_id = Some(None);
            }
        }
        self
    }

    /// Update the image URL, using `None` to clear an existing value.
    pub fn image_url(mut self, image_url: Option<impl Into<String>>) -> Self {
        self.image_url = Some(image_url.map(|value| value.into()));
        self
    }

    /// Show or hide the product on the storefront.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Mark the product in or out of stock.
    pub fn stocked(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Apply the patch to a product in place; the repository persists the
    /// resulting full row.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(name_en) = &self.name_en {
            product.name_en = name_en.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(description_en) = &self.description_en {
            product.description_en = description_en.clone();
        }
        if let Some(base_price_cents) = self.base_price_cents {
            product.base_price_cents = base_price_cents;
        }
        if let Some(category_id) = &self.category_id {
            product.category_id = category_id.clone();
        }
        if let Some(subcategory_id) = &self.subcategory_id {
            product.subcategory_id = subcategory_id.clone();
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
        product.updated_at = self.updated_at;
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// When set, only active, in-stock products are returned.
    pub available_only: bool,
    /// Optional exact category filter.
    pub category_id: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to names and descriptions.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict the results to active, in-stock products.
    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    /// Filter the results by explicit category identifier.
    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
