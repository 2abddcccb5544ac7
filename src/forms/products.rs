use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::pricing;
use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 256;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a category or subcategory identifier.
const CATEGORY_ID_MAX_LEN: usize = 64;
const CATEGORY_ID_MAX_LEN_VALIDATOR: u64 = CATEGORY_ID_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided price is negative or not a number.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: f64 },
    /// Only one half of the category pair was supplied.
    #[error("category and subcategory must be set together")]
    IncompleteCategory,
}

/// JSON payload for creating a product through the admin API.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Arabic product name.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional English product name.
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub name_en: Option<String>,
    /// Optional Arabic description.
    pub description: Option<String>,
    /// Optional English description.
    pub description_en: Option<String>,
    /// Base price in decimal USD.
    pub base_price_usd: f64,
    /// Optional explicit category override.
    #[validate(length(max = CATEGORY_ID_MAX_LEN_VALIDATOR))]
    pub category_id: Option<String>,
    /// Optional explicit subcategory override.
    #[validate(length(max = CATEGORY_ID_MAX_LEN_VALIDATOR))]
    pub subcategory_id: Option<String>,
    /// Optional product image URL.
    pub image_url: Option<String>,
    /// Storefront visibility; defaults to visible.
    pub is_active: Option<bool>,
    /// Stock flag; defaults to in stock.
    pub in_stock: Option<bool>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        if !self.base_price_usd.is_finite() || self.base_price_usd < 0.0 {
            return Err(ProductFormError::InvalidPrice {
                value: self.base_price_usd,
            });
        }

        let mut new_product =
            NewProduct::new(sanitized_name, pricing::amount_to_cents(self.base_price_usd));

        if let Some(name_en) = sanitized_optional(self.name_en.as_deref(), sanitize_inline_text) {
            new_product = new_product.with_name_en(name_en);
        }

        if let Some(description) =
            sanitized_optional(self.description.as_deref(), sanitize_multiline_text)
        {
            new_product = new_product.with_description(description);
        }

        if let Some(description_en) =
            sanitized_optional(self.description_en.as_deref(), sanitize_multiline_text)
        {
            new_product = new_product.with_description_en(description_en);
        }

        if let Some((category_id, subcategory_id)) =
            category_pair(self.category_id.as_deref(), self.subcategory_id.as_deref())?
        {
            new_product = new_product.with_category(category_id, subcategory_id);
        }

        if let Some(image_url) = sanitized_optional(self.image_url.as_deref(), sanitize_inline_text)
        {
            new_product = new_product.with_image_url(image_url);
        }

        if self.is_active == Some(false) {
            new_product = new_product.inactive();
        }

        if self.in_stock == Some(false) {
            new_product = new_product.out_of_stock();
        }

        Ok(new_product)
    }
}

/// JSON payload for editing a product through the admin API.
///
/// Absent fields are left untouched; an empty string clears the stored value.
/// Clearing both category fields hands the product back to the classifier.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    /// Optional new Arabic name.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: Option<String>,
    /// Optional English name update.
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub name_en: Option<String>,
    /// Optional Arabic description update.
    pub description: Option<String>,
    /// Optional English description update.
    pub description_en: Option<String>,
    /// Optional price update in decimal USD.
    pub base_price_usd: Option<f64>,
    /// Optional category override update.
    #[validate(length(max = CATEGORY_ID_MAX_LEN_VALIDATOR))]
    pub category_id: Option<String>,
    /// Optional subcategory override update.
    #[validate(length(max = CATEGORY_ID_MAX_LEN_VALIDATOR))]
    pub subcategory_id: Option<String>,
    /// Optional image URL update.
    pub image_url: Option<String>,
    /// Optional visibility toggle.
    pub is_active: Option<bool>,
    /// Optional stock toggle.
    pub in_stock: Option<bool>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }

        if let Some(name_en) = self.name_en {
            let sanitized = sanitize_inline_text(&name_en);
            updates = updates.name_en((!sanitized.is_empty()).then_some(sanitized));
        }

        if let Some(description) = self.description {
            let sanitized = sanitize_multiline_text(&description);
            updates = updates.description((!sanitized.is_empty()).then_some(sanitized));
        }

        if let Some(description_en) = self.description_en {
            let sanitized = sanitize_multiline_text(&description_en);
            updates = updates.description_en((!sanitized.is_empty()).then_some(sanitized));
        }

        if let Some(base_price_usd) = self.base_price_usd {
            if !base_price_usd.is_finite() || base_price_usd < 0.0 {
                return Err(ProductFormError::InvalidPrice {
                    value: base_price_usd,
                });
            }
            updates = updates.base_price_cents(pricing::amount_to_cents(base_price_usd));
        }

        match (self.category_id, self.subcategory_id) {
            (None, None) => {}
            (Some(category_id), Some(subcategory_id)) => {
                updates =
                    updates.category(category_pair(Some(&category_id), Some(&subcategory_id))?);
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(ProductFormError::IncompleteCategory);
            }
        }

        if let Some(image_url) = self.image_url {
            let sanitized = sanitize_inline_text(&image_url);
            updates = updates.image_url((!sanitized.is_empty()).then_some(sanitized));
        }

        if let Some(is_active) = self.is_active {
            updates = updates.active(is_active);
        }

        if let Some(in_stock) = self.in_stock {
            updates = updates.stocked(in_stock);
        }

        Ok(updates)
    }
}

fn sanitized_optional(value: Option<&str>, sanitize: fn(&str) -> String) -> Option<String> {
    value.map(sanitize).filter(|value| !value.is_empty())
}

/// Resolves the submitted category fields into an all-or-nothing pair.
/// Empty strings count as absent.
fn category_pair(
    category_id: Option<&str>,
    subcategory_id: Option<&str>,
) -> ProductFormResult<Option<(String, String)>> {
    let category_id = category_id.map(sanitize_inline_text).filter(|v| !v.is_empty());
    let subcategory_id = subcategory_id
        .map(sanitize_inline_text)
        .filter(|v| !v.is_empty());

    match (category_id, subcategory_id) {
        (Some(category_id), Some(subcategory_id)) => Ok(Some((category_id, subcategory_id))),
        (None, None) => Ok(None),
        _ => Err(ProductFormError::IncompleteCategory),
    }
}
