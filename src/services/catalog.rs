use serde::{Deserialize, Serialize};

use crate::domain::classifier;
use crate::domain::pricing;
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::taxonomy::CategoryTree;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ProductReader, SettingsReader, TaxonomyReader};
use crate::services::{ServiceError, ServiceResult, settings};

/// Query parameters accepted by the public catalog endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Optional category identifier filter.
    pub category: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// API-facing product object: raw fields plus the computed display price and
/// the resolved category pair.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub description_en: Option<String>,
    /// Authoritative base price in USD.
    pub base_price_usd: f64,
    /// LYD price computed from the current rate, rounded to 0.5.
    pub display_price_lyd: f64,
    /// Resolved category: the stored override, or the classifier's inference.
    pub category_id: String,
    /// Resolved subcategory, same precedence as `category_id`.
    pub subcategory_id: String,
    pub image_url: Option<String>,
    pub in_stock: bool,
    /// Rate used for `display_price_lyd`, echoed for the client.
    pub usd_to_lyd_rate: f64,
}

/// One page of the public catalog.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    pub products: Paginated<ProductView>,
    /// Rate applied to every product on this page.
    pub usd_to_lyd_rate: f64,
    /// Search query echoed back when present.
    pub search: Option<String>,
}

/// Assemble the API-facing object for one product.
///
/// The stored `category_id`/`subcategory_id` pair always wins; the classifier
/// runs only when the administrator has not set one.
pub fn assemble_product(product: Product, rate: f64) -> ProductView {
    let base_price_usd = product.base_price_usd();
    let display_price_lyd = pricing::display_price_lyd(base_price_usd, rate);

    let (category_id, subcategory_id) = match product.explicit_category() {
        Some((category_id, subcategory_id)) => {
            (category_id.to_string(), subcategory_id.to_string())
        }
        None => {
            let inferred = classifier::classify(&product.text());
            (
                inferred.category_id.to_string(),
                inferred.subcategory_id.to_string(),
            )
        }
    };

    ProductView {
        id: product.id,
        name: product.name,
        name_en: product.name_en,
        description: product.description,
        description_en: product.description_en,
        base_price_usd,
        display_price_lyd,
        category_id,
        subcategory_id,
        image_url: product.image_url,
        in_stock: product.in_stock,
        usd_to_lyd_rate: rate,
    }
}

/// Loads one page of active, in-stock products for the storefront.
pub fn list_products<R>(repo: &R, query: CatalogQuery) -> ServiceResult<CatalogPage>
where
    R: ProductReader + SettingsReader + ?Sized,
{
    let CatalogQuery {
        search,
        category,
        page,
    } = query;

    let page = page.unwrap_or(1);
    let mut list_query = ProductListQuery::new()
        .available_only()
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term.clone());
    }

    if let Some(category_id) = category.as_ref() {
        list_query = list_query.category(category_id.clone());
    }

    let rate = settings::current_rate(repo);
    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    let views: Vec<ProductView> = items
        .into_iter()
        .map(|product| assemble_product(product, rate))
        .collect();

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(CatalogPage {
        products: Paginated::new(views, page, total_pages),
        usd_to_lyd_rate: rate,
        search,
    })
}

/// Loads a single assembled product for the storefront detail view.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<ProductView>
where
    R: ProductReader + SettingsReader + ?Sized,
{
    let product = repo
        .get_product_by_id(id)
        .map_err(ServiceError::from)?
        .filter(|product| product.is_active)
        .ok_or(ServiceError::NotFound)?;

    let rate = settings::current_rate(repo);
    Ok(assemble_product(product, rate))
}

/// Loads the category tree from the database.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryTree>>
where
    R: TaxonomyReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;

    fn product(name: &str) -> Product {
        let now = chrono::Local::now().naive_utc();
        Product {
            id: 1,
            name: name.to_string(),
            name_en: None,
            description: None,
            description_en: None,
            base_price_cents: 2000,
            category_id: None,
            subcategory_id: None,
            category: None,
            image_url: None,
            is_active: true,
            in_stock: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn assembles_prices_and_inferred_category() {
        let view = assemble_product(product("سماعة قيمنج HyperX"), 5.10);

        assert_eq!(view.base_price_usd, 20.0);
        assert_eq!(view.display_price_lyd, 102.0);
        assert_eq!(view.category_id, "peripherals");
        assert_eq!(view.subcategory_id, "headsets");
        assert_eq!(view.usd_to_lyd_rate, 5.10);
    }

    #[test]
    fn stored_category_pair_beats_the_classifier() {
        let mut stored = product("سماعة قيمنج HyperX");
        stored.category_id = Some("gaming-setup".to_string());
        stored.subcategory_id = Some("stands".to_string());

        let view = assemble_product(stored, 5.10);

        assert_eq!(view.category_id, "gaming-setup");
        assert_eq!(view.subcategory_id, "stands");
    }

    #[test]
    fn empty_override_strings_fall_back_to_the_classifier() {
        let mut stored = product("سماعة قيمنج HyperX");
        stored.category_id = Some(String::new());
        stored.subcategory_id = Some("  ".to_string());

        let view = assemble_product(stored, 5.10);

        assert_eq!(view.category_id, "peripherals");
        assert_eq!(view.subcategory_id, "headsets");
    }

    #[test]
    fn a_partial_override_is_not_authoritative() {
        let mut stored = product("سماعة قيمنج HyperX");
        stored.category_id = Some("gaming-setup".to_string());

        let view = assemble_product(stored, 5.10);

        assert_eq!(view.category_id, "peripherals");
        assert_eq!(view.subcategory_id, "headsets");
    }

    #[test]
    fn unclassifiable_text_gets_the_fallback_pair() {
        let view = assemble_product(product("منتج غامض"), 5.0);

        assert_eq!(view.category_id, "pc-components");
        assert_eq!(view.subcategory_id, "processors");
    }

    #[test]
    fn zero_price_assembles_to_zero() {
        let mut free = product("ستيكرات");
        free.base_price_cents = 0;

        let view = assemble_product(free, 5.0);

        assert_eq!(view.display_price_lyd, 0.0);
    }
}
