use serde::Deserialize;

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ProductReader, ProductWriter, TaxonomyReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the admin products listing.
#[derive(Debug, Default, Deserialize)]
pub struct AdminProductsQuery {
    /// Optional search string entered by the administrator.
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Lists all products, including inactive and out-of-stock ones.
pub fn list_products<R>(
    repo: &R,
    query: AdminProductsQuery,
) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term.clone());
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}

/// Creates a new product from a validated admin form.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + TaxonomyReader + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let (Some(category_id), Some(subcategory_id)) =
        (payload.category_id.as_deref(), payload.subcategory_id.as_deref())
    {
        ensure_known_pair(repo, category_id, subcategory_id)?;
    }

    repo.create_product(&payload).map_err(ServiceError::from)
}

/// Applies an admin edit to an existing product.
pub fn update_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + TaxonomyReader + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let (Some(Some(category_id)), Some(Some(subcategory_id))) =
        (updates.category_id.as_ref(), updates.subcategory_id.as_ref())
    {
        ensure_known_pair(repo, category_id, subcategory_id)?;
    }

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Rejects category overrides that do not exist in the taxonomy tables.
fn ensure_known_pair<R>(repo: &R, category_id: &str, subcategory_id: &str) -> ServiceResult<()>
where
    R: TaxonomyReader + ?Sized,
{
    let tree = repo.list_categories().map_err(ServiceError::from)?;
    let known = tree.iter().any(|node| {
        node.category.id == category_id
            && node
                .subcategories
                .iter()
                .any(|subcategory| subcategory.id == subcategory_id)
    });

    if known {
        Ok(())
    } else {
        Err(ServiceError::Form(format!(
            "unknown category pair `{category_id}/{subcategory_id}`"
        )))
    }
}
