use souqtech::forms::products::{AddProductForm, EditProductForm};
use souqtech::repository::{DieselRepository, TaxonomyWriter};
use souqtech::services::products::{self, AdminProductsQuery};
use souqtech::services::{ServiceError, catalog};

mod common;

fn add_form(name: &str, price: f64) -> AddProductForm {
    AddProductForm {
        name: name.to_string(),
        name_en: None,
        description: None,
        description_en: None,
        base_price_usd: price,
        category_id: None,
        subcategory_id: None,
        image_url: None,
        is_active: None,
        in_stock: None,
    }
}

fn empty_edit() -> EditProductForm {
    EditProductForm {
        name: None,
        name_en: None,
        description: None,
        description_en: None,
        base_price_usd: None,
        category_id: None,
        subcategory_id: None,
        image_url: None,
        is_active: None,
        in_stock: None,
    }
}

#[test]
fn test_admin_product_crud_flow() {
    let test_db = common::TestDb::new("test_admin_product_crud_flow.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.seed_taxonomy().unwrap();

    let mut form = add_form("كيبورد ميكانيكي", 49.99);
    form.category_id = Some("peripherals".to_string());
    form.subcategory_id = Some("keyboards".to_string());

    let created = products::create_product(&repo, form).unwrap();
    assert_eq!(created.base_price_cents, 4999);
    assert_eq!(created.category_id.as_deref(), Some("peripherals"));

    let mut edit = empty_edit();
    edit.base_price_usd = Some(39.99);
    edit.in_stock = Some(false);
    let updated = products::update_product(&repo, created.id, edit).unwrap();
    assert_eq!(updated.base_price_cents, 3999);
    assert!(!updated.in_stock);
    assert_eq!(updated.category_id.as_deref(), Some("peripherals"));

    // admin listing still shows out-of-stock products
    let page = products::list_products(&repo, AdminProductsQuery::default()).unwrap();
    assert_eq!(page.items.len(), 1);

    // the storefront no longer does
    let catalog_page =
        catalog::list_products(&repo, souqtech::services::catalog::CatalogQuery::default())
            .unwrap();
    assert!(catalog_page.products.items.is_empty());

    products::delete_product(&repo, created.id).unwrap();
    let err = products::delete_product(&repo, created.id).expect_err("expected missing product");
    assert!(matches!(err, ServiceError::NotFound));
}

#[test]
fn test_admin_rejects_unknown_category_pairs() {
    let test_db = common::TestDb::new("test_admin_rejects_unknown_category_pairs.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.seed_taxonomy().unwrap();

    let mut form = add_form("منتج", 10.0);
    form.category_id = Some("peripherals".to_string());
    form.subcategory_id = Some("does-not-exist".to_string());

    let err = products::create_product(&repo, form).expect_err("expected unknown pair to fail");
    assert!(matches!(err, ServiceError::Form(_)));

    let created = products::create_product(&repo, add_form("منتج", 10.0)).unwrap();

    let mut edit = empty_edit();
    edit.category_id = Some("does-not-exist".to_string());
    edit.subcategory_id = Some("keyboards".to_string());
    let err = products::update_product(&repo, created.id, edit)
        .expect_err("expected unknown pair to fail");
    assert!(matches!(err, ServiceError::Form(_)));

    // clearing the pair is always allowed
    let mut edit = empty_edit();
    edit.category_id = Some(String::new());
    edit.subcategory_id = Some(String::new());
    let cleared = products::update_product(&repo, created.id, edit).unwrap();
    assert!(cleared.category_id.is_none());
}
