use souqtech::domain::order::{NewOrder, NewOrderItem, OrderListQuery, OrderStatus, UpdateOrder};
use souqtech::domain::product::{NewProduct, ProductListQuery, UpdateProduct};
use souqtech::domain::settings::USD_TO_LYD_RATE_KEY;
use souqtech::domain::taxonomy::SEED_CATEGORIES;
use souqtech::repository::{
    DieselRepository, OrderReader, OrderWriter, ProductReader, ProductWriter, RepositoryError,
    SettingsReader, SettingsWriter, TaxonomyReader, TaxonomyWriter,
};

mod common;

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(
            &NewProduct::new("كيبورد ميكانيكي", 4999)
                .with_name_en("Mechanical keyboard")
                .with_description("كيبورد ميكانيكي بإضاءة RGB"),
        )
        .unwrap();
    assert_eq!(created.name, "كيبورد ميكانيكي");
    assert_eq!(created.base_price_cents, 4999);
    assert!(created.is_active);
    assert!(created.category_id.is_none());

    let fetched = repo.get_product_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched.name_en.as_deref(), Some("Mechanical keyboard"));

    // patch: price change plus an explicit category override
    let updated = repo
        .update_product(
            created.id,
            &UpdateProduct::new()
                .base_price_cents(5999)
                .category(Some(("peripherals", "keyboards"))),
        )
        .unwrap();
    assert_eq!(updated.base_price_cents, 5999);
    assert_eq!(updated.category_id.as_deref(), Some("peripherals"));
    assert_eq!(updated.subcategory_id.as_deref(), Some("keyboards"));
    // untouched fields survive the full-row write
    assert_eq!(updated.name_en.as_deref(), Some("Mechanical keyboard"));

    // clearing the pair hands the product back to the classifier
    let cleared = repo
        .update_product(
            created.id,
            &UpdateProduct::new().category(None::<(String, String)>),
        )
        .unwrap();
    assert!(cleared.category_id.is_none());
    assert!(cleared.subcategory_id.is_none());

    let err = repo
        .update_product(9999, &UpdateProduct::new().base_price_cents(1))
        .expect_err("expected missing product to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    repo.delete_product(created.id).unwrap();
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());

    let err = repo
        .delete_product(created.id)
        .expect_err("expected double delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_product_listing_filters() {
    let test_db = common::TestDb::new("test_product_listing_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&NewProduct::new("ماوس قيمنج", 2500).with_name_en("Gaming mouse"))
        .unwrap();
    repo.create_product(&NewProduct::new("ماوس مكتبي", 1200).out_of_stock())
        .unwrap();
    repo.create_product(
        &NewProduct::new("كرسي قيمنج", 18000).with_category("gaming-setup", "chairs"),
    )
    .unwrap();
    repo.create_product(&NewProduct::new("منتج مخفي", 100).inactive())
        .unwrap();

    let (total, _) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 4);

    let (available, items) = repo
        .list_products(ProductListQuery::new().available_only())
        .unwrap();
    assert_eq!(available, 2);
    assert!(items.iter().all(|p| p.is_active && p.in_stock));

    let (found, items) = repo
        .list_products(ProductListQuery::new().search("Gaming"))
        .unwrap();
    assert_eq!(found, 1);
    assert_eq!(items[0].name, "ماوس قيمنج");

    let (by_category, items) = repo
        .list_products(ProductListQuery::new().category("gaming-setup"))
        .unwrap();
    assert_eq!(by_category, 1);
    assert_eq!(items[0].name, "كرسي قيمنج");

    let (paged_total, page) = repo
        .list_products(ProductListQuery::new().paginate(1, 3))
        .unwrap();
    assert_eq!(paged_total, 4);
    assert_eq!(page.len(), 3);
}

#[test]
fn test_order_repository_freezes_lines() {
    let test_db = common::TestDb::new("test_order_repository_freezes_lines.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("سماعة قيمنج", 2000))
        .unwrap();

    let new_order = NewOrder::new("علي", "0910000000", 5.1)
        .with_notes("توصيل مساءً")
        .with_item(NewOrderItem {
            product_id: Some(product.id),
            name: product.name.clone(),
            base_price_cents: product.base_price_cents,
            display_price_lyd_cents: 10200,
            quantity: 2,
        });

    let order = repo.create_order(&new_order).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_lyd_cents, 20400);
    assert_eq!(order.usd_to_lyd_snapshot, 5.1);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].display_price_lyd_cents, 10200);

    // deleting the product leaves the frozen line intact
    repo.delete_product(product.id).unwrap();
    let fetched = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(fetched.items[0].name, "سماعة قيمنج");
    assert_eq!(fetched.items[0].base_price_cents, 2000);

    let confirmed = repo
        .update_order(order.id, &UpdateOrder::new().status(OrderStatus::Confirmed))
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    assert_eq!(confirmed.notes.as_deref(), Some("توصيل مساءً"));

    let (total, items) = repo
        .list_orders(OrderListQuery::new().status(OrderStatus::Confirmed))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].items.len(), 1);

    let (none, _) = repo
        .list_orders(OrderListQuery::new().status(OrderStatus::Cancelled))
        .unwrap();
    assert_eq!(none, 0);

    let (by_phone, _) = repo
        .list_orders(OrderListQuery::new().search("091"))
        .unwrap();
    assert_eq!(by_phone, 1);
}

#[test]
fn test_settings_repository_upserts() {
    let test_db = common::TestDb::new("test_settings_repository_upserts.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.get_setting(USD_TO_LYD_RATE_KEY).unwrap().is_none());

    let stored = repo
        .set_setting(USD_TO_LYD_RATE_KEY, r#"{"rate": 5.2}"#)
        .unwrap();
    assert_eq!(stored.exchange_rate(), Some(5.2));

    let overwritten = repo
        .set_setting(USD_TO_LYD_RATE_KEY, r#"{"rate": 5.4}"#)
        .unwrap();
    assert_eq!(overwritten.exchange_rate(), Some(5.4));

    let fetched = repo.get_setting(USD_TO_LYD_RATE_KEY).unwrap().unwrap();
    assert_eq!(fetched.exchange_rate(), Some(5.4));
}

#[test]
fn test_taxonomy_seeding_is_idempotent() {
    let test_db = common::TestDb::new("test_taxonomy_seeding_is_idempotent.db");
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(repo.seed_taxonomy().unwrap(), SEED_CATEGORIES.len());
    assert_eq!(repo.seed_taxonomy().unwrap(), SEED_CATEGORIES.len());

    let tree = repo.list_categories().unwrap();
    assert_eq!(tree.len(), SEED_CATEGORIES.len());
    assert_eq!(tree[0].category.id, "pc-components");
    assert_eq!(tree[0].subcategories.len(), 8);
    assert_eq!(tree[0].subcategories[0].id, "processors");

    let peripherals = tree
        .iter()
        .find(|node| node.category.id == "peripherals")
        .unwrap();
    assert!(
        peripherals
            .subcategories
            .iter()
            .any(|subcategory| subcategory.id == "headsets")
    );
}
