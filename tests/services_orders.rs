use souqtech::domain::order::OrderStatus;
use souqtech::domain::product::NewProduct;
use souqtech::forms::orders::{CheckoutForm, CheckoutItemForm, UpdateOrderStatusForm};
use souqtech::forms::settings::UpdateRateForm;
use souqtech::repository::{DieselRepository, ProductWriter};
use souqtech::services::catalog::{self, CatalogQuery};
use souqtech::services::orders::{self, AdminOrdersQuery};
use souqtech::services::{ServiceError, settings};

mod common;

fn checkout(product_id: i32, quantity: i32) -> CheckoutForm {
    CheckoutForm {
        customer_name: "علي المصراتي".to_string(),
        customer_phone: "0910000000".to_string(),
        notes: None,
        items: vec![CheckoutItemForm {
            product_id,
            quantity,
        }],
    }
}

#[test]
fn test_checkout_freezes_prices_against_rate_changes() {
    let test_db = common::TestDb::new("test_checkout_freezes_prices_against_rate_changes.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("سماعة قيمنج HyperX", 2000))
        .unwrap();
    settings::update_exchange_rate(&repo, UpdateRateForm { rate: 5.1 }).unwrap();

    let order = orders::create_order(&repo, checkout(product.id, 2)).unwrap();
    assert_eq!(order.usd_to_lyd_snapshot, 5.1);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].display_price_lyd_cents, 10200);
    assert_eq!(order.total_lyd_cents, 20400);
    assert_eq!(order.status, OrderStatus::Pending);

    settings::update_exchange_rate(&repo, UpdateRateForm { rate: 6.0 }).unwrap();

    // the catalog follows the new rate
    let page = catalog::list_products(&repo, CatalogQuery::default()).unwrap();
    assert_eq!(page.products.items[0].display_price_lyd, 120.0);

    // the stored order does not
    let fetched = orders::get_order(&repo, order.id).unwrap();
    assert_eq!(fetched.usd_to_lyd_snapshot, 5.1);
    assert_eq!(fetched.items[0].display_price_lyd_cents, 10200);
    assert_eq!(fetched.total_lyd_cents, 20400);
}

#[test]
fn test_checkout_rejects_unavailable_products() {
    let test_db = common::TestDb::new("test_checkout_rejects_unavailable_products.db");
    let repo = DieselRepository::new(test_db.pool());

    let hidden = repo
        .create_product(&NewProduct::new("منتج مخفي", 1000).inactive())
        .unwrap();
    let sold_out = repo
        .create_product(&NewProduct::new("منتج نافد", 1000).out_of_stock())
        .unwrap();

    for id in [hidden.id, sold_out.id, 9999] {
        let err = orders::create_order(&repo, checkout(id, 1))
            .expect_err("expected unavailable product to fail");
        assert!(matches!(err, ServiceError::Form(_)));
    }

    let err = orders::create_order(&repo, checkout(hidden.id, 0))
        .expect_err("expected zero quantity to fail");
    assert!(matches!(err, ServiceError::Form(_)));
}

#[test]
fn test_order_status_lifecycle() {
    let test_db = common::TestDb::new("test_order_status_lifecycle.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("ماوس قيمنج", 2500))
        .unwrap();
    let order = orders::create_order(&repo, checkout(product.id, 1)).unwrap();

    let confirmed = orders::update_order_status(
        &repo,
        order.id,
        UpdateOrderStatusForm {
            status: "confirmed".to_string(),
        },
    )
    .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);

    let err = orders::update_order_status(
        &repo,
        order.id,
        UpdateOrderStatusForm {
            status: "refunded".to_string(),
        },
    )
    .expect_err("expected unknown status to fail");
    assert!(matches!(err, ServiceError::Form(_)));

    let err = orders::update_order_status(
        &repo,
        9999,
        UpdateOrderStatusForm {
            status: "confirmed".to_string(),
        },
    )
    .expect_err("expected missing order to fail");
    assert!(matches!(err, ServiceError::NotFound));

    let page = orders::list_orders(
        &repo,
        AdminOrdersQuery {
            status: Some("confirmed".to_string()),
            search: None,
            page: None,
        },
    )
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, order.id);

    let err = orders::list_orders(
        &repo,
        AdminOrdersQuery {
            status: Some("refunded".to_string()),
            search: None,
            page: None,
        },
    )
    .expect_err("expected unknown status filter to fail");
    assert!(matches!(err, ServiceError::Form(_)));
}
