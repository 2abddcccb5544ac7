use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use souqtech::db::establish_connection_pool;
use souqtech::repository::{DieselRepository, TaxonomyWriter};
use souqtech::routes::catalog::{get_product, list_categories, list_products};
use souqtech::routes::orders::{create_order, get_order, list_orders, update_order_status};
use souqtech::routes::products::{
    create_product, delete_product, list_products as admin_list_products, update_product,
};
use souqtech::routes::settings::{get_exchange_rate, update_exchange_rate};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match repo.seed_taxonomy() {
        Ok(count) => log::info!("Taxonomy seeded: {count} categories"),
        Err(e) => {
            log::error!("Failed to seed taxonomy: {e}");
            std::process::exit(1);
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(list_products)
            .service(get_product)
            .service(list_categories)
            .service(get_exchange_rate)
            .service(update_exchange_rate)
            .service(create_order)
            .service(admin_list_products)
            .service(create_product)
            .service(update_product)
            .service(delete_product)
            .service(list_orders)
            .service(get_order)
            .service(update_order_status)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
