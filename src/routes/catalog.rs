use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::error_body;
use crate::services::catalog::CatalogQuery;
use crate::services::{ServiceError, catalog};

#[get("/api/products")]
/// Return one page of active, in-stock products with computed LYD prices
/// and resolved categories.
pub async fn list_products(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list catalog products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/products/{id}")]
/// Return a single assembled product, or `404` if it is missing or hidden.
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match catalog::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(error_body("product not found"))
        }
        Err(err) => {
            log::error!("Failed to load product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/categories")]
/// Return the category tree with nested subcategories.
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match catalog::list_categories(repo.get_ref()) {
        Ok(tree) => HttpResponse::Ok().json(tree),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
