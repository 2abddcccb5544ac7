use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::error_body;
use crate::services::products::AdminProductsQuery;
use crate::services::{ServiceError, products};

#[get("/api/admin/products")]
/// Return one page of products for the back office, including inactive and
/// out-of-stock ones.
pub async fn list_products(
    params: web::Query<AdminProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/api/admin/products")]
/// Create a product from an admin payload.
pub async fn create_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/api/admin/products/{id}")]
/// Apply an admin edit to a product.
pub async fn update_product(
    path: web::Path<i32>,
    form: web::Json<EditProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(error_body("product not found"))
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/api/admin/products/{id}")]
/// Delete a product. Lines of existing orders keep their frozen copy.
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(error_body("product not found"))
        }
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
