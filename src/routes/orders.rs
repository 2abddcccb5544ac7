use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::forms::orders::{CheckoutForm, UpdateOrderStatusForm};
use crate::repository::DieselRepository;
use crate::routes::error_body;
use crate::services::orders::AdminOrdersQuery;
use crate::services::{ServiceError, orders};

#[post("/api/orders")]
/// Create an order from a checkout payload, freezing the current exchange
/// rate and every item's LYD price on the order.
pub async fn create_order(
    form: web::Json<CheckoutForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::create_order(repo.get_ref(), form.into_inner()) {
        Ok(order) => HttpResponse::Created().json(order),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to create order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/admin/orders")]
/// Return one page of orders for the back office.
pub async fn list_orders(
    params: web::Query<AdminOrdersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::list_orders(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to list orders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/api/admin/orders/{id}")]
/// Return a single order with its frozen items.
pub async fn get_order(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match orders::get_order(repo.get_ref(), path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(error_body("order not found")),
        Err(err) => {
            log::error!("Failed to load order: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/api/admin/orders/{id}/status")]
/// Move an order to a new lifecycle status.
pub async fn update_order_status(
    path: web::Path<i32>,
    form: web::Json<UpdateOrderStatusForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::update_order_status(repo.get_ref(), path.into_inner(), form.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(error_body("order not found")),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to update order status: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
