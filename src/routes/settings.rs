use actix_web::{HttpResponse, Responder, get, put, web};

use crate::forms::settings::UpdateRateForm;
use crate::repository::DieselRepository;
use crate::routes::error_body;
use crate::services::{ServiceError, settings};

#[get("/api/settings/usd_to_lyd_rate")]
/// Return the effective USD to LYD exchange rate.
pub async fn get_exchange_rate(repo: web::Data<DieselRepository>) -> impl Responder {
    HttpResponse::Ok().json(settings::get_exchange_rate(repo.get_ref()))
}

#[put("/api/settings/usd_to_lyd_rate")]
/// Overwrite the stored exchange rate. Existing orders keep their snapshot.
pub async fn update_exchange_rate(
    form: web::Json<UpdateRateForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match settings::update_exchange_rate(repo.get_ref(), form.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to update exchange rate: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
