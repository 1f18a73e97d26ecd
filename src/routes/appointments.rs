use crate::handlers::appointments::{cancel_appointment, list_appointments};
use crate::handlers::booking::book_appointment;
use crate::models::booking::BookingRequest;
use crate::repository::SharedStore;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde_json::json;

#[get("")]
async fn list(store: web::Data<SharedStore>) -> impl Responder {
    match list_appointments(store.get_ref()).await {
        Ok(appointments) => HttpResponse::Ok().json(appointments),
        Err(e) => {
            tracing::error!("Failed to list appointments: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to fetch appointments.")
        }
    }
}

#[post("")]
async fn create(store: web::Data<SharedStore>, body: web::Json<BookingRequest>) -> impl Responder {
    let request = body.into_inner();

    // no store call when a required field is missing
    if let Err(reason) = request.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": reason }));
    }

    match book_appointment(store.get_ref(), request).await {
        Ok(id) => HttpResponse::Created().json(json!({ "id": id })),
        Err(e) => {
            tracing::error!("Failed to book appointment: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to book appointment.")
        }
    }
}

#[delete("/{id}")]
async fn cancel(store: web::Data<SharedStore>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match cancel_appointment(store.get_ref(), &id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "cancelled": id })),
        Err(e) => {
            tracing::error!("Failed to cancel appointment {}: {:?}", id, e);
            HttpResponse::InternalServerError().body("Failed to cancel appointment.")
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(create).service(cancel);
}
