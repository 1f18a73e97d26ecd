use crate::handlers::booking::get_availability;
use crate::repository::SharedStore;
use crate::slots::generate_daily_slots;
use actix_web::{HttpResponse, Responder, get, web};

#[get("/daily")]
async fn daily() -> impl Responder {
    HttpResponse::Ok().json(generate_daily_slots())
}

#[get("/available/{date}")]
async fn available(store: web::Data<SharedStore>, path: web::Path<String>) -> impl Responder {
    let date = path.into_inner();
    HttpResponse::Ok().json(get_availability(store.get_ref(), &date).await)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(daily).service(available);
}
