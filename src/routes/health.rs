use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping);
}
