pub mod appointments;
pub mod health;
pub mod slots;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .service(web::scope("/slots").configure(slots::init))
        .service(web::scope("/appointments").configure(appointments::init));
}
