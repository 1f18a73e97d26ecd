use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use consult_booking_backend::config::Config;
use consult_booking_backend::repository::SharedStore;
use consult_booking_backend::repository::mongo::MongoAppointmentStore;
use consult_booking_backend::routes;
use dotenv::dotenv;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    _ = dotenv(); // optional, env vars may come from the shell

    let config = Config::from_env();

    let store: SharedStore = Arc::new(
        MongoAppointmentStore::connect(&config.mongodb_uri, &config.database)
            .await
            .expect("Failed to connect to MongoDB"),
    );

    info!("Listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(routes::init)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
