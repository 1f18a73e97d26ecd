use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use consult_booking_backend::models::appointment::{
    Appointment, AppointmentStatus, NewAppointment,
};
use consult_booking_backend::repository::memory::MemoryAppointmentStore;
use consult_booking_backend::repository::{AppointmentStore, SharedStore};
use consult_booking_backend::routes;
use serde_json::json;

fn new_appointment(date: &str, time: &str) -> NewAppointment {
    NewAppointment {
        date: date.to_string(),
        time: time.to_string(),
        reason: String::new(),
        status: AppointmentStatus::Confirmed,
        name: "Jane".to_string(),
        email: "j@x.com".to_string(),
        phone: String::new(),
        created_at: "2024-05-01T12:00:00.000Z".to_string(),
    }
}

#[actix_web::test]
async fn ping_answers_ok() {
    let store: SharedStore = Arc::new(MemoryAppointmentStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::get().uri("/health/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn daily_grid_is_the_full_eight_slots() {
    let store: SharedStore = Arc::new(MemoryAppointmentStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::get().uri("/slots/daily").to_request();
    let slots: Vec<String> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0], "9:00 - 10:00");
    assert_eq!(slots[7], "16:00 - 17:00");
}

#[actix_web::test]
async fn availability_excludes_slots_booked_for_that_date() {
    let store = Arc::new(MemoryAppointmentStore::new());
    store
        .create(new_appointment("2024-06-01", "10:00 - 11:00"))
        .await
        .unwrap();
    // a booking on another date must not affect this one
    store
        .create(new_appointment("2024-06-02", "9:00 - 10:00"))
        .await
        .unwrap();

    let shared: SharedStore = store;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(shared))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/slots/available/2024-06-01")
        .to_request();
    let available: Vec<String> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(available.len(), 7);
    assert!(!available.contains(&"10:00 - 11:00".to_string()));
    assert!(available.contains(&"9:00 - 10:00".to_string()));
}

#[actix_web::test]
async fn booking_a_free_slot_stores_one_confirmed_record() {
    let store = Arc::new(MemoryAppointmentStore::new());
    let shared: SharedStore = store.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(shared))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/appointments")
        .set_json(json!({
            "date": "2024-06-01",
            "time": "10:00 - 11:00",
            "name": "Jane",
            "email": "j@x.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stored = store.list_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].time, "10:00 - 11:00");
    assert_eq!(stored[0].status, AppointmentStatus::Confirmed);
    assert!(!stored[0].id.is_empty());
    assert!(!stored[0].created_at.is_empty());
}

#[actix_web::test]
async fn missing_required_field_is_rejected_before_any_store_call() {
    let store = Arc::new(MemoryAppointmentStore::new());
    let shared: SharedStore = store.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(shared))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/appointments")
        .set_json(json!({
            "date": "2024-06-01",
            "time": "10:00 - 11:00",
            "name": "Jane",
            "email": ""
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(store.list_all().await.unwrap().is_empty());
}

/// Store whose reads always fail, for the degraded-availability path.
struct UnreachableStore;

#[async_trait]
impl AppointmentStore for UnreachableStore {
    async fn list_all(&self) -> Result<Vec<Appointment>> {
        Err(anyhow!("store unreachable"))
    }

    async fn list_for_date(&self, _date: &str) -> Result<Vec<Appointment>> {
        Err(anyhow!("store unreachable"))
    }

    async fn create(&self, _appointment: NewAppointment) -> Result<String> {
        Err(anyhow!("store unreachable"))
    }

    async fn delete_by_id(&self, _id: &str) -> Result<()> {
        Err(anyhow!("store unreachable"))
    }
}

#[actix_web::test]
async fn failed_booked_slot_fetch_degrades_to_full_availability() {
    let shared: SharedStore = Arc::new(UnreachableStore);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(shared))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/slots/available/2024-06-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let available: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(available.len(), 8);
}

#[actix_web::test]
async fn store_failure_on_create_surfaces_as_server_error() {
    let shared: SharedStore = Arc::new(UnreachableStore);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(shared))
            .configure(routes::init),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/appointments")
        .set_json(json!({
            "date": "2024-06-01",
            "time": "10:00 - 11:00",
            "name": "Jane",
            "email": "j@x.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
