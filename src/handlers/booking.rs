use anyhow::Result;
use tracing::{error, info};

use crate::models::booking::BookingRequest;
use crate::repository::SharedStore;
use crate::slots;

/// Free slots for a date: the daily grid minus whatever is already
/// booked. A failed fetch of the booked set is logged and treated as
/// "nothing booked", so the caller still gets the full grid rather
/// than an error screen.
pub async fn get_availability(store: &SharedStore, date: &str) -> Vec<String> {
    let booked: Vec<String> = match store.list_for_date(date).await {
        Ok(appointments) => appointments.into_iter().map(|a| a.time).collect(),
        Err(e) => {
            error!("Error fetching booked slots for {}: {:?}", date, e);
            Vec::new()
        }
    };

    slots::resolve_availability(&booked)
}

/// Create flow after validation has passed. Returns the id the store
/// assigned; on failure the caller keeps its form state and may retry.
pub async fn book_appointment(store: &SharedStore, request: BookingRequest) -> Result<String> {
    let appointment = request.into_appointment();
    let id = store.create(appointment).await?;
    info!("Booked appointment {}", id);
    Ok(id)
}
