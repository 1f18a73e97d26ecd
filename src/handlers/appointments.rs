use anyhow::Result;
use tracing::info;

use crate::models::appointment::{Appointment, sort_by_start};
use crate::repository::SharedStore;

/// Everything in the store, earliest effective start first.
pub async fn list_appointments(store: &SharedStore) -> Result<Vec<Appointment>> {
    let mut appointments = store.list_all().await?;
    sort_by_start(&mut appointments);
    Ok(appointments)
}

/// Cancellation is a hard delete; there is no cancelled-but-kept record.
pub async fn cancel_appointment(store: &SharedStore, id: &str) -> Result<()> {
    store.delete_by_id(id).await?;
    info!("Cancelled appointment {}", id);
    Ok(())
}
