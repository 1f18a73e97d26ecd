pub mod memory;
pub mod mongo;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::appointment::{Appointment, NewAppointment};

/// The document-store contract the screens depend on. One collection,
/// one equality filter (by date); ids are opaque strings the store
/// assigns on create.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Appointment>>;

    async fn list_for_date(&self, date: &str) -> Result<Vec<Appointment>>;

    /// Returns the id the store assigned.
    async fn create(&self, appointment: NewAppointment) -> Result<String>;

    /// Errs when the id is unknown; a delete must remove exactly one record.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

pub type SharedStore = Arc<dyn AppointmentStore>;
