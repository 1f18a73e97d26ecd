use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::appointment::{Appointment, NewAppointment};
use crate::repository::AppointmentStore;

/// In-memory stand-in for the document store. Keeps insertion order so
/// listing behaves like the remote store's iteration order. Backs the
/// integration tests.
#[derive(Default)]
pub struct MemoryAppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn list_all(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.lock().unwrap().clone())
    }

    async fn list_for_date(&self, date: &str) -> Result<Vec<Appointment>> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect())
    }

    async fn create(&self, appointment: NewAppointment) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.appointments.lock().unwrap().push(Appointment {
            id: id.clone(),
            date: appointment.date,
            time: appointment.time,
            reason: appointment.reason,
            status: appointment.status,
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            created_at: appointment.created_at,
        });
        Ok(id)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut appointments = self.appointments.lock().unwrap();
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        if appointments.len() == before {
            return Err(anyhow!("No appointment with id {id}"));
        }
        Ok(())
    }
}
