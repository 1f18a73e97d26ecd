use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::appointment::{AppointmentStatus, NewAppointment};

/// What the booking screen submits: the chosen date and slot plus the
/// contact fields. Phone and reason are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub reason: String,
}

impl BookingRequest {
    /// Required fields must be non-empty; nothing else is checked here.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.date.trim().is_empty() {
            return Err("date is required");
        }
        if self.time.trim().is_empty() {
            return Err("time slot is required");
        }
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.email.trim().is_empty() {
            return Err("email is required");
        }
        Ok(())
    }

    /// Builds the create payload: status starts confirmed, createdAt is
    /// stamped now (UTC, ISO 8601).
    pub fn into_appointment(self) -> NewAppointment {
        NewAppointment {
            date: self.date,
            time: self.time,
            reason: self.reason,
            status: AppointmentStatus::Confirmed,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
