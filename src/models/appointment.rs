use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    /// Part of the stored schema; cancellation is a hard delete so the
    /// service never writes this value itself.
    Cancelled,
}

/// A persisted booking. Wire field names match the stored documents,
/// including the camelCase `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Slot label off the daily grid, e.g. `"9:00 - 10:00"`.
    pub time: String,
    #[serde(default)]
    pub reason: String,
    pub status: AppointmentStatus,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload for the store's create call; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub reason: String,
    pub status: AppointmentStatus,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

const TIME_RANGE_SEPARATOR: &str = " - ";
const START_FORMAT: &str = "%Y-%m-%d %H:%M";

impl Appointment {
    /// Date combined with the opening hour of the slot, used purely for
    /// ordering. Records whose time field does not parse sort last.
    pub fn effective_start(&self) -> NaiveDateTime {
        let opening = self
            .time
            .split(TIME_RANGE_SEPARATOR)
            .next()
            .unwrap_or_default();
        NaiveDateTime::parse_from_str(&format!("{} {}", self.date, opening), START_FORMAT)
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// Earliest first; stable, so equal starts keep store iteration order.
pub fn sort_by_start(appointments: &mut [Appointment]) {
    appointments.sort_by_key(Appointment::effective_start);
}
