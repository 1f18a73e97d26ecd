use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection, Cursor};
use serde::{Deserialize, Serialize};

use crate::models::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::repository::AppointmentStore;

const APPOINTMENTS_COLLECTION: &str = "appointments";

/// Stored shape: MongoDB owns the `_id`, everything else is written
/// exactly as the API models carry it.
#[derive(Debug, Serialize, Deserialize)]
struct AppointmentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    date: String,
    time: String,
    #[serde(default)]
    reason: String,
    status: AppointmentStatus,
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

impl AppointmentDocument {
    fn from_new(appointment: NewAppointment) -> Self {
        AppointmentDocument {
            id: None,
            date: appointment.date,
            time: appointment.time,
            reason: appointment.reason,
            status: appointment.status,
            name: appointment.name,
            email: appointment.email,
            phone: appointment.phone,
            created_at: appointment.created_at,
        }
    }

    fn into_appointment(self) -> Appointment {
        Appointment {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            date: self.date,
            time: self.time,
            reason: self.reason,
            status: self.status,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

pub struct MongoAppointmentStore {
    collection: Collection<AppointmentDocument>,
}

impl MongoAppointmentStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client.database(database).collection(APPOINTMENTS_COLLECTION);
        Ok(MongoAppointmentStore { collection })
    }

    async fn collect(mut cursor: Cursor<AppointmentDocument>) -> Result<Vec<Appointment>> {
        let mut appointments = Vec::new();
        while cursor.advance().await? {
            appointments.push(cursor.deserialize_current()?.into_appointment());
        }
        Ok(appointments)
    }
}

#[async_trait]
impl AppointmentStore for MongoAppointmentStore {
    async fn list_all(&self) -> Result<Vec<Appointment>> {
        let cursor = self.collection.find(doc! {}).await?;
        Self::collect(cursor).await
    }

    async fn list_for_date(&self, date: &str) -> Result<Vec<Appointment>> {
        let cursor = self.collection.find(doc! { "date": date }).await?;
        Self::collect(cursor).await
    }

    async fn create(&self, appointment: NewAppointment) -> Result<String> {
        let result = self
            .collection
            .insert_one(AppointmentDocument::from_new(appointment))
            .await?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| anyhow!("Store returned a non-ObjectId key"))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let oid = ObjectId::parse_str(id).map_err(|_| anyhow!("Invalid appointment id: {id}"))?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(anyhow!("No appointment with id {id}"));
        }
        Ok(())
    }
}
