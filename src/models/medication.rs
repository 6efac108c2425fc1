use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::status::MedicationStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Medication {
    pub id: i64,
    pub pet_id: i64,
    /// Event this record was quick-created from; nulled when that event
    /// is deleted.
    pub event_id: Option<i64>,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub prescriber: Option<String>,
    pub notes: Option<String>,
    /// User-toggled; never inferred from `ended_on`.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MedicationWithStatus {
    #[serde(flatten)]
    pub medication: Medication,
    pub status: MedicationStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMedicationRequest {
    #[validate(length(min = 1, max = 200, message = "Medication name must be 1-200 characters"))]
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub prescriber: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
    pub event_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMedicationRequest {
    #[validate(length(min = 1, max = 200, message = "Medication name must be 1-200 characters"))]
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub prescriber: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}
