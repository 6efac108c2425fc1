use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::status::VaccinationStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vaccination {
    pub id: i64,
    pub pet_id: i64,
    /// Event this record was quick-created from; nulled when that event
    /// is deleted.
    pub event_id: Option<i64>,
    pub name: String,
    pub administered_on: NaiveDate,
    pub next_due_on: Option<NaiveDate>,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reminder-feed row: a due vaccination joined with its owner's name.
#[derive(Debug, Serialize, FromRow)]
pub struct VaccinationWithPet {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vaccination: Vaccination,
    pub pet_name: String,
}

#[derive(Debug, Serialize)]
pub struct VaccinationWithStatus {
    #[serde(flatten)]
    pub vaccination: Vaccination,
    pub status: VaccinationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVaccinationRequest {
    #[validate(length(min = 1, max = 200, message = "Vaccination name must be 1-200 characters"))]
    pub name: String,
    pub administered_on: NaiveDate,
    pub next_due_on: Option<NaiveDate>,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
    pub event_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVaccinationRequest {
    #[validate(length(min = 1, max = 200, message = "Vaccination name must be 1-200 characters"))]
    pub name: Option<String>,
    pub administered_on: Option<NaiveDate>,
    pub next_due_on: Option<NaiveDate>,
    pub veterinarian: Option<String>,
    pub notes: Option<String>,
}
