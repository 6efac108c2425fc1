use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::pet::Pet;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub category: EventCategory,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
    pub reminder_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "event_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    VetVisit,
    Medication,
    Vaccination,
    Appointment,
}

#[derive(Debug, Serialize)]
pub struct EventWithPets {
    #[serde(flatten)]
    pub event: Event,
    pub pets: Vec<Pet>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Event title must be 1-200 characters"))]
    pub title: String,
    pub category: EventCategory,
    pub notes: Option<String>,
    pub event_date: NaiveDate,
    pub reminder_date: Option<NaiveDate>,
    pub location: Option<String>,
    /// Pets the event applies to. Must be non-empty; checked in the handler
    /// so the error message is explicit rather than a schema violation.
    #[serde(default, alias = "petIds")]
    pub pet_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_snake_case_wire_names() {
        let parsed: EventCategory = serde_json::from_str("\"vet_visit\"").unwrap();
        assert_eq!(parsed, EventCategory::VetVisit);
        assert_eq!(
            serde_json::to_string(&EventCategory::Appointment).unwrap(),
            "\"appointment\""
        );
    }

    #[test]
    fn create_request_accepts_pet_ids_alias() {
        let body: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "title": "Annual checkup",
            "category": "vet_visit",
            "event_date": "2026-09-01",
            "petIds": [7, 9],
        }))
        .unwrap();
        assert_eq!(body.pet_ids, vec![7, 9]);
    }

    #[test]
    fn create_request_defaults_to_empty_pet_list() {
        let body: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "title": "Annual checkup",
            "category": "vet_visit",
            "event_date": "2026-09-01",
        }))
        .unwrap();
        assert!(body.pet_ids.is_empty());
    }
}
