use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightEntry {
    pub id: i64,
    pub pet_id: i64,
    pub weight: f64,
    pub unit: WeightUnit,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "weight_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lb,
    Kg,
}

impl Default for WeightUnit {
    fn default() -> Self {
        Self::Lb
    }
}

/// Cross-pet chart row: an entry joined with its owner's name.
#[derive(Debug, Serialize, FromRow)]
pub struct WeightEntryWithPet {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub entry: WeightEntry,
    pub pet_name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWeightEntryRequest {
    pub pet_id: i64,
    #[validate(range(min = 0.001, message = "Weight must be greater than zero"))]
    pub weight: f64,
    pub unit: Option<WeightUnit>,
    pub recorded_on: Option<NaiveDate>,
}
