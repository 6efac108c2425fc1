use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub microchip: Option<String>,
    pub vet_name: Option<String>,
    pub family: Option<String>,
    pub feeding_notes: Option<String>,
    pub traits: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "species", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl Default for Species {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePetRequest {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub name: String,
    pub species: Option<Species>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub microchip: Option<String>,
    pub vet_name: Option<String>,
    pub family: Option<String>,
    pub feeding_notes: Option<String>,
    pub traits: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 100, message = "Pet name must be 1-100 characters"))]
    pub name: Option<String>,
    pub species: Option<Species>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
    pub gender: Option<String>,
    pub microchip: Option<String>,
    pub vet_name: Option<String>,
    pub family: Option<String>,
    pub feeding_notes: Option<String>,
    pub traits: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_uses_lowercase_wire_names() {
        let parsed: Species = serde_json::from_str("\"rabbit\"").unwrap();
        assert_eq!(parsed, Species::Rabbit);
        assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"dog\"");
    }

    #[test]
    fn unknown_species_is_rejected() {
        assert!(serde_json::from_str::<Species>("\"dragon\"").is_err());
    }
}
