use sqlx::PgPool;

use crate::models::weight::{CreateWeightEntryRequest, WeightEntry, WeightEntryWithPet, WeightUnit};

/// All entries across pets with the owner's name attached, oldest first,
/// ready for cross-pet charting.
pub async fn list_with_pet(db: &PgPool) -> sqlx::Result<Vec<WeightEntryWithPet>> {
    sqlx::query_as::<_, WeightEntryWithPet>(
        r#"
        SELECT w.*, p.name AS pet_name
        FROM weight_entries w
        JOIN pets p ON p.id = w.pet_id
        ORDER BY w.recorded_on ASC, w.id ASC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn list_for_pet(db: &PgPool, pet_id: i64) -> sqlx::Result<Vec<WeightEntry>> {
    sqlx::query_as::<_, WeightEntry>(
        r#"
        SELECT * FROM weight_entries
        WHERE pet_id = $1
        ORDER BY recorded_on ASC, id ASC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
}

pub async fn create(
    db: &PgPool,
    body: &CreateWeightEntryRequest,
    recorded_on: chrono::NaiveDate,
) -> sqlx::Result<WeightEntry> {
    sqlx::query_as::<_, WeightEntry>(
        r#"
        INSERT INTO weight_entries (pet_id, weight, unit, recorded_on)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(body.pet_id)
    .bind(body.weight)
    .bind(body.unit.as_ref().unwrap_or(&WeightUnit::Lb))
    .bind(recorded_on)
    .fetch_one(db)
    .await
}
