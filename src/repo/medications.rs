use sqlx::PgPool;

use crate::models::medication::{
    CreateMedicationRequest, Medication, UpdateMedicationRequest,
};

pub async fn list_for_pet(db: &PgPool, pet_id: i64) -> sqlx::Result<Vec<Medication>> {
    sqlx::query_as::<_, Medication>(
        r#"
        SELECT * FROM medications
        WHERE pet_id = $1
        ORDER BY started_on DESC, id DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
}

pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<Medication>> {
    sqlx::query_as::<_, Medication>("SELECT * FROM medications WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    pet_id: i64,
    body: &CreateMedicationRequest,
) -> sqlx::Result<Medication> {
    sqlx::query_as::<_, Medication>(
        r#"
        INSERT INTO medications (pet_id, event_id, name, dosage, frequency, started_on, ended_on, prescriber, notes, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(pet_id)
    .bind(body.event_id)
    .bind(&body.name)
    .bind(&body.dosage)
    .bind(&body.frequency)
    .bind(body.started_on)
    .bind(body.ended_on)
    .bind(&body.prescriber)
    .bind(&body.notes)
    .bind(body.active.unwrap_or(true))
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i64,
    body: &UpdateMedicationRequest,
) -> sqlx::Result<Option<Medication>> {
    sqlx::query_as::<_, Medication>(
        r#"
        UPDATE medications SET
            name = COALESCE($2, name),
            dosage = COALESCE($3, dosage),
            frequency = COALESCE($4, frequency),
            started_on = COALESCE($5, started_on),
            ended_on = COALESCE($6, ended_on),
            prescriber = COALESCE($7, prescriber),
            notes = COALESCE($8, notes),
            active = COALESCE($9, active),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&body.name)
    .bind(&body.dosage)
    .bind(&body.frequency)
    .bind(body.started_on)
    .bind(body.ended_on)
    .bind(&body.prescriber)
    .bind(&body.notes)
    .bind(body.active)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM medications WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
