use sqlx::PgPool;

use crate::models::vaccination::{
    CreateVaccinationRequest, UpdateVaccinationRequest, Vaccination,
};

pub async fn list_for_pet(db: &PgPool, pet_id: i64) -> sqlx::Result<Vec<Vaccination>> {
    sqlx::query_as::<_, Vaccination>(
        r#"
        SELECT * FROM vaccinations
        WHERE pet_id = $1
        ORDER BY administered_on DESC, id DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
}

pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<Vaccination>> {
    sqlx::query_as::<_, Vaccination>("SELECT * FROM vaccinations WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    pet_id: i64,
    body: &CreateVaccinationRequest,
) -> sqlx::Result<Vaccination> {
    sqlx::query_as::<_, Vaccination>(
        r#"
        INSERT INTO vaccinations (pet_id, event_id, name, administered_on, next_due_on, veterinarian, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(pet_id)
    .bind(body.event_id)
    .bind(&body.name)
    .bind(body.administered_on)
    .bind(body.next_due_on)
    .bind(&body.veterinarian)
    .bind(&body.notes)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i64,
    body: &UpdateVaccinationRequest,
) -> sqlx::Result<Option<Vaccination>> {
    sqlx::query_as::<_, Vaccination>(
        r#"
        UPDATE vaccinations SET
            name = COALESCE($2, name),
            administered_on = COALESCE($3, administered_on),
            next_due_on = COALESCE($4, next_due_on),
            veterinarian = COALESCE($5, veterinarian),
            notes = COALESCE($6, notes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&body.name)
    .bind(body.administered_on)
    .bind(body.next_due_on)
    .bind(&body.veterinarian)
    .bind(&body.notes)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM vaccinations WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
