use sqlx::PgPool;

use crate::models::pet::{CreatePetRequest, Pet, Species, UpdatePetRequest};

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Pet>> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets ORDER BY name ASC")
        .fetch_all(db)
        .await
}

pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<Pet>> {
    sqlx::query_as::<_, Pet>("SELECT * FROM pets WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(db: &PgPool, body: &CreatePetRequest) -> sqlx::Result<Pet> {
    sqlx::query_as::<_, Pet>(
        r#"
        INSERT INTO pets (name, species, breed, birth_date, avatar_url, color, gender, microchip, vet_name, family, feeding_notes, traits)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(body.species.as_ref().unwrap_or(&Species::Other))
    .bind(&body.breed)
    .bind(body.birth_date)
    .bind(&body.avatar_url)
    .bind(&body.color)
    .bind(&body.gender)
    .bind(&body.microchip)
    .bind(&body.vet_name)
    .bind(&body.family)
    .bind(&body.feeding_notes)
    .bind(&body.traits)
    .fetch_one(db)
    .await
}

pub async fn update(db: &PgPool, id: i64, body: &UpdatePetRequest) -> sqlx::Result<Option<Pet>> {
    sqlx::query_as::<_, Pet>(
        r#"
        UPDATE pets SET
            name = COALESCE($2, name),
            species = COALESCE($3, species),
            breed = COALESCE($4, breed),
            birth_date = COALESCE($5, birth_date),
            avatar_url = COALESCE($6, avatar_url),
            color = COALESCE($7, color),
            gender = COALESCE($8, gender),
            microchip = COALESCE($9, microchip),
            vet_name = COALESCE($10, vet_name),
            family = COALESCE($11, family),
            feeding_notes = COALESCE($12, feeding_notes),
            traits = COALESCE($13, traits),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&body.name)
    .bind(&body.species)
    .bind(&body.breed)
    .bind(body.birth_date)
    .bind(&body.avatar_url)
    .bind(&body.color)
    .bind(&body.gender)
    .bind(&body.microchip)
    .bind(&body.vet_name)
    .bind(&body.family)
    .bind(&body.feeding_notes)
    .bind(&body.traits)
    .fetch_optional(db)
    .await
}

/// Dependents go with the pet via FK cascade; vaccinations and medications
/// keep their rows only through their own pet, so nothing dangles.
pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM pets WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
