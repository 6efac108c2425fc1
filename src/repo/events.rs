use sqlx::PgPool;

use crate::models::event::{CreateEventRequest, Event, EventWithPets};
use crate::models::pet::Pet;

pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Event>> {
    sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY event_date DESC, id DESC")
        .fetch_all(db)
        .await
}

pub async fn list_with_pets(db: &PgPool) -> sqlx::Result<Vec<EventWithPets>> {
    let events = list(db).await?;

    let mut result = Vec::with_capacity(events.len());
    for event in events {
        let pets = linked_pets(db, event.id).await?;
        result.push(EventWithPets { event, pets });
    }

    Ok(result)
}

pub async fn list_for_pet(db: &PgPool, pet_id: i64) -> sqlx::Result<Vec<Event>> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT e.* FROM events e
        JOIN event_pets ep ON ep.event_id = e.id
        WHERE ep.pet_id = $1
        ORDER BY e.event_date DESC, e.id DESC
        "#,
    )
    .bind(pet_id)
    .fetch_all(db)
    .await
}

pub async fn get(db: &PgPool, id: i64) -> sqlx::Result<Option<Event>> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn linked_pets(db: &PgPool, event_id: i64) -> sqlx::Result<Vec<Pet>> {
    sqlx::query_as::<_, Pet>(
        r#"
        SELECT p.* FROM pets p
        JOIN event_pets ep ON ep.pet_id = p.id
        WHERE ep.event_id = $1
        ORDER BY p.name ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(db)
    .await
}

/// Inserts the event and its pet links in one transaction; a bad pet id
/// rolls the whole thing back.
pub async fn create(db: &PgPool, body: &CreateEventRequest) -> sqlx::Result<EventWithPets> {
    let mut tx = db.begin().await?;

    let event = sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (title, category, notes, event_date, reminder_date, location)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&body.title)
    .bind(&body.category)
    .bind(&body.notes)
    .bind(body.event_date)
    .bind(body.reminder_date)
    .bind(&body.location)
    .fetch_one(&mut *tx)
    .await?;

    for pet_id in &body.pet_ids {
        sqlx::query(
            "INSERT INTO event_pets (event_id, pet_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(event.id)
        .bind(pet_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let pets = linked_pets(db, event.id).await?;
    Ok(EventWithPets { event, pets })
}

/// Join rows go first, then the event, so no link ever outlives its event.
pub async fn delete(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM event_pets WHERE event_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
