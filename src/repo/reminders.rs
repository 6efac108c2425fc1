//! Date-window scans backing the reminders feed and the dashboard.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::event::Event;
use crate::models::vaccination::VaccinationWithPet;

/// Events whose driving date (reminder date when set, event date
/// otherwise) falls inside the window, soonest first.
pub async fn events_due_between(
    db: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> sqlx::Result<Vec<Event>> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT * FROM events
        WHERE COALESCE(reminder_date, event_date) BETWEEN $1 AND $2
        ORDER BY COALESCE(reminder_date, event_date) ASC, id ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn vaccinations_due_between(
    db: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> sqlx::Result<Vec<VaccinationWithPet>> {
    sqlx::query_as::<_, VaccinationWithPet>(
        r#"
        SELECT v.*, p.name AS pet_name
        FROM vaccinations v
        JOIN pets p ON p.id = v.pet_id
        WHERE v.next_due_on BETWEEN $1 AND $2
        ORDER BY v.next_due_on ASC, v.id ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn count_pets(db: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pets")
        .fetch_one(db)
        .await
}

pub async fn count_active_medications(db: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM medications WHERE active = TRUE")
        .fetch_one(db)
        .await
}

pub async fn count_vaccinations_due_between(
    db: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM vaccinations WHERE next_due_on BETWEEN $1 AND $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(db)
    .await
}
