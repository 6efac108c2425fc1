use axum::{extract::State, Json};
use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::repo;
use crate::status::{
    self, DueStatus, DASHBOARD_WINDOW_DAYS, REMINDER_LOOKAHEAD_DAYS, REMINDER_LOOKBACK_DAYS,
};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ReminderItem {
    pub kind: ReminderKind,
    pub id: i64,
    pub title: String,
    pub pet_names: Vec<String>,
    pub due_on: NaiveDate,
    pub days_until_due: i64,
    pub status: DueStatus,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Event,
    Vaccination,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub pet_count: i64,
    pub active_medication_count: i64,
    pub upcoming_event_count: i64,
    pub overdue_reminder_count: i64,
    pub vaccinations_due_soon: i64,
}

/// Merged reminder feed: events (by reminder date, falling back to event
/// date) and vaccinations with a next-due date, most overdue first.
/// Medications are excluded — their status is flag-governed, not
/// date-governed.
pub async fn list_reminders(State(state): State<AppState>) -> AppResult<Json<Vec<ReminderItem>>> {
    let today = Utc::now().date_naive();
    let start = today - Duration::days(REMINDER_LOOKBACK_DAYS);
    let end = today + Duration::days(REMINDER_LOOKAHEAD_DAYS);

    let mut items = Vec::new();

    for event in repo::reminders::events_due_between(&state.db, start, end).await? {
        let due_on = status::event_due_date(event.event_date, event.reminder_date);
        let offset = status::day_offset(due_on, today);
        let pets = repo::events::linked_pets(&state.db, event.id).await?;

        items.push(ReminderItem {
            kind: ReminderKind::Event,
            id: event.id,
            title: event.title,
            pet_names: pets.into_iter().map(|p| p.name).collect(),
            due_on,
            days_until_due: offset,
            status: status::classify(offset),
            label: status::label(offset),
        });
    }

    for due in repo::reminders::vaccinations_due_between(&state.db, start, end).await? {
        // Window scan filters on next_due_on, so it is always present here.
        let Some(due_on) = due.vaccination.next_due_on else {
            continue;
        };
        let offset = status::day_offset(due_on, today);

        items.push(ReminderItem {
            kind: ReminderKind::Vaccination,
            id: due.vaccination.id,
            title: due.vaccination.name,
            pet_names: vec![due.pet_name],
            due_on,
            days_until_due: offset,
            status: status::classify(offset),
            label: status::label(offset),
        });
    }

    items.sort_by_key(|item| item.days_until_due);

    Ok(Json(items))
}

pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let today = Utc::now().date_naive();
    let horizon = today + Duration::days(DASHBOARD_WINDOW_DAYS);

    let events = repo::events::list(&state.db).await?;
    let upcoming_event_count = events
        .iter()
        .filter(|e| status::event_is_upcoming(e.event_date, today))
        .count() as i64;
    let overdue_reminder_count = events
        .iter()
        .filter(|e| status::event_is_overdue(e.event_date, e.reminder_date, today))
        .count() as i64;

    let summary = DashboardSummary {
        pet_count: repo::reminders::count_pets(&state.db).await?,
        active_medication_count: repo::reminders::count_active_medications(&state.db).await?,
        upcoming_event_count,
        overdue_reminder_count,
        vaccinations_due_soon: repo::reminders::count_vaccinations_due_between(
            &state.db, today, horizon,
        )
        .await?,
    };

    Ok(Json(summary))
}
