use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::event::{CreateEventRequest, Event, EventWithPets};
use crate::repo;
use crate::AppState;

pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<EventWithPets>>> {
    let events = repo::events::list_with_pets(&state.db).await?;
    Ok(Json(events))
}

pub async fn list_pet_events(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Vec<Event>>> {
    repo::pets::get(&state.db, pet_id)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    let events = repo::events::list_for_pet(&state.db, pet_id).await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> AppResult<Json<EventWithPets>> {
    let event = repo::events::get(&state.db, event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let pets = repo::events::linked_pets(&state.db, event.id).await?;
    Ok(Json(EventWithPets { event, pets }))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventWithPets>)> {
    body.validate()?;

    if body.pet_ids.is_empty() {
        return Err(AppError::Validation(
            "Event must be linked to at least one pet".into(),
        ));
    }

    let event = repo::events::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Idempotent: deleting an absent event is still a 204.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> AppResult<StatusCode> {
    repo::events::delete(&state.db, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
