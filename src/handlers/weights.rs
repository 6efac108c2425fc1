use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::weight::{CreateWeightEntryRequest, WeightEntry, WeightEntryWithPet};
use crate::repo;
use crate::AppState;

pub async fn list_pet_weights(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Vec<WeightEntry>>> {
    repo::pets::get(&state.db, pet_id)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    let entries = repo::weights::list_for_pet(&state.db, pet_id).await?;
    Ok(Json(entries))
}

pub async fn list_weight_entries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WeightEntryWithPet>>> {
    let entries = repo::weights::list_with_pet(&state.db).await?;
    Ok(Json(entries))
}

/// Append-only: entries are never edited, a correction is a new entry.
/// A missing pet surfaces as the store's FK violation.
pub async fn create_weight_entry(
    State(state): State<AppState>,
    Json(body): Json<CreateWeightEntryRequest>,
) -> AppResult<(StatusCode, Json<WeightEntry>)> {
    body.validate()?;

    let recorded_on = body.recorded_on.unwrap_or_else(|| Utc::now().date_naive());
    let entry = repo::weights::create(&state.db, &body, recorded_on).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}
