use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::pet::{CreatePetRequest, Pet, UpdatePetRequest};
use crate::repo;
use crate::AppState;

pub async fn list_pets(State(state): State<AppState>) -> AppResult<Json<Vec<Pet>>> {
    let pets = repo::pets::list(&state.db).await?;
    Ok(Json(pets))
}

pub async fn get_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Pet>> {
    let pet = repo::pets::get(&state.db, pet_id)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    Ok(Json(pet))
}

pub async fn create_pet(
    State(state): State<AppState>,
    Json(body): Json<CreatePetRequest>,
) -> AppResult<(StatusCode, Json<Pet>)> {
    body.validate()?;

    let pet = repo::pets::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

pub async fn update_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    Json(body): Json<UpdatePetRequest>,
) -> AppResult<Json<Pet>> {
    body.validate()?;

    let pet = repo::pets::update(&state.db, pet_id, &body)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    Ok(Json(pet))
}

/// Idempotent: a pet that is already gone still deletes silently.
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<StatusCode> {
    repo::pets::delete(&state.db, pet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
