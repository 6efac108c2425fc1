use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::vaccination::{
    CreateVaccinationRequest, UpdateVaccinationRequest, Vaccination, VaccinationWithStatus,
};
use crate::repo;
use crate::status;
use crate::AppState;

pub async fn list_pet_vaccinations(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Vec<VaccinationWithStatus>>> {
    repo::pets::get(&state.db, pet_id)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    let today = Utc::now().date_naive();
    let vaccinations = repo::vaccinations::list_for_pet(&state.db, pet_id).await?;

    let result = vaccinations
        .into_iter()
        .map(|vaccination| decorate(vaccination, today))
        .collect();

    Ok(Json(result))
}

pub async fn get_vaccination(
    State(state): State<AppState>,
    Path(vaccination_id): Path<i64>,
) -> AppResult<Json<Vaccination>> {
    let vaccination = repo::vaccinations::get(&state.db, vaccination_id)
        .await?
        .ok_or(AppError::NotFound("Vaccination not found".into()))?;

    Ok(Json(vaccination))
}

pub async fn create_vaccination(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    Json(body): Json<CreateVaccinationRequest>,
) -> AppResult<(StatusCode, Json<Vaccination>)> {
    body.validate()?;

    let vaccination = repo::vaccinations::create(&state.db, pet_id, &body).await?;
    Ok((StatusCode::CREATED, Json(vaccination)))
}

pub async fn update_vaccination(
    State(state): State<AppState>,
    Path(vaccination_id): Path<i64>,
    Json(body): Json<UpdateVaccinationRequest>,
) -> AppResult<Json<Vaccination>> {
    body.validate()?;

    let vaccination = repo::vaccinations::update(&state.db, vaccination_id, &body)
        .await?
        .ok_or(AppError::NotFound("Vaccination not found".into()))?;

    Ok(Json(vaccination))
}

pub async fn delete_vaccination(
    State(state): State<AppState>,
    Path(vaccination_id): Path<i64>,
) -> AppResult<StatusCode> {
    repo::vaccinations::delete(&state.db, vaccination_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn decorate(vaccination: Vaccination, today: chrono::NaiveDate) -> VaccinationWithStatus {
    let days_until_due = vaccination
        .next_due_on
        .map(|due| status::day_offset(due, today));

    VaccinationWithStatus {
        status: status::vaccination_status(vaccination.next_due_on, today),
        status_label: days_until_due.map(status::label),
        days_until_due,
        vaccination,
    }
}
