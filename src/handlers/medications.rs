use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::medication::{
    CreateMedicationRequest, Medication, MedicationWithStatus, UpdateMedicationRequest,
};
use crate::repo;
use crate::status;
use crate::AppState;

pub async fn list_pet_medications(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> AppResult<Json<Vec<MedicationWithStatus>>> {
    repo::pets::get(&state.db, pet_id)
        .await?
        .ok_or(AppError::NotFound("Pet not found".into()))?;

    let medications = repo::medications::list_for_pet(&state.db, pet_id).await?;

    let result = medications
        .into_iter()
        .map(|medication| MedicationWithStatus {
            status: status::medication_status(medication.active),
            medication,
        })
        .collect();

    Ok(Json(result))
}

pub async fn get_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<i64>,
) -> AppResult<Json<Medication>> {
    let medication = repo::medications::get(&state.db, medication_id)
        .await?
        .ok_or(AppError::NotFound("Medication not found".into()))?;

    Ok(Json(medication))
}

pub async fn create_medication(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    Json(body): Json<CreateMedicationRequest>,
) -> AppResult<(StatusCode, Json<Medication>)> {
    body.validate()?;

    let medication = repo::medications::create(&state.db, pet_id, &body).await?;
    Ok((StatusCode::CREATED, Json(medication)))
}

pub async fn update_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<i64>,
    Json(body): Json<UpdateMedicationRequest>,
) -> AppResult<Json<Medication>> {
    body.validate()?;

    let medication = repo::medications::update(&state.db, medication_id, &body)
        .await?
        .ok_or(AppError::NotFound("Medication not found".into()))?;

    Ok(Json(medication))
}

pub async fn delete_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<i64>,
) -> AppResult<StatusCode> {
    repo::medications::delete(&state.db, medication_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
