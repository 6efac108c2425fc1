use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod status;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

/// All routes, without the outer CORS/trace layers (main adds those; tests
/// drive this router directly).
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Pets
        .route("/api/pets", get(handlers::pets::list_pets))
        .route("/api/pets", post(handlers::pets::create_pet))
        .route("/api/pets/:id", get(handlers::pets::get_pet))
        .route("/api/pets/:id", patch(handlers::pets::update_pet))
        .route("/api/pets/:id", delete(handlers::pets::delete_pet))
        // Weight entries (append-only)
        .route("/api/pets/:id/weights", get(handlers::weights::list_pet_weights))
        .route("/api/weight-entries", get(handlers::weights::list_weight_entries))
        .route("/api/weight-entries", post(handlers::weights::create_weight_entry))
        // Events + pet links
        .route("/api/events", get(handlers::events::list_events))
        .route("/api/events", post(handlers::events::create_event))
        .route("/api/events/:id", get(handlers::events::get_event))
        .route("/api/events/:id", delete(handlers::events::delete_event))
        .route("/api/pets/:id/events", get(handlers::events::list_pet_events))
        // Vaccinations
        .route(
            "/api/pets/:id/vaccinations",
            get(handlers::vaccinations::list_pet_vaccinations),
        )
        .route(
            "/api/pets/:id/vaccinations",
            post(handlers::vaccinations::create_vaccination),
        )
        .route(
            "/api/vaccinations/:id",
            get(handlers::vaccinations::get_vaccination),
        )
        .route(
            "/api/vaccinations/:id",
            patch(handlers::vaccinations::update_vaccination),
        )
        .route(
            "/api/vaccinations/:id",
            delete(handlers::vaccinations::delete_vaccination),
        )
        // Medications
        .route(
            "/api/pets/:id/medications",
            get(handlers::medications::list_pet_medications),
        )
        .route(
            "/api/pets/:id/medications",
            post(handlers::medications::create_medication),
        )
        .route(
            "/api/medications/:id",
            get(handlers::medications::get_medication),
        )
        .route(
            "/api/medications/:id",
            patch(handlers::medications::update_medication),
        )
        .route(
            "/api/medications/:id",
            delete(handlers::medications::delete_medication),
        )
        // Reminders & dashboard
        .route("/api/reminders", get(handlers::reminders::list_reminders))
        .route("/api/dashboard", get(handlers::reminders::get_dashboard))
        .with_state(state)
}
