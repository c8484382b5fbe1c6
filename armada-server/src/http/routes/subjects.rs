//! Subject endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{SubjectRecord, SubjectRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Subject response
#[derive(Serialize)]
pub struct SubjectResponse {
    pub subject_id: i32,
    pub subject_name: String,
    pub species_name: String,
    pub date_of_birth: String,
}

impl From<SubjectRecord> for SubjectResponse {
    fn from(s: SubjectRecord) -> Self {
        Self {
            subject_id: s.subject_id,
            subject_name: s.subject_name,
            species_name: s.species_name,
            date_of_birth: s.date_of_birth.format("%Y-%m-%d").to_string(),
        }
    }
}

/// GET /subject - list all subjects, most recently born first
async fn list_subjects(State(state): State<AppState>) -> Result<Json<Vec<SubjectResponse>>, ApiError> {
    let subjects = SubjectRepo::new(state.pool()).list().await?;
    Ok(Json(subjects.into_iter().map(SubjectResponse::from).collect()))
}

/// Subject routes
pub fn router() -> Router<AppState> {
    Router::new().route("/subject", get(list_subjects))
}
