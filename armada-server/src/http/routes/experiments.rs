//! Experiment endpoints
//!
//! Query-string and body values are validated here, before any repository
//! call; a validation failure executes zero SQL.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{CreatedExperiment, ExperimentRecord, ExperimentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidExperimentId, ValidJson};
use crate::http::server::AppState;
use crate::models::{ExperimentFilter, NewExperiment, ValidationError};

/// Listing filter query params, raw as they arrive on the wire
#[derive(Debug, Deserialize, Default)]
pub struct ListExperimentsParams {
    #[serde(rename = "type")]
    pub experiment_type: Option<String>,
    pub score_over: Option<String>,
}

impl ListExperimentsParams {
    /// Validate both params into a typed filter.
    ///
    /// `type` is lowercased into the closed three-value set; `score_over`
    /// must parse as an integer in [0, 100]. Non-numeric and out-of-range
    /// input produce the same error kind.
    pub fn into_filter(self) -> Result<ExperimentFilter, ValidationError> {
        let experiment_type = match self.experiment_type {
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| ValidationError::Invalid { field: "type" })?,
            ),
            None => None,
        };

        let score_over = match self.score_over {
            Some(raw) => {
                let threshold: i32 = raw
                    .parse()
                    .map_err(|_| ValidationError::Invalid { field: "score_over" })?;
                if !(0..=100).contains(&threshold) {
                    return Err(ValidationError::Invalid { field: "score_over" });
                }
                Some(threshold)
            }
            None => None,
        };

        Ok(ExperimentFilter {
            experiment_type,
            score_over,
        })
    }
}

/// Create experiment request, every field optional so that missing keys
/// are reported by name instead of as a deserialization failure
#[derive(Debug, Deserialize, Default)]
pub struct CreateExperimentRequest {
    pub subject_id: Option<i64>,
    pub experiment_type: Option<String>,
    pub score: Option<i64>,
    pub experiment_date: Option<String>,
}

impl CreateExperimentRequest {
    /// Validate into an insertable experiment, failing fast in order:
    /// required fields present, subject id positive, type in the closed
    /// set, score in range, date well-formed (defaulting to today).
    pub fn into_new_experiment(self) -> Result<NewExperiment, ValidationError> {
        let subject_id = self
            .subject_id
            .ok_or(ValidationError::Missing { field: "subject_id" })?;
        let type_raw = self
            .experiment_type
            .ok_or(ValidationError::Missing { field: "experiment_type" })?;
        let score = self
            .score
            .ok_or(ValidationError::Missing { field: "score" })?;

        let subject_id = i32::try_from(subject_id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(ValidationError::Invalid { field: "subject_id" })?;

        let experiment_type = type_raw
            .parse()
            .map_err(|_| ValidationError::Invalid { field: "experiment_type" })?;

        if !(0..=100).contains(&score) {
            return Err(ValidationError::Invalid { field: "score" });
        }

        let experiment_date = match self.experiment_date {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::Invalid { field: "experiment_date" })?,
            None => Utc::now().date_naive(),
        };

        Ok(NewExperiment {
            subject_id,
            experiment_type,
            score: score as i32,
            experiment_date,
        })
    }
}

/// Experiment response (list/read)
#[derive(Serialize)]
pub struct ExperimentResponse {
    pub experiment_id: i32,
    pub subject_id: i32,
    pub species: String,
    pub experiment_date: String,
    pub experiment_type: String,
    /// Derived percentage string, e.g. "85.00%"
    pub score: String,
}

impl From<ExperimentRecord> for ExperimentResponse {
    fn from(e: ExperimentRecord) -> Self {
        Self {
            experiment_id: e.experiment_id,
            subject_id: e.subject_id,
            species: e.species,
            experiment_date: e.experiment_date.format("%Y-%m-%d").to_string(),
            experiment_type: e.experiment_type,
            score: e.score,
        }
    }
}

/// Created experiment response, mirroring the stored row
#[derive(Serialize)]
pub struct CreatedExperimentResponse {
    pub experiment_id: i32,
    pub subject_id: i32,
    pub experiment_type_id: i32,
    pub experiment_date: String,
    pub score: i32,
}

impl From<CreatedExperiment> for CreatedExperimentResponse {
    fn from(e: CreatedExperiment) -> Self {
        Self {
            experiment_id: e.experiment_id,
            subject_id: e.subject_id,
            experiment_type_id: e.experiment_type_id,
            experiment_date: e.experiment_date.format("%Y-%m-%d").to_string(),
            score: e.score,
        }
    }
}

/// Deleted experiment response
#[derive(Serialize)]
pub struct DeletedExperimentResponse {
    pub experiment_id: i32,
    pub experiment_date: String,
}

/// GET /experiment - list experiments, optionally filtered
async fn list_experiments(
    State(state): State<AppState>,
    Query(params): Query<ListExperimentsParams>,
) -> Result<Json<Vec<ExperimentResponse>>, ApiError> {
    let filter = params.into_filter()?;
    let experiments = ExperimentRepo::new(state.pool()).list(&filter).await?;
    Ok(Json(
        experiments.into_iter().map(ExperimentResponse::from).collect(),
    ))
}

/// POST /experiment - record a new experiment
async fn create_experiment(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateExperimentRequest>,
) -> Result<(StatusCode, Json<CreatedExperimentResponse>), ApiError> {
    let experiment = req.into_new_experiment()?;
    let created = ExperimentRepo::new(state.pool()).insert(&experiment).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// DELETE /experiment/{id} - hard delete by id
async fn delete_experiment(
    State(state): State<AppState>,
    ValidExperimentId(id): ValidExperimentId,
) -> Result<Json<DeletedExperimentResponse>, ApiError> {
    let deleted = ExperimentRepo::new(state.pool()).delete(id).await?;

    Ok(Json(DeletedExperimentResponse {
        experiment_id: deleted.experiment_id,
        experiment_date: deleted.experiment_date.format("%Y-%m-%d").to_string(),
    }))
}

/// Experiment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/experiment", get(list_experiments).post(create_experiment))
        .route("/experiment/{id}", axum::routing::delete(delete_experiment))
}
