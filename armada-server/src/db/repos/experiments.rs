//! Experiment repository
//!
//! Carries the only non-trivial query in the system: the filtered listing,
//! whose optional predicates are assembled with `QueryBuilder` so every
//! value is bound, never spliced into the SQL text. The derived percentage
//! score is computed in SQL (`max_score` is NUMERIC, so the division is
//! exact) and the `score_over` predicate compares against the same rounded
//! expression the projection renders.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

use crate::models::{ExperimentFilter, NewExperiment};

use super::DbError;

/// Experiment row as projected by the listing query
#[derive(Debug, Clone, FromRow)]
pub struct ExperimentRecord {
    pub experiment_id: i32,
    pub subject_id: i32,
    pub species: String,
    pub experiment_date: NaiveDate,
    pub experiment_type: String,
    /// Derived percentage, already formatted ("85.00%")
    pub score: String,
}

/// Experiment row as stored, returned from insertion
#[derive(Debug, Clone, FromRow)]
pub struct CreatedExperiment {
    pub experiment_id: i32,
    pub subject_id: i32,
    pub experiment_type_id: i32,
    pub experiment_date: NaiveDate,
    pub score: i32,
}

/// Confirmation of a hard delete
#[derive(Debug, Clone, FromRow)]
pub struct DeletedExperiment {
    pub experiment_id: i32,
    pub experiment_date: NaiveDate,
}

/// Build the listing query for the given filter.
///
/// Starts from the four-table join and appends one AND-predicate per
/// present filter field, binding the value each time.
fn build_list_query(filter: &ExperimentFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT e.experiment_id, e.subject_id, sp.species_name AS species, \
         e.experiment_date, et.type_name AS experiment_type, \
         ROUND(e.score / et.max_score * 100, 2) || '%' AS score \
         FROM experiment e \
         JOIN subject s ON s.subject_id = e.subject_id \
         JOIN species sp ON sp.species_id = s.species_id \
         JOIN experiment_type et ON et.experiment_type_id = e.experiment_type_id \
         WHERE 1=1",
    );

    if let Some(kind) = filter.experiment_type {
        builder.push(" AND LOWER(et.type_name) = ");
        builder.push_bind(kind.as_str());
    }
    if let Some(threshold) = filter.score_over {
        builder.push(" AND ROUND(e.score / et.max_score * 100, 2) > ");
        builder.push_bind(threshold);
    }

    builder.push(" ORDER BY e.experiment_date DESC");
    builder
}

/// Experiment repository
pub struct ExperimentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExperimentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List experiments matching the filter, newest first.
    ///
    /// The filter is already validated; this never sees raw input.
    pub async fn list(&self, filter: &ExperimentFilter) -> Result<Vec<ExperimentRecord>, DbError> {
        let mut builder = build_list_query(filter);
        let experiments = builder
            .build_query_as::<ExperimentRecord>()
            .fetch_all(self.pool)
            .await?;

        Ok(experiments)
    }

    /// Insert one experiment, resolving the type id inside the same
    /// transaction as the INSERT.
    ///
    /// A type name that passed enum validation but has no reference row
    /// surfaces as `DbError::UnknownType`.
    pub async fn insert(&self, experiment: &NewExperiment) -> Result<CreatedExperiment, DbError> {
        let mut tx = self.pool.begin().await?;

        let type_row = sqlx::query(
            "SELECT experiment_type_id FROM experiment_type WHERE LOWER(type_name) = $1",
        )
        .bind(experiment.experiment_type.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let experiment_type_id: i32 = match type_row {
            Some(row) => row.get("experiment_type_id"),
            None => {
                return Err(DbError::UnknownType {
                    name: experiment.experiment_type.as_str().to_owned(),
                })
            }
        };

        let created = sqlx::query_as::<_, CreatedExperiment>(
            r#"
            INSERT INTO experiment (subject_id, experiment_type_id, experiment_date, score)
            VALUES ($1, $2, $3, $4)
            RETURNING experiment_id, subject_id, experiment_type_id, experiment_date, score
            "#,
        )
        .bind(experiment.subject_id)
        .bind(experiment_type_id)
        .bind(experiment.experiment_date)
        .bind(experiment.score)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Delete an experiment by id: existence check, then DELETE, then
    /// confirm a row was affected.
    ///
    /// The check and the delete are not isolated against a concurrent
    /// delete of the same id; losing that race surfaces as
    /// `DbError::Inconsistent` rather than a clean not-found.
    pub async fn delete(&self, experiment_id: i32) -> Result<DeletedExperiment, DbError> {
        let mut tx = self.pool.begin().await?;

        let existing =
            sqlx::query("SELECT experiment_id FROM experiment WHERE experiment_id = $1")
                .bind(experiment_id)
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            return Err(DbError::NotFound {
                resource: "experiment",
                id: experiment_id.to_string(),
            });
        }

        let deleted = sqlx::query_as::<_, DeletedExperiment>(
            r#"
            DELETE FROM experiment
            WHERE experiment_id = $1
            RETURNING experiment_id, experiment_date
            "#,
        )
        .bind(experiment_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::Inconsistent {
            resource: "experiment",
            id: experiment_id.to_string(),
        })?;

        tx.commit().await?;
        Ok(deleted)
    }
}
