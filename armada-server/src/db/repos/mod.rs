//! Repositories over the four marine-experiments tables

pub mod experiments;
pub mod subjects;

pub use experiments::{CreatedExperiment, DeletedExperiment, ExperimentRecord, ExperimentRepo};
pub use subjects::{SubjectRecord, SubjectRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// The row existed moments ago but the mutation affected nothing
    #[error("mutation affected no rows: {resource} '{id}'")]
    Inconsistent { resource: &'static str, id: String },

    /// Type name passed enum validation but has no reference-table row
    #[error("unknown experiment type '{name}'")]
    UnknownType { name: String },
}
