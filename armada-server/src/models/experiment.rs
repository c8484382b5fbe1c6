//! Validated experiment inputs
//!
//! The query layer only ever sees these types; raw query-string and body
//! values are parsed and range-checked at the HTTP boundary.

use chrono::NaiveDate;

use super::ExperimentType;

/// Filter value for experiment listing
///
/// Both fields are optional; present fields combine with logical AND.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExperimentFilter {
    /// Restrict to one experiment type
    pub experiment_type: Option<ExperimentType>,

    /// Keep rows whose derived percentage score is strictly greater,
    /// already checked to be in [0, 100]
    pub score_over: Option<i32>,
}

impl ExperimentFilter {
    pub fn is_empty(&self) -> bool {
        self.experiment_type.is_none() && self.score_over.is_none()
    }
}

/// A fully validated experiment ready for insertion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExperiment {
    /// Positive id of an existing subject
    pub subject_id: i32,
    pub experiment_type: ExperimentType,
    /// Raw point value in [0, 100], independent of the type's max_score
    pub score: i32,
    pub experiment_date: NaiveDate,
}
