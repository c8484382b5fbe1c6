//! Experiment type domain
//!
//! The reference table carries more columns (`max_score` in particular),
//! but the set of valid type names is closed and enforced here, before any
//! query runs.

use serde::{Deserialize, Serialize};

/// The three evaluation categories recognized by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentType {
    Intelligence,
    Obedience,
    Aggression,
}

impl ExperimentType {
    /// Lowercase name as stored in `experiment_type.type_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentType::Intelligence => "intelligence",
            ExperimentType::Obedience => "obedience",
            ExperimentType::Aggression => "aggression",
        }
    }
}

impl std::fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExperimentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intelligence" => Ok(ExperimentType::Intelligence),
            "obedience" => Ok(ExperimentType::Obedience),
            "aggression" => Ok(ExperimentType::Aggression),
            _ => Err(format!("unknown experiment type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase() {
        assert_eq!(
            "intelligence".parse::<ExperimentType>().unwrap(),
            ExperimentType::Intelligence
        );
        assert_eq!(
            "obedience".parse::<ExperimentType>().unwrap(),
            ExperimentType::Obedience
        );
        assert_eq!(
            "aggression".parse::<ExperimentType>().unwrap(),
            ExperimentType::Aggression
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Obedience".parse::<ExperimentType>().unwrap(),
            ExperimentType::Obedience
        );
        assert_eq!(
            "AGGRESSION".parse::<ExperimentType>().unwrap(),
            ExperimentType::Aggression
        );
    }

    #[test]
    fn rejects_unknown_types() {
        assert!("curiosity".parse::<ExperimentType>().is_err());
        assert!("".parse::<ExperimentType>().is_err());
        assert!("intelligence ".parse::<ExperimentType>().is_err());
    }

    #[test]
    fn display_matches_stored_name() {
        assert_eq!(ExperimentType::Intelligence.to_string(), "intelligence");
        assert_eq!(ExperimentType::Obedience.as_str(), "obedience");
    }
}
