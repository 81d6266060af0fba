//! Error types for the risk and premium pipeline

use std::fmt;
use thiserror::Error;

/// Result type alias using RiskError
pub type Result<T> = std::result::Result<T, RiskError>;

/// Which reference table a lookup or validation failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Job,
    EducationLevel,
    EducationField,
    SchoolTier,
    CompanyType,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Job => "job",
            TableKind::EducationLevel => "education level",
            TableKind::EducationField => "education field",
            TableKind::SchoolTier => "school tier",
            TableKind::CompanyType => "company type",
        };
        f.write_str(name)
    }
}

/// Unified error type for evaluations and data loading
#[derive(Debug, Error)]
pub enum RiskError {
    /// Unknown category key. Every table rejects unknown keys, none falls back to 1.0.
    #[error("unknown {table} '{key}'")]
    KeyNotFound { table: TableKind, key: String },

    /// Malformed request value, rejected before any formula runs
    #[error("invalid input '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Parameter bundle or override outside its domain
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Reference data that would break the factor invariants
    #[error("invalid {table} entry '{key}': {reason}")]
    InvalidReference {
        table: TableKind,
        key: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RiskError {
    pub(crate) fn not_found(table: TableKind, key: &str) -> Self {
        RiskError::KeyNotFound {
            table,
            key: key.to_string(),
        }
    }

    pub(crate) fn input(field: &'static str, reason: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        RiskError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn reference(table: TableKind, key: &str, reason: impl Into<String>) -> Self {
        RiskError::InvalidReference {
            table,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RiskError::not_found(TableKind::SchoolTier, "Tier 9");
        assert_eq!(err.to_string(), "unknown school tier 'Tier 9'");

        let err = RiskError::input("coverage_percentage", "must be within [0, 100], got 120");
        assert_eq!(
            err.to_string(),
            "invalid input 'coverage_percentage': must be within [0, 100], got 120"
        );
    }
}
