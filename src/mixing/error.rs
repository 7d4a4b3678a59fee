//! Validation errors for the mixing calculators

use serde::Serialize;
use thiserror::Error;

/// Why a calculation was refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Distillate, resin and terpene percentages don't add up to 100
    #[error("Ratios must total 100%. Your current total is {total}%.")]
    PercentageMismatch {
        total: u32,
        /// 100 - total; positive is a shortfall, negative an excess
        diff: i64,
    },

    /// THC plus filler claims more than the whole resin
    #[error("Resin composition exceeds 100% ({total}%). Please adjust.")]
    CompositionExceeds100 { total: f64 },

    #[error("{field} must be {requirement} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        requirement: String,
    },
}

/// Discriminant of [`ValidationError`], used in tool responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    PercentageMismatch,
    CompositionExceeds100,
    OutOfRange,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::PercentageMismatch { .. } => ValidationErrorKind::PercentageMismatch,
            ValidationError::CompositionExceeds100 { .. } => {
                ValidationErrorKind::CompositionExceeds100
            }
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
        }
    }

    /// What the user should change to get a result
    pub fn correction(&self) -> String {
        match self {
            ValidationError::PercentageMismatch { diff, .. } if *diff > 0 => {
                format!("Add {}% more across components.", diff)
            }
            ValidationError::PercentageMismatch { diff, .. } => {
                format!("Remove {}% across components.", -diff)
            }
            ValidationError::CompositionExceeds100 { .. } => {
                "Reduce THC or filler so the resin composition totals at most 100%.".to_string()
            }
            ValidationError::OutOfRange {
                field, requirement, ..
            } => format!("Set {} to {}.", field, requirement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_shortfall_message() {
        let err = ValidationError::PercentageMismatch { total: 95, diff: 5 };
        assert_eq!(err.kind(), ValidationErrorKind::PercentageMismatch);
        assert_eq!(err.to_string(), "Ratios must total 100%. Your current total is 95%.");
        assert_eq!(err.correction(), "Add 5% more across components.");
    }

    #[test]
    fn test_mismatch_excess_message() {
        let err = ValidationError::PercentageMismatch { total: 110, diff: -10 };
        assert_eq!(err.correction(), "Remove 10% across components.");
    }

    #[test]
    fn test_composition_message() {
        let err = ValidationError::CompositionExceeds100 { total: 110.0 };
        assert_eq!(err.kind(), ValidationErrorKind::CompositionExceeds100);
        assert!(err.to_string().contains("(110%)"));
    }

    #[test]
    fn test_out_of_range_correction_names_field() {
        let err = ValidationError::OutOfRange {
            field: "strain_count",
            value: 0.0,
            requirement: "at least 1".to_string(),
        };
        assert_eq!(err.correction(), "Set strain_count to at least 1.");
    }
}
