//! resincalc Tools module
//!
//! MCP tool implementations for the mixing calculator.

pub mod dilution;
pub mod ratio;
pub mod reference;
pub mod status;

use serde::Serialize;

use crate::mixing::{ValidationError, ValidationErrorKind};

/// Response when the inputs can't produce a result
#[derive(Debug, Serialize)]
pub struct CalculationBlockedResponse {
    pub error: String,
    pub kind: ValidationErrorKind,
    pub correction: String,
    /// Offending total (percentage sum or resin composition)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Percent to add (positive) or remove (negative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<i64>,
}

impl From<&ValidationError> for CalculationBlockedResponse {
    fn from(err: &ValidationError) -> Self {
        let (total, diff) = match err {
            ValidationError::PercentageMismatch { total, diff } => {
                (Some(f64::from(*total)), Some(*diff))
            }
            ValidationError::CompositionExceeds100 { total } => (Some(*total), None),
            ValidationError::OutOfRange { .. } => (None, None),
        };
        Self {
            error: err.to_string(),
            kind: err.kind(),
            correction: err.correction(),
            total,
            diff,
        }
    }
}

/// Advisory line for a terpene share above the recommended maximum
pub(crate) fn terpene_warning(label: &str, pct: f64) -> Option<String> {
    use crate::mixing::MAX_RECOMMENDED_TERPENE_PCT;

    if pct > MAX_RECOMMENDED_TERPENE_PCT {
        Some(format!(
            "{} of {:.2}% exceeds the recommended {}% maximum; expect irritation or overpowering flavor.",
            label, pct, MAX_RECOMMENDED_TERPENE_PCT
        ))
    } else {
        None
    }
}
