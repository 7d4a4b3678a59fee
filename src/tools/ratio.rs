//! Ratio Checker Tool
//!
//! Validates a distillate / live resin / terpene split and reports batch and
//! per-strain masses.

use serde::Serialize;

use super::{terpene_warning, CalculationBlockedResponse};
use crate::mixing::compute_ratio;
use crate::models::{RatioInput, RatioOutput};

/// Response for a successful ratio check
#[derive(Debug, Serialize)]
pub struct RatioReport {
    pub input: RatioInput,
    pub result: RatioOutput,
    /// Human-readable lines, two decimals
    pub report: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run the ratio calculator and build the tool response
pub fn check_ratio(input: RatioInput) -> Result<RatioReport, CalculationBlockedResponse> {
    match compute_ratio(&input) {
        Ok(result) => {
            tracing::debug!(
                carts = input.cart_count,
                strains = input.strain_count,
                total_mass = result.total_mass,
                "ratio computed"
            );
            let report = format_ratio_report(&result);
            let warnings = terpene_warning("Terpene ratio", f64::from(input.terp_pct))
                .into_iter()
                .collect();
            Ok(RatioReport {
                input,
                result,
                report,
                warnings,
            })
        }
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "ratio check blocked: {}", err);
            Err(CalculationBlockedResponse::from(&err))
        }
    }
}

/// Render batch totals followed by the per-strain breakdown
pub fn format_ratio_report(result: &RatioOutput) -> Vec<String> {
    vec![
        format!("Total Mix Weight: {:.2}g", result.total_mass),
        format!("- Distillate: {:.2}g", result.total_distillate),
        format!("- Live Resin: {:.2}g", result.total_resin),
        format!("- Terpenes: {:.2}g", result.total_terpenes),
        format!("Each Strain Batch: {:.2}g", result.strain_mass),
        format!("- Distillate: {:.2}g", result.strain_distillate),
        format!("- Live Resin: {:.2}g", result.strain_resin),
        format!("- Terpenes: {:.2}g", result.strain_terpenes),
    ]
}
