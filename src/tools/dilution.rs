//! Dilution Calculator Tool
//!
//! Reports how much of the final mix is non-THC resin filler and the total
//! terpene content.

use serde::Serialize;

use super::{terpene_warning, CalculationBlockedResponse};
use crate::mixing::compute_dilution;
use crate::models::{DilutionInput, DilutionOutput};

/// Response for a successful dilution calculation
#[derive(Debug, Serialize)]
pub struct DilutionReport {
    pub input: DilutionInput,
    pub result: DilutionOutput,
    pub report: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Run the dilution calculator and build the tool response
pub fn calculate_dilution(input: DilutionInput) -> Result<DilutionReport, CalculationBlockedResponse> {
    match compute_dilution(&input) {
        Ok(result) => {
            tracing::debug!(
                batch_mass = input.batch_mass,
                final_terp_pct = result.final_terp_pct,
                "dilution computed"
            );
            let report = format_dilution_report(&input, &result);
            let warnings = terpene_warning("Final terpene content", result.final_terp_pct)
                .into_iter()
                .collect();
            Ok(DilutionReport {
                input,
                result,
                report,
                warnings,
            })
        }
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "dilution calculation blocked: {}", err);
            Err(CalculationBlockedResponse::from(&err))
        }
    }
}

pub fn format_dilution_report(input: &DilutionInput, result: &DilutionOutput) -> Vec<String> {
    vec![
        format!("Resin used: {:.2}g ({}%)", result.resin_mass, input.resin_used_pct),
        format!("Terp Sauce from Resin: {:.2}g", result.terp_from_resin),
        format!("Extra Terpenes added: {:.2}g", result.terp_from_added),
        format!("Total Terpenes in Final Batch: {:.2}g", result.total_terp_mass),
        format!("Final Terpene Content: {:.2}% of total mix", result.final_terp_pct),
        format!(
            "Terp Sauce (non-THC) Dilution Alone: {:.2}%",
            result.resin_dilution_pct
        ),
    ]
}
