//! Dilution calculator records
//!
//! Resin composition and batch details in, terpene masses and shares out.

use serde::{Deserialize, Serialize};

use crate::mixing::limits::{
    check_max_u32, check_min_f64, check_range_f64, MAX_EXTRA_TERP_PCT,
    MAX_RESIN_COMPOSITION_PCT, MAX_RESIN_USED_PCT, MIN_BATCH_MASS,
};
use crate::mixing::ValidationResult;

/// Inputs for the dilution estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionInput {
    /// THC share of the live resin
    pub thc_pct: f64,
    /// Terp sauce / waxes / lipids share of the live resin
    pub filler_pct: f64,
    /// Share of the batch that is live resin
    pub resin_used_pct: u32,
    /// Final batch mass in grams
    pub batch_mass: f64,
    /// Terpenes added on top, as a share of the batch
    pub extra_terp_pct: u32,
}

impl Default for DilutionInput {
    fn default() -> Self {
        Self {
            thc_pct: 60.0,
            filler_pct: 40.0,
            resin_used_pct: 35,
            batch_mass: 172.0,
            extra_terp_pct: 5,
        }
    }
}

impl DilutionInput {
    /// THC plus filler
    pub fn composition_total(&self) -> f64 {
        self.thc_pct + self.filler_pct
    }

    /// Check each field against its bounds (not the composition rule)
    pub fn validate_fields(&self) -> ValidationResult<()> {
        check_range_f64("thc_pct", self.thc_pct, 0.0, MAX_RESIN_COMPOSITION_PCT)?;
        check_range_f64("filler_pct", self.filler_pct, 0.0, MAX_RESIN_COMPOSITION_PCT)?;
        check_max_u32("resin_used_pct", self.resin_used_pct, MAX_RESIN_USED_PCT)?;
        check_min_f64("batch_mass", self.batch_mass, MIN_BATCH_MASS)?;
        check_max_u32("extra_terp_pct", self.extra_terp_pct, MAX_EXTRA_TERP_PCT)?;
        Ok(())
    }
}

/// Resulting masses (grams) and percentages of the final batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DilutionOutput {
    pub resin_mass: f64,
    pub terp_from_resin: f64,
    pub terp_from_added: f64,
    pub total_terp_mass: f64,
    pub final_terp_pct: f64,
    pub resin_dilution_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let input = DilutionInput::default();
        assert_eq!(input.composition_total(), 100.0);
        assert_eq!(input.batch_mass, 172.0);
        assert!(input.validate_fields().is_ok());
    }

    #[test]
    fn test_validate_fields_rejects_extra_terps_over_20() {
        let input = DilutionInput {
            extra_terp_pct: 21,
            ..DilutionInput::default()
        };
        let err = input.validate_fields().unwrap_err();
        assert!(err.to_string().starts_with("extra_terp_pct"));
    }

    #[test]
    fn test_validate_fields_rejects_zero_batch() {
        let input = DilutionInput {
            batch_mass: 0.0,
            ..DilutionInput::default()
        };
        assert!(input.validate_fields().is_err());
    }

    #[test]
    fn test_validate_fields_allows_over_composition() {
        let input = DilutionInput {
            thc_pct: 70.0,
            ..DilutionInput::default()
        };
        assert!(input.validate_fields().is_ok());
        assert_eq!(input.composition_total(), 110.0);
    }
}
