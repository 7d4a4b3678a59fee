//! Ratio checker records
//!
//! Batch size and component split in, total and per-strain masses out.

use serde::{Deserialize, Serialize};

use crate::mixing::limits::{
    check_max_u32, check_min_f64, check_min_u32, MAX_COMPONENT_PCT, MIN_CART_COUNT,
    MIN_GRAMS_PER_CART, MIN_STRAIN_COUNT,
};
use crate::mixing::ValidationResult;

/// Inputs for a cartridge batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioInput {
    pub cart_count: u32,
    pub grams_per_cart: f64,
    pub strain_count: u32,
    pub distillate_pct: u32,
    pub resin_pct: u32,
    pub terp_pct: u32,
}

impl Default for RatioInput {
    fn default() -> Self {
        Self {
            cart_count: 43,
            grams_per_cart: 4.0,
            strain_count: 5,
            distillate_pct: 60,
            resin_pct: 35,
            terp_pct: 5,
        }
    }
}

impl RatioInput {
    /// Sum of the three component percentages
    pub fn total_pct(&self) -> u32 {
        self.distillate_pct + self.resin_pct + self.terp_pct
    }

    /// Check each field against its bounds (not the 100% rule)
    pub fn validate_fields(&self) -> ValidationResult<()> {
        check_min_u32("cart_count", self.cart_count, MIN_CART_COUNT)?;
        check_min_f64("grams_per_cart", self.grams_per_cart, MIN_GRAMS_PER_CART)?;
        check_min_u32("strain_count", self.strain_count, MIN_STRAIN_COUNT)?;
        check_max_u32("distillate_pct", self.distillate_pct, MAX_COMPONENT_PCT)?;
        check_max_u32("resin_pct", self.resin_pct, MAX_COMPONENT_PCT)?;
        check_max_u32("terp_pct", self.terp_pct, MAX_COMPONENT_PCT)?;
        Ok(())
    }
}

/// Masses (grams) for the whole batch and for one strain's share
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatioOutput {
    pub total_mass: f64,
    pub total_distillate: f64,
    pub total_resin: f64,
    pub total_terpenes: f64,
    pub strain_mass: f64,
    pub strain_distillate: f64,
    pub strain_resin: f64,
    pub strain_terpenes: f64,
}
