//! Input limits and range checks
//!
//! Field bounds for both calculators and the helpers that enforce them.

use super::error::{ValidationError, ValidationResult};

// ============================================================================
// Ratio Calculator Limits
// ============================================================================

/// Minimum number of carts in a batch
pub const MIN_CART_COUNT: u32 = 1;
/// Minimum fill per cart (grams)
pub const MIN_GRAMS_PER_CART: f64 = 0.1;
/// Minimum number of strains the batch is split across
pub const MIN_STRAIN_COUNT: u32 = 1;
/// Upper bound for any single component percentage
pub const MAX_COMPONENT_PCT: u32 = 100;
/// Required sum of the three component percentages
pub const REQUIRED_RATIO_TOTAL: u32 = 100;

// ============================================================================
// Dilution Calculator Limits
// ============================================================================

/// Upper bound for THC and filler percentages of the resin
pub const MAX_RESIN_COMPOSITION_PCT: f64 = 100.0;
/// Upper bound for the share of the batch that is live resin
pub const MAX_RESIN_USED_PCT: u32 = 100;
/// Minimum total batch mass (grams)
pub const MIN_BATCH_MASS: f64 = 0.1;
/// Upper bound for extra terpenes added on top of the resin
pub const MAX_EXTRA_TERP_PCT: u32 = 20;

// ============================================================================
// Advisory
// ============================================================================

/// Terpene share above which the mix gets harsh or overpowering
pub const MAX_RECOMMENDED_TERPENE_PCT: f64 = 10.0;

// ============================================================================
// Checks
// ============================================================================

/// Require an integer field to be at least `min`
pub fn check_min_u32(field: &'static str, value: u32, min: u32) -> ValidationResult<()> {
    if value < min {
        return Err(ValidationError::OutOfRange {
            field,
            value: f64::from(value),
            requirement: format!("at least {}", min),
        });
    }
    Ok(())
}

/// Require an integer field to be at most `max`
pub fn check_max_u32(field: &'static str, value: u32, max: u32) -> ValidationResult<()> {
    if value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value: f64::from(value),
            requirement: format!("between 0 and {}", max),
        });
    }
    Ok(())
}

/// Require a real field to be finite and at least `min`
pub fn check_min_f64(field: &'static str, value: f64, min: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < min {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            requirement: format!("a finite number of at least {}", min),
        });
    }
    Ok(())
}

/// Require a real field to lie in `[min, max]`; NaN is rejected
pub fn check_range_f64(field: &'static str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            requirement: format!("between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::ValidationErrorKind;

    #[test]
    fn test_check_min_u32() {
        assert!(check_min_u32("cart_count", 1, MIN_CART_COUNT).is_ok());
        let err = check_min_u32("cart_count", 0, MIN_CART_COUNT).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
        assert!(err.to_string().contains("cart_count"));
    }

    #[test]
    fn test_check_max_u32() {
        assert!(check_max_u32("extra_terp_pct", 20, MAX_EXTRA_TERP_PCT).is_ok());
        assert!(check_max_u32("extra_terp_pct", 21, MAX_EXTRA_TERP_PCT).is_err());
    }

    #[test]
    fn test_check_min_f64_rejects_non_finite() {
        assert!(check_min_f64("batch_mass", 0.1, MIN_BATCH_MASS).is_ok());
        assert!(check_min_f64("batch_mass", 0.0, MIN_BATCH_MASS).is_err());
        assert!(check_min_f64("batch_mass", f64::NAN, MIN_BATCH_MASS).is_err());
        assert!(check_min_f64("batch_mass", f64::INFINITY, MIN_BATCH_MASS).is_err());
    }

    #[test]
    fn test_check_range_f64() {
        assert!(check_range_f64("thc_pct", 0.0, 0.0, 100.0).is_ok());
        assert!(check_range_f64("thc_pct", 100.0, 0.0, 100.0).is_ok());
        assert!(check_range_f64("thc_pct", -0.5, 0.0, 100.0).is_err());
        assert!(check_range_f64("thc_pct", 100.1, 0.0, 100.0).is_err());
        assert!(check_range_f64("thc_pct", f64::NAN, 0.0, 100.0).is_err());
    }
}
