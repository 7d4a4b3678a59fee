//! Ratio calculator
//!
//! Splits a batch of carts into distillate, live resin and terpene masses,
//! for the whole batch and per strain.

use super::error::{ValidationError, ValidationResult};
use super::limits::REQUIRED_RATIO_TOTAL;
use crate::models::{RatioInput, RatioOutput};

/// Compute batch and per-strain component masses
///
/// Field bounds are checked first, then the 100% rule. The sum must be
/// exactly 100; there is no tolerance since the percentages are integers.
/// Nothing is rounded; formatting to two decimals is left to the caller.
pub fn compute_ratio(input: &RatioInput) -> ValidationResult<RatioOutput> {
    input.validate_fields()?;

    let total = input.total_pct();
    if total != REQUIRED_RATIO_TOTAL {
        return Err(ValidationError::PercentageMismatch {
            total,
            diff: i64::from(REQUIRED_RATIO_TOTAL) - i64::from(total),
        });
    }

    let total_mass = f64::from(input.cart_count) * input.grams_per_cart;
    let strain_mass = total_mass / f64::from(input.strain_count);

    Ok(RatioOutput {
        total_mass,
        total_distillate: portion(total_mass, input.distillate_pct),
        total_resin: portion(total_mass, input.resin_pct),
        total_terpenes: portion(total_mass, input.terp_pct),
        strain_mass,
        strain_distillate: portion(strain_mass, input.distillate_pct),
        strain_resin: portion(strain_mass, input.resin_pct),
        strain_terpenes: portion(strain_mass, input.terp_pct),
    })
}

#[inline]
fn portion(mass: f64, pct: u32) -> f64 {
    mass * (f64::from(pct) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::ValidationErrorKind;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_default_batch() {
        let out = compute_ratio(&RatioInput::default()).unwrap();
        assert!((out.total_mass - 172.0).abs() < TOL);
        assert!((out.total_distillate - 103.2).abs() < TOL);
        assert!((out.total_resin - 60.2).abs() < TOL);
        assert!((out.total_terpenes - 8.6).abs() < TOL);
        assert!((out.strain_mass - 34.4).abs() < TOL);
        assert!((out.strain_distillate - 20.64).abs() < TOL);
        assert!((out.strain_resin - 12.04).abs() < TOL);
        assert!((out.strain_terpenes - 1.72).abs() < TOL);
    }

    #[test]
    fn test_shortfall_reports_diff() {
        let input = RatioInput {
            resin_pct: 30,
            ..RatioInput::default()
        };
        let err = compute_ratio(&input).unwrap_err();
        assert_eq!(err, ValidationError::PercentageMismatch { total: 95, diff: 5 });
        assert_eq!(err.correction(), "Add 5% more across components.");
    }

    #[test]
    fn test_excess_reports_negative_diff() {
        let input = RatioInput {
            distillate_pct: 70,
            ..RatioInput::default()
        };
        let err = compute_ratio(&input).unwrap_err();
        assert_eq!(err, ValidationError::PercentageMismatch { total: 110, diff: -10 });
        assert_eq!(err.correction(), "Remove 10% across components.");
    }

    #[test]
    fn test_components_sum_to_total() {
        for distillate in (0..=100).step_by(5) {
            for resin in (0..=(100 - distillate)).step_by(5) {
                let input = RatioInput {
                    cart_count: 17,
                    grams_per_cart: 0.7,
                    strain_count: 3,
                    distillate_pct: distillate,
                    resin_pct: resin,
                    terp_pct: 100 - distillate - resin,
                };
                let out = compute_ratio(&input).unwrap();
                let sum = out.total_distillate + out.total_resin + out.total_terpenes;
                assert!((sum - out.total_mass).abs() < 1e-9);
                let strain_sum = out.strain_distillate + out.strain_resin + out.strain_terpenes;
                assert!((strain_sum - out.strain_mass).abs() < 1e-9);
                assert!((out.strain_mass * 3.0 - out.total_mass).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_any_wrong_sum_is_mismatch() {
        for (d, r, t) in [(0, 0, 0), (33, 33, 33), (100, 1, 0), (100, 100, 100), (50, 49, 0)] {
            let input = RatioInput {
                distillate_pct: d,
                resin_pct: r,
                terp_pct: t,
                ..RatioInput::default()
            };
            match compute_ratio(&input) {
                Err(ValidationError::PercentageMismatch { total, diff }) => {
                    assert_eq!(total, d + r + t);
                    assert_eq!(diff, 100 - i64::from(d + r + t));
                }
                other => panic!("expected mismatch for {}/{}/{}, got {:?}", d, r, t, other),
            }
        }
    }

    #[test]
    fn test_field_bounds_checked_before_sum() {
        let input = RatioInput {
            strain_count: 0,
            resin_pct: 30,
            ..RatioInput::default()
        };
        let err = compute_ratio(&input).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn test_component_over_100_is_out_of_range() {
        let input = RatioInput {
            distillate_pct: 150,
            resin_pct: 0,
            terp_pct: 0,
            ..RatioInput::default()
        };
        let err = compute_ratio(&input).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn test_single_strain_single_component() {
        let input = RatioInput {
            cart_count: 1,
            grams_per_cart: 1.0,
            strain_count: 1,
            distillate_pct: 100,
            resin_pct: 0,
            terp_pct: 0,
        };
        let out = compute_ratio(&input).unwrap();
        assert_eq!(out.total_mass, 1.0);
        assert_eq!(out.strain_distillate, 1.0);
        assert_eq!(out.total_resin, 0.0);
    }
}
