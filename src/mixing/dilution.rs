//! Dilution calculator
//!
//! Estimates how much of a batch is non-THC resin filler and what the final
//! terpene concentration is once extra terpenes are added.

use super::error::{ValidationError, ValidationResult};
use super::limits::MAX_RESIN_COMPOSITION_PCT;
use crate::models::{DilutionInput, DilutionOutput};

/// Compute terpene masses and shares for a batch
///
/// The resin's filler (terp sauce, waxes, lipids) is counted as terpene
/// mass. THC plus filler may be below 100; the rest of the resin is ignored.
pub fn compute_dilution(input: &DilutionInput) -> ValidationResult<DilutionOutput> {
    input.validate_fields()?;

    let total = input.composition_total();
    if total > MAX_RESIN_COMPOSITION_PCT {
        return Err(ValidationError::CompositionExceeds100 { total });
    }

    let batch_mass = input.batch_mass;
    let resin_mass = batch_mass * f64::from(input.resin_used_pct) / 100.0;
    let terp_from_resin = resin_mass * input.filler_pct / 100.0;
    let terp_from_added = batch_mass * f64::from(input.extra_terp_pct) / 100.0;
    let total_terp_mass = terp_from_resin + terp_from_added;

    Ok(DilutionOutput {
        resin_mass,
        terp_from_resin,
        terp_from_added,
        total_terp_mass,
        final_terp_pct: total_terp_mass / batch_mass * 100.0,
        resin_dilution_pct: terp_from_resin / batch_mass * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::ValidationErrorKind;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_default_batch() {
        let out = compute_dilution(&DilutionInput::default()).unwrap();
        assert!((out.resin_mass - 60.2).abs() < TOL);
        assert!((out.terp_from_resin - 24.08).abs() < TOL);
        assert!((out.terp_from_added - 8.6).abs() < TOL);
        assert!((out.total_terp_mass - 32.68).abs() < TOL);
        assert!((out.final_terp_pct - 19.0).abs() < TOL);
        assert!((out.resin_dilution_pct - 14.0).abs() < TOL);
    }

    #[test]
    fn test_composition_over_100() {
        let input = DilutionInput {
            thc_pct: 70.0,
            filler_pct: 40.0,
            ..DilutionInput::default()
        };
        let err = compute_dilution(&input).unwrap_err();
        assert_eq!(err, ValidationError::CompositionExceeds100 { total: 110.0 });
    }

    #[test]
    fn test_composition_exactly_100_is_allowed() {
        let input = DilutionInput {
            thc_pct: 100.0,
            filler_pct: 0.0,
            ..DilutionInput::default()
        };
        let out = compute_dilution(&input).unwrap();
        assert_eq!(out.terp_from_resin, 0.0);
        assert_eq!(out.resin_dilution_pct, 0.0);
    }

    #[test]
    fn test_composition_under_100_is_allowed() {
        let input = DilutionInput {
            thc_pct: 50.0,
            filler_pct: 20.0,
            ..DilutionInput::default()
        };
        assert!(compute_dilution(&input).is_ok());
    }

    #[test]
    fn test_dilution_never_exceeds_final_terp_pct() {
        for filler in (0..=100u32).step_by(10) {
            for resin_used in (0..=100).step_by(10) {
                for extra in 0..=20 {
                    let input = DilutionInput {
                        thc_pct: 100.0 - f64::from(filler),
                        filler_pct: f64::from(filler),
                        resin_used_pct: resin_used,
                        batch_mass: 37.5,
                        extra_terp_pct: extra,
                    };
                    let out = compute_dilution(&input).unwrap();
                    assert!(out.resin_dilution_pct <= out.final_terp_pct);
                    assert!(out.total_terp_mass <= input.batch_mass * 1.2 + TOL);
                }
            }
        }
    }

    #[test]
    fn test_every_over_composition_is_rejected() {
        for (thc, filler) in [(100.0, 0.5), (50.5, 50.0), (100.0, 100.0), (99.9, 0.2)] {
            let input = DilutionInput {
                thc_pct: thc,
                filler_pct: filler,
                ..DilutionInput::default()
            };
            let err = compute_dilution(&input).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::CompositionExceeds100);
        }
    }

    #[test]
    fn test_bad_batch_mass_is_out_of_range() {
        for mass in [0.0, -1.0, f64::NAN] {
            let input = DilutionInput {
                batch_mass: mass,
                ..DilutionInput::default()
            };
            let err = compute_dilution(&input).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
        }
    }
}
