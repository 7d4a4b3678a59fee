//! Mixing calculation module
//!
//! Ratio and dilution arithmetic for cartridge batches, plus input limits.

pub mod dilution;
pub mod error;
pub mod limits;
pub mod ratio;

pub use dilution::compute_dilution;
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use limits::MAX_RECOMMENDED_TERPENE_PCT;
pub use ratio::compute_ratio;
