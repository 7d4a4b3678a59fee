//! Data models
//!
//! Input and output records for the calculators, and the terpene reference.

mod dilution;
mod ratio;
mod terpene;

pub use dilution::{DilutionInput, DilutionOutput};
pub use ratio::{RatioInput, RatioOutput};
pub use terpene::{find_terpene, terpene_table, Harshness, Terpene};
