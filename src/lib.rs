//! Live Resin Mixing Calculator Library
//!
//! Ratio and dilution calculators for cartridge formulation.

pub mod build_info;
pub mod mcp;
pub mod mixing;
pub mod models;
pub mod tools;
