//! resincalc Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Mixing instructions for AI assistants
pub const MIXING_INSTRUCTIONS: &str = r#"
# resincalc Mixing Instructions

This guide explains how to formulate cartridge batches with the resincalc tools.

## Overview

There are two independent calculators:
1. **ratio_check** - Split a batch of carts into distillate, live resin and terpene masses
2. **dilution_calc** - Estimate how much non-THC resin filler ends up in the final mix

Every parameter is optional. Omitted values fall back to the defaults below.

---

## ratio_check

| Parameter | Type | Constraint | Default |
|-----------|------|------------|---------|
| cart_count | integer | >= 1 | 43 |
| grams_per_cart | number | >= 0.1 | 4.0 |
| strain_count | integer | >= 1 | 5 |
| distillate_pct | integer | 0-100 | 60 |
| resin_pct | integer | 0-100 | 35 |
| terp_pct | integer | 0-100 | 5 |

**The three percentages MUST total exactly 100.** If they don't, the tool
returns a blocked response with `diff`:
- `diff > 0` - add that many percent across components
- `diff < 0` - remove that many percent across components

Ask the user which component to adjust. Never pick one yourself.

### Example
43 carts x 4.0 g, 5 strains, 60/35/5:
- Total Mix Weight: 172.00g (103.20g distillate, 60.20g resin, 8.60g terpenes)
- Each Strain Batch: 34.40g

---

## dilution_calc

| Parameter | Type | Constraint | Default |
|-----------|------|------------|---------|
| thc_pct | number | 0-100 | 60.0 |
| filler_pct | number | 0-100 | 40.0 |
| resin_used_pct | integer | 0-100 | 35 |
| batch_mass | number | >= 0.1 | 172.0 |
| extra_terp_pct | integer | 0-20 | 5 |

`filler_pct` is the terp sauce / waxes / lipids share of the live resin.
`thc_pct + filler_pct` may not exceed 100.

### Results
- **Final Terpene Content** - resin filler plus added terpenes, as % of the batch
- **Dilution Alone** - resin filler only, as % of the batch

---

## Terpene Guideline

Never exceed a 10% terpene mixing ratio. Both calculators attach a warning
when the result is above it. Call `terpene_info` for effects, vape
temperatures and boiling points.

---

## Formatting

The `report` lines are already rounded to two decimals. Show those to the
user; use `result` only when doing further math.
"#;

/// Runtime status of the resincalc service
#[derive(Debug, Clone, Serialize)]
pub struct CalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    pub ratio_checks: u64,
    pub dilution_calculations: u64,
    pub blocked_calculations: u64,
}

/// Which calculator ran, for the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    Ratio,
    Dilution,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    ratio_checks: u64,
    dilution_calculations: u64,
    blocked_calculations: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            ratio_checks: 0,
            dilution_calculations: 0,
            blocked_calculations: 0,
        }
    }

    /// Count one calculator invocation
    pub fn record(&mut self, calculation: Calculation, blocked: bool) {
        match calculation {
            Calculation::Ratio => self.ratio_checks += 1,
            Calculation::Dilution => self.dilution_calculations += 1,
        }
        if blocked {
            self.blocked_calculations += 1;
        }
    }

    pub fn get_status(&self) -> CalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            ratio_checks: self.ratio_checks,
            dilution_calculations: self.dilution_calculations,
            blocked_calculations: self.blocked_calculations,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut tracker = StatusTracker::new();
        tracker.record(Calculation::Ratio, false);
        tracker.record(Calculation::Ratio, true);
        tracker.record(Calculation::Dilution, false);

        let status = tracker.get_status();
        assert_eq!(status.ratio_checks, 2);
        assert_eq!(status.dilution_calculations, 1);
        assert_eq!(status.blocked_calculations, 1);
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_instructions_cover_both_calculators() {
        assert!(MIXING_INSTRUCTIONS.contains("ratio_check"));
        assert!(MIXING_INSTRUCTIONS.contains("dilution_calc"));
        assert!(MIXING_INSTRUCTIONS.contains("MUST total exactly 100"));
    }
}
