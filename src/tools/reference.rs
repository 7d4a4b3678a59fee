//! Reference Tools
//!
//! Terpene information table and credits.

use serde::Serialize;

use crate::mixing::MAX_RECOMMENDED_TERPENE_PCT;
use crate::models::{find_terpene, terpene_table, Terpene};

pub const CREDITS: &str = r#"
# Credits

Live Resin Mixing Calculator, formulas and terpene reference by Deaavh.

If this tool helped you, share it with others in the industry.
"#;

/// Response for terpene_info
#[derive(Debug, Serialize)]
pub struct TerpeneInfoResponse {
    pub guideline: String,
    pub terpenes: Vec<&'static Terpene>,
    pub count: usize,
}

/// Response when a requested terpene isn't in the table
#[derive(Debug, Serialize)]
pub struct TerpeneNotFoundResponse {
    pub error: String,
    pub available: Vec<&'static str>,
}

fn guideline() -> String {
    format!(
        "Never exceed a {}% terpene mixing ratio to avoid irritation or overpowering flavors.",
        MAX_RECOMMENDED_TERPENE_PCT
    )
}

/// Full table, or the single matching row when `name` is given
pub fn terpene_info(name: Option<&str>) -> Result<TerpeneInfoResponse, TerpeneNotFoundResponse> {
    let terpenes: Vec<&'static Terpene> = match name {
        Some(name) => match find_terpene(name) {
            Some(t) => vec![t],
            None => {
                return Err(TerpeneNotFoundResponse {
                    error: format!("Terpene not found: {}", name),
                    available: terpene_table().iter().map(|t| t.name).collect(),
                })
            }
        },
        None => terpene_table().iter().collect(),
    };

    Ok(TerpeneInfoResponse {
        guideline: guideline(),
        count: terpenes.len(),
        terpenes,
    })
}

/// Render the table as markdown, one row per terpene
pub fn terpene_markdown() -> String {
    let mut out = String::from(
        "| Terpene | Effects | Prominent Strains | Harshness | Vape Temp (°F) | Boiling Point (°F) |\n\
         |---|---|---|---|---|---|\n",
    );
    for t in terpene_table() {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {}-{} | {} |\n",
            t.name,
            t.effects,
            t.prominent_strains.join(", "),
            t.harshness.display_name(),
            t.vape_temp_f.0,
            t.vape_temp_f.1,
            t.boiling_point_f
        ));
    }
    out
}
