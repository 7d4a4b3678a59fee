//! Terpene reference data
//!
//! Common cannabis terpenes with their effects and vaporization temperatures.

use serde::{Deserialize, Serialize};

/// How harsh a terpene feels on inhale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harshness {
    Low,
    Moderate,
    High,
}

impl Harshness {
    pub fn display_name(&self) -> &'static str {
        match self {
            Harshness::Low => "Low",
            Harshness::Moderate => "Moderate",
            Harshness::High => "High",
        }
    }
}

/// One row of the terpene reference table
#[derive(Debug, Clone, Serialize)]
pub struct Terpene {
    pub name: &'static str,
    pub effects: &'static str,
    pub prominent_strains: &'static [&'static str],
    pub harshness: Harshness,
    /// Recommended vape temperature range (°F), low then high
    pub vape_temp_f: (u16, u16),
    pub boiling_point_f: u16,
}

const TERPENES: &[Terpene] = &[
    Terpene {
        name: "Myrcene",
        effects: "Relaxing, sedative, anti-inflammatory",
        prominent_strains: &["OG Kush", "Blue Dream", "Granddaddy Purple"],
        harshness: Harshness::Low,
        vape_temp_f: (330, 340),
        boiling_point_f: 332,
    },
    Terpene {
        name: "Limonene",
        effects: "Uplifting, stress-relief, anti-anxiety",
        prominent_strains: &["Super Lemon Haze", "Durban Poison"],
        harshness: Harshness::Moderate,
        vape_temp_f: (340, 350),
        boiling_point_f: 348,
    },
    Terpene {
        name: "Caryophyllene",
        effects: "Anti-inflammatory, pain relief, spicy",
        prominent_strains: &["Girl Scout Cookies", "Bubba Kush"],
        harshness: Harshness::High,
        vape_temp_f: (350, 360),
        boiling_point_f: 356,
    },
    Terpene {
        name: "Pinene",
        effects: "Alertness, memory retention, anti-inflammatory",
        prominent_strains: &["Jack Herer", "Pineapple Express"],
        harshness: Harshness::Moderate,
        vape_temp_f: (310, 320),
        boiling_point_f: 311,
    },
    Terpene {
        name: "Terpinolene",
        effects: "Uplifting, antioxidant, floral",
        prominent_strains: &["XJ-13", "Orange Cookies"],
        harshness: Harshness::Low,
        vape_temp_f: (360, 370),
        boiling_point_f: 365,
    },
    Terpene {
        name: "Linalool",
        effects: "Calming, anti-anxiety, floral",
        prominent_strains: &["Lavender", "Amnesia Haze"],
        harshness: Harshness::Low,
        vape_temp_f: (380, 390),
        boiling_point_f: 388,
    },
    Terpene {
        name: "Humulene",
        effects: "Anti-inflammatory, appetite suppressant",
        prominent_strains: &["White Widow", "Sour Diesel"],
        harshness: Harshness::Moderate,
        vape_temp_f: (390, 400),
        boiling_point_f: 396,
    },
    Terpene {
        name: "Ocimene",
        effects: "Antiviral, decongestant, sweet",
        prominent_strains: &["Strawberry Cough", "Clementine"],
        harshness: Harshness::Low,
        vape_temp_f: (320, 330),
        boiling_point_f: 329,
    },
];

/// The full reference table, in display order
pub fn terpene_table() -> &'static [Terpene] {
    TERPENES
}

/// Look up a terpene by name (case-insensitive)
pub fn find_terpene(name: &str) -> Option<&'static Terpene> {
    let wanted = name.trim();
    TERPENES.iter().find(|t| t.name.eq_ignore_ascii_case(wanted))
}
