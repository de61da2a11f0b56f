use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A numeric cell kept exactly as it appeared in the CSV, plus its parsed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub raw: String,
    pub value: Option<f64>,
}

impl Measurement {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw.trim().parse::<f64>().ok();
        Measurement { raw, value }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Measurement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Measurement::new)
    }
}

/// One survey observation at a location and depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilRecord {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Latitude")]
    pub latitude: Measurement,
    #[serde(rename = "Longitude")]
    pub longitude: Measurement,
    #[serde(rename = "Depth (m)")]
    pub depth_m: Measurement,
    #[serde(rename = "Clay (%)")]
    pub clay_pct: Measurement,
    #[serde(rename = "Silt (%)")]
    pub silt_pct: Measurement,
    #[serde(rename = "Sand (%)")]
    pub sand_pct: Measurement,
    #[serde(rename = "Gravels (%)")]
    pub gravels_pct: Measurement,
    #[serde(rename = "D10")]
    pub d10: Measurement,
    #[serde(rename = "D30")]
    pub d30: Measurement,
    #[serde(rename = "D60")]
    pub d60: Measurement,
    #[serde(rename = "CU")]
    pub cu: Measurement,
    #[serde(rename = "CC")]
    pub cc: Measurement,
    #[serde(rename = "1D inverted resistivity")]
    pub inverted_resistivity: Measurement,
    #[serde(rename = "Moisture content (%)")]
    pub moisture_pct: Measurement,
    #[serde(rename = "pH")]
    pub ph: Measurement,
    #[serde(rename = "Soil Type")]
    pub soil_type: String,
    #[serde(rename = "Fine Soil (%)")]
    pub fine_soil_pct: Measurement,
    #[serde(rename = "USCS Group Symbol")]
    pub uscs_symbol: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Photo Location")]
    pub photo_location: String,

    // Narrative columns are optional; an absent column or empty cell hides the section
    #[serde(rename = "Research Findings", default)]
    pub research_findings: Option<String>,
    #[serde(rename = "Trivia", default)]
    pub trivia: Option<String>,
    #[serde(rename = "Disclaimer", default)]
    pub disclaimer: Option<String>,
}

impl SoilRecord {
    /// Parsed (latitude, longitude), if both cells are numeric.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude.value?, self.longitude.value?))
    }

    /// Label/value pairs for the vertical attribute table, in display order.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Location", self.location.as_str()),
            ("Latitude", self.latitude.raw.as_str()),
            ("Longitude", self.longitude.raw.as_str()),
            ("Depth (m)", self.depth_m.raw.as_str()),
            ("Clay (%)", self.clay_pct.raw.as_str()),
            ("Silt (%)", self.silt_pct.raw.as_str()),
            ("Sand (%)", self.sand_pct.raw.as_str()),
            ("Gravels (%)", self.gravels_pct.raw.as_str()),
            ("D10", self.d10.raw.as_str()),
            ("D30", self.d30.raw.as_str()),
            ("D60", self.d60.raw.as_str()),
            ("CU", self.cu.raw.as_str()),
            ("CC", self.cc.raw.as_str()),
            ("1D inverted resistivity", self.inverted_resistivity.raw.as_str()),
            ("Moisture content (%)", self.moisture_pct.raw.as_str()),
            ("pH", self.ph.raw.as_str()),
            ("Soil Type", self.soil_type.as_str()),
            ("Fine Soil (%)", self.fine_soil_pct.raw.as_str()),
            ("USCS Group Symbol", self.uscs_symbol.as_str()),
        ]
    }
}
