//! Shared domain types
//!
//! Plain value types handed to the planning components by the caller. None of
//! them owns another, and none is mutated by the planners.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Growing season a plant can be sown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    /// Sowable in any season
    YearRound,
}

impl Season {
    /// The four calendar seasons in chronological order
    pub fn standard() -> &'static [Season] {
        &[Season::Spring, Season::Summer, Season::Fall, Season::Winter]
    }

    /// Position within a year (spring first). `YearRound` sorts after winter.
    pub fn chronological_index(&self) -> u8 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
            Season::YearRound => 4,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::YearRound => "Year Round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SunRequirement {
    #[default]
    FullSun,
    PartialSun,
    PartialShade,
    FullShade,
}

impl SunRequirement {
    pub fn display_name(&self) -> &'static str {
        match self {
            SunRequirement::FullSun => "Full Sun",
            SunRequirement::PartialSun => "Partial Sun",
            SunRequirement::PartialShade => "Partial Shade",
            SunRequirement::FullShade => "Full Shade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum WaterRequirement {
    Low,
    #[default]
    Moderate,
    High,
}

impl WaterRequirement {
    pub fn display_name(&self) -> &'static str {
        match self {
            WaterRequirement::Low => "Low",
            WaterRequirement::Moderate => "Moderate",
            WaterRequirement::High => "High",
        }
    }
}

fn default_days_to_maturity() -> u32 {
    60
}

/// A plant catalog record as supplied by the persistence layer
///
/// `spacing` is in inches. Companion and adversary names are matched exactly
/// (case-sensitive) against other plants' `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    pub name: String,

    /// Free-text type ("Tomato", "Leafy Greens", "Herb"), used for keyword matching
    #[serde(rename = "type")]
    pub plant_type: String,

    #[serde(default)]
    pub description: String,

    /// Required distance between plants, in inches
    pub spacing: f64,

    #[serde(default = "default_days_to_maturity")]
    pub days_to_maturity: u32,

    #[serde(default)]
    pub sun_requirement: SunRequirement,

    #[serde(default)]
    pub water_requirement: WaterRequirement,

    /// Sowing depth in inches
    #[serde(default)]
    pub planting_depth: f64,

    #[serde(default)]
    pub companions: Vec<String>,

    #[serde(default)]
    pub adversaries: Vec<String>,

    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl PlantProfile {
    /// Minimal record; the remaining fields take their catalog defaults.
    pub fn new(name: impl Into<String>, plant_type: impl Into<String>, spacing: f64) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
            description: String::new(),
            spacing,
            days_to_maturity: default_days_to_maturity(),
            sun_requirement: SunRequirement::default(),
            water_requirement: WaterRequirement::default(),
            planting_depth: 0.0,
            companions: Vec::new(),
            adversaries: Vec::new(),
            seasons: Vec::new(),
        }
    }

    pub fn with_companions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companions = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_adversaries<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adversaries = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seasons(mut self, seasons: &[Season]) -> Self {
        self.seasons = seasons.to_vec();
        self
    }

    pub fn is_year_round(&self) -> bool {
        self.seasons.contains(&Season::YearRound)
    }

    /// True if the plant declares `season` (or is year-round)
    pub fn supports(&self, season: Season) -> bool {
        self.is_year_round() || self.seasons.contains(&season)
    }

    pub fn lists_companion(&self, name: &str) -> bool {
        self.companions.iter().any(|c| c == name)
    }

    pub fn lists_adversary(&self, name: &str) -> bool {
        self.adversaries.iter().any(|a| a == name)
    }

    /// Names listed both as companion and adversary
    ///
    /// Not rejected: adversary wins when classifying, see `check_compatibility`.
    pub fn companion_adversary_overlap(&self) -> Vec<&str> {
        self.companions
            .iter()
            .filter(|c| self.lists_adversary(c))
            .map(String::as_str)
            .collect()
    }

    /// Check the record's preconditions
    pub fn validate(&self) -> Result<(), PlannerError> {
        let invalid = |reason: &str| PlannerError::InvalidPlant {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(invalid("spacing must be a positive number of inches"));
        }
        if self.days_to_maturity == 0 {
            return Err(invalid("days to maturity must be positive"));
        }
        Ok(())
    }
}

/// One season of a bed's crop history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationEntry {
    pub year: i32,
    pub season: Season,
    pub crop_family: String,
}

impl RotationEntry {
    pub fn new(year: i32, season: Season, crop_family: impl Into<String>) -> Self {
        Self {
            year,
            season,
            crop_family: crop_family.into(),
        }
    }
}

/// Rectangular planting surface, both sides in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaSpec {
    pub width: f64,
    pub length: f64,
}

impl AreaSpec {
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    pub fn square_feet(&self) -> f64 {
        self.width * self.length
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(self.width) && positive(self.length) {
            Ok(())
        } else {
            Err(PlannerError::InvalidArea {
                width: self.width,
                length: self.length,
            })
        }
    }
}

/// Planned plant location inside an `AreaSpec`, in feet from the corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantPosition {
    pub x: f64,
    pub y: f64,
}

/// Packing strategy used to lay out plants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlantingMethod {
    /// Rows with equal in-row and between-row spacing
    Row,
    /// Square-foot gardening
    Square,
    /// Staggered (hexagonal) rows
    Triangular,
}

impl PlantingMethod {
    pub fn all() -> &'static [PlantingMethod] {
        &[PlantingMethod::Row, PlantingMethod::Square, PlantingMethod::Triangular]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlantingMethod::Row => "Row",
            PlantingMethod::Square => "Square Foot",
            PlantingMethod::Triangular => "Triangular",
        }
    }
}

/// Pairwise relationship between two plants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlantCompatibility {
    Companion,
    Neutral,
    Incompatible,
}

impl PlantCompatibility {
    pub fn display_text(&self) -> &'static str {
        match self {
            PlantCompatibility::Companion => "Good companions",
            PlantCompatibility::Neutral => "No known interaction",
            PlantCompatibility::Incompatible => "Keep apart",
        }
    }
}
