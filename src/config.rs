//! Planner Configuration
//!
//! Reference tables used by the planners: the family catalog, the rotation
//! sequence and its starting family, and the hardiness zone windows.
//!
//! Defaults are embedded. A JSON file may override any section; sections it
//! leaves out keep the embedded data:
//!
//! ```json
//! {
//!   "startingFamily": "Fabaceae",
//!   "zones": { "7": { "spring": [[3, 5]], "fall": [[8, 11]] } }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarAdvisor, ZoneWindowTable};
use crate::error::PlannerError;
use crate::rotation::catalog::DEFAULT_STARTING_FAMILY;
use crate::rotation::{FamilyCatalog, RotationPlanner, RotationSequence};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    pub families: FamilyCatalog,
    pub rotation: RotationSequence,
    pub starting_family: String,
    pub zones: ZoneWindowTable,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            families: FamilyCatalog::default(),
            rotation: RotationSequence::default(),
            starting_family: DEFAULT_STARTING_FAMILY.to_string(),
            zones: ZoneWindowTable::builtin(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner config: {:?}", path))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Invalid planner config: {:?}", path))?;

        tracing::info!(
            "Loaded planner config from {:?} ({} families, {} zones)",
            path,
            config.families.len(),
            config.zones.len()
        );
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(contents)
            .with_context(|| "Failed to parse planner config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-table consistency
    ///
    /// The starting family must be in the rotation sequence. Rotation
    /// families missing from the catalog and zones without any window are
    /// accepted with a warning.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if !self.rotation.contains(&self.starting_family) {
            return Err(PlannerError::UnknownRotationFamily {
                family: self.starting_family.clone(),
            });
        }

        for family in self.rotation.families() {
            if self.families.get(family).is_none() {
                tracing::warn!("Rotation family '{}' has no catalog entry; no plant will map to it", family);
            }
        }

        for (key, windows) in self.zones.iter() {
            if crate::utils::zone_key(key) != key {
                tracing::warn!("Zone key '{}' is not numeric; lookups will never reach it", key);
            }
            if windows.is_empty() {
                tracing::warn!("Zone '{}' has no planting windows in any season", key);
            }
        }

        Ok(())
    }

    pub fn rotation_planner(&self) -> Result<RotationPlanner, PlannerError> {
        RotationPlanner::new(self.families.clone(), self.rotation.clone(), self.starting_family.clone())
    }

    pub fn calendar_advisor(&self) -> CalendarAdvisor {
        CalendarAdvisor::new(self.zones.clone())
    }
}
