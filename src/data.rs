//! Plant Catalog Loading
//!
//! Loads the plant catalog (a JSON array of plant records) and checks each
//! record before any planner sees it.
//!
//! Records are kept in file order; lookups by name go through an index.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::types::PlantProfile;

/// Validated plant catalog
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: Vec<PlantProfile>,

    /// Plant name → position in `plants`
    index: FxHashMap<String, usize>,
}

impl PlantCatalog {
    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plant catalog: {:?}", path))?;

        let plants: Vec<PlantProfile> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse plant catalog JSON: {:?}", path))?;

        let catalog = Self::from_plants(plants)
            .with_context(|| format!("Invalid plant catalog: {:?}", path))?;

        tracing::info!("Loaded {} plants from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Build a catalog from records already in memory
    ///
    /// Fails on the first invalid record or repeated name. Records whose
    /// companion and adversary lists overlap are kept with a warning.
    pub fn from_plants(plants: Vec<PlantProfile>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(plants.len());

        for (i, plant) in plants.iter().enumerate() {
            plant.validate()?;

            let overlap = plant.companion_adversary_overlap();
            if !overlap.is_empty() {
                tracing::warn!(
                    "{} lists {:?} as both companion and adversary; adversary wins",
                    plant.name,
                    overlap
                );
            }

            if index.insert(plant.name.clone(), i).is_some() {
                bail!("Duplicate plant name in catalog: {}", plant.name);
            }
        }

        Ok(Self { plants, index })
    }

    /// Exact (case-sensitive) name lookup
    pub fn find(&self, name: &str) -> Option<&PlantProfile> {
        self.index.get(name).map(|&i| &self.plants[i])
    }

    pub fn plants(&self) -> &[PlantProfile] {
        &self.plants
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlantProfile> {
        self.plants.iter()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
