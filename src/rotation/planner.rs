//! Rotation planning over a bed's crop history

use std::cmp::Ordering;

use crate::error::PlannerError;
use crate::types::{PlantProfile, RotationEntry};

use super::catalog::{FamilyCatalog, RotationSequence, DEFAULT_STARTING_FAMILY, UNKNOWN_FAMILY};

/// Number of most recent history entries whose families are blocked
pub const RECENT_HISTORY_WINDOW: usize = 3;

/// Family lookup and next-crop recommendations for one rotation scheme
#[derive(Debug, Clone)]
pub struct RotationPlanner {
    catalog: FamilyCatalog,
    sequence: RotationSequence,
    starting_family: String,
}

impl RotationPlanner {
    /// Build a planner; `starting_family` must be part of `sequence`.
    pub fn new(
        catalog: FamilyCatalog,
        sequence: RotationSequence,
        starting_family: impl Into<String>,
    ) -> Result<Self, PlannerError> {
        let starting_family = starting_family.into();
        if !sequence.contains(&starting_family) {
            return Err(PlannerError::UnknownRotationFamily { family: starting_family });
        }
        Ok(Self {
            catalog,
            sequence,
            starting_family,
        })
    }

    pub fn catalog(&self) -> &FamilyCatalog {
        &self.catalog
    }

    pub fn sequence(&self) -> &RotationSequence {
        &self.sequence
    }

    pub fn starting_family(&self) -> &str {
        &self.starting_family
    }

    /// Family of a plant name, or `"Unknown"`
    pub fn family_of(&self, plant_name: &str) -> &str {
        match self.catalog.family_of(plant_name) {
            Some(family) => &family.name,
            None => {
                tracing::debug!("No family matches '{}'", plant_name);
                UNKNOWN_FAMILY
            }
        }
    }

    pub fn family_of_plant(&self, plant: &PlantProfile) -> &str {
        self.family_of(&plant.name)
    }

    /// Plants whose names match a member of `family`; empty for unknown families
    pub fn plants_in_family<'a>(&self, family: &str, plants: &'a [PlantProfile]) -> Vec<&'a PlantProfile> {
        match self.catalog.get(family) {
            Some(entry) => plants.iter().filter(|p| entry.matches(&p.name)).collect(),
            None => Vec::new(),
        }
    }

    /// Family that follows `after`; the sequence's first family if `after` is not in it
    pub fn next_family(&self, after: &str) -> &str {
        self.sequence.successor(after)
    }

    /// History ordered newest year first, seasons chronological within a year
    pub fn history<'a>(&self, entries: &'a [RotationEntry]) -> Vec<&'a RotationEntry> {
        let mut history: Vec<&RotationEntry> = entries.iter().collect();
        history.sort_by(|a, b| compare_history(a, b));
        history
    }

    /// Families to plant next: the successor of the most recent family, or
    /// the starting family for a bed with no history
    pub fn recommended_families(&self, entries: &[RotationEntry]) -> Vec<String> {
        match self.history(entries).first() {
            Some(latest) => vec![self.next_family(&latest.crop_family).to_string()],
            None => vec![self.starting_family.clone()],
        }
    }

    /// False iff the plant's family was grown in one of the last
    /// `RECENT_HISTORY_WINDOW` history entries. Unknown families always pass.
    pub fn is_suitable(&self, plant: &PlantProfile, entries: &[RotationEntry]) -> bool {
        let family = self.family_of_plant(plant);
        if family == UNKNOWN_FAMILY {
            return true;
        }

        !self
            .history(entries)
            .iter()
            .take(RECENT_HISTORY_WINDOW)
            .any(|entry| entry.crop_family == family)
    }
}

impl Default for RotationPlanner {
    fn default() -> Self {
        Self {
            catalog: FamilyCatalog::default(),
            sequence: RotationSequence::default(),
            starting_family: DEFAULT_STARTING_FAMILY.to_string(),
        }
    }
}

fn compare_history(a: &RotationEntry, b: &RotationEntry) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| a.season.chronological_index().cmp(&b.season.chronological_index()))
}
