//! Family catalog and rotation sequence
//!
//! Both tables are constant reference data. They are built once (from the
//! embedded defaults or a JSON override) and handed to the planner.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::utils::contains_ignore_case;

/// Family name reported when no catalog entry matches
pub const UNKNOWN_FAMILY: &str = "Unknown";

// ============================================================================
// EMBEDDED FAMILY DATA
// ============================================================================

static DEFAULT_FAMILIES: &[(&str, &[&str])] = &[
    ("Allium", &["Onion", "Garlic", "Leek", "Shallot", "Chive"]),
    ("Apiaceae", &["Carrot", "Parsley", "Celery", "Parsnip", "Fennel", "Dill"]),
    ("Asteraceae", &["Lettuce", "Sunflower", "Artichoke", "Endive", "Dandelion"]),
    ("Brassicaceae", &["Broccoli", "Cauliflower", "Cabbage", "Kale", "Radish", "Turnip", "Arugula"]),
    ("Cucurbitaceae", &["Cucumber", "Squash", "Pumpkin", "Zucchini", "Melon", "Watermelon"]),
    ("Fabaceae", &["Bean", "Pea", "Lentil", "Peanut", "Clover", "Alfalfa"]),
    ("Solanaceae", &["Tomato", "Pepper", "Eggplant", "Potato", "Tomatillo"]),
];

/// Heavy feeders, then light feeders, then soil builders
static DEFAULT_ROTATION: &[&str] = &[
    "Brassicaceae",
    "Solanaceae",
    "Cucurbitaceae",
    "Apiaceae",
    "Asteraceae",
    "Allium",
    "Fabaceae",
];

/// Family a bed with no history should start with
pub const DEFAULT_STARTING_FAMILY: &str = "Fabaceae";

/// A botanical family and the name fragments that identify its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantFamily {
    pub name: String,
    pub members: Vec<String>,
}

impl PlantFamily {
    /// True if any member fragment occurs in `plant_name`, ignoring case
    pub fn matches(&self, plant_name: &str) -> bool {
        self.members.iter().any(|m| contains_ignore_case(plant_name, m))
    }
}

/// Ordered family catalog
///
/// Lookups walk the families in declaration order and stop at the first
/// match, so a name matching two families resolves to the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyCatalog {
    families: Vec<PlantFamily>,
}

impl FamilyCatalog {
    pub fn new(families: Vec<PlantFamily>) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &[PlantFamily] {
        &self.families
    }

    pub fn get(&self, family: &str) -> Option<&PlantFamily> {
        self.families.iter().find(|f| f.name == family)
    }

    /// First family whose members match `plant_name`
    pub fn family_of(&self, plant_name: &str) -> Option<&PlantFamily> {
        self.families.iter().find(|f| f.matches(plant_name))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for FamilyCatalog {
    fn default() -> Self {
        let families = DEFAULT_FAMILIES
            .iter()
            .map(|(name, members)| PlantFamily {
                name: name.to_string(),
                members: members.iter().map(|m| m.to_string()).collect(),
            })
            .collect();
        Self { families }
    }
}

/// Cyclic order in which families follow each other in a bed
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RotationSequence {
    families: Vec<String>,
}

impl RotationSequence {
    pub fn new(families: Vec<String>) -> Result<Self, PlannerError> {
        if families.is_empty() {
            return Err(PlannerError::EmptyRotationSequence);
        }
        Ok(Self { families })
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn contains(&self, family: &str) -> bool {
        self.position(family).is_some()
    }

    pub fn position(&self, family: &str) -> Option<usize> {
        self.families.iter().position(|f| f == family)
    }

    pub fn first(&self) -> &str {
        &self.families[0]
    }

    /// Cyclic successor of `family`; the first family if `family` is not in the sequence
    pub fn successor(&self, family: &str) -> &str {
        match self.position(family) {
            Some(index) => &self.families[(index + 1) % self.families.len()],
            None => self.first(),
        }
    }
}

impl Default for RotationSequence {
    fn default() -> Self {
        Self {
            families: DEFAULT_ROTATION.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for RotationSequence {
    type Error = PlannerError;

    fn try_from(families: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(families)
    }
}

impl From<RotationSequence> for Vec<String> {
    fn from(sequence: RotationSequence) -> Self {
        sequence.families
    }
}
