//! Companion planting
//!
//! Classifies plant pairs as companions, neutral or incompatible from the
//! companion/adversary lists each plant declares, and ranks candidate plants
//! for a bed that already has plants in it.
//!
//! Lists are not assumed to be reciprocal. A pair is incompatible as soon as
//! either side names the other as an adversary, even if the other side names
//! it as a companion.

use ahash::AHashSet;

use crate::types::{PlantCompatibility, PlantProfile};

/// Stateless companion/adversary resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityResolver;

impl CompatibilityResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn companions_of<'a>(&self, plant: &'a PlantProfile) -> &'a [String] {
        &plant.companions
    }

    pub fn adversaries_of<'a>(&self, plant: &'a PlantProfile) -> &'a [String] {
        &plant.adversaries
    }

    /// Classify the relationship between two plants
    ///
    /// Adversary takes precedence over companion.
    pub fn check_compatibility(&self, a: &PlantProfile, b: &PlantProfile) -> PlantCompatibility {
        let adversary = a.lists_adversary(&b.name) || b.lists_adversary(&a.name);
        let companion = a.lists_companion(&b.name) || b.lists_companion(&a.name);

        if adversary {
            PlantCompatibility::Incompatible
        } else if companion {
            PlantCompatibility::Companion
        } else {
            PlantCompatibility::Neutral
        }
    }

    /// Worst-case classification of `candidate` against every plant in a bed
    ///
    /// An empty bed is neutral.
    pub fn classify_against(&self, candidate: &PlantProfile, existing: &[PlantProfile]) -> PlantCompatibility {
        let mut result = PlantCompatibility::Neutral;
        for plant in existing {
            match self.check_compatibility(candidate, plant) {
                PlantCompatibility::Incompatible => return PlantCompatibility::Incompatible,
                PlantCompatibility::Companion => result = PlantCompatibility::Companion,
                PlantCompatibility::Neutral => {}
            }
        }
        result
    }

    /// Every incompatible pair already sharing a bed, as (earlier, later) names
    pub fn incompatible_pairs(&self, plants: &[PlantProfile]) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if plants.len() < 2 {
            return pairs;
        }
        for i in 0..plants.len() - 1 {
            for j in i + 1..plants.len() {
                if self.check_compatibility(&plants[i], &plants[j]) == PlantCompatibility::Incompatible {
                    pairs.push((plants[i].name.clone(), plants[j].name.clone()));
                }
            }
        }
        pairs
    }

    /// Rank candidate plants for a bed
    ///
    /// Empty bed: every candidate, untouched. Otherwise candidates already in
    /// the bed and candidates any bed plant lists as an adversary are dropped.
    /// Companions of any bed plant come first, followed by the remaining
    /// candidates that do not themselves list a bed plant as an adversary.
    /// Each group keeps candidate input order.
    pub fn recommend<'a>(&self, existing: &[PlantProfile], candidates: &'a [PlantProfile]) -> Vec<&'a PlantProfile> {
        if existing.is_empty() {
            return candidates.iter().collect();
        }

        let existing_names: AHashSet<&str> = existing.iter().map(|p| p.name.as_str()).collect();
        let companion_names: AHashSet<&str> = existing
            .iter()
            .flat_map(|p| p.companions.iter().map(String::as_str))
            .collect();
        let adversary_names: AHashSet<&str> = existing
            .iter()
            .flat_map(|p| p.adversaries.iter().map(String::as_str))
            .collect();

        let mut companions = Vec::new();
        let mut neutrals = Vec::new();

        for candidate in candidates {
            let name = candidate.name.as_str();
            if existing_names.contains(name) || adversary_names.contains(name) {
                continue;
            }

            if companion_names.contains(name) {
                companions.push(candidate);
            } else if !existing.iter().any(|p| candidate.lists_adversary(&p.name)) {
                neutrals.push(candidate);
            }
        }

        companions.extend(neutrals);
        companions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> PlantProfile {
        PlantProfile::new("Tomato", "Tomato", 24.0)
            .with_companions(["Basil", "Carrot"])
            .with_adversaries(["Potato", "Fennel"])
    }

    fn names(plants: &[&PlantProfile]) -> Vec<String> {
        plants.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_adversary_wins_without_reciprocity() {
        let resolver = CompatibilityResolver::new();
        let potato = PlantProfile::new("Potato", "Potato", 12.0);
        assert_eq!(resolver.check_compatibility(&tomato(), &potato), PlantCompatibility::Incompatible);
        assert_eq!(resolver.check_compatibility(&potato, &tomato()), PlantCompatibility::Incompatible);
    }

    #[test]
    fn test_adversary_beats_companion() {
        let resolver = CompatibilityResolver::new();
        let fennel = PlantProfile::new("Fennel", "Herb", 12.0).with_companions(["Tomato"]);
        assert_eq!(resolver.check_compatibility(&tomato(), &fennel), PlantCompatibility::Incompatible);
    }

    #[test]
    fn test_companion_and_neutral() {
        let resolver = CompatibilityResolver::new();
        let basil = PlantProfile::new("Basil", "Herb", 8.0);
        let kale = PlantProfile::new("Kale", "Brassica", 18.0);
        assert_eq!(resolver.check_compatibility(&basil, &tomato()), PlantCompatibility::Companion);
        assert_eq!(resolver.check_compatibility(&kale, &tomato()), PlantCompatibility::Neutral);
    }

    #[test]
    fn test_names_match_case_sensitively() {
        let resolver = CompatibilityResolver::new();
        let potato = PlantProfile::new("potato", "Potato", 12.0);
        assert_eq!(resolver.check_compatibility(&tomato(), &potato), PlantCompatibility::Neutral);
    }

    #[test]
    fn test_recommend_empty_bed_passthrough() {
        let resolver = CompatibilityResolver::new();
        let candidates = vec![tomato(), PlantProfile::new("Potato", "Potato", 12.0)];
        let result = resolver.recommend(&[], &candidates);
        assert_eq!(names(&result), vec!["Tomato", "Potato"]);
    }

    #[test]
    fn test_recommend_orders_companions_first() {
        let resolver = CompatibilityResolver::new();
        let existing = vec![tomato()];
        let candidates = vec![
            PlantProfile::new("Kale", "Brassica", 18.0),
            PlantProfile::new("Potato", "Potato", 12.0),
            PlantProfile::new("Carrot", "Carrot", 3.0),
            tomato(),
            PlantProfile::new("Dill", "Herb", 12.0).with_adversaries(["Tomato"]),
            PlantProfile::new("Basil", "Herb", 8.0),
            PlantProfile::new("Lettuce", "Lettuce", 8.0),
        ];

        let result = resolver.recommend(&existing, &candidates);
        assert_eq!(names(&result), vec!["Carrot", "Basil", "Kale", "Lettuce"]);
    }

    #[test]
    fn test_companion_kept_even_if_it_dislikes_bed_plant() {
        // Companion membership is checked before the candidate's own adversaries
        let resolver = CompatibilityResolver::new();
        let existing = vec![tomato()];
        let candidates = vec![PlantProfile::new("Basil", "Herb", 8.0).with_adversaries(["Tomato"])];
        let result = resolver.recommend(&existing, &candidates);
        assert_eq!(names(&result), vec!["Basil"]);
    }

    #[test]
    fn test_classify_against_bed() {
        let resolver = CompatibilityResolver::new();
        let bed = vec![tomato(), PlantProfile::new("Kale", "Brassica", 18.0)];
        let basil = PlantProfile::new("Basil", "Herb", 8.0);
        let potato = PlantProfile::new("Potato", "Potato", 12.0);
        let onion = PlantProfile::new("Onion", "Allium", 4.0);

        assert_eq!(resolver.classify_against(&basil, &bed), PlantCompatibility::Companion);
        assert_eq!(resolver.classify_against(&potato, &bed), PlantCompatibility::Incompatible);
        assert_eq!(resolver.classify_against(&onion, &bed), PlantCompatibility::Neutral);
        assert_eq!(resolver.classify_against(&onion, &[]), PlantCompatibility::Neutral);
    }

    #[test]
    fn test_incompatible_pairs() {
        let resolver = CompatibilityResolver::new();
        let bed = vec![
            tomato(),
            PlantProfile::new("Basil", "Herb", 8.0),
            PlantProfile::new("Potato", "Potato", 12.0),
            PlantProfile::new("Fennel", "Herb", 12.0),
        ];
        assert_eq!(
            resolver.incompatible_pairs(&bed),
            vec![
                ("Tomato".to_string(), "Potato".to_string()),
                ("Tomato".to_string(), "Fennel".to_string()),
            ]
        );
        assert!(resolver.incompatible_pairs(&bed[..1]).is_empty());
    }
}
