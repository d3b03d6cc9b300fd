//! Bed Planner - Main coordinator for planning garden beds
//!
//! Composes the four planning components over one configuration:
//! - companion compatibility against what is already in the bed
//! - crop rotation against the bed's history
//! - calendar windows for the bed's hardiness zone
//! - spacing and planting method for the bed's dimensions
//!
//! Includes both single-bed and parallel (Rayon) batch planning. Every bed is
//! planned independently, so the batch needs no coordination.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarAdvisor, PlantingWindow};
use crate::compatibility::CompatibilityResolver;
use crate::config::PlannerConfig;
use crate::data::PlantCatalog;
use crate::error::PlannerError;
use crate::rotation::RotationPlanner;
use crate::spacing::SpacingPlanner;
use crate::types::{
    AreaSpec, PlantCompatibility, PlantPosition, PlantProfile, PlantingMethod, RotationEntry, Season,
};

/// One bed to plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedRequest {
    pub name: String,
    pub area: AreaSpec,

    /// Hardiness zone code, e.g. "7b"
    pub zone: String,

    /// Names of plants already growing in the bed (catalog names)
    #[serde(default)]
    pub existing: Vec<String>,

    #[serde(default)]
    pub history: Vec<RotationEntry>,
}

/// A candidate plant with everything the planner knows about it for one bed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePlan {
    pub plant_name: String,
    pub family: String,

    /// Worst-case relationship with the plants already in the bed
    pub compatibility: PlantCompatibility,

    /// False if the family was grown in the bed too recently
    pub rotation_ok: bool,
    pub plantable_now: bool,
    pub suitable_seasons: Vec<Season>,

    /// Sowing dates in the current season, if the plant grows in it
    pub planting_window: Option<PlantingWindow>,
    pub method: PlantingMethod,
    pub optimal_quantity: usize,
}

impl CandidatePlan {
    /// Not blocked by rotation and sowable today
    pub fn is_ready(&self) -> bool {
        self.rotation_ok && self.plantable_now
    }
}

/// Planning result for one bed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedPlan {
    pub bed_name: String,
    pub zone: String,
    pub current_season: Season,
    pub recommended_families: Vec<String>,

    /// Incompatible pairs among the plants already in the bed
    pub incompatible_pairs: Vec<(String, String)>,

    /// Ranked candidates (companions first), including flagged ones
    pub candidates: Vec<CandidatePlan>,
}

impl BedPlan {
    pub fn ready_candidates(&self) -> impl Iterator<Item = &CandidatePlan> {
        self.candidates.iter().filter(|c| c.is_ready())
    }
}

/// Main bed planner
#[derive(Debug, Clone)]
pub struct BedPlanner {
    compatibility: CompatibilityResolver,
    rotation: RotationPlanner,
    spacing: SpacingPlanner,
    calendar: CalendarAdvisor,
}

impl BedPlanner {
    /// Build every component from one configuration
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self {
            compatibility: CompatibilityResolver::new(),
            rotation: config.rotation_planner()?,
            spacing: SpacingPlanner::new(),
            calendar: config.calendar_advisor(),
        })
    }

    pub fn compatibility(&self) -> &CompatibilityResolver {
        &self.compatibility
    }

    pub fn rotation(&self) -> &RotationPlanner {
        &self.rotation
    }

    pub fn spacing(&self) -> &SpacingPlanner {
        &self.spacing
    }

    pub fn calendar(&self) -> &CalendarAdvisor {
        &self.calendar
    }

    /// Plan one bed against the whole catalog
    ///
    /// Fails on an invalid bed area or an existing plant that is not in the
    /// catalog. Candidates blocked by rotation or out of season are kept and
    /// flagged.
    pub fn plan_bed(&self, request: &BedRequest, catalog: &PlantCatalog, today: NaiveDate) -> Result<BedPlan> {
        request
            .area
            .validate()
            .with_context(|| format!("Bed '{}' has an invalid area", request.name))?;

        let existing = request
            .existing
            .iter()
            .map(|name| {
                catalog
                    .find(name)
                    .cloned()
                    .with_context(|| format!("Bed '{}' lists '{}', which is not in the catalog", request.name, name))
            })
            .collect::<Result<Vec<PlantProfile>>>()?;

        let current_season = self.calendar.current_season(today);
        let recommended_families = self.rotation.recommended_families(&request.history);
        let incompatible_pairs = self.compatibility.incompatible_pairs(&existing);
        if !incompatible_pairs.is_empty() {
            tracing::warn!("Bed '{}' already has incompatible plants: {:?}", request.name, incompatible_pairs);
        }

        let ranked = self.compatibility.recommend(&existing, catalog.plants());

        let candidates = ranked
            .into_iter()
            .map(|plant| self.plan_candidate(plant, request, &existing, current_season, today))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Bed '{}': {} candidates, {} ready, next families {:?}",
            request.name,
            candidates.len(),
            candidates.iter().filter(|c| c.is_ready()).count(),
            recommended_families
        );

        Ok(BedPlan {
            bed_name: request.name.clone(),
            zone: request.zone.clone(),
            current_season,
            recommended_families,
            incompatible_pairs,
            candidates,
        })
    }

    fn plan_candidate(
        &self,
        plant: &PlantProfile,
        request: &BedRequest,
        existing: &[PlantProfile],
        current_season: Season,
        today: NaiveDate,
    ) -> Result<CandidatePlan> {
        let method = self.spacing.recommend_method(plant, request.area);
        let optimal_quantity = self
            .spacing
            .optimal_quantity(plant, request.area)
            .with_context(|| format!("Cannot size {} for bed '{}'", plant.name, request.name))?;

        Ok(CandidatePlan {
            plant_name: plant.name.clone(),
            family: self.rotation.family_of_plant(plant).to_string(),
            compatibility: self.compatibility.classify_against(plant, existing),
            rotation_ok: self.rotation.is_suitable(plant, &request.history),
            plantable_now: self.calendar.can_plant_now(plant, &request.zone, today),
            suitable_seasons: self.calendar.suitable_seasons(plant, &request.zone).into_iter().collect(),
            planting_window: self.calendar.date_range(plant, &request.zone, current_season, today),
            method,
            optimal_quantity,
        })
    }

    /// Plan many beds in parallel; results keep request order
    pub fn plan_beds(&self, requests: &[BedRequest], catalog: &PlantCatalog, today: NaiveDate) -> Vec<Result<BedPlan>> {
        let plans: Vec<Result<BedPlan>> = requests
            .par_iter()
            .map(|request| self.plan_bed(request, catalog, today))
            .collect();

        let failed = plans.iter().filter(|p| p.is_err()).count();
        tracing::info!("Planned {} beds ({} failed)", requests.len(), failed);
        plans
    }

    /// Positions for `plant` in a bed
    pub fn layout(
        &self,
        plant: &PlantProfile,
        area: AreaSpec,
        method: PlantingMethod,
        quantity: Option<usize>,
    ) -> Result<Vec<PlantPosition>, PlannerError> {
        self.spacing.positions(plant, area, method, quantity)
    }
}

impl Default for BedPlanner {
    fn default() -> Self {
        Self {
            compatibility: CompatibilityResolver::new(),
            rotation: RotationPlanner::default(),
            spacing: SpacingPlanner::new(),
            calendar: CalendarAdvisor::default(),
        }
    }
}
