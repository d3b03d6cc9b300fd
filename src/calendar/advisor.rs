//! Calendar advice for a plant in a hardiness zone

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{PlantProfile, Season};

use super::zone_windows::ZoneWindowTable;

/// Concrete sowing date range, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PlantingWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Season for a date by fixed month ranges (not zone-aware)
///
/// March-May spring, June-August summer, September-November fall, else winter.
pub fn current_season(date: NaiveDate) -> Season {
    match date.month() {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Sowing-window lookups against one zone table
#[derive(Debug, Clone)]
pub struct CalendarAdvisor {
    zones: ZoneWindowTable,
}

impl CalendarAdvisor {
    pub fn new(zones: ZoneWindowTable) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &ZoneWindowTable {
        &self.zones
    }

    /// Seasons the plant can be sown in within `zone`
    ///
    /// Year-round plants get all four seasons. Otherwise the plant's declared
    /// seasons that have at least one window in the zone; for a zone missing
    /// from the table, the declared seasons unfiltered.
    pub fn suitable_seasons(&self, plant: &PlantProfile, zone: &str) -> BTreeSet<Season> {
        if plant.is_year_round() {
            return Season::standard().iter().copied().collect();
        }

        match self.zones.lookup(zone) {
            Some(windows) => plant
                .seasons
                .iter()
                .copied()
                .filter(|s| windows.has_windows(*s))
                .collect(),
            None => {
                tracing::debug!("Zone '{}' not in table, keeping declared seasons for {}", zone, plant.name);
                plant.seasons.iter().copied().collect()
            }
        }
    }

    /// Date range for sowing in `season`, in the year of `today`
    ///
    /// Only the first window of the zone/season is used. A window that wraps
    /// the new year ends in the following year. `None` when the plant does
    /// not grow in the season or the zone has no window for it.
    pub fn date_range(
        &self,
        plant: &PlantProfile,
        zone: &str,
        season: Season,
        today: NaiveDate,
    ) -> Option<PlantingWindow> {
        if !plant.supports(season) {
            return None;
        }

        let window = self.zones.lookup(zone)?.get(season).first()?;

        let year = today.year();
        let end_year = if window.wraps_year() { year + 1 } else { year };

        Some(PlantingWindow {
            start: NaiveDate::from_ymd_opt(year, window.start(), 1)?,
            end: last_day_of_month(end_year, window.end())?,
        })
    }

    /// True if the month of `today` falls in any window of any season the
    /// plant grows in. Unknown zones never match.
    pub fn can_plant_now(&self, plant: &PlantProfile, zone: &str, today: NaiveDate) -> bool {
        let Some(windows) = self.zones.lookup(zone) else {
            return false;
        };

        let seasons: &[Season] = if plant.is_year_round() {
            Season::standard()
        } else {
            &plant.seasons
        };

        let month = today.month();
        seasons
            .iter()
            .any(|season| windows.get(*season).iter().any(|w| w.contains(month)))
    }

    /// Plants that can be sown today, in input order
    pub fn plants_to_plant_now<'a>(
        &self,
        plants: &'a [PlantProfile],
        zone: &str,
        today: NaiveDate,
    ) -> Vec<&'a PlantProfile> {
        plants
            .iter()
            .filter(|p| self.can_plant_now(p, zone, today))
            .collect()
    }

    pub fn current_season(&self, date: NaiveDate) -> Season {
        current_season(date)
    }
}

impl Default for CalendarAdvisor {
    fn default() -> Self {
        Self::new(ZoneWindowTable::builtin())
    }
}
