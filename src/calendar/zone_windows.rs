//! Hardiness zone planting windows
//!
//! Keyed by the numeric part of a zone code ("7b" -> "7"). Each season holds
//! zero or more (start month, end month) windows; a window whose end month
//! is before its start month runs over the new year.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PlannerError;
use crate::types::Season;
use crate::utils::zone_key;

/// Inclusive range of months, 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct MonthWindow {
    start: u32,
    end: u32,
}

impl MonthWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, PlannerError> {
        let valid = |m: u32| (1..=12).contains(&m);
        if !valid(start) || !valid(end) {
            return Err(PlannerError::InvalidMonthWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// True for windows running December -> January
    pub fn wraps_year(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, month: u32) -> bool {
        if self.wraps_year() {
            month >= self.start || month <= self.end
        } else {
            month >= self.start && month <= self.end
        }
    }
}

impl TryFrom<(u32, u32)> for MonthWindow {
    type Error = PlannerError;

    fn try_from((start, end): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<MonthWindow> for (u32, u32) {
    fn from(window: MonthWindow) -> Self {
        (window.start, window.end)
    }
}

pub type Windows = SmallVec<[MonthWindow; 2]>;

/// Planting windows of one zone, per season
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindows {
    #[serde(default)]
    pub spring: Windows,
    #[serde(default)]
    pub summer: Windows,
    #[serde(default)]
    pub fall: Windows,
    #[serde(default)]
    pub winter: Windows,
}

impl SeasonWindows {
    /// Windows for `season`; `YearRound` has no windows of its own
    pub fn get(&self, season: Season) -> &[MonthWindow] {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Fall => &self.fall,
            Season::Winter => &self.winter,
            Season::YearRound => &[],
        }
    }

    pub fn has_windows(&self, season: Season) -> bool {
        !self.get(season).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Season::standard().iter().all(|s| !self.has_windows(*s))
    }
}

// ============================================================================
// EMBEDDED ZONE DATA
// Order per zone: spring, summer, fall, winter
// ============================================================================

type ZoneRow = (&'static str, [&'static [(u32, u32)]; 4]);

static DEFAULT_ZONES: &[ZoneRow] = &[
    ("1", [&[(5, 6)], &[(6, 8)], &[(8, 9)], &[]]),
    ("2", [&[(5, 6)], &[(6, 8)], &[(8, 9)], &[]]),
    ("3", [&[(4, 6)], &[(6, 8)], &[(8, 9)], &[]]),
    ("4", [&[(4, 6)], &[(6, 8)], &[(8, 9)], &[]]),
    ("5", [&[(4, 5)], &[(5, 8)], &[(8, 10)], &[]]),
    ("6", [&[(3, 5)], &[(5, 8)], &[(8, 10)], &[]]),
    ("7", [&[(3, 5)], &[(5, 8)], &[(8, 11)], &[(11, 2)]]),
    ("8", [&[(2, 4)], &[(5, 8)], &[(8, 11)], &[(11, 2)]]),
    ("9", [&[(2, 4)], &[(4, 8)], &[(9, 11)], &[(11, 3)]]),
    ("10", [&[(1, 3)], &[(4, 8)], &[(9, 12)], &[(12, 3)]]),
    ("11", [&[(1, 3)], &[(3, 9)], &[(9, 12)], &[(12, 3)]]),
    ("12", [&[(1, 3)], &[(3, 9)], &[(9, 12)], &[(12, 3)]]),
    ("13", [&[(1, 3)], &[(3, 9)], &[(9, 12)], &[(12, 3)]]),
];

/// Zone key -> season windows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneWindowTable {
    zones: FxHashMap<String, SeasonWindows>,
}

impl ZoneWindowTable {
    pub fn new(zones: FxHashMap<String, SeasonWindows>) -> Self {
        Self { zones }
    }

    /// The built-in table for USDA zones 1-13
    pub fn builtin() -> Self {
        let zones = DEFAULT_ZONES
            .iter()
            .map(|(zone, seasons)| {
                // Embedded months are all within 1-12
                let windows = |pairs: &[(u32, u32)]| -> Windows {
                    pairs.iter().map(|&(start, end)| MonthWindow { start, end }).collect()
                };
                let entry = SeasonWindows {
                    spring: windows(seasons[0]),
                    summer: windows(seasons[1]),
                    fall: windows(seasons[2]),
                    winter: windows(seasons[3]),
                };
                (zone.to_string(), entry)
            })
            .collect();
        Self { zones }
    }

    /// Windows for a raw zone code such as "7b"; `None` if the zone is not in the table
    pub fn lookup(&self, zone_code: &str) -> Option<&SeasonWindows> {
        self.zones.get(&zone_key(zone_code))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeasonWindows)> {
        self.zones.iter().map(|(key, windows)| (key.as_str(), windows))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
