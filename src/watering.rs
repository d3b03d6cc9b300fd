//! Watering advice
//!
//! Rule-based watering recommendation from a weather snapshot and a short
//! forecast. Fetching the weather is the caller's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::contains_any_keyword;

/// Above this temperature (°F) the day counts as hot
pub const HOT_TEMPERATURE_F: f64 = 85.0;

/// Below this relative humidity (%) the day counts as dry
pub const DRY_HUMIDITY_PCT: f64 = 40.0;

/// Forecast rain heavier than this (inches) postpones watering
pub const SIGNIFICANT_RAIN_IN: f64 = 0.3;

const THIRSTY_PLANT_KEYWORDS: &[&str] = &["tomato", "cucumber", "squash"];

/// One observation or forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature_f: f64,
    pub conditions: String,
    pub precipitation_in: f64,
    pub humidity_pct: f64,
    pub wind_speed_mph: f64,
    pub date: NaiveDate,
}

impl WeatherSnapshot {
    fn mentions_rain(&self) -> bool {
        self.conditions.to_lowercase().contains("rain")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WateringNeed {
    Low,
    Moderate,
    High,
}

impl WateringNeed {
    /// One level up, capped at `High`
    fn raised(self) -> Self {
        match self {
            WateringNeed::Low => WateringNeed::Moderate,
            WateringNeed::Moderate | WateringNeed::High => WateringNeed::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringRecommendation {
    pub need: WateringNeed,
    pub message: String,
    pub best_time: TimeOfDay,
}

/// Watering recommendation for today
///
/// `forecast` starts with tomorrow. `plant_types` are the free-text types of
/// what is growing; thirsty crops push the need up one level.
pub fn recommend_watering(
    current: &WeatherSnapshot,
    forecast: &[WeatherSnapshot],
    plant_types: &[String],
) -> WateringRecommendation {
    let rained_recently = current.mentions_rain() || forecast.iter().take(1).any(WeatherSnapshot::mentions_rain);
    let rain_expected = forecast
        .iter()
        .take(2)
        .any(|day| day.mentions_rain() && day.precipitation_in > SIGNIFICANT_RAIN_IN);
    let hot = current.temperature_f > HOT_TEMPERATURE_F;
    let dry = current.humidity_pct < DRY_HUMIDITY_PCT;

    let mut need = if rained_recently {
        WateringNeed::Low
    } else if hot && dry {
        WateringNeed::High
    } else if rain_expected {
        WateringNeed::Low
    } else {
        WateringNeed::Moderate
    };

    let thirsty = plant_types
        .iter()
        .any(|t| contains_any_keyword(t, THIRSTY_PLANT_KEYWORDS));
    if thirsty {
        need = need.raised();
    }

    let (message, best_time) = match need {
        WateringNeed::Low => {
            let message = if rained_recently {
                "Skip watering today. Recent rainfall should provide adequate moisture."
            } else if rain_expected {
                "Hold off on watering as rain is expected in the next 48 hours."
            } else {
                "Light watering recommended for seedlings and container plants only."
            };
            (message, TimeOfDay::Morning)
        }
        WateringNeed::Moderate => (
            "Normal watering recommended. Water deeply at the base of plants.",
            if hot { TimeOfDay::Evening } else { TimeOfDay::Morning },
        ),
        WateringNeed::High => {
            let message = if hot && dry {
                "Plants need extra water due to hot, dry conditions. Water deeply and consider mulching to retain moisture."
            } else {
                "Thorough watering needed. Make sure water penetrates 6-8 inches into soil."
            };
            (message, if hot { TimeOfDay::Evening } else { TimeOfDay::Morning })
        }
    };

    tracing::debug!("Watering need {:?} (rain recent: {}, rain expected: {}, hot: {}, dry: {})",
        need, rained_recently, rain_expected, hot, dry);

    WateringRecommendation {
        need,
        message: message.to_string(),
        best_time,
    }
}
