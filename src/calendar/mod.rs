//! Planting Calendar
//!
//! Decides when a plant can be sown in a hardiness zone from a table of
//! month windows per zone and season.
//!
//! ## Architecture
//! - `zone_windows.rs` - MonthWindow, per-zone season windows, built-in zone 1-13 table
//! - `advisor.rs` - Season filtering, date ranges and "plant now" checks
//!
//! "Today" is always passed in by the caller; nothing here reads the clock.

pub mod zone_windows;
pub mod advisor;

pub use zone_windows::{MonthWindow, SeasonWindows, ZoneWindowTable};
pub use advisor::{current_season, CalendarAdvisor, PlantingWindow};
