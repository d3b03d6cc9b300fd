//! Utility helpers shared across the planners
//!
//! - Text: case-insensitive keyword matching and zone-code parsing

pub mod text;

pub use text::{contains_any_keyword, contains_ignore_case, zone_key};
