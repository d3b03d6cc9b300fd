//! Typed errors for invalid planner input and configuration

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("invalid spacing: {spacing} (must be a positive number of inches)")]
    InvalidSpacing { spacing: f64 },

    #[error("invalid area: width={width}, length={length} (both must be positive)")]
    InvalidArea { width: f64, length: f64 },

    #[error("invalid month window: ({start}, {end}) (months run 1-12)")]
    InvalidMonthWindow { start: u32, end: u32 },

    #[error("rotation sequence is empty")]
    EmptyRotationSequence,

    #[error("family '{family}' is not part of the rotation sequence")]
    UnknownRotationFamily { family: String },

    #[error("invalid plant '{name}': {reason}")]
    InvalidPlant { name: String, reason: String },
}
