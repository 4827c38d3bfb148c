//! Boundary errors
//!
//! The simulation itself never fails; these are raised when a host hands us
//! settings the core cannot run with.

use thiserror::Error;

/// Errors that can occur while loading or validating [`crate::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("world height {height} cannot fit the obstacle gap (needs more than {required})")]
    GapDoesNotFit { height: f32, required: f32 },

    #[error("gap top margin {top_margin} exceeds bottom reserve {bottom_reserve}")]
    MarginExceedsReserve { top_margin: f32, bottom_reserve: f32 },

    #[error("entity start ({x}, {y}) lies outside the {width}x{height} world")]
    EntityOutOfBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    #[error("obstacle scroll velocity must be negative (got {value})")]
    ScrollDirection { value: f32 },

    #[error("settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings read error: {0}")]
    Io(#[from] std::io::Error),
}
