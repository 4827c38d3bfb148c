//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, has_passed, overlaps};
pub use snapshot::{ObstacleView, Snapshot};
pub use spawn::{gap_offset, obstacle_pair, spawn};
pub use state::{EndReason, Entity, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
pub use tick::{jump, restart, tick};
