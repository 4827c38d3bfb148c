//! Game tuning
//!
//! Every constant the simulation reads lives here so a host can load a
//! different world from JSON. Missing fields fall back to `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playable area, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Controlled entity constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTuning {
    /// Fixed horizontal position
    pub start_x: f32,
    pub width: f32,
    pub height: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Magnitude of the upward velocity a jump sets
    pub jump_impulse: f32,
}

impl Default for EntityTuning {
    fn default() -> Self {
        Self {
            start_x: ENTITY_START_X,
            width: ENTITY_WIDTH,
            height: ENTITY_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
        }
    }
}

/// Obstacle geometry and spawn placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleTuning {
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick (negative)
    pub scroll_velocity: f32,
    /// Vertical opening between the upper and lower obstacle
    pub gap: f32,
    pub top_margin: f32,
    pub bottom_reserve: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
            scroll_velocity: SCROLL_VELOCITY,
            gap: GAP_SIZE,
            top_margin: GAP_TOP_MARGIN,
            bottom_reserve: GAP_BOTTOM_RESERVE,
        }
    }
}

impl ObstacleTuning {
    /// Number of distinct gap offsets the spawner can pick from
    pub fn offset_range(&self, world: &WorldBounds) -> f32 {
        world.height - self.gap - self.bottom_reserve
    }
}

/// Host-side cadence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingTuning {
    pub tick_rate_hz: f32,
    pub spawn_interval_secs: f32,
    pub max_substeps: u32,
    pub max_frame_secs: f32,
}

impl Default for TimingTuning {
    fn default() -> Self {
        Self {
            tick_rate_hz: 1.0 / SIM_DT,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            max_substeps: MAX_SUBSTEPS,
            max_frame_secs: MAX_FRAME_SECS,
        }
    }
}

impl TimingTuning {
    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub world: WorldBounds,
    pub entity: EntityTuning,
    pub obstacle: ObstacleTuning,
    pub timing: TimingTuning,
}

impl Settings {
    /// Where the entity appears at session start and after restart
    pub fn entity_start(&self) -> Vec2 {
        Vec2::new(self.entity.start_x, self.world.height / 2.0)
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the world can hold an entity and a gap.
    ///
    /// The simulation assumes this has passed; nothing downstream re-checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;

        positive("entity.width", self.entity.width)?;
        positive("entity.height", self.entity.height)?;
        positive("entity.jump_impulse", self.entity.jump_impulse)?;
        not_negative("entity.gravity", self.entity.gravity)?;

        positive("obstacle.width", self.obstacle.width)?;
        positive("obstacle.height", self.obstacle.height)?;
        positive("obstacle.gap", self.obstacle.gap)?;
        not_negative("obstacle.top_margin", self.obstacle.top_margin)?;
        not_negative("obstacle.bottom_reserve", self.obstacle.bottom_reserve)?;
        if !(self.obstacle.scroll_velocity < 0.0) {
            return Err(ConfigError::ScrollDirection {
                value: self.obstacle.scroll_velocity,
            });
        }

        positive("timing.tick_rate_hz", self.timing.tick_rate_hz)?;
        positive("timing.spawn_interval_secs", self.timing.spawn_interval_secs)?;
        positive("timing.max_frame_secs", self.timing.max_frame_secs)?;
        if self.timing.max_substeps == 0 {
            return Err(ConfigError::NonPositive {
                field: "timing.max_substeps",
                value: 0.0,
            });
        }

        let required = self.obstacle.gap + self.obstacle.bottom_reserve;
        if self.obstacle.offset_range(&self.world) < 1.0 {
            return Err(ConfigError::GapDoesNotFit {
                height: self.world.height,
                required,
            });
        }
        if self.obstacle.top_margin > self.obstacle.bottom_reserve {
            return Err(ConfigError::MarginExceedsReserve {
                top_margin: self.obstacle.top_margin,
                bottom_reserve: self.obstacle.bottom_reserve,
            });
        }

        let start = self.entity_start();
        let fits_x = start.x >= 0.0 && start.x + self.entity.width <= self.world.width;
        let fits_y = start.y + self.entity.height < self.world.height;
        if !fits_x || !fits_y {
            return Err(ConfigError::EntityOutOfBounds {
                x: start.x,
                y: start.y,
                width: self.world.width,
                height: self.world.height,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Written this way round so NaN is rejected too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn not_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.entity_start(), Vec2::new(45.0, 320.0));
        assert!((settings.timing.tick_dt() - SIM_DT).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "world": { "width": 360.0 } }"#).unwrap();
        assert_eq!(settings.world.width, 360.0);
        assert_eq!(settings.world.height, WORLD_HEIGHT);
        assert_eq!(settings.entity, EntityTuning::default());
    }

    #[test]
    fn test_json_round_trip_preserves_tuning() {
        let mut settings = Settings::default();
        settings.entity.gravity = 0.25;
        settings.obstacle.gap = 180.0;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_non_positive_world() {
        let mut settings = Settings::default();
        settings.world.width = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive { field: "world.width", .. })
        ));

        settings.world.width = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_world_too_short_for_gap() {
        let mut settings = Settings::default();
        settings.world.height = 300.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_rejects_rightward_scroll() {
        let mut settings = Settings::default();
        settings.obstacle.scroll_velocity = 4.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ScrollDirection { .. })
        ));
    }

    #[test]
    fn test_rejects_entity_outside_world() {
        let mut settings = Settings::default();
        settings.entity.start_x = 790.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::EntityOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_margin_larger_than_reserve() {
        let mut settings = Settings::default();
        settings.obstacle.top_margin = 200.0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MarginExceedsReserve { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ world: "),
            Err(ConfigError::Json(_))
        ));
    }
}
