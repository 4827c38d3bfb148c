//! Read-only view of the simulation for renderers
//!
//! Owned copy taken between ticks so a renderer never observes a half-applied
//! update.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{EndReason, GameState, ObstacleKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub bounds: Rect,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entity: Rect,
    pub entity_vel_y: f32,
    /// Spawn order, oldest first
    pub obstacles: Vec<ObstacleView>,
    /// Raw score in half-point steps
    pub score: f32,
    /// Floored score for the HUD
    pub display_score: u32,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
    pub time_ticks: u64,
    /// Seed the run was started with, for replays
    pub seed: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            entity: state.entity.bounds(),
            entity_vel_y: state.entity.vel_y,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    bounds: o.bounds(),
                    passed: o.passed,
                })
                .collect(),
            score: state.score(),
            display_score: state.display_score(),
            ended: state.is_ended(),
            end_reason: state.end_reason,
            time_ticks: state.time_ticks,
            seed: state.seed,
        }
    }

    /// Score line drawn in the top-left corner
    pub fn hud_text(&self) -> String {
        format!("Score: {}", self.display_score)
    }

    /// Centered banner, shown only once the run has ended
    pub fn banner(&self) -> Option<&'static str> {
        self.ended.then_some("Game Over!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::spawn::spawn;
    use crate::sim::tick::tick;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(Settings::default(), 3);
        spawn(&mut state);
        tick(&mut state);
        state.score_halves = 5;

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.entity, state.entity.bounds());
        assert_eq!(snap.obstacles.len(), 2);
        assert_eq!(snap.obstacles[0].kind, ObstacleKind::Upper);
        assert_eq!(snap.obstacles[1].bounds.pos.x, 796.0);
        assert_eq!(snap.score, 2.5);
        assert_eq!(snap.display_score, 2);
        assert!(!snap.ended);
        assert_eq!(snap.seed, 3);
        assert_eq!(snap.hud_text(), "Score: 2");
        assert_eq!(snap.banner(), None);
    }

    #[test]
    fn test_snapshot_is_detached_from_state() {
        let mut state = GameState::new(Settings::default(), 3);
        let snap = Snapshot::capture(&state);
        tick(&mut state);
        assert_eq!(snap.entity.pos.y, 320.0);
        assert_ne!(state.entity.pos.y, 320.0);
    }

    #[test]
    fn test_hud_text_after_game_over() {
        let mut state = GameState::new(Settings::default(), 3);
        state.entity.pos.y = 630.0;
        tick(&mut state);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.end_reason, Some(EndReason::Floor));
        assert_eq!(snap.hud_text(), "Score: 0");
        assert_eq!(snap.banner(), Some("Game Over!"));
    }

    #[test]
    fn test_serializes_to_json() {
        let state = GameState::new(Settings::default(), 3);
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Snapshot::capture(&state));
    }
}
