//! Demo pilot
//!
//! Keeps the entity hovering just above the bottom of the next gap. Used for
//! the idle/attract screen and the headless runner.

use super::state::{GameState, ObstacleKind};

/// How far above the bottom of the gap the pilot starts jumping
pub const AIM_MARGIN: f32 = 10.0;

/// Bottom edge of the gap the entity has to get through next.
///
/// With nothing on screen the pilot aims for the middle of the world.
pub fn next_gap_floor(state: &GameState) -> f32 {
    let entity_x = state.entity.pos.x;
    state
        .obstacles
        .iter()
        .filter(|o| o.kind == ObstacleKind::Lower)
        .find(|o| o.right() >= entity_x)
        .map(|o| o.pos.y)
        .unwrap_or((state.settings.world.height + state.settings.obstacle.gap) / 2.0)
}

/// Decide whether to jump before the coming tick
pub fn should_jump(state: &GameState) -> bool {
    if state.is_ended() {
        return false;
    }
    let entity = &state.entity;
    // Where the bottom edge lands if we let gravity act once more
    let predicted_bottom = entity.bottom() + entity.vel_y + entity.gravity;
    predicted_bottom >= next_gap_floor(state) - AIM_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::spawn::{obstacle_pair, spawn};
    use crate::sim::tick::{jump, tick};

    #[test]
    fn test_aims_mid_world_when_empty() {
        let state = GameState::new(Settings::default(), 1);
        assert_eq!(next_gap_floor(&state), 395.0);
    }

    #[test]
    fn test_targets_first_unpassed_lower_obstacle() {
        let mut state = GameState::new(Settings::default(), 1);
        let settings = state.settings.clone();
        let mut behind = obstacle_pair(100.0, &settings.world, &settings.obstacle);
        for o in &mut behind {
            o.pos.x = -30.0;
        }
        state.obstacles.extend(behind);
        state
            .obstacles
            .extend(obstacle_pair(300.0, &settings.world, &settings.obstacle));

        assert_eq!(next_gap_floor(&state), 450.0);
    }

    #[test]
    fn test_jumps_only_near_gap_floor() {
        let mut state = GameState::new(Settings::default(), 1);
        assert!(!should_jump(&state));

        // Bottom lands at 389.5, inside the margin
        state.entity.pos.y = 365.0;
        assert!(should_jump(&state));

        // Higher up but falling fast
        state.entity.pos.y = 300.0;
        state.entity.vel_y = 65.0;
        assert!(should_jump(&state));
    }

    #[test]
    fn test_never_jumps_after_game_over() {
        let mut state = GameState::new(Settings::default(), 1);
        state.entity.pos.y = 630.0;
        tick(&mut state);
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_pilot_clears_pipes() {
        let mut state = GameState::new(Settings::default(), 2024);
        for t in 1..=1500u32 {
            if t % 90 == 0 {
                spawn(&mut state);
            }
            if should_jump(&state) {
                jump(&mut state);
            }
            tick(&mut state);
        }
        assert!(!state.is_ended(), "ended: {:?}", state.end_reason);
        assert!(state.display_score() >= 10, "score {}", state.display_score());
    }
}
