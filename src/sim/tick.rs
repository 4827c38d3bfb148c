//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{has_passed, overlaps};
use super::state::{EndReason, GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed step. No-op once the run has ended.
///
/// Order matters: scoring and retirement look at positions updated earlier in
/// the same tick, and a floor hit freezes obstacles where they were.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Entity physics
    state.entity.update();

    // Floor
    if state.entity.bottom() >= state.settings.world.height {
        state.end(EndReason::Floor);
        return;
    }

    // Obstacles: move, collide, score
    let velocity_x = state.settings.obstacle.scroll_velocity;
    let entity_box = state.entity.bounds();
    let mut hit = false;
    for obstacle in &mut state.obstacles {
        obstacle.update(velocity_x);
        let bounds = obstacle.bounds();

        if overlaps(&entity_box, &bounds) {
            hit = true;
        }

        if !obstacle.passed && has_passed(entity_box.left(), &bounds) {
            obstacle.passed = true;
            state.score_halves += 1;
            let score = state.score_halves as f32 / 2.0;
            state.events.push(GameEvent::Scored { score });
        }
    }
    if hit {
        state.end(EndReason::Obstacle);
    }

    // Retire anything fully off the left edge
    state.obstacles.retain(|o| o.right() > 0.0);
}

/// Apply a jump input. Ignored once the run has ended.
pub fn jump(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.entity.jump();
    state.events.push(GameEvent::Jumped);
}

/// Apply a restart input. Ignored while running.
pub fn restart(state: &mut GameState) {
    if state.phase != GamePhase::Ended {
        return;
    }
    state.reset();
    state.events.push(GameEvent::Restarted);
    log::info!("Run restarted");
}
