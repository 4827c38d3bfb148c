//! Obstacle pair spawning
//!
//! A pair is an upper obstacle whose bottom edge sits at the gap offset and a
//! lower obstacle whose top edge sits one gap below it. Both start at the
//! world's right edge and move independently afterwards.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
use crate::settings::{ObstacleTuning, WorldBounds};

/// Pick the y of the top of the gap, a whole number in
/// `[top_margin, top_margin + offset_range)`.
pub fn gap_offset<R: Rng>(rng: &mut R, world: &WorldBounds, tuning: &ObstacleTuning) -> f32 {
    let range = tuning.offset_range(world);
    (rng.random::<f32>() * range).floor() + tuning.top_margin
}

/// Build the upper and lower obstacle for a gap starting at `offset`
pub fn obstacle_pair(offset: f32, world: &WorldBounds, tuning: &ObstacleTuning) -> [Obstacle; 2] {
    let x = world.width;
    [
        Obstacle::new(
            ObstacleKind::Upper,
            Vec2::new(x, offset - tuning.height),
            tuning,
        ),
        Obstacle::new(ObstacleKind::Lower, Vec2::new(x, offset + tuning.gap), tuning),
    ]
}

/// Service one spawn-timer signal. Dropped (not buffered) while the run is ended.
pub fn spawn(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    let world = state.settings.world;
    let tuning = state.settings.obstacle;
    let offset = gap_offset(&mut state.rng, &world, &tuning);
    state.obstacles.extend(obstacle_pair(offset, &world, &tuning));
    state.events.push(GameEvent::Spawned { offset });
    log::debug!("Spawned pair with gap {}..{}", offset, offset + tuning.gap);
}
