//! Game state and core simulation types
//!
//! Everything a run needs to be reproduced lives here: settings, seed, RNG,
//! the entity and the ordered obstacle sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::{EntityTuning, ObstacleTuning, Settings};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics, spawning and scoring are live
    Running,
    /// Run over; the world is frozen until restart
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Bottom edge reached the world floor
    Floor,
    /// Overlapped an obstacle
    Obstacle,
}

/// Notable things that happened, for sound/flash hooks on the host side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// A pair was spawned with its gap starting at `offset`
    Spawned { offset: f32 },
    /// Score after the increment
    Scored { score: f32 },
    Ended { reason: EndReason, score: f32 },
    Restarted,
}

/// The player-controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner; x never changes after construction
    pub pos: Vec2,
    pub vel_y: f32,
    pub size: Vec2,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Entity {
    pub fn new(start: Vec2, tuning: &EntityTuning) -> Self {
        Self {
            pos: start,
            vel_y: 0.0,
            size: Vec2::new(tuning.width, tuning.height),
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
        }
    }

    /// Integrate one tick of gravity, clamped at the world top
    pub fn update(&mut self) {
        self.vel_y += self.gravity;
        self.pos.y += self.vel_y;
        self.pos.y = self.pos.y.max(0.0);
    }

    /// Replace any fall velocity with the upward impulse
    pub fn jump(&mut self) {
        self.vel_y = -self.jump_impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Which half of a gapped pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Hangs from above; its bottom edge is the top of the gap
    Upper,
    /// Rises from below; its top edge is the bottom of the gap
    Lower,
}

/// One half of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Entity has already cleared this obstacle and been scored for it
    pub passed: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, pos: Vec2, tuning: &ObstacleTuning) -> Self {
        Self {
            kind,
            pos,
            size: Vec2::new(tuning.width, tuning.height),
            passed: false,
        }
    }

    pub fn update(&mut self, velocity_x: f32) {
        self.pos.x += velocity_x;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Complete simulation state (deterministic for a given seed and event order)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed; (settings, seed, event order) reproduces a run
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub entity: Entity,
    /// Active obstacles in spawn order, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Score in half points; each obstacle is worth one half
    pub score_halves: u32,
    /// Ticks simulated while running since the last (re)start
    pub time_ticks: u64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run. `settings` are assumed valid.
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            entity: Entity::new(settings.entity_start(), &settings.entity),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            end_reason: None,
            obstacles: Vec::new(),
            score_halves: 0,
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn score(&self) -> f32 {
        self.score_halves as f32 / 2.0
    }

    /// Score as shown on the HUD (fully cleared pairs)
    pub fn display_score(&self) -> u32 {
        self.score_halves / 2
    }

    /// Transition to Ended, recording why. Later calls in the same tick are ignored.
    pub fn end(&mut self, reason: EndReason) {
        if self.is_ended() {
            return;
        }
        self.phase = GamePhase::Ended;
        self.end_reason = Some(reason);
        self.events.push(GameEvent::Ended {
            reason,
            score: self.score(),
        });
        log::info!(
            "Run ended ({:?}) after {} ticks, score {}",
            reason,
            self.time_ticks,
            self.display_score()
        );
    }

    /// Back to the starting position with an empty world. The RNG stream continues.
    pub fn reset(&mut self) {
        self.entity = Entity::new(self.settings.entity_start(), &self.settings.entity);
        self.obstacles.clear();
        self.score_halves = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.end_reason = None;
    }
}
