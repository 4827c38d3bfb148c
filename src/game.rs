//! Simulation controller
//!
//! `Game` is the single owner of a run. Hosts construct it with validated
//! settings, then feed it ticks, spawn signals and input commands one at a
//! time; renderers read snapshots between calls.

use crate::error::ConfigError;
use crate::platform::clock::Signal;
use crate::platform::input::{Command, RawInput, map_input};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, Snapshot};

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Validate `settings` and start a run seeded with `seed`
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        log::info!(
            "New game: world {}x{}, seed {}",
            settings.world.width,
            settings.world.height,
            seed
        );
        Ok(Self {
            state: GameState::new(settings, seed),
        })
    }

    /// Advance one fixed step
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
    }

    /// Spawn-timer fired
    pub fn on_spawn(&mut self) {
        sim::spawn(&mut self.state);
    }

    pub fn on_jump(&mut self) {
        sim::jump(&mut self.state);
    }

    pub fn on_restart(&mut self) {
        sim::restart(&mut self.state);
    }

    /// Apply one scheduled signal from the frame clock
    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::Tick => self.tick(),
            Signal::Spawn => self.on_spawn(),
        }
    }

    pub fn command(&mut self, command: Command) {
        match command {
            Command::Jump => self.on_jump(),
            Command::Restart => self.on_restart(),
        }
    }

    /// Map and apply a raw host input. Unmapped inputs are dropped.
    pub fn handle_input(&mut self, raw: RawInput) {
        if let Some(command) = map_input(raw, self.is_ended()) {
            self.command(command);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    pub fn score(&self) -> f32 {
        self.state.score()
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
