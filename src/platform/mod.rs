//! Platform abstraction layer
//!
//! Glue between a host (browser, terminal, headless runner) and the game:
//! - `clock`: frame deltas to fixed tick/spawn signals
//! - `input`: raw keys to semantic commands

pub mod clock;
pub mod input;

pub use clock::{FrameClock, Signal};
pub use input::{Command, InputQueue, Key, RawInput, map_input};

use crate::error::ConfigError;
use crate::game::Game;
use crate::settings::Settings;
use crate::sim::autopilot;

/// A game plus the clock and input queue that drive it.
///
/// All mutation goes through `frame`, so a host only needs to serialize calls
/// to this one value.
#[derive(Debug)]
pub struct Host {
    pub game: Game,
    pub clock: FrameClock,
    pub inputs: InputQueue,
    /// Let the demo pilot play (idle/attract mode)
    pub autopilot: bool,
}

impl Host {
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        let clock = FrameClock::new(&settings.timing);
        Ok(Self {
            game: Game::new(settings, seed)?,
            clock,
            inputs: InputQueue::new(),
            autopilot: false,
        })
    }

    /// Run one host frame: apply queued input, then every signal that fell due.
    /// Returns the number of ticks simulated.
    pub fn frame(&mut self, frame_secs: f32) -> u32 {
        for raw in self.inputs.drain() {
            self.game.handle_input(raw);
        }

        let mut ticks = 0;
        for signal in self.clock.advance(frame_secs) {
            if signal == Signal::Tick {
                if self.autopilot && autopilot::should_jump(self.game.state()) {
                    self.game.on_jump();
                }
                ticks += 1;
            }
            self.game.apply(signal);
        }
        ticks
    }
}
