//! Raw input capture and mapping
//!
//! Hosts push whatever the window system reports; the simulation only ever sees
//! the two semantic commands. Unknown keys never get past this module.

/// Keys the game reacts to, named after DOM `KeyboardEvent.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    KeyW,
    KeyR,
    Other,
}

impl Key {
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "KeyW" => Key::KeyW,
            "KeyR" => Key::KeyR,
            _ => Key::Other,
        }
    }
}

/// Input as delivered by the host, before mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    KeyDown(Key),
    /// Click or tap anywhere
    PointerDown,
}

/// Semantic commands the simulation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
}

/// Map a raw input given whether the run has ended.
///
/// Flap keys double as "play again" on the game-over screen.
pub fn map_input(raw: RawInput, ended: bool) -> Option<Command> {
    match raw {
        RawInput::KeyDown(Key::Space | Key::ArrowUp | Key::KeyW) | RawInput::PointerDown => {
            Some(if ended { Command::Restart } else { Command::Jump })
        }
        RawInput::KeyDown(Key::KeyR) => Some(Command::Restart),
        RawInput::KeyDown(Key::Other) => None,
    }
}

/// A queue of raw inputs.
/// The host writes events as they arrive; the game drains them each frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<RawInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: RawInput) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order
    pub fn drain(&mut self) -> Vec<RawInput> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
