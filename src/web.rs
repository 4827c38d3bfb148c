//! Browser bindings
//!
//! JS owns the canvas, the animation frame loop and the DOM listeners; it
//! forwards frame deltas and key codes here and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::platform::{Host, Key, RawInput};
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");
    log::info!("Gap Runner (web) starting...");
}

/// Game instance handed to JS
#[wasm_bindgen]
pub struct WebGame {
    host: Host,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game from optional JSON settings, seeded from the wall clock
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json),
            None => Ok(Settings::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = js_sys::Date::now() as u64;
        let host = Host::new(settings, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame { host })
    }

    /// Advance by one animation frame (seconds). Returns ticks simulated.
    pub fn frame(&mut self, dt: f32) -> u32 {
        self.host.frame(dt)
    }

    /// Forward a `KeyboardEvent.code`
    pub fn key_down(&mut self, code: &str) {
        self.host.inputs.push(RawInput::KeyDown(Key::from_code(code)));
    }

    pub fn pointer_down(&mut self) {
        self.host.inputs.push(RawInput::PointerDown);
    }

    /// Toggle the attract-mode pilot
    pub fn set_idle(&mut self, idle: bool) {
        self.host.autopilot = idle;
    }

    /// Interpolation alpha between the last two ticks
    pub fn alpha(&self) -> f32 {
        self.host.clock.alpha()
    }

    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(&self.host.game.snapshot()) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Snapshot serialization failed: {}", e);
                String::new()
            }
        }
    }

    pub fn hud_text(&self) -> String {
        self.host.game.snapshot().hud_text()
    }

    /// "Game Over!" once the run has ended, otherwise undefined
    pub fn banner(&self) -> Option<String> {
        self.host.game.snapshot().banner().map(str::to_string)
    }
}
