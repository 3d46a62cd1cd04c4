//! Browser bindings
//!
//! The page owns the canvas, the animation frame loop and pointer events;
//! it calls into [`WebGame`] and renders `snapshot_json()` each frame.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::settings::GameConfig;
use crate::sim::GameEvent;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Balloon Pop starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game sized to the canvas (CSS pixels)
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebGame, JsValue> {
        let config = GameConfig::with_screen(width, height);
        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        let game = Game::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            game,
            last_time: None,
        })
    }

    /// Create a game from a JSON config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WebGame, JsValue> {
        let config = GameConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            game,
            last_time: None,
        })
    }

    pub fn start(&mut self) {
        self.game.start();
        self.last_time = None;
    }

    #[wasm_bindgen(js_name = playAgain)]
    pub fn play_again(&mut self) -> bool {
        let restarted = self.game.play_again().is_some();
        if restarted {
            self.last_time = None;
        }
        restarted
    }

    pub fn stop(&mut self) -> bool {
        self.game.stop().is_some()
    }

    /// Feed a `requestAnimationFrame` timestamp; returns the frame's events as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let dt = match self.last_time {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        events_json(&self.game.frame_fractional(dt))
    }

    pub fn tap(&mut self, id: u32) -> bool {
        self.game.tap(id).is_some()
    }

    /// Tap at a canvas point; returns the popped balloon id
    #[wasm_bindgen(js_name = tapAt)]
    pub fn tap_at(&mut self, x: f32, y: f32) -> Option<u32> {
        match self.game.tap_at(Vec2::new(x, y)) {
            Some(GameEvent::Popped { id }) => Some(id),
            _ => None,
        }
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.game
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn events_json(events: &[GameEvent]) -> String {
    match serde_json::to_string(events) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode events: {}", e);
            "[]".to_string()
        }
    }
}
