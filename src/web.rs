//! Browser bindings
//!
//! JavaScript owns the canvas, the image cache and `requestAnimationFrame`;
//! it drives the game through [`WebGame`] and paints the returned draw list.

use wasm_bindgen::prelude::*;

use crate::input::{command_for_key_code, command_for_key_name};
use crate::renderer::{DrawList, render_world};
use crate::sim::{SpriteId, World, tick};
use crate::settings::GameConfig;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Fails only if the host page already installed a logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Gem Crossing starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    world: World,
    draw_list: DrawList,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game on the reference board, or from a JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64, config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json_str(&json),
            None => Ok(GameConfig::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let world = World::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        Ok(WebGame {
            world,
            draw_list: DrawList::default(),
        })
    }

    /// Image paths to preload, in the order sprite ids are numbered
    pub fn asset_paths() -> Vec<String> {
        SpriteId::ALL
            .iter()
            .map(|s| s.asset_path().to_string())
            .collect()
    }

    /// Advance one frame (`dt` in seconds)
    pub fn tick(&mut self, dt: f32) {
        tick(&mut self.world, dt);
    }

    /// Legacy `keyCode` input; unmapped keys are ignored
    pub fn key_code(&mut self, code: u32) {
        self.world.handle_command(command_for_key_code(code));
    }

    /// `KeyboardEvent.key` input; unmapped keys are ignored
    pub fn key(&mut self, key: &str) {
        self.world.handle_command(command_for_key_name(key));
    }

    pub fn score(&self) -> u64 {
        self.world.score()
    }

    pub fn new_session(&mut self) -> Result<(), JsValue> {
        self.world
            .new_session()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// This frame's draw calls as a JSON array
    pub fn render(&mut self) -> Result<String, JsValue> {
        self.draw_list.clear();
        render_world(&self.world, &mut self.draw_list);
        self.draw_list
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Events since the last call as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.world.drain_events()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
