//! WebAssembly bindings for the quicksort visualizer.
//!
//! Provides a thin wrapper around `PlaybackController` for browser environments.
//! The page owns the timer: every call that schedules an advance returns a
//! ticket (`{ epoch, delayMs }`) or `null`, and the page calls `resume` with
//! that ticket from `setTimeout`.
//!
//! ```js
//! const viz = new WasmVisualizer(JSON.stringify(config), draw);
//! function tick(ticket) {
//!   if (ticket) setTimeout(() => tick(viz.resume(ticket)), ticket.delayMs);
//! }
//! startBtn.onclick = () => tick(viz.start());
//! ```

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    playback::{PlaybackController, PlaybackState, Renderer, ResumeTicket},
    schema::VisualizerConfig,
    trace::Action,
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// Forwards each applied action to a JavaScript callback as a plain object.
struct JsRenderer {
    callback: Function,
}

impl Renderer for JsRenderer {
    fn on_action(&mut self, action: &Action) {
        let value = match to_js(action) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to serialize action: {e}");
                return;
            }
        };
        if let Err(e) = self.callback.call1(&JsValue::NULL, &value) {
            log::warn!("Render callback threw: {e:?}");
        }
    }
}

/// WebAssembly wrapper for the playback controller.
#[wasm_bindgen]
pub struct WasmVisualizer {
    controller: PlaybackController<JsRenderer>,
}

#[wasm_bindgen]
impl WasmVisualizer {
    /// Create a visualizer from JSON configuration.
    ///
    /// # Arguments
    /// * `config_json` - JSON string containing VisualizerConfig
    /// * `on_action` - Called with every action the view should draw
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, on_action: Function) -> Result<WasmVisualizer, JsValue> {
        let config: VisualizerConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let renderer = JsRenderer {
            callback: on_action,
        };
        Ok(WasmVisualizer {
            controller: PlaybackController::new(&config, renderer),
        })
    }

    /// Start or resume playback. Returns the next ticket or `null`.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<JsValue, JsValue> {
        ticket_to_js(self.controller.start())
    }

    /// Perform the advance scheduled by `ticket`. Returns the next ticket or `null`.
    #[wasm_bindgen]
    pub fn resume(&mut self, ticket: JsValue) -> Result<JsValue, JsValue> {
        let ticket: ResumeTicket = serde_wasm_bindgen::from_value(ticket)
            .map_err(|e| JsValue::from_str(&format!("Invalid ticket: {e}")))?;
        ticket_to_js(self.controller.resume(ticket))
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.controller.pause();
    }

    /// Advance one action. Returns whether anything was applied.
    #[wasm_bindgen]
    pub fn step(&mut self) -> bool {
        self.controller.step()
    }

    /// New random sequence with `size` bars.
    #[wasm_bindgen]
    pub fn reset(&mut self, size: usize) {
        self.controller.reset(size);
    }

    /// New random sequence with the current bar count.
    #[wasm_bindgen]
    pub fn reshuffle(&mut self) {
        self.controller.reshuffle();
    }

    /// Set the delay between advances in milliseconds.
    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, delay_ms: u32) {
        self.controller.set_speed(u64::from(delay_ms));
    }

    /// Current playback state: "idle", "playing", "paused" or "finished".
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.controller.state() {
            PlaybackState::Idle => "idle",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Finished => "finished",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        self.controller.cursor()
    }

    /// Number of actions in the current trace.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.controller.len()
    }

    /// Action most recently shown, as a plain object.
    #[wasm_bindgen(js_name = currentAction)]
    pub fn current_action(&self) -> Result<JsValue, JsValue> {
        to_js(self.controller.current_action())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Per-kind action counts for the current trace.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        to_js(&self.controller.trace().stats())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

fn ticket_to_js(ticket: Option<ResumeTicket>) -> Result<JsValue, JsValue> {
    match ticket {
        Some(ticket) => to_js(&ticket)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
        None => Ok(JsValue::NULL),
    }
}

/// Serialize to plain JS objects (flattened actions would otherwise become `Map`s).
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer)
}
