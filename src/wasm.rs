//! WebAssembly bindings via wasm-bindgen for browser hosts.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { nd3_init, Nd3Trigs } from './nd3.js';
//!
//! await init();
//! nd3_init();
//!
//! const trigs = new Nd3Trigs(sampleRate);
//! trigs.set_pitch(1.0);
//!
//! // In the AudioWorklet's process():
//! trigs.process(cvBlock, outputBlock);
//! ```

use wasm_bindgen::prelude::*;

use crate::config::{DEFAULT_MAX_BLOCK, EngineConfig};
use crate::engine::Engine;
use crate::node_factory::NodeRegistry;
use crate::nodes::{models, params, register_standard_nodes};
use crate::state::ModuleState;

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn nd3_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Trigs Module
// ═══════════════════════════════════════════════════════════════════════════

/// One Trigs module, rendered block by block in an AudioWorklet.
#[wasm_bindgen]
pub struct Nd3Trigs {
    inner: Engine,
}

#[wasm_bindgen]
impl Nd3Trigs {
    #[wasm_bindgen(constructor)]
    pub fn new(sample_rate: f64) -> Result<Nd3Trigs, JsValue> {
        let mut registry = NodeRegistry::new();
        register_standard_nodes(&mut registry);

        let node = registry
            .create(models::TRIGS)
            .map_err(|e| JsValue::from_str(&format!("{e}")))?;
        let engine = Engine::new(node, EngineConfig::new(sample_rate, DEFAULT_MAX_BLOCK))
            .map_err(|e| JsValue::from_str(&format!("{e}")))?;

        Ok(Nd3Trigs { inner: engine })
    }

    /// Set the pitch knob (octaves, nominally -3..3).
    pub fn set_pitch(&mut self, value: f32) {
        self.inner.set_param(params::PITCH, value);
    }

    pub fn pitch(&self) -> f32 {
        self.inner.param(params::PITCH).unwrap_or(0.0)
    }

    /// Render one block. Pass an empty `cv` for an unpatched pitch input.
    pub fn process(&mut self, cv: &[f32], output: &mut [f32]) {
        let cv = if cv.is_empty() { None } else { Some(cv) };
        self.inner.process_block(cv, output);
    }

    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), JsValue> {
        self.inner
            .set_sample_rate(sample_rate)
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Module state as a JSON string.
    pub fn save_state(&self) -> Result<String, JsValue> {
        let state = self
            .inner
            .save_state()
            .ok_or_else(|| JsValue::from_str("module has no state"))?;
        state.to_json().map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn load_state(&mut self, json: &str) -> Result<(), JsValue> {
        let state = ModuleState::from_json(json).map_err(|e| JsValue::from_str(&format!("{e}")))?;
        self.inner
            .load_state(&state)
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }
}
