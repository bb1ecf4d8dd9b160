// src/lib.rs
//
// Library entry point for host integrations (native, iOS/Swift, web).

mod audio_buffer;
mod config;
mod engine;
mod modulation;
mod node;
mod node_factory;
mod nodes;
mod oscillator;
mod state;

#[cfg(feature = "ios")]
pub mod ffi;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use audio_buffer::{AudioBuffer, regions_overlap};
pub use config::{ConfigError, EngineConfig, DEFAULT_MAX_BLOCK, DEFAULT_SAMPLE_RATE};
pub use engine::Engine;
pub use modulation::ModSignal;
pub use node::{Node, ProcessContext};
pub use node_factory::{NodeFactory, NodeRegistry, RegistryError, SimpleNodeFactory};
pub use nodes::{
    PLUGIN_SLUG, TrigsNode, inputs, models, outputs, params, register_standard_nodes,
    trigs_model,
};
pub use oscillator::{
    OUTPUT_AMPLITUDE, Oscillator, OscillatorState, PITCH_MAX, PITCH_MIN, REFERENCE_FREQ,
    TickInput, TickOutput, clamp_pitch, pitch_to_freq, wrap_phase,
};
pub use state::{
    DisplayCurve, ModelInfo, ModuleState, ParamInfo, ParamUnit, PortDirection, PortInfo,
    STATE_VERSION, StateError, Tag,
};
