// src/node.rs

use crate::audio_buffer::AudioBuffer;
use crate::modulation::ModSignal;
use crate::state::{ModuleState, StateError};

/// Context passed to nodes during processing.
#[derive(Debug, Clone, Copy)]
pub struct ProcessContext {
    /// Number of frames to process
    pub frames: usize,

    /// Sample rate
    pub sample_rate: f64,

    /// Seconds per frame, the per-tick time step
    pub sample_time: f32,

    /// Position of the first frame since the engine started
    pub sample_pos: u64,
}

impl ProcessContext {
    pub fn new(frames: usize, sample_rate: f64, sample_pos: u64) -> Self {
        Self {
            frames,
            sample_rate,
            sample_time: (1.0 / sample_rate) as f32,
            sample_pos,
        }
    }
}

/// Core DSP node trait.
///
/// Nodes:
/// - do NOT allocate in `process`
/// - do NOT log in `process`
/// - ONLY process audio for the given context
pub trait Node: Send {
    /// Called once before playback starts and whenever the sample rate changes.
    fn prepare(&mut self, sample_rate: f64, max_block: usize);

    /// Process audio.
    ///
    /// Arguments:
    /// - `ctx`: frames, sample rate and time step
    /// - `inputs`: one signal per input port, indexed by input id. A port
    ///   beyond the end of the slice is unpatched and reads 0 V.
    /// - `output`: buffer to write output to
    ///
    /// Returns `true` if the output is silent (optimization hint).
    fn process(
        &mut self,
        ctx: &ProcessContext,
        inputs: &[ModSignal],
        output: &mut AudioBuffer,
    ) -> bool;

    /// Number of output channels.
    fn num_channels(&self) -> usize;

    /// Set a parameter value.
    fn set_param(&mut self, param_id: u32, value: f32);

    /// Current value of a parameter, if the node has it.
    fn param(&self, _param_id: u32) -> Option<f32> {
        None
    }

    /// Reset node state (host "initialize").
    fn reset(&mut self) {}

    /// Internal state worth keeping across save/load. `None` if the node
    /// has nothing to persist.
    fn save_state(&self) -> Option<ModuleState> {
        None
    }

    /// Restore state produced by [`Node::save_state`].
    fn load_state(&mut self, _state: &ModuleState) -> Result<(), StateError> {
        Ok(())
    }
}
