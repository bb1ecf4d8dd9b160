// src/engine.rs

use log::debug;

use crate::audio_buffer::AudioBuffer;
use crate::config::{ConfigError, EngineConfig};
use crate::modulation::ModSignal;
use crate::node::{Node, ProcessContext};
use crate::state::{ModuleState, StateError};

/// Drives a single module block by block.
///
/// `process_block` runs on the audio thread: it never allocates, blocks or
/// logs. Everything else is for the control side.
pub struct Engine {
    node: Box<dyn Node>,
    config: EngineConfig,

    /// Planar scratch output, `num_channels * max_block` samples
    scratch: Vec<f32>,

    /// Frames rendered since construction
    sample_pos: u64,
}

impl Engine {
    pub fn new(mut node: Box<dyn Node>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "engine prepare: sample_rate={}, max_block={}",
            config.sample_rate, config.max_block
        );
        node.prepare(config.sample_rate, config.max_block);
        let scratch = vec![0.0; node.num_channels().max(1) * config.max_block];
        Ok(Self {
            node,
            config,
            scratch,
            sample_pos: 0,
        })
    }

    /// Render `out.len()` frames of output channel 0.
    ///
    /// A node reporting silence yields zeros, whatever it left in the buffer.
    /// `cv` feeds the pitch input one sample per frame; `None` leaves the
    /// jack unpatched. A CV buffer shorter than `out` holds its final value.
    pub fn process_block(&mut self, cv: Option<&[f32]>, out: &mut [f32]) {
        let max_block = self.config.max_block;
        let channels = self.node.num_channels().max(1);

        let mut offset = 0;
        while offset < out.len() {
            let frames = (out.len() - offset).min(max_block);
            let signal = match cv {
                Some(cv) => cv_chunk(cv, offset, frames),
                None => ModSignal::UNPATCHED,
            };

            let ctx = ProcessContext::new(frames, self.config.sample_rate, self.sample_pos);
            let mut buffer = AudioBuffer::new(&mut self.scratch[..channels * frames], channels);
            if self.node.process(&ctx, &[signal], &mut buffer) {
                buffer.clear();
            }

            out[offset..offset + frames].copy_from_slice(buffer.channel(0));

            offset += frames;
            self.sample_pos += frames as u64;
        }
    }

    /// Host sample-rate change. Internal state is kept.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), ConfigError> {
        let config = EngineConfig::new(sample_rate, self.config.max_block);
        config.validate()?;
        debug!("engine sample rate change: {} -> {}", self.config.sample_rate, sample_rate);
        self.config = config;
        self.node.prepare(config.sample_rate, config.max_block);
        Ok(())
    }

    pub fn set_param(&mut self, param_id: u32, value: f32) {
        self.node.set_param(param_id, value);
    }

    pub fn param(&self, param_id: u32) -> Option<f32> {
        self.node.param(param_id)
    }

    pub fn reset(&mut self) {
        self.node.reset();
    }

    pub fn save_state(&self) -> Option<ModuleState> {
        self.node.save_state()
    }

    pub fn load_state(&mut self, state: &ModuleState) -> Result<(), StateError> {
        self.node.load_state(state)?;
        debug!("module state restored: phase={}", state.phase);
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sample_pos(&self) -> u64 {
        self.sample_pos
    }
}

/// The slice of `cv` covering `frames` frames from `offset`.
fn cv_chunk(cv: &[f32], offset: usize, frames: usize) -> ModSignal<'_> {
    if offset >= cv.len() {
        return ModSignal::Constant(cv.last().copied().unwrap_or(0.0));
    }
    let end = (offset + frames).min(cv.len());
    ModSignal::Audio(&cv[offset..end])
}
