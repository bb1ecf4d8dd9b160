// src/nodes/trigs.rs
//
// The "Trigs" module: a pitch knob and a pitch CV jack driving a sine
// oscillator.

use crate::audio_buffer::AudioBuffer;
use crate::modulation::ModSignal;
use crate::node::{Node, ProcessContext};
use crate::oscillator::{Oscillator, OscillatorState};
use crate::state::{ModuleState, StateError};

use super::{inputs, outputs, params};

pub struct TrigsNode {
    osc: Oscillator,
    pitch: f32,
}

impl TrigsNode {
    pub fn new() -> Self {
        Self {
            osc: Oscillator::new(),
            pitch: 0.0,
        }
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.osc
    }
}

impl Default for TrigsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for TrigsNode {
    fn prepare(&mut self, _sample_rate: f64, _max_block: usize) {}

    fn process(
        &mut self,
        ctx: &ProcessContext,
        signals: &[ModSignal],
        output: &mut AudioBuffer,
    ) -> bool {
        let cv = signals
            .get(inputs::PITCH as usize)
            .copied()
            .unwrap_or(ModSignal::UNPATCHED);

        let buf = output.channel_mut(outputs::SINE as usize);
        for (frame, sample) in buf.iter_mut().take(ctx.frames).enumerate() {
            *sample = self
                .osc
                .step(ctx.sample_time, self.pitch, cv.value_audio(frame));
        }

        false
    }

    fn num_channels(&self) -> usize {
        1
    }

    fn set_param(&mut self, param_id: u32, value: f32) {
        // Range is enforced by the oscillator's pitch clamp, not here
        if param_id == params::PITCH {
            self.pitch = value;
        }
    }

    fn param(&self, param_id: u32) -> Option<f32> {
        (param_id == params::PITCH).then_some(self.pitch)
    }

    fn reset(&mut self) {
        self.osc.reset();
    }

    fn save_state(&self) -> Option<ModuleState> {
        Some(ModuleState::new(self.osc.phase()))
    }

    fn load_state(&mut self, state: &ModuleState) -> Result<(), StateError> {
        state.validate()?;
        self.osc.restore(OscillatorState::with_phase(state.phase));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 44_100.0;

    fn run(node: &mut TrigsNode, inputs: &[ModSignal], frames: usize) -> Vec<f32> {
        let mut data = vec![0.0; frames];
        let mut out = AudioBuffer::mono(&mut data);
        node.process(&ProcessContext::new(frames, SR, 0), inputs, &mut out);
        data
    }

    #[test]
    fn test_unpatched_matches_bare_oscillator() {
        let mut node = TrigsNode::new();
        node.set_param(params::PITCH, 0.5);
        let block = run(&mut node, &[], 64);

        let mut osc = Oscillator::new();
        let dt = (1.0 / SR) as f32;
        for &sample in &block {
            assert_eq!(sample, osc.step(dt, 0.5, 0.0));
        }
    }

    #[test]
    fn test_cv_is_added_per_sample() {
        let cv: Vec<f32> = (0..32).map(|i| i as f32 / 16.0 - 1.0).collect();
        let mut node = TrigsNode::new();
        node.set_param(params::PITCH, -1.0);
        let block = run(&mut node, &[ModSignal::Audio(&cv[..])], 32);

        let mut osc = Oscillator::new();
        let dt = (1.0 / SR) as f32;
        for (i, &sample) in block.iter().enumerate() {
            assert_eq!(sample, osc.step(dt, -1.0, cv[i]));
        }
    }

    #[test]
    fn test_out_of_range_knob_is_stored_then_clamped() {
        let mut node = TrigsNode::new();
        node.set_param(params::PITCH, 12.0);
        assert_eq!(node.param(params::PITCH), Some(12.0));
        assert_eq!(node.param(99), None);

        let mut reference = TrigsNode::new();
        reference.set_param(params::PITCH, 4.0);
        assert_eq!(run(&mut node, &[], 16), run(&mut reference, &[], 16));
    }

    #[test]
    fn test_state_round_trip() {
        let mut node = TrigsNode::new();
        node.set_param(params::PITCH, 1.0);
        run(&mut node, &[], 100);

        let saved = node.save_state().unwrap();
        let json = saved.to_json().unwrap();

        let mut restored = TrigsNode::new();
        restored.set_param(params::PITCH, 1.0);
        restored
            .load_state(&ModuleState::from_json(&json).unwrap())
            .unwrap();
        assert_eq!(restored.oscillator().phase(), node.oscillator().phase());
        assert_eq!(run(&mut node, &[], 32), run(&mut restored, &[], 32));
    }

    #[test]
    fn test_bad_state_leaves_phase_alone() {
        let mut node = TrigsNode::new();
        run(&mut node, &[], 10);
        let before = node.oscillator().phase();

        let result = node.load_state(&ModuleState::new(f32::INFINITY));
        assert!(matches!(result, Err(StateError::InvalidPhase { .. })));
        assert_eq!(node.oscillator().phase(), before);
    }

    #[test]
    fn test_reset_zeroes_phase_but_keeps_knob() {
        let mut node = TrigsNode::new();
        node.set_param(params::PITCH, 2.0);
        run(&mut node, &[], 10);
        node.reset();
        assert_eq!(node.oscillator().phase(), 0.0);
        assert_eq!(node.param(params::PITCH), Some(2.0));
    }
}
