// src/oscillator.rs
//
// Pitch-controlled sine oscillator.
//
// This is the only real DSP in the crate. Everything else exists to
// feed it parameter values and input samples and to collect its output.

use std::f32::consts::TAU;

/// Frequency produced at pitch 0 (middle C).
pub const REFERENCE_FREQ: f32 = 261.626;

/// Lowest pitch after combining knob and CV, in octaves.
pub const PITCH_MIN: f32 = -4.0;

/// Highest pitch after combining knob and CV, in octaves.
pub const PITCH_MAX: f32 = 4.0;

/// Peak output voltage.
pub const OUTPUT_AMPLITUDE: f32 = 5.0;

/// Clamp a combined pitch value to the playable range.
#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(PITCH_MIN, PITCH_MAX)
}

/// Exponential pitch-to-frequency mapping (one unit per octave).
///
/// No clamping happens here; see [`clamp_pitch`].
#[inline]
pub fn pitch_to_freq(pitch: f32) -> f32 {
    REFERENCE_FREQ * pitch.exp2()
}

/// Wrap a phase value into [0, 1).
///
/// Non-finite input maps to 0.
#[inline]
pub fn wrap_phase(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(1.0);
    // rem_euclid rounds tiny negative values up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// The oscillator's only persistent state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OscillatorState {
    /// Position within the current cycle, always in [0, 1).
    pub phase: f32,
}

impl OscillatorState {
    /// State with an arbitrary phase folded into [0, 1).
    pub fn with_phase(phase: f32) -> Self {
        Self {
            phase: wrap_phase(phase),
        }
    }
}

/// Named inputs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Seconds since the previous tick (usually `1 / sample_rate`).
    pub delta_time: f32,

    /// Manual pitch knob, nominally [-3, 3].
    pub pitch_param: f32,

    /// External pitch CV, 0 when unpatched.
    pub pitch_cv: f32,
}

/// Named output for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Sine output voltage in [-5, 5].
    pub sine: f32,
}

/// Sine oscillator driven by an exponential pitch input.
///
/// Each call to [`Oscillator::step`] advances the phase accumulator by
/// `freq * delta_time` and returns one sample. Phase is continuous across
/// calls, so parameter changes never produce a discontinuity in the phase.
///
/// `step` does not allocate, lock or log and runs in constant time, so it
/// is safe to call from an audio callback.
#[derive(Debug, Clone, Default)]
pub struct Oscillator {
    state: OscillatorState,
}

impl Oscillator {
    /// Create an oscillator at phase 0.
    pub fn new() -> Self {
        Self {
            state: OscillatorState::default(),
        }
    }

    /// Create an oscillator starting from a previously saved state.
    pub fn from_state(state: OscillatorState) -> Self {
        let mut osc = Self::new();
        osc.restore(state);
        osc
    }

    /// Produce one sample and advance the phase.
    ///
    /// Total over finite inputs. If the phase increment is not finite
    /// (NaN or infinite pitch or time step), the phase is left where it
    /// was and the sample is taken from the unchanged phase.
    #[inline]
    pub fn step(&mut self, delta_time: f32, pitch_param: f32, pitch_cv: f32) -> f32 {
        let pitch = clamp_pitch(pitch_param + pitch_cv);
        let increment = pitch_to_freq(pitch) * delta_time;

        if increment.is_finite() {
            let next = self.state.phase + increment;
            self.state.phase = if (0.0..1.0).contains(&next) {
                next
            } else {
                wrap_phase(next)
            };
        }

        OUTPUT_AMPLITUDE * (TAU * self.state.phase).sin()
    }

    /// [`Oscillator::step`] over named input and output records.
    #[inline]
    pub fn step_input(&mut self, input: &TickInput) -> TickOutput {
        TickOutput {
            sine: self.step(input.delta_time, input.pitch_param, input.pitch_cv),
        }
    }

    /// Current phase in [0, 1).
    #[inline]
    pub fn phase(&self) -> f32 {
        self.state.phase
    }

    /// Snapshot of the persistent state.
    pub fn state(&self) -> OscillatorState {
        self.state
    }

    /// Replace the persistent state. The phase is folded into [0, 1).
    pub fn restore(&mut self, state: OscillatorState) {
        self.state = OscillatorState::with_phase(state.phase);
    }

    /// Return to phase 0.
    pub fn reset(&mut self) {
        self.state = OscillatorState::default();
    }
}
