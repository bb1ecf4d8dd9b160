// C-compatible FFI bindings for native hosts (Swift/iOS, C/C++ plugin shells).
//
// Safety requirements:
// - All pointers must be non-null unless documented otherwise
// - All handles must be created by this module and not fabricated
// - String parameters must be valid UTF-8
// - Caller must call the corresponding _destroy / _free function for each _create

use std::ffi::{CStr, CString, c_char};

use crate::audio_buffer::regions_overlap;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::nodes::{TrigsNode, params};
use crate::oscillator::Oscillator;
use crate::state::ModuleState;

use log::{LevelFilter, error, info, warn};
use oslog::OsLogger;

// Logger subsystem identifier
const LOG_SUBSYSTEM: &str = "com.nd3.trigs";

// ═══════════════════════════════════════════════════════════════════════════
// Logger Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the oslog logger.
///
/// Call once at application startup before using any other FFI function.
#[unsafe(no_mangle)]
pub extern "C" fn nd3_init_logger() {
    OsLogger::new(LOG_SUBSYSTEM)
        .level_filter(LevelFilter::Debug)
        .init()
        .ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

#[repr(C)]
#[derive(Clone, Copy)]
pub struct Nd3Config {
    pub sample_rate: f64,
    pub max_block_size: u32,
}

impl From<Nd3Config> for EngineConfig {
    fn from(c: Nd3Config) -> Self {
        EngineConfig::new(c.sample_rate, c.max_block_size as usize)
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn nd3_default_config() -> Nd3Config {
    let config = EngineConfig::default();
    Nd3Config {
        sample_rate: config.sample_rate,
        max_block_size: config.max_block as u32,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trigs Module
// ═══════════════════════════════════════════════════════════════════════════

/// Opaque handle to one Trigs module instance.
pub struct Nd3Trigs {
    inner: Engine,
}

/// Create a Trigs module. Returns null if the configuration is invalid.
#[unsafe(no_mangle)]
pub extern "C" fn nd3_trigs_create(config: Nd3Config) -> *mut Nd3Trigs {
    match Engine::new(Box::new(TrigsNode::new()), config.into()) {
        Ok(engine) => {
            info!("nd3_trigs_create: sample_rate={}", config.sample_rate);
            Box::into_raw(Box::new(Nd3Trigs { inner: engine }))
        }
        Err(e) => {
            error!("nd3_trigs_create: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `trigs` must come from `nd3_trigs_create` and not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_destroy(trigs: *mut Nd3Trigs) {
    if !trigs.is_null() {
        drop(unsafe { Box::from_raw(trigs) });
    }
}

/// Set the pitch knob (octaves, nominally -3..3).
///
/// # Safety
/// `trigs` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_set_pitch(trigs: *mut Nd3Trigs, value: f32) {
    if trigs.is_null() {
        return;
    }
    unsafe { (*trigs).inner.set_param(params::PITCH, value) };
}

/// Host sample-rate change. Returns `false` if the rate is rejected.
///
/// # Safety
/// `trigs` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_set_sample_rate(trigs: *mut Nd3Trigs, sample_rate: f64) -> bool {
    if trigs.is_null() {
        return false;
    }
    match unsafe { (*trigs).inner.set_sample_rate(sample_rate) } {
        Ok(()) => true,
        Err(e) => {
            warn!("nd3_trigs_set_sample_rate: {}", e);
            false
        }
    }
}

/// Render `frames` samples into `out`.
///
/// `cv` may be null (pitch input unpatched); otherwise it must point to
/// `frames` samples. In-place processing is not supported: if `cv` and
/// `out` overlap, the call is rejected and `out` is left untouched.
///
/// # Safety
/// `trigs` must be a live handle, `out` must be valid for `frames` writes,
/// `cv` (if non-null) must be valid for `frames` reads. `cv` and `out`
/// must not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_process(
    trigs: *mut Nd3Trigs,
    cv: *const f32,
    out: *mut f32,
    frames: u32,
) {
    if trigs.is_null() || out.is_null() {
        return;
    }
    let frames = frames as usize;
    if !cv.is_null() && regions_overlap(cv, frames, out, frames) {
        warn!("nd3_trigs_process: cv and out overlap, block skipped");
        return;
    }
    let out = unsafe { std::slice::from_raw_parts_mut(out, frames) };
    let cv = if cv.is_null() {
        None
    } else {
        Some(unsafe { std::slice::from_raw_parts(cv, frames) })
    };
    unsafe { (*trigs).inner.process_block(cv, out) };
}

/// # Safety
/// `trigs` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_reset(trigs: *mut Nd3Trigs) {
    if trigs.is_null() {
        return;
    }
    unsafe { (*trigs).inner.reset() };
}

/// Serialize module state as JSON. Free with `nd3_string_free`.
/// Returns null on failure.
///
/// # Safety
/// `trigs` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_save_state(trigs: *const Nd3Trigs) -> *mut c_char {
    if trigs.is_null() {
        return std::ptr::null_mut();
    }
    let Some(state) = (unsafe { (*trigs).inner.save_state() }) else {
        return std::ptr::null_mut();
    };
    match state.to_json().map(CString::new) {
        Ok(Ok(json)) => json.into_raw(),
        Ok(Err(e)) => {
            error!("nd3_trigs_save_state: {}", e);
            std::ptr::null_mut()
        }
        Err(e) => {
            error!("nd3_trigs_save_state: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Restore module state from JSON. Returns `false` and leaves the module
/// untouched if the document is rejected.
///
/// # Safety
/// `trigs` must be a live handle, `json` a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_trigs_load_state(trigs: *mut Nd3Trigs, json: *const c_char) -> bool {
    if trigs.is_null() || json.is_null() {
        return false;
    }
    let json = match unsafe { CStr::from_ptr(json) }.to_str() {
        Ok(s) => s,
        Err(e) => {
            warn!("nd3_trigs_load_state: {}", e);
            return false;
        }
    };
    let result =
        ModuleState::from_json(json).and_then(|state| unsafe { (*trigs).inner.load_state(&state) });
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("nd3_trigs_load_state: {}", e);
            false
        }
    }
}

/// # Safety
/// `s` must come from this module and not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Bare Oscillator (per-tick contract)
// ═══════════════════════════════════════════════════════════════════════════

/// Opaque handle to a bare oscillator.
pub struct Nd3Oscillator {
    inner: Oscillator,
}

#[unsafe(no_mangle)]
pub extern "C" fn nd3_oscillator_create() -> *mut Nd3Oscillator {
    Box::into_raw(Box::new(Nd3Oscillator {
        inner: Oscillator::new(),
    }))
}

/// # Safety
/// `osc` must come from `nd3_oscillator_create` and not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_oscillator_destroy(osc: *mut Nd3Oscillator) {
    if !osc.is_null() {
        drop(unsafe { Box::from_raw(osc) });
    }
}

/// One tick: returns the output voltage and advances the phase.
///
/// # Safety
/// `osc` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_oscillator_step(
    osc: *mut Nd3Oscillator,
    delta_time: f32,
    pitch_param: f32,
    pitch_cv: f32,
) -> f32 {
    if osc.is_null() {
        return 0.0;
    }
    unsafe { (*osc).inner.step(delta_time, pitch_param, pitch_cv) }
}

/// # Safety
/// `osc` must be a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nd3_oscillator_phase(osc: *const Nd3Oscillator) -> f32 {
    if osc.is_null() {
        return 0.0;
    }
    unsafe { (*osc).inner.phase() }
}
