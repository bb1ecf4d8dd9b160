// src/config.rs
//
// Audio configuration shared by the binary and the host bindings.

/// Default audio configuration
pub const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;
pub const DEFAULT_MAX_BLOCK: usize = 512;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Sample rate is zero, negative or not finite.
    InvalidSampleRate(f64),

    /// Block size of zero frames.
    InvalidBlockSize(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSampleRate(rate) => write!(f, "Invalid sample rate {}", rate),
            ConfigError::InvalidBlockSize(size) => write!(f, "Invalid block size {}", size),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Sample rate in Hz (e.g., 44100.0, 48000.0).
    pub sample_rate: f64,
    /// Maximum audio block size in frames (e.g., 128, 256, 512).
    pub max_block: usize,
}

impl EngineConfig {
    pub fn new(sample_rate: f64, max_block: usize) -> Self {
        Self {
            sample_rate,
            max_block,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if self.max_block == 0 {
            return Err(ConfigError::InvalidBlockSize(self.max_block));
        }
        Ok(())
    }

    /// Seconds per frame.
    pub fn sample_time(&self) -> f32 {
        (1.0 / self.sample_rate) as f32
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_block: DEFAULT_MAX_BLOCK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.sample_time() - 1.0 / 44_100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            EngineConfig::new(0.0, 64).validate(),
            Err(ConfigError::InvalidSampleRate(0.0))
        );
        assert!(EngineConfig::new(f64::NAN, 64).validate().is_err());
        assert_eq!(
            EngineConfig::new(48_000.0, 0).validate(),
            Err(ConfigError::InvalidBlockSize(0))
        );
    }
}
