// src/state/module_state.rs
//
// Module state persisted by the host across save/load.

use serde::{Deserialize, Serialize};

/// Current layout of [`ModuleState`].
pub const STATE_VERSION: u32 = 1;

/// Error while restoring module state.
#[derive(Debug)]
pub enum StateError {
    /// The document is not valid JSON or does not match the layout.
    Json(serde_json::Error),

    /// The document was written by a newer, incompatible layout.
    UnsupportedVersion { found: u32 },

    /// The stored phase is NaN or infinite.
    InvalidPhase { phase: f32 },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::Json(e) => write!(f, "Malformed module state: {}", e),
            StateError::UnsupportedVersion { found } => write!(
                f,
                "Unsupported module state version {} (expected {})",
                found, STATE_VERSION
            ),
            StateError::InvalidPhase { phase } => {
                write!(f, "Invalid phase {} in module state", phase)
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StateError {
    fn from(e: serde_json::Error) -> Self {
        StateError::Json(e)
    }
}

/// Oscillator state as stored in a patch file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Phase accumulator in [0, 1).
    pub phase: f32,
}

fn default_version() -> u32 {
    STATE_VERSION
}

impl ModuleState {
    pub fn new(phase: f32) -> Self {
        Self {
            version: STATE_VERSION,
            phase,
        }
    }

    /// Check the state can be applied to a module.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.version > STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: self.version,
            });
        }
        if !self.phase.is_finite() {
            return Err(StateError::InvalidPhase { phase: self.phase });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        let state: ModuleState = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let state = ModuleState::new(0.375);
        let json = state.to_json().unwrap();
        assert_eq!(json, r#"{"version":1,"phase":0.375}"#);
        assert_eq!(ModuleState::from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_missing_version_defaults_to_current() {
        let state = ModuleState::from_json(r#"{"phase":0.5}"#).unwrap();
        assert_eq!(state.version, STATE_VERSION);
        assert_eq!(state.phase, 0.5);
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            ModuleState::from_json("not json"),
            Err(StateError::Json(_))
        ));
        assert!(matches!(
            ModuleState::from_json(r#"{"version":1}"#),
            Err(StateError::Json(_))
        ));
        assert!(matches!(
            ModuleState::from_json(r#"{"version":9,"phase":0.1}"#),
            Err(StateError::UnsupportedVersion { found: 9 })
        ));
    }

    #[test]
    fn test_rejects_non_finite_phase() {
        let err = ModuleState::new(f32::NAN).validate().unwrap_err();
        assert!(matches!(err, StateError::InvalidPhase { .. }));
        assert!(err.to_string().contains("Invalid phase"));
    }
}
