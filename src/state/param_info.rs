// src/state/param_info.rs
//
// Parameter declarations consumed by the host.

use std::fmt;

/// Identifier of a parameter within a module type.
pub type ParamId = u32;

/// How the host should map knob travel to value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayCurve {
    #[default]
    Linear,
    /// Symmetric around zero (pitch offsets, bipolar CV)
    Symmetric,
}

/// Unit shown next to a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamUnit {
    #[default]
    None,
    Volts,
    /// One unit per octave
    Octaves,
    Hz,
}

impl fmt::Display for ParamUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamUnit::None => Ok(()),
            ParamUnit::Volts => write!(f, "V"),
            ParamUnit::Octaves => write!(f, "oct"),
            ParamUnit::Hz => write!(f, "Hz"),
        }
    }
}

/// Declaration of one knob-like parameter.
///
/// The range is a UI constraint only. Modules must not assume values
/// they receive through `set_param` respect it.
#[derive(Debug, Clone)]
pub struct ParamInfo {
    pub id: ParamId,
    pub name: String,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub unit: ParamUnit,
    pub curve: DisplayCurve,
}

impl ParamInfo {
    pub fn new(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            min: 0.0,
            max: 1.0,
            default: 0.0,
            unit: ParamUnit::None,
            curve: DisplayCurve::Linear,
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn default(mut self, value: f32) -> Self {
        self.default = value;
        self
    }

    pub fn unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn curve(mut self, curve: DisplayCurve) -> Self {
        self.curve = curve;
        self
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Map a value to 0..1 knob travel.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        (value - self.min) / (self.max - self.min)
    }

    /// Map 0..1 knob travel to a value.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }

    pub fn format(&self, value: f32) -> String {
        if self.unit == ParamUnit::None {
            format!("{:.2}", value)
        } else {
            format!("{:.2} {}", value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch() -> ParamInfo {
        ParamInfo::new(0, "Pitch")
            .range(-3.0, 3.0)
            .default(0.0)
            .unit(ParamUnit::Octaves)
            .curve(DisplayCurve::Symmetric)
    }

    #[test]
    fn test_normalize_round_trips_range_ends() {
        let p = pitch();
        assert_eq!(p.normalize(-3.0), 0.0);
        assert_eq!(p.normalize(0.0), 0.5);
        assert_eq!(p.denormalize(1.0), 3.0);
    }

    #[test]
    fn test_clamp_and_format() {
        let p = pitch();
        assert_eq!(p.clamp(7.0), 3.0);
        assert_eq!(p.format(1.0), "1.00 oct");
        assert_eq!(ParamInfo::new(1, "Raw").format(0.5), "0.50");
    }
}
