// src/nodes/mod.rs
//
// Module types provided by the nd3 plugin.

mod trigs;

pub use trigs::*;

use crate::node_factory::{NodeRegistry, SimpleNodeFactory};
use crate::state::{DisplayCurve, ModelInfo, ParamInfo, ParamUnit, PortInfo, Tag};

/// Plugin slug shared by every model below.
pub const PLUGIN_SLUG: &str = "nd3";

// ═══════════════════════════════════════════════════════════════════
// Model slugs
// ═══════════════════════════════════════════════════════════════════

pub mod models {
    pub const TRIGS: &str = "NDTrigs";
}

// ═══════════════════════════════════════════════════════════════════
// Parameter and port IDs
// ═══════════════════════════════════════════════════════════════════

pub mod params {
    pub const PITCH: u32 = 0;
}

pub mod inputs {
    pub const PITCH: u32 = 0;
}

pub mod outputs {
    pub const SINE: u32 = 0;
}

// ═══════════════════════════════════════════════════════════════════
// Registry Population
// ═══════════════════════════════════════════════════════════════════

/// Populate the registry with every model in the plugin.
pub fn register_standard_nodes(registry: &mut NodeRegistry) {
    registry.register(
        trigs_model(),
        SimpleNodeFactory::new(|| Box::new(TrigsNode::new())).channels(1),
    );
}

/// Declaration of the Trigs module.
pub fn trigs_model() -> ModelInfo {
    ModelInfo::new(PLUGIN_SLUG, models::TRIGS, "ND3 Trigs")
        .with_tag(Tag::Oscillator)
        .with_tag(Tag::Midi)
        .with_param(
            ParamInfo::new(params::PITCH, "Pitch")
                .range(-3.0, 3.0)
                .default(0.0)
                .unit(ParamUnit::Octaves)
                .curve(DisplayCurve::Symmetric),
        )
        .with_input(PortInfo::input(inputs::PITCH, "Pitch"))
        .with_output(PortInfo::output(outputs::SINE, "Sine"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PortDirection;

    #[test]
    fn test_trigs_declarations() {
        let model = trigs_model();
        assert_eq!(model.plugin, "nd3");
        assert_eq!(model.slug, "NDTrigs");
        assert_eq!(model.tags, vec![Tag::Oscillator, Tag::Midi]);
        let tags: Vec<String> = model.tags.iter().map(|t| t.to_string()).collect();
        assert_eq!(tags, ["Oscillator", "MIDI"]);

        let pitch = model.find_param(params::PITCH).unwrap();
        assert_eq!((pitch.min, pitch.max, pitch.default), (-3.0, 3.0, 0.0));

        assert_eq!(
            model.find_input(inputs::PITCH).unwrap().direction,
            PortDirection::Input
        );
        assert_eq!(model.find_output(outputs::SINE).unwrap().name, "Sine");
        assert_eq!(model.inputs.len(), 1);
        assert_eq!(model.outputs.len(), 1);
    }

    #[test]
    fn test_registry_creates_trigs() {
        let mut registry = NodeRegistry::new();
        register_standard_nodes(&mut registry);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_factory(models::TRIGS).unwrap().num_channels(), 1);

        let node = registry.create(models::TRIGS).unwrap();
        assert_eq!(node.num_channels(), 1);
        assert_eq!(node.param(params::PITCH), Some(0.0));
        assert_eq!(node.save_state().map(|s| s.phase), Some(0.0));
    }
}
