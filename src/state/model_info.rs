// src/state/model_info.rs
//
// Port and module-type declarations.

use std::fmt;

use super::ParamInfo;

/// Identifier of a port within a module type.
pub type PortId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Declaration of one jack on the panel.
#[derive(Debug, Clone)]
pub struct PortInfo {
    pub id: PortId,
    pub name: String,
    pub direction: PortDirection,
}

impl PortInfo {
    pub fn input(id: PortId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            direction: PortDirection::Input,
        }
    }

    pub fn output(id: PortId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            direction: PortDirection::Output,
        }
    }
}

/// Browser category for a module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Oscillator,
    Midi,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Oscillator => write!(f, "Oscillator"),
            Tag::Midi => write!(f, "MIDI"),
        }
    }
}

/// Everything the host needs to know about a module type before
/// instantiating it.
///
/// `plugin` and `slug` together identify the type and must never change
/// once patches referencing them exist.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub plugin: String,
    pub slug: String,
    pub name: String,
    pub tags: Vec<Tag>,
    pub inputs: Vec<PortInfo>,
    pub outputs: Vec<PortInfo>,
    pub parameters: Vec<ParamInfo>,
}

impl ModelInfo {
    pub fn new(
        plugin: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            slug: slug.into(),
            name: name.into(),
            tags: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn with_input(mut self, port: PortInfo) -> Self {
        self.inputs.push(port);
        self
    }

    pub fn with_output(mut self, port: PortInfo) -> Self {
        self.outputs.push(port);
        self
    }

    pub fn with_param(mut self, param: ParamInfo) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn find_param(&self, id: u32) -> Option<&ParamInfo> {
        self.parameters.iter().find(|p| p.id == id)
    }

    pub fn find_input(&self, id: PortId) -> Option<&PortInfo> {
        self.inputs.iter().find(|p| p.id == id)
    }

    pub fn find_output(&self, id: PortId) -> Option<&PortInfo> {
        self.outputs.iter().find(|p| p.id == id)
    }
}
