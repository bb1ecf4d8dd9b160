// src/node_factory.rs

use std::collections::HashMap;

use log::{debug, warn};

use crate::node::Node;
use crate::state::ModelInfo;

/// A factory capable of creating fresh node instances.
///
/// Only used when the host instantiates a module, never on the audio thread.
pub trait NodeFactory: Send {
    /// Create one node instance
    fn create(&self) -> Box<dyn Node>;

    /// Number of output channels this node produces
    fn num_channels(&self) -> usize;
}

/// Convenience factory for simple nodes
pub struct SimpleNodeFactory<F>
where
    F: Fn() -> Box<dyn Node> + Send,
{
    create_fn: F,
    channels: usize,
}

impl<F> SimpleNodeFactory<F>
where
    F: Fn() -> Box<dyn Node> + Send,
{
    pub fn new(create_fn: F) -> Self {
        Self {
            create_fn,
            channels: 1,
        }
    }

    pub fn channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }
}

impl<F> NodeFactory for SimpleNodeFactory<F>
where
    F: Fn() -> Box<dyn Node> + Send,
{
    fn create(&self) -> Box<dyn Node> {
        (self.create_fn)()
    }

    fn num_channels(&self) -> usize {
        self.channels
    }
}

/// Error looking up a module type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No model is registered under this slug.
    UnknownModel { slug: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnknownModel { slug } => write!(f, "Unknown model '{}'", slug),
        }
    }
}

impl std::error::Error for RegistryError {}

struct Entry {
    info: ModelInfo,
    factory: Box<dyn NodeFactory>,
}

/// Module types known to a host, keyed by model slug.
///
/// The registry is an ordinary value owned by whoever builds the host.
/// Nothing registers itself implicitly.
#[derive(Default)]
pub struct NodeRegistry {
    entries: HashMap<String, Entry>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module type. A second registration under the same slug
    /// replaces the first.
    pub fn register<F>(&mut self, info: ModelInfo, factory: F)
    where
        F: NodeFactory + 'static,
    {
        let slug = info.slug.clone();
        debug!("registering model {}/{}", info.plugin, slug);

        let previous = self.entries.insert(
            slug,
            Entry {
                info,
                factory: Box::new(factory),
            },
        );
        if let Some(previous) = previous {
            warn!("model '{}' registered twice, replacing", previous.info.slug);
        }
    }

    pub fn get(&self, slug: &str) -> Option<&ModelInfo> {
        self.entries.get(slug).map(|e| &e.info)
    }

    pub fn get_factory(&self, slug: &str) -> Option<&dyn NodeFactory> {
        self.entries.get(slug).map(|e| e.factory.as_ref())
    }

    /// Instantiate a module by slug.
    pub fn create(&self, slug: &str) -> Result<Box<dyn Node>, RegistryError> {
        let factory = self
            .get_factory(slug)
            .ok_or_else(|| RegistryError::UnknownModel {
                slug: slug.to_string(),
            })?;
        debug!("creating module '{}'", slug);
        Ok(factory.create())
    }

    /// Registered models, sorted by slug.
    pub fn iter(&self) -> impl Iterator<Item = &ModelInfo> {
        let mut infos: Vec<&ModelInfo> = self.entries.values().map(|e| &e.info).collect();
        infos.sort_by(|a, b| a.slug.cmp(&b.slug));
        infos.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_buffer::AudioBuffer;
    use crate::modulation::ModSignal;
    use crate::node::ProcessContext;

    // Test node that writes a constant
    struct ConstantNode {
        value: f32,
    }

    impl Node for ConstantNode {
        fn prepare(&mut self, _: f64, _: usize) {}

        fn process(
            &mut self,
            _ctx: &ProcessContext,
            _inputs: &[ModSignal],
            output: &mut AudioBuffer,
        ) -> bool {
            output.channel_mut(0).fill(self.value);
            false
        }

        fn num_channels(&self) -> usize {
            1
        }

        fn set_param(&mut self, _: u32, value: f32) {
            self.value = value;
        }
    }

    fn registry() -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        registry.register(
            ModelInfo::new("test", "Const", "Constant"),
            SimpleNodeFactory::new(|| Box::new(ConstantNode { value: 0.25 })),
        );
        registry
    }

    #[test]
    fn test_create_registered() {
        let registry = registry();
        assert_eq!(registry.len(), 1);

        let mut node = registry.create("Const").unwrap();
        let mut data = [0.0; 4];
        let mut out = AudioBuffer::mono(&mut data);
        node.process(&ProcessContext::new(4, 48_000.0, 0), &[], &mut out);
        assert_eq!(data, [0.25; 4]);
    }

    #[test]
    fn test_unknown_slug() {
        let err = registry().create("Nope").err().unwrap();
        assert_eq!(
            err,
            RegistryError::UnknownModel {
                slug: "Nope".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown model 'Nope'");
    }

    #[test]
    fn test_duplicate_replaces() {
        let mut registry = registry();
        registry.register(
            ModelInfo::new("test", "Const", "Other Constant"),
            SimpleNodeFactory::new(|| Box::new(ConstantNode { value: 1.0 })),
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Const").unwrap().name, "Other Constant");
    }
}
