//! Engine lookup by name

use indexmap::IndexMap;

use crate::error::CounterError;
use crate::stats::engine::StatisticsEngine;
use crate::stats::onepass::OnePass;
use crate::stats::stattext::Stattext;

/// Builds a fresh, unconfigured engine
pub type EngineFactory = fn() -> Box<dyn StatisticsEngine>;

/// Engines available for selection, keyed by name
///
/// The default registry holds the built-in engines, `stattext` first.
pub struct EngineRegistry {
    factories: IndexMap<&'static str, EngineFactory>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        let mut registry = EngineRegistry::empty();
        registry.register(Stattext::NAME, || Box::new(Stattext::new()));
        registry.register(OnePass::NAME, || Box::new(OnePass::new()));
        registry
    }
}

impl EngineRegistry {
    pub fn empty() -> Self {
        EngineRegistry {
            factories: IndexMap::new(),
        }
    }

    /// Register an engine under `name`, replacing any previous one
    pub fn register(&mut self, name: &'static str, factory: EngineFactory) {
        self.factories.insert(name, factory);
    }

    /// Create a new engine by name
    pub fn create(&self, name: &str) -> Result<Box<dyn StatisticsEngine>, CounterError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CounterError::UnknownEngine {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })?;
        log::debug!("Creating engine '{}'", name);
        Ok(factory())
    }

    /// Create an engine by name and set its precision
    pub fn create_with_precision(
        &self,
        name: &str,
        precision: u32,
    ) -> Result<Box<dyn StatisticsEngine>, CounterError> {
        let mut engine = self.create(name)?;
        engine.set_precision(precision)?;
        Ok(engine)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}
