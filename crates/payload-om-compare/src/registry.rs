//! Named strategy registry.
//!
//! Strategies are looked up by contract and name. A registry is populated
//! through a [`RegistryBuilder`] and is immutable once built; tests that need
//! different wiring build their own instance instead of changing a shared one.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::comparer::{EmptyErrorComparer, ErrorComparer, ExactErrorComparer};
use crate::error::{CompareError, Result};

/// A strategy contract, identified by name in lookups and error messages.
pub trait Contract {
    const NAME: &'static str;
}

impl Contract for dyn ErrorComparer {
    const NAME: &'static str = "ErrorComparer";
}

type Factory<T> = Box<dyn Fn() -> Box<T> + Send + Sync>;

/// Collects factories for contract `T` before the registry is sealed.
pub struct RegistryBuilder<T: ?Sized + Contract> {
    factories: IndexMap<String, Factory<T>>,
}

impl<T: ?Sized + Contract> RegistryBuilder<T> {
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Register a factory under `name`. Names are unique per contract.
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Result<Self>
    where
        F: Fn() -> Box<T> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(CompareError::DuplicateStrategy {
                contract: T::NAME,
                name,
            });
        }
        info!("Registering {} strategy: {}", T::NAME, name);
        self.factories.insert(name, Box::new(factory));
        Ok(self)
    }

    /// Seal the registry.
    pub fn build(self) -> StrategyRegistry<T> {
        StrategyRegistry {
            factories: self.factories,
        }
    }
}

impl<T: ?Sized + Contract> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable mapping from strategy name to factory for contract `T`.
pub struct StrategyRegistry<T: ?Sized + Contract> {
    factories: IndexMap<String, Factory<T>>,
}

impl<T: ?Sized + Contract> StrategyRegistry<T> {
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder::new()
    }

    /// Create a fresh instance of the strategy registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Box<T>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CompareError::UnknownStrategy {
                contract: T::NAME,
                name: name.to_string(),
            })?;
        debug!("Resolved {} strategy: {}", T::NAME, name);
        Ok(factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

/// Error comparers bundled with this crate: `Empty` and `Exact`.
pub fn builtin_error_comparers() -> Result<StrategyRegistry<dyn ErrorComparer>> {
    let registry = StrategyRegistry::<dyn ErrorComparer>::builder()
        .register(EmptyErrorComparer::NAME, || {
            Box::new(EmptyErrorComparer) as Box<dyn ErrorComparer>
        })?
        .register(ExactErrorComparer::NAME, || {
            Box::new(ExactErrorComparer) as Box<dyn ErrorComparer>
        })?
        .build();
    Ok(registry)
}
