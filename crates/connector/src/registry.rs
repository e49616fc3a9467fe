//! Router registry - named router factories resolved at task start
//!
//! Replaces runtime reflection with an explicit registry: the configuration
//! names a router, the registry produces it. Hosts may register additional
//! factories before `start`.

use std::collections::HashMap;
use std::sync::Arc;

use contracts::{ConnectorError, Router};

use crate::routers::{KeyRouter, TopicRouter};

/// Name of the router used when the configuration names none
pub const DEFAULT_ROUTER: &str = "topic";

/// Factory producing one router instance
pub type RouterFactory = fn() -> Arc<dyn Router>;

/// Registry of named router factories
pub struct RouterRegistry {
    factories: HashMap<String, RouterFactory>,
}

impl RouterRegistry {
    /// Create a registry pre-populated with the built-in routers
    pub fn builtin() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register(DEFAULT_ROUTER, || Arc::new(TopicRouter));
        registry.register("key", || Arc::new(KeyRouter));
        registry
    }

    /// Register a factory under `name`, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, factory: RouterFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Produce the router selected by the configuration
    ///
    /// `None` selects the default router.
    ///
    /// # Errors
    /// Returns `RouterNotFound` for an unregistered name; the task treats
    /// this as a fatal start error.
    pub fn resolve(&self, name: Option<&str>) -> Result<Arc<dyn Router>, ConnectorError> {
        let name = name.unwrap_or(DEFAULT_ROUTER);
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ConnectorError::RouterNotFound { name: name.into() })
    }
}

impl Default for RouterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
