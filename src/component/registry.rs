//! Component registry: resolves config-level component keys to views.

use std::collections::HashMap;

use crate::component::view::{ComponentRef, View};

/// Maps registry keys (as referenced by `RouteConfig::component`) to view
/// components. Populated by the application before the route table is
/// compiled; lookups after that point are read-only.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentRef>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view under a key, replacing any previous registration.
    pub fn register(&mut self, key: impl Into<String>, view: impl View + 'static) -> ComponentRef {
        self.register_ref(key, ComponentRef::new(view))
    }

    /// Register an existing component handle under a key.
    pub fn register_ref(&mut self, key: impl Into<String>, component: ComponentRef) -> ComponentRef {
        let key = key.into();
        if self.components.contains_key(&key) {
            tracing::warn!(key = %key, "component registration replaced");
        }
        self.components.insert(key, component.clone());
        component
    }

    /// Look up a component by registry key.
    pub fn get(&self, key: &str) -> Option<&ComponentRef> {
        self.components.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::view::StaticView;

    #[test]
    fn test_register_and_get() {
        let mut registry = ComponentRegistry::new();
        let milestone = registry.register("MileStone", StaticView::new("MileStone"));

        assert!(registry.contains("MileStone"));
        assert_eq!(registry.get("MileStone"), Some(&milestone));
        assert_eq!(registry.get("HelloWorld"), None);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = ComponentRegistry::new();
        let first = registry.register("MileStone", StaticView::new("MileStone"));
        let second = registry.register("MileStone", StaticView::new("MileStone"));

        assert_ne!(first, second);
        assert_eq!(registry.get("MileStone"), Some(&second));
        assert_eq!(registry.len(), 1);
    }
}
