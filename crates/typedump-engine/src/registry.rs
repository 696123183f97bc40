use crate::renderer::Renderer;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use typedump_types::{Result, TypeKey};

/// Lookup table from type identifier to renderer.
///
/// Iteration follows registration order. Re-registering a key replaces the
/// renderer but keeps the key's original position, which matters for
/// ancestry resolution.
#[derive(Clone, Default)]
pub struct Registry {
    renderers: IndexMap<TypeKey, Arc<dyn Renderer>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: TypeKey, renderer: impl Renderer + 'static) {
        self.register_shared(key, Arc::new(renderer));
    }

    pub fn register_shared(&mut self, key: TypeKey, renderer: Arc<dyn Renderer>) {
        if self.renderers.insert(key.clone(), renderer).is_some() {
            tracing::debug!(key = %key, "replaced renderer");
        } else {
            tracing::debug!(key = %key, "registered renderer");
        }
    }

    /// Register under a raw type name, rejecting empty names.
    ///
    /// A kind tag such as `text` claims every value of that kind; it never
    /// selects a composite type of the same name.
    pub fn register_named(&mut self, name: &str, renderer: impl Renderer + 'static) -> Result<()> {
        let key = TypeKey::new(name)?;
        self.register(key, renderer);
        Ok(())
    }

    /// Remove the renderer for `key`; returns whether one was present.
    pub fn unregister(&mut self, key: &str) -> bool {
        let removed = self.renderers.shift_remove(key).is_some();
        if removed {
            tracing::debug!(key, "unregistered renderer");
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn Renderer>> {
        self.renderers.get(key)
    }

    pub fn get_entry(&self, key: &str) -> Option<(&TypeKey, &Arc<dyn Renderer>)> {
        self.renderers.get_key_value(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.renderers.contains_key(key)
    }

    /// Registered entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = (&TypeKey, &Arc<dyn Renderer>)> {
        self.renderers.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.renderers.keys()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Drop every registration
    pub fn reset(&mut self) {
        tracing::debug!(count = self.renderers.len(), "reset renderer registry");
        self.renderers.clear();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use typedump_types::{Error, Value};

    fn fixed(text: &'static str) -> impl Renderer {
        move |_: &Value, _: usize, _: &Engine| text.to_string()
    }

    fn key(name: &str) -> TypeKey {
        TypeKey::new(name).unwrap()
    }

    #[test]
    fn test_reregistration_keeps_position() {
        let mut registry = Registry::new();
        registry.register(key("A"), fixed("a1"));
        registry.register(key("B"), fixed("b"));
        registry.register(key("A"), fixed("a2"));

        let keys: Vec<_> = registry.keys().map(TypeKey::as_str).collect();
        assert_eq!(keys, vec!["A", "B"]);

        let engine = Engine::new();
        let renderer = registry.get("A").unwrap();
        assert_eq!(renderer.render(&Value::Null, 0, &engine), "a2");
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = Registry::new();
        registry.register(key("A"), fixed("a"));

        assert!(registry.unregister("A"));
        assert!(!registry.unregister("A"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_preserves_order_of_rest() {
        let mut registry = Registry::new();
        for name in ["A", "B", "C"] {
            registry.register(key(name), fixed("x"));
        }
        registry.unregister("B");

        let keys: Vec<_> = registry.keys().map(TypeKey::as_str).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_register_named_rejects_blank_names() {
        let mut registry = Registry::new();
        let result = registry.register_named("   ", fixed("x"));
        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut registry = Registry::new();
        registry.register(key("integer"), fixed("x"));
        registry.register(key("App\\User"), fixed("y"));
        registry.reset();
        assert_eq!(registry.len(), 0);
    }
}
