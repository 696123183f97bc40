use crate::registry::Registry;
use crate::renderer::Renderer;
use std::sync::Arc;
use typedump_types::{Kind, TypeKey, Value};

/// Outcome of renderer resolution for one value
#[derive(Clone)]
pub enum Resolution<'r> {
    /// A registered renderer handles the value
    Registered {
        key: &'r TypeKey,
        renderer: &'r Arc<dyn Renderer>,
    },
    /// Composite value with no applicable registration
    Introspector,
    /// Non-composite value with no registration for its kind
    BuiltIn,
}

impl Resolution<'_> {
    pub fn key(&self) -> Option<&TypeKey> {
        match self {
            Resolution::Registered { key, .. } => Some(key),
            Resolution::Introspector | Resolution::BuiltIn => None,
        }
    }
}

impl std::fmt::Debug for Resolution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Registered { key, .. } => write!(f, "Registered({})", key),
            Resolution::Introspector => write!(f, "Introspector"),
            Resolution::BuiltIn => write!(f, "BuiltIn"),
        }
    }
}

/// Pick the renderer for `value`.
///
/// Order:
/// 1. non-composite values use the entry for their kind tag, if any;
/// 2. composites use the first entry naming their exact type, then the first
///    entry found anywhere in their ancestry chain or capability set;
/// 3. then the `composite` fallback entry;
/// 4. then the built-in generic introspector.
///
/// Ancestry matches are decided by registration order, not by how close the
/// matching ancestor is.
///
/// Keys equal to a kind tag (`mapping`, `text`, ...) only ever apply to values
/// of that kind. A composite type literally named `mapping` is therefore never
/// matched by a `mapping` entry, exactly or through its ancestry.
pub fn resolve<'r>(registry: &'r Registry, value: &Value) -> Resolution<'r> {
    let kind = value.kind();

    let Value::Composite(composite) = value else {
        return match registered(registry, kind.tag()) {
            Some(found) => found,
            None => Resolution::BuiltIn,
        };
    };

    let type_entries = move || {
        registry
            .entries()
            .filter(|(key, _)| Kind::from_tag(key.as_str()).is_none())
    };

    if let Some((key, renderer)) = type_entries().find(|(key, _)| key.as_str() == composite.type_name()) {
        tracing::trace!(type_name = composite.type_name(), "exact renderer match");
        return Resolution::Registered { key, renderer };
    }

    if let Some((key, renderer)) = type_entries().find(|(key, _)| composite.is_a(key.as_str())) {
        tracing::trace!(
            type_name = composite.type_name(),
            matched = key.as_str(),
            "ancestry renderer match"
        );
        return Resolution::Registered { key, renderer };
    }

    registered(registry, Kind::Composite.tag()).unwrap_or(Resolution::Introspector)
}

fn registered<'r>(registry: &'r Registry, tag: &str) -> Option<Resolution<'r>> {
    let (key, renderer) = registry.get_entry(tag)?;
    Some(Resolution::Registered { key, renderer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use typedump_types::CompositeValue;

    fn named(text: &'static str) -> impl Renderer {
        move |_: &Value, _: usize, _: &Engine| text.to_string()
    }

    fn register(registry: &mut Registry, name: &str, text: &'static str) {
        registry.register(TypeKey::new(name).unwrap(), named(text));
    }

    fn resolved_key(registry: &Registry, value: &Value) -> Option<String> {
        resolve(registry, value).key().map(|k| k.to_string())
    }

    fn sample() -> Value {
        CompositeValue::new("T")
            .extends("Base")
            .implements("I")
            .implements("J")
            .into()
    }

    #[test]
    fn test_primitive_uses_kind_entry() {
        let mut registry = Registry::new();
        register(&mut registry, "integer", "int");

        assert_eq!(resolved_key(&registry, &Value::Int(1)).as_deref(), Some("integer"));
        assert!(matches!(
            resolve(&registry, &Value::Float(1.0)),
            Resolution::BuiltIn
        ));
    }

    #[test]
    fn test_exact_match_beats_earlier_ancestry_match() {
        let mut registry = Registry::new();
        register(&mut registry, "Base", "base");
        register(&mut registry, "I", "i");
        register(&mut registry, "T", "t");

        assert_eq!(resolved_key(&registry, &sample()).as_deref(), Some("T"));
    }

    #[test]
    fn test_ancestry_ties_break_on_registration_order() {
        let mut registry = Registry::new();
        register(&mut registry, "J", "j");
        register(&mut registry, "I", "i");

        assert_eq!(resolved_key(&registry, &sample()).as_deref(), Some("J"));
    }

    #[test]
    fn test_parent_match_is_not_preferred_by_specificity() {
        let value: Value = CompositeValue::new("C").extends("B").extends("A").into();
        let mut registry = Registry::new();
        register(&mut registry, "A", "a");
        register(&mut registry, "B", "b");

        assert_eq!(resolved_key(&registry, &value).as_deref(), Some("A"));
    }

    #[test]
    fn test_composite_fallback_key_before_introspector() {
        let mut registry = Registry::new();
        assert!(matches!(
            resolve(&registry, &sample()),
            Resolution::Introspector
        ));

        register(&mut registry, "composite", "generic");
        assert_eq!(
            resolved_key(&registry, &sample()).as_deref(),
            Some("composite")
        );
    }

    #[test]
    fn test_kind_entries_never_match_composites() {
        let mut registry = Registry::new();
        register(&mut registry, "mapping", "map");

        assert!(matches!(
            resolve(&registry, &sample()),
            Resolution::Introspector
        ));
    }
}
