use crate::indent::{IndentPolicy, Spaces};
use crate::introspector::GenericIntrospector;
use crate::registry::Registry;
use crate::renderer::Renderer;
use crate::resolver::{Resolution, resolve};
use std::fmt;
use typedump_types::{OpaqueValue, Value};

/// Marker emitted for values the model could not classify
pub const OPAQUE_MARKER: &str = "OPAQUE";

/// Recursive, indentation-aware renderer.
///
/// Owns the renderer registry and the indentation policy; every renderer it
/// dispatches to receives `&Engine` and recurses through [`Engine::render`].
pub struct Engine {
    registry: Registry,
    indent: Box<dyn IndentPolicy>,
    introspector: GenericIntrospector,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            indent: Box::new(Spaces::default()),
            introspector: GenericIntrospector,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn set_indent_policy(&mut self, policy: impl IndentPolicy + 'static) {
        self.indent = Box::new(policy);
    }

    pub fn indent(&self, level: usize) -> String {
        self.indent.indent(level)
    }

    pub fn resolve(&self, value: &Value) -> Resolution<'_> {
        resolve(&self.registry, value)
    }

    /// Render `value` at nesting depth 0
    pub fn render_root(&self, value: &Value) -> String {
        self.render(value, 0)
    }

    /// Render `value` through whichever renderer resolves for it.
    ///
    /// A registered renderer's output is returned as is, whether it matched
    /// exactly or through the ancestry chain. Container entries and composite
    /// fields trim what they embed.
    pub fn render(&self, value: &Value, depth: usize) -> String {
        match self.resolve(value) {
            Resolution::Registered { renderer, .. } => renderer.render(value, depth, self),
            Resolution::Introspector => self.introspector.render(value, depth, self),
            Resolution::BuiltIn => self.render_builtin(value, depth),
        }
    }

    /// Render `value` with the built-in formatting for its kind, ignoring the
    /// registry for this level only; nested members still resolve normally.
    pub fn render_builtin(&self, value: &Value, depth: usize) -> String {
        let indent = self.indent(depth);
        match value {
            Value::Null => format!("{}NULL", indent),
            Value::Bool(true) => format!("{}TRUE", indent),
            Value::Bool(false) => format!("{}FALSE", indent),
            Value::Int(i) => format!("{}{}", indent, i),
            Value::Float(f) => format!("{}{:.6}", indent, f),
            Value::Text(text) => format!("{}'{}'", indent, text),
            Value::Sequence(_) => self.render_container("SEQUENCE", value, depth),
            Value::Mapping(_) => self.render_container("MAPPING", value, depth),
            Value::Composite(_) => self.introspector.render(value, depth, self),
            Value::Opaque(opaque) => render_opaque(opaque),
        }
    }

    fn render_container(&self, label: &str, value: &Value, depth: usize) -> String {
        let mut output = format!("{}{} [\n", self.indent(depth), label);
        let entries = value.entries().unwrap_or_default();

        if !entries.is_empty() {
            // Keys are values too and go through the same formatting rules.
            let keys: Vec<String> = entries
                .iter()
                .map(|(key, _)| format!("[{}]", self.render(key, 0)))
                .collect();
            let width = keys.iter().map(|key| key.chars().count()).max().unwrap_or(0);
            let entry_indent = self.indent(depth + 1);

            let lines: Vec<String> = keys
                .iter()
                .zip(&entries)
                .map(|(key, (_, item))| {
                    let rendered = self.render(item, depth + 1);
                    format!(
                        "{}{:<width$} => {}",
                        entry_indent,
                        key,
                        rendered.trim_start(),
                        width = width
                    )
                    .trim_end()
                    .to_string()
                })
                .collect();

            output.push_str(&lines.join(",\n"));
            output.push('\n');
        }

        output.push_str(&self.indent(depth));
        output.push_str("]\n");
        output
    }
}

fn render_opaque(opaque: &OpaqueValue) -> String {
    if opaque.repr().is_empty() {
        OPAQUE_MARKER.to_string()
    } else {
        format!("{} {}", OPAQUE_MARKER, opaque.repr())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
