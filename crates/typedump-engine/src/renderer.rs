use crate::engine::Engine;
use typedump_types::Value;

/// Converts one value of a known type into its textual dump.
///
/// Renderers recurse into nested members through [`Engine::render`] and must
/// not keep per-render state: the engine may re-enter any renderer while it
/// is still producing output. A renderer that wants the default output for
/// the value it was handed should call [`Engine::render_builtin`], since
/// calling `render` on the same value resolves back to itself.
///
/// Plain closures are renderers too:
///
/// ```
/// use typedump_engine::Engine;
/// use typedump_types::{TypeKey, Value};
///
/// let mut engine = Engine::new();
/// engine.registry_mut().register(
///     TypeKey::new("boolean").unwrap(),
///     |value: &Value, depth: usize, engine: &Engine| {
///         let yes = matches!(value, Value::Bool(true));
///         format!("{}{}", engine.indent(depth), if yes { "yes" } else { "no" })
///     },
/// );
///
/// assert_eq!(engine.render(&Value::Bool(true), 1), "    yes");
/// ```
pub trait Renderer: Send + Sync {
    fn render(&self, value: &Value, depth: usize, engine: &Engine) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&Value, usize, &Engine) -> String + Send + Sync,
{
    fn render(&self, value: &Value, depth: usize, engine: &Engine) -> String {
        self(value, depth, engine)
    }
}
