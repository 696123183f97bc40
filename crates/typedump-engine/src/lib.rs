// Engine module - renderer registry, resolution and recursive rendering
// This layer sits between the value model (types) and the dump helpers (sdk)

mod engine;
pub mod indent;
mod introspector;
pub mod registry;
mod renderer;
pub mod resolver;

pub use engine::{Engine, OPAQUE_MARKER};
pub use indent::{DEFAULT_INDENT_WIDTH, IndentPolicy, Spaces};
pub use introspector::GenericIntrospector;
pub use registry::Registry;
pub use renderer::Renderer;
pub use resolver::{Resolution, resolve};

use typedump_types::Value;

// Façade API - stable entry points for callers that do not need custom
// renderers or indentation

/// Render a value at depth 0 with an empty registry and default indentation
pub fn render(value: &Value) -> String {
    Engine::new().render_root(value)
}
