use crate::engine::Engine;
use crate::renderer::Renderer;
use typedump_types::{CompositeValue, Value, Visibility};

/// Default renderer for composite values.
///
/// Output shape:
///
/// ```text
/// OBJECT App\User EXTENDS App\Model IMPLEMENTS Countable {
///     PRIVATE INT $id = 7;
///
///     PUBLIC STRING $name = 'ada';
/// }
/// ```
///
/// Fields are emitted in three passes (private, protected, public), each
/// followed by a blank line; trailing blank lines before the closing brace
/// are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericIntrospector;

impl GenericIntrospector {
    fn header(&self, composite: &CompositeValue, depth: usize, engine: &Engine) -> String {
        let mut header = format!("{}OBJECT {} ", engine.indent(depth), composite.type_name());

        if let Some(parent) = composite.parent() {
            header.push_str("EXTENDS ");
            header.push_str(parent);
            header.push(' ');
        }

        if !composite.capabilities().is_empty() {
            header.push_str("IMPLEMENTS ");
            header.push_str(&composite.capabilities().join(", "));
            header.push(' ');
        }

        header.push_str("{\n");
        header
    }
}

impl Renderer for GenericIntrospector {
    fn render(&self, value: &Value, depth: usize, engine: &Engine) -> String {
        let Some(composite) = value.as_composite() else {
            return engine.render_builtin(value, depth);
        };

        let mut body = self.header(composite, depth, engine);
        let field_indent = engine.indent(depth + 1);

        for visibility in Visibility::PASSES {
            for field in composite.fields_with(visibility) {
                let label = format!("{} {}", visibility, field.type_name()).to_uppercase();
                let rendered = engine.render(&field.value, depth + 1);
                body.push_str(&format!(
                    "{}{} ${} = {};\n",
                    field_indent,
                    label,
                    field.name,
                    rendered.trim()
                ));
            }
            body.push('\n');
        }

        let mut output = body.trim_end().to_string();
        output.push('\n');
        output.push_str(&engine.indent(depth));
        output.push_str("}\n");
        output
    }
}
