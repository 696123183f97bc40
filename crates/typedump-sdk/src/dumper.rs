use crate::border::add_border;
use crate::config::DumpConfig;
use crate::trail::{CallSite, call_trail};
use typedump_engine::{Engine, Spaces};
use typedump_types::{Introspect, Value};

/// Engine plus delivery settings.
///
/// ```
/// use typedump_sdk::{DumpConfig, Dumper};
///
/// let dumper = Dumper::new(DumpConfig::default().with_border(false).returning());
/// assert_eq!(dumper.dump(&vec![1, 2]).as_deref(), Some("SEQUENCE [\n    [0] => 1,\n    [1] => 2\n]\n"));
/// ```
#[derive(Debug)]
pub struct Dumper {
    engine: Engine,
    config: DumpConfig,
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new(DumpConfig::default())
    }
}

impl Dumper {
    pub fn new(config: DumpConfig) -> Self {
        let mut engine = Engine::new();
        engine.set_indent_policy(Spaces::new(config.indent_width));
        Self { engine, config }
    }

    /// Use a preconfigured engine; `indent_width` from the config is ignored.
    pub fn with_engine(engine: Engine, config: DumpConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Dump `value`, titled with the caller's location.
    ///
    /// Returns the text when `return_as_string` is set, otherwise prints it
    /// to stdout and returns `None`.
    #[track_caller]
    pub fn dump<T: Introspect + ?Sized>(&self, value: &T) -> Option<String> {
        let site = CallSite::caller();
        let text = self.compose(&value.introspect(), &site.to_string());

        if self.config.return_as_string {
            Some(text)
        } else {
            print!("{}", text);
            None
        }
    }

    /// Render and decorate `value` according to the config.
    pub fn compose(&self, value: &Value, title: &str) -> String {
        let mut text = self.engine.render_root(value);

        if self.config.include_call_trail {
            text.push_str("\nBACKTRACE:\n");
            text.push_str(&call_trail().join("\n"));
            text.push('\n');
        }

        if self.config.include_border {
            text = add_border(&text, title);
        }

        text
    }
}

/// Dump `value` with a default engine and the given settings.
#[track_caller]
pub fn dump<T: Introspect + ?Sized>(value: &T, config: &DumpConfig) -> Option<String> {
    Dumper::new(config.clone()).dump(value)
}
