//! typedump-sdk: dump helpers for debugging.
//!
//! # Overview
//!
//! `typedump-sdk` wraps the render engine with the pieces a caller needs to
//! actually look at a value: a titled box around the output, the call site
//! that asked for it, an optional call trail, and settings loaded from a
//! TOML file.
//!
//! # Quickstart
//!
//! ```
//! use typedump_sdk::{dump, CompositeValue, DumpConfig, Visibility};
//!
//! let user = CompositeValue::new("App\\User")
//!     .extends("App\\Model")
//!     .field(Visibility::Private, "id", Some("int"), 7_i64)
//!     .field(Visibility::Public, "name", Some("string"), "ada");
//!
//! let text = dump(&user, &DumpConfig::default().with_border(false).returning()).unwrap();
//! assert_eq!(
//!     text,
//!     "OBJECT App\\User EXTENDS App\\Model {\n    PRIVATE INT $id = 7;\n\n\n    PUBLIC STRING $name = 'ada';\n}\n"
//! );
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `typedump-types`: Value model (Value, CompositeValue, Introspect)
//! - `typedump-engine`: Renderer registry, resolution and rendering
//!
//! # Quick printing
//!
//! ```no_run
//! let retries = 3;
//! typedump_sdk::dp!(retries, "connecting", vec![1.5, 2.5]);
//! ```

mod border;
pub mod config;
mod dumper;
pub mod error;
pub mod trail;

pub use border::add_border;
pub use config::DumpConfig;
pub use dumper::{Dumper, dump};
pub use error::{Error, Result};
pub use trail::{CallSite, call_trail};

pub use typedump_engine::{Engine, IndentPolicy, Registry, Renderer, Spaces};
pub use typedump_types::{
    CompositeValue, FieldDescriptor, Introspect, Kind, Mapping, TypeKey, Value, Visibility,
};

/// Print all arguments as one bordered sequence, titled with the call site.
#[macro_export]
macro_rules! dp {
    ($($item:expr),* $(,)?) => {{
        let items: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Introspect::introspect(&$item)),*];
        print!("{}", $crate::dp_string(items, file!(), line!()));
    }};
}

#[doc(hidden)]
pub fn dp_string(items: Vec<Value>, file: &str, line: u32) -> String {
    let dumper = Dumper::new(DumpConfig::default());
    dumper.compose(&Value::Sequence(items), &format!("{}:{}", file, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_string_wraps_items_in_sequence() {
        let text = dp_string(vec![Value::Int(1), Value::text("a")], "src/app.rs", 9);
        assert!(text.starts_with("\n+"));
        assert!(text.contains(" src/app.rs:9 "));
        assert!(text.contains("|  SEQUENCE ["));
        assert!(text.contains("|      [1] => 'a'"));
    }
}
