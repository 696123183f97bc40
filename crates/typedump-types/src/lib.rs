pub mod composite;
pub mod error;
pub mod introspect;
pub mod kind;
pub mod value;

pub use composite::{CompositeValue, FieldDescriptor, Visibility};
pub use error::{Error, Result};
pub use introspect::Introspect;
pub use kind::{Kind, TypeKey};
pub use value::{Mapping, OpaqueValue, Value};
