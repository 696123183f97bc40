//! Conversion of host values into the dump value model.

use crate::composite::CompositeValue;
use crate::value::{Mapping, Value};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Host types that know how to describe themselves as a [`Value`].
///
/// Structs usually implement this by building a [`CompositeValue`]:
///
/// ```
/// use typedump_types::{CompositeValue, Introspect, Value, Visibility};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Introspect for Point {
///     fn introspect(&self) -> Value {
///         CompositeValue::new("geo::Point")
///             .field(Visibility::Public, "x", Some("i64"), self.x)
///             .field(Visibility::Public, "y", Some("i64"), self.y)
///             .into()
///     }
/// }
///
/// let value = Point { x: 1, y: 2 }.introspect();
/// assert_eq!(value.as_composite().unwrap().fields().len(), 2);
/// ```
pub trait Introspect {
    fn introspect(&self) -> Value;
}

macro_rules! impl_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }

            impl Introspect for $ty {
                fn introspect(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

// Values past i64::MAX degrade to floats rather than wrapping.
macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    i64::try_from(value)
                        .map(Value::Int)
                        .unwrap_or(Value::Float(value as f64))
                }
            }

            impl Introspect for $ty {
                fn introspect(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_lossless!(i8, i16, i32, i64, isize, u8, u16, u32);
impl_unsigned!(u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(object) => Value::Mapping(
                object
                    .into_iter()
                    .map(|(k, v)| (Value::Text(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Introspect for bool {
    fn introspect(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Introspect for f32 {
    fn introspect(&self) -> Value {
        Value::from(*self)
    }
}

impl Introspect for f64 {
    fn introspect(&self) -> Value {
        Value::Float(*self)
    }
}

impl Introspect for char {
    fn introspect(&self) -> Value {
        Value::from(*self)
    }
}

impl Introspect for str {
    fn introspect(&self) -> Value {
        Value::text(self)
    }
}

impl Introspect for String {
    fn introspect(&self) -> Value {
        Value::text(self.as_str())
    }
}

impl Introspect for Value {
    fn introspect(&self) -> Value {
        self.clone()
    }
}

impl Introspect for CompositeValue {
    fn introspect(&self) -> Value {
        Value::Composite(self.clone())
    }
}

impl Introspect for Mapping {
    fn introspect(&self) -> Value {
        Value::Mapping(self.clone())
    }
}

impl Introspect for serde_json::Value {
    fn introspect(&self) -> Value {
        Value::from(self.clone())
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn introspect(&self) -> Value {
        (**self).introspect()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn introspect(&self) -> Value {
        (**self).introspect()
    }
}

impl<T: Introspect> Introspect for Option<T> {
    fn introspect(&self) -> Value {
        match self {
            Some(inner) => inner.introspect(),
            None => Value::Null,
        }
    }
}

impl<T: Introspect> Introspect for [T] {
    fn introspect(&self) -> Value {
        Value::Sequence(self.iter().map(Introspect::introspect).collect())
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn introspect(&self) -> Value {
        self.as_slice().introspect()
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn introspect(&self) -> Value {
        self.as_slice().introspect()
    }
}

impl<K: Introspect, V: Introspect> Introspect for BTreeMap<K, V> {
    fn introspect(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(k, v)| (k.introspect(), v.introspect()))
                .collect(),
        )
    }
}

impl<K: Introspect, V: Introspect, S> Introspect for IndexMap<K, V, S> {
    fn introspect(&self) -> Value {
        Value::Mapping(
            self.iter()
                .map(|(k, v)| (k.introspect(), v.introspect()))
                .collect(),
        )
    }
}
