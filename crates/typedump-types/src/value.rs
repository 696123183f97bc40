use crate::composite::CompositeValue;
use crate::kind::Kind;
use std::fmt;

/// Runtime datum handed to the dump engine.
///
/// The model is an owned tree, so a `Value` can never reference itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered entries keyed by their zero-based position
    Sequence(Vec<Value>),
    Mapping(Mapping),
    Composite(CompositeValue),
    Opaque(OpaqueValue),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
            Value::Composite(_) => Kind::Composite,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Wrap something the value model cannot classify, keeping its `Debug` dump.
    pub fn opaque(value: &dyn fmt::Debug) -> Self {
        Value::Opaque(OpaqueValue::new(format!("{:?}", value)))
    }

    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            Value::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    /// Iterate `(key, value)` entries of a sequence or mapping.
    ///
    /// Sequence keys are synthesized from the entry index.
    pub fn entries(&self) -> Option<Vec<(Value, &Value)>> {
        match self {
            Value::Sequence(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (Value::Int(i as i64), item))
                    .collect(),
            ),
            Value::Mapping(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
            _ => None,
        }
    }
}

impl From<CompositeValue> for Value {
    fn from(composite: CompositeValue) -> Self {
        Value::Composite(composite)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

/// Ordered key → value pairs with unique keys.
///
/// Keys are full values so that non-text keys go through the same formatting
/// as everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, replacing the value in place when the key already exists.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| same_key(k, &key)) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn with(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| same_key(k, key))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key identity: floats compare by bit pattern so `NaN` keys stay unique.
fn same_key(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Something the value model could not classify (live handles and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueValue {
    repr: String,
}

impl OpaqueValue {
    pub fn new(repr: impl Into<String>) -> Self {
        Self { repr: repr.into() }
    }

    /// Best-effort host dump of the value
    pub fn repr(&self) -> &str {
        &self.repr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_insert_replaces_in_place() {
        let mut map = Mapping::new();
        map.insert("a", 1_i64);
        map.insert("b", 2_i64);
        let previous = map.insert("a", 3_i64);

        assert_eq!(previous, Some(Value::Int(1)));
        let keys: Vec<_> = map.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Value::text("a"), Value::text("b")]);
        assert_eq!(map.get(&Value::text("a")), Some(&Value::Int(3)));
    }

    #[test]
    fn test_nan_key_is_replaced_not_duplicated() {
        let mut map = Mapping::new();
        map.insert(f64::NAN, 1_i64);
        let previous = map.insert(f64::NAN, 2_i64);

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::Float(f64::NAN)), Some(&Value::Int(2)));
    }

    #[test]
    fn test_float_keys_differ_by_sign_of_zero() {
        let map = Mapping::new().with(0.0, "pos").with(-0.0, "neg");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_sequence_entries_are_index_keyed() {
        let seq = Value::Sequence(vec![Value::text("zero"), Value::text("one")]);
        let entries = seq.entries().unwrap();
        assert_eq!(entries[1].0, Value::Int(1));
        assert_eq!(entries[1].1, &Value::text("one"));
    }

    #[test]
    fn test_opaque_keeps_debug_dump() {
        let value = Value::opaque(&std::time::Duration::from_millis(5));
        match value {
            Value::Opaque(opaque) => assert_eq!(opaque.repr(), "5ms"),
            other => panic!("expected opaque, got {:?}", other),
        }
    }
}
