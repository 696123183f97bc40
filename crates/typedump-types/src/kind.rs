use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Classification of a value; exactly one per value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    Sequence,
    Mapping,
    Composite,
    Opaque,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Integer,
        Kind::Float,
        Kind::Text,
        Kind::Sequence,
        Kind::Mapping,
        Kind::Composite,
        Kind::Opaque,
    ];

    /// Registry tag for this kind.
    ///
    /// For `Composite` this is the generic fallback tag, consulted only after
    /// exact and ancestry matches fail.
    pub const fn tag(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Composite => "composite",
            Kind::Opaque => "opaque",
        }
    }

    /// Inverse of [`Kind::tag`]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Composite)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identifier a renderer is registered under.
///
/// Either a kind tag (`integer`, `mapping`, `composite`, ...) or the fully
/// qualified name of a composite type. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeKey(String);

impl TypeKey {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::Configuration(
                "the type name cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Kind> for TypeKey {
    fn from(kind: Kind) -> Self {
        Self(kind.tag().to_string())
    }
}

impl TryFrom<String> for TypeKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TypeKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TypeKey> for String {
    fn from(key: TypeKey) -> Self {
        key.0
    }
}

impl AsRef<str> for TypeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
