use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field visibility tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Protected,
    Public,
}

impl Visibility {
    /// Order in which the generic introspector walks fields
    pub const PASSES: [Visibility; 3] = [
        Visibility::Private,
        Visibility::Protected,
        Visibility::Public,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, visibility-tagged field of a composite value
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub visibility: Visibility,
    /// Declared type, if the host type declares one
    pub declared_type: Option<String>,
    pub value: Value,
}

impl FieldDescriptor {
    pub fn new(
        visibility: Visibility,
        name: impl Into<String>,
        declared_type: Option<&str>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility,
            declared_type: declared_type.map(str::to_string),
            value: value.into(),
        }
    }

    /// Declared type, falling back to the kind tag of the current value
    pub fn type_name(&self) -> &str {
        match &self.declared_type {
            Some(declared) => declared,
            None => self.value.kind().tag(),
        }
    }
}

/// Structured value with typed fields, ancestry and capability sets.
///
/// ```
/// use typedump_types::{CompositeValue, Visibility};
///
/// let user = CompositeValue::new("App\\User")
///     .extends("App\\Model")
///     .implements("JsonSerializable")
///     .field(Visibility::Private, "id", Some("int"), 7_i64);
///
/// assert!(user.is_a("App\\Model"));
/// assert!(user.is_a("JsonSerializable"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeValue {
    type_name: String,
    /// Ancestors, nearest first (does not include `type_name`)
    ancestors: Vec<String>,
    capabilities: Vec<String>,
    fields: Vec<FieldDescriptor>,
}

impl CompositeValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ancestors: Vec::new(),
            capabilities: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Append an ancestor; the first call names the immediate parent.
    pub fn extends(mut self, ancestor: impl Into<String>) -> Self {
        self.ancestors.push(ancestor.into());
        self
    }

    pub fn implements(mut self, capability: impl Into<String>) -> Self {
        let capability = capability.into();
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    pub fn field(
        mut self,
        visibility: Visibility,
        name: impl Into<String>,
        declared_type: Option<&str>,
        value: impl Into<Value>,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(visibility, name, declared_type, value));
        self
    }

    pub fn push_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn parent(&self) -> Option<&str> {
        self.ancestors.first().map(String::as_str)
    }

    /// Self, then each ancestor
    pub fn ancestry(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type_name.as_str()).chain(self.ancestors.iter().map(String::as_str))
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields of one visibility, in declaration order
    pub fn fields_with(&self, visibility: Visibility) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |field| field.visibility == visibility)
    }

    /// Name match anywhere in the ancestry chain or capability set
    pub fn is_a(&self, type_name: &str) -> bool {
        self.ancestry().any(|name| name == type_name)
            || self.capabilities.iter().any(|name| name == type_name)
    }
}
