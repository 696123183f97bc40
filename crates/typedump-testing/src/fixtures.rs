//! Sample values for dump tests.
//!
//! The class fixtures model a small hierarchy:
//! `TestClass extends ParentClass implements Interface1, Interface2`.

use typedump_types::{CompositeValue, FieldDescriptor, Mapping, Value, Visibility};

pub const PARENT_CLASS: &str = "ParentClass";
pub const TEST_CLASS: &str = "TestClass";
pub const INTERFACE_1: &str = "Interface1";
pub const INTERFACE_2: &str = "Interface2";

/// Fields `ParentClass` passes on to subclasses (its private field excluded)
fn inherited_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(Visibility::Public, "parentInt", Some("int"), 1_i64),
        FieldDescriptor::new(Visibility::Protected, "parentFloat", Some("float"), 1.1),
        FieldDescriptor::new(Visibility::Public, "parentBool", Some("bool"), true),
        FieldDescriptor::new(Visibility::Protected, "parentNull", Some("?string"), Value::Null),
    ]
}

pub fn parent_class() -> CompositeValue {
    let mut parent = CompositeValue::new(PARENT_CLASS).field(
        Visibility::Private,
        "parentString",
        Some("string"),
        "parent string",
    );
    for field in inherited_fields() {
        parent.push_field(field);
    }
    parent
}

/// Mixed integer/text keyed mapping with one nested level
pub fn mixed_array() -> Mapping {
    let mut inner = Mapping::new();
    fill_scalars(&mut inner);

    let mut outer = Mapping::new();
    fill_scalars(&mut outer);
    outer.insert("array", inner);
    outer
}

fn fill_scalars(map: &mut Mapping) {
    for (i, word) in ["zero", "one", "two", "three"].into_iter().enumerate() {
        map.insert(i as i64, word);
    }
    map.insert("int", 1_i64);
    map.insert("float", 1.1);
    map.insert("bool", true);
    map.insert("null", Value::Null);
}

pub fn test_class() -> CompositeValue {
    let mut value = CompositeValue::new(TEST_CLASS)
        .extends(PARENT_CLASS)
        .implements(INTERFACE_1)
        .implements(INTERFACE_2)
        .field(Visibility::Private, "privateInt", Some("int"), 1_i64)
        .field(Visibility::Protected, "protectedFloat", Some("float"), 1.1)
        .field(Visibility::Public, "publicArray", Some("array"), mixed_array())
        .field(
            Visibility::Private,
            "privateString",
            Some("string"),
            "private string",
        )
        .field(Visibility::Protected, "protectedBool", Some("bool"), true)
        .field(Visibility::Public, "publicNull", Some("?string"), Value::Null);

    for field in inherited_fields() {
        value.push_field(field);
    }
    value
}

/// Composite whose fields are declared public, private, protected (in that order)
pub fn shuffled_visibility() -> CompositeValue {
    CompositeValue::new("Shuffled")
        .field(Visibility::Public, "A", Some("int"), 1_i64)
        .field(Visibility::Private, "B", Some("int"), 2_i64)
        .field(Visibility::Protected, "C", Some("int"), 3_i64)
}

/// JSON document exercising every JSON value category
pub fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "name": "typedump",
        "version": 2,
        "ratio": 0.25,
        "stable": false,
        "license": null,
        "tags": ["debug", "dump"],
        "owner": { "id": 7, "roles": [] }
    })
}
