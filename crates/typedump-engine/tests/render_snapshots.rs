use typedump_engine::Engine;
use typedump_testing::fixtures::test_class;
use typedump_types::Value;

#[test]
fn test_class_hierarchy_dump() {
    let output = Engine::new().render_root(&Value::from(test_class()));
    insta::assert_snapshot!("test_class_dump", output);
}
