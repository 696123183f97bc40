use typedump_sdk::{DumpConfig, Dumper, Value};
use typedump_testing::fixtures::sample_json;

#[test]
fn test_bordered_json_document() {
    let dumper = Dumper::new(DumpConfig::default());
    let framed = dumper.compose(&Value::from(sample_json()), "sample.json");

    assert!(framed.starts_with("\n+"));
    assert!(framed.ends_with("+\n\n"));
    insta::assert_snapshot!("bordered_sample_json", framed.trim());
}

#[test]
fn test_custom_renderer_through_dumper() {
    let mut dumper = Dumper::new(DumpConfig::default().with_border(false).returning());
    dumper
        .engine_mut()
        .registry_mut()
        .register_named("null", |_: &Value, depth: usize, engine: &typedump_sdk::Engine| {
            format!("{}~", engine.indent(depth))
        })
        .unwrap();

    assert_eq!(
        dumper.dump(&vec![Value::Null]).as_deref(),
        Some("SEQUENCE [\n    [0] => ~\n]\n")
    );
}
