use typedump_testing::TestWorld;

#[test]
fn test_unbordered_mapping_dump() {
    let world = TestWorld::new().with_json("doc.json", r#"{"a": 1, "bb": [true]}"#);

    let result = world.run(&["doc.json", "--no-border"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "MAPPING [\n    ['a']  => 1,\n    ['bb'] => SEQUENCE [\n        [0] => TRUE\n    ]\n]\n"
    );
}

#[test]
fn test_border_is_titled_with_input_path() {
    let world = TestWorld::new().with_json("doc.json", "42");

    let result = world.run(&["doc.json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let expected = format!(
        "\n+- doc.json -+\n|{blank}|\n|  42{pad}|\n+{rule}+\n\n",
        blank = " ".repeat(12),
        pad = " ".repeat(8),
        rule = "-".repeat(12)
    );
    assert_eq!(result.stdout, expected);
}

#[test]
fn test_custom_title() {
    let world = TestWorld::new().with_json("doc.json", "null");

    let result = world.run(&["doc.json", "--title", "payload"]).unwrap();

    assert!(result.success());
    assert!(result.stdout.contains("+- payload -+"), "{}", result.stdout);
    assert!(result.stdout.contains("|  NULL"));
}

#[test]
fn test_stdin_with_custom_indent() {
    let world = TestWorld::new();

    let result = world
        .run_with_stdin(&["--no-border", "--indent", "2"], "[1, [2]]")
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "SEQUENCE [\n  [0] => 1,\n  [1] => SEQUENCE [\n    [0] => 2\n  ]\n]\n"
    );
}

#[test]
fn test_dash_reads_stdin() {
    let world = TestWorld::new();

    let result = world.run_with_stdin(&["-"], "\"hi\"").unwrap();

    assert!(result.success());
    assert!(result.stdout.contains(" stdin "), "{}", result.stdout);
    assert!(result.stdout.contains("|  'hi'"));
}

#[test]
fn test_floats_are_fixed_point() {
    let world = TestWorld::new().with_json("doc.json", r#"{"ratio": 0.25, "big": 1e21}"#);

    let result = world.run(&["doc.json", "--no-border"]).unwrap();

    assert!(result.success());
    assert!(result.stdout.contains("['ratio'] => 0.250000"), "{}", result.stdout);
    assert!(
        result.stdout.contains("['big']   => 1000000000000000000000.000000"),
        "{}",
        result.stdout
    );
}

#[test]
fn test_multiple_files_are_dumped_in_order() {
    let world = TestWorld::new()
        .with_json("first.json", "1")
        .with_json("second.json", "2");

    let result = world
        .run(&["first.json", "second.json", "--no-border"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout, "1\n2\n");
}

#[test]
fn test_config_file_is_applied() {
    let world = TestWorld::new()
        .with_config("indent_width = 1\ninclude_border = false\n")
        .with_json("doc.json", r#"[[]]"#);

    let result = world.run(&["doc.json"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "SEQUENCE [\n [0] => SEQUENCE [\n ]\n]\n");
}

#[test]
fn test_flags_override_config_file() {
    let world = TestWorld::new()
        .with_config("indent_width = 1\n")
        .with_json("doc.json", r#"[true]"#);

    let result = world.run(&["doc.json", "--indent", "3", "--no-border"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout, "SEQUENCE [\n   [0] => TRUE\n]\n");
}

#[test]
fn test_print_config() {
    let world = TestWorld::new().with_config("indent_width = 6\n");

    let result = world.run(&["--print-config"]).unwrap();

    assert!(result.success());
    assert!(result.stdout.contains("indent_width = 6"), "{}", result.stdout);
    assert!(result.stdout.contains("include_border = true"));
}

#[test]
fn test_invalid_json_fails() {
    let world = TestWorld::new().with_json("bad.json", "{not json");

    let result = world.run(&["bad.json"]).unwrap();

    assert!(!result.success());
    assert!(
        result.stderr.contains("Error: invalid JSON in bad.json"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_missing_file_fails() {
    let world = TestWorld::new();

    let result = world.run(&["absent.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("failed to read absent.json"));
}

#[test]
fn test_broken_config_fails() {
    let world = TestWorld::new()
        .with_config("indent_width = \"wide\"\n")
        .with_json("doc.json", "1");

    let result = world.run(&["doc.json"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("failed to load config"), "{}", result.stderr);
}
