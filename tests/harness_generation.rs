//! End-to-end generation tests over the fixture tree
//!
//! `tests/fixtures` holds a small C test-source tree:
//! - `math/add.c`   -> suite `math_add` (2 tests, one decoy in a comment)
//! - `math/mul.c`   -> suite `math_mul` (2 tests + initialize/cleanup)
//! - `io.c`         -> suite `io` (1 test, a decoy in a string literal,
//!   and a `clay_on_init` override)
//! - `helpers.c`    -> hooks only, must not become a suite

use std::fs;
use std::path::{Path, PathBuf};

use clay::assets::EmbeddedAssets;
use clay::builder::HarnessBuilder;
use clay::error::GenError;
use clay::registry::Event;
use clay::render::Renderer;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Scan the fixture tree and render both artifacts in memory.
fn generate_to_strings() -> (String, String) {
    let assets = EmbeddedAssets;
    let builder = HarnessBuilder::new(&assets, "default");
    let frozen = builder.scan(&fixtures()).unwrap().freeze();
    let renderer = Renderer::new(&frozen, &assets, "default");
    (
        renderer.render_harness().unwrap(),
        renderer.render_header().unwrap(),
    )
}

#[test]
fn fixture_tree_yields_expected_suites() {
    let assets = EmbeddedAssets;
    let builder = HarnessBuilder::new(&assets, "default");
    let frozen = builder.scan(&fixtures()).unwrap().freeze();

    let names: Vec<_> = frozen.suites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["io", "math_add", "math_mul"]);
    assert_eq!(frozen.callback_count, 5);
    assert!(frozen.is_overridden(Event::Init));
}

#[test]
fn suites_with_hooks_only_are_dropped() {
    let assets = EmbeddedAssets;
    let builder = HarnessBuilder::new(&assets, "default");
    let frozen = builder.scan(&fixtures()).unwrap().freeze();

    assert!(!frozen.suites.iter().any(|s| s.name == "helpers"));
    // dropped suites contribute no extern declarations either
    assert!(!frozen.externs.iter().any(|d| d.contains("test_helpers__")));
}

#[test]
fn callback_arrays_are_sorted_by_short_name() {
    let (harness, _) = generate_to_strings();

    assert!(harness.contains(
        "static const struct clay_func _clay_cb_math_add[] = {\n    \
         {\"overflow\", &test_math_add__overflow},\n\t\
         {\"simple\", &test_math_add__simple}\n};"
    ));
}

#[test]
fn suite_descriptors_carry_namespace_names_hooks_and_counts() {
    let (harness, _) = generate_to_strings();

    // math_add: no hooks, 2 tests, display name uses :: separators
    assert!(harness.contains(
        "{\n        \"math::add\",\n        \
         {NULL, NULL},\n        \
         {NULL, NULL},\n        \
         _clay_cb_math_add, 2\n    }"
    ));
    // math_mul: both hooks wired
    assert!(harness.contains(
        "{\n        \"math::mul\",\n        \
         {\"initialize\", &test_math_mul__initialize},\n        \
         {\"cleanup\", &test_math_mul__cleanup},\n        \
         _clay_cb_math_mul, 2\n    }"
    ));

    assert!(harness.contains("static size_t _clay_suite_count = 3;"));
    assert!(harness.contains("static size_t _clay_callback_count = 5;"));
}

#[test]
fn only_non_overridden_events_get_nop_macros() {
    let (harness, _) = generate_to_strings();

    assert!(!harness.contains("#define clay_on_init()"));
    assert!(harness.contains("#define clay_on_shutdown() /* nop */"));
    assert!(harness.contains("#define clay_on_test() /* nop */"));
    assert!(harness.contains("#define clay_on_suite() /* nop */"));
}

#[test]
fn decoy_declarations_in_comments_and_strings_never_register() {
    let (harness, header) = generate_to_strings();

    assert!(!harness.contains("commented_out"));
    assert!(!harness.contains("&test_io__decoy"));
    assert!(!header.contains("test_io__decoy"));
    assert!(!header.contains("commented_out"));
}

#[test]
fn header_externs_are_sorted_and_unique() {
    let (_, header) = generate_to_strings();

    let externs: Vec<&str> = header
        .lines()
        .filter(|line| line.starts_with("extern "))
        .collect();

    assert_eq!(
        externs,
        [
            "extern void clay_on_init(void);",
            "extern void test_io__read(void);",
            "extern void test_math_add__overflow(void);",
            "extern void test_math_add__simple(void);",
            "extern void test_math_mul__by_zero(void);",
            "extern void test_math_mul__cleanup(void);",
            "extern void test_math_mul__identity(void);",
            "extern void test_math_mul__initialize(void);",
        ]
    );
}

#[test]
fn no_template_placeholder_survives_rendering() {
    let (harness, header) = generate_to_strings();
    assert!(!harness.contains("${"));
    assert!(!header.contains("${"));
}

#[test]
fn generate_writes_both_artifacts() {
    let root = std::env::temp_dir().join(format!("clay_gen_{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("math")).unwrap();
    for rel in ["math/add.c", "math/mul.c", "io.c", "helpers.c"] {
        fs::copy(fixtures().join(rel), root.join(rel)).unwrap();
    }

    let assets = EmbeddedAssets;
    HarnessBuilder::new(&assets, "default").generate(&root).unwrap();

    let harness = fs::read_to_string(root.join("clay_main.c")).unwrap();
    let header = fs::read_to_string(root.join("clay.h")).unwrap();
    assert!(harness.contains("_clay_suites"));
    assert!(header.contains("extern void test_math_add__simple(void);"));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn empty_tree_is_fatal_and_writes_nothing() {
    let root = std::env::temp_dir().join(format!("clay_empty_{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();

    let assets = EmbeddedAssets;
    let err = HarnessBuilder::new(&assets, "default").generate(&root).unwrap_err();

    assert!(matches!(err, GenError::NoSuites { .. }));
    assert!(err.to_string().contains(&root.display().to_string()));
    assert!(!root.join("clay_main.c").exists());
    assert!(!root.join("clay.h").exists());

    fs::remove_dir_all(&root).unwrap();
}
