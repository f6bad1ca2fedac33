//! Integration tests for docdex
//!
//! End-to-end coverage across loading, resolution, classification,
//! flattening, ordering, and the CLI binary. Fixtures are synthetic trees
//! written to temp directories with tempfile; no fixture files live in the
//! repo.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use docdex::{
    classify_module, list_all_modules, list_all_packages, load_docs, resolve_package,
    rollup_all, rollup_package, Documentation, DEFAULT_MAX_DEPTH, DEFAULT_PACKAGE_NAME,
};

// ============================================================================
// FIXTURES
// ============================================================================

fn fixture_json() -> serde_json::Value {
    let bulk_functions: Vec<serde_json::Value> = (0..12)
        .map(|i| serde_json::json!({"name": format!("op{:02}", i)}))
        .collect();

    serde_json::json!({
        "version": "0.9.1",
        "decl": {
            "name": "root",
            "kind": "package",
            "modules": [
                {
                    "name": "toplevel",
                    "summary": "Top-level module outside any package",
                    "functions": [
                        {
                            "name": "boot",
                            "overloads": [
                                {"signature": "fn boot()", "description": "Starts everything"}
                            ]
                        }
                    ]
                }
            ],
            "packages": [
                {
                    "name": "geometry",
                    "summary": "Shapes and measures",
                    "description": "Geometry primitives",
                    "modules": [
                        {
                            "name": "shapes",
                            "functions": [{"name": "area"}, {"name": "perimeter"}],
                            "structs": [
                                {
                                    "name": "Point",
                                    "fields": [
                                        {"name": "x", "type": "Float64"},
                                        {"name": "y", "type": "Float64"}
                                    ]
                                }
                            ],
                            "aliases": [
                                {"name": "MAX_SIDES", "value": "const Int"},
                                {"name": "origin", "value": "Point"}
                            ],
                            "traits": [{"name": "Shape"}]
                        },
                        {"name": "hollow"},
                        {"name": "bulk", "functions": bulk_functions}
                    ],
                    "packages": [
                        {
                            "name": "linear",
                            "modules": [
                                {"name": "vectors", "functions": [{"name": "dot"}]}
                            ]
                        }
                    ]
                },
                {
                    "name": "io",
                    "modules": [
                        {
                            "name": "streams",
                            "aliases": [{"name": "stdin", "value": "Stream"}]
                        }
                    ]
                }
            ]
        }
    })
}

fn fixture_docs() -> Documentation {
    serde_json::from_value(fixture_json()).expect("fixture should deserialize")
}

/// Write the fixture document into a temp dir, returning (dir, file path)
fn fixture_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("docs.json");
    std::fs::write(&path, fixture_json().to_string()).expect("write fixture");
    (dir, path)
}

fn run_docdex(docs_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docdex"))
        .arg("--docs")
        .arg(docs_path)
        .args(args)
        .output()
        .expect("failed to run docdex")
}

fn run_docdex_success(docs_path: &Path, args: &[&str]) -> String {
    let output = run_docdex(docs_path, args);
    assert!(
        output.status.success(),
        "docdex {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ============================================================================
// LIBRARY PIPELINE
// ============================================================================

#[test]
fn load_then_flatten_covers_whole_tree() {
    let (_dir, path) = fixture_file();
    let docs = load_docs(&path).unwrap();
    assert_eq!(docs.version, "0.9.1");

    let packages = list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap();
    let package_paths: Vec<_> = packages.iter().map(|p| p.path.as_str()).collect();
    assert_eq!(
        package_paths,
        ["/geometry", "/geometry/linear", "/io", "/Default"]
    );

    let modules = list_all_modules(&docs, DEFAULT_MAX_DEPTH).unwrap();
    let module_paths: Vec<_> = modules.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(
        module_paths,
        [
            "#toplevel",
            "/geometry#shapes",
            "/geometry#hollow",
            "/geometry#bulk",
            "/geometry/linear#vectors",
            "/io#streams",
        ]
    );
}

#[test]
fn resolve_then_classify_pipeline() {
    let docs = fixture_docs();

    let pkg = resolve_package(&docs, &["geometry"]).unwrap();
    assert!(std::ptr::eq(pkg.as_ref(), &docs.decl.packages[0]));

    let shapes = pkg.modules.iter().find(|m| m.name == "shapes").unwrap();
    let items = classify_module(shapes);
    assert_eq!(items.functions.len(), 2);
    assert_eq!(items.types.len(), 1);
    assert_eq!(items.traits.len(), 1);
    assert_eq!(items.constants.len() + items.variables.len(), 2);
    assert_eq!(items.constants[0].item.name, "MAX_SIDES");
    assert_eq!(items.variables[0].item.name, "origin");
    assert!(items.functions.iter().all(|f| f.module == "shapes"));
}

#[test]
fn unknown_single_segment_resolves_to_default() {
    let docs = fixture_docs();
    let pkg = resolve_package(&docs, &["whatever"]).unwrap();
    assert_eq!(pkg.name, DEFAULT_PACKAGE_NAME);
    assert_eq!(pkg.modules.len(), 1);
    assert_eq!(pkg.modules[0].name, "toplevel");

    // Multi-segment misses fail without fallback.
    assert!(resolve_package(&docs, &["whatever", "nested"]).is_none());
}

#[test]
fn rollup_prunes_empty_modules_and_keys_by_name() {
    let docs = fixture_docs();

    let geometry = resolve_package(&docs, &["geometry"]).unwrap();
    let rollup = rollup_package(geometry.as_ref());
    assert!(rollup.modules.contains_key("shapes"));
    assert!(rollup.modules.contains_key("bulk"));
    assert!(!rollup.modules.contains_key("hollow"));

    let catalogue = list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap();
    let rollups = rollup_all(&catalogue);
    let keys: Vec<_> = rollups.keys().collect();
    assert_eq!(keys, ["geometry", "linear", "io", DEFAULT_PACKAGE_NAME]);
}

#[test]
fn queries_are_idempotent_and_nonmutating() {
    let docs = fixture_docs();
    let before = docs.clone();

    let first = serde_json::to_string(&list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap());
    let second = serde_json::to_string(&list_all_packages(&docs, DEFAULT_MAX_DEPTH).unwrap());
    assert_eq!(first.unwrap(), second.unwrap());

    let shapes = &docs.decl.packages[0].modules[0];
    let once = serde_json::to_string(&classify_module(shapes)).unwrap();
    let twice = serde_json::to_string(&classify_module(shapes)).unwrap();
    assert_eq!(once, twice);

    assert_eq!(docs, before);
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn cli_packages_lists_default_last() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["packages"]);

    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("/geometry"));
    assert!(lines[3].starts_with("/Default"));
}

#[test]
fn cli_modules_lists_every_module() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["modules"]);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("/geometry/linear#vectors"));
    assert!(stdout.contains("#toplevel"));
}

#[test]
fn cli_resolve_shows_package_overview() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["resolve", "geometry"]);
    assert!(stdout.contains("Package geometry"));
    assert!(stdout.contains("Sub-packages (1): linear"));
    // Sidebar order: ascending variables then ascending total, so
    // hollow (0 vars, 0 items), bulk (0 vars, 12 items), shapes (1 var).
    let hollow = stdout.find("hollow").unwrap();
    let bulk = stdout.find("bulk").unwrap();
    let shapes = stdout.find("shapes").unwrap();
    assert!(hollow < bulk && bulk < shapes);
}

#[test]
fn cli_resolve_module_classifies_items() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["resolve", "geometry", "--module", "shapes"]);
    assert!(stdout.contains("Functions (2): area, perimeter"));
    assert!(stdout.contains("Constants (1): MAX_SIDES"));
    assert!(stdout.contains("Variables (1): origin"));
    assert!(stdout.contains("Traits (1): Shape"));
}

#[test]
fn cli_resolve_json_round_trips_package() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["--format", "json", "resolve", "io"]);
    let pkg: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(pkg["name"], "io");
    assert_eq!(pkg["modules"][0]["name"], "streams");
}

#[test]
fn cli_resolve_multi_segment_miss_exits_not_found() {
    let (_dir, path) = fixture_file();
    let output = run_docdex(&path, &["resolve", "ghost/nested"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Package not found"));
}

#[test]
fn cli_resolve_missing_module_exits_not_found() {
    let (_dir, path) = fixture_file();
    let output = run_docdex(&path, &["resolve", "geometry", "--module", "ghost"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_rollup_caps_sections_with_remainder() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["rollup", "geometry"]);
    // bulk has 12 functions; 10 visible, 2 reported as remainder.
    assert!(stdout.contains("(+2 more)"));
    // hollow contributes nothing and is pruned.
    assert!(!stdout.contains("hollow"));
}

#[test]
fn cli_rollup_all_covers_catalogue() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["--format", "json", "rollup"]);
    let rollups: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let keys: Vec<_> = rollups.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["geometry", "linear", "io", "Default"]);
    assert!(rollups["Default"]["modules"]["toplevel"]["functions"][0]["name"] == "boot");
}

#[test]
fn cli_search_matches_case_insensitively() {
    let (_dir, path) = fixture_file();
    let stdout = run_docdex_success(&path, &["--format", "json", "search", "GEO"]);
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(results["packages"][0]["path"], "/geometry");
}

#[test]
fn cli_depth_guard_exits_with_code_four() {
    let (_dir, path) = fixture_file();
    let output = run_docdex(&path, &["--max-depth", "1", "packages"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("deeper than 1"));
}

#[test]
fn cli_missing_docs_file_exits_with_code_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let output = run_docdex(&path, &["packages"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_malformed_docs_exits_with_code_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    std::fs::write(&path, "{broken").unwrap();
    let output = run_docdex(&path, &["packages"]);
    assert_eq!(output.status.code(), Some(2));
}
