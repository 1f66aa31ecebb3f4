//! Integration tests for pyinit


use harness::{TestTree, run_pyinit};
use pyinit::init::MARKER_CONTENT;

#[test]
fn test_basic_run() {
    let tree = TestTree::sample();

    let (stdout, stderr, success) = run_pyinit(tree.path(), &[".", "--exclude", "exclude_me"]);
    assert!(success, "pyinit should succeed: {}", stderr);

    for dir in ["", "dir1", "dir2", "dir2/subdir", "dir3"] {
        assert!(tree.has_marker(dir), "missing marker in '{}': {}", dir, stdout);
    }
    assert!(!tree.has_marker("__pycache__"));
    assert!(!tree.has_marker("dir3/exclude_me"));
}

#[test]
fn test_marker_content_written() {
    let tree = TestTree::sample();

    let (_stdout, _stderr, success) = run_pyinit(tree.path(), &["."]);
    assert!(success);
    assert_eq!(tree.read_marker("dir1").as_deref(), Some(MARKER_CONTENT));
}

#[test]
fn test_reports_every_decision() {
    let tree = TestTree::sample();
    tree.add_file("dir1/__init__.py", "Existing content");

    let (stdout, _stderr, success) = run_pyinit(tree.path(), &[".", "-e", "exclude_me"]);
    assert!(success);
    assert!(stdout.contains("Starting from root directory: ."), "{}", stdout);
    assert!(stdout.contains("Excluding directories: __pycache__, exclude_me"), "{}", stdout);
    assert!(stdout.contains("Skipping excluded directory:"), "{}", stdout);
    assert!(stdout.contains("__pycache__"), "{}", stdout);
    assert!(stdout.contains("Created:"), "{}", stdout);
    assert!(stdout.contains("Already exists:"), "{}", stdout);
    assert!(
        stdout.contains("4 created, 1 already existed, 2 skipped, 0 errors"),
        "{}",
        stdout
    );
}

#[test]
fn test_existing_marker_preserved() {
    let tree = TestTree::sample();
    tree.add_file("dir1/__init__.py", "Existing content");

    let (_stdout, _stderr, success) = run_pyinit(tree.path(), &["."]);
    assert!(success);
    assert_eq!(tree.read_marker("dir1").as_deref(), Some("Existing content"));
}

#[test]
fn test_second_run_changes_nothing() {
    let tree = TestTree::sample();
    run_pyinit(tree.path(), &["."]);
    let before = tree.read_marker("dir2/subdir");

    let (stdout, _stderr, success) = run_pyinit(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("0 created"), "{}", stdout);
    assert!(!stdout.contains("Created:"), "{}", stdout);
    assert_eq!(tree.read_marker("dir2/subdir"), before);
}

#[test]
fn test_invalid_root() {
    let tree = TestTree::sample();

    let (stdout, stderr, success) = run_pyinit(tree.path(), &["does-not-exist"]);
    assert!(!success, "missing root should fail");
    assert!(stderr.contains("does-not-exist"), "{}", stderr);
    assert!(!stdout.contains("Starting"), "{}", stdout);
    assert!(!tree.has_marker(""));
    assert!(!tree.has_marker("dir1"));
}

#[test]
fn test_file_as_root() {
    let tree = TestTree::new();
    tree.add_file("notes.txt", "hello");

    let (_stdout, stderr, success) = run_pyinit(tree.path(), &["notes.txt"]);
    assert!(!success);
    assert!(stderr.contains("is not a valid directory"), "{}", stderr);
    assert!(!tree.has_marker(""));
}

#[test]
fn test_multiple_exclusions_and_repeated_flag() {
    let tree = TestTree::new();
    for dir in ["build", "dist", "venv", "src"] {
        tree.add_dir(dir);
    }

    let (_stdout, _stderr, success) =
        run_pyinit(tree.path(), &[".", "-e", "build", "dist", "--exclude", "VENV"]);
    assert!(success);
    assert!(!tree.has_marker("build"));
    assert!(!tree.has_marker("dist"));
    assert!(!tree.has_marker("venv"));
    assert!(tree.has_marker("src"));
}

#[test]
fn test_empty_exclude_keeps_builtin() {
    let tree = TestTree::sample();

    let (_stdout, _stderr, success) = run_pyinit(tree.path(), &[".", "--exclude"]);
    assert!(success);
    assert!(!tree.has_marker("__pycache__"));
    assert!(tree.has_marker("dir3/exclude_me"));
}

#[test]
fn test_level_limit() {
    let tree = TestTree::new();
    tree.add_dir("a/b/c");

    let (_stdout, _stderr, success) = run_pyinit(tree.path(), &[".", "-L", "2"]);
    assert!(success);
    assert!(tree.has_marker("a"));
    assert!(tree.has_marker("a/b"));
    assert!(!tree.has_marker("a/b/c"));
}

#[test]
fn test_quiet_output() {
    let tree = TestTree::sample();

    // exclude_me is only excluded when named, so six directories get markers
    let (stdout, _stderr, success) = run_pyinit(tree.path(), &[".", "--quiet"]);
    assert!(success);
    assert!(!stdout.contains("Created:"), "{}", stdout);
    assert!(
        stdout.contains("6 created, 0 already existed, 1 skipped, 0 errors"),
        "{}",
        stdout
    );
}

#[test]
fn test_json_output() {
    let tree = TestTree::sample();

    let (stdout, _stderr, success) = run_pyinit(tree.path(), &[".", "--json", "-e", "exclude_me"]);
    assert!(success);

    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["summary"]["created"], 5);
    assert_eq!(report["summary"]["skipped"], 2);
    assert_eq!(report["entries"].as_array().map(Vec::len), Some(7));
    assert!(
        report["excluded"]
            .as_array()
            .unwrap()
            .iter()
            .any(|v| v == "exclude_me")
    );
}
