//! End-to-end scenarios driven through the interpreter.
//!
//! Each test feeds command lines exactly as a terminal would deliver them
//! (without the trailing newline) and checks rendered output plus the
//! resulting namespace state.

use entgraph_kernel::{EntityKind, ExecResult, Interpreter, Namespace};
use entgraph_types::User;

// ============================================================================
// Shared test setup
// ============================================================================

fn session(name: &str, role: &str) -> Interpreter {
    Interpreter::new(Namespace::new(), User::new(name, role))
}

fn run(shell: &mut Interpreter, line: &str) -> ExecResult {
    shell.execute(line)
}

fn stdout(shell: &mut Interpreter, line: &str) -> String {
    let result = run(shell, line);
    assert!(result.success, "{line:?} failed: {}", result.stderr);
    result.stdout
}

fn stderr(shell: &mut Interpreter, line: &str) -> String {
    let result = run(shell, line);
    assert!(!result.success, "{line:?} should have failed, got {:?}", result.stdout);
    assert!(result.stderr.starts_with("Error: "), "{:?}", result.stderr);
    result.stderr
}

// ============================================================================
// Tree structure
// ============================================================================

#[test]
fn duplicate_sibling_names_are_rejected() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"docs\" directory");
    stdout(&mut shell, "make \"notes\" file");
    let before = shell.namespace().len();

    let msg = stderr(&mut shell, "make \"docs\" file");
    assert!(msg.contains("already exists"));
    stderr(&mut shell, "make \"notes\" directory");

    assert_eq!(shell.namespace().len(), before);
    assert_eq!(stdout(&mut shell, "get working directory contents"), "[docs,notes]");
}

#[test]
fn same_name_allowed_under_different_parents() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"a\" directory");
    stdout(&mut shell, "change directory to \"a\"");
    assert_eq!(stdout(&mut shell, "make \"a\" directory"), "Created directory a.");
}

#[test]
fn cwd_path_tracks_navigation() {
    let mut shell = session("ann", "admin");
    for name in ["one", "two", "three"] {
        stdout(&mut shell, &format!("make \"{name}\" directory"));
        stdout(&mut shell, &format!("change directory to \"{name}\""));
    }
    assert_eq!(stdout(&mut shell, "get working directory"), "/one/two/three");

    let ns = shell.namespace();
    assert_eq!(
        ns.path_segments(ns.cwd()),
        Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
    );

    stdout(&mut shell, "change directory to ..");
    assert_eq!(stdout(&mut shell, "get working directory"), "/one/two");
}

#[test]
fn change_then_parent_round_trips() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"x\" directory");
    let start = shell.namespace().cwd();
    let start_path = stdout(&mut shell, "get working directory");

    stdout(&mut shell, "change directory to \"x\"");
    assert_ne!(shell.namespace().cwd(), start);
    stdout(&mut shell, "change directory to ..");

    assert_eq!(shell.namespace().cwd(), start);
    assert_eq!(stdout(&mut shell, "get working directory"), start_path);
}

#[test]
fn parent_at_root_keeps_cwd() {
    let mut shell = session("ann", "admin");
    let root = shell.namespace().root();

    let msg = stderr(&mut shell, "change directory to ..");
    assert!(msg.contains("already at root"));
    assert_eq!(shell.namespace().cwd(), root);
    assert_eq!(stdout(&mut shell, "get working directory"), "/");
}

#[test]
fn change_into_file_or_missing_fails() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"f\" file");
    assert!(stderr(&mut shell, "change directory to \"f\"").contains("is a file"));
    assert!(stderr(&mut shell, "change directory to \"nope\"").contains("not found"));
    assert_eq!(shell.namespace().cwd(), shell.namespace().root());
}

#[test]
fn listing_is_stable_and_sorted() {
    let mut shell = session("ann", "admin");
    for name in ["zeta", "alpha", "mid"] {
        stdout(&mut shell, &format!("make \"{name}\" file"));
    }
    let first = stdout(&mut shell, "get working directory contents");
    let second = stdout(&mut shell, "get working directory contents");
    assert_eq!(first, "[alpha,mid,zeta]");
    assert_eq!(first, second);
}

#[test]
fn delete_releases_whole_subtree() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"top\" directory");
    stdout(&mut shell, "change directory to \"top\"");
    stdout(&mut shell, "make \"inner\" directory");
    stdout(&mut shell, "make \"leaf\" file");
    stdout(&mut shell, "change directory to ..");
    assert_eq!(shell.namespace().len(), 4);

    assert_eq!(stdout(&mut shell, "delete \"top\""), "Deleted entity top.");
    assert_eq!(shell.namespace().len(), 1);
    assert_eq!(stdout(&mut shell, "find \"top\""), "Entity not found.");
}

// ============================================================================
// Rename
// ============================================================================

#[test]
fn move_renames_in_place() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"a\" file");
    stdout(&mut shell, "write \"a\" kept");

    assert_eq!(stdout(&mut shell, "move \"a\" \"b\""), "Moved a to b.");
    assert_eq!(stdout(&mut shell, "find \"b\""), "Found entity with name b, type: file");
    assert_eq!(stdout(&mut shell, "find \"a\""), "Entity not found.");
    assert_eq!(stdout(&mut shell, "get file \"b\""), "kept");
}

#[test]
fn move_of_directory_updates_paths() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"old\" directory");
    stdout(&mut shell, "move \"old\" \"new\"");
    stdout(&mut shell, "change directory to \"new\"");
    assert_eq!(stdout(&mut shell, "get working directory"), "/new");
}

#[test]
fn move_errors_leave_tree_untouched() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"a\" file");
    stdout(&mut shell, "make \"b\" file");

    assert!(stderr(&mut shell, "move \"ghost\" \"c\"").contains("not found"));
    assert!(stderr(&mut shell, "move \"a\" \"b\"").contains("already exists"));
    assert_eq!(stdout(&mut shell, "get working directory contents"), "[a,b]");
}

// ============================================================================
// Files and permissions
// ============================================================================

#[test]
fn docs_notes_scenario() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"docs\" directory");
    stdout(&mut shell, "change directory to \"docs\"");
    stdout(&mut shell, "make \"notes\" file");
    assert_eq!(
        stdout(&mut shell, "write \"notes\" hello world"),
        "Finished writing to file notes."
    );
    assert_eq!(stdout(&mut shell, "get file \"notes\""), "hello world");
}

#[test]
fn fresh_file_is_open_to_every_role() {
    let mut shell = session("v", "viewer");
    stdout(&mut shell, "make \"open\" file");
    for role in ["viewer", "editor", "anyone"] {
        stdout(&mut shell, &format!("user set u {role}"));
        stdout(&mut shell, "write \"open\" x");
        stdout(&mut shell, "get file \"open\"");
    }
    assert_eq!(stdout(&mut shell, "get file \"open\""), "xxx");
}

#[test]
fn write_grant_gates_other_roles() {
    let mut shell = session("ed", "editor");
    stdout(&mut shell, "make \"doc\" file");
    stdout(&mut shell, "set write editor \"doc\"");

    stdout(&mut shell, "user set val viewer");
    let msg = stderr(&mut shell, "write \"doc\" nope");
    assert_eq!(msg, "Error: access denied for user val on doc");

    stdout(&mut shell, "user set ed editor");
    stdout(&mut shell, "write \"doc\" yes");
    assert_eq!(stdout(&mut shell, "get permissions editor \"doc\""), "[write]");
}

#[test]
fn read_only_role_cannot_overwrite() {
    let mut shell = session("ed", "editor");
    stdout(&mut shell, "make \"doc\" file");
    stdout(&mut shell, "write \"doc\" original");
    stdout(&mut shell, "set read reader \"doc\"");
    stdout(&mut shell, "set write editor \"doc\"");

    stdout(&mut shell, "user set rae reader");
    assert_eq!(stdout(&mut shell, "get file \"doc\""), "original");
    stderr(&mut shell, "overwrite \"doc\" changed");

    stdout(&mut shell, "user set ed editor");
    stdout(&mut shell, "overwrite \"doc\" changed");
    stdout(&mut shell, "set read editor \"doc\"");
    assert_eq!(stdout(&mut shell, "get file \"doc\""), "changed");
}

#[test]
fn file_operations_on_directories_fail() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"d\" directory");
    for line in [
        "get file \"d\"",
        "write \"d\" x",
        "set read r \"d\"",
        "get permissions r \"d\"",
    ] {
        assert!(stderr(&mut shell, line).contains("is not a file"), "{line}");
    }
}

// ============================================================================
// Parsing boundary
// ============================================================================

#[test]
fn rejected_lines_do_not_mutate() {
    let mut shell = session("ann", "admin");
    for line in [
        "",
        "make docs directory",
        "make \"docs\" folder",
        "make \"docs\" directory extra",
        "set execute editor \"docs\"",
        "change directory to docs",
        "unknown \"x\"",
    ] {
        stderr(&mut shell, line);
    }
    assert_eq!(shell.namespace().len(), 1);
    assert_eq!(shell.namespace().find("docs"), None);
}

#[test]
fn names_are_stored_without_quotes() {
    let mut shell = session("ann", "admin");
    stdout(&mut shell, "make \"bare\" directory");
    assert_eq!(shell.namespace().find("bare"), Some(EntityKind::Directory));
    assert_eq!(shell.namespace().find("\"bare\""), None);
}

#[test]
fn exit_stops_the_session() {
    let mut shell = session("ann", "admin");
    let result = run(&mut shell, "exit");
    assert!(result.exit && result.success);
}
