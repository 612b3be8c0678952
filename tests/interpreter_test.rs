//! End-to-end tests for the command interpreter

use rstest::rstest;

use dirscript::errors::CommandError;
use dirscript::util::testing;
use dirscript::Interpreter;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Runs a script against a fresh tree rooted at "root" and returns the
/// produced output lines plus the run outcome.
fn run_script(lines: &[&str]) -> (Vec<String>, Result<(), CommandError>) {
    let mut interpreter = Interpreter::new("root");
    let outcome = interpreter.run(lines.iter().copied());
    (interpreter.into_output(), outcome)
}

// ============================================================
// Create & List Tests
// ============================================================

#[test]
fn given_single_create_when_listing_then_name_appears_at_depth_zero() {
    let (out, outcome) = run_script(&["create n", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["create n", "list", "n"]);
}

#[test]
fn given_nested_create_when_listing_then_child_indented_one_level() {
    let (out, outcome) = run_script(&["create a", "create a/b", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["create a", "create a/b", "list", "a", "  b"]);
}

#[test]
fn given_uppercase_verb_when_running_then_line_echoed_verbatim() {
    let (out, outcome) = run_script(&["CREATE a", "List"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["CREATE a", "List", "a"]);
}

#[test]
fn given_deep_path_when_creating_then_only_immediate_parent_is_checked() {
    // "ghost" is never validated; only "a", the second-to-last segment, is
    let (out, outcome) = run_script(&["create a", "create ghost/a/b", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec!["create a", "create ghost/a/b", "list", "a", "  b"]
    );
}

#[test]
fn given_missing_parent_when_creating_then_run_aborts() {
    let (out, outcome) = run_script(&["create a", "create nope/b", "list"]);
    assert_eq!(
        outcome,
        Err(CommandError::MissingParent {
            path: "nope/b".to_string(),
            parent: "nope".to_string(),
        })
    );
    // The failing line was echoed before execution and the fatal diagnostic
    // joins the output stream; "list" never ran
    assert_eq!(
        out,
        vec![
            "create a",
            "create nope/b",
            "cannot create directory with relationship: nope/b because nope was not found",
        ]
    );
}

#[test]
fn given_end_to_end_example_when_running_then_sorted_listing() {
    let (out, outcome) = run_script(&[
        "create foods",
        "create foods/fruits",
        "create vegetables",
        "list",
    ]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "create foods",
            "create foods/fruits",
            "create vegetables",
            "list",
            "foods",
            "  fruits",
            "vegetables",
        ]
    );
}

// ============================================================
// Sorting Tests
// ============================================================

#[test]
fn given_unsorted_creates_when_listing_twice_then_sorted_and_idempotent() {
    let (out, outcome) = run_script(&[
        "create b",
        "create a",
        "create b/d",
        "create b/c",
        "list",
        "list",
    ]);
    assert!(outcome.is_ok());
    let listing = ["a", "b", "  c", "  d"];
    let mut expected = vec!["create b", "create a", "create b/d", "create b/c"];
    expected.push("list");
    expected.extend(listing);
    expected.push("list");
    expected.extend(listing);
    assert_eq!(out, expected);
}

// ============================================================
// Delete Tests
// ============================================================

#[test]
fn given_absent_root_name_when_deleting_then_silent_noop() {
    let (out, outcome) = run_script(&["create a", "delete x", "list"]);
    assert!(outcome.is_ok());
    // No diagnostic, tree unchanged
    assert_eq!(out, vec!["create a", "delete x", "list", "a"]);
}

#[test]
fn given_duplicate_root_names_when_deleting_then_all_matches_removed() {
    let (out, outcome) = run_script(&["create dup", "create dup", "delete dup", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["create dup", "create dup", "delete dup", "list"]);
}

#[test]
fn given_first_segment_not_root_child_when_deleting_path_then_command_skipped() {
    // A node named "a" exists, but only nested under "x"
    let (out, outcome) = run_script(&["create x", "create x/a", "create a/c", "delete a/c", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "create x",
            "create x/a",
            "create a/c",
            "delete a/c",
            "Cannot delete a/c - a does not exist",
            "list",
            "x",
            "  a",
            "    c",
        ]
    );
}

#[test]
fn given_root_child_first_segment_but_unresolvable_parent_when_deleting_then_run_aborts() {
    // First-segment check passes ("a" is a root child) but the second-to-last
    // segment resolves nowhere, which is fatal
    let (out, outcome) = run_script(&["create a", "delete a/ghost/c", "list"]);
    assert_eq!(
        outcome,
        Err(CommandError::UnknownDirectory("ghost".to_string()))
    );
    assert_eq!(
        out,
        vec![
            "create a",
            "delete a/ghost/c",
            "error no directory named ghost found",
        ]
    );
}

#[test]
fn given_valid_path_when_deleting_then_leaf_removed_from_real_parent() {
    let (out, outcome) = run_script(&["create a", "create a/b", "delete a/b", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["create a", "create a/b", "delete a/b", "list", "a"]);
}

// ============================================================
// Move Tests
// ============================================================

#[test]
fn given_two_root_dirs_when_moving_then_subtree_lands_under_destination() {
    let (out, outcome) = run_script(&["create a", "create a/k", "create b", "move a b", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "create a",
            "create a/k",
            "create b",
            "move a b",
            "list",
            "b",
            "  a",
            "    k",
        ]
    );
}

#[test]
fn given_nested_source_when_moving_by_name_then_original_stays_in_place() {
    // The single-segment branch always detaches from the root's children,
    // so a nested source ends up duplicated: the copy under the destination
    // plus the untouched original.
    let (out, outcome) = run_script(&["create a", "create a/x", "create b", "move x b", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "create a",
            "create a/x",
            "create b",
            "move x b",
            "list",
            "a",
            "  x",
            "b",
            "  x",
        ]
    );
}

#[test]
fn given_path_source_when_moving_then_detached_from_real_parent() {
    let (out, outcome) = run_script(&[
        "create a",
        "create a/x",
        "create a/x/deep",
        "create b",
        "move a/x b",
        "list",
    ]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "create a",
            "create a/x",
            "create a/x/deep",
            "create b",
            "move a/x b",
            "list",
            "a",
            "b",
            "  x",
            "    deep",
        ]
    );
}

#[test]
fn given_unknown_destination_when_moving_then_run_aborts() {
    let (out, outcome) = run_script(&["create a", "move a nowhere", "list"]);
    assert_eq!(
        outcome,
        Err(CommandError::UnknownDirectory("nowhere".to_string()))
    );
    assert_eq!(
        out,
        vec![
            "create a",
            "move a nowhere",
            "error no directory named nowhere found",
        ]
    );
}

// ============================================================
// Validation Tests
// ============================================================

#[rstest]
#[case::unknown_verb(
    "frobnicate a",
    "error unknown command input frobnicate detected, ignoring"
)]
#[case::too_many_args(
    "create a b c",
    "error too many args passed with command, ignoring"
)]
fn given_invalid_line_when_running_then_diagnostic_and_tree_unchanged(
    #[case] line: &str,
    #[case] diagnostic: &str,
) {
    let (out, outcome) = run_script(&["create a", line, "list"]);
    assert!(outcome.is_ok());
    assert_eq!(out, vec!["create a", diagnostic, "list", "a"]);
}

#[test]
fn given_unknown_verb_with_too_many_args_then_both_diagnostics_emitted() {
    let (out, outcome) = run_script(&["frobnicate a b c", "list"]);
    assert!(outcome.is_ok());
    assert_eq!(
        out,
        vec![
            "error unknown command input frobnicate detected, ignoring",
            "error too many args passed with command, ignoring",
            "list",
        ]
    );
}

#[test]
fn given_empty_line_when_running_then_run_aborts_immediately() {
    let (out, outcome) = run_script(&["create a", "", "create b"]);
    assert_eq!(outcome, Err(CommandError::EmptyToken));
    assert_eq!(
        out,
        vec!["create a", "error reading commands: empty command token"]
    );
}

#[test]
fn given_missing_argument_when_creating_then_run_aborts() {
    let (out, outcome) = run_script(&["create"]);
    assert_eq!(
        outcome,
        Err(CommandError::MissingArgument {
            verb: "create".to_string()
        })
    );
    // Echoed before the argument check, matching echo-then-execute order
    assert_eq!(
        out,
        vec!["create", "error missing argument for command create"]
    );
}

#[test]
fn given_missing_destination_argument_when_moving_then_run_aborts() {
    let (_, outcome) = run_script(&["create a", "move a"]);
    assert_eq!(
        outcome,
        Err(CommandError::MissingArgument {
            verb: "move".to_string()
        })
    );
}
