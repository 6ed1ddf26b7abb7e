//! Tests for the interactive shell
//!
//! These tests verify:
//! - The menu loop end to end over in-memory buffers
//! - Exit on choice 0 and on EOF
//! - Bad-number re-prompting and empty-input defaults
//! - Report and error rendering
//! - Default-file substitution at the save/load prompts

use std::io::Cursor;

use busloop::{Config, Session, Shell};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Feed a scripted stdin to the shell and capture everything it prints
fn run_shell(session: Session, script: &str) -> String {
    let mut output = Vec::new();
    let shell = Shell::new(session, Cursor::new(script.to_string()), &mut output);
    shell.run().unwrap();
    String::from_utf8(output).unwrap()
}

fn fresh_session() -> Session {
    Session::new(Config::default())
}

// =============================================================================
// Loop / Exit Tests
// =============================================================================

#[test]
fn test_shell_exit_immediately() {
    let transcript = run_shell(fresh_session(), "0\n");

    assert!(transcript.contains("==== BUS ROUTE MENU ===="));
    assert!(transcript.contains("Goodbye."));
}

#[test]
fn test_shell_eof_exits_cleanly() {
    let transcript = run_shell(fresh_session(), "");

    assert!(transcript.contains("Goodbye."));
}

#[test]
fn test_shell_eof_mid_prompt_exits_cleanly() {
    // EOF while collecting an insertion's fields.
    let transcript = run_shell(fresh_session(), "3\nDepot\n");

    assert!(transcript.contains("Goodbye."));
}

#[test]
fn test_shell_invalid_choice_redisplays_menu() {
    let transcript = run_shell(fresh_session(), "99\n0\n");

    assert!(transcript.contains("Invalid choice."));
    assert_eq!(transcript.matches("==== BUS ROUTE MENU ====").count(), 2);
}

// =============================================================================
// Command Rendering Tests
// =============================================================================

#[test]
fn test_shell_view_empty_route() {
    let transcript = run_shell(fresh_session(), "1\n0\n");

    assert!(transcript.contains("Route is empty."));
}

#[test]
fn test_shell_insert_end_then_view() {
    let transcript = run_shell(fresh_session(), "3\nDepot\n5\n1.5\n2\n1\n0\n");

    assert!(transcript.contains("Inserted: ID:1  Name:\"Depot\"  Passengers:5"));
    assert!(transcript.contains("dist_to_next:1.50 km"));
    assert!(transcript.contains("Total stops: 1"));
}

#[test]
fn test_shell_invalid_number_reprompts() {
    let transcript = run_shell(fresh_session(), "3\nDepot\nabc\n5\n1\n1\n0\n");

    assert!(transcript.contains("Invalid number, try again."));
    assert!(transcript.contains("Passengers:5"));
}

#[test]
fn test_shell_empty_numeric_input_means_zero() {
    let transcript = run_shell(fresh_session(), "3\nDepot\n\n\n\n0\n");

    assert!(transcript.contains("Passengers:0"));
    assert!(transcript.contains("dist_to_next:0.00 km"));
}

#[test]
fn test_shell_insert_after_reports_fallback() {
    let transcript = run_shell(fresh_session(), "4\nGhost\nNew Stop\n1\n1\n1\n0\n");

    assert!(transcript.contains("Reference stop not found; appended at end."));
}

#[test]
fn test_shell_search_miss_renders_error() {
    let transcript = run_shell(fresh_session(), "2\nNowhere\n0\n");

    assert!(transcript.contains("Error: stop not found: \"Nowhere\""));
}

#[test]
fn test_shell_sample_then_span() {
    let transcript = run_shell(fresh_session(), "12\n9\nCentral Station\nLibrary\n0\n");

    assert!(transcript.contains("Sample route populated (5 stops)."));
    assert!(transcript.contains("Central Station -> Library: 3.70 km, 9.00 min."));
}

#[test]
fn test_shell_totals_over_sample() {
    let transcript = run_shell(fresh_session(), "12\n8\n0\n");

    assert!(transcript.contains("Total route: 8.40 km, 20.00 min."));
}

// =============================================================================
// Persistence Prompt Tests
// =============================================================================

#[test]
fn test_shell_empty_file_prompt_uses_configured_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("route.csv");
    let config = Config::builder().route_file(&path).build();

    // Save with an empty filename answer, then load it back the same way.
    let transcript = run_shell(Session::new(config.clone()), "12\n10\n\n0\n");
    assert!(transcript.contains("Saved 5 stops to"));
    assert!(path.exists());

    let transcript = run_shell(Session::new(config), "11\n\n1\n0\n");
    assert!(transcript.contains("Loaded 5 stops from"));
    assert!(transcript.contains("Total stops: 5"));
}

#[test]
fn test_shell_save_empty_route_renders_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("route.csv");
    let script = format!("10\n{}\n0\n", path.display());

    let transcript = run_shell(fresh_session(), &script);

    assert!(transcript.contains("Error: route is empty, nothing to save"));
}
