//! Snapshot tests using the insta crate.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use viewport_input::ToolMode;

#[test]
fn snapshot_tool_modes() {
    insta::assert_json_snapshot!("tool_modes", ToolMode::ALL);
}

#[test]
fn snapshot_unknown_mode_code_error() {
    let err = ToolMode::try_from(7).unwrap_err();
    insta::assert_debug_snapshot!("unknown_mode_code_error", err);
}

#[test]
fn snapshot_unknown_mode_name_message() {
    let err = "rotate".parse::<ToolMode>().unwrap_err();
    insta::assert_snapshot!("unknown_mode_name_message", err.to_string());
}
