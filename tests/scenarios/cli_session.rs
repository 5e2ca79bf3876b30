//! Scenario: Command-line session against a snapshot file
//!
//! Journey: A maintainer lists a repository, looks at another branch, and
//! deletes a file, all through the `branchtree` binary.
//!
//! Success Criteria:
//! - Listings reflect the selected branch
//! - `rm` writes the delete back to the snapshot
//! - Refused deletes exit non-zero and leave the snapshot alone

use serde_json::Value;

use crate::common::*;

fn paths(listing: &Value) -> Vec<String> {
    listing["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["path"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// SCENARIO: list main, then dev, in JSON
#[test]
fn scenario_ls_json_follows_branch() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);

    let result = env.run("ls", &["--json"]);
    assert!(result.success, "ls failed:\n{}", result.combined_output());
    let listing = result.json();
    assert_eq!(listing["type"], "listing");
    assert_eq!(listing["branch"], "main");
    assert_eq!(
        paths(&listing),
        vec!["/", "/README.md", "/docs/", "/docs/guide.md", "/notes.txt"]
    );
    assert!(listing["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["branch"] == "main"));

    let result = env.run("ls", &["--json", "--branch", "dev"]);
    assert!(result.success, "ls dev failed:\n{}", result.combined_output());
    let listing = result.json();
    assert_eq!(listing["branch"], "dev");
    assert_eq!(paths(&listing), vec!["/", "/README.md", "/CHANGELOG.md"]);
}

/// SCENARIO: plain-text listing falls back to ascii icons
#[test]
fn scenario_ls_text_in_plain_terminal() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);

    let result = env.run("ls", &[]);

    assert!(result.success, "ls failed:\n{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{}", result.stdout);
    assert!(lines[0].contains("[-] [D] octo/hello [main* dev]"), "{}", lines[0]);
    assert!(lines[1].contains("[F] README.md"), "{}", lines[1]);
    assert!(lines[1].contains("[Download] [Delete]  dl:3"), "{}", lines[1]);
    assert!(lines[4].contains("(Download) (Delete)"), "{}", lines[4]);
}

/// SCENARIO: widget placement from project config shows only names
#[test]
fn scenario_project_config_selects_widget_placement() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);
    env.write_project_config("[browser]\nplacement = \"widget\"\n");

    let result = env.run("ls", &["--json"]);
    assert!(result.success, "ls failed:\n{}", result.combined_output());
    let listing = result.json();

    assert_eq!(listing["placement"], "widget");
    for row in listing["rows"].as_array().unwrap() {
        let cells = row["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 1, "{}", row);
        assert_eq!(cells[0]["column"], "name");
    }
}

/// SCENARIO: rm --yes deletes and persists
#[test]
fn scenario_rm_yes_persists_delete() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);

    let result = env.run("rm", &["/docs/guide.md", "--yes", "--json"]);
    assert!(result.success, "rm failed:\n{}", result.combined_output());
    let done = result.json();
    assert_eq!(done["type"], "delete_complete");
    assert_eq!(done["path"], "/docs/guide.md");
    assert_eq!(done["branch"], "main");
    assert_eq!(done["sha"], "g1");

    let snapshot = env.snapshot_json();
    let main = snapshot["refs"]["main"].as_array().unwrap();
    assert_eq!(main.len(), 3);
    assert!(main.iter().all(|e| e["path"] != "/docs/guide.md"));

    let listing = env.run("ls", &["--json"]).json();
    assert!(!paths(&listing).contains(&"/docs/guide.md".to_string()));
}

/// SCENARIO: rm on another branch only touches that branch
#[test]
fn scenario_rm_on_dev_leaves_main() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);

    let result = env.run("rm", &["/README.md", "--branch", "dev", "--yes"]);
    assert!(result.success, "rm failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("Deleted /README.md on dev"), "{}", result.stdout);

    let snapshot = env.snapshot_json();
    assert_eq!(snapshot["refs"]["dev"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["refs"]["main"].as_array().unwrap().len(), 4);
}

/// SCENARIO: refused deletes exit non-zero and change nothing
#[test]
fn scenario_rm_refusals_leave_snapshot_alone() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);
    let before = env.snapshot_json();

    let json_without_yes = env.run("rm", &["/README.md", "--json"]);
    assert!(!json_without_yes.success);
    assert!(json_without_yes.stderr.contains("--yes"), "{}", json_without_yes.stderr);

    let folder = env.run("rm", &["/docs/", "--yes"]);
    assert!(!folder.success);
    assert!(folder.stderr.contains("folder"), "{}", folder.stderr);

    let missing = env.run("rm", &["/nope.md", "--yes"]);
    assert!(!missing.success);
    assert!(missing.stderr.contains("no such file"), "{}", missing.stderr);

    let no_revision = env.run("rm", &["/notes.txt", "--yes"]);
    assert!(!no_revision.success);
    assert!(
        no_revision.stderr.contains("no revision identifier"),
        "{}",
        no_revision.stderr
    );

    assert_eq!(env.snapshot_json(), before);
}

/// SCENARIO: read-only repository refuses delete with a permission message
#[test]
fn scenario_rm_read_only_is_denied() {
    let env = TestEnv::with_snapshot(READ_ONLY_REPO);
    let before = env.snapshot_json();

    let result = env.run("rm", &["/README.md", "--yes"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("don't have permission"),
        "{}",
        result.stderr
    );
    assert_eq!(env.snapshot_json(), before);
}

/// SCENARIO: browse refuses to start without a terminal
#[test]
fn scenario_browse_requires_terminal() {
    let env = TestEnv::with_snapshot(EDITABLE_REPO);

    let result = env.run("browse", &[]);

    assert!(!result.success);
    assert!(result.stderr.contains("interactive terminal"), "{}", result.stderr);
}
