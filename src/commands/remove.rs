//! `rm` command handler
//!
//! Drives the delete workflow for one file: activation, confirmation, remote
//! delete against the snapshot, then tree reconciliation.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde_json::json;

use branchtree::application::{Effect, EventResult};
use branchtree::domain::ports::{RemoteStore, TreeHost};
use branchtree::domain::services::ActionKind;
use branchtree::error::BrowserError;

pub fn cmd_rm(
    snapshot: &Path,
    path: &str,
    branch: Option<&str>,
    yes: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if json && !yes {
        bail!("--json requires --yes (no interactive confirmation)");
    }

    let config = super::load_config(config_path, snapshot, json)?;
    let (mut browser, mut store) = super::open_browser(snapshot, &config, None, branch)?;
    browser.expand_all(&store)?;

    let Some(id) = browser.tree().find_by_path(path) else {
        bail!("no such file on this branch: {}", path);
    };
    let name = browser
        .tree()
        .node(id)
        .map(|n| n.data.name.clone())
        .unwrap_or_default();

    match browser.activate(id, ActionKind::Delete)? {
        EventResult::Handled(Effect::ConfirmDelete { .. }) => {}
        EventResult::Handled(Effect::Notified { .. }) => {
            if let Some(notice) = browser.tree().notice(id, Instant::now()) {
                eprintln!("{}", notice.message);
            }
            return Err(BrowserError::PermissionDenied { name }.into());
        }
        _ => bail!("'{}' is a folder; only files can be deleted", path),
    }

    if !yes {
        let prompt = browser
            .modal()
            .view()
            .map(|v| format!("{} {}", v.content.title, v.content.body))
            .unwrap_or_else(|| format!("Delete \"{}\"?", name));
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        if !confirmed {
            browser.cancel_delete();
            println!("Aborted.");
            return Ok(());
        }
    }

    let request = browser.confirm_delete()?;
    let result = store.delete(&request);
    let outcome = browser.complete_delete(result)?;

    if !outcome.is_removed() {
        if let Some(notice) = browser.tree().notice(id, Instant::now()) {
            eprintln!("{}", notice.message);
        }
    }
    let request = outcome.into_result()?;

    if json {
        let out = json!({
            "type": "delete_complete",
            "path": request.path,
            "branch": request.branch,
            "sha": request.sha,
        });
        println!("{}", serde_json::to_string(&out)?);
    } else {
        match &request.branch {
            Some(branch) => println!("Deleted {} on {}", request.path, branch),
            None => println!("Deleted {}", request.path),
        }
    }
    Ok(())
}
