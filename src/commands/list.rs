//! `ls` command handler
//!
//! Lazy-loads the whole repository and prints one row per node.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use branchtree::domain::ports::TreeHost;
use branchtree::domain::services::effective_branch;
use branchtree::domain::value_objects::Placement;

use crate::ui::context::UiContext;
use crate::ui::widgets::tree_view::render_tree;

pub fn cmd_ls(
    snapshot: &Path,
    branch: Option<&str>,
    placement: Option<Placement>,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = super::load_config(config_path, snapshot, json)?;
    let ui = UiContext::new(json, verbose, &config);

    let (mut browser, store) = super::open_browser(snapshot, &config, placement, branch)?;
    browser.expand_all(&store)?;

    let tree = browser.tree();
    let root_branch = effective_branch(tree, tree.root());

    if ui.json {
        let rows: Vec<_> = tree
            .visible()
            .into_iter()
            .filter_map(|v| {
                let node = tree.node(v.id)?;
                let row = browser.row(v.id)?;
                Some(json!({
                    "depth": v.depth,
                    "path": node.data.path,
                    "kind": node.kind,
                    "branch": node.data.branch,
                    "cells": row.cells,
                }))
            })
            .collect();
        let out = json!({
            "type": "listing",
            "placement": browser.placement(),
            "branch": root_branch,
            "rows": rows,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    let lines = render_tree(&browser, None, true, ui.unicode, Instant::now());
    for line in &lines {
        println!("{}", line);
    }
    if ui.verbose > 0 {
        eprintln!(
            "{} nodes on {}",
            lines.len(),
            root_branch.as_deref().unwrap_or("(no branch)")
        );
    }
    Ok(())
}
