//! `browse` command handler

use std::path::Path;

use anyhow::{bail, Result};

use branchtree::domain::value_objects::Placement;
use branchtree::logging;

use crate::ui::context::UiContext;
use crate::ui::widgets::tree_view::run_interactive;

pub fn cmd_browse(
    snapshot: &Path,
    placement: Option<Placement>,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = super::load_config(config_path, snapshot, json)?;
    let ui = UiContext::new(json, verbose, &config);
    if ui.json || !ui.caps.is_tty {
        bail!("browse needs an interactive terminal; use `branchtree ls` instead");
    }

    let (mut browser, mut store) = super::open_browser(snapshot, &config, placement, None)?;
    let root = browser.tree().root();
    browser.expand(root, &store)?;

    logging::set_tui_mode(true);
    let result = run_interactive(&mut browser, &mut store, &ui);
    logging::set_tui_mode(false);

    result.map_err(Into::into)
}
