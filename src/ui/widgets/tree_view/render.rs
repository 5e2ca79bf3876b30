//! Text rendering of browser rows, the delete modal and the help bar.

use std::time::Instant;

use unicode_width::UnicodeWidthStr;

use branchtree::application::Browser;
use branchtree::domain::ports::{StorageApi, TreeHost};
use branchtree::domain::services::{ActionDescriptor, Cell, RowDescriptor, TitleCell};
use branchtree::domain::value_objects::Notice;
use branchtree::infrastructure::tree::ModalView;

use crate::ui::theme::{icon, icons, icons_ascii, severity_icon};

/// Everything needed to draw one row besides its descriptor
#[derive(Debug, Clone, Copy)]
pub struct RowStyle<'a> {
    pub depth: usize,
    pub is_folder: bool,
    pub expanded: bool,
    /// Row under the cursor; hover-only actions are revealed
    pub active: bool,
    pub reveal_hover: bool,
    pub unicode: bool,
    pub notice: Option<&'a Notice>,
}

/// Name-column text: repository roots show their branch options, current one starred
pub fn title_text(title: &TitleCell) -> String {
    match title {
        TitleCell::Repository {
            name,
            selector: Some(selector),
        } => {
            let options: Vec<String> = selector
                .options
                .iter()
                .map(|o| {
                    if o.selected {
                        format!("{}*", o.name)
                    } else {
                        o.name.clone()
                    }
                })
                .collect();
            format!("{} [{}]", name, options.join(" "))
        }
        other => other.name().to_string(),
    }
}

fn action_text(action: &ActionDescriptor) -> String {
    if action.enabled {
        format!("[{}]", action.label)
    } else {
        format!("({})", action.label)
    }
}

/// Left part of a row: cursor, indentation, expansion and kind icons, title
fn row_head(row: &RowDescriptor, style: &RowStyle<'_>) -> String {
    let u = style.unicode;
    let cursor = if style.active {
        icon(u, icons::CURSOR, icons_ascii::CURSOR)
    } else {
        " "
    };
    let indent = "  ".repeat(style.depth);

    let expand = if style.is_folder {
        if style.expanded {
            icon(u, icons::EXPAND, icons_ascii::EXPAND).to_string()
        } else {
            icon(u, icons::COLLAPSE, icons_ascii::COLLAPSE).to_string()
        }
    } else {
        " ".repeat(icon(u, icons::EXPAND, icons_ascii::EXPAND).width())
    };

    let mut kind = icon(u, icons::FILE, icons_ascii::FILE);
    let mut title = String::new();
    for cell in &row.cells {
        if let Cell::Name {
            title: t,
            folder_icon,
        } = cell
        {
            title = title_text(t);
            if style.is_folder {
                kind = if folder_icon.is_some() {
                    icon(u, icons::CUSTOM_FOLDER, icons_ascii::CUSTOM_FOLDER)
                } else {
                    icon(u, icons::FOLDER, icons_ascii::FOLDER)
                };
            }
        }
    }

    format!("{} {}{} {} {}", cursor, indent, expand, kind, title)
}

/// Right part of a row: actions, download count, notice
fn row_tail(row: &RowDescriptor, style: &RowStyle<'_>) -> String {
    let mut parts = Vec::new();

    for cell in &row.cells {
        match cell {
            Cell::Actions { actions } => {
                let shown: Vec<String> = actions
                    .iter()
                    .filter(|a| !a.hidden_until_hover || style.active || style.reveal_hover)
                    .map(action_text)
                    .collect();
                if !shown.is_empty() {
                    parts.push(shown.join(" "));
                }
            }
            Cell::Downloads { count: Some(n) } => {
                parts.push(format!(
                    "{}{}",
                    icon(style.unicode, icons::DOWNLOADS, icons_ascii::DOWNLOADS),
                    n
                ));
            }
            _ => {}
        }
    }

    if let Some(notice) = style.notice {
        parts.push(format!(
            "{} {}",
            severity_icon(notice.severity, style.unicode),
            notice.message
        ));
    }

    parts.join("  ")
}

/// Render rows as aligned lines
pub fn render_rows(rows: &[(RowDescriptor, RowStyle<'_>)]) -> Vec<String> {
    let heads: Vec<String> = rows.iter().map(|(r, s)| row_head(r, s)).collect();
    let width = heads.iter().map(|h| h.width()).max().unwrap_or(0);

    heads
        .into_iter()
        .zip(rows)
        .map(|(head, (row, style))| {
            let tail = row_tail(row, style);
            if tail.is_empty() {
                head
            } else {
                let pad = width - head.width();
                format!("{}{}  {}", head, " ".repeat(pad), tail)
            }
        })
        .collect()
}

/// Render the browser's visible tree
pub fn render_tree<S: StorageApi>(
    browser: &Browser<S>,
    cursor: Option<usize>,
    reveal_hover: bool,
    unicode: bool,
    now: Instant,
) -> Vec<String> {
    let tree = browser.tree();
    let rows: Vec<(RowDescriptor, RowStyle<'_>)> = tree
        .visible()
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| {
            let row = browser.row(v.id)?;
            let node = tree.node(v.id)?;
            Some((
                row,
                RowStyle {
                    depth: v.depth,
                    is_folder: node.is_folder(),
                    expanded: tree.is_expanded(v.id),
                    active: cursor == Some(i),
                    reveal_hover,
                    unicode,
                    notice: tree.notice(v.id, now),
                },
            ))
        })
        .collect();

    render_rows(&rows)
}

/// Render the delete confirmation modal
pub fn render_modal(view: &ModalView, unicode: bool) -> Vec<String> {
    let sep = icon(unicode, icons::SEPARATOR, icons_ascii::SEPARATOR);
    let controls: Vec<String> = view
        .controls
        .iter()
        .map(|c| {
            if c.disabled {
                format!("({})", c.label)
            } else {
                format!("[{}]", c.label)
            }
        })
        .collect();
    let width = view.content.title.width().max(view.content.body.width());

    vec![
        sep.repeat(width),
        view.content.title.clone(),
        view.content.body.clone(),
        controls.join(" "),
        sep.repeat(width),
    ]
}

/// Keyboard shortcuts
pub fn render_help_bar(modal_open: bool) -> String {
    if modal_open {
        String::from("[y/Enter] OK    [n/Esc] Cancel")
    } else {
        String::from(
            "[u] Upload    [d] Download    [o] Open repo    [x] Delete    \
             [b] Next branch    [q] Quit\n\
             (Use ↑↓ to navigate, →← to expand/collapse, Enter to open)",
        )
    }
}
