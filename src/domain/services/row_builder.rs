//! Row descriptors consumed by the host on every render pass

use log::warn;
use serde::Serialize;

use crate::domain::entities::{Node, NodeId};
use crate::domain::ports::StorageApi;
use crate::domain::value_objects::{Placement, UrlParams};

use super::action_resolver::{resolve_actions, ActionDescriptor};
use super::branch_selector::{branch_selector, BranchSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Name,
    Actions,
    Downloads,
}

/// Static description of a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub css: &'static str,
    /// Participates in the host's text filter
    pub filter: bool,
    /// Host may draw custom folder icons in this column
    pub folder_icons: bool,
}

/// Columns for a placement: name always; actions and downloads in the full browser
pub fn column_specs(placement: Placement) -> Vec<ColumnSpec> {
    let mut columns = vec![ColumnSpec {
        kind: ColumnKind::Name,
        css: "",
        filter: true,
        folder_icons: true,
    }];

    if placement.is_full_browser() {
        columns.push(ColumnSpec {
            kind: ColumnKind::Actions,
            css: "action-col",
            filter: false,
            folder_icons: false,
        });
        columns.push(ColumnSpec {
            kind: ColumnKind::Downloads,
            css: "",
            filter: false,
            folder_icons: false,
        });
    }

    columns
}

/// Content of the name column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TitleCell {
    /// Repository root: name plus branch selector
    Repository {
        name: String,
        selector: Option<BranchSelector>,
    },
    /// Any other node: name linking to its file view page
    Path { name: String, link: Option<String> },
}

impl TitleCell {
    pub fn name(&self) -> &str {
        match self {
            TitleCell::Repository { name, .. } | TitleCell::Path { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "column", rename_all = "lowercase")]
pub enum Cell {
    Name {
        title: TitleCell,
        #[serde(skip_serializing_if = "Option::is_none")]
        folder_icon: Option<String>,
    },
    Actions {
        actions: Vec<ActionDescriptor>,
    },
    Downloads {
        count: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDescriptor {
    pub node_id: NodeId,
    pub cells: Vec<Cell>,
}

impl RowDescriptor {
    pub fn title(&self) -> Option<&TitleCell> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Name { title, .. } => Some(title),
            _ => None,
        })
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        self.cells
            .iter()
            .find_map(|cell| match cell {
                Cell::Actions { actions } => Some(actions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

/// Name-column content for a node
pub fn title_cell<A: StorageApi + ?Sized>(
    node: &Node,
    storage: &A,
    effective_branch: Option<&str>,
) -> TitleCell {
    if node.is_repository_root() {
        return TitleCell::Repository {
            name: node.data.name.clone(),
            selector: branch_selector(node),
        };
    }

    let params = UrlParams::new().branch(effective_branch);
    let link = match storage.file_view_url(node, &params) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("no file view link for {}: {}", node.data.path, e);
            None
        }
    };

    TitleCell::Path {
        name: node.data.name.clone(),
        link,
    }
}

/// Build the row for `node` under `placement`
pub fn build_row<A: StorageApi + ?Sized>(
    node: &Node,
    placement: Placement,
    storage: &A,
    effective_branch: Option<&str>,
) -> RowDescriptor {
    let cells = column_specs(placement)
        .into_iter()
        .map(|spec| match spec.kind {
            ColumnKind::Name => Cell::Name {
                title: title_cell(node, storage, effective_branch),
                folder_icon: if node.is_folder() {
                    node.data.icon_url.clone()
                } else {
                    None
                },
            },
            ColumnKind::Actions => Cell::Actions {
                actions: resolve_actions(node, node.data.permissions),
            },
            ColumnKind::Downloads => Cell::Downloads {
                count: node.data.downloads,
            },
        })
        .collect();

    RowDescriptor {
        node_id: node.id,
        cells,
    }
}
