// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree controller.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;
use sprig_icache::ICache;

use crate::node::{TreeNode, find, walk};

/// Tree configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Nodes render a checkbox.
    pub checkable: bool,
    /// Clicking a node selects it.
    pub selectable: bool,
}

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeEvent {
    /// A node was selected; carries its id.
    Select(String),
    /// A node's checkbox changed.
    Check {
        /// The node.
        id: String,
        /// New check state.
        checked: bool,
    },
    /// A node was expanded or collapsed.
    Expand {
        /// The node.
        id: String,
        /// New expansion state.
        expanded: bool,
    },
}

/// Events produced by one click.
pub type TreeEvents = SmallVec<[TreeEvent; 2]>;

/// Owned state of one node, plus the seeds it was last synced from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct NodeState {
    seen_expanded: Option<bool>,
    seen_checked: Option<bool>,
    expanded: bool,
    checked: bool,
}

impl NodeState {
    fn seeded(node: &TreeNode) -> Self {
        Self {
            seen_expanded: node.expanded,
            seen_checked: node.checked,
            expanded: node.expanded.unwrap_or(false),
            checked: node.checked.unwrap_or(false),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Selected,
}

/// Render-time view of one visible node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeView<'a> {
    /// Node id.
    pub id: &'a str,
    /// Node text.
    pub content: &'a str,
    /// Optional icon name.
    pub icon: Option<&'a str>,
    /// Nesting depth; roots are at `0`.
    pub level: usize,
    /// The node has no children (no expander is drawn).
    pub is_leaf: bool,
    /// The node's children are shown.
    pub expanded: bool,
    /// The node's checkbox is checked.
    pub checked: bool,
    /// The node is the selected one.
    pub selected: bool,
    /// The node is disabled.
    pub disabled: bool,
}

/// Expandable, optionally checkable and selectable tree.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    config: TreeConfig,
    nodes: Vec<TreeNode>,
    selected_prop: Option<String>,
    selection: ICache<Slot, String>,
    node_state: ICache<String, NodeState>,
}

impl Tree {
    /// Creates a tree over `nodes`, seeding every node's state.
    #[must_use]
    pub fn new(nodes: Vec<TreeNode>, config: TreeConfig) -> Self {
        let mut tree = Self {
            config,
            ..Self::default()
        };
        tree.set_nodes(nodes);
        tree
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The node data.
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Replaces the node data.
    ///
    /// New nodes are seeded from their `expanded`/`checked` fields. Known
    /// nodes keep their state unless a seed differs from the one seen last
    /// time, in which case the new seed wins. State of nodes that are gone is
    /// dropped.
    pub fn set_nodes(&mut self, nodes: Vec<TreeNode>) {
        let cache = &mut self.node_state;
        walk(&nodes, &mut |node| sync_node(cache, node));
        let mut live: Vec<&str> = Vec::new();
        walk(&nodes, &mut |node| live.push(node.id.as_str()));
        cache.retain(|id, _| live.contains(&id.as_str()));
        self.nodes = nodes;
    }

    /// Applies the controlled selection.
    ///
    /// Only a value different from the previously applied one replaces the
    /// selection, so clicks made since stick until the controlled value moves.
    pub fn set_selected_node(&mut self, id: Option<&str>) {
        if self.selected_prop.as_deref() == id {
            return;
        }
        self.selected_prop = id.map(ToString::to_string);
        match id {
            Some(id) => self.selection.set(Slot::Selected, id.to_string()),
            None => {
                let _ = self.selection.remove(&Slot::Selected);
            }
        }
    }

    /// The selected node's id.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selection.get(&Slot::Selected).map(String::as_str)
    }

    /// Returns `true` if the node's children are shown.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.node_state.get(id).is_some_and(|s| s.expanded)
    }

    /// Returns `true` if the node's checkbox is checked.
    #[must_use]
    pub fn is_checked(&self, id: &str) -> bool {
        self.node_state.get(id).is_some_and(|s| s.checked)
    }

    /// Handles a click on a node's content.
    ///
    /// The node toggles its expansion and reports it. It is also selected,
    /// reported before the expansion, when the tree is selectable and the node
    /// is enabled. Unknown ids produce no events.
    pub fn on_content_click(&mut self, id: &str) -> TreeEvents {
        let mut events = TreeEvents::new();
        let Some(disabled) = find(&self.nodes, id).map(|n| n.disabled) else {
            return events;
        };
        let Some(mut state) = self.node_state.get(id).copied() else {
            return events;
        };
        state.expanded = !state.expanded;
        self.node_state.set(id.to_string(), state);

        if self.config.selectable && !disabled {
            self.selection.set(Slot::Selected, id.to_string());
            events.push(TreeEvent::Select(id.to_string()));
        }
        events.push(TreeEvent::Expand {
            id: id.to_string(),
            expanded: state.expanded,
        });
        events
    }

    /// Handles a node's checkbox changing to `checked`.
    ///
    /// Ignored unless the tree is checkable and the node is enabled. The click
    /// never expands or selects the node.
    pub fn on_check(&mut self, id: &str, checked: bool) -> Option<TreeEvent> {
        if !self.config.checkable || find(&self.nodes, id)?.disabled {
            return None;
        }
        let mut state = self.node_state.get(id).copied()?;
        state.checked = checked;
        self.node_state.set(id.to_string(), state);
        Some(TreeEvent::Check {
            id: id.to_string(),
            checked,
        })
    }

    /// Visible nodes in display order: roots, and the children of expanded nodes.
    #[must_use]
    pub fn visible(&self) -> Vec<NodeView<'_>> {
        let selected = self.selected();
        let mut out = Vec::new();
        let mut stack: Vec<(&TreeNode, usize)> = self.nodes.iter().rev().map(|n| (n, 0)).collect();
        while let Some((node, level)) = stack.pop() {
            let state = self
                .node_state
                .get(node.id.as_str())
                .copied()
                .unwrap_or_else(|| NodeState::seeded(node));
            out.push(NodeView {
                id: &node.id,
                content: &node.content,
                icon: node.icon.as_deref(),
                level,
                is_leaf: node.is_leaf(),
                expanded: state.expanded,
                checked: state.checked,
                selected: selected == Some(node.id.as_str()),
                disabled: node.disabled,
            });
            if state.expanded {
                stack.extend(node.children.iter().rev().map(|c| (c, level + 1)));
            }
        }
        out
    }

    /// Returns and clears the pending re-render request.
    pub fn take_invalidation(&mut self) -> bool {
        let selection = self.selection.take_invalidation();
        let nodes = self.node_state.take_invalidation();
        selection || nodes
    }
}

fn sync_node(cache: &mut ICache<String, NodeState>, node: &TreeNode) {
    let Some(mut state) = cache.get(node.id.as_str()).copied() else {
        cache.set_quiet(node.id.clone(), NodeState::seeded(node));
        return;
    };
    let mut changed = false;
    if let Some(expanded) = node.expanded
        && state.seen_expanded != Some(expanded)
        && state.expanded != expanded
    {
        state.expanded = expanded;
        changed = true;
    }
    if let Some(checked) = node.checked
        && state.seen_checked != Some(checked)
        && state.checked != checked
    {
        state.checked = checked;
        changed = true;
    }
    state.seen_expanded = node.expanded;
    state.seen_checked = node.checked;
    if changed {
        log::trace!("tree node `{}` re-seeded from its data", node.id);
        cache.set(node.id.clone(), state);
    } else {
        cache.set_quiet(node.id.clone(), state);
    }
}
