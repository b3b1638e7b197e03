// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree node data.

use alloc::string::String;
use alloc::vec::Vec;

/// One node of the data the tree renders.
///
/// `expanded` and `checked` are seeds, not state: the tree copies them into
/// its own per-node state the first time a node is seen, and again only when
/// the seed itself changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Identity of the node, unique within the tree.
    pub id: String,
    /// Text shown for the node.
    pub content: String,
    /// Optional icon name.
    pub icon: Option<String>,
    /// Child nodes.
    pub children: Vec<TreeNode>,
    /// Requested expansion state.
    pub expanded: Option<bool>,
    /// Requested check state.
    pub checked: Option<bool>,
    /// Disabled nodes cannot be selected or checked.
    pub disabled: bool,
}

impl TreeNode {
    /// A leaf node with no seeds.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Sets the expansion seed.
    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Sets the check seed.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Marks the node as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Depth-first search for the node with `id`.
pub(crate) fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    nodes.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find(&node.children, id)
        }
    })
}

/// Calls `f` on every node, parents before children.
pub(crate) fn walk<'a>(nodes: &'a [TreeNode], f: &mut impl FnMut(&'a TreeNode)) {
    for node in nodes {
        f(node);
        walk(&node.children, f);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{TreeNode, find};

    #[test]
    fn find_searches_nested_children() {
        let nodes = vec![
            TreeNode::new("a", "A").with_children(vec![
                TreeNode::new("a1", "A1").with_children(vec![TreeNode::new("deep", "Deep")]),
            ]),
            TreeNode::new("b", "B"),
        ];
        assert_eq!(find(&nodes, "deep").map(|n| n.content.as_str()), Some("Deep"));
        assert_eq!(find(&nodes, "b").map(TreeNode::is_leaf), Some(true));
        assert!(find(&nodes, "missing").is_none());
    }
}
