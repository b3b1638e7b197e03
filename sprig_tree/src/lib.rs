// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Tree: headless state for an expandable tree view.
//!
//! Node data is owned by the host and handed to [`Tree::set_nodes`] on every
//! render. Each node's `expanded` and `checked` fields seed the tree's own
//! per-node state: the seed is copied when a node is first seen and again only
//! when the seed changes, so user interaction sticks across renders that pass
//! the same data.
//!
//! Selection is either owned (a content click selects an enabled node when
//! [`TreeConfig::selectable`] is set) or controlled through
//! [`Tree::set_selected_node`], whose value replaces the owned one whenever it
//! changes.
//!
//! ```rust
//! use sprig_tree::{Tree, TreeConfig, TreeEvent, TreeNode};
//!
//! let nodes = vec![
//!     TreeNode::new("docs", "Documents").with_children(vec![
//!         TreeNode::new("cv", "cv.pdf"),
//!     ]),
//! ];
//! let config = TreeConfig { selectable: true, ..TreeConfig::default() };
//! let mut tree = Tree::new(nodes, config);
//! assert_eq!(tree.visible().len(), 1);
//!
//! let events = tree.on_content_click("docs");
//! assert_eq!(events[0], TreeEvent::Select("docs".into()));
//! assert_eq!(events[1], TreeEvent::Expand { id: "docs".into(), expanded: true });
//! assert_eq!(tree.visible().len(), 2);
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`TreeNode`],
//!   [`TreeConfig`] and [`TreeEvent`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
mod tree;

pub use node::TreeNode;
pub use tree::{NodeView, Tree, TreeConfig, TreeEvent, TreeEvents};
