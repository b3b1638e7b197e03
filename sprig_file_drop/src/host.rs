// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the tracker and the host's node tree.

use alloc::vec::Vec;

use bitflags::bitflags;

/// Native drag event kinds the tracker listens for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEventKind {
    /// A drag entered the node (`dragenter`).
    DragEnter,
    /// A drag is moving over the node (`dragover`).
    DragOver,
    /// A drag left the node (`dragleave`).
    DragLeave,
    /// Something was dropped on the node (`drop`).
    Drop,
}

bitflags! {
    /// A set of [`DragEventKind`]s, used to summarize the listeners attached to a node.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DragEvents: u8 {
        /// `dragenter`.
        const DRAG_ENTER = 1 << 0;
        /// `dragover`.
        const DRAG_OVER = 1 << 1;
        /// `dragleave`.
        const DRAG_LEAVE = 1 << 2;
        /// `drop`.
        const DROP = 1 << 3;
    }
}

impl From<DragEventKind> for DragEvents {
    fn from(kind: DragEventKind) -> Self {
        match kind {
            DragEventKind::DragEnter => Self::DRAG_ENTER,
            DragEventKind::DragOver => Self::DRAG_OVER,
            DragEventKind::DragLeave => Self::DRAG_LEAVE,
            DragEventKind::Drop => Self::DROP,
        }
    }
}

/// A drag event forwarded by the host.
///
/// `files` is only meaningful for [`DragEventKind::Drop`]; hosts pass an empty
/// vector for every other kind, and for drops that carry no files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEvent<N, F> {
    /// What happened.
    pub kind: DragEventKind,
    /// The node whose listener fired.
    pub node: N,
    /// Files carried by a drop.
    pub files: Vec<F>,
}

impl<N, F> DragEvent<N, F> {
    /// A payload-free event of the given kind.
    pub fn new(kind: DragEventKind, node: N) -> Self {
        Self {
            kind,
            node,
            files: Vec::new(),
        }
    }

    /// A drop event carrying `files`.
    pub fn drop_files(node: N, files: Vec<F>) -> Self {
        Self {
            kind: DragEventKind::Drop,
            node,
            files,
        }
    }
}

/// Result of handing a [`DragEvent`] to the tracker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// No listener of the tracker was bound to this node and kind.
    Ignored,
    /// The tracker handled the event; the host must prevent the platform's
    /// default action (otherwise a `dragover` aborts the drag, and a `drop`
    /// navigates to the file).
    PreventDefault,
}

impl DragOutcome {
    /// Returns `true` if the host should call `preventDefault`.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

/// Access to the host's mounted nodes and their event listeners.
///
/// Nodes are addressed by logical key (the `key` a widget gives an element in
/// its render output). Lookups reflect the *current* render: a key whose
/// element is not mounted yields `None`.
///
/// Listener attachment is expressed per node and event kind. The host is
/// expected to forward every event of an attached kind on that node to
/// [`FileDrop::handle_event`](crate::FileDrop::handle_event).
pub trait DropHost {
    /// Handle to a mounted node.
    type Node: Copy + Eq + core::fmt::Debug;

    /// Returns the node currently mounted under `key`, if any.
    fn node(&self, key: &str) -> Option<Self::Node>;

    /// Starts forwarding `kind` events on `node`.
    fn add_listener(&mut self, node: Self::Node, kind: DragEventKind);

    /// Stops forwarding `kind` events on `node`.
    fn remove_listener(&mut self, node: Self::Node, kind: DragEventKind);
}
