// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target drop state snapshots.

use alloc::vec::Vec;

/// Snapshot of the drag-and-drop state of one target.
///
/// Callers always receive a clone; mutating it has no effect on the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropState<F> {
    /// A drag is currently over the target.
    pub is_dragging: bool,
    /// A drop happened and has not been consumed yet.
    pub is_dropped: bool,
    /// Files captured by the last drop. Empty when nothing was dropped or the
    /// drop carried no files.
    pub files: Vec<F>,
}

impl<F> Default for DropState<F> {
    fn default() -> Self {
        Self {
            is_dragging: false,
            is_dropped: false,
            files: Vec::new(),
        }
    }
}

impl<F> DropState<F> {
    /// Returns `true` if nothing is happening on the target.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.is_dragging && !self.is_dropped
    }

    pub(crate) fn dropped(files: Vec<F>) -> Self {
        Self {
            is_dragging: false,
            is_dropped: true,
            files,
        }
    }
}
