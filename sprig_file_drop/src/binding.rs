// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where drag-leave is observed for a target.
//!
//! A target may name an overlay node that renders the "drop here" hint. The
//! overlay often only mounts once a drag is already in progress, so it cannot
//! always be bound when the target is first queried. The binding therefore
//! moves through a small state machine:
//!
//! ```text
//!             overlay key, mounted          overlay key, not mounted
//!   ┌──────────────────────────── query ────────────────────────────┐
//!   ▼                                │                              ▼
//! Direct ◀──── found on dragover ────┼──────────────────────── Probing
//!                                    │                              │
//!                             no overlay key           misses > probe limit
//!                                    ▼                              ▼
//!                                 Unbound                       Fallback
//! ```
//!
//! `Unbound` and `Fallback` both observe drag-leave on the target itself;
//! they differ only in how they got there.

/// Drag-leave binding of one target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayBinding<N> {
    /// No overlay was requested; drag-leave is observed on the target.
    Unbound,
    /// An overlay was requested but is not mounted. Every `dragover` on the
    /// target re-queries it.
    Probing {
        /// Consecutive `dragover` firings that did not find the overlay.
        misses: u8,
    },
    /// Drag-leave is observed on the overlay node.
    Direct {
        /// The overlay node the drag-leave listener is attached to. `None`
        /// while a volatile overlay is unmounted between drags.
        node: Option<N>,
        /// The overlay was found late, so its identity may change between
        /// renders; it is re-queried rather than cached.
        volatile: bool,
    },
    /// The overlay never appeared; drag-leave is observed on the target.
    Fallback,
}

impl<N: Copy> OverlayBinding<N> {
    /// The node drag-leave is currently observed on, given the target node.
    #[must_use]
    pub fn leave_node(&self, target: N) -> Option<N> {
        match *self {
            Self::Unbound | Self::Fallback => Some(target),
            Self::Direct { node, .. } => node,
            Self::Probing { .. } => None,
        }
    }

    /// Returns `true` if the overlay is re-queried instead of cached.
    #[must_use]
    pub const fn is_volatile(&self) -> bool {
        matches!(self, Self::Direct { volatile: true, .. })
    }
}

/// Outcome of one overlay probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ProbeStep<N> {
    /// The overlay is mounted now.
    Found(N),
    /// Still missing; keep probing.
    Miss,
    /// Missing too often; fall back to the target.
    GiveUp,
}

/// Advances a probing binding by one `dragover` firing.
///
/// `misses` is incremented on every miss; the probe gives up once it exceeds
/// `limit`.
pub(crate) fn probe<N>(misses: &mut u8, found: Option<N>, limit: u8) -> ProbeStep<N> {
    if let Some(node) = found {
        return ProbeStep::Found(node);
    }
    *misses = misses.saturating_add(1);
    if *misses > limit {
        ProbeStep::GiveUp
    } else {
        ProbeStep::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlayBinding, ProbeStep, probe};

    #[test]
    fn probe_finds_overlay_immediately() {
        let mut misses = 3;
        assert_eq!(probe(&mut misses, Some(7_u32), 10), ProbeStep::Found(7));
        assert_eq!(misses, 3, "a hit must not count as a miss");
    }

    #[test]
    fn probe_gives_up_after_more_than_limit_misses() {
        let mut misses = 0;
        for _ in 0..10 {
            assert_eq!(probe::<u32>(&mut misses, None, 10), ProbeStep::Miss);
        }
        assert_eq!(probe::<u32>(&mut misses, None, 10), ProbeStep::GiveUp);
        assert_eq!(misses, 11);
    }

    #[test]
    fn leave_node_per_binding() {
        let target = 1_u32;
        assert_eq!(OverlayBinding::Unbound.leave_node(target), Some(1));
        assert_eq!(OverlayBinding::Fallback.leave_node(target), Some(1));
        assert_eq!(
            OverlayBinding::<u32>::Probing { misses: 0 }.leave_node(target),
            None
        );
        let direct = OverlayBinding::Direct {
            node: Some(2),
            volatile: true,
        };
        assert_eq!(direct.leave_node(target), Some(2));
        assert!(direct.is_volatile());
    }
}
