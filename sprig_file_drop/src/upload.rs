// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop zone state for a file upload input.
//!
//! Unlike [`FileDrop`](crate::FileDrop), a file upload input owns its drop
//! zone markup, so drag handlers are wired declaratively by the host and
//! forwarded here directly. The zone tracks whether a drag is active (to show
//! the overlay) and turns drops and native picker changes into file lists.
//!
//! ```rust
//! use sprig_file_drop::upload::DropZone;
//!
//! let mut zone: DropZone<&str> = DropZone::new();
//! zone.on_drag_enter();
//! assert!(zone.show_overlay());
//!
//! let files = zone.on_drop(vec!["report.pdf"]);
//! assert_eq!(files, Some(vec!["report.pdf"]));
//! assert!(!zone.show_overlay());
//! ```

use alloc::vec::Vec;

use sprig_icache::ICache;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Slot {
    DndActive,
    ShouldClick,
}

/// Drag-and-drop and picker state of one file upload input.
#[derive(Clone, Debug)]
pub struct DropZone<F> {
    /// Whether files may be dropped on the zone at all.
    pub allow_dnd: bool,
    /// Disabled inputs ignore drops and picker requests.
    pub disabled: bool,
    flags: ICache<Slot, bool>,
    _files: core::marker::PhantomData<fn() -> F>,
}

impl<F> Default for DropZone<F> {
    fn default() -> Self {
        Self {
            allow_dnd: true,
            disabled: false,
            flags: ICache::new(),
            _files: core::marker::PhantomData,
        }
    }
}

impl<F> DropZone<F> {
    /// Creates an enabled zone that accepts drops.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn accepts_drag(&self) -> bool {
        self.allow_dnd && !self.disabled
    }

    fn flag(&self, slot: Slot) -> bool {
        self.flags.get(&slot).copied().unwrap_or(false)
    }

    /// Returns `true` while a drag is over the zone.
    #[must_use]
    pub fn is_dnd_active(&self) -> bool {
        self.flag(Slot::DndActive)
    }

    /// Returns `true` if the "drop here" overlay should be rendered.
    ///
    /// The overlay only exists while a drag is active; it is the node that
    /// observes the matching drag-leave.
    #[must_use]
    pub fn show_overlay(&self) -> bool {
        self.accepts_drag() && self.is_dnd_active()
    }

    /// A drag entered the zone. Returns `true` if the host should prevent the
    /// default action.
    pub fn on_drag_enter(&mut self) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        self.flags.set(Slot::DndActive, true);
        true
    }

    /// A drag moved over the zone. The default action must be prevented for
    /// the zone to remain a drop target.
    #[must_use]
    pub fn on_drag_over(&self) -> bool {
        self.accepts_drag()
    }

    /// A drag left the overlay.
    pub fn on_drag_leave(&mut self) -> bool {
        if !self.accepts_drag() {
            return false;
        }
        self.flags.set(Slot::DndActive, false);
        true
    }

    /// Files were dropped. Returns them when the drop carried any.
    pub fn on_drop(&mut self, files: Vec<F>) -> Option<Vec<F>> {
        if !self.accepts_drag() {
            return None;
        }
        self.flags.set(Slot::DndActive, false);
        (!files.is_empty()).then_some(files)
    }

    /// Files were chosen with the native picker. Returns them when any were chosen.
    pub fn on_change(&mut self, files: Vec<F>) -> Option<Vec<F>> {
        (!self.disabled && !files.is_empty()).then_some(files)
    }

    /// Asks the host to open the native file picker on the next render.
    pub fn request_browse(&mut self) {
        if !self.disabled {
            self.flags.set(Slot::ShouldClick, true);
        }
    }

    /// Returns a pending picker request once, clearing it without a re-render.
    pub fn take_browse_request(&mut self) -> bool {
        let should_click = *self.flags.get_or_set(Slot::ShouldClick, false);
        if should_click {
            self.flags.set_quiet(Slot::ShouldClick, false);
        }
        should_click
    }

    /// Returns and clears the pending re-render request.
    pub fn take_invalidation(&mut self) -> bool {
        self.flags.take_invalidation()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::DropZone;

    #[test]
    fn drag_cycle_toggles_overlay() {
        let mut zone: DropZone<u8> = DropZone::new();
        assert!(!zone.show_overlay());
        assert!(zone.on_drag_enter());
        assert!(zone.on_drag_over());
        assert!(zone.show_overlay());
        assert!(zone.on_drag_leave());
        assert!(!zone.show_overlay());
        assert!(zone.take_invalidation());
    }

    #[test]
    fn empty_drop_yields_nothing() {
        let mut zone: DropZone<u8> = DropZone::new();
        zone.on_drag_enter();
        assert_eq!(zone.on_drop(Vec::new()), None);
        assert!(!zone.is_dnd_active());
    }

    #[test]
    fn dnd_disallowed_ignores_drags() {
        let mut zone: DropZone<u8> = DropZone {
            allow_dnd: false,
            ..DropZone::new()
        };
        assert!(!zone.on_drag_enter());
        assert!(!zone.on_drag_over());
        assert!(!zone.show_overlay());
        assert_eq!(zone.on_drop(vec![1]), None);
        // The native picker still works.
        assert_eq!(zone.on_change(vec![1, 2]), Some(vec![1, 2]));
    }

    #[test]
    fn browse_request_is_one_shot_and_quiet() {
        let mut zone: DropZone<u8> = DropZone::new();
        assert!(!zone.take_browse_request());

        zone.request_browse();
        assert!(zone.take_invalidation());
        assert!(zone.take_browse_request());
        assert!(!zone.take_invalidation(), "clearing the request must not re-render");
        assert!(!zone.take_browse_request());
    }

    #[test]
    fn disabled_zone_ignores_everything() {
        let mut zone: DropZone<u8> = DropZone {
            disabled: true,
            ..DropZone::new()
        };
        zone.request_browse();
        assert!(!zone.take_browse_request());
        assert_eq!(zone.on_change(vec![3]), None);
        assert!(!zone.on_drag_enter());
    }
}
