// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Dialog: headless state for a dialog window.
//!
//! The host owns the `open` flag and passes it to [`Dialog::set_open`] on
//! every render. The dialog reports [`DialogEvent::Open`] once per
//! closed-to-open edge, and turns the close button, the Escape key and clicks
//! on the underlay into [`DialogEvent::RequestClose`]. Closing is always the
//! host's decision.
//!
//! ```rust
//! use sprig_dialog::{Dialog, DialogConfig, DialogEvent};
//!
//! let mut dialog = Dialog::new(DialogConfig { modal: true, ..DialogConfig::default() });
//! assert_eq!(dialog.set_open(true), Some(DialogEvent::Open));
//! assert_eq!(dialog.set_open(true), None);
//!
//! // Modal dialogs ignore the underlay but still close on Escape.
//! assert_eq!(dialog.on_underlay_click(), None);
//! assert_eq!(dialog.on_key_up("Escape"), Some(DialogEvent::RequestClose));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`DialogConfig`],
//!   [`DialogRole`] and [`DialogEvent`].
//!
//! This crate is `no_std`.

#![no_std]

/// Accessibility role of the dialog.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogRole {
    /// `role="dialog"`.
    #[default]
    Dialog,
    /// `role="alertdialog"`.
    AlertDialog,
}

impl DialogRole {
    /// The ARIA role attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::AlertDialog => "alertdialog",
        }
    }
}

/// Dialog configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogConfig {
    /// The dialog can be closed by the user; renders a close button.
    pub closeable: bool,
    /// Clicks outside the content do not close the dialog.
    pub modal: bool,
    /// A visible semi-transparent underlay is drawn behind the dialog.
    pub underlay: bool,
    /// Accessibility role.
    pub role: DialogRole,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            closeable: true,
            modal: false,
            underlay: false,
            role: DialogRole::Dialog,
        }
    }
}

/// Something the host should react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DialogEvent {
    /// The dialog went from closed to open.
    Open,
    /// The user asked for the dialog to close.
    RequestClose,
}

/// Dialog state.
#[derive(Clone, Debug, Default)]
pub struct Dialog {
    config: DialogConfig,
    open: bool,
    was_open: bool,
}

impl Dialog {
    /// Creates a closed dialog.
    #[must_use]
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            open: false,
            was_open: false,
        }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: DialogConfig) {
        self.config = config;
    }

    /// Applies the host's `open` flag.
    ///
    /// Returns [`DialogEvent::Open`] only when the previous render was closed.
    pub fn set_open(&mut self, open: bool) -> Option<DialogEvent> {
        self.open = open;
        let opened = open && !self.was_open;
        self.was_open = open;
        if opened {
            log::debug!("dialog opened");
        }
        opened.then_some(DialogEvent::Open)
    }

    /// Returns `true` while the dialog is rendered open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the visible underlay should be drawn.
    #[must_use]
    pub const fn shows_underlay(&self) -> bool {
        self.open && self.config.underlay
    }

    /// Returns `true` if the close button should be rendered.
    #[must_use]
    pub const fn shows_close_button(&self) -> bool {
        self.config.closeable
    }

    /// The close button was clicked.
    pub fn on_close_click(&self) -> Option<DialogEvent> {
        self.request_close()
    }

    /// The underlay was clicked. Modal dialogs ignore it.
    pub fn on_underlay_click(&self) -> Option<DialogEvent> {
        if self.config.modal {
            return None;
        }
        self.request_close()
    }

    /// A key was released anywhere in the document.
    ///
    /// `key` is the DOM `KeyboardEvent.key` value; Escape (or the legacy
    /// `"Esc"`) requests a close while the dialog is open.
    pub fn on_key_up(&self, key: &str) -> Option<DialogEvent> {
        match key {
            "Escape" | "Esc" if self.open => self.request_close(),
            _ => None,
        }
    }

    fn request_close(&self) -> Option<DialogEvent> {
        self.config.closeable.then_some(DialogEvent::RequestClose)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dialog, DialogConfig, DialogEvent, DialogRole};

    #[test]
    fn open_is_reported_on_the_closed_to_open_edge_only() {
        let mut dialog = Dialog::default();
        assert_eq!(dialog.set_open(false), None);
        assert_eq!(dialog.set_open(true), Some(DialogEvent::Open));
        assert_eq!(dialog.set_open(true), None);
        assert!(dialog.is_open());
        assert_eq!(dialog.set_open(false), None);
        assert_eq!(dialog.set_open(true), Some(DialogEvent::Open));
    }

    #[test]
    fn escape_requests_close_when_closeable() {
        let mut dialog = Dialog::new(DialogConfig::default());
        let _ = dialog.set_open(true);
        assert_eq!(dialog.on_key_up("Escape"), Some(DialogEvent::RequestClose));
        assert_eq!(dialog.on_key_up("Esc"), Some(DialogEvent::RequestClose));
        assert_eq!(dialog.on_key_up("Enter"), None);

        dialog.set_config(DialogConfig {
            closeable: false,
            ..DialogConfig::default()
        });
        assert_eq!(dialog.on_key_up("Escape"), None);
        assert_eq!(dialog.on_close_click(), None);
        assert!(!dialog.shows_close_button());
    }

    #[test]
    fn escape_is_ignored_while_closed() {
        let dialog = Dialog::new(DialogConfig::default());
        assert_eq!(dialog.on_key_up("Escape"), None);
    }

    #[test]
    fn underlay_click_closes_unless_modal() {
        let mut dialog = Dialog::new(DialogConfig::default());
        let _ = dialog.set_open(true);
        assert_eq!(dialog.on_underlay_click(), Some(DialogEvent::RequestClose));

        let mut modal = Dialog::new(DialogConfig {
            modal: true,
            ..DialogConfig::default()
        });
        let _ = modal.set_open(true);
        assert_eq!(modal.on_underlay_click(), None);
        assert_eq!(modal.on_close_click(), Some(DialogEvent::RequestClose));
    }

    #[test]
    fn underlay_is_drawn_only_while_open() {
        let mut dialog = Dialog::new(DialogConfig {
            underlay: true,
            role: DialogRole::AlertDialog,
            ..DialogConfig::default()
        });
        assert!(!dialog.shows_underlay());
        let _ = dialog.set_open(true);
        assert!(dialog.shows_underlay());
        assert_eq!(dialog.config().role.as_str(), "alertdialog");
    }
}
