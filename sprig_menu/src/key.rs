// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical keys understood by the menu.

/// A key press, decoded once at the event boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// Activate the highlighted option.
    Enter,
    /// Activate the highlighted option.
    Space,
    /// Move the highlight up, wrapping at the top.
    ArrowUp,
    /// Move the highlight down, wrapping at the bottom.
    ArrowDown,
    /// Ask the host to close the menu.
    Escape,
    /// A printable character, fed to typeahead.
    Char(char),
}

impl Key {
    /// Decodes a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy spellings (`"Up"`, `"Esc"`, `"Spacebar"`) are accepted. Any other
    /// named key (`"Shift"`, `"Tab"`, …) and control characters decode to `None`.
    ///
    /// ```
    /// use sprig_menu::Key;
    ///
    /// assert_eq!(Key::from_dom_key("ArrowDown"), Some(Key::ArrowDown));
    /// assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
    /// assert_eq!(Key::from_dom_key("b"), Some(Key::Char('b')));
    /// assert_eq!(Key::from_dom_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Returns `true` if the host should prevent the platform's default action
    /// (page scrolling, form submission) for this key.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Char(_))
    }
}
