// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu options.

use alloc::string::String;

/// One entry of a menu.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuOption {
    /// Value reported when the option is chosen.
    pub value: String,
    /// Text shown for the option; the value is shown when absent.
    pub label: Option<String>,
    /// Disabled options can be highlighted but never chosen.
    pub disabled: bool,
}

impl MenuOption {
    /// An enabled option showing its value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            disabled: false,
        }
    }

    /// Sets the displayed label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Marks the option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The text used for display and typeahead: the label, or the value when
    /// the label is absent or empty.
    #[must_use]
    pub fn text(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.value,
        }
    }
}
