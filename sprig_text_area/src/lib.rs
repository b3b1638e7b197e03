// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Text Area: headless state for a multi-line text input.
//!
//! The host feeds every change of the value to [`TextArea::validate`]. The
//! built-in constraints from [`TextAreaConfig`] run first; a host validator
//! runs only when they pass. A [`TextAreaEvent::Validate`] is returned only
//! when the outcome differs from the validity the host last fed back through
//! [`TextArea::set_validity`], so reporting it cannot loop.
//!
//! An untouched empty field is never flagged: until the first non-empty value
//! has been seen, an empty value validates as "unknown".
//!
//! ```rust
//! use sprig_text_area::{TextArea, TextAreaConfig, TextAreaEvent, Validity};
//!
//! let mut area = TextArea::new(TextAreaConfig {
//!     required: true,
//!     ..TextAreaConfig::default()
//! });
//!
//! // Pristine and empty: nothing to report.
//! assert_eq!(area.validate(""), None);
//!
//! let event = area.validate("hello");
//! assert_eq!(
//!     event,
//!     Some(TextAreaEvent::Validate { valid: Some(true), message: String::new() })
//! );
//! area.set_validity(Validity::valid());
//!
//! // Once dirty, clearing the field fails `required`.
//! let Some(TextAreaEvent::Validate { valid, .. }) = area.validate("") else {
//!     panic!("expected a validation change");
//! };
//! assert_eq!(valid, Some(false));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for configuration,
//!   validity and events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod validity;

use alloc::string::{String, ToString};

use bitflags::bitflags;

pub use validity::{ConstraintError, CustomValidator, Validity, check_constraints};

/// How the text wraps when submitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapText {
    /// Line breaks are inserted at the wrap points.
    Hard,
    /// Wrapping is visual only.
    Soft,
    /// No wrapping.
    Off,
}

impl WrapText {
    /// The `wrap` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::Off => "off",
        }
    }
}

/// Text area configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAreaConfig {
    /// Visible width in characters.
    pub columns: u32,
    /// Visible height in lines.
    pub rows: u32,
    /// Wrapping mode, or the platform default.
    pub wrap: Option<WrapText>,
    /// Minimum length of a non-empty value.
    pub min_length: Option<usize>,
    /// Maximum length.
    pub max_length: Option<usize>,
    /// An empty value is invalid once the field is dirty.
    pub required: bool,
    /// The field takes no input.
    pub disabled: bool,
    /// The field cannot be edited but can be focused.
    pub read_only: bool,
}

impl Default for TextAreaConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 2,
            wrap: None,
            min_length: None,
            max_length: None,
            required: false,
            disabled: false,
            read_only: false,
        }
    }
}

/// Something the host should report.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAreaEvent {
    /// The validation outcome changed.
    Validate {
        /// `None` while the field is pristine and empty.
        valid: Option<bool>,
        /// Failure message, empty when there is none.
        message: String,
    },
}

bitflags! {
    /// Styling state of a [`TextArea`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextAreaState: u8 {
        /// Input is disabled.
        const DISABLED = 1 << 0;
        /// The field holds focus.
        const FOCUSED = 1 << 1;
        /// Validity is known to be failing.
        const INVALID = 1 << 2;
        /// Validity is known to be passing.
        const VALID = 1 << 3;
        /// The field is read-only.
        const READ_ONLY = 1 << 4;
        /// A value is required.
        const REQUIRED = 1 << 5;
    }
}

/// Text area state.
#[derive(Clone, Debug, Default)]
pub struct TextArea {
    config: TextAreaConfig,
    validity: Validity,
    dirty: bool,
    focused: bool,
}

impl TextArea {
    /// Creates a pristine field.
    #[must_use]
    pub fn new(config: TextAreaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &TextAreaConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: TextAreaConfig) {
        self.config = config;
    }

    /// Feeds back the validity the host currently displays.
    pub fn set_validity(&mut self, validity: impl Into<Validity>) {
        self.validity = validity.into();
    }

    /// The validity last fed back by the host.
    #[must_use]
    pub const fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Returns `true` once a non-empty value has been validated.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Validates `value` against the built-in constraints only.
    pub fn validate(&mut self, value: &str) -> Option<TextAreaEvent> {
        self.run(value, None)
    }

    /// Validates `value`, consulting `custom` when the built-in constraints pass.
    pub fn validate_with<V: CustomValidator>(
        &mut self,
        value: &str,
        custom: &mut V,
    ) -> Option<TextAreaEvent> {
        self.run(value, Some(custom as &mut dyn CustomValidator))
    }

    fn run(
        &mut self,
        value: &str,
        custom: Option<&mut dyn CustomValidator>,
    ) -> Option<TextAreaEvent> {
        if value.is_empty() && !self.dirty {
            return self.report(None, String::new());
        }
        self.dirty = true;

        let (mut valid, mut message) = match check_constraints(&self.config, value) {
            Ok(()) => (Some(true), String::new()),
            Err(err) => (Some(false), err.to_string()),
        };
        if valid == Some(true)
            && let Some(result) = custom.and_then(|custom| custom.validate(value))
        {
            valid = result.valid;
            message = result.message.unwrap_or_default();
        }
        self.report(valid, message)
    }

    fn report(&self, valid: Option<bool>, message: String) -> Option<TextAreaEvent> {
        if valid == self.validity.valid && message == self.validity.message() {
            return None;
        }
        log::debug!("text area validity changed to {valid:?}");
        Some(TextAreaEvent::Validate { valid, message })
    }

    /// The field gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// The field lost focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` while the field holds focus.
    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.focused
    }

    /// Value of `aria-invalid`.
    #[must_use]
    pub fn aria_invalid(&self) -> bool {
        self.validity.valid == Some(false)
    }

    /// Text shown under the field: the failure message while invalid,
    /// `helper` otherwise.
    #[must_use]
    pub fn helper_text<'a>(&'a self, helper: Option<&'a str>) -> Option<&'a str> {
        match &self.validity.message {
            Some(message) if self.aria_invalid() && !message.is_empty() => Some(message.as_str()),
            _ => helper,
        }
    }

    /// Styling flags.
    #[must_use]
    pub fn state(&self) -> TextAreaState {
        let mut state = TextAreaState::empty();
        state.set(TextAreaState::DISABLED, self.config.disabled);
        state.set(TextAreaState::READ_ONLY, self.config.read_only);
        state.set(TextAreaState::REQUIRED, self.config.required);
        state.set(TextAreaState::FOCUSED, self.focused);
        state.set(TextAreaState::VALID, self.validity.valid == Some(true));
        state.set(TextAreaState::INVALID, self.validity.valid == Some(false));
        state
    }
}
