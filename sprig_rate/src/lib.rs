// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Rate: headless state for a star rating input.
//!
//! A rating is a row of `max` stars backed by radio values `1..=max` (and the
//! half steps `0.5, 1.5, …` when half stars are enabled). The widget shows a
//! preview while the pointer hovers a star, and falls back to the current
//! value otherwise.
//!
//! ```rust
//! use sprig_rate::{Rate, RateConfig};
//!
//! let mut rate = Rate::new(RateConfig { max: 5, allow_half: true });
//! assert_eq!(rate.options().count(), 10);
//!
//! rate.set_initial_value(3.0);
//! rate.on_hover(4.5);
//! assert!(rate.is_visibly_checked(4.5));
//! rate.on_hover_end();
//! assert!(!rate.is_visibly_checked(4.5));
//!
//! let chosen = rate.on_select_str("1.5").unwrap();
//! assert_eq!(chosen, 1.5);
//! assert_eq!(rate.value(), 1.5);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use thiserror::Error;

/// Rating configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateConfig {
    /// Number of stars.
    pub max: u32,
    /// Allow half-star values.
    pub allow_half: bool,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            max: 5,
            allow_half: false,
        }
    }
}

/// A radio value that does not name a star of this rating.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum RateError {
    /// The value is not a number.
    #[error("rating value is not a number")]
    NotANumber,
    /// The value is outside `(0, max]`.
    #[error("rating value {value} is outside 0..={max}")]
    OutOfRange {
        /// The rejected value.
        value: f64,
        /// The configured maximum.
        max: u32,
    },
    /// The value falls between steps (for example `2.5` without half stars).
    #[error("rating value {0} is not a valid step")]
    NotAStep(f64),
}

/// Star rating state.
#[derive(Clone, Debug, Default)]
pub struct Rate {
    config: RateConfig,
    controlled: Option<f64>,
    value: f64,
    initial: Option<f64>,
    hovered: f64,
    focused_value: Option<f64>,
    focused: bool,
}

impl Rate {
    /// Creates an unrated input.
    #[must_use]
    pub fn new(config: RateConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Applies an initial value; a value different from the previously
    /// applied one replaces the current rating.
    pub fn set_initial_value(&mut self, value: f64) {
        if self.initial != Some(value) {
            self.initial = Some(value);
            self.value = value;
        }
    }

    /// Sets or clears an externally controlled value.
    pub fn set_controlled_value(&mut self, value: Option<f64>) {
        self.controlled = value;
    }

    /// The current rating: the controlled value when set, the owned one otherwise.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.controlled.unwrap_or(self.value)
    }

    /// The star value under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<f64> {
        (self.hovered > 0.0).then_some(self.hovered)
    }

    /// Radio values in display order.
    pub fn options(&self) -> impl Iterator<Item = f64> + use<> {
        let allow_half = self.config.allow_half;
        (1..=self.config.max).flat_map(move |star| {
            let star = f64::from(star);
            let half = allow_half.then_some(star - 0.5);
            half.into_iter().chain(core::iter::once(star))
        })
    }

    /// Validates a radio value.
    pub fn check(&self, value: f64) -> Result<f64, RateError> {
        if value.is_nan() {
            return Err(RateError::NotANumber);
        }
        if value <= 0.0 || value > f64::from(self.config.max) {
            return Err(RateError::OutOfRange {
                value,
                max: self.config.max,
            });
        }
        let steps = if self.config.allow_half {
            value * 2.0
        } else {
            value
        };
        if steps % 1.0 == 0.0 {
            Ok(value)
        } else {
            Err(RateError::NotAStep(value))
        }
    }

    /// Parses and validates a radio value string.
    pub fn parse_value(&self, value: &str) -> Result<f64, RateError> {
        let parsed: f64 = value.trim().parse().map_err(|_| RateError::NotANumber)?;
        self.check(parsed)
    }

    /// The pointer entered the star with `value`.
    pub fn on_hover(&mut self, value: f64) {
        self.hovered = value;
    }

    /// The pointer left a star.
    pub fn on_hover_end(&mut self) {
        self.hovered = 0.0;
    }

    /// A star was chosen. Stores and returns the value, ending any hover preview.
    pub fn on_select(&mut self, value: f64) -> Result<f64, RateError> {
        let value = self.check(value)?;
        self.value = value;
        self.hovered = 0.0;
        log::trace!("rating set to {value}");
        Ok(value)
    }

    /// Like [`Rate::on_select`], for the string value of the chosen radio.
    pub fn on_select_str(&mut self, value: &str) -> Result<f64, RateError> {
        let value = self.parse_value(value)?;
        self.on_select(value)
    }

    /// The radio for `value` gained focus.
    pub fn on_focus(&mut self, value: f64) {
        self.focused_value = Some(value);
        self.focused = true;
    }

    /// A radio lost focus.
    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` while any star holds focus.
    #[must_use]
    pub const fn contains_focus(&self) -> bool {
        self.focused
    }

    /// Returns `true` if the radio for `value` renders as filled: up to the
    /// hovered star while hovering, up to the current value otherwise.
    #[must_use]
    pub fn is_visibly_checked(&self, value: f64) -> bool {
        match self.hovered() {
            Some(hovered) => value <= hovered,
            None => {
                let current = self.value();
                current > 0.0 && value <= current
            }
        }
    }

    /// Returns `true` if `star` (a whole value) is the last focused star,
    /// including through its half value.
    #[must_use]
    pub fn is_star_focused(&self, star: u32) -> bool {
        let star = f64::from(star);
        self.focused_value
            .is_some_and(|v| v == star || (self.config.allow_half && v == star - 0.5))
    }
}
