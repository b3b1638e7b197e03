// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-height viewport sizing for menus that show a limited number of items.
//!
//! The item height is measured once, by rendering a representative item
//! off-screen, and the menu's maximum height is fixed at
//! `number_in_view × item_height`. Re-measuring on every render would force a
//! layout per render.

use thiserror::Error;

use crate::ItemState;

/// Measures the rendered height of a menu item outside the live layout.
///
/// Closures of the form `FnMut(&ItemState<'_>) -> f64` implement this trait.
pub trait ItemMeasure {
    /// Renders `sample` off-screen and returns its height.
    fn item_height(&mut self, sample: &ItemState<'_>) -> f64;
}

impl<F> ItemMeasure for F
where
    F: FnMut(&ItemState<'_>) -> f64,
{
    fn item_height(&mut self, sample: &ItemState<'_>) -> f64 {
        self(sample)
    }
}

/// An off-screen measurement that cannot size a viewport.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum MeasureError {
    /// The item rendered with no height (for example, it is not styled yet).
    #[error("measured item height {0} is not positive")]
    NonPositive(f64),
    /// The measurement produced NaN or an infinity.
    #[error("measured item height is not finite")]
    NonFinite,
}

/// Validates a measured item height.
pub fn checked_height(height: f64) -> Result<f64, MeasureError> {
    if !height.is_finite() {
        Err(MeasureError::NonFinite)
    } else if height <= 0.0 {
        Err(MeasureError::NonPositive(height))
    } else {
        Ok(height)
    }
}

/// The sample item rendered for measurement.
const SAMPLE: ItemState<'static> = ItemState {
    index: 0,
    value: "offscreen",
    label: None,
    disabled: false,
    active: false,
    selected: false,
    scroll_into_view: false,
};

/// Cached viewport sizing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    number_in_view: Option<usize>,
    item_height: Option<f64>,
    max_height: Option<f64>,
}

impl Viewport {
    /// Applies the configured number of visible items.
    ///
    /// `None` or `Some(0)` leaves the menu unbounded. Otherwise the item height
    /// is measured through `measure` the first time it is needed and reused
    /// afterwards; changing `number_in_view` only recomputes the maximum height.
    pub fn update<M>(
        &mut self,
        number_in_view: Option<usize>,
        measure: &mut M,
    ) -> Result<(), MeasureError>
    where
        M: ItemMeasure + ?Sized,
    {
        let number_in_view = number_in_view.filter(|n| *n > 0);
        if number_in_view == self.number_in_view {
            return Ok(());
        }
        let Some(count) = number_in_view else {
            self.number_in_view = None;
            self.max_height = None;
            return Ok(());
        };

        let item_height = match self.item_height {
            Some(height) => height,
            None => {
                let height = checked_height(measure.item_height(&SAMPLE))?;
                self.item_height = Some(height);
                height
            }
        };
        #[allow(
            clippy::cast_precision_loss,
            reason = "visible item counts are small"
        )]
        let max_height = count as f64 * item_height;
        self.number_in_view = Some(count);
        self.max_height = Some(max_height);
        Ok(())
    }

    /// The configured number of visible items.
    #[must_use]
    pub const fn number_in_view(&self) -> Option<usize> {
        self.number_in_view
    }

    /// The measured item height, once known.
    #[must_use]
    pub const fn item_height(&self) -> Option<f64> {
        self.item_height
    }

    /// The maximum height of the menu's scroll container, when bounded.
    #[must_use]
    pub const fn max_height(&self) -> Option<f64> {
        self.max_height
    }
}
