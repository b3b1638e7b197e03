// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping the highlighted item inside the menu's viewport.

use kurbo::Rect;

/// Number of items of height `item_extent` needed to cover `viewport_extent`,
/// counting a partially visible item as a whole one.
///
/// Returns `None` when the item extent is not a positive finite number.
#[must_use]
pub fn items_in_view(viewport_extent: f64, item_extent: f64) -> Option<usize> {
    if !(item_extent.is_finite() && item_extent > 0.0) || !viewport_extent.is_finite() {
        return None;
    }
    let ratio = (viewport_extent / item_extent).max(0.0);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "ratio is finite and non-negative; rounding up is applied right after"
    )]
    let whole = ratio as usize;
    Some(if (whole as f64) < ratio { whole + 1 } else { whole })
}

/// Computes which item the menu should scroll to after item `index` became active.
///
/// `item` and `root` are the measured bounds of the active item and of the
/// menu's scroll container, in the same coordinate space.
///
/// - Item below the bottom edge: scroll so it becomes the last visible item,
///   `max(index - items_in_view + 1, 0)`, and never past `index` (a
///   zero-height viewport scrolls to the item itself).
/// - Item above the top edge: scroll to the item itself.
/// - Otherwise the item is visible and `None` is returned.
///
/// ```
/// use kurbo::Rect;
/// use sprig_menu::scroll_target;
///
/// // A 60px viewport of 20px items; item 5 sits below it.
/// let root = Rect::new(0.0, 0.0, 100.0, 60.0);
/// let item = Rect::new(0.0, 100.0, 100.0, 120.0);
/// assert_eq!(scroll_target(5, item, root), Some(3));
/// ```
#[must_use]
pub fn scroll_target(index: usize, item: Rect, root: Rect) -> Option<usize> {
    if item.y1 > root.y1 {
        let in_view = items_in_view(root.height(), item.height())?;
        // An empty viewport fits no item; never scroll past the item itself.
        Some((index + 1).saturating_sub(in_view).min(index))
    } else if item.y0 < root.y0 {
        Some(index)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{items_in_view, scroll_target};

    #[test]
    fn items_in_view_rounds_up() {
        assert_eq!(items_in_view(60.0, 20.0), Some(3));
        assert_eq!(items_in_view(70.0, 20.0), Some(4));
        assert_eq!(items_in_view(0.0, 20.0), Some(0));
        assert_eq!(items_in_view(60.0, 0.0), None);
        assert_eq!(items_in_view(60.0, f64::NAN), None);
    }

    #[test]
    fn visible_item_needs_no_scroll() {
        let root = Rect::new(0.0, 0.0, 100.0, 60.0);
        let item = Rect::new(0.0, 20.0, 100.0, 40.0);
        assert_eq!(scroll_target(1, item, root), None);
    }

    #[test]
    fn item_above_scrolls_to_itself() {
        let root = Rect::new(0.0, 100.0, 100.0, 160.0);
        let item = Rect::new(0.0, 80.0, 100.0, 100.0);
        assert_eq!(scroll_target(4, item, root), Some(4));
    }

    #[test]
    fn item_below_near_start_clamps_to_zero() {
        let root = Rect::new(0.0, 0.0, 100.0, 60.0);
        let item = Rect::new(0.0, 50.0, 100.0, 70.0);
        assert_eq!(scroll_target(1, item, root), Some(0));
    }

    #[test]
    fn zero_height_viewport_scrolls_to_the_item() {
        let root = Rect::new(0.0, 0.0, 100.0, 0.0);
        let item = Rect::new(0.0, 40.0, 100.0, 60.0);
        assert_eq!(scroll_target(9, item, root), Some(9));
        assert_eq!(scroll_target(0, item, root), Some(0));
    }
}
