// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig Menu: a headless, keyboard-navigable option list.
//!
//! This crate models the state behind a menu or listbox widget:
//!
//! - **Selection** and **highlight** are separate. Arrow keys move the active
//!   (highlighted) index, wrapping at both ends; [`Key::Enter`] and
//!   [`Key::Space`] choose the highlighted option unless it is disabled.
//! - **Typeahead** ([`Typeahead`]): printable keys accumulate into a buffer
//!   that is forgotten after 800 ms without input; the first enabled option
//!   whose label starts with the buffer (ignoring case) becomes active.
//! - **Auto-scroll** ([`scroll_target`]): when the active item reports its
//!   bounds, the menu decides which item to scroll into view so the active one
//!   stays visible.
//! - **Viewport sizing** ([`Viewport`]): a menu limited to `n` visible items
//!   measures one item off-screen, once, and fixes its height at `n` items.
//!
//! Input is decoded once at the event boundary into the closed [`Key`]
//! enumeration. Changes the host must act on come back as [`MenuEvent`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use sprig_menu::{Key, Menu, MenuEvent, MenuOption};
//!
//! let mut menu = Menu::new(vec![
//!     MenuOption::new("apple").with_label("Apple"),
//!     MenuOption::new("banana").with_label("Banana"),
//!     MenuOption::new("avocado").with_label("Avocado"),
//! ]);
//!
//! // Typing "av" quickly highlights Avocado.
//! menu.on_key(Key::Char('a'), 0);
//! menu.on_key(Key::Char('v'), 120);
//! assert_eq!(menu.active_index(), 2);
//!
//! // Enter chooses it.
//! assert_eq!(
//!     menu.on_key(Key::Enter, 500),
//!     Some(MenuEvent::Value("avocado".into()))
//! );
//! assert_eq!(menu.selected_value(), Some("avocado"));
//! ```
//!
//! ## Controlled highlight
//!
//! A parent widget (for example, a combobox whose text input keeps focus)
//! can own the highlight: set [`MenuConfig::delegate_active_index`], store the
//! indices reported through [`MenuEvent::ActiveIndex`], and pass the stored
//! index back with [`Menu::set_active_index_override`].
//!
//! Geometry is expressed with [`kurbo::Rect`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`MenuOption`], [`MenuConfig`],
//!   [`MenuEvent`] and [`Key`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod key;
mod menu;
mod option;
mod scroll;
pub mod typeahead;
mod viewport;

pub use key::Key;
pub use menu::{ItemState, Menu, MenuConfig, MenuEvent};
pub use option::MenuOption;
pub use scroll::{items_in_view, scroll_target};
pub use typeahead::Typeahead;
pub use viewport::{ItemMeasure, MeasureError, Viewport, checked_height};
