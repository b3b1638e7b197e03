// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::scroll::scroll_target;
use crate::typeahead::{DEFAULT_TIMEOUT_MS, Typeahead, find_prefix};
use crate::viewport::{ItemMeasure, Viewport};
use crate::{Key, MenuOption};

/// Menu configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuConfig {
    /// Idle time after which typeahead input is forgotten, in milliseconds.
    pub typeahead_timeout_ms: u64,
    /// Number of items the viewport shows; `None` shows every item.
    pub number_in_view: Option<usize>,
    /// Whether the menu root takes keyboard focus.
    ///
    /// A menu whose highlight is driven from elsewhere (for example, by a
    /// combobox input) is usually not focusable.
    pub focusable: bool,
    /// Report active index changes as [`MenuEvent::ActiveIndex`] without
    /// storing them. The host stores the index and feeds it back through
    /// [`Menu::set_active_index_override`].
    pub delegate_active_index: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            typeahead_timeout_ms: DEFAULT_TIMEOUT_MS,
            number_in_view: None,
            focusable: true,
            delegate_active_index: false,
        }
    }
}

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuEvent {
    /// An option was chosen; carries its value.
    Value(String),
    /// The highlighted index changed.
    ActiveIndex(usize),
    /// The user asked for the menu to close.
    RequestClose,
}

/// Render-time view of one item, as handed to item renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemState<'a> {
    /// Position in the option list.
    pub index: usize,
    /// Option value.
    pub value: &'a str,
    /// Option label, if any.
    pub label: Option<&'a str>,
    /// The option cannot be chosen.
    pub disabled: bool,
    /// The option is highlighted.
    pub active: bool,
    /// The option holds the selected value.
    pub selected: bool,
    /// The host should scroll this item into view.
    pub scroll_into_view: bool,
}

/// Keyboard-navigable option list.
///
/// The menu tracks three independent things: the selected value, the active
/// (highlighted) index, and the item the viewport should scroll to. Moving the
/// highlight never selects; only [`Key::Enter`], [`Key::Space`] or a pointer
/// selection does.
#[derive(Clone, Debug)]
pub struct Menu {
    config: MenuConfig,
    options: Vec<MenuOption>,
    selected: Option<String>,
    initial: Option<String>,
    active_index: usize,
    active_override: Option<usize>,
    item_to_scroll: Option<usize>,
    typeahead: Typeahead,
    viewport: Viewport,
}

impl Menu {
    /// Creates a menu with the default configuration.
    #[must_use]
    pub fn new(options: Vec<MenuOption>) -> Self {
        Self::with_config(options, MenuConfig::default())
    }

    /// Creates a menu with a custom configuration.
    #[must_use]
    pub fn with_config(options: Vec<MenuOption>, config: MenuConfig) -> Self {
        Self {
            config,
            options,
            selected: None,
            initial: None,
            active_index: 0,
            active_override: None,
            item_to_scroll: None,
            typeahead: Typeahead::new(config.typeahead_timeout_ms),
            viewport: Viewport::default(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The option list.
    #[must_use]
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Replaces the option list, keeping the active index in range.
    pub fn set_options(&mut self, options: Vec<MenuOption>) {
        self.options = options;
        let last = self.options.len().saturating_sub(1);
        self.active_index = self.active_index.min(last);
        if self.item_to_scroll.is_some_and(|i| i > last) {
            self.item_to_scroll = None;
        }
    }

    /// Applies an initial value.
    ///
    /// A value different from the previously applied one selects it and
    /// highlights its option. Re-applying the same value on every render is a
    /// no-op, so the user's later choices stick.
    pub fn set_initial_value(&mut self, value: &str) {
        if self.initial.as_deref() == Some(value) {
            return;
        }
        self.initial = Some(value.to_string());
        self.selected = Some(value.to_string());
        if let Some(index) = self.options.iter().position(|o| o.value == value) {
            self.active_index = index;
        }
    }

    /// The selected value.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The effective active index: the override when one is set, the owned
    /// index otherwise. Always in range when the menu has options.
    #[must_use]
    pub fn active_index(&self) -> usize {
        let index = self.active_override.unwrap_or(self.active_index);
        index.min(self.options.len().saturating_sub(1))
    }

    /// Sets or clears an externally controlled active index.
    pub fn set_active_index_override(&mut self, index: Option<usize>) {
        self.active_override = index;
    }

    /// The item the viewport should scroll into view, if any.
    #[must_use]
    pub const fn item_to_scroll(&self) -> Option<usize> {
        self.item_to_scroll
    }

    /// The typeahead buffer.
    #[must_use]
    pub const fn typeahead(&self) -> &Typeahead {
        &self.typeahead
    }

    /// Handles a key press made at `now_ms`.
    ///
    /// Use [`Key::prevents_default`] to decide whether to prevent the native
    /// default action.
    pub fn on_key(&mut self, key: Key, now_ms: u64) -> Option<MenuEvent> {
        let len = self.options.len();
        match key {
            Key::Enter | Key::Space => self.select(self.active_index()),
            Key::ArrowDown if len > 0 => self.set_active((self.active_index() + 1) % len),
            Key::ArrowUp if len > 0 => self.set_active((self.active_index() + len - 1) % len),
            Key::ArrowDown | Key::ArrowUp => None,
            Key::Escape => Some(MenuEvent::RequestClose),
            Key::Char(c) => {
                let query = self.typeahead.push(c, now_ms);
                let index = find_prefix(&self.options, query)?;
                self.set_active(index)
            }
        }
    }

    /// Handles a pointer selection of item `index`.
    pub fn on_item_select(&mut self, index: usize) -> Option<MenuEvent> {
        self.select(index)
    }

    /// Handles an item asking to become active, typically on pointer hover.
    ///
    /// The request is honored only while the menu root has focus, or always
    /// when the menu is not focusable.
    pub fn on_item_request_active(&mut self, index: usize, root_focused: bool) -> Option<MenuEvent> {
        if index >= self.options.len() || !(root_focused || !self.config.focusable) {
            return None;
        }
        self.set_active(index)
    }

    /// Handles the active item reporting its measured bounds.
    ///
    /// `item` and `root` are the bounds of the active item and of the menu's
    /// scroll container. Returns the new scroll target when one was set.
    pub fn on_item_active(&mut self, index: usize, item: Rect, root: Rect) -> Option<usize> {
        let target = scroll_target(index, item, root)?;
        log::trace!("menu item {index} active, scrolling to {target}");
        self.item_to_scroll = Some(target);
        Some(target)
    }

    /// Prepares the viewport for rendering, measuring an item off-screen the
    /// first time a bounded viewport is configured.
    ///
    /// A failed measurement leaves the menu unbounded.
    pub fn prepare<M>(&mut self, measure: &mut M)
    where
        M: ItemMeasure + ?Sized,
    {
        if let Err(err) = self.viewport.update(self.config.number_in_view, measure) {
            log::warn!("menu viewport left unbounded: {err}");
        }
    }

    /// Changes the number of visible items; applied on the next [`Menu::prepare`].
    pub fn set_number_in_view(&mut self, number_in_view: Option<usize>) {
        self.config.number_in_view = number_in_view;
    }

    /// Maximum height of the scroll container, when bounded.
    #[must_use]
    pub const fn max_height(&self) -> Option<f64> {
        self.viewport.max_height()
    }

    /// The root's tab index: `0` when focusable, `-1` otherwise.
    #[must_use]
    pub const fn tab_index(&self) -> i32 {
        if self.config.focusable { 0 } else { -1 }
    }

    /// Render-time state of every item, in order.
    pub fn items(&self) -> impl Iterator<Item = ItemState<'_>> + '_ {
        let active = self.active_index();
        self.options
            .iter()
            .enumerate()
            .map(move |(index, option)| ItemState {
                index,
                value: &option.value,
                label: option.label.as_deref(),
                disabled: option.disabled,
                active: index == active,
                selected: self.selected.as_deref() == Some(option.value.as_str()),
                scroll_into_view: self.item_to_scroll == Some(index),
            })
    }

    fn select(&mut self, index: usize) -> Option<MenuEvent> {
        let option = self.options.get(index)?;
        if option.disabled {
            return None;
        }
        let value = option.value.clone();
        self.selected = Some(value.clone());
        Some(MenuEvent::Value(value))
    }

    fn set_active(&mut self, index: usize) -> Option<MenuEvent> {
        if !self.config.delegate_active_index {
            self.active_index = index;
        }
        Some(MenuEvent::ActiveIndex(index))
    }
}
