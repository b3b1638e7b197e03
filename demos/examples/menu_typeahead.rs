// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation, typeahead, and auto-scroll for a bounded menu.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p sprig_demos --example menu_typeahead`

use kurbo::Rect;
use sprig_menu::{ItemState, Key, Menu, MenuConfig, MenuOption};

const ITEM_HEIGHT: f64 = 20.0;

fn main() {
    env_logger::init();

    let fruits = [
        "Apple",
        "Apricot",
        "Banana",
        "Blueberry",
        "Cherry",
        "Grape",
        "Lemon",
        "Mango",
    ];
    let mut options: Vec<MenuOption> = fruits
        .iter()
        .map(|name| MenuOption::new(name.to_lowercase()).with_label(*name))
        .collect();
    options[3] = options[3].clone().disabled();

    let mut menu = Menu::with_config(
        options,
        MenuConfig {
            number_in_view: Some(4),
            ..MenuConfig::default()
        },
    );
    menu.prepare(&mut |_: &ItemState<'_>| ITEM_HEIGHT);
    println!("max height: {:?}", menu.max_height());

    // Keys as a browser reports them in `KeyboardEvent.key`.
    let script = [
        ("ArrowDown", 0),
        ("ArrowDown", 50),
        ("b", 100),
        ("l", 200),
        ("Enter", 300),
        ("m", 2_000),
        ("ArrowUp", 2_100),
        (" ", 2_200),
        ("Escape", 2_300),
    ];

    let root = Rect::new(0.0, 0.0, 120.0, 4.0 * ITEM_HEIGHT);
    let mut scroll_top = 0.0;
    for (dom_key, now) in script {
        let Some(key) = Key::from_dom_key(dom_key) else {
            continue;
        };
        let event = menu.on_key(key, now);
        let active = menu.active_index();

        // The active item reports its bounds relative to the scrolled list.
        #[allow(clippy::cast_precision_loss, reason = "demo indices are small")]
        let top = active as f64 * ITEM_HEIGHT - scroll_top;
        let item = Rect::new(0.0, top, 120.0, top + ITEM_HEIGHT);
        if let Some(first) = menu.on_item_active(active, item, root) {
            #[allow(clippy::cast_precision_loss, reason = "demo indices are small")]
            let offset = first as f64 * ITEM_HEIGHT;
            scroll_top = offset;
        }

        println!(
            "{dom_key:>9} @ {now:>5}ms -> active {active} ({}), buffer {:?}, event {event:?}",
            menu.options()[active].text(),
            menu.typeahead().buffer(),
        );
    }
    println!("selected: {:?}", menu.selected_value());

    for item in menu.items() {
        let marker = match (item.active, item.selected) {
            (true, true) => "*>",
            (true, false) => " >",
            (false, true) => "* ",
            (false, false) => "  ",
        };
        let disabled = if item.disabled { " (disabled)" } else { "" };
        println!("{marker} {}{disabled}", item.label.unwrap_or(item.value));
    }
}
