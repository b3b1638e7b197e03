// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for menu navigation.

use proptest::prelude::*;
use sprig_menu::{Key, Menu, MenuEvent, MenuOption};

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Enter),
        Just(Key::Space),
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::Escape),
        prop::char::range('a', 'e').prop_map(Key::Char),
    ]
}

fn options_strategy() -> impl Strategy<Value = Vec<MenuOption>> {
    prop::collection::vec(("[a-e]{1,4}", any::<bool>()), 0..8).prop_map(|opts| {
        opts.into_iter()
            .map(|(value, disabled)| MenuOption {
                value,
                label: None,
                disabled,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn active_index_stays_in_range(
        options in options_strategy(),
        keys in prop::collection::vec((key_strategy(), 0_u64..2_000), 0..40),
    ) {
        let len = options.len();
        let mut menu = Menu::new(options);
        let mut now = 0;
        for (key, gap) in keys {
            now += gap;
            let event = menu.on_key(key, now);
            if len > 0 {
                prop_assert!(menu.active_index() < len);
            } else {
                prop_assert_eq!(menu.active_index(), 0);
            }
            if let Some(MenuEvent::Value(value)) = event {
                prop_assert!(
                    menu.options().iter().any(|o| o.value == value && !o.disabled),
                    "only enabled options can be selected"
                );
            }
        }
    }

    #[test]
    fn full_cycle_of_arrows_returns_home(len in 1_usize..12, start in 0_usize..12) {
        let options = (0..len).map(|i| MenuOption::new(format!("item-{i}"))).collect();
        let mut menu = Menu::new(options);
        let start = start % len;
        for _ in 0..start {
            menu.on_key(Key::ArrowDown, 0);
        }
        prop_assert_eq!(menu.active_index(), start);
        for _ in 0..len {
            menu.on_key(Key::ArrowDown, 0);
        }
        prop_assert_eq!(menu.active_index(), start);
        for _ in 0..len {
            menu.on_key(Key::ArrowUp, 0);
        }
        prop_assert_eq!(menu.active_index(), start);
    }
}
