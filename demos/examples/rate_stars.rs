// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Star rating with half stars and a hover preview.
//!
//! Run:
//! - `cargo run -p sprig_demos --example rate_stars`

use sprig_rate::{Rate, RateConfig};

fn draw(rate: &Rate) -> String {
    rate.options()
        .map(|v| if rate.is_visibly_checked(v) { '#' } else { '.' })
        .collect()
}

fn main() {
    env_logger::init();

    let mut rate = Rate::new(RateConfig {
        max: 5,
        allow_half: true,
    });
    rate.set_initial_value(2.0);
    println!("initial  {}  value {}", draw(&rate), rate.value());

    rate.on_hover(4.5);
    println!("hover    {}  value {}", draw(&rate), rate.value());
    rate.on_hover_end();

    for input in ["3.5", "7", "1.25"] {
        match rate.on_select_str(input) {
            Ok(value) => println!("select   {}  value {value}", draw(&rate)),
            Err(err) => log::warn!("ignored {input:?}: {err}"),
        }
    }

    rate.on_focus(3.5);
    let focused: Vec<u32> = (1..=rate.config().max)
        .filter(|star| rate.is_star_focused(*star))
        .collect();
    println!("focused stars {focused:?}");
}
