// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A settings dialog holding a folder tree and a notes field.
//!
//! Run:
//! - `cargo run -p sprig_demos --example tree_dialog_form`

use sprig_dialog::{Dialog, DialogConfig, DialogEvent};
use sprig_text_area::{TextArea, TextAreaConfig, TextAreaEvent, Validity};
use sprig_tree::{Tree, TreeConfig, TreeEvent, TreeNode};

fn draw(tree: &Tree) {
    for node in tree.visible() {
        let expander = match (node.is_leaf, node.expanded) {
            (true, _) => ' ',
            (false, true) => 'v',
            (false, false) => '>',
        };
        let mark = if node.selected { '*' } else { ' ' };
        println!("  {}{expander} {}{mark}", "  ".repeat(node.level), node.content);
    }
}

fn main() {
    env_logger::init();

    let mut dialog = Dialog::new(DialogConfig {
        underlay: true,
        ..DialogConfig::default()
    });
    if let Some(DialogEvent::Open) = dialog.set_open(true) {
        println!("dialog opened, underlay {}", dialog.shows_underlay());
    }

    let mut tree = Tree::new(
        vec![
            TreeNode::new("src", "src")
                .expanded(true)
                .with_children(vec![TreeNode::new("lib", "lib.rs"), TreeNode::new("main", "main.rs")]),
            TreeNode::new("target", "target").disabled(),
        ],
        TreeConfig {
            selectable: true,
            ..TreeConfig::default()
        },
    );
    draw(&tree);

    for id in ["lib", "target", "src"] {
        for event in tree.on_content_click(id) {
            match event {
                TreeEvent::Select(id) => println!("selected {id}"),
                TreeEvent::Expand { id, expanded } => log::info!("{id} expanded: {expanded}"),
                TreeEvent::Check { .. } => {}
            }
        }
    }
    draw(&tree);

    let mut notes = TextArea::new(TextAreaConfig {
        required: true,
        max_length: Some(12),
        ..TextAreaConfig::default()
    });
    let mut no_todo = |value: &str| {
        value
            .contains("TODO")
            .then(|| Validity::invalid("notes must not contain TODO"))
    };
    for input in ["", "keep src", "TODO: later", "a much longer note", ""] {
        if let Some(TextAreaEvent::Validate { valid, message }) =
            notes.validate_with(input, &mut no_todo)
        {
            println!("{input:?}: valid {valid:?} {message}");
            notes.set_validity(Validity {
                valid,
                message: Some(message),
            });
        }
    }

    if dialog.on_key_up("Escape") == Some(DialogEvent::RequestClose) {
        dialog.set_open(false);
        println!("dialog closed");
    }
}
