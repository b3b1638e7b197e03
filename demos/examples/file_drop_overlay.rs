// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File drag-and-drop with an overlay that only mounts during a drag.
//!
//! This example walks a scripted drag session through:
//! - `FileDrop::get` wiring listeners on first read,
//! - overlay probing on `dragover` until the overlay mounts,
//! - the one-shot read of a drop,
//! - `DropZone` for the plain upload input beside it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sprig_demos --example file_drop_overlay`

use std::collections::HashMap;

use sprig_file_drop::upload::DropZone;
use sprig_file_drop::{DragEvent, DragEventKind, DropHost, FileDrop};

/// A toy document: keyed nodes plus the listeners attached to them.
#[derive(Debug, Default)]
struct Document {
    nodes: HashMap<&'static str, u32>,
    listeners: Vec<(u32, DragEventKind)>,
}

impl Document {
    fn mount(&mut self, key: &'static str, node: u32) {
        self.nodes.insert(key, node);
    }

    fn unmount(&mut self, key: &'static str) {
        self.nodes.remove(key);
    }
}

impl DropHost for Document {
    type Node = u32;

    fn node(&self, key: &str) -> Option<u32> {
        self.nodes.get(key).copied()
    }

    fn add_listener(&mut self, node: u32, kind: DragEventKind) {
        println!("  + {kind:?} on node {node}");
        self.listeners.push((node, kind));
    }

    fn remove_listener(&mut self, node: u32, kind: DragEventKind) {
        println!("  - {kind:?} on node {node}");
        self.listeners.retain(|l| *l != (node, kind));
    }
}

fn render(dnd: &mut FileDrop<u32, String>, doc: &mut Document, label: &str) {
    let Some(state) = dnd.get(doc, "dropzone", Some("overlay")) else {
        println!("[{label}] dropzone not mounted");
        return;
    };
    println!(
        "[{label}] dragging={} dropped={} files={:?}",
        state.is_dragging, state.is_dropped, state.files
    );
}

fn main() {
    env_logger::init();

    let mut doc = Document::default();
    doc.mount("dropzone", 1);
    let mut dnd: FileDrop<u32, String> = FileDrop::new();

    println!("first render");
    render(&mut dnd, &mut doc, "idle");
    println!("binding: {:?}", dnd.binding("dropzone"));

    // The drag starts; the widget re-renders and mounts its overlay.
    dnd.handle_event(&mut doc, DragEvent::new(DragEventKind::DragEnter, 1));
    render(&mut dnd, &mut doc, "enter");
    doc.mount("overlay", 2);

    let outcome = dnd.handle_event(&mut doc, DragEvent::new(DragEventKind::DragOver, 1));
    println!(
        "dragover prevents default: {}, binding: {:?}",
        outcome.prevents_default(),
        dnd.binding("dropzone")
    );

    // Leaving the overlay ends the drag; the overlay unmounts.
    dnd.handle_event(&mut doc, DragEvent::new(DragEventKind::DragLeave, 2));
    doc.unmount("overlay");
    render(&mut dnd, &mut doc, "left");

    // A second drag, this time ending in a drop.
    dnd.handle_event(&mut doc, DragEvent::new(DragEventKind::DragEnter, 1));
    doc.mount("overlay", 3);
    dnd.handle_event(&mut doc, DragEvent::new(DragEventKind::DragOver, 1));
    dnd.handle_event(
        &mut doc,
        DragEvent::drop_files(1, vec!["notes.txt".to_string(), "photo.png".to_string()]),
    );
    doc.unmount("overlay");
    render(&mut dnd, &mut doc, "drop");
    render(&mut dnd, &mut doc, "drop, second read");
    render(&mut dnd, &mut doc, "after");

    println!("teardown");
    dnd.destroy(&mut doc);
    println!("listeners left: {}", doc.listeners.len());

    println!("upload input");
    let mut zone: DropZone<String> = DropZone::new();
    zone.on_drag_enter();
    println!("overlay shown: {}", zone.show_overlay());
    if let Some(files) = zone.on_drop(vec!["report.pdf".to_string()]) {
        println!("accepted {files:?}");
    }
    zone.request_browse();
    println!("open picker: {}", zone.take_browse_request());
}
