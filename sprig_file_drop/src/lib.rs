// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprig File Drop: headless file drag-and-drop state.
//!
//! This crate tracks native file drag-and-drop on elements a widget renders,
//! without touching the DOM itself. It is made of:
//!
//! - [`FileDrop`]: a per-widget tracker. [`FileDrop::get`] returns a
//!   [`DropState`] snapshot for a target key and wires the needed listeners
//!   through a [`DropHost`] the first time the target is seen.
//! - [`OverlayBinding`]: the explicit state machine deciding where drag-leave
//!   is observed when the widget renders a separate "drop here" overlay that
//!   may only mount once a drag has started.
//! - [`upload::DropZone`]: the simpler drag-active and picker state of a file
//!   upload input.
//!
//! ## Host contract
//!
//! The host implements [`DropHost`]: it looks up mounted nodes by key and
//! attaches or detaches listeners on request. Every native drag event on an
//! attached node is forwarded to [`FileDrop::handle_event`]; when the outcome
//! [prevents default](DragOutcome::prevents_default), the host calls
//! `preventDefault` on the native event.
//!
//! ## Reading drops
//!
//! A drop is reported by exactly one [`FileDrop::get`]. The read after that
//! resets the record, so a widget that polls on every render sees the dropped
//! files once.
//!
//! ```rust
//! use sprig_file_drop::{DragEvent, DragEventKind, DropHost, FileDrop};
//!
//! struct Host {
//!     listeners: Vec<(u32, DragEventKind)>,
//! }
//!
//! impl DropHost for Host {
//!     type Node = u32;
//!     fn node(&self, key: &str) -> Option<u32> {
//!         (key == "zone").then_some(7)
//!     }
//!     fn add_listener(&mut self, node: u32, kind: DragEventKind) {
//!         self.listeners.push((node, kind));
//!     }
//!     fn remove_listener(&mut self, node: u32, kind: DragEventKind) {
//!         self.listeners.retain(|l| *l != (node, kind));
//!     }
//! }
//!
//! let mut host = Host { listeners: Vec::new() };
//! let mut dnd: FileDrop<u32, String> = FileDrop::new();
//!
//! // First render: not dragging, listeners are now attached.
//! let state = dnd.get(&mut host, "zone", None).unwrap();
//! assert!(!state.is_dragging);
//!
//! // The user drops a file on the zone.
//! let outcome = dnd.handle_event(&mut host, DragEvent::drop_files(7, vec!["a.txt".into()]));
//! assert!(outcome.prevents_default());
//!
//! // Next render sees the drop once…
//! assert_eq!(dnd.get(&mut host, "zone", None).unwrap().files, ["a.txt"]);
//! // …and the one after that sees an idle zone.
//! assert!(!dnd.get(&mut host, "zone", None).unwrap().is_dropped);
//!
//! dnd.destroy(&mut host);
//! assert!(host.listeners.is_empty());
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`TrackerConfig`],
//!   [`DropState`] and [`DragEventKind`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod host;
mod state;
mod tracker;
pub mod upload;

pub use binding::OverlayBinding;
pub use host::{DragEvent, DragEventKind, DragEvents, DragOutcome, DropHost};
pub use state::DropState;
pub use tracker::{FileDrop, TrackerConfig};
