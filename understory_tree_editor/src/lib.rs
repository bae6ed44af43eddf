// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree Editor: session state for building a binary tree by clicking labels.
//!
//! A [`TreeEditor`] is the one object a presentation layer talks to:
//!
//! - it receives selection and reset events ([`TreeEditor::select_label`],
//!   [`TreeEditor::reset_session`], or [`TreeEditor::handle`] with an [`EditorEvent`]);
//! - it keeps the tree, the placement queue, and the used labels of an
//!   [`understory_level_tree::LevelOrderBuilder`];
//! - it answers with the [`understory_tree_layout::Layout`] of the current tree
//!   ([`TreeEditor::current_layout`]), the edges to draw ([`TreeEditor::connections`]),
//!   and the palette state ([`TreeEditor::palette`]).
//!
//! Every event runs to completion before the call returns. A tree obtained from
//! [`TreeEditor::snapshot`] is immutable and never reflects later events.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_level_tree::Label;
//! use understory_tree_editor::{EditorEvent, TreeEditor};
//!
//! let mut editor = TreeEditor::new();
//! for ch in "ABCDE".chars() {
//!     editor.handle(EditorEvent::Select(Label::new(ch)));
//! }
//!
//! // Selecting a used label does nothing.
//! assert!(editor.select_label(Label::new('C')).is_none());
//!
//! let layout = editor.current_layout();
//! assert_eq!(layout.len(), 5);
//! assert_eq!(layout.get(Label::new('E')).unwrap().depth(), 2);
//!
//! editor.handle(EditorEvent::Reset);
//! assert!(editor.current_layout().is_empty());
//! ```
//!
//! ## Logging
//!
//! Accepted placements and resets are reported as `tracing` events at `DEBUG`; ignored
//! selections are reported at `TRACE`. Installing a subscriber is up to the host.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` through `understory_tree_layout`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod editor;
mod event;

pub use editor::{PaletteEntry, TreeEditor};
pub use event::EditorEvent;
