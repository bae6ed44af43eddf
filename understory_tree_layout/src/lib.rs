// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree Layout: slot-based 2D positions for level-order binary trees.
//!
//! Every node is placed from its [`Slot`](understory_level_tree::Slot) alone, as if the tree
//! were perfect:
//!
//! - the row at depth `d` sits at `top_margin + d * level_height`;
//! - the width is cut into `2^d + 1` equal segments and slot `p` sits on the `(p + 1)`-th cut.
//!
//! Siblings never overlap, deeper rows are spaced more finely, and a node keeps its
//! position while the tree grows around it. That stability lets a renderer animate
//! nodes keyed by [`Label`](understory_level_tree::Label).
//!
//! - [`LayoutConfig`]: width, row spacing, and top margin. [`LayoutConfig::default`] uses the
//!   fixed [`WIDTH`], [`LEVEL_HEIGHT`], and [`TOP_MARGIN`].
//! - [`compute_positions`] / [`Layout::from_root`]: a [`Layout`] with one [`NodePosition`] per
//!   node, in pre-order.
//! - [`connections`]: one [`Connection`] segment per parent-child link, from the bottom of
//!   the parent marker to the top of the child marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_level_tree::{Label, LevelOrderBuilder};
//! use understory_tree_layout::{LayoutConfig, MARKER_RADIUS, compute_positions, connections};
//!
//! let mut builder = LevelOrderBuilder::new();
//! for ch in "ABC".chars() {
//!     builder.place(Label::new(ch));
//! }
//!
//! let config = LayoutConfig::default();
//! let layout = compute_positions(builder.tree(), &config);
//!
//! let b = layout.get(Label::new('B')).unwrap();
//! let c = layout.get(Label::new('C')).unwrap();
//! assert_eq!(b.depth(), 1);
//! assert!(b.x() < config.width / 2.0 && config.width / 2.0 < c.x());
//!
//! let edges = connections(builder.tree(), &layout, MARKER_RADIUS);
//! assert_eq!(edges.len(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod connections;
mod layout;

pub use config::{LEVEL_HEIGHT, LayoutConfig, MARKER_RADIUS, TOP_MARGIN, WIDTH};
pub use connections::{Connection, connections};
pub use layout::{Layout, NodePosition, compute_positions};
