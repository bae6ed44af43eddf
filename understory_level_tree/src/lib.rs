// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Level Tree: a persistent binary tree assembled in level order.
//!
//! Labels are placed one at a time. The first label becomes the root and each
//! later label fills the first open child slot in breadth-first order, left
//! before right. The result is always a complete binary tree: every level but
//! the last is full and the last level has no gaps on the left.
//!
//! - [`LevelOrderBuilder`]: owns the current tree, the placement queue, and the set of used
//!   labels; [`LevelOrderBuilder::place`] and [`LevelOrderBuilder::reset`] are the only
//!   mutations.
//! - [`Tree`]: an immutable snapshot. Cloning is O(1), and updates copy only the path from the
//!   root to the changed node, so older snapshots never see later placements.
//! - [`Slot`]: a `(depth, index)` address that names the same position in every snapshot.
//! - [`Label`] and [`Alphabet`]: node identifiers and the ordered set they come from.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_level_tree::{Label, LevelOrderBuilder, Slot};
//!
//! let mut builder = LevelOrderBuilder::new();
//! for ch in "ABCDE".chars() {
//!     builder.place(Label::new(ch));
//! }
//!
//! let tree = builder.tree();
//! let e = tree.get(Slot::new(2, 1).unwrap()).unwrap();
//! assert_eq!(e.label(), Label::new('E'));
//!
//! // A and B are full, so C receives the next child.
//! assert_eq!(builder.queue_head().unwrap().label, Label::new('C'));
//! ```
//!
//! Placing a label that was already used is a silent no-op: [`LevelOrderBuilder::place`]
//! returns `None` and no state changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod label;
mod slot;
mod tree;

pub use builder::{LevelOrderBuilder, Placement, QueueEntry};
pub use label::{Alphabet, Label};
pub use slot::{Side, Slot};
pub use tree::{LevelOrder, Node, Tree};
