// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional addresses of nodes in a binary tree.

/// Which child link of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child, filled first.
    Left,
    /// The right child, filled second.
    Right,
}

/// Position of a node: its depth and its index within that level.
///
/// The root is at `(0, 0)`. The children of `(d, p)` are `(d + 1, 2p)` on the
/// left and `(d + 1, 2p + 1)` on the right, so the index is the root-to-node
/// path written as bits (`0` for left, `1` for right), most significant first.
/// A slot addresses the same position in every snapshot of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    depth: u32,
    index: u64,
}

impl Slot {
    /// The root position.
    pub const ROOT: Self = Self { depth: 0, index: 0 };

    /// Deepest representable level.
    pub const MAX_DEPTH: u32 = 63;

    /// Create a slot, or `None` if `index` doesn't fit at `depth`.
    pub const fn new(depth: u32, index: u64) -> Option<Self> {
        if depth > Self::MAX_DEPTH || index >= (1_u64 << depth) {
            return None;
        }
        Some(Self { depth, index })
    }

    /// Distance from the root.
    pub const fn depth(self) -> u32 {
        self.depth
    }

    /// Index within the level, counted left to right from zero.
    pub const fn index(self) -> u64 {
        self.index
    }

    /// Number of positions a perfect tree has at this slot's depth.
    pub const fn level_width(self) -> u64 {
        1_u64 << self.depth
    }

    /// The slot of the child on `side`.
    pub fn child(self, side: Side) -> Self {
        debug_assert!(
            self.depth < Self::MAX_DEPTH,
            "slot depth {} has no representable children",
            self.depth
        );
        let bit = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        Self {
            depth: self.depth + 1,
            index: (self.index << 1) | bit,
        }
    }

    /// The parent slot and which side of it this slot hangs from.
    pub const fn parent(self) -> Option<(Self, Side)> {
        if self.depth == 0 {
            return None;
        }
        let side = if self.index & 1 == 0 {
            Side::Left
        } else {
            Side::Right
        };
        Some((
            Self {
                depth: self.depth - 1,
                index: self.index >> 1,
            },
            side,
        ))
    }

    /// Sides to follow from the root to reach this slot.
    pub fn path(self) -> impl ExactSizeIterator<Item = Side> + DoubleEndedIterator {
        (0..self.depth).rev().map(move |bit| {
            if (self.index >> bit) & 1 == 0 {
                Side::Left
            } else {
                Side::Right
            }
        })
    }
}
