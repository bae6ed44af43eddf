// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constants and the per-slot position formula.

use kurbo::Point;
use understory_level_tree::Slot;

use crate::layout::NodePosition;

/// Total horizontal extent the layout divides between the slots of each level.
pub const WIDTH: f64 = 520.0;

/// Vertical distance between consecutive levels.
pub const LEVEL_HEIGHT: f64 = 70.0;

/// Vertical position of the root.
pub const TOP_MARGIN: f64 = 60.0;

/// Radius of a node marker; connections end this far from marker centers.
pub const MARKER_RADIUS: f64 = 20.0;

/// Fixed geometry of a tree layout.
///
/// The default uses [`WIDTH`], [`LEVEL_HEIGHT`], and [`TOP_MARGIN`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Total width split between the slots of each level.
    pub width: f64,
    /// Distance between rows.
    pub level_height: f64,
    /// `y` of the root row.
    pub top_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            level_height: LEVEL_HEIGHT,
            top_margin: TOP_MARGIN,
        }
    }
}

impl LayoutConfig {
    /// Position of `slot` in a perfect binary tree of this geometry.
    ///
    /// The width is cut into `2^depth + 1` equal segments and slot `p` sits on
    /// the `(p + 1)`-th cut, so each level is centered and spaced evenly no matter
    /// how many of its slots are filled.
    pub fn position(&self, slot: Slot) -> NodePosition {
        let segments = slot.level_width() + 1;
        let spacing = self.width / segments as f64;
        let x = spacing * (slot.index() + 1) as f64;
        let y = self.top_margin + self.level_height * f64::from(slot.depth());
        NodePosition {
            center: Point::new(x, y),
            slot,
        }
    }
}
