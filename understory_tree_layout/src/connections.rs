// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-to-child connection segments.

use alloc::vec::Vec;
use kurbo::Line;
use understory_level_tree::{Label, Node, Side, Tree};

use crate::layout::Layout;

/// A drawable edge between a node and one of its children.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    /// Label of the parent node.
    pub parent: Label,
    /// Label of the child node.
    pub child: Label,
    /// Which child link this edge represents.
    pub side: Side,
    /// Segment from the bottom of the parent marker to the top of the child marker.
    pub line: Line,
}

impl Connection {
    /// Stable identity of the edge, suitable for keying animations.
    pub fn key(&self) -> (Label, Side) {
        (self.parent, self.side)
    }
}

/// One connection per parent-child link of `tree`, in pre-order, left before right.
///
/// Links whose endpoints have no entry in `layout` are skipped.
pub fn connections(tree: &Tree, layout: &Layout, marker_radius: f64) -> Vec<Connection> {
    let mut out = Vec::new();
    if let Some(root) = tree.root() {
        collect(root, layout, marker_radius, &mut out);
    }
    out
}

fn collect(node: &Node, layout: &Layout, radius: f64, out: &mut Vec<Connection>) {
    let Some(from) = layout.get(node.label()) else {
        return;
    };
    for side in [Side::Left, Side::Right] {
        let Some(child) = node.child(side) else {
            continue;
        };
        let Some(to) = layout.get(child.label()) else {
            continue;
        };
        out.push(Connection {
            parent: node.label(),
            child: child.label(),
            side,
            line: Line::new(from.bottom(radius), to.top(radius)),
        });
        collect(child, layout, radius, out);
    }
}
