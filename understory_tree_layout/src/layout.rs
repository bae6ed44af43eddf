// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positions for every node of a tree.

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Circle, Point};
use smallvec::SmallVec;
use understory_level_tree::{Label, Node, Side, Slot, Tree};

use crate::config::LayoutConfig;

/// Where a node is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodePosition {
    /// Center of the node marker.
    pub center: Point,
    /// Slot the position was computed from.
    pub slot: Slot,
}

impl NodePosition {
    /// Horizontal coordinate of the center.
    pub fn x(&self) -> f64 {
        self.center.x
    }

    /// Vertical coordinate of the center.
    pub fn y(&self) -> f64 {
        self.center.y
    }

    /// Depth of the node; the root is at depth zero.
    pub fn depth(&self) -> u32 {
        self.slot.depth()
    }

    /// The marker circle around the center.
    pub fn marker(&self, radius: f64) -> Circle {
        Circle::new(self.center, radius)
    }

    /// Top of a marker of `radius`; incoming connections end here.
    pub fn top(&self, radius: f64) -> Point {
        Point::new(self.center.x, self.center.y - radius)
    }

    /// Bottom of a marker of `radius`; outgoing connections start here.
    pub fn bottom(&self, radius: f64) -> Point {
        Point::new(self.center.x, self.center.y + radius)
    }
}

/// Label-keyed positions for all nodes of a tree.
///
/// Entries are kept in pre-order (a node before its subtrees, left subtree
/// first), which is also a valid paint order. Lookups by label go through a
/// hash index.
///
/// The layout is a pure function of the tree's shape and labels: computing it
/// twice gives equal results, and a node keeps its position for as long as it
/// keeps its slot, which lets renderers animate by label.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    entries: Vec<(Label, NodePosition)>,
    index: HashMap<Label, usize>,
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Layout {
    /// The empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out the tree rooted at `root`.
    pub fn from_root(root: Option<&Node>, config: &LayoutConfig) -> Self {
        let mut layout = Self::new();
        let Some(root) = root else {
            return layout;
        };

        let mut stack: SmallVec<[(&Node, Slot); 16]> = SmallVec::new();
        stack.push((root, Slot::ROOT));
        while let Some((node, slot)) = stack.pop() {
            layout.insert(node.label(), config.position(slot));
            // Right first so the left subtree is laid out first.
            if let Some(right) = node.right() {
                stack.push((right, slot.child(Side::Right)));
            }
            if let Some(left) = node.left() {
                stack.push((left, slot.child(Side::Left)));
            }
        }
        layout
    }

    fn insert(&mut self, label: Label, position: NodePosition) {
        match self.index.get(&label) {
            Some(&i) => self.entries[i].1 = position,
            None => {
                self.index.insert(label, self.entries.len());
                self.entries.push((label, position));
            }
        }
    }

    /// Position of the node labeled `label`.
    pub fn get(&self, label: Label) -> Option<&NodePosition> {
        let &i = self.index.get(&label)?;
        self.entries.get(i).map(|(_, pos)| pos)
    }

    /// Whether the layout has an entry for `label`.
    pub fn contains(&self, label: Label) -> bool {
        self.index.contains_key(&label)
    }

    /// Iterate entries in pre-order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Label, &NodePosition)> + '_ {
        self.entries.iter().map(|(label, pos)| (*label, pos))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute a position for every node of `tree`.
///
/// The empty tree yields an empty layout.
pub fn compute_positions(tree: &Tree, config: &LayoutConfig) -> Layout {
    Layout::from_root(tree.root(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use understory_level_tree::LevelOrderBuilder;

    fn build(labels: &str) -> Tree {
        let mut builder = LevelOrderBuilder::new();
        for ch in labels.chars() {
            builder.place(Label::new(ch));
        }
        builder.snapshot()
    }

    fn slot_of(layout: &Layout, ch: char) -> (u32, u64) {
        let pos = layout.get(Label::new(ch)).unwrap();
        (pos.depth(), pos.slot.index())
    }

    #[test]
    fn empty_tree_has_empty_layout() {
        let layout = compute_positions(&Tree::new(), &LayoutConfig::default());
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert_eq!(layout, Layout::new());
    }

    #[test]
    fn five_nodes_get_expected_depth_and_slot() {
        let layout = compute_positions(&build("ABCDE"), &LayoutConfig::default());
        assert_eq!(layout.len(), 5);
        assert_eq!(slot_of(&layout, 'A'), (0, 0));
        assert_eq!(slot_of(&layout, 'B'), (1, 0));
        assert_eq!(slot_of(&layout, 'C'), (1, 1));
        assert_eq!(slot_of(&layout, 'D'), (2, 0));
        assert_eq!(slot_of(&layout, 'E'), (2, 1));
        assert!(!layout.contains(Label::new('F')));
    }

    #[test]
    fn entries_are_in_pre_order() {
        let layout = compute_positions(&build("ABCDEFG"), &LayoutConfig::default());
        let order: Vec<char> = layout.iter().map(|(l, _)| l.as_char()).collect();
        assert_eq!(order, ['A', 'B', 'D', 'E', 'C', 'F', 'G']);
    }

    #[test]
    fn every_node_has_exactly_one_entry() {
        let tree = build("ABCDEFGHIJKLMNO");
        let layout = compute_positions(&tree, &LayoutConfig::default());
        assert_eq!(layout.len(), tree.len());
        for (slot, node) in tree.iter() {
            assert_eq!(layout.get(node.label()).map(|p| p.slot), Some(slot));
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let tree = build("ABCDEF");
        let config = LayoutConfig::default();
        let first = compute_positions(&tree, &config);
        let second = compute_positions(&tree, &config);
        assert_eq!(first, second);
        let rebuilt = compute_positions(&build("ABCDEF"), &config);
        assert_eq!(first, rebuilt);
    }

    #[test]
    fn existing_nodes_keep_their_positions_as_the_tree_grows() {
        let config = LayoutConfig::default();
        let small = compute_positions(&build("ABC"), &config);
        let large = compute_positions(&build("ABCDEFG"), &config);
        for (label, pos) in small.iter() {
            assert_eq!(large.get(label), Some(pos));
        }
    }

    #[test]
    fn anchors_sit_on_the_marker() {
        let layout = compute_positions(&build("A"), &LayoutConfig::default());
        let a = layout.get(Label::new('A')).unwrap();
        assert_eq!(a.top(20.0), Point::new(260.0, 40.0));
        assert_eq!(a.bottom(20.0), Point::new(260.0, 80.0));
        assert_eq!(a.marker(20.0).radius, 20.0);
    }
}
