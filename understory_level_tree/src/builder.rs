// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-order assembly: placement queue, used labels, and the place operation.

use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::label::Label;
use crate::slot::{Side, Slot};
use crate::tree::Tree;

/// A node waiting in the placement queue for at least one more child.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    /// Label of the waiting node.
    pub label: Label,
    /// Where the waiting node sits.
    pub slot: Slot,
}

/// Where an accepted label was placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The placed label.
    pub label: Label,
    /// Slot of the new node.
    pub slot: Slot,
    /// The parent's label and the link the new node fills; `None` for the root.
    pub parent: Option<(Label, Side)>,
}

/// Builds a binary tree by filling slots in level order, left before right.
///
/// The builder owns three pieces of state that always change together:
/// the current [`Tree`] snapshot, the placement queue of nodes that can still
/// take children, and the set of labels already used.
///
/// Every accepted placement swaps in a new snapshot, so trees previously
/// obtained through [`LevelOrderBuilder::snapshot`] never observe later changes.
///
/// ## Example
///
/// ```rust
/// use understory_level_tree::{Label, LevelOrderBuilder};
///
/// let mut builder = LevelOrderBuilder::new();
/// for ch in ['A', 'B', 'C', 'D'] {
///     builder.place(Label::new(ch));
/// }
///
/// let root = builder.tree().root().unwrap();
/// assert_eq!(root.left().unwrap().label(), Label::new('B'));
/// assert_eq!(root.right().unwrap().label(), Label::new('C'));
///
/// // A used label is ignored.
/// assert!(builder.place(Label::new('A')).is_none());
/// assert_eq!(builder.tree().len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelOrderBuilder {
    tree: Tree,
    queue: VecDeque<QueueEntry>,
    used: HashSet<Label>,
}

impl LevelOrderBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `label` at the next open slot.
    ///
    /// The first label becomes the root. Every later label becomes the left
    /// child of the node at the head of the placement queue, or its right child
    /// if the left is taken; filling the right child removes that node from the
    /// queue. The new node joins the tail of the queue.
    ///
    /// Returns `None` without changing any state if `label` was already used.
    pub fn place(&mut self, label: Label) -> Option<Placement> {
        if self.used.contains(&label) {
            return None;
        }

        let placement = if self.tree.is_empty() {
            self.tree = Tree::with_root(label);
            self.queue.push_back(QueueEntry {
                label,
                slot: Slot::ROOT,
            });
            Placement {
                label,
                slot: Slot::ROOT,
                parent: None,
            }
        } else {
            let head = *self.queue.front()?;
            let side = self.tree.get(head.slot)?.open_side()?;
            let tree = self.tree.attach(head.slot, side, label)?;
            let slot = head.slot.child(side);

            self.tree = tree;
            if side == Side::Right {
                self.queue.pop_front();
            }
            self.queue.push_back(QueueEntry { label, slot });
            Placement {
                label,
                slot,
                parent: Some((head.label, side)),
            }
        };

        self.used.insert(label);
        Some(placement)
    }

    /// Clear the tree, the placement queue, and the used labels.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// An owned snapshot of the current tree.
    pub fn snapshot(&self) -> Tree {
        self.tree.clone()
    }

    /// The node that receives the next child, if the tree is non-empty.
    pub fn queue_head(&self) -> Option<QueueEntry> {
        self.queue.front().copied()
    }

    /// Nodes still able to take a child, in the order they will receive them.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = QueueEntry> + '_ {
        self.queue.iter().copied()
    }

    /// Whether `label` has been placed since the last reset.
    pub fn is_used(&self, label: Label) -> bool {
        self.used.contains(&label)
    }

    /// Number of labels placed since the last reset.
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    /// The slot the next accepted label will occupy.
    pub fn next_slot(&self) -> Option<Slot> {
        if self.tree.is_empty() {
            return Some(Slot::ROOT);
        }
        let head = self.queue.front()?;
        let side = self.tree.get(head.slot)?.open_side()?;
        Some(head.slot.child(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn build(labels: &str) -> LevelOrderBuilder {
        let mut builder = LevelOrderBuilder::new();
        for ch in labels.chars() {
            builder.place(Label::new(ch));
        }
        builder
    }

    fn slot(depth: u32, index: u64) -> Slot {
        Slot::new(depth, index).unwrap()
    }

    #[test]
    fn first_label_becomes_root() {
        let mut builder = LevelOrderBuilder::new();
        let placed = builder.place(Label::new('K')).unwrap();
        assert_eq!(placed.slot, Slot::ROOT);
        assert_eq!(placed.parent, None);
        assert_eq!(
            builder.queue_head(),
            Some(QueueEntry {
                label: Label::new('K'),
                slot: Slot::ROOT
            })
        );
        assert!(builder.is_used(Label::new('K')));
    }

    #[test]
    fn five_labels_fill_two_levels_left_first() {
        let builder = build("ABCDE");
        let tree = builder.tree();
        let at = |d, i| tree.get(slot(d, i)).map(|n| n.label().as_char());
        assert_eq!(at(0, 0), Some('A'));
        assert_eq!(at(1, 0), Some('B'));
        assert_eq!(at(1, 1), Some('C'));
        assert_eq!(at(2, 0), Some('D'));
        assert_eq!(at(2, 1), Some('E'));
        assert_eq!(at(2, 2), None);
    }

    #[test]
    fn placements_report_parent_and_side() {
        let mut builder = build("AB");
        let c = builder.place(Label::new('C')).unwrap();
        assert_eq!(c.parent, Some((Label::new('A'), Side::Right)));
        let d = builder.place(Label::new('D')).unwrap();
        assert_eq!(d.parent, Some((Label::new('B'), Side::Left)));
        assert_eq!(d.slot, slot(2, 0));
    }

    #[test]
    fn any_prefix_of_the_alphabet_is_level_ordered() {
        let alphabet = "ABCDEFGHIJKLMNO";
        for n in 0..=alphabet.len() {
            let builder = build(&alphabet[..n]);
            let tree = builder.tree();
            assert_eq!(tree.len(), n);
            // Level order with no gaps: the k-th node in level order sits at the
            // k-th slot of a perfect tree.
            for (k, (s, node)) in tree.iter().enumerate() {
                let expected_depth = (k + 1).ilog2();
                let expected_index = (k + 1 - (1 << expected_depth)) as u64;
                assert_eq!(s, slot(expected_depth, expected_index), "node {k}");
                assert_eq!(node.label().as_char(), alphabet.as_bytes()[k] as char);
            }
        }
    }

    #[test]
    fn reused_label_changes_nothing() {
        let mut builder = build("ABC");
        let before = builder.clone();
        assert_eq!(builder.place(Label::new('B')), None);
        assert_eq!(builder, before);
        assert!(builder.tree().ptr_eq(before.tree()));
    }

    #[test]
    fn full_parents_leave_the_queue() {
        let mut builder = build("A");
        let mut heads = Vec::new();
        for ch in "BCDEFG".chars() {
            heads.push(builder.queue_head().unwrap().label.as_char());
            builder.place(Label::new(ch));
        }
        assert_eq!(heads, ['A', 'A', 'B', 'B', 'C', 'C']);
        assert!(
            builder
                .pending()
                .all(|e| !matches!(e.label.as_char(), 'A' | 'B' | 'C')),
            "filled parents must never come back to the queue"
        );
        let pending: Vec<char> = builder.pending().map(|e| e.label.as_char()).collect();
        assert_eq!(pending, ['D', 'E', 'F', 'G']);
    }

    #[test]
    fn snapshots_do_not_see_later_placements() {
        let mut builder = build("AB");
        let snapshot = builder.snapshot();
        builder.place(Label::new('C'));
        builder.place(Label::new('D'));
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.root().unwrap().right().is_none());
        assert!(snapshot.get(slot(2, 0)).is_none());
        assert_eq!(builder.tree().len(), 4);
    }

    #[test]
    fn reset_matches_a_fresh_builder() {
        let mut builder = build("ABCDE");
        builder.reset();
        assert_eq!(builder, LevelOrderBuilder::new());
        assert!(builder.tree().is_empty());
        assert_eq!(builder.queue_head(), None);
        assert_eq!(builder.used_len(), 0);
        // Labels are usable again.
        assert_eq!(builder.place(Label::new('C')).map(|p| p.slot), Some(Slot::ROOT));
    }

    #[test]
    fn next_slot_predicts_placement() {
        let mut builder = LevelOrderBuilder::new();
        for ch in "ABCDEFG".chars() {
            let predicted = builder.next_slot();
            let placed = builder.place(Label::new(ch)).map(|p| p.slot);
            assert_eq!(predicted, placed);
        }
    }
}
