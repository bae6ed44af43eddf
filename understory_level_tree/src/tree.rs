// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistent binary tree: shared immutable nodes and path-copying updates.

use alloc::collections::VecDeque;
use alloc::sync::Arc;

use crate::label::Label;
use crate::slot::{Side, Slot};

/// A labeled node with up to two children.
///
/// Nodes are shared between snapshots and never change once shared. Filling a
/// child link builds a new node that reuses the existing subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    label: Label,
    left: Option<Arc<Node>>,
    right: Option<Arc<Node>>,
}

impl Node {
    /// A node with no children.
    pub const fn leaf(label: Label) -> Self {
        Self {
            label,
            left: None,
            right: None,
        }
    }

    /// This node's label.
    pub const fn label(&self) -> Label {
        self.label
    }

    /// The left child, if filled.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if filled.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child on `side`, if filled.
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Whether both child links are filled.
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// The first empty child link, left before right.
    pub fn open_side(&self) -> Option<Side> {
        if self.left.is_none() {
            Some(Side::Left)
        } else if self.right.is_none() {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn shared_child(&self, side: Side) -> Option<&Arc<Self>> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    fn with_child(&self, side: Side, child: Arc<Self>) -> Self {
        let mut node = self.clone();
        match side {
            Side::Left => node.left = Some(child),
            Side::Right => node.right = Some(child),
        }
        node
    }
}

/// Snapshot of a binary tree.
///
/// Cloning is cheap and yields an independent snapshot: updates such as
/// [`Tree::attach`] return a new tree and leave every existing clone as it was.
///
/// ## Example
///
/// ```rust
/// use understory_level_tree::{Label, Side, Slot, Tree};
///
/// let before = Tree::with_root(Label::new('A'));
/// let after = before.attach(Slot::ROOT, Side::Left, Label::new('B')).unwrap();
///
/// assert_eq!(before.len(), 1);
/// assert_eq!(after.len(), 2);
/// assert!(before.root().unwrap().left().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree {
    root: Option<Arc<Node>>,
    len: usize,
}

impl Tree {
    /// The empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// A tree holding a single root node.
    pub fn with_root(label: Label) -> Self {
        Self {
            root: Some(Arc::new(Node::leaf(label))),
            len: 1,
        }
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The node at `slot`, if that position is filled.
    pub fn get(&self, slot: Slot) -> Option<&Node> {
        let mut node = self.root()?;
        for side in slot.path() {
            node = node.child(side)?;
        }
        Some(node)
    }

    /// Whether some node carries `label`.
    pub fn contains(&self, label: Label) -> bool {
        self.iter().any(|(_, node)| node.label() == label)
    }

    /// Number of levels; zero for the empty tree.
    pub fn height(&self) -> u32 {
        self.iter()
            .map(|(slot, _)| slot.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterate nodes in level order with their slots.
    pub fn iter(&self) -> LevelOrder<'_> {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            queue.push_back((Slot::ROOT, root));
        }
        LevelOrder { queue }
    }

    /// Whether both snapshots share the same root allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Return a new tree with a leaf labeled `label` on `side` of the node at `parent`.
    ///
    /// Only the nodes on the path from the root to `parent` are copied; all other
    /// subtrees are shared with `self`, which is left untouched.
    ///
    /// Returns `None` if `parent` is vacant or its `side` link is already filled.
    pub fn attach(&self, parent: Slot, side: Side, label: Label) -> Option<Self> {
        let root = self.root.as_ref()?;
        let leaf = Arc::new(Node::leaf(label));
        let root = attach_along(root, parent.depth(), parent, side, leaf)?;
        Some(Self {
            root: Some(Arc::new(root)),
            len: self.len + 1,
        })
    }
}

/// Rebuild `node` with the leaf attached below it, `remaining` levels above `parent`.
fn attach_along(
    node: &Node,
    remaining: u32,
    parent: Slot,
    side: Side,
    leaf: Arc<Node>,
) -> Option<Node> {
    if remaining == 0 {
        if node.child(side).is_some() {
            return None;
        }
        return Some(node.with_child(side, leaf));
    }
    let step = if (parent.index() >> (remaining - 1)) & 1 == 0 {
        Side::Left
    } else {
        Side::Right
    };
    let next = node.shared_child(step)?;
    let rebuilt = attach_along(next, remaining - 1, parent, side, leaf)?;
    Some(node.with_child(step, Arc::new(rebuilt)))
}

impl<'a> IntoIterator for &'a Tree {
    type Item = (Slot, &'a Node);
    type IntoIter = LevelOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Level-order iterator over a [`Tree`], returned by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct LevelOrder<'a> {
    queue: VecDeque<(Slot, &'a Node)>,
}

impl<'a> Iterator for LevelOrder<'a> {
    type Item = (Slot, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, node) = self.queue.pop_front()?;
        if let Some(left) = node.left() {
            self.queue.push_back((slot.child(Side::Left), left));
        }
        if let Some(right) = node.right() {
            self.queue.push_back((slot.child(Side::Right), right));
        }
        Some((slot, node))
    }
}
