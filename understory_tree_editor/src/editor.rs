// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor session: builder, alphabet, and the cached layout.

use alloc::vec::Vec;
use tracing::{debug, trace};
use understory_level_tree::{Alphabet, Label, LevelOrderBuilder, Placement, Slot, Tree};
use understory_tree_layout::{
    Connection, Layout, LayoutConfig, MARKER_RADIUS, compute_positions, connections,
};

use crate::event::EditorEvent;

/// A palette button: one alphabet label and whether it can still be picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    /// The label.
    pub label: Label,
    /// `false` once the label is in the tree.
    pub available: bool,
}

/// One editing session.
///
/// Owns the [`LevelOrderBuilder`] state, the fixed [`Alphabet`] and
/// [`LayoutConfig`], and the layout of the current tree. Each event is applied
/// in full before the call returns, and the layout is recomputed after every
/// change, so [`TreeEditor::current_layout`] always matches [`TreeEditor::tree`].
#[derive(Clone, Debug)]
pub struct TreeEditor {
    alphabet: Alphabet,
    config: LayoutConfig,
    builder: LevelOrderBuilder,
    layout: Layout,
}

impl Default for TreeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeEditor {
    /// A session over the default alphabet and layout.
    pub fn new() -> Self {
        Self::with_config(Alphabet::default(), LayoutConfig::default())
    }

    /// A session over `alphabet` with the default layout.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self::with_config(alphabet, LayoutConfig::default())
    }

    /// A session over `alphabet` laid out with `config`.
    pub fn with_config(alphabet: Alphabet, config: LayoutConfig) -> Self {
        Self {
            alphabet,
            config,
            builder: LevelOrderBuilder::new(),
            layout: Layout::new(),
        }
    }

    /// Place `label` at the next open slot.
    ///
    /// Labels outside the alphabet and labels already in the tree are ignored:
    /// nothing changes and `None` is returned.
    pub fn select_label(&mut self, label: Label) -> Option<Placement> {
        if !self.alphabet.contains(label) {
            trace!(label = %label, "ignored selection: not in alphabet");
            return None;
        }
        let Some(placement) = self.builder.place(label) else {
            trace!(label = %label, "ignored selection: already used");
            return None;
        };
        self.layout = compute_positions(self.builder.tree(), &self.config);
        debug!(
            label = %label,
            depth = placement.slot.depth(),
            index = placement.slot.index(),
            nodes = self.builder.tree().len(),
            "placed node"
        );
        Some(placement)
    }

    /// Drop the tree, the placement queue, and the used labels.
    pub fn reset_session(&mut self) {
        debug!(nodes = self.builder.tree().len(), "reset session");
        self.builder.reset();
        self.layout = Layout::new();
    }

    /// Apply a forwarded [`EditorEvent`].
    pub fn handle(&mut self, event: EditorEvent) -> Option<Placement> {
        match event {
            EditorEvent::Select(label) => self.select_label(label),
            EditorEvent::Reset => {
                self.reset_session();
                None
            }
        }
    }

    /// Positions of all nodes in the current tree.
    pub fn current_layout(&self) -> &Layout {
        &self.layout
    }

    /// Edges for the current tree, using [`MARKER_RADIUS`].
    pub fn connections(&self) -> Vec<Connection> {
        connections(self.builder.tree(), &self.layout, MARKER_RADIUS)
    }

    /// Alphabet labels in order, each with its availability.
    pub fn palette(&self) -> impl ExactSizeIterator<Item = PaletteEntry> + '_ {
        self.alphabet.iter().map(|label| PaletteEntry {
            label,
            available: !self.builder.is_used(label),
        })
    }

    /// The current tree.
    pub fn tree(&self) -> &Tree {
        self.builder.tree()
    }

    /// An owned snapshot of the current tree, unaffected by later events.
    pub fn snapshot(&self) -> Tree {
        self.builder.snapshot()
    }

    /// Whether no label has been placed since the last reset.
    pub fn is_empty(&self) -> bool {
        self.builder.tree().is_empty()
    }

    /// Where the next accepted label will go.
    pub fn next_slot(&self) -> Option<Slot> {
        if self.builder.used_len() >= self.alphabet.len() {
            return None;
        }
        self.builder.next_slot()
    }

    /// The builder state.
    pub fn builder(&self) -> &LevelOrderBuilder {
        &self.builder
    }

    /// The labels this session accepts.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The layout geometry.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}
