// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events a presentation layer forwards to the editor.

use understory_level_tree::Label;

/// A user action on the editor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditorEvent {
    /// A label was picked from the palette.
    Select(Label),
    /// The reset control was activated.
    Reset,
}

impl From<Label> for EditorEvent {
    fn from(label: Label) -> Self {
        Self::Select(label)
    }
}
