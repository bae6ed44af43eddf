// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory tree editor demos.

use understory_level_tree::Label;
use understory_tree_editor::EditorEvent;

/// Turn a compact script into editor events: `-` resets, whitespace is skipped,
/// and every other character selects the label it spells.
pub fn parse_script(script: &str) -> Vec<EditorEvent> {
    script
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '-' => EditorEvent::Reset,
            ch => EditorEvent::Select(Label::new(ch)),
        })
        .collect()
}
