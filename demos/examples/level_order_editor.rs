// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a tree editor the way a UI would and print what it should draw.
//!
//! Labels are given as the first argument (default `ABCDEFG`); `-` resets the session.
//!
//! Run:
//! - `cargo run -p understory_tree_demos --example level_order_editor -- ABC-DEF`
//! - `RUST_LOG=debug cargo run -p understory_tree_demos --example level_order_editor`

use kurbo::Shape;
use tracing_subscriber::EnvFilter;
use understory_tree_demos::parse_script;
use understory_tree_editor::{EditorEvent, TreeEditor};
use understory_tree_layout::MARKER_RADIUS;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("ABCDEFG"));

    let mut editor = TreeEditor::new();
    for event in parse_script(&script) {
        match (event, editor.handle(event)) {
            (EditorEvent::Select(label), Some(placed)) => match placed.parent {
                Some((parent, side)) => println!("{label}: {side:?} child of {parent}"),
                None => println!("{label}: root"),
            },
            (EditorEvent::Select(label), None) => println!("{label}: ignored"),
            (EditorEvent::Reset, _) => println!("reset"),
        }
    }

    let palette: String = editor
        .palette()
        .map(|entry| {
            if entry.available {
                entry.label.as_char()
            } else {
                '.'
            }
        })
        .collect();
    println!("\npalette: {palette}");

    println!("\nnodes:");
    for (label, pos) in editor.current_layout().iter() {
        let bounds = pos.marker(MARKER_RADIUS).bounding_box();
        println!(
            "  {label} depth {} slot {:>2} at ({:6.1}, {:5.1})  marker {:?}",
            pos.depth(),
            pos.slot.index(),
            pos.x(),
            pos.y(),
            bounds,
        );
    }

    println!("\nedges:");
    for edge in editor.connections() {
        println!(
            "  {} -> {} ({:?}): {:?} -> {:?}",
            edge.parent, edge.child, edge.side, edge.line.p0, edge.line.p1
        );
    }

    if let Some(slot) = editor.next_slot() {
        println!(
            "\nnext label lands at depth {} slot {}",
            slot.depth(),
            slot.index()
        );
    }
}
