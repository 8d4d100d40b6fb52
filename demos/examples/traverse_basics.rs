// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal basics.
//!
//! Build a small element tree and walk it forward, backward, and backward in
//! stacking order, printing each element with its depth.
//!
//! Run:
//! - `cargo run -p understory_examples --example traverse_basics`

use kurbo::Rect;
use understory_traverse::{ElementDesc, ElementId, Traversal, TraversalOrder, ViewTree};

fn print_walk(label: &str, tree: &ViewTree, root: ElementId, order: TraversalOrder) {
    println!("== {label} ==");
    for node in Traversal::with_order(tree, root, order).unwrap() {
        println!("{:indent$}{:?}", "", node.element, indent = node.level * 2);
    }
}

fn main() {
    let mut tree = ViewTree::new();
    let root = tree.insert(
        None,
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            ..Default::default()
        },
    );
    let toolbar = tree.insert(
        Some(root),
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 400.0, 40.0),
            z_index: 2,
            ..Default::default()
        },
    );
    let _button = tree.insert(Some(toolbar), ElementDesc::default());
    let _content = tree.insert(
        Some(root),
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
            z_index: 0,
            ..Default::default()
        },
    );
    let _overlay = tree.insert(
        Some(root),
        ElementDesc {
            z_index: 5,
            ..Default::default()
        },
    );

    print_walk("forward", &tree, root, TraversalOrder::Forward);
    print_walk(
        "backward",
        &tree,
        root,
        TraversalOrder::Backward { use_z_order: false },
    );
    print_walk(
        "backward, topmost first",
        &tree,
        root,
        TraversalOrder::Backward { use_z_order: true },
    );
}
