// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible bounds.
//!
//! A scroll view clips a tall list of rows. Walking the tree reports, for
//! every row, the rect its clipping ancestors leave visible. Rows whose frame
//! does not meet that rect are fully scrolled out.
//!
//! Run:
//! - `cargo run -p understory_examples --example traverse_visible_bounds`

use kurbo::{Affine, Rect, Vec2};
use understory_traverse::{
    Completion, ElementDesc, ElementFlags, Outcome, Traversal, ViewTree, intersect,
};

fn main() {
    let mut tree = ViewTree::new();
    let window = tree.insert(
        None,
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 320.0, 480.0),
            ..Default::default()
        },
    );
    let scroll = tree.insert(
        Some(window),
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 320.0, 200.0),
            transform: Affine::translate(Vec2::new(0.0, 60.0)),
            flags: ElementFlags::VIEW | ElementFlags::CLIPS_TO_BOUNDS,
            ..Default::default()
        },
    );
    // Content scrolled up by 90 points.
    let content = tree.insert(
        Some(scroll),
        ElementDesc {
            bounds: Rect::new(0.0, 0.0, 320.0, 1000.0),
            transform: Affine::translate(Vec2::new(0.0, -90.0)),
            ..Default::default()
        },
    );
    for i in 0..10_u32 {
        let _ = tree.insert(
            Some(content),
            ElementDesc {
                bounds: Rect::new(0.0, 0.0, 320.0, 44.0),
                transform: Affine::translate(Vec2::new(0.0, f64::from(i) * 44.0)),
                ..Default::default()
            },
        );
    }

    let mut walk = Traversal::forward(&tree, window).unwrap();
    let done = walk.for_each_node(|id, level, bounding_rect| {
        if tree.parent(*id) != Some(content) {
            return Outcome::Continue;
        }
        let frame = tree.frame(*id).unwrap();
        let visible = bounding_rect.and_then(|clip| intersect(clip, frame));
        println!("row {id:?} level={level} frame={frame:?} visible={visible:?}");
        Outcome::Continue
    });
    assert_eq!(done, Completion::Exhausted);
}
