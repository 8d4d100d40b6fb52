// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-rect propagation from a parent to its children.
//!
//! ## Rules
//!
//! The rectangle a child inherits depends only on its parent node:
//!
//! - Non-view parent: `None`. Accumulation only flows through view-like
//!   containers, so a non-view element resets clipping for its whole subtree.
//! - View parent without a container (root of the visual hierarchy): `None`.
//! - Clipping view parent: its own frame if nothing was inherited yet;
//!   otherwise the intersection of the inherited rect and the frame. When the
//!   two are disjoint the inherited rect passes through unchanged.
//! - Non-clipping view parent: the inherited rect, converted into the
//!   parent's own space.

use kurbo::Rect;

use crate::element::{ElementTree, ViewLike};
use crate::geometry::intersect;
use crate::types::TraversalNode;

/// Compute the bounding rect inherited by every child of `parent`.
///
/// `parent.bounding_rect` is expressed in the space of the parent's
/// container; the result is expressed in the parent's own space, which is the
/// container space of its children.
pub fn propagate<T: ElementTree + ?Sized>(
    tree: &T,
    parent: &TraversalNode<T::Element>,
) -> Option<Rect> {
    let view = tree.view(&parent.element)?;
    let parent_frame = view.convert_from_container(view.frame());
    let inherited = parent.bounding_rect.map(|r| view.convert_from_container(r));

    if !view.has_container() {
        return None;
    }
    if !view.clips_to_bounds() {
        return inherited;
    }
    let Some(inherited) = inherited else {
        return Some(parent_frame);
    };
    // Disjoint clips keep the inherited rect rather than collapsing to empty.
    Some(intersect(inherited, parent_frame).unwrap_or(inherited))
}
