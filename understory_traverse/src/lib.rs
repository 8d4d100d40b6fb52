// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_traverse --heading-base-level=0

//! Understory Traverse: lazy depth-first walks over live UI element trees.
//!
//! Understory Traverse linearizes an in-memory element tree for inspection,
//! for example by an assertion or debugging tool that needs every element
//! together with what part of it could be visible.
//!
//! - Produces one [`TraversalNode`] per pull: the element, its depth, and the
//!   clip-accumulated bounding rect inherited from its view-like ancestors.
//! - Supports forward (pre-order) and backward (last child first, optionally
//!   in stacking order) walks via [`TraversalOrder`].
//! - Never mutates the tree; it borrows it for the duration of the walk.
//!
//! ## Host integration
//!
//! The traversal does not know what an element is. Hosts implement
//! [`ElementTree`] to enumerate children and to expose the [`ViewLike`]
//! capability (frame, clip flag, enclosing container, coordinate conversion)
//! for elements that have geometry.
//! Elements without that capability reset bounding-rect accumulation for
//! their whole subtree; see [`propagate`] for the exact rules.
//!
//! [`ViewTree`] is a ready-made host: a generational arena of elements with
//! bounds, transforms, z-order, and [`ElementFlags`].
//!
//! ## API overview
//!
//! - [`Traversal::forward`] / [`Traversal::backward`] / [`Traversal::with_order`] → [`Traversal`].
//! - [`Traversal`] is an [`Iterator`] over [`TraversalNode`].
//! - [`Traversal::for_each_node`] drives a visitor that returns [`Outcome`] and reports a [`Completion`].
//! - [`TraverseError::InvalidRoot`] is returned when the root is not part of the tree.
//!
//! ## Bounding rects
//!
//! A node's `bounding_rect` is expressed in the coordinate space of the
//! element's enclosing container. `None` means unbounded: nothing above the
//! element has established a clip yet.
//!
//! ## Logging
//!
//! The crate emits [`log`] records: `debug` when a walk starts, is rejected,
//! or is stopped by a visitor, and `trace` for each expansion. No logger is
//! installed.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Affine, Rect, Vec2};
//! use understory_traverse::{ElementDesc, ElementFlags, Traversal, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let window = tree.insert(
//!     None,
//!     ElementDesc { bounds: Rect::new(0.0, 0.0, 800.0, 600.0), ..Default::default() },
//! );
//! let scroll = tree.insert(
//!     Some(window),
//!     ElementDesc {
//!         bounds: Rect::new(0.0, 0.0, 200.0, 100.0),
//!         transform: Affine::translate(Vec2::new(50.0, 50.0)),
//!         flags: ElementFlags::VIEW | ElementFlags::CLIPS_TO_BOUNDS,
//!         ..Default::default()
//!     },
//! );
//! let row = tree.insert(
//!     Some(scroll),
//!     ElementDesc { bounds: Rect::new(0.0, 0.0, 200.0, 400.0), ..Default::default() },
//! );
//!
//! let nodes: Vec<_> = Traversal::forward(&tree, window).unwrap().collect();
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[2].element, row);
//! assert_eq!(nodes[2].level, 2);
//! // The row is clipped to the scroll view's frame, in the scroll view's space.
//! assert_eq!(nodes[2].bounding_rect, Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
//! ```
//!
//! ### Stopping early
//!
//! ```rust
//! use understory_traverse::{Completion, ElementDesc, Outcome, Traversal, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let root = tree.insert(None, ElementDesc::default());
//! let front = tree.insert(Some(root), ElementDesc { z_index: 1, ..Default::default() });
//! let _back = tree.insert(Some(root), ElementDesc { z_index: 0, ..Default::default() });
//!
//! // Topmost first: find the first element drawn above everything else.
//! let mut walk = Traversal::backward(&tree, root, true).unwrap();
//! let mut found = None;
//! let done = walk.for_each_node(|id, level, _| {
//!     if level == 1 {
//!         found = Some(*id);
//!         return Outcome::Stop;
//!     }
//!     Outcome::Continue
//! });
//! assert_eq!(done, Completion::Stopped);
//! assert_eq!(found, Some(front));
//! // The rest of the frontier is still there.
//! assert_eq!(walk.count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod element;
mod geometry;
mod traversal;
mod types;
mod view_tree;

pub use bounds::propagate;
pub use element::{ElementTree, ViewLike};
pub use geometry::intersect;
pub use traversal::Traversal;
pub use types::{Completion, Outcome, TraversalNode, TraversalOrder, TraverseError};
pub use view_tree::{ElementDesc, ElementFlags, ElementId, ViewRef, ViewTree};
