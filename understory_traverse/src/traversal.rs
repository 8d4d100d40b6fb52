// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal engine: the pending stack and the pop/expand/push cycle.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use kurbo::Rect;

use crate::bounds::propagate;
use crate::element::ElementTree;
use crate::types::{Completion, Outcome, TraversalNode, TraversalOrder, TraverseError};

/// Lazy depth-first walk over an [`ElementTree`].
///
/// ## Usage
///
/// - Construct with [`Traversal::forward`] for pre-order in declaration order,
///   or [`Traversal::backward`] to visit each element's children last-first
///   (optionally in stacking order).
/// - Pull nodes with [`Iterator::next`], or hand a visitor to
///   [`Traversal::for_each_node`].
///
/// Each pulled node is expanded exactly once, right before it is returned:
/// its children are enumerated, given their inherited bounding rect, and
/// pushed so that the next pull continues depth-first. Once the pending stack
/// drains the traversal stays exhausted.
pub struct Traversal<'t, T: ElementTree + ?Sized> {
    tree: &'t T,
    order: TraversalOrder,
    pending: Vec<TraversalNode<T::Element>>,
    // Reused buffer for child enumeration.
    scratch: Vec<T::Element>,
}

impl<T: ElementTree + ?Sized> core::fmt::Debug for Traversal<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl<'t, T: ElementTree + ?Sized> Traversal<'t, T> {
    /// Pre-order traversal in the tree's natural sibling order.
    pub fn forward(tree: &'t T, root: T::Element) -> Result<Self, TraverseError> {
        Self::with_order(tree, root, TraversalOrder::Forward)
    }

    /// Traversal that visits each element's children from last to first.
    ///
    /// With `use_z_order`, siblings are taken in stacking order, so the
    /// topmost drawn sibling is visited first.
    pub fn backward(
        tree: &'t T,
        root: T::Element,
        use_z_order: bool,
    ) -> Result<Self, TraverseError> {
        Self::with_order(tree, root, TraversalOrder::Backward { use_z_order })
    }

    /// Traversal with an explicit [`TraversalOrder`].
    ///
    /// Fails with [`TraverseError::InvalidRoot`] if `root` is not part of `tree`.
    pub fn with_order(
        tree: &'t T,
        root: T::Element,
        order: TraversalOrder,
    ) -> Result<Self, TraverseError> {
        if !tree.contains(&root) {
            log::debug!("Traversal: root rejected by tree");
            return Err(TraverseError::InvalidRoot);
        }
        log::debug!("Traversal: start {order:?}");
        Ok(Self {
            tree,
            order,
            pending: vec![TraversalNode::root(root)],
            scratch: Vec::new(),
        })
    }

    /// The ordering policy fixed at construction.
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Number of discovered but not yet visited nodes.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every node has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    /// Visit nodes until the traversal is exhausted or `visit` returns [`Outcome::Stop`].
    ///
    /// `visit` receives the element, its level, and its inherited bounding rect.
    /// A stop takes effect once `visit` returns; the remaining frontier is kept,
    /// so a later [`Iterator::next`] continues where the walk left off.
    pub fn for_each_node<F>(&mut self, mut visit: F) -> Completion
    where
        F: FnMut(&T::Element, usize, Option<Rect>) -> Outcome,
    {
        while let Some(node) = self.next() {
            if visit(&node.element, node.level, node.bounding_rect) == Outcome::Stop {
                log::debug!(
                    "Traversal: stopped at level {}, {} pending",
                    node.level,
                    self.pending.len()
                );
                return Completion::Stopped;
            }
        }
        Completion::Exhausted
    }

    fn expand(&mut self, current: &TraversalNode<T::Element>) {
        self.scratch.clear();
        self.tree.children(&current.element, self.order.uses_z_order(), &mut self.scratch);
        if self.scratch.is_empty() {
            return;
        }
        let level = current.level + 1;
        let bounding_rect = propagate(self.tree, current);
        log::trace!(
            "Traversal: expand level {} into {} children, rect {:?}",
            current.level,
            self.scratch.len(),
            bounding_rect
        );
        let wrap = |element| TraversalNode {
            element,
            level,
            bounding_rect,
        };
        // The stack top is the end of `pending`: the child pushed last is visited first.
        if self.order.is_reversed() {
            self.pending.extend(self.scratch.drain(..).map(wrap));
        } else {
            self.pending.extend(self.scratch.drain(..).rev().map(wrap));
        }
    }
}

impl<T: ElementTree + ?Sized> Iterator for Traversal<'_, T> {
    type Item = TraversalNode<T::Element>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.pop()?;
        self.expand(&current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), None)
    }
}

impl<T: ElementTree + ?Sized> FusedIterator for Traversal<'_, T> {}
