// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: traversal nodes, ordering policy, visitor outcomes, and errors.

use core::fmt;

use kurbo::Rect;

/// One visited element, with its depth and inherited visible rectangle.
///
/// Produced by [`Traversal`](crate::Traversal) in depth-first order.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversalNode<E> {
    /// Host handle of the visited element.
    pub element: E,
    /// Depth from the traversal root (root = 0).
    pub level: usize,
    /// Visible rectangle inherited from view-like ancestors, in the coordinate
    /// space of the element's enclosing container.
    ///
    /// `None` means no clipping constraint has been established (unbounded),
    /// either because no clipping ancestor exists yet or because a non-view
    /// element above reset the accumulation.
    pub bounding_rect: Option<Rect>,
}

impl<E> TraversalNode<E> {
    /// A root node: level 0 and no inherited rectangle.
    pub fn root(element: E) -> Self {
        Self {
            element,
            level: 0,
            bounding_rect: None,
        }
    }
}

/// Order in which siblings are consumed.
///
/// Fixed when a [`Traversal`](crate::Traversal) is constructed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TraversalOrder {
    /// Pre-order, first child first, in the host's declaration order.
    #[default]
    Forward,
    /// Last child first, so that the topmost drawn sibling is visited first.
    Backward {
        /// Ask the host for stacking order instead of declaration order.
        ///
        /// Only meaningful when siblings can overlap visually.
        use_z_order: bool,
    },
}

impl TraversalOrder {
    /// Whether children are consumed last-first.
    #[inline]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Backward { .. })
    }

    /// Whether child enumeration requests stacking order.
    #[inline]
    pub const fn uses_z_order(self) -> bool {
        match self {
            Self::Forward => false,
            Self::Backward { use_z_order } => use_z_order,
        }
    }
}

/// Visitor result controlling a walk.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Keep walking.
    Continue,
    /// Stop after the current node; nothing further is produced or expanded.
    Stop,
}

/// How [`Traversal::for_each_node`](crate::Traversal::for_each_node) ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Every pending node was visited.
    Exhausted,
    /// The visitor returned [`Outcome::Stop`]; the remaining frontier is intact.
    Stopped,
}

/// Errors reported when a traversal is set up with invalid arguments.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TraverseError {
    /// The root handle is not part of the element tree (for example a stale id).
    InvalidRoot,
}

impl fmt::Display for TraverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot => {
                f.write_str("invalid argument: root is not an element of the tree")
            }
        }
    }
}

impl core::error::Error for TraverseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn order_flags() {
        assert!(!TraversalOrder::Forward.is_reversed());
        assert!(!TraversalOrder::Forward.uses_z_order());
        let back = TraversalOrder::Backward { use_z_order: true };
        assert!(back.is_reversed());
        assert!(back.uses_z_order());
        let back_plain = TraversalOrder::Backward { use_z_order: false };
        assert!(back_plain.is_reversed());
        assert!(!back_plain.uses_z_order());
    }

    #[test]
    fn default_order_is_forward() {
        assert_eq!(TraversalOrder::default(), TraversalOrder::Forward);
    }

    #[test]
    fn root_node_is_unbounded() {
        let n = TraversalNode::root(7_u32);
        assert_eq!(n.level, 0);
        assert_eq!(n.bounding_rect, None, "root starts without a clip");
    }

    #[test]
    fn error_message_mentions_invalid_argument() {
        let msg = TraverseError::InvalidRoot.to_string();
        assert!(msg.starts_with("invalid argument"), "got {msg}");
    }
}
