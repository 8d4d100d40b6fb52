// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side collaborators: child enumeration and the view-like capability.
//!
//! ## Overview
//!
//! The traversal never looks inside an element. It asks the host for an
//! element's immediate children through [`ElementTree::children`], and for the
//! geometry of view-like elements through [`ElementTree::view`].
//! Elements without a view report `None` and reset bounding-rect accumulation
//! for everything beneath them.

use alloc::vec::Vec;

use kurbo::Rect;

/// Geometry of a view-like element: a frame, a clip flag, and an enclosing container.
///
/// Returned by [`ElementTree::view`] and consulted by
/// [`propagate`](crate::propagate()).
pub trait ViewLike {
    /// Frame of the view, in its enclosing container's coordinate space.
    fn frame(&self) -> Rect;

    /// Whether the view clips its contents to its bounds.
    fn clips_to_bounds(&self) -> bool;

    /// Whether the view has an enclosing container.
    ///
    /// A view without one is the root of the visual hierarchy.
    fn has_container(&self) -> bool;

    /// Convert `rect` from the enclosing container's coordinate space into the
    /// view's own coordinate space.
    ///
    /// Must be well-defined when [`has_container`](Self::has_container) is false.
    fn convert_from_container(&self, rect: Rect) -> Rect;
}

/// A live element tree that can be walked by [`Traversal`](crate::Traversal).
///
/// The tree must be a strict hierarchy; cycles are neither detected nor supported.
/// It must stay unchanged for the duration of a traversal, which the shared
/// borrow held by the traversal enforces.
pub trait ElementTree {
    /// Handle to an element. Usually a small `Copy` id.
    type Element: Clone;

    /// View-like accessor returned by [`ElementTree::view`].
    type View<'a>: ViewLike
    where
        Self: 'a;

    /// Append the immediate children of `element` to `out`.
    ///
    /// Order must be deterministic for a fixed tree. When `use_z_order` is
    /// true, siblings are ordered by stacking depth (bottom-most first)
    /// instead of declaration order.
    fn children(&self, element: &Self::Element, use_z_order: bool, out: &mut Vec<Self::Element>);

    /// The view-like capability of `element`, or `None` if it is not a view.
    fn view(&self, element: &Self::Element) -> Option<Self::View<'_>>;

    /// Whether `element` belongs to this tree.
    ///
    /// Checked once for the traversal root. Hosts with generational handles
    /// should reject stale ones here.
    fn contains(&self, element: &Self::Element) -> bool {
        let _ = element;
        true
    }
}

impl<T: ElementTree + ?Sized> ElementTree for &T {
    type Element = T::Element;
    type View<'a>
        = T::View<'a>
    where
        Self: 'a;

    #[inline]
    fn children(&self, element: &Self::Element, use_z_order: bool, out: &mut Vec<Self::Element>) {
        (**self).children(element, use_z_order, out);
    }

    #[inline]
    fn view(&self, element: &Self::Element) -> Option<Self::View<'_>> {
        (**self).view(element)
    }

    #[inline]
    fn contains(&self, element: &Self::Element) -> bool {
        (**self).contains(element)
    }
}
