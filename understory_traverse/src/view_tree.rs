// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory element tree implementing [`ElementTree`].
//!
//! [`ViewTree`] mixes view-like elements (with bounds, a transform, and an
//! optional clip) and plain elements (grouping or semantic nodes with no
//! geometry of their own). It is enough to drive the traversal end to end and
//! serves as a template for host adapters.

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::{Affine, Rect};

use crate::element::{ElementTree, ViewLike};
use crate::geometry::transform_rect_bbox;

/// Identifier for an element in a [`ViewTree`] (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32, u32);

impl ElementId {
    fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Element capabilities.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is view-like: it has a frame and participates in clip accumulation.
        const VIEW            = 0b0000_0001;
        /// View clips its contents to its bounds. Ignored without [`Self::VIEW`].
        const CLIPS_TO_BOUNDS = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VIEW
    }
}

/// Per-element data supplied by the host.
#[derive(Clone, Debug)]
pub struct ElementDesc {
    /// Bounds in the element's own coordinate space.
    pub bounds: Rect,
    /// Maps the element's own space into its container's space.
    ///
    /// A singular transform (for example a view scaled to zero) collapses the
    /// frame; rects passed down through it are left unconverted.
    pub transform: Affine,
    /// Stacking order among siblings. Higher is drawn on top.
    pub z_index: i32,
    /// Capability flags.
    pub flags: ElementFlags,
}

impl Default for ElementDesc {
    fn default() -> Self {
        Self {
            bounds: Rect::ZERO,
            transform: Affine::IDENTITY,
            z_index: 0,
            flags: ElementFlags::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    desc: ElementDesc,
}

/// Arena-backed element tree.
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Whether the tree has no live elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new element as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` inserts the element as a root.
    pub fn insert(&mut self, parent: Option<ElementId>, desc: ElementDesc) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.slots.push(None);
            self.generations.push(1);
            (self.slots.len() - 1, 1)
        };
        self.slots[idx] = Some(Slot {
            generation,
            parent: None,
            children: Vec::new(),
            desc,
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let id = ElementId::new(idx as u32, generation);
        if let Some(p) = parent.filter(|p| self.is_alive(*p)) {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove an element and its subtree.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.slot(id).parent {
            self.unlink_parent(id, parent);
        }
        let mut stack = alloc::vec![id];
        while let Some(cur) = stack.pop() {
            if let Some(slot) = self.slots[cur.idx()].take() {
                stack.extend(slot.children);
                self.free_list.push(cur.idx());
            }
        }
    }

    /// Move `id` to the end of `new_parent`'s children (or make it a root).
    ///
    /// Ignored if either id is stale or if `new_parent` lies inside `id`'s subtree.
    pub fn reparent(&mut self, id: ElementId, new_parent: Option<ElementId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.is_ancestor_or_self(id, p))
        {
            log::debug!("ViewTree::reparent: rejected {id:?} under {p:?}");
            return;
        }
        if let Some(parent) = self.slot(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .is_some_and(|s| s.generation == id.1)
    }

    /// Parent of `id`, if it is live and not a root.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.slot_opt(id)?.parent
    }

    /// Children of `id` in insertion order; empty for stale ids.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.slot_opt(id)
            .map(|s| s.children.as_slice())
            .unwrap_or_default()
    }

    /// Element data, if `id` is live.
    pub fn desc(&self, id: ElementId) -> Option<&ElementDesc> {
        self.slot_opt(id).map(|s| &s.desc)
    }

    /// Frame of `id` in its container's space (transformed bounds).
    pub fn frame(&self, id: ElementId) -> Option<Rect> {
        self.desc(id).map(|d| transform_rect_bbox(d.transform, d.bounds))
    }

    /// Update bounds.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(s) = self.slot_opt_mut(id) {
            s.desc.bounds = bounds;
        }
    }

    /// Update the own-to-container transform.
    pub fn set_transform(&mut self, id: ElementId, transform: Affine) {
        if let Some(s) = self.slot_opt_mut(id) {
            s.desc.transform = transform;
        }
    }

    /// Update z index.
    pub fn set_z_index(&mut self, id: ElementId, z: i32) {
        if let Some(s) = self.slot_opt_mut(id) {
            s.desc.z_index = z;
        }
    }

    /// Update capability flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(s) = self.slot_opt_mut(id) {
            s.desc.flags = flags;
        }
    }

    // --- internals ---

    fn slot(&self, id: ElementId) -> &Slot {
        self.slots[id.idx()].as_ref().expect("dangling ElementId")
    }

    fn slot_mut(&mut self, id: ElementId) -> &mut Slot {
        self.slots[id.idx()].as_mut().expect("dangling ElementId")
    }

    fn slot_opt(&self, id: ElementId) -> Option<&Slot> {
        let s = self.slots.get(id.idx())?.as_ref()?;
        (s.generation == id.1).then_some(s)
    }

    fn slot_opt_mut(&mut self, id: ElementId) -> Option<&mut Slot> {
        let s = self.slots.get_mut(id.idx())?.as_mut()?;
        if s.generation != id.1 {
            return None;
        }
        Some(s)
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        self.slot_mut(parent).children.push(id);
        self.slot_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        self.slot_mut(parent).children.retain(|c| *c != id);
        self.slot_mut(id).parent = None;
    }

    fn is_ancestor_or_self(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(p) => id = p,
                None => return false,
            }
        }
    }
}

/// View-like accessor for a [`ViewTree`] element carrying [`ElementFlags::VIEW`].
#[derive(Clone, Copy, Debug)]
pub struct ViewRef<'a> {
    desc: &'a ElementDesc,
    has_container: bool,
}

impl ViewLike for ViewRef<'_> {
    fn frame(&self) -> Rect {
        transform_rect_bbox(self.desc.transform, self.desc.bounds)
    }

    fn clips_to_bounds(&self) -> bool {
        self.desc.flags.contains(ElementFlags::CLIPS_TO_BOUNDS)
    }

    fn has_container(&self) -> bool {
        self.has_container
    }

    fn convert_from_container(&self, rect: Rect) -> Rect {
        let transform = self.desc.transform;
        // A collapsed view has no inverse; leave the rect as the container sees it.
        if transform.determinant() == 0.0 {
            log::debug!("ViewRef: singular transform {transform:?}, rect left unconverted");
            return rect;
        }
        transform_rect_bbox(transform.inverse(), rect)
    }
}

impl ElementTree for ViewTree {
    type Element = ElementId;
    type View<'a> = ViewRef<'a>;

    fn children(&self, element: &ElementId, use_z_order: bool, out: &mut Vec<ElementId>) {
        let start = out.len();
        out.extend_from_slice(self.children_of(*element));
        if use_z_order {
            // Stable: equal z keeps declaration order.
            out[start..].sort_by_key(|c| self.desc(*c).map_or(0, |d| d.z_index));
        }
    }

    fn view(&self, element: &ElementId) -> Option<ViewRef<'_>> {
        let slot = self.slot_opt(*element)?;
        slot.desc.flags.contains(ElementFlags::VIEW).then_some(ViewRef {
            desc: &slot.desc,
            has_container: slot.parent.is_some(),
        })
    }

    fn contains(&self, element: &ElementId) -> bool {
        self.is_alive(*element)
    }
}
