// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle helpers shared by the propagator and the reference tree.

use kurbo::{Affine, Rect};

/// Intersect two axis-aligned rectangles.
///
/// Returns `None` when the rectangles do not overlap. Rectangles that only
/// share an edge produce a zero-area rectangle rather than `None`.
/// Inputs are normalized first, so inverted rectangles behave like their
/// positive-extent counterparts.
pub fn intersect(a: Rect, b: Rect) -> Option<Rect> {
    let (a, b) = (a.abs(), b.abs());
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1);
    let y1 = a.y1.min(b.y1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some(Rect::new(x0, y0, x1, y1))
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box in the target space.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    let min_x = (a * rect.x0).min(a * rect.x1) + (c * rect.y0).min(c * rect.y1);
    let max_x = (a * rect.x0).max(a * rect.x1) + (c * rect.y0).max(c * rect.y1);
    let min_y = (b * rect.x0).min(b * rect.x1) + (d * rect.y0).min(d * rect.y1);
    let max_y = (b * rect.x0).max(b * rect.x1) + (d * rect.y0).max(d * rect.y1);
    Rect::new(min_x + e, min_y + f, max_x + e, max_y + f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 20.0, 20.0);
        assert_eq!(intersect(a, b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert_eq!(intersect(a, b), intersect(b, a), "intersection is symmetric");
    }

    #[test]
    fn disjoint_rects_have_no_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 30.0, 10.0);
        assert_eq!(intersect(a, b), None);
        let below = Rect::new(0.0, 11.0, 10.0, 12.0);
        assert_eq!(intersect(a, below), None, "vertical separation is disjoint");
    }

    #[test]
    fn touching_edges_yield_zero_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        let r = intersect(a, b).expect("shared edge is not disjoint");
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 10.0);
    }

    #[test]
    fn inverted_input_is_normalized() {
        let a = Rect::new(10.0, 10.0, 0.0, 0.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(intersect(a, b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn translate_moves_bbox() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        let moved = transform_rect_bbox(Affine::translate(Vec2::new(3.0, 4.0)), r);
        assert_eq!(moved, Rect::new(3.0, 4.0, 13.0, 9.0));
    }

    #[test]
    fn scale_with_flip_stays_normalized() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        let flipped = transform_rect_bbox(Affine::scale_non_uniform(-1.0, 2.0), r);
        assert_eq!(flipped, Rect::new(-10.0, 0.0, 0.0, 10.0));
    }
}
