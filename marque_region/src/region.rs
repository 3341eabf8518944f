// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::RectI;

/// A set of device pixels stored as pairwise disjoint rectangles.
///
/// The rectangle list is an implementation detail: callers should treat a
/// `Region` as an opaque pixel set. Equality compares coverage, not
/// decomposition, so `A == B` whenever the two regions damage the same
/// pixels.
///
/// Most damage regions are one or two rectangles (an item's before/after
/// extents), so rectangles live inline until the set grows.
#[derive(Clone, Debug, Default)]
pub struct Region {
    rects: SmallVec<[RectI; 4]>,
}

impl Region {
    /// Creates an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region covering a single rectangle.
    ///
    /// An empty rectangle produces an empty region.
    #[must_use]
    pub fn from_rect(rect: RectI) -> Self {
        let mut region = Self::new();
        region.union_rect(rect);
        region
    }

    /// Returns `true` if the region covers no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Number of rectangles in the current decomposition.
    #[must_use]
    pub fn num_rects(&self) -> usize {
        self.rects.len()
    }

    /// Iterates over the disjoint rectangles of the current decomposition.
    pub fn iter(&self) -> impl Iterator<Item = RectI> + '_ {
        self.rects.iter().copied()
    }

    /// Bounding rectangle of the region, [`RectI::ZERO`] when empty.
    #[must_use]
    pub fn extents(&self) -> RectI {
        self.rects
            .iter()
            .fold(RectI::ZERO, |acc, r| acc.union_bounds(*r))
    }

    /// Returns `true` if the pixel at `(x, y)` is covered.
    #[must_use]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Adds a rectangle to the region.
    ///
    /// Parts of `rect` already covered are split away first, so stored
    /// rectangles stay disjoint.
    pub fn union_rect(&mut self, rect: RectI) {
        if rect.is_empty() {
            return;
        }
        let mut fragments: SmallVec<[RectI; 4]> = SmallVec::new();
        fragments.push(rect);
        for existing in &self.rects {
            let mut remaining: SmallVec<[RectI; 4]> = SmallVec::new();
            for fragment in fragments.drain(..) {
                split_around(fragment, *existing, |piece| remaining.push(piece));
            }
            fragments = remaining;
            if fragments.is_empty() {
                return;
            }
        }
        self.rects.extend(fragments);
    }

    /// Adds every rectangle of another region.
    pub fn union(&mut self, other: &Self) {
        for rect in other.iter() {
            self.union_rect(rect);
        }
    }

    /// Removes a rectangle from the region.
    pub fn subtract_rect(&mut self, rect: RectI) {
        if rect.is_empty() || self.rects.is_empty() {
            return;
        }
        let old = core::mem::take(&mut self.rects);
        for existing in old {
            split_around(existing, rect, |piece| self.rects.push(piece));
        }
    }

    /// Removes every rectangle of another region.
    pub fn subtract(&mut self, other: &Self) {
        for rect in other.iter() {
            self.subtract_rect(rect);
        }
    }

    /// Translates the whole region by a pixel delta.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for rect in &mut self.rects {
            *rect = rect.translate(dx, dy);
        }
    }

    /// Returns `true` if both regions cover exactly the same pixels.
    #[must_use]
    pub fn covers_same_area(&self, other: &Self) -> bool {
        let mut a = self.clone();
        a.subtract(other);
        if !a.is_empty() {
            return false;
        }
        let mut b = other.clone();
        b.subtract(self);
        b.is_empty()
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.covers_same_area(other)
    }
}

impl Eq for Region {}

impl From<RectI> for Region {
    fn from(rect: RectI) -> Self {
        Self::from_rect(rect)
    }
}

/// Pushes the parts of `rect` not covered by `clip`: a strip above, a strip
/// below, and the left/right remainders of the middle band. Up to four
/// pieces, all within `rect`.
fn split_around(rect: RectI, clip: RectI, mut push: impl FnMut(RectI)) {
    let Some(overlap) = rect.intersect(clip) else {
        push(rect);
        return;
    };

    let push_edges = |x0: i64, y0: i64, x1: i64, y1: i64, push: &mut dyn FnMut(RectI)| {
        if x1 > x0 && y1 > y0 {
            #[expect(clippy::cast_possible_truncation, reason = "edges lie within `rect`")]
            let piece = RectI::new(x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32);
            push(piece);
        }
    };

    let (rx0, ry0) = (i64::from(rect.x), i64::from(rect.y));
    let (rx1, ry1) = (rect.x1(), rect.y1());
    let (ox0, oy0) = (i64::from(overlap.x), i64::from(overlap.y));
    let (ox1, oy1) = (overlap.x1(), overlap.y1());

    push_edges(rx0, ry0, rx1, oy0, &mut push);
    push_edges(rx0, oy1, rx1, ry1, &mut push);
    push_edges(rx0, oy0, ox0, oy1, &mut push);
    push_edges(ox1, oy0, rx1, oy1, &mut push);
}
