// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition guide overlays for a rectangle (rule of thirds, golden
//! sections, and friends).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Which composition guide to draw inside the rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GuidesKind {
    /// No guides at all; the item paints and damages nothing.
    None,
    /// One horizontal and one vertical center line.
    CenterLines,
    /// Rule-of-thirds lines.
    Thirds,
    /// Lines at every fifth.
    Fifths,
    /// Golden-section lines.
    Golden,
    /// The method of diagonals: 45-degree lines from each corner.
    Diagonals,
    /// `n_guides` evenly spaced lines in each direction.
    NLines,
    /// Spacing-based guides; line placement belongs to the editing tool,
    /// so the item only reserves damage for the rectangle.
    Spacing,
}

/// Composition guides clipped to a model-space rectangle.
#[derive(Debug)]
pub struct RectangleGuides {
    core: ItemCore,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    kind: GuidesKind,
    n_guides: u32,
}

impl RectangleGuides {
    /// Creates a guide overlay for a model-space rectangle.
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        kind: GuidesKind,
        n_guides: u32,
    ) -> Self {
        Self {
            core: ItemCore::new(),
            x,
            y,
            width,
            height,
            kind,
            n_guides,
        }
    }

    /// Updates the rectangle and guide kind in one change bracket.
    pub fn set(
        &mut self,
        view: &CanvasView,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        kind: GuidesKind,
        n_guides: u32,
    ) {
        let next = (x, y, width, height, kind, n_guides);
        if (self.x, self.y, self.width, self.height, self.kind, self.n_guides) != next {
            self.begin_change(view);
            (self.x, self.y, self.width, self.height, self.kind, self.n_guides) = next;
            self.end_change(view);
        }
    }

    /// Device corners `(x1, y1, x2, y2)`, normalized and snapped so the
    /// outermost guides share pixels with a rectangle outline.
    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (x1, y1) = view.to_device(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
        );
        let (x2, y2) = view.to_device(
            self.x.max(self.x + self.width),
            self.y.max(self.y + self.height),
        );
        let x1 = x1.floor() + 0.5;
        let y1 = y1.floor() + 0.5;
        let x2 = (x2.ceil() - 0.5).max(x1);
        let y2 = (y2.ceil() - 0.5).max(y1);
        (x1, y1, x2, y2)
    }
}

fn hline(surface: &mut dyn Surface, x1: f64, x2: f64, y: f64) {
    let y = y.floor() + 0.5;
    surface.move_to(x1, y);
    surface.line_to(x2, y);
}

fn vline(surface: &mut dyn Surface, y1: f64, y2: f64, x: f64) {
    let x = x.floor() + 0.5;
    surface.move_to(x, y1);
    surface.line_to(x, y2);
}

impl CanvasItem for RectangleGuides {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x1, y1, x2, y2) = self.transform(view);

        match self.kind {
            GuidesKind::None | GuidesKind::Spacing => {}

            GuidesKind::CenterLines => {
                hline(surface, x1, x2, (y1 + y2) / 2.0);
                vline(surface, y1, y2, (x1 + x2) / 2.0);
            }

            GuidesKind::Thirds => {
                hline(surface, x1, x2, (2.0 * y1 + y2) / 3.0);
                hline(surface, x1, x2, (y1 + 2.0 * y2) / 3.0);
                vline(surface, y1, y2, (2.0 * x1 + x2) / 3.0);
                vline(surface, y1, y2, (x1 + 2.0 * x2) / 3.0);
            }

            GuidesKind::Fifths => {
                for i in 0..5 {
                    let t = f64::from(i);
                    hline(surface, x1, x2, y1 + t * (y2 - y1) / 5.0);
                    vline(surface, y1, y2, x1 + t * (x2 - x1) / 5.0);
                }
            }

            GuidesKind::Golden => {
                let sqrt5 = 5.0_f64.sqrt();
                hline(surface, x1, x2, (2.0 * y1 + (1.0 + sqrt5) * y2) / (3.0 + sqrt5));
                hline(surface, x1, x2, ((1.0 + sqrt5) * y1 + 2.0 * y2) / (3.0 + sqrt5));
                vline(surface, y1, y2, (2.0 * x1 + (1.0 + sqrt5) * x2) / (3.0 + sqrt5));
                vline(surface, y1, y2, ((1.0 + sqrt5) * x1 + 2.0 * x2) / (3.0 + sqrt5));
            }

            GuidesKind::Diagonals => {
                // The side of the largest square that fits the rectangle
                // whole; diagonals run at 45 degrees from each corner.
                let side = (x2 - x1).min(y2 - y1);

                surface.move_to(x1, y1);
                surface.line_to(x1 + side, y1 + side);

                surface.move_to(x2, y1);
                surface.line_to(x2 - side, y1 + side);

                surface.move_to(x1, y2);
                surface.line_to(x1 + side, y2 - side);

                surface.move_to(x2, y2);
                surface.line_to(x2 - side, y2 - side);
            }

            GuidesKind::NLines => {
                let n = self.n_guides.max(1);
                for i in 0..n {
                    let t = f64::from(i);
                    hline(surface, x1, x2, y1 + t * (y2 - y1) / f64::from(n));
                    vline(surface, y1, y2, x1 + t * (x2 - x1) / f64::from(n));
                }
            }
        }

        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        if self.kind == GuidesKind::None {
            return None;
        }
        let (x1, y1, x2, y2) = self.transform(view);
        let rect = Rect::new(x1, y1, x2, y2).inflate(1.5, 1.5);
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}
