// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand pen strokes in a caller-chosen color.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use marque_imaging::{Color, LineCap, Surface};
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// A pen stroke: a polyline with its own color and width.
///
/// The pen is the one stroke shape that does not use the two-pass tool
/// style; it paints a single pass in the stroke's own color, with round
/// caps so segments join smoothly. The width is in device pixels.
#[derive(Debug)]
pub struct Pen {
    core: ItemCore,
    points: Vec<Point>,
    color: Color,
    pen_width: f64,
}

impl Pen {
    /// Creates a pen stroke over model-space points.
    #[must_use]
    pub fn new(points: Vec<Point>, color: Color, pen_width: f64) -> Self {
        let mut core = ItemCore::new();
        core.line_cap = LineCap::Round;
        Self {
            core,
            points,
            color,
            pen_width,
        }
    }

    /// The model-space points, exactly as set.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the stroked points.
    pub fn set_points(&mut self, view: &CanvasView, points: Vec<Point>) {
        if self.points != points {
            self.begin_change(view);
            self.points = points;
            self.end_change(view);
        }
    }
}

impl CanvasItem for Pen {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let [first, rest @ ..] = self.points.as_slice() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let (x, y) = view.to_device(first.x, first.y);
        surface.move_to(x, y);
        for point in rest {
            let (x, y) = view.to_device(point.x, point.y);
            surface.line_to(x, y);
        }
        self.stroke(surface);
    }

    /// Single-pass paint in the pen's own color and width.
    fn stroke_shape(&self, surface: &mut dyn Surface) {
        surface.set_line_cap(self.core.line_cap);
        surface.set_line_width(self.pen_width);
        surface.set_color(self.color);
        surface.stroke();
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let mut vertices = self.points.iter().map(|p| view.to_device(p.x, p.y));
        let (x, y) = vertices.next()?;
        let mut bounds = Rect::new(x, y, x, y);
        for (x, y) in vertices {
            bounds = bounds.union_pt(Point::new(x, y));
        }
        let margin = self.pen_width / 2.0 + 2.0;
        Some(Region::from_rect(RectI::from_outward(
            bounds.inflate(margin, margin),
        )))
    }
}
