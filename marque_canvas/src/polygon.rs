// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A polyline or closed polygon over model-space vertices.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// A polygon (or open polyline) of model-space vertices.
///
/// The damage region is the union of a small box around every vertex,
/// not the bounding box of the stroked outline. That under-counts thick
/// strokes crossing long diagonal segments, but it is the region layout
/// and repaint have always agreed on, so changing it would change
/// observable repaint behavior. Kept as-is.
#[derive(Debug)]
pub struct Polygon {
    core: ItemCore,
    points: Vec<Point>,
    filled: bool,
}

impl Polygon {
    /// Creates a polygon from model-space vertices.
    ///
    /// With `filled` set the outline closes and paints as a fill.
    #[must_use]
    pub fn new(points: Vec<Point>, filled: bool) -> Self {
        Self {
            core: ItemCore::new(),
            points,
            filled,
        }
    }

    /// The model-space vertices, exactly as set.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces all vertices.
    pub fn set_points(&mut self, view: &CanvasView, points: Vec<Point>) {
        if self.points != points {
            self.begin_change(view);
            self.points = points;
            self.end_change(view);
        }
    }
}

impl CanvasItem for Polygon {
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
        if self.filled {
            surface.close_path();
            self.fill(surface);
        } else {
            self.stroke(surface);
        }
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        if self.points.is_empty() {
            return None;
        }
        let mut region = Region::new();
        for point in &self.points {
            let (x, y) = view.to_device(point.x, point.y);
            let vertex_box = Rect::new(x - 1.5, y - 1.5, x + 1.5, y + 1.5);
            region.union_rect(RectI::from_outward(vertex_box));
        }
        Some(region)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Polygon;
    use crate::item::CanvasItem;
    use kurbo::Point;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    #[test]
    fn extents_are_per_vertex_boxes_not_a_hull() {
        let view = CanvasView::new();
        let polygon = Polygon::new(
            vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
            false,
        );

        let region = polygon.extents(&view).expect("visible polygon");
        assert!(region.contains_point(0, 0));
        assert!(region.contains_point(100, 100));
        // The segment midpoint is deliberately not part of the damage.
        assert!(!region.contains_point(50, 50));
    }

    #[test]
    fn filled_polygon_closes_and_fills() {
        let view = CanvasView::new();
        let polygon = Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
            ],
            true,
        );

        let mut surface = RecordingSurface::new();
        polygon.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::ClosePath)), 1);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Fill)), 1);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 0);
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let view = CanvasView::new();
        let polygon = Polygon::new(vec![Point::new(5.0, 5.0)], false);

        let mut surface = RecordingSurface::new();
        polygon.draw(&view, &mut surface);
        // Only the draw() bracket.
        assert_eq!(surface.ops().len(), 2);
        // But a single vertex still damages its box.
        assert!(polygon.extents(&view).is_some());
    }
}
