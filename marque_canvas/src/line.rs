// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A straight line between two model-space points.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// A straight overlay line.
///
/// Endpoints are stored in model space exactly as set; device coordinates
/// are snapped to pixel centers at draw time so a 1-pixel stroke stays
/// crisp.
#[derive(Debug)]
pub struct Line {
    core: ItemCore,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Line {
    /// Creates a line between two model-space points.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            core: ItemCore::new(),
            x1,
            y1,
            x2,
            y2,
        }
    }

    /// The model-space endpoints, exactly as set.
    #[must_use]
    pub fn points(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Moves both endpoints.
    pub fn set_points(&mut self, view: &CanvasView, x1: f64, y1: f64, x2: f64, y2: f64) {
        if (self.x1, self.y1, self.x2, self.y2) != (x1, y1, x2, y2) {
            self.begin_change(view);
            self.x1 = x1;
            self.y1 = y1;
            self.x2 = x2;
            self.y2 = y2;
            self.end_change(view);
        }
    }

    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (x1, y1) = view.to_device(self.x1, self.y1);
        let (x2, y2) = view.to_device(self.x2, self.y2);
        (
            x1.floor() + 0.5,
            y1.floor() + 0.5,
            x2.floor() + 0.5,
            y2.floor() + 0.5,
        )
    }
}

impl CanvasItem for Line {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x1, y1, x2, y2) = self.transform(view);
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x1, y1, x2, y2) = self.transform(view);
        let rect = Rect::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)).inflate(1.5, 1.5);
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}

#[cfg(test)]
mod tests {
    use super::Line;
    use crate::item::CanvasItem;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    #[test]
    fn endpoints_roundtrip_untransformed() {
        let mut view = CanvasView::new();
        view.set_scale(7.5, 0.25);
        view.set_offset(13.0, -4.0);

        let mut line = Line::new(0.0, 0.0, 1.0, 1.0);
        line.set_points(&view, 1.25, -2.5, 300.0, 42.125);
        assert_eq!(line.points(), (1.25, -2.5, 300.0, 42.125));
    }

    #[test]
    fn device_points_snap_to_pixel_centers() {
        let mut view = CanvasView::new();
        view.set_scale(2.0, 2.0);

        let line = Line::new(1.2, 1.2, 5.7, 1.2);
        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);

        // 1.2 * 2 = 2.4 -> 2.5; 5.7 * 2 = 11.4 -> 11.5.
        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::MoveTo { x, y } if *x == 2.5 && *y == 2.5)),
            1
        );
        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::LineTo { x, y } if *x == 11.5 && *y == 2.5)),
            1
        );
    }

    #[test]
    fn extents_cover_both_endpoints_with_margin() {
        let view = CanvasView::new();
        let line = Line::new(10.0, 10.0, 20.0, 30.0);

        let region = line.extents(&view).expect("visible line");
        assert!(region.contains_point(10, 10));
        assert!(region.contains_point(20, 30));
        // Margin reaches just outside the endpoints.
        assert!(region.contains_point(9, 9));
        assert!(!region.contains_point(30, 30));
    }
}
