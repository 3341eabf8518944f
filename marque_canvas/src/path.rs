// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reusable vector path drawn as a hairline overlay.

use kurbo::BezPath;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// A prebuilt model-space path (bezier outline, selection preview, ...).
///
/// Unlike the point-based shapes, the path is not transformed point by
/// point: the view transform is pushed onto the surface's own transform
/// stack and the path appended under it. The stroke happens *after* the
/// transform is restored, so the outline stays one device pixel wide at
/// any zoom.
#[derive(Debug)]
pub struct Path {
    core: ItemCore,
    path: BezPath,
}

impl Path {
    /// Creates an item for a model-space path.
    #[must_use]
    pub fn new(path: BezPath) -> Self {
        Self {
            core: ItemCore::new(),
            path,
        }
    }

    /// The model-space path.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Replaces the path.
    pub fn set_path(&mut self, view: &CanvasView, path: BezPath) {
        if self.path != path {
            self.begin_change(view);
            self.path = path;
            self.end_change(view);
        }
    }
}

impl CanvasItem for Path {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        if self.path.elements().is_empty() {
            return;
        }
        let (offset_x, offset_y) = view.offset();
        let (scale_x, scale_y) = view.scale();

        surface.save();
        surface.translate(-offset_x, -offset_y);
        surface.scale(scale_x, scale_y);
        surface.append_path(&self.path);
        surface.restore();

        // Stroking outside the transform keeps the line width in device
        // pixels.
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        if self.path.elements().is_empty() {
            return None;
        }
        let device = view.to_device_rect(self.path.control_box());
        Some(Region::from_rect(RectI::from_outward(device.inflate(1.5, 1.5))))
    }
}

#[cfg(test)]
mod tests {
    use super::Path;
    use crate::item::CanvasItem;
    use kurbo::BezPath;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    fn diagonal() -> BezPath {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 50.0));
        path
    }

    #[test]
    fn draws_through_the_live_transform_stack() {
        let mut view = CanvasView::new();
        view.set_scale(2.0, 2.0);
        view.set_offset(30.0, 0.0);

        let item = Path::new(diagonal());
        let mut surface = RecordingSurface::new();
        item.draw(&view, &mut surface);

        let ops = surface.ops();
        let translate = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Translate { dx, dy } if *dx == -30.0 && *dy == 0.0))
            .expect("view offset pushed");
        let scale = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Scale { sx, sy } if *sx == 2.0 && *sy == 2.0))
            .expect("view scale pushed");
        let append = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::AppendPath { .. }))
            .expect("path appended");
        let restore = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Restore))
            .expect("transform popped");
        let stroke = ops
            .iter()
            .position(|op| matches!(op, SurfaceOp::Stroke))
            .expect("stroked");

        assert!(translate < scale && scale < append);
        assert!(append < restore && restore < stroke, "hairline stroke after restore");
    }

    #[test]
    fn empty_path_has_no_extents_and_draws_nothing() {
        let view = CanvasView::new();
        let item = Path::new(BezPath::new());

        assert!(item.extents(&view).is_none());
        let mut surface = RecordingSurface::new();
        item.draw(&view, &mut surface);
        assert_eq!(surface.ops().len(), 2, "just the draw() bracket");
    }

    #[test]
    fn extents_scale_with_the_view() {
        let mut view = CanvasView::new();
        view.set_scale(2.0, 2.0);

        let item = Path::new(diagonal());
        let extents = item.extents(&view).expect("non-empty path").extents();
        assert!(extents.width >= 200);
        assert!(extents.height >= 100);
    }
}
