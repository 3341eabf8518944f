// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document guides: horizontal or vertical lines spanning the viewport.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Direction of a guide line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GuideOrientation {
    /// A horizontal line at a model-space y position.
    Horizontal,
    /// A vertical line at a model-space x position.
    Vertical,
}

/// A guide line pinned to one model-space coordinate.
///
/// The line always spans the full viewport along its orientation; only
/// the cross coordinate comes from the document. The active guide (the
/// one under the pointer during a drag) is drawn dashed.
#[derive(Debug)]
pub struct Guide {
    core: ItemCore,
    orientation: GuideOrientation,
    position: f64,
    active: bool,
}

impl Guide {
    /// Creates a guide at a model-space position.
    #[must_use]
    pub fn new(orientation: GuideOrientation, position: f64) -> Self {
        Self {
            core: ItemCore::new(),
            orientation,
            position,
            active: false,
        }
    }

    /// The guide's model-space position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// The guide's orientation.
    #[must_use]
    pub fn orientation(&self) -> GuideOrientation {
        self.orientation
    }

    /// Moves the guide.
    pub fn set_position(&mut self, view: &CanvasView, position: f64) {
        if self.position != position {
            self.begin_change(view);
            self.position = position;
            self.end_change(view);
        }
    }

    /// Marks the guide as the one being dragged.
    pub fn set_active(&mut self, view: &CanvasView, active: bool) {
        if self.active != active {
            self.begin_change(view);
            self.active = active;
            self.end_change(view);
        }
    }

    /// The guide's device line as `(x1, y1, x2, y2)`, snapped to the
    /// pixel center across the stroke.
    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (vw, vh) = view.viewport_size();
        match self.orientation {
            GuideOrientation::Horizontal => {
                let (_, y) = view.to_device(0.0, self.position);
                let y = y.floor() + 0.5;
                (0.0, y, f64::from(vw), y)
            }
            GuideOrientation::Vertical => {
                let (x, _) = view.to_device(self.position, 0.0);
                let x = x.floor() + 0.5;
                (x, 0.0, x, f64::from(vh))
            }
        }
    }
}

impl CanvasItem for Guide {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x1, y1, x2, y2) = self.transform(view);
        if self.active {
            surface.set_dash(&[3.0, 3.0], 0.0);
        }
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x1, y1, x2, y2) = self.transform(view);
        let rect = Rect::new(x1, y1, x2, y2).inflate(1.5, 1.5);
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Guide, GuideOrientation};
    use crate::item::CanvasItem;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    fn view() -> CanvasView {
        let mut view = CanvasView::new();
        view.set_viewport_size(800, 600);
        view
    }

    #[test]
    fn horizontal_guide_spans_the_viewport() {
        let view = view();
        let guide = Guide::new(GuideOrientation::Horizontal, 100.0);

        let mut surface = RecordingSurface::new();
        guide.draw(&view, &mut surface);

        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::MoveTo { x, y } if *x == 0.0 && *y == 100.5)),
            1
        );
        assert_eq!(
            surface
                .count(|op| matches!(op, SurfaceOp::LineTo { x, y } if *x == 800.0 && *y == 100.5)),
            1
        );
    }

    #[test]
    fn vertical_guide_extents_are_a_thin_strip() {
        let view = view();
        let guide = Guide::new(GuideOrientation::Vertical, 50.0);

        let region = guide.extents(&view).expect("visible guide");
        let extents = region.extents();
        assert!(extents.width <= 4);
        assert!(extents.height >= 600);
        assert!(region.contains_point(50, 300));
    }

    #[test]
    fn active_guide_draws_dashed() {
        let view = view();
        let mut guide = Guide::new(GuideOrientation::Horizontal, 10.0);
        guide.set_active(&view, true);

        let mut surface = RecordingSurface::new();
        guide.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Dash { .. })), 1);
    }
}
