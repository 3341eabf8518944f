// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The passe-partout: dims everything outside a window rectangle.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use marque_imaging::{Color, FillRule, Surface};
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Fill color of the dimmed surround.
const DIM: Color = Color::from_rgba8(0, 0, 0, 128);

/// A mask covering the viewport except for one window rectangle.
///
/// Drawn as an even-odd fill of the viewport with the window as the odd
/// sub-path, so only the surround is painted. The damage region is the
/// viewport minus the window; the window itself never repaints because
/// of this item.
#[derive(Debug)]
pub struct PassePartout {
    core: ItemCore,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl PassePartout {
    /// Creates a passe-partout around a model-space window.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            core: ItemCore::new(),
            x,
            y,
            width,
            height,
        }
    }

    /// The model-space window rectangle.
    #[must_use]
    pub fn window(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Moves the window.
    pub fn set_window(&mut self, view: &CanvasView, x: f64, y: f64, width: f64, height: f64) {
        if (self.x, self.y, self.width, self.height) != (x, y, width, height) {
            self.begin_change(view);
            self.x = x;
            self.y = y;
            self.width = width;
            self.height = height;
            self.end_change(view);
        }
    }

    /// The window's device corners, normalized.
    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (x1, y1) = view.to_device(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
        );
        let (x2, y2) = view.to_device(
            self.x.max(self.x + self.width),
            self.y.max(self.y + self.height),
        );
        (x1, y1, x2, y2)
    }

    /// The window rounded *inward*, so the damage ring stays conservative
    /// at fractional zoom.
    fn window_rect_int(&self, view: &CanvasView) -> RectI {
        let (x1, y1, x2, y2) = self.transform(view);
        let x = x1.ceil();
        let y = y1.ceil();
        RectI::from_outward(kurbo::Rect::new(x, y, x2.floor().max(x), y2.floor().max(y)))
    }
}

impl CanvasItem for PassePartout {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (vw, vh) = view.viewport_size();
        let (x1, y1, x2, y2) = self.transform(view);

        surface.rect(0.0, 0.0, f64::from(vw), f64::from(vh));
        surface.rect(x1, y1, x2 - x1, y2 - y1);
        surface.set_fill_rule(FillRule::EvenOdd);
        self.fill(surface);
    }

    /// Dimmed fill; the two-pass tool style would outline the window.
    fn fill_shape(&self, surface: &mut dyn Surface) {
        surface.set_color(DIM);
        surface.fill();
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (vw, vh) = view.viewport_size();
        let mut region = Region::from_rect(RectI::new(0, 0, vw, vh));
        region.subtract_rect(self.window_rect_int(view));
        if region.is_empty() { None } else { Some(region) }
    }
}

#[cfg(test)]
mod tests {
    use super::PassePartout;
    use crate::item::CanvasItem;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    fn view() -> CanvasView {
        let mut view = CanvasView::new();
        view.set_viewport_size(200, 100);
        view
    }

    #[test]
    fn damage_is_the_viewport_minus_the_window() {
        let view = view();
        let mask = PassePartout::new(50.0, 25.0, 100.0, 50.0);

        let region = mask.extents(&view).expect("surround is non-empty");
        assert!(region.contains_point(10, 10));
        assert!(region.contains_point(199, 99));
        assert!(!region.contains_point(100, 50), "window is not damaged");
    }

    #[test]
    fn draws_an_even_odd_fill_of_two_rects() {
        let view = view();
        let mask = PassePartout::new(50.0, 25.0, 100.0, 50.0);

        let mut surface = RecordingSurface::new();
        mask.draw(&view, &mut surface);

        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Rect { .. })), 2);
        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::FillRuleStyle { .. })),
            1
        );
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Fill)), 1);
        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::StrokePreserve)),
            0,
            "dim fill has no casing outline"
        );
    }

    #[test]
    fn window_covering_the_viewport_leaves_no_damage() {
        let view = view();
        let mask = PassePartout::new(0.0, 0.0, 200.0, 100.0);
        assert!(mask.extents(&view).is_none());
    }
}
