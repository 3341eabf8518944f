// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dashed rectangle marking the active layer's edges.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Dash pattern of the boundary outline.
const DASH: [f64; 2] = [4.0, 4.0];

/// The layer-boundary rectangle.
///
/// A plain dashed outline around the layer's model-space rectangle;
/// negative sizes are normalized at draw time so interactive resizes can
/// pass through unnormalized rects.
#[derive(Debug)]
pub struct LayerBoundary {
    core: ItemCore,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl LayerBoundary {
    /// Creates a boundary for a model-space rectangle.
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

    /// The model-space rectangle, exactly as set.
    #[must_use]
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Moves the boundary to a new rectangle.
    pub fn set(&mut self, view: &CanvasView, x: f64, y: f64, width: f64, height: f64) {
        if (self.x, self.y, self.width, self.height) != (x, y, width, height) {
            self.begin_change(view);
            self.x = x;
            self.y = y;
            self.width = width;
            self.height = height;
            self.end_change(view);
        }
    }

    /// Device corners, normalized and snapped for a crisp outline.
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

impl CanvasItem for LayerBoundary {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x1, y1, x2, y2) = self.transform(view);
        surface.set_dash(&DASH, 0.0);
        surface.rect(x1, y1, x2 - x1, y2 - y1);
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x1, y1, x2, y2) = self.transform(view);
        let rect = Rect::new(x1, y1, x2, y2).inflate(1.5, 1.5);
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}
