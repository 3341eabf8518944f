// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color sample-point markers.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Radius of the marker circle in device pixels.
const RADIUS: f64 = 5.0;

/// Extra damage reserved to the south-east for the index label.
///
/// The numeric label is typeset by the hosting view next to the marker;
/// the item cannot measure it, so the extents are deliberately generous
/// enough for a couple of digits.
const LABEL_WIDTH: f64 = 16.0;
const LABEL_HEIGHT: f64 = 12.0;

/// A numbered sample-point marker: crosshair, circle, and room for the
/// index label beside it.
#[derive(Debug)]
pub struct SamplePoint {
    core: ItemCore,
    x: f64,
    y: f64,
    index: u32,
}

impl SamplePoint {
    /// Creates a marker at a model-space point with a 1-based index.
    #[must_use]
    pub fn new(x: f64, y: f64, index: u32) -> Self {
        Self {
            core: ItemCore::new(),
            x,
            y,
            index,
        }
    }

    /// The marker's model-space position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The marker's display index.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Moves the marker.
    pub fn set_position(&mut self, view: &CanvasView, x: f64, y: f64) {
        if (self.x, self.y) != (x, y) {
            self.begin_change(view);
            self.x = x;
            self.y = y;
            self.end_change(view);
        }
    }

    /// Renumbers the marker (the label repaints with it).
    pub fn set_index(&mut self, view: &CanvasView, index: u32) {
        if self.index != index {
            self.begin_change(view);
            self.index = index;
            self.end_change(view);
        }
    }

    fn transform(&self, view: &CanvasView) -> (f64, f64) {
        let (x, y) = view.to_device(self.x, self.y);
        (x.floor() + 0.5, y.floor() + 0.5)
    }
}

impl CanvasItem for SamplePoint {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x, y) = self.transform(view);

        // Crosshair ticks reaching past the circle.
        surface.move_to(x - RADIUS * 2.0, y);
        surface.line_to(x - RADIUS, y);
        surface.move_to(x + RADIUS, y);
        surface.line_to(x + RADIUS * 2.0, y);
        surface.move_to(x, y - RADIUS * 2.0);
        surface.line_to(x, y - RADIUS);
        surface.move_to(x, y + RADIUS);
        surface.line_to(x, y + RADIUS * 2.0);

        surface.new_sub_path();
        surface.arc(x, y, RADIUS, 0.0, 2.0 * core::f64::consts::PI);

        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x, y) = self.transform(view);
        // Over-allocate to the south-east so the index label repaints
        // together with the marker.
        let rect = Rect::new(
            x - RADIUS * 2.0 - 2.0,
            y - RADIUS * 2.0 - 2.0,
            x + RADIUS * 2.0 + 2.0 + LABEL_WIDTH,
            y + RADIUS * 2.0 + 2.0 + LABEL_HEIGHT,
        );
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}
