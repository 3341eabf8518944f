// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Pan/zoom state of one document view.
///
/// The device-space position of a model point is
/// `model * scale - offset`: scaling happens first, then the pan offset
/// (itself in device pixels) is subtracted. The viewport size is carried
/// here because some overlay shapes (guides, the passe-partout mask) span
/// the whole visible area rather than a model-space rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasView {
    offset_x: f64,
    offset_y: f64,
    scale_x: f64,
    scale_y: f64,
    viewport_width: i32,
    viewport_height: i32,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasView {
    /// Creates a view with unit scale, zero offset, and an empty viewport.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    /// Current pan offset in device pixels.
    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Sets the pan offset in device pixels.
    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Current per-axis scale factors.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Sets the per-axis scale factors.
    ///
    /// # Panics
    ///
    /// Both factors must be finite and positive; anything else is a bug in
    /// the calling view code.
    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        assert!(
            scale_x.is_finite() && scale_x > 0.0 && scale_y.is_finite() && scale_y > 0.0,
            "view scale factors must be finite and positive"
        );
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }

    /// Size of the viewport in device pixels.
    #[must_use]
    pub fn viewport_size(&self) -> (i32, i32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Sets the viewport size in device pixels. Negative sizes clamp to zero.
    pub fn set_viewport_size(&mut self, width: i32, height: i32) {
        self.viewport_width = width.max(0);
        self.viewport_height = height.max(0);
    }

    /// Converts a model-space point to device pixels, float-precise.
    #[must_use]
    pub fn to_device(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale_x - self.offset_x,
            y * self.scale_y - self.offset_y,
        )
    }

    /// Converts a model-space point to integer device pixels.
    ///
    /// The projection is computed in wide arithmetic and clamped into
    /// `i32` range before truncation, so extreme coordinates saturate
    /// instead of wrapping.
    #[must_use]
    pub fn to_device_int(&self, x: f64, y: f64) -> (i32, i32) {
        (
            clamp_device(x * self.scale_x - self.offset_x),
            clamp_device(y * self.scale_y - self.offset_y),
        )
    }

    /// Converts a device-space point back to model space, float-precise.
    #[must_use]
    pub fn to_model(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x + self.offset_x) / self.scale_x,
            (y + self.offset_y) / self.scale_y,
        )
    }

    /// Converts a device-space point back to integer model coordinates,
    /// rounding to the nearest unit (half away from zero).
    #[must_use]
    pub fn to_model_rounded(&self, x: f64, y: f64) -> (i32, i32) {
        let (mx, my) = self.to_model(x, y);
        (clamp_device(mx.round()), clamp_device(my.round()))
    }

    /// Converts a model-space rectangle to its device-space counterpart.
    ///
    /// Sufficient for the axis-aligned transform used here; corners map to
    /// corners.
    #[must_use]
    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        let (x0, y0) = self.to_device(rect.x0, rect.y0);
        let (x1, y1) = self.to_device(rect.x1, rect.y1);
        Rect::new(x0, y0, x1, y1)
    }

    /// The viewport as a device-space rectangle anchored at the origin.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.viewport_width),
            f64::from(self.viewport_height),
        )
    }

    /// Converts a device-space point into a [`Point`] in model space.
    #[must_use]
    pub fn to_model_point(&self, pt: Point) -> Point {
        let (x, y) = self.to_model(pt.x, pt.y);
        Point::new(x, y)
    }
}

fn clamp_device(v: f64) -> i32 {
    #[expect(clippy::cast_possible_truncation, reason = "clamped to i32 range")]
    let clamped = v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    clamped
}
