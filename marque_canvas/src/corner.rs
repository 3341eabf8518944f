// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner handles pinned to a rectangle's corners and edges.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::anchor::HandleAnchor;
use crate::item::{CanvasItem, ItemCore};

/// A resize handle attached to one corner or edge of a rectangle.
///
/// Unlike [`Handle`](crate::Handle), the position is derived from the
/// anchored rectangle, not a free point. With `outside` set the handle
/// sits outside the rectangle, and edge anchors (N/S/E/W) stretch along
/// the whole edge instead of centering a fixed-size grip on it.
#[derive(Debug)]
pub struct Corner {
    core: ItemCore,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    anchor: HandleAnchor,
    corner_width: f64,
    corner_height: f64,
    outside: bool,
}

impl Corner {
    /// Creates a corner handle for a model-space rectangle.
    ///
    /// `corner_width`/`corner_height` are the grip size in device pixels.
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        anchor: HandleAnchor,
        corner_width: f64,
        corner_height: f64,
        outside: bool,
    ) -> Self {
        Self {
            core: ItemCore::new(),
            x,
            y,
            width,
            height,
            anchor,
            corner_width,
            corner_height,
            outside,
        }
    }

    /// Updates the anchored rectangle and grip size.
    pub fn set(
        &mut self,
        view: &CanvasView,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_width: f64,
        corner_height: f64,
        outside: bool,
    ) {
        let next = (x, y, width, height, corner_width, corner_height, outside);
        let prev = (
            self.x,
            self.y,
            self.width,
            self.height,
            self.corner_width,
            self.corner_height,
            self.outside,
        );
        if prev != next {
            self.begin_change(view);
            (
                self.x,
                self.y,
                self.width,
                self.height,
                self.corner_width,
                self.corner_height,
                self.outside,
            ) = next;
            self.end_change(view);
        }
    }

    /// The grip's device rectangle as `(x, y, w, h)`.
    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (rx, ry) = view.to_device(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
        );
        let (mut rw, mut rh) = view.to_device(
            self.x.max(self.x + self.width),
            self.y.max(self.y + self.height),
        );
        rw -= rx;
        rh -= ry;

        let rx = rx.floor() + 0.5;
        let ry = ry.floor() + 0.5;
        let rw = rw.ceil() - 1.0;
        let rh = rh.ceil() - 1.0;

        let edge_grip_x = rx + (rw - self.corner_width) / 2.0;
        let edge_grip_y = ry + (rh - self.corner_height) / 2.0;

        let mut w = self.corner_width;
        let mut h = self.corner_height;
        let (x, y) = match self.anchor {
            HandleAnchor::Center => (rx, ry),
            HandleAnchor::NorthWest => {
                if self.outside {
                    (rx - w, ry - h)
                } else {
                    (rx, ry)
                }
            }
            HandleAnchor::NorthEast => {
                if self.outside {
                    (rx + rw, ry - h)
                } else {
                    (rx + rw - w, ry)
                }
            }
            HandleAnchor::SouthWest => {
                if self.outside {
                    (rx - w, ry + rh)
                } else {
                    (rx, ry + rh - h)
                }
            }
            HandleAnchor::SouthEast => {
                if self.outside {
                    (rx + rw, ry + rh)
                } else {
                    (rx + rw - w, ry + rh - h)
                }
            }
            HandleAnchor::North => {
                if self.outside {
                    w = rw;
                    (rx, ry - h)
                } else {
                    (edge_grip_x, ry)
                }
            }
            HandleAnchor::South => {
                if self.outside {
                    w = rw;
                    (rx, ry + rh)
                } else {
                    (edge_grip_x, ry + rh - h)
                }
            }
            HandleAnchor::West => {
                if self.outside {
                    h = rh;
                    (rx - w, ry)
                } else {
                    (rx, edge_grip_y)
                }
            }
            HandleAnchor::East => {
                if self.outside {
                    h = rh;
                    (rx + rw, ry)
                } else {
                    (rx + rw - w, edge_grip_y)
                }
            }
        };
        (x, y, w, h)
    }
}

impl CanvasItem for Corner {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x, y, w, h) = self.transform(view);
        surface.rect(x, y, w, h);
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x, y, w, h) = self.transform(view);
        let rect = Rect::new(x, y, x + w, y + h).inflate(1.5, 1.5);
        Some(Region::from_rect(RectI::from_outward(rect)))
    }
}
