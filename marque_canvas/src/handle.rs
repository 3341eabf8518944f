// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tool handles: the small draggable markers drawn at control points.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::{LineCap, Surface};
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::anchor::{HandleAnchor, shift_to_center, shift_to_north_west};
use crate::item::{CanvasItem, ItemCore};

/// The marker drawn for a handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Stroked square.
    Square,
    /// Filled square.
    FilledSquare,
    /// Stroked circle (optionally an arc slice).
    Circle,
    /// Filled circle (a pie wedge when sliced).
    FilledCircle,
    /// Crosshair.
    Cross,
    /// Stroked diamond.
    Diamond,
    /// Filled diamond.
    FilledDiamond,
}

impl HandleKind {
    /// Whether the kind draws from its north-west corner.
    ///
    /// Everything else draws from its center. The two groups use
    /// different anchor-shift conventions and must stay separate.
    fn corner_origin(self) -> bool {
        matches!(self, Self::Square | Self::FilledSquare)
    }
}

/// A draggable control-point marker.
///
/// The handle's position is a model-space point; its size is a
/// model-space extent, so handles scale with the view like every other
/// shape. Squares and diamonds can be rotated via
/// [`set_angles`](Self::set_angles); circles use the angles as an arc
/// slice instead.
#[derive(Debug)]
pub struct Handle {
    core: ItemCore,
    kind: HandleKind,
    anchor: HandleAnchor,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    start_angle: f64,
    slice_angle: f64,
}

impl Handle {
    /// Creates a handle of `kind` anchored at the model-space point.
    #[must_use]
    pub fn new(
        kind: HandleKind,
        anchor: HandleAnchor,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let mut core = ItemCore::new();
        // Square caps keep the corners of stroked squares sharp.
        core.line_cap = LineCap::Square;
        Self {
            core,
            kind,
            anchor,
            x,
            y,
            width,
            height,
            start_angle: 0.0,
            slice_angle: 2.0 * PI,
        }
    }

    /// The handle's model-space position.
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The marker kind.
    #[must_use]
    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    /// Moves the handle.
    pub fn set_position(&mut self, view: &CanvasView, x: f64, y: f64) {
        if (self.x, self.y) != (x, y) {
            self.begin_change(view);
            self.x = x;
            self.y = y;
            self.end_change(view);
        }
    }

    /// Sets the rotation (squares, diamonds) or arc slice (circles).
    pub fn set_angles(&mut self, view: &CanvasView, start_angle: f64, slice_angle: f64) {
        if (self.start_angle, self.slice_angle) != (start_angle, slice_angle) {
            self.begin_change(view);
            self.start_angle = start_angle;
            self.slice_angle = slice_angle;
            self.end_change(view);
        }
    }

    /// Device-space size of the marker.
    fn device_size(&self, view: &CanvasView) -> (f64, f64) {
        let (sx, sy) = view.scale();
        (self.width * sx, self.height * sy)
    }

    /// Device position of the marker origin: anchored, shifted by the
    /// kind's convention, and snapped to the pixel center.
    fn transform(&self, view: &CanvasView) -> (f64, f64) {
        let (x, y) = view.to_device(self.x, self.y);
        let (w, h) = self.device_size(view);
        let (x, y) = if self.kind.corner_origin() {
            shift_to_north_west(self.anchor, x, y, w, h)
        } else {
            shift_to_center(self.anchor, x, y, w, h)
        };
        (x.floor() + 0.5, y.floor() + 0.5)
    }
}

impl CanvasItem for Handle {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x, y) = self.transform(view);
        let (w, h) = self.device_size(view);
        // Rotation pivots on the unshifted device point.
        let (tx, ty) = view.to_device(self.x, self.y);

        match self.kind {
            HandleKind::Square
            | HandleKind::FilledSquare
            | HandleKind::Diamond
            | HandleKind::FilledDiamond => {
                surface.save();
                surface.translate(tx, ty);
                surface.rotate(self.start_angle);
                surface.translate(-tx, -ty);

                match self.kind {
                    HandleKind::Square => {
                        surface.rect(x, y, w - 1.0, h - 1.0);
                        self.stroke(surface);
                    }
                    HandleKind::FilledSquare => {
                        surface.rect(x - 0.5, y - 0.5, w, h);
                        self.fill(surface);
                    }
                    HandleKind::Diamond | HandleKind::FilledDiamond => {
                        surface.move_to(x, y - h / 2.0);
                        surface.line_to(x + w / 2.0, y);
                        surface.line_to(x, y + h / 2.0);
                        surface.line_to(x - w / 2.0, y);
                        surface.close_path();
                        if self.kind == HandleKind::Diamond {
                            self.stroke(surface);
                        } else {
                            self.fill(surface);
                        }
                    }
                    _ => unreachable!("outer match restricts the kind"),
                }
                surface.restore();
            }

            HandleKind::Circle => {
                surface.arc(x, y, w / 2.0, self.start_angle, self.slice_angle);
                self.stroke(surface);
            }

            HandleKind::FilledCircle => {
                // Start from the center so a sliced circle fills as a pie
                // wedge.
                surface.move_to(x, y);
                surface.arc(x, y, w / 2.0, self.start_angle, self.slice_angle);
                self.fill(surface);
            }

            HandleKind::Cross => {
                surface.move_to(x - w / 2.0, y);
                surface.line_to(x + w / 2.0 - 0.5, y);
                surface.move_to(x, y - h / 2.0);
                surface.line_to(x, y + h / 2.0 - 0.5);
                self.stroke(surface);
            }
        }
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x, y) = self.transform(view);
        let (w, h) = self.device_size(view);

        let rect = if self.kind.corner_origin() {
            // Pad by the growth of a square rotating about its center, so
            // extents stay valid for any start angle.
            let rot_w = w * (2.0_f64.sqrt() - 1.0) / 2.0;
            let rot_h = h * (2.0_f64.sqrt() - 1.0) / 2.0;
            Rect::new(
                x - 1.5 - rot_w,
                y - 1.5 - rot_h,
                x + w + 1.5 + rot_w,
                y + h + 1.5 + rot_h,
            )
        } else {
            Rect::new(
                x - w / 2.0 - 2.0,
                y - h / 2.0 - 2.0,
                x + w / 2.0 + 2.0,
                y + h / 2.0 + 2.0,
            )
        };
        Some(Region::from_rect(RectI::from_outward(rect)))
    }

    fn shape_hit(&self, view: &CanvasView, x: f64, y: f64) -> bool {
        let (handle_x, handle_y) = self.transform(view);
        let (w, h) = self.device_size(view);
        let (mut mx, mut my) = view.to_device(x, y);

        match self.kind {
            HandleKind::Square
            | HandleKind::FilledSquare
            | HandleKind::Diamond
            | HandleKind::FilledDiamond => {
                // Undo the marker rotation around the unshifted point; a
                // diamond is a square rotated a further 45 degrees, offset
                // back to corner coordinates.
                let mut angle = -self.start_angle;
                let mut offset = (0.0, 0.0);
                if matches!(self.kind, HandleKind::Diamond | HandleKind::FilledDiamond) {
                    angle -= PI / 4.0;
                    offset = (w / 2.0, h / 2.0);
                }
                let (tx, ty) = view.to_device(self.x, self.y);
                let (dx, dy) = (mx - tx, my - ty);
                mx = angle.cos() * dx - angle.sin() * dy + tx + offset.0;
                my = angle.sin() * dx + angle.cos() * dy + ty + offset.1;
                mx > handle_x && mx < handle_x + w && my > handle_y && my < handle_y + h
            }

            HandleKind::Circle | HandleKind::FilledCircle | HandleKind::Cross => {
                let mut radius = w;
                if w != h {
                    radius = (w + h) / 2.0;
                }
                radius /= 2.0;
                let (dx, dy) = (handle_x - mx, handle_y - my);
                dx * dx + dy * dy < radius * radius
            }
        }
    }
}
