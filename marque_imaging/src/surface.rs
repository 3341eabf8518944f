// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::BezPath;

use crate::{Color, FillRule, LineCap};

/// An immediate-mode drawing context.
///
/// The trait is the narrow waist between overlay items and whatever 2D
/// renderer a host embeds: items call it, backends implement it. See the
/// crate docs for the state semantics backends must honor, in particular
/// that save/restore does not cover the current path.
pub trait Surface {
    /// Pushes a copy of the graphics state (transform, clip, style).
    fn save(&mut self);

    /// Pops the graphics state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Appends a translation to the current transform.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Appends a per-axis scale to the current transform.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Appends a rotation (radians, about the current origin).
    fn rotate(&mut self, angle: f64);

    /// Begins a new sub-path at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a line from the current point to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current sub-path.
    fn close_path(&mut self);

    /// Ends the current sub-path without adding geometry.
    fn new_sub_path(&mut self);

    /// Adds a closed axis-aligned rectangle sub-path.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Adds a circular arc around `(cx, cy)` starting at `start_angle`
    /// and sweeping by `sweep_angle` (radians, positive = clockwise in
    /// the y-down device space).
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, sweep_angle: f64);

    /// Appends a prebuilt path under the current transform.
    fn append_path(&mut self, path: &BezPath);

    /// Sets the stroke width in current-space units.
    fn set_line_width(&mut self, width: f64);

    /// Sets the cap style for stroked path ends.
    fn set_line_cap(&mut self, cap: LineCap);

    /// Sets the dash pattern (`dashes` empty means solid).
    fn set_dash(&mut self, dashes: &[f64], offset: f64);

    /// Sets the rule used by [`fill`](Self::fill) and [`clip`](Self::clip).
    fn set_fill_rule(&mut self, rule: FillRule);

    /// Sets the solid source color.
    fn set_color(&mut self, color: Color);

    /// Strokes the current path and clears it.
    fn stroke(&mut self);

    /// Strokes the current path, keeping it.
    fn stroke_preserve(&mut self);

    /// Fills the current path and clears it.
    fn fill(&mut self);

    /// Fills the current path, keeping it.
    fn fill_preserve(&mut self);

    /// Intersects the clip region with the current path and clears it.
    fn clip(&mut self);
}

/// Plain-old-data mirror of each [`Surface`] method.
///
/// Recorded by [`RecordingSurface`](crate::RecordingSurface); tests match
/// on these to assert what an item painted without rasterizing anything.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Graphics state pushed.
    Save,
    /// Graphics state popped.
    Restore,
    /// Translation appended to the transform.
    Translate {
        /// X delta.
        dx: f64,
        /// Y delta.
        dy: f64,
    },
    /// Scale appended to the transform.
    Scale {
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },
    /// Rotation appended to the transform.
    Rotate {
        /// Angle in radians.
        angle: f64,
    },
    /// Sub-path started.
    MoveTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Line segment added.
    LineTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Current sub-path closed.
    ClosePath,
    /// Current sub-path ended without geometry.
    NewSubPath,
    /// Rectangle sub-path added.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Circular arc added.
    Arc {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// Sweep angle in radians.
        sweep_angle: f64,
    },
    /// Prebuilt path appended.
    AppendPath {
        /// The appended path.
        path: BezPath,
    },
    /// Stroke width set.
    LineWidth {
        /// Width in current-space units.
        width: f64,
    },
    /// Line cap set.
    LineCapStyle {
        /// The cap style.
        cap: LineCap,
    },
    /// Dash pattern set.
    Dash {
        /// Dash segment lengths; empty means solid.
        dashes: Vec<f64>,
        /// Offset into the pattern.
        offset: f64,
    },
    /// Fill rule set.
    FillRuleStyle {
        /// The fill rule.
        rule: FillRule,
    },
    /// Source color set.
    SourceColor {
        /// The color.
        color: Color,
    },
    /// Path stroked and cleared.
    Stroke,
    /// Path stroked and kept.
    StrokePreserve,
    /// Path filled and cleared.
    Fill,
    /// Path filled and kept.
    FillPreserve,
    /// Clip intersected with the path.
    Clip,
}
