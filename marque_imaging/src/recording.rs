// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::BezPath;

use crate::{Color, FillRule, LineCap, Surface, SurfaceOp};

/// A [`Surface`] that records ops instead of producing pixels.
///
/// This is intentionally *not* a reference renderer: it does not
/// rasterize and does not model the transform stack beyond its depth. It
/// exists so tests can assert on the exact op sequence an item emitted —
/// which pass painted, whether a suspended stroke only advanced the path
/// cursor, whether save/restore stayed balanced.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    depth: u32,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded ops, in emission order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Takes the recorded ops, leaving the surface empty.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Discards all recorded ops.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Current save/restore nesting depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of recorded ops matching a predicate.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&SurfaceOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        assert!(self.depth > 0, "restore() without a matching save()");
        self.depth -= 1;
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(SurfaceOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(SurfaceOp::Scale { sx, sy });
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(SurfaceOp::Rotate { angle });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
    }

    fn new_sub_path(&mut self) {
        self.ops.push(SurfaceOp::NewSubPath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(SurfaceOp::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, sweep_angle: f64) {
        self.ops.push(SurfaceOp::Arc {
            cx,
            cy,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    fn append_path(&mut self, path: &BezPath) {
        self.ops.push(SurfaceOp::AppendPath { path: path.clone() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth { width });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(SurfaceOp::LineCapStyle { cap });
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        self.ops.push(SurfaceOp::Dash {
            dashes: dashes.to_vec(),
            offset,
        });
    }

    fn set_fill_rule(&mut self, rule: FillRule) {
        self.ops.push(SurfaceOp::FillRuleStyle { rule });
    }

    fn set_color(&mut self, color: Color) {
        self.ops.push(SurfaceOp::SourceColor { color });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn stroke_preserve(&mut self) {
        self.ops.push(SurfaceOp::StrokePreserve);
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill);
    }

    fn fill_preserve(&mut self) {
        self.ops.push(SurfaceOp::FillPreserve);
    }

    fn clip(&mut self) {
        self.ops.push(SurfaceOp::Clip);
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordingSurface, Surface, SurfaceOp};

    #[test]
    fn records_in_emission_order() {
        let mut surface = RecordingSurface::new();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.stroke();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::MoveTo { x: 1.0, y: 2.0 },
                SurfaceOp::LineTo { x: 3.0, y: 4.0 },
                SurfaceOp::Stroke,
            ]
        );
    }

    #[test]
    fn tracks_save_restore_depth() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.save();
        assert_eq!(surface.depth(), 2);
        surface.restore();
        surface.restore();
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "without a matching save")]
    fn unbalanced_restore_panics() {
        let mut surface = RecordingSurface::new();
        surface.restore();
    }

    #[test]
    fn take_ops_leaves_surface_reusable() {
        let mut surface = RecordingSurface::new();
        surface.stroke();
        let ops = surface.take_ops();
        assert_eq!(ops.len(), 1);
        assert!(surface.ops().is_empty());

        surface.fill();
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Fill)), 1);
    }
}
