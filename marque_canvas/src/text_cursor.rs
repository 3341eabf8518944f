// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The on-canvas text cursor.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use marque_imaging::Surface;
use marque_region::{RectI, Region};
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Length of the caret serifs in device pixels.
const SERIF: f64 = 3.0;

/// The text tool's cursor.
///
/// Insert mode draws an I-beam caret on the cell's leading edge;
/// overwrite mode outlines the whole character cell.
#[derive(Debug)]
pub struct TextCursor {
    core: ItemCore,
    cursor: Rect,
    overwrite: bool,
}

impl TextCursor {
    /// Creates a cursor for a model-space character cell.
    #[must_use]
    pub fn new(cursor: Rect, overwrite: bool) -> Self {
        Self {
            core: ItemCore::new(),
            cursor,
            overwrite,
        }
    }

    /// The model-space character cell.
    #[must_use]
    pub fn cursor(&self) -> Rect {
        self.cursor
    }

    /// Whether the cursor outlines the whole cell.
    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Moves the cursor to a new cell and/or mode.
    pub fn set(&mut self, view: &CanvasView, cursor: Rect, overwrite: bool) {
        if (self.cursor, self.overwrite) != (cursor, overwrite) {
            self.begin_change(view);
            self.cursor = cursor;
            self.overwrite = overwrite;
            self.end_change(view);
        }
    }

    /// Device cell `(x, y, w, h)`, snapped to pixel centers.
    fn transform(&self, view: &CanvasView) -> (f64, f64, f64, f64) {
        let (x1, y1) = view.to_device(self.cursor.x0, self.cursor.y0);
        let (x2, y2) = view.to_device(self.cursor.x1, self.cursor.y1);
        let x = x1.floor() + 0.5;
        let y = y1.floor() + 0.5;
        let w = (x2 - x1).floor().max(1.0);
        let h = (y2 - y1).floor().max(1.0);
        (x, y, w, h)
    }
}

impl CanvasItem for TextCursor {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        let (x, y, w, h) = self.transform(view);

        if self.overwrite {
            surface.rect(x, y, w, h);
        } else {
            // I-beam: the caret line plus serifs top and bottom.
            surface.move_to(x, y);
            surface.line_to(x, y + h);

            surface.move_to(x - SERIF, y);
            surface.line_to(x + SERIF, y);

            surface.move_to(x - SERIF, y + h);
            surface.line_to(x + SERIF, y + h);
        }
        self.stroke(surface);
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let (x, y, w, h) = self.transform(view);
        let rect = if self.overwrite {
            Rect::new(x, y, x + w, y + h)
        } else {
            Rect::new(x - SERIF, y, x + SERIF, y + h)
        };
        Some(Region::from_rect(RectI::from_outward(rect.inflate(1.5, 1.5))))
    }
}

#[cfg(test)]
mod tests {
    use super::TextCursor;
    use crate::item::CanvasItem;
    use kurbo::Rect;
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    #[test]
    fn insert_mode_draws_an_i_beam() {
        let view = CanvasView::new();
        let cursor = TextCursor::new(Rect::new(10.0, 10.0, 18.0, 26.0), false);

        let mut surface = RecordingSurface::new();
        cursor.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::MoveTo { .. })), 3);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Rect { .. })), 0);
    }

    #[test]
    fn overwrite_mode_outlines_the_cell() {
        let view = CanvasView::new();
        let cursor = TextCursor::new(Rect::new(10.0, 10.0, 18.0, 26.0), true);

        let mut surface = RecordingSurface::new();
        cursor.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Rect { .. })), 1);
    }

    #[test]
    fn overwrite_extents_cover_the_cell() {
        let view = CanvasView::new();
        let cursor = TextCursor::new(Rect::new(10.0, 10.0, 18.0, 26.0), true);

        let region = cursor.extents(&view).expect("visible cursor");
        assert!(region.contains_point(14, 18));
        assert!(region.contains_point(10, 10));
    }
}
