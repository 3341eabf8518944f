// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared item state and the item contract.

use core::fmt::Debug;

use marque_imaging::{LineCap, Surface};
use marque_region::Region;
use marque_view2d::CanvasView;

use crate::DamageChannel;
use crate::style;

/// State common to every canvas item.
///
/// Shape types embed an `ItemCore` and hand it to the [`CanvasItem`]
/// trait through [`CanvasItem::core`] / [`CanvasItem::core_mut`]; the
/// trait's provided methods implement everything here, so a shape only
/// supplies geometry.
#[derive(Debug)]
pub struct ItemCore {
    pub(crate) visible: bool,
    pub(crate) line_cap: LineCap,
    pub(crate) highlight: bool,
    pub(crate) suspend_stroking: u32,
    pub(crate) suspend_filling: u32,
    pub(crate) change_count: u32,
    pub(crate) change_region: Option<Region>,
    pub(crate) channel: Option<DamageChannel>,
}

impl Default for ItemCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCore {
    /// Creates the default item state: visible, round caps, not
    /// highlighted, nothing suspended, no channel attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: true,
            line_cap: LineCap::Round,
            highlight: false,
            suspend_stroking: 0,
            suspend_filling: 0,
            change_count: 0,
            change_region: None,
            channel: None,
        }
    }
}

/// The canvas item contract.
///
/// Implementors supply [`core`](Self::core) / [`core_mut`](Self::core_mut)
/// and the shape hooks; the provided methods are the uniform wrappers
/// that run for every shape:
///
/// - [`draw`](Self::draw) gates on visibility and brackets the shape in
///   save/restore so no shape can leak transform or clip state to its
///   siblings.
/// - [`extents`](Self::extents) gates on visibility.
/// - [`stroke`](Self::stroke) / [`fill`](Self::fill) apply the grouping
///   protocol: a suspended item only advances the path cursor so its
///   geometry accumulates into the group's path.
/// - [`begin_change`](Self::begin_change) / [`end_change`](Self::end_change)
///   coalesce any number of nested mutations into at most one damage
///   notification covering both the before and after extents.
///
/// Mutations that affect paintable extents must happen between
/// `begin_change` and `end_change`; the setters provided here do this
/// themselves. The one deliberate exception is
/// [`set_highlight`](Self::set_highlight), which only changes color: it
/// posts the current extents for repaint but never snapshots a before
/// region.
pub trait CanvasItem: Debug {
    /// Shared item state.
    fn core(&self) -> &ItemCore;

    /// Shared item state, mutably.
    fn core_mut(&mut self) -> &mut ItemCore;

    /// Emits the shape's drawing commands.
    ///
    /// Called by [`draw`](Self::draw) inside a save/restore bracket, and
    /// only while the item is visible. Shapes end with a call to
    /// [`stroke`](Self::stroke) or [`fill`](Self::fill) so the grouping
    /// protocol applies.
    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface);

    /// The device-space region the shape paints, ignoring visibility.
    ///
    /// The default reports no extents.
    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let _ = view;
        None
    }

    /// Hit test in model-space coordinates, ignoring visibility.
    ///
    /// The default reports a miss; shapes without a meaningful interior
    /// keep it.
    fn shape_hit(&self, view: &CanvasView, x: f64, y: f64) -> bool {
        let _ = (view, x, y);
        false
    }

    /// Paints the current path as this item's stroke.
    ///
    /// The default is the two-pass tool style: wide casing under a
    /// 1-pixel foreground, green when highlighted.
    fn stroke_shape(&self, surface: &mut dyn Surface) {
        surface.set_line_cap(self.core().line_cap);
        style::apply_casing(surface);
        surface.stroke_preserve();
        style::apply_foreground(surface, self.core().highlight);
        surface.stroke();
    }

    /// Paints the current path as this item's fill.
    ///
    /// The default outlines with the casing color, then fills with the
    /// foreground color.
    fn fill_shape(&self, surface: &mut dyn Surface) {
        style::apply_casing(surface);
        surface.set_line_width(style::FILL_CASING_WIDTH);
        surface.stroke_preserve();
        style::apply_foreground(surface, self.core().highlight);
        surface.fill();
    }

    /// Draws the item: nothing when invisible, otherwise the shape inside
    /// a save/restore bracket.
    fn draw(&self, view: &CanvasView, surface: &mut dyn Surface) {
        if self.core().visible {
            surface.save();
            self.draw_shape(view, surface);
            surface.restore();
        }
    }

    /// The item's current paintable extents; `None` when invisible or
    /// when the shape covers nothing.
    fn extents(&self, view: &CanvasView) -> Option<Region> {
        if self.core().visible {
            self.shape_extents(view)
        } else {
            None
        }
    }

    /// Hit test at a model-space point.
    fn hit(&self, view: &CanvasView, x: f64, y: f64) -> bool {
        self.shape_hit(view, x, y)
    }

    /// Strokes the current path, honoring the grouping protocol.
    ///
    /// Stroking while fill-suspended indicates the item sits in a filling
    /// group and is being stroked anyway; that is reported as a warning
    /// because it leaves no inconsistent state behind.
    fn stroke(&self, surface: &mut dyn Surface) {
        let core = self.core();
        if core.suspend_filling > 0 {
            log::warn!("stroke() on an item that is in a filling group");
        }
        if core.suspend_stroking == 0 {
            self.stroke_shape(surface);
        } else {
            surface.new_sub_path();
        }
    }

    /// Fills the current path, honoring the grouping protocol.
    fn fill(&self, surface: &mut dyn Surface) {
        let core = self.core();
        if core.suspend_stroking > 0 {
            log::warn!("fill() on an item that is in a stroking group");
        }
        if core.suspend_filling == 0 {
            self.fill_shape(surface);
        } else {
            surface.new_sub_path();
        }
    }

    /// Opens a change bracket.
    ///
    /// On the outermost open, and only if a channel is attached, the
    /// current extents are snapshotted so the eventual notification also
    /// covers the pixels the shape is moving away from.
    fn begin_change(&mut self, view: &CanvasView) {
        self.core_mut().change_count += 1;
        if self.core().change_count == 1 && self.core().channel.is_some() {
            let snapshot = self.extents(view);
            self.core_mut().change_region = snapshot;
        }
    }

    /// Closes a change bracket.
    ///
    /// Only the outermost close notifies: the new extents are unioned
    /// with the snapshot from [`begin_change`](Self::begin_change) and
    /// posted as a single notification, if anything is listening and the
    /// union is non-empty.
    ///
    /// # Panics
    ///
    /// Closing a bracket that was never opened is a bug in the calling
    /// view code.
    fn end_change(&mut self, view: &CanvasView) {
        assert!(
            self.core().change_count > 0,
            "end_change() without a matching begin_change()"
        );
        self.core_mut().change_count -= 1;
        if self.core().change_count > 0 {
            return;
        }

        let Some(channel) = self.core().channel.clone() else {
            self.core_mut().change_region = None;
            return;
        };

        let current = self.extents(view);
        let snapshot = self.core_mut().change_region.take();
        let region = match (current, snapshot) {
            (Some(mut current), Some(snapshot)) => {
                current.union(&snapshot);
                Some(current)
            }
            (current, snapshot) => current.or(snapshot),
        };
        if let Some(region) = region {
            channel.post(region);
        }
    }

    /// Suspends individual stroking; the item defers to its group.
    fn suspend_stroking(&mut self) {
        self.core_mut().suspend_stroking += 1;
    }

    /// Resumes individual stroking.
    ///
    /// # Panics
    ///
    /// Resuming below zero is a bug in the grouping code.
    fn resume_stroking(&mut self) {
        let core = self.core_mut();
        assert!(
            core.suspend_stroking > 0,
            "resume_stroking() without a matching suspend_stroking()"
        );
        core.suspend_stroking -= 1;
    }

    /// Suspends individual filling; the item defers to its group.
    fn suspend_filling(&mut self) {
        self.core_mut().suspend_filling += 1;
    }

    /// Resumes individual filling.
    ///
    /// # Panics
    ///
    /// Resuming below zero is a bug in the grouping code.
    fn resume_filling(&mut self) {
        let core = self.core_mut();
        assert!(
            core.suspend_filling > 0,
            "resume_filling() without a matching suspend_filling()"
        );
        core.suspend_filling -= 1;
    }

    /// Whether the item draws and reports extents.
    fn visible(&self) -> bool {
        self.core().visible
    }

    /// Shows or hides the item inside a change bracket.
    fn set_visible(&mut self, view: &CanvasView, visible: bool) {
        if self.core().visible != visible {
            self.begin_change(view);
            self.core_mut().visible = visible;
            self.end_change(view);
        }
    }

    /// The cap style for stroked line ends.
    fn line_cap(&self) -> LineCap {
        self.core().line_cap
    }

    /// Sets the line cap inside a change bracket (caps extend strokes, so
    /// they affect extents).
    fn set_line_cap(&mut self, view: &CanvasView, line_cap: LineCap) {
        if self.core().line_cap != line_cap {
            self.begin_change(view);
            self.core_mut().line_cap = line_cap;
            self.end_change(view);
        }
    }

    /// Whether the item is drawn highlighted.
    fn highlight(&self) -> bool {
        self.core().highlight
    }

    /// Sets the highlight flag.
    ///
    /// Highlight only changes color, so this never opens a change
    /// bracket: outside a bracket it posts the current extents once for
    /// a same-geometry repaint, and consumers rely on no before/after
    /// union being computed here.
    fn set_highlight(&mut self, view: &CanvasView, highlight: bool) {
        if self.core().highlight != highlight {
            self.core_mut().highlight = highlight;
            self.post_current_extents(view);
        }
    }

    /// Posts the item's current extents as damage, when outside any
    /// change bracket and a channel is attached.
    ///
    /// Used for mutations that repaint in place without moving.
    fn post_current_extents(&self, view: &CanvasView) {
        let core = self.core();
        if core.change_count == 0
            && let Some(channel) = &core.channel
            && let Some(region) = self.extents(view)
        {
            channel.post(region);
        }
    }

    /// Attaches the damage channel notifications are posted to.
    fn attach_channel(&mut self, channel: DamageChannel) {
        self.core_mut().channel = Some(channel);
    }

    /// Detaches the damage channel; the item stops computing change
    /// regions entirely.
    fn detach_channel(&mut self) {
        self.core_mut().channel = None;
    }

    /// Whether a damage channel is attached.
    fn is_attached(&self) -> bool {
        self.core().channel.is_some()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{CanvasItem, ItemCore};
    use crate::{DamageChannel, Line};
    use marque_imaging::{LineCap, RecordingSurface, SurfaceOp};
    use marque_region::{RectI, Region};
    use marque_view2d::CanvasView;

    fn view() -> CanvasView {
        CanvasView::new()
    }

    fn attached_line() -> (Line, DamageChannel) {
        let mut line = Line::new(0.0, 0.0, 10.0, 0.0);
        let channel = DamageChannel::new();
        line.attach_channel(channel.clone());
        (line, channel)
    }

    #[test]
    fn defaults_match_construction_state() {
        let core = ItemCore::new();
        assert!(core.visible);
        assert_eq!(core.line_cap, LineCap::Round);
        assert!(!core.highlight);
        assert_eq!(core.change_count, 0);
    }

    #[test]
    fn nested_brackets_post_exactly_once() {
        let view = view();
        let (mut line, channel) = attached_line();

        let before = line.extents(&view).expect("visible line has extents");

        line.begin_change(&view);
        line.begin_change(&view);
        line.set_points(&view, 0.0, 50.0, 10.0, 50.0);
        line.end_change(&view);
        assert!(channel.is_empty(), "inner close must not notify");
        line.end_change(&view);

        let posts = channel.take_posts();
        assert_eq!(posts.len(), 1, "one coalesced notification");

        let after = line.extents(&view).expect("line still has extents");
        let mut both = before;
        both.union(&after);
        assert_eq!(posts[0], both, "covers the before and after extents");
    }

    #[test]
    fn no_channel_means_no_snapshot_and_no_post() {
        let view = view();
        let mut line = Line::new(0.0, 0.0, 10.0, 0.0);

        line.begin_change(&view);
        assert!(line.core().change_region.is_none());
        line.set_points(&view, 5.0, 5.0, 15.0, 5.0);
        line.end_change(&view);
        assert_eq!(line.points(), (5.0, 5.0, 15.0, 5.0));
    }

    #[test]
    fn invisible_item_mutation_posts_nothing() {
        // Both the before and after extents are `None`, so there is no
        // region to report even though a channel is attached.
        let view = view();
        let (mut line, channel) = attached_line();
        line.set_visible(&view, false);
        let _ = channel.take_posts();

        line.set_points(&view, 40.0, 40.0, 60.0, 60.0);
        assert!(channel.is_empty());
    }

    #[test]
    #[should_panic(expected = "without a matching begin_change")]
    fn unbalanced_end_change_panics() {
        let (mut line, _channel) = attached_line();
        line.end_change(&view());
    }

    #[test]
    #[should_panic(expected = "without a matching suspend_stroking")]
    fn resume_stroking_on_zero_counter_panics() {
        let (mut line, _channel) = attached_line();
        line.resume_stroking();
    }

    #[test]
    #[should_panic(expected = "without a matching suspend_filling")]
    fn resume_filling_on_zero_counter_panics() {
        let (mut line, _channel) = attached_line();
        line.resume_filling();
    }

    #[test]
    fn hiding_posts_the_old_extents() {
        let view = view();
        let (mut line, channel) = attached_line();
        let before = line.extents(&view).expect("visible line has extents");

        line.set_visible(&view, false);

        let posts = channel.take_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], before, "the vacated pixels need repainting");
        assert!(line.extents(&view).is_none());

        // Showing again posts the new extents.
        line.set_visible(&view, true);
        assert_eq!(channel.take_posts().len(), 1);

        // A no-op write posts nothing.
        line.set_visible(&view, true);
        assert!(channel.is_empty());
    }

    #[test]
    fn highlight_posts_current_extents_without_bracketing() {
        let view = view();
        let (mut line, channel) = attached_line();
        let current = line.extents(&view).expect("visible line has extents");

        line.set_highlight(&view, true);
        let posts = channel.take_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], current);

        // Inside a bracket, the highlight write stays silent until the
        // bracket closes.
        line.begin_change(&view);
        line.set_highlight(&view, false);
        assert!(channel.is_empty());
        line.end_change(&view);
        assert_eq!(channel.take_posts().len(), 1);
    }

    #[test]
    fn invisible_item_draws_nothing() {
        let view = view();
        let (mut line, _channel) = attached_line();
        line.set_visible(&view, false);

        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn draw_brackets_the_shape_in_save_restore() {
        let view = view();
        let (line, _channel) = attached_line();

        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);

        let ops = surface.ops();
        assert_eq!(ops.first(), Some(&SurfaceOp::Save));
        assert_eq!(ops.last(), Some(&SurfaceOp::Restore));
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn suspended_stroke_only_advances_the_path() {
        let view = view();
        let (mut line, _channel) = attached_line();
        line.suspend_stroking();

        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);

        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 0);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::NewSubPath)), 1);

        line.resume_stroking();
        surface.clear();
        line.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 1);
    }

    #[test]
    fn cross_suspended_stroke_still_paints() {
        // Stroking inside a filling group is reported, not suppressed.
        let view = view();
        let (mut line, _channel) = attached_line();
        line.suspend_filling();

        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 1);
    }

    #[test]
    fn two_pass_stroke_casing_then_foreground() {
        let view = view();
        let (line, _channel) = attached_line();

        let mut surface = RecordingSurface::new();
        line.draw(&view, &mut surface);

        let paint_ops: vec::Vec<_> = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke | SurfaceOp::StrokePreserve))
            .collect();
        assert_eq!(paint_ops, vec![&SurfaceOp::StrokePreserve, &SurfaceOp::Stroke]);
    }

    #[test]
    fn detached_item_posts_nothing_after_detach() {
        let view = view();
        let (mut line, channel) = attached_line();
        assert!(line.is_attached());

        line.detach_channel();
        line.set_points(&view, 1.0, 1.0, 2.0, 2.0);
        assert!(channel.is_empty());
    }

    #[test]
    fn post_current_extents_respects_brackets() {
        let view = view();
        let (mut line, channel) = attached_line();

        line.begin_change(&view);
        line.post_current_extents(&view);
        assert!(channel.is_empty());
        line.end_change(&view);
        // The bracket close itself posts (geometry unchanged but extents
        // exist).
        assert_eq!(channel.take_posts().len(), 1);
    }

    #[test]
    fn union_region_is_single_rect_for_overlapping_change() {
        let view = view();
        let (mut line, channel) = attached_line();

        line.set_points(&view, 0.0, 0.0, 10.0, 10.0);
        let region = channel.take().expect("move posts damage");
        // Before (0,0)-(10,0) and after (0,0)-(10,10) both sit inside the
        // posted union.
        assert!(region.contains_point(5, 0));
        assert!(region.contains_point(5, 5));
        let extents = region.extents();
        assert!(extents.width >= 10 && extents.height >= 10);
    }

    #[test]
    fn region_equality_helper_sanity() {
        let a = Region::from_rect(RectI::new(0, 0, 4, 4));
        let b = Region::from_rect(RectI::new(0, 0, 4, 4));
        assert_eq!(a, b);
    }
}
