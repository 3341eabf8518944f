// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered groups of items drawn, damaged, and hit-tested as one.

use alloc::boxed::Box;
use alloc::vec::Vec;

use marque_imaging::Surface;
use marque_region::Region;
use marque_view2d::CanvasView;

use crate::item::{CanvasItem, ItemCore};

/// Handle to a child inside one [`CanvasGroup`].
///
/// Stable for the child's lifetime in the group and never reused, so a
/// stale handle can only miss, not alias another child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChildId(u64);

/// An item that owns an ordered collection of child items.
///
/// Children paint in insertion order, back to front: the last added child
/// draws on top. The group aggregates child extents, forwards hit tests,
/// and can force all children into grouped stroking or filling, where
/// child geometry accumulates into one path the group paints once.
///
/// The group exclusively owns its children. That makes the classic
/// aliasing bugs unrepresentable: the same item cannot be added twice and
/// a group cannot contain itself. [`remove`](Self::remove) hands
/// ownership back to the caller.
#[derive(Debug, Default)]
pub struct CanvasGroup {
    core: ItemCore,
    children: Vec<(ChildId, Box<dyn CanvasItem>)>,
    next_child: u64,
    group_stroking: bool,
    group_filling: bool,
}

impl CanvasGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child on top of the paint order.
    ///
    /// A child entering a group that is currently group-stroking or
    /// -filling is suspended on the way in, so it cannot double-paint.
    /// When the group is listened to and outside any change bracket, the
    /// child's extents are posted immediately; a single insertion needs
    /// no bracket.
    pub fn add(&mut self, view: &CanvasView, item: Box<dyn CanvasItem>) -> ChildId {
        let mut item = item;
        if self.group_stroking {
            item.suspend_stroking();
        }
        if self.group_filling {
            item.suspend_filling();
        }

        if self.core.change_count == 0
            && let Some(channel) = &self.core.channel
            && let Some(region) = item.extents(view)
        {
            channel.post(region);
        }

        let id = ChildId(self.next_child);
        self.next_child += 1;
        self.children.push((id, item));
        id
    }

    /// Removes a child, returning ownership to the caller.
    ///
    /// Whatever suspension this group applied is resumed, and the child's
    /// last extents are posted so the vacated pixels repaint.
    ///
    /// # Panics
    ///
    /// Removing an id that is not in the group is a bug in the calling
    /// view code.
    pub fn remove(&mut self, view: &CanvasView, id: ChildId) -> Box<dyn CanvasItem> {
        let index = self
            .children
            .iter()
            .position(|(child_id, _)| *child_id == id)
            .unwrap_or_else(|| panic!("remove() of a child that is not in this group"));
        let (_, mut item) = self.children.remove(index);

        // Extents before the caller can drop or mutate the item.
        let region = item.extents(view);

        if self.group_stroking {
            item.resume_stroking();
        }
        if self.group_filling {
            item.resume_filling();
        }

        if self.core.change_count == 0
            && let Some(channel) = &self.core.channel
            && let Some(region) = region
        {
            channel.post(region);
        }

        item
    }

    /// Borrows a child.
    #[must_use]
    pub fn child(&self, id: ChildId) -> Option<&dyn CanvasItem> {
        self.children
            .iter()
            .find(|(child_id, _)| *child_id == id)
            .map(|(_, item)| &**item)
    }

    /// Borrows a child mutably.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn CanvasItem + 'static)> {
        self.children
            .iter_mut()
            .find(|(child_id, _)| *child_id == id)
            .map(|(_, item)| &mut **item)
    }

    /// Iterates the children in paint order.
    pub fn items(&self) -> impl Iterator<Item = &dyn CanvasItem> {
        self.children.iter().map(|(_, item)| &**item)
    }

    /// Whether children stroke as one path.
    #[must_use]
    pub fn group_stroking(&self) -> bool {
        self.group_stroking
    }

    /// Whether children fill as one path.
    #[must_use]
    pub fn group_filling(&self) -> bool {
        self.group_filling
    }

    /// Switches grouped stroking on or off.
    ///
    /// A no-op when the value does not change. Otherwise the flag flip
    /// and the walk suspending or resuming every child happen inside one
    /// change bracket on the group, so observers see a single
    /// notification for the whole restyle.
    pub fn set_group_stroking(&mut self, view: &CanvasView, enable: bool) {
        if self.group_stroking == enable {
            return;
        }
        self.begin_change(view);
        self.group_stroking = enable;
        for (_, child) in &mut self.children {
            if enable {
                child.suspend_stroking();
            } else {
                child.resume_stroking();
            }
        }
        self.end_change(view);
    }

    /// Switches grouped filling on or off. See
    /// [`set_group_stroking`](Self::set_group_stroking).
    pub fn set_group_filling(&mut self, view: &CanvasView, enable: bool) {
        if self.group_filling == enable {
            return;
        }
        self.begin_change(view);
        self.group_filling = enable;
        for (_, child) in &mut self.children {
            if enable {
                child.suspend_filling();
            } else {
                child.resume_filling();
            }
        }
        self.end_change(view);
    }
}

impl CanvasItem for CanvasGroup {
    fn core(&self) -> &ItemCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ItemCore {
        &mut self.core
    }

    fn draw_shape(&self, view: &CanvasView, surface: &mut dyn Surface) {
        for (_, child) in &self.children {
            child.draw(view, surface);
        }
        // Suspended children only advanced the path cursor; their
        // accumulated geometry is painted here in one pass.
        if self.group_stroking {
            self.stroke(surface);
        }
        if self.group_filling {
            self.fill(surface);
        }
    }

    fn shape_extents(&self, view: &CanvasView) -> Option<Region> {
        let mut union: Option<Region> = None;
        for (_, child) in &self.children {
            if let Some(extents) = child.extents(view) {
                match &mut union {
                    Some(region) => region.union(&extents),
                    None => union = Some(extents),
                }
            }
        }
        union
    }

    fn shape_hit(&self, view: &CanvasView, x: f64, y: f64) -> bool {
        // First hit in paint order wins. Paint order is back to front, so
        // the visually topmost match would be the *last* one; existing
        // pickers depend on the historical order, so it stays.
        self.children.iter().any(|(_, child)| child.hit(view, x, y))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::CanvasGroup;
    use crate::item::CanvasItem;
    use crate::{DamageChannel, Handle, HandleAnchor, HandleKind, Line};
    use marque_imaging::{RecordingSurface, SurfaceOp};
    use marque_view2d::CanvasView;

    fn view() -> CanvasView {
        CanvasView::new()
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Box<Line> {
        Box::new(Line::new(x1, y1, x2, y2))
    }

    #[test]
    fn extents_union_children_skipping_invisible() {
        let view = view();
        let mut group = CanvasGroup::new();

        let a = group.add(&view, line(0.0, 0.0, 10.0, 10.0));
        group.add(&view, line(100.0, 100.0, 110.0, 110.0));

        let all = group.extents(&view).expect("two visible children");
        assert!(all.contains_point(5, 5));
        assert!(all.contains_point(105, 105));

        group
            .child_mut(a)
            .expect("child a is present")
            .set_visible(&view, false);
        let rest = group.extents(&view).expect("one visible child");
        assert!(!rest.contains_point(5, 5));
        assert!(rest.contains_point(105, 105));
    }

    #[test]
    fn empty_group_has_no_extents() {
        let view = view();
        let group = CanvasGroup::new();
        assert!(group.extents(&view).is_none());
    }

    #[test]
    fn hit_iff_some_child_hits() {
        let view = view();
        let mut group = CanvasGroup::new();
        group.add(
            &view,
            Box::new(Handle::new(
                HandleKind::FilledCircle,
                HandleAnchor::Center,
                50.0,
                50.0,
                10.0,
                10.0,
            )),
        );
        group.add(
            &view,
            Box::new(Handle::new(
                HandleKind::FilledCircle,
                HandleAnchor::Center,
                200.0,
                200.0,
                10.0,
                10.0,
            )),
        );

        assert!(group.hit(&view, 51.0, 51.0));
        assert!(group.hit(&view, 200.0, 200.0));
        assert!(!group.hit(&view, 120.0, 120.0));
    }

    #[test]
    fn children_paint_in_insertion_order() {
        let view = view();
        let mut group = CanvasGroup::new();
        group.add(&view, line(0.0, 0.0, 1.0, 0.0));
        group.add(&view, line(0.0, 5.0, 1.0, 5.0));

        let mut surface = RecordingSurface::new();
        group.draw(&view, &mut surface);

        let first = surface
            .ops()
            .iter()
            .position(|op| matches!(op, SurfaceOp::MoveTo { y, .. } if *y == 0.5))
            .expect("first child drawn");
        let second = surface
            .ops()
            .iter()
            .position(|op| matches!(op, SurfaceOp::MoveTo { y, .. } if *y == 5.5))
            .expect("second child drawn");
        assert!(first < second);
    }

    #[test]
    fn grouped_stroking_paints_once_at_the_end() {
        let view = view();
        let mut group = CanvasGroup::new();
        group.add(&view, line(0.0, 0.0, 10.0, 0.0));
        group.add(&view, line(0.0, 5.0, 10.0, 5.0));
        group.set_group_stroking(&view, true);

        let mut surface = RecordingSurface::new();
        group.draw(&view, &mut surface);

        // Each child deferred (one NewSubPath each); the group paints the
        // two-pass style once.
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::NewSubPath)), 2);
        assert_eq!(
            surface.count(|op| matches!(op, SurfaceOp::StrokePreserve)),
            1
        );
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 1);
    }

    #[test]
    fn restyle_is_one_notification_and_idempotent() {
        let view = view();
        let channel = DamageChannel::new();
        let mut group = CanvasGroup::new();
        group.attach_channel(channel.clone());

        group.add(&view, line(0.0, 0.0, 10.0, 0.0));
        group.add(&view, line(0.0, 5.0, 10.0, 5.0));
        let _ = channel.take_posts();

        group.set_group_stroking(&view, true);
        assert_eq!(
            channel.take_posts().len(),
            1,
            "one notification for the whole restyle"
        );

        // Repeating the same value must not re-walk children or notify.
        group.set_group_stroking(&view, true);
        assert!(channel.is_empty());

        // One resume per child suffices, proving the second call did not
        // suspend again.
        group.set_group_stroking(&view, false);
        assert_eq!(channel.take_posts().len(), 1);
    }

    #[test]
    fn child_added_to_a_stroking_group_is_suspended_on_entry() {
        let view = view();
        let mut group = CanvasGroup::new();
        group.set_group_stroking(&view, true);
        group.add(&view, line(0.0, 0.0, 10.0, 0.0));

        let mut surface = RecordingSurface::new();
        group.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::NewSubPath)), 1);
    }

    #[test]
    fn add_posts_the_new_childs_extents() {
        let view = view();
        let channel = DamageChannel::new();
        let mut group = CanvasGroup::new();
        group.attach_channel(channel.clone());

        group.add(&view, line(0.0, 0.0, 10.0, 10.0));
        let posts = channel.take_posts();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].contains_point(5, 5));
    }

    #[test]
    fn remove_returns_ownership_and_resumes() {
        let view = view();
        let channel = DamageChannel::new();
        let mut group = CanvasGroup::new();
        group.attach_channel(channel.clone());
        group.set_group_stroking(&view, true);

        let id = group.add(&view, line(0.0, 0.0, 10.0, 0.0));
        let _ = channel.take_posts();

        let item = group.remove(&view, id);
        assert_eq!(channel.take_posts().len(), 1, "vacated pixels repaint");
        assert!(group.is_empty());

        // The group's suspension was undone: the item strokes on its own
        // again.
        let mut surface = RecordingSurface::new();
        item.draw(&view, &mut surface);
        assert_eq!(surface.count(|op| matches!(op, SurfaceOp::Stroke)), 1);
    }

    #[test]
    #[should_panic(expected = "not in this group")]
    fn removing_a_stale_id_panics() {
        let view = view();
        let mut group = CanvasGroup::new();
        let id = group.add(&view, line(0.0, 0.0, 1.0, 1.0));
        group.remove(&view, id);
        group.remove(&view, id);
    }

    #[test]
    fn invisible_group_hides_all_children() {
        let view = view();
        let mut group = CanvasGroup::new();
        group.add(&view, line(0.0, 0.0, 10.0, 10.0));
        group.set_visible(&view, false);

        assert!(group.extents(&view).is_none());
        let mut surface = RecordingSurface::new();
        group.draw(&view, &mut surface);
        assert!(surface.ops().is_empty());
    }
}
