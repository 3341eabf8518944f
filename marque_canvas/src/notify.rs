// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage notification between items and a repaint scheduler.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use marque_region::Region;
use smallvec::SmallVec;

/// A queue of damage notifications shared between items and one consumer.
///
/// A `DamageChannel` is a cheaply clonable handle; every clone refers to
/// the same queue. The view that owns a set of items attaches one channel
/// to all of them, and its repaint scheduler drains the queue once per
/// frame with [`take`](Self::take).
///
/// Channel presence doubles as the listener check: an item with no
/// channel attached never snapshots or computes extents for change
/// notification, which keeps property writes cheap while nothing is
/// watching.
///
/// The model is single-threaded and event-loop driven; the handle is
/// deliberately not `Send`.
#[derive(Clone, Debug, Default)]
pub struct DamageChannel {
    posts: Rc<RefCell<SmallVec<[Region; 2]>>>,
}

impl DamageChannel {
    /// Creates a channel with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one damage notification.
    ///
    /// Empty regions are dropped; a post always means "repaint something".
    pub fn post(&self, region: Region) {
        if !region.is_empty() {
            self.posts.borrow_mut().push(region);
        }
    }

    /// Number of notifications currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.borrow().len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.borrow().is_empty()
    }

    /// Drains the queue into a single unioned region.
    ///
    /// Returns `None` when nothing was posted. This is what a repaint
    /// scheduler consumes.
    pub fn take(&self) -> Option<Region> {
        let mut posts = self.posts.borrow_mut();
        if posts.is_empty() {
            return None;
        }
        let mut union = Region::new();
        for region in posts.drain(..) {
            union.union(&region);
        }
        Some(union)
    }

    /// Drains the queue keeping notifications separate.
    ///
    /// Tests use this to assert how many notifications a mutation
    /// produced, not just what they cover.
    pub fn take_posts(&self) -> Vec<Region> {
        self.posts.borrow_mut().drain(..).collect()
    }

    /// Returns `true` if `other` is a handle to the same queue.
    #[must_use]
    pub fn same_channel(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.posts, &other.posts)
    }
}
