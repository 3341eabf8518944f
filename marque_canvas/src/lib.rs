// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marque Canvas: overlay items with coalesced damage tracking.
//!
//! Canvas items are the shapes an image editor draws *over* the document:
//! tool handles, guides, selection outlines, sample-point markers, the
//! passe-partout. They are headless view objects. Geometry lives in model
//! space; a borrowed [`CanvasView`](marque_view2d::CanvasView) converts
//! to device pixels at draw time, and a
//! [`Surface`](marque_imaging::Surface) receives the vector commands.
//!
//! # The item contract
//!
//! Every shape implements [`CanvasItem`], whose provided methods are
//! uniform across shapes:
//!
//! - [`draw`](CanvasItem::draw) gates on visibility and brackets the
//!   shape in save/restore.
//! - [`extents`](CanvasItem::extents) reports the damage region the
//!   shape paints.
//! - [`begin_change`](CanvasItem::begin_change) /
//!   [`end_change`](CanvasItem::end_change) coalesce nested mutations
//!   into one notification on a [`DamageChannel`], covering both the
//!   before and after extents so no stale pixels survive a move.
//! - Counted suspend/resume gates let a [`CanvasGroup`] collect child
//!   geometry into a single stroked or filled path.
//!
//! # Example
//!
//! ```
//! use marque_canvas::{CanvasItem, DamageChannel, Line};
//! use marque_view2d::CanvasView;
//!
//! let view = CanvasView::new();
//! let channel = DamageChannel::new();
//!
//! let mut line = Line::new(0.0, 0.0, 100.0, 0.0);
//! line.attach_channel(channel.clone());
//!
//! // One mutation, one notification, covering old and new extents.
//! line.set_points(&view, 0.0, 50.0, 100.0, 50.0);
//! let damage = channel.take().expect("the move posted damage");
//! assert!(damage.contains_point(50, 0));
//! assert!(damage.contains_point(50, 50));
//! ```
//!
//! ## Design notes
//!
//! - Items never learn about the windowing system, rasterization, or
//!   color management; [`Surface`](marque_imaging::Surface) and
//!   [`Region`](marque_region::Region) are the only boundaries.
//! - Everything is single-threaded and synchronous. The change bracket
//!   orders notifications within one call stack; it is not a lock.
//! - Contract violations (unbalanced brackets, resume below zero,
//!   removing an absent child) panic. The only soft failure is the
//!   stroke/fill cross-suspension check, which logs a warning.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod corner;
mod group;
mod guide;
mod handle;
mod item;
mod layer_boundary;
mod line;
mod notify;
mod passe_partout;
mod path;
mod pen;
mod polygon;
mod rectangle_guides;
mod sample_point;
pub mod style;
mod text_cursor;

pub use anchor::HandleAnchor;
pub use corner::Corner;
pub use group::{CanvasGroup, ChildId};
pub use guide::{Guide, GuideOrientation};
pub use handle::{Handle, HandleKind};
pub use item::{CanvasItem, ItemCore};
pub use layer_boundary::LayerBoundary;
pub use line::Line;
pub use notify::DamageChannel;
pub use passe_partout::PassePartout;
pub use path::Path;
pub use pen::Pen;
pub use polygon::Polygon;
pub use rectangle_guides::{GuidesKind, RectangleGuides};
pub use sample_point::SamplePoint;
pub use text_cursor::TextCursor;
