// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marque Imaging: the drawing surface canvas items paint onto.
//!
//! This crate defines [`Surface`], a small immediate-mode drawing-context
//! trait, together with [`SurfaceOp`], a plain-old-data mirror of every
//! trait method, and [`RecordingSurface`], a backend that records ops
//! instead of producing pixels.
//!
//! # Position in the stack
//!
//! - **Items**: overlay shapes that emit vector drawing commands. They
//!   live in `marque_canvas` and consume `&mut dyn Surface`.
//! - **Surface trait (this crate)**: scoped graphics state, path
//!   construction, stroke/fill/clip.
//! - **Backends**: adapters over a real 2D renderer, or
//!   [`RecordingSurface`] for tests and debugging.
//!
//! # Semantics backends must honor
//!
//! - [`Surface::save`] / [`Surface::restore`] bracket the *graphics
//!   state* (transform, clip, color, line style). The current path is
//!   **not** part of the saved state: a path built inside a
//!   save/restore pair survives it. Grouped item stroking relies on this
//!   to accumulate one path across many children before stroking it
//!   once.
//! - Painting ([`Surface::stroke`], [`Surface::fill`]) consumes the
//!   current path; the `_preserve` variants keep it, which is how the
//!   two-pass outline-then-foreground item style paints one path twice.
//! - [`Surface::new_sub_path`] ends the current sub-path without adding
//!   any geometry, so a following `arc` or `move_to` starts cleanly.
//!
//! # Example
//!
//! ```
//! use marque_imaging::{RecordingSurface, Surface, SurfaceOp};
//!
//! let mut surface = RecordingSurface::new();
//! surface.save();
//! surface.move_to(0.5, 0.5);
//! surface.line_to(10.5, 0.5);
//! surface.stroke();
//! surface.restore();
//!
//! assert_eq!(surface.ops().len(), 5);
//! assert!(matches!(surface.ops()[3], SurfaceOp::Stroke));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;
mod surface;

pub use recording::RecordingSurface;
pub use surface::{Surface, SurfaceOp};

/// Line cap style applied to stroked path ends.
pub use kurbo::Cap as LineCap;
/// Fill rule used for filling and clipping.
pub use peniko::Fill as FillRule;
/// Solid color used by [`Surface::set_color`].
pub use peniko::Color;
