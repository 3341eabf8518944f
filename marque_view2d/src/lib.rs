// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marque View 2D: canvas view state and coordinate conversion.
//!
//! [`CanvasView`] is a small, headless model of a document view: a pan
//! offset in device pixels, independent horizontal and vertical scale
//! factors, and the size of the viewport being drawn into. It owns no
//! scene and draws nothing; canvas items borrow it to convert their
//! model-space geometry into device pixels, which keeps pan and zoom
//! changes uniform across every item without any item re-deriving scale
//! logic.
//!
//! Two conversion families are provided:
//! - Float-precise ([`CanvasView::to_device`], [`CanvasView::to_model`])
//!   for drawing, where fractional device coordinates matter.
//! - Integer ([`CanvasView::to_device_int`],
//!   [`CanvasView::to_model_rounded`]) for damage rectangles and event
//!   positions. The integer path computes in wide arithmetic and clamps,
//!   because a large document at a high zoom level overflows 32 bits.
//!
//! # Example
//!
//! ```
//! use marque_view2d::CanvasView;
//!
//! let mut view = CanvasView::new();
//! view.set_scale(2.0, 2.0);
//! view.set_offset(100.0, 0.0);
//!
//! let (dx, dy) = view.to_device(75.0, 40.0);
//! assert_eq!((dx, dy), (50.0, 80.0));
//!
//! let (mx, my) = view.to_model(dx, dy);
//! assert_eq!((mx, my), (75.0, 40.0));
//! ```
//!
//! ## Design notes
//!
//! - Scale factors are independent per axis; anisotropic zoom is a
//!   supported view state, so there is no single "zoom" scalar.
//! - The view is plain data with no interior mutability. Whatever owns
//!   the view mutates it; items only read it.
//! - Fitting, clamping, and input handling belong to higher layers.
//!
//! This crate is `no_std`.

#![no_std]

mod view;

pub use view::CanvasView;
