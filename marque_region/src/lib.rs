// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marque Region: integer damage regions.
//!
//! A [`Region`] is a set of device-space pixels represented as pairwise
//! disjoint, axis-aligned integer rectangles ([`RectI`]). Regions are what
//! canvas items report as their paintable extents and what a repaint
//! scheduler consumes to decide which parts of a surface to redraw.
//!
//! The operations are the ones damage tracking actually needs:
//! - Union, for coalescing the before/after extents of a change.
//! - Subtraction, for "everything except this window" shapes.
//! - Bounding extents, point membership, and translation.
//!
//! Rectangle decomposition is an implementation detail: two regions that
//! cover the same pixels compare equal even when their internal rectangle
//! lists differ.
//!
//! # Example
//!
//! ```
//! use marque_region::{RectI, Region};
//!
//! let mut damage = Region::from_rect(RectI::new(0, 0, 10, 10));
//! damage.union_rect(RectI::new(5, 5, 10, 10));
//!
//! assert!(damage.contains_point(12, 12));
//! assert_eq!(damage.extents(), RectI::new(0, 0, 15, 15));
//!
//! damage.subtract_rect(RectI::new(0, 0, 20, 20));
//! assert!(damage.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc` via `smallvec`.

#![no_std]

extern crate alloc;

mod rect;
mod region;

pub use rect::RectI;
pub use region::Region;
