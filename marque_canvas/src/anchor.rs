// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor positions and the two anchor-shift conventions.

/// Where a handle-like shape attaches relative to its logical point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandleAnchor {
    /// Centered on the point.
    Center,
    /// Above the point.
    North,
    /// Above and left.
    NorthWest,
    /// Above and right.
    NorthEast,
    /// Below the point.
    South,
    /// Below and left.
    SouthWest,
    /// Below and right.
    SouthEast,
    /// Left of the point.
    West,
    /// Right of the point.
    East,
}

/// Shifts an anchored point to the shape's north-west corner.
///
/// Used by shapes whose drawing origin is their corner (squares). Not
/// interchangeable with [`shift_to_center`]: the two conventions place
/// edge anchors differently and shapes pick one by kind.
pub(crate) fn shift_to_north_west(
    anchor: HandleAnchor,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    match anchor {
        HandleAnchor::Center => (x - width / 2.0, y - height / 2.0),
        HandleAnchor::North => (x - width / 2.0, y),
        HandleAnchor::NorthWest => (x, y),
        HandleAnchor::NorthEast => (x - width, y),
        HandleAnchor::South => (x - width / 2.0, y - height),
        HandleAnchor::SouthWest => (x, y - height),
        HandleAnchor::SouthEast => (x - width, y - height),
        HandleAnchor::West => (x, y - height / 2.0),
        HandleAnchor::East => (x - width, y - height / 2.0),
    }
}

/// Shifts an anchored point to the shape's center.
///
/// Used by shapes whose drawing origin is their center (circles,
/// crosses, diamonds): a `North` anchor hangs the shape below the point,
/// corner anchors tuck it diagonally inward.
pub(crate) fn shift_to_center(
    anchor: HandleAnchor,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    match anchor {
        HandleAnchor::Center => (x, y),
        HandleAnchor::North => (x, y + height / 2.0),
        HandleAnchor::NorthWest => (x + width / 2.0, y + height / 2.0),
        HandleAnchor::NorthEast => (x - width / 2.0, y + height / 2.0),
        HandleAnchor::South => (x, y - height / 2.0),
        HandleAnchor::SouthWest => (x + width / 2.0, y - height / 2.0),
        HandleAnchor::SouthEast => (x - width / 2.0, y - height / 2.0),
        HandleAnchor::West => (x + width / 2.0, y),
        HandleAnchor::East => (x - width / 2.0, y),
    }
}
