// Copyright 2025 the Marque Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two-pass paint style shared by tool overlay items.
//!
//! Overlay shapes must stay readable over arbitrary document content, so
//! the default stroke paints each path twice: a wide dark casing pass,
//! then a narrow light line over it. Highlighted items swap the light
//! pass for green.

use marque_imaging::{Color, Surface};

/// Casing color: translucent black under every overlay stroke.
pub const CASING: Color = Color::from_rgba8(0, 0, 0, 153);

/// Foreground color: translucent white over the casing.
pub const FOREGROUND: Color = Color::from_rgba8(255, 255, 255, 204);

/// Foreground color of highlighted items.
pub const HIGHLIGHT: Color = Color::from_rgba8(0, 255, 64, 255);

/// Width of the casing pass when stroking.
pub const CASING_WIDTH: f64 = 3.0;

/// Width of the casing outline drawn around filled shapes.
pub const FILL_CASING_WIDTH: f64 = 2.0;

/// Width of the foreground pass.
pub const FOREGROUND_WIDTH: f64 = 1.0;

/// Configures the surface for the casing stroke pass.
pub fn apply_casing(surface: &mut dyn Surface) {
    surface.set_line_width(CASING_WIDTH);
    surface.set_color(CASING);
}

/// Configures the surface for the foreground pass.
pub fn apply_foreground(surface: &mut dyn Surface, highlight: bool) {
    surface.set_line_width(FOREGROUND_WIDTH);
    surface.set_color(if highlight { HIGHLIGHT } else { FOREGROUND });
}
