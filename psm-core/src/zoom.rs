//! Pan/zoom transform for the map layer.
//!
//! Behaves like d3-zoom with `scaleExtent([1, 8])` and a translate extent
//! equal to the canvas: after every gesture the transform is constrained
//! so the viewport never leaves the canvas bounds.

use crate::config::{HEIGHT, SCALE_EXTENT, WIDTH};
use std::fmt;

/// Axis-aligned bounds `[[x0, y0], [x1, y1]]`.
pub type Extent = [[f64; 2]; 2];

/// The canvas bounds, used as both viewport and translate extent.
pub const CANVAS_EXTENT: Extent = [[0.0, 0.0], [WIDTH, HEIGHT]];

/// `translate(x, y) scale(k)` applied to the map group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn apply(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (px * self.k + self.x, py * self.k + self.y)
    }

    pub fn invert(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (self.invert_x(px), self.invert_y(py))
    }

    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.x) / self.k
    }

    pub fn invert_y(&self, py: f64) -> f64 {
        (py - self.y) / self.k
    }

    /// Shift by `(dx, dy)` in untransformed units.
    fn translate(self, dx: f64, dy: f64) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return self;
        }
        Self {
            k: self.k,
            x: self.x + self.k * dx,
            y: self.y + self.k * dy,
        }
    }

    /// Keep the viewport `extent` inside `translate_extent`.
    ///
    /// When the viewport is larger than the translate extent on an axis the
    /// content is centred; otherwise it is pushed back against the nearest edge.
    pub fn constrain(self, extent: Extent, translate_extent: Extent) -> Self {
        let dx0 = self.invert_x(extent[0][0]) - translate_extent[0][0];
        let dx1 = self.invert_x(extent[1][0]) - translate_extent[1][0];
        let dy0 = self.invert_y(extent[0][1]) - translate_extent[0][1];
        let dy1 = self.invert_y(extent[1][1]) - translate_extent[1][1];
        self.translate(axis_correction(dx0, dx1), axis_correction(dy0, dy1))
    }

    /// Rescale to `k` (clamped to the scale extent) keeping `pointer` fixed.
    pub fn scale_to(self, k: f64, pointer: (f64, f64)) -> Self {
        let k = k.clamp(SCALE_EXTENT.0, SCALE_EXTENT.1);
        if k == self.k {
            return self;
        }
        let (ix, iy) = self.invert(pointer);
        Self {
            k,
            x: pointer.0 - ix * k,
            y: pointer.1 - iy * k,
        }
        .constrain(CANVAS_EXTENT, CANVAS_EXTENT)
    }

    /// Multiply the scale by `factor` around `pointer`.
    pub fn scale_by(self, factor: f64, pointer: (f64, f64)) -> Self {
        self.scale_to(self.k * factor, pointer)
    }

    /// Wheel gesture; `delta_y` in pixels, positive when scrolling down (zoom out).
    pub fn wheel(self, delta_y: f64, pointer: (f64, f64)) -> Self {
        self.scale_by(2f64.powf(-delta_y * 0.002), pointer)
    }

    /// Double click zooms in by two, or out by two with shift held.
    pub fn double_click(self, pointer: (f64, f64), shift: bool) -> Self {
        self.scale_by(if shift { 0.5 } else { 2.0 }, pointer)
    }

    /// Drag by `(dx, dy)` screen pixels.
    pub fn pan(self, dx: f64, dy: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + dx,
            y: self.y + dy,
        }
        .constrain(CANVAS_EXTENT, CANVAS_EXTENT)
    }
}

fn axis_correction(d0: f64, d1: f64) -> f64 {
    if d1 > d0 {
        return (d0 + d1) / 2.0;
    }
    let low = d0.min(0.0);
    if low != 0.0 && !low.is_nan() {
        low
    } else {
        d1.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_formats_like_svg_transform() {
        assert_eq!(
            ZoomTransform::IDENTITY.to_string(),
            "translate(0,0) scale(1)"
        );
    }

    #[test]
    fn cannot_pan_at_minimum_scale() {
        let t = ZoomTransform::IDENTITY.pan(100.0, -50.0);
        assert_eq!(t, ZoomTransform::IDENTITY);
    }

    #[test]
    fn scale_is_clamped_to_extent() {
        let center = (480.0, 300.0);
        let zoomed = ZoomTransform::IDENTITY.scale_by(100.0, center);
        assert_eq!(zoomed.k, 8.0);
        let out = zoomed.scale_by(0.001, center);
        assert_eq!(out, ZoomTransform::IDENTITY);
    }

    #[test]
    fn zoom_keeps_pointer_fixed() {
        let pointer = (480.0, 300.0);
        let t = ZoomTransform::IDENTITY.scale_by(2.0, pointer);
        assert_eq!(t.k, 2.0);
        assert_eq!(t.apply((480.0, 300.0)), pointer);
        assert_eq!(t.to_string(), "translate(-480,-300) scale(2)");
    }

    #[test]
    fn zoom_near_edge_is_pushed_back_inside() {
        // Zooming on the top-left corner would expose nothing outside the
        // canvas, so the origin stays pinned.
        let t = ZoomTransform::IDENTITY.scale_by(4.0, (0.0, 0.0));
        assert_eq!((t.x, t.y), (0.0, 0.0));
        let t = t.pan(50.0, 50.0);
        assert_eq!((t.x, t.y), (0.0, 0.0));
    }

    #[test]
    fn pan_within_bounds_when_zoomed() {
        let t = ZoomTransform::IDENTITY.scale_by(2.0, (480.0, 300.0));
        let moved = t.pan(100.0, 100.0);
        assert_eq!((moved.x, moved.y), (-380.0, -200.0));
        // Right/bottom edge: content may not move past x = -960, y = -600.
        let far = t.pan(-2000.0, -2000.0);
        assert_eq!((far.x, far.y), (-960.0, -600.0));
    }

    #[test]
    fn wheel_down_zooms_out() {
        let t = ZoomTransform::IDENTITY.scale_by(4.0, (480.0, 300.0));
        let out = t.wheel(500.0, (480.0, 300.0));
        assert!((out.k - 2.0).abs() < 1e-9);
        let inn = t.wheel(-500.0, (480.0, 300.0));
        assert!((inn.k - 8.0).abs() < 1e-9);
    }

    #[test]
    fn double_click_doubles_or_halves() {
        let t = ZoomTransform::IDENTITY.double_click((480.0, 300.0), false);
        assert_eq!(t.k, 2.0);
        let back = t.double_click((480.0, 300.0), true);
        assert_eq!(back, ZoomTransform::IDENTITY);
    }
}
