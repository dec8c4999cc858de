//! Piecewise-linear stability -> color mapping.
//!
//! Mirrors a d3 linear scale with color interpolation: when the domain and
//! range differ in length, only the first `min(len)` stops are used, values
//! outside the domain extrapolate along the end segments, and channels are
//! rounded and clamped when formatted as `rgb(r, g, b)`.

use crate::config::{NEUTRAL_FILL, STABILITY_DOMAIN, STABILITY_PALETTE};
use serde::Serialize;
use std::fmt;

/// An sRGB color with unclamped channels (interpolation may overshoot).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f64,
            g: ((hex >> 8) & 0xff) as f64,
            b: (hex & 0xff) as f64,
        }
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

fn lerp_channel(a: f64, b: f64, t: f64) -> f64 {
    let d = b - a;
    if d == 0.0 {
        a
    } else {
        a + t * d
    }
}

/// Round half up and clamp to a displayable channel; NaN becomes 0.
fn clamp_channel(value: f64) -> u8 {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() {
        0
    } else {
        rounded.clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b)
        )
    }
}

/// Fixed mapping from a stability value to a fill color. Pure, no state.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<f64>,
    range: Vec<Rgb>,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::stability()
    }
}

impl ColorScale {
    /// Domain stops must be ascending. Extra stops on either side are dropped.
    pub fn new(domain: &[f64], range: &[Rgb]) -> Self {
        let len = domain.len().min(range.len());
        Self {
            domain: domain[..len].to_vec(),
            range: range[..len].to_vec(),
        }
    }

    /// The red -> yellow -> green political stability palette.
    pub fn stability() -> Self {
        let palette: Vec<Rgb> = STABILITY_PALETTE.iter().map(|&hex| Rgb::from_hex(hex)).collect();
        Self::new(&STABILITY_DOMAIN, &palette)
    }

    /// Stops actually in effect, as `(value, color)` pairs. Used for legends.
    pub fn stops(&self) -> impl Iterator<Item = (f64, Rgb)> + '_ {
        self.domain.iter().copied().zip(self.range.iter().copied())
    }

    /// Interpolated color for `value`.
    pub fn color(&self, value: f64) -> Rgb {
        match self.range.len() {
            0 => Rgb::from_hex(0),
            1 => self.range[0],
            len => {
                let last = len - 1;
                let i = bisect_right(&self.domain, value, 1, last) - 1;
                let (d0, d1) = (self.domain[i], self.domain[i + 1]);
                let t = (value - d0) / (d1 - d0);
                self.range[i].lerp(self.range[i + 1], t)
            }
        }
    }

    /// The formatted color, e.g. `rgb(121, 196, 93)`.
    pub fn apply(&self, value: f64) -> String {
        self.color(value).to_string()
    }

    /// Map fill: the scaled color for a numeric value, otherwise the neutral fill.
    pub fn fill(&self, value: Option<f64>) -> String {
        match value {
            Some(v) if !v.is_nan() => self.apply(v),
            _ => NEUTRAL_FILL.to_string(),
        }
    }
}

fn bisect_right(values: &[f64], x: f64, mut lo: usize, mut hi: usize) -> usize {
    while lo < hi {
        let mid = (lo + hi) / 2;
        if x < values[mid] {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_six_domain_stops() {
        let scale = ColorScale::stability();
        let stops: Vec<f64> = scale.stops().map(|(v, _)| v).collect();
        assert_eq!(stops, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn exact_stops_map_to_palette() {
        let scale = ColorScale::stability();
        assert_eq!(scale.apply(-3.0), "rgb(215, 48, 39)");
        assert_eq!(scale.apply(0.0), "rgb(217, 239, 139)");
        assert_eq!(scale.apply(2.0), "rgb(26, 152, 80)");
    }

    #[test]
    fn interpolates_between_stops() {
        let scale = ColorScale::stability();
        assert_eq!(scale.apply(1.2), "rgb(121, 196, 93)");
        // halfway values round up
        assert_eq!(scale.apply(-0.5), "rgb(236, 232, 139)");
    }

    #[test]
    fn extrapolates_and_clamps_outside_domain() {
        let scale = ColorScale::stability();
        assert_eq!(scale.apply(3.0), "rgb(0, 97, 64)");
        assert_eq!(scale.apply(-4.0), "rgb(178, 0, 0)");
    }

    #[test]
    fn missing_values_use_neutral_fill() {
        let scale = ColorScale::stability();
        assert_eq!(scale.fill(None), NEUTRAL_FILL);
        assert_eq!(scale.fill(Some(f64::NAN)), NEUTRAL_FILL);
        assert_eq!(scale.fill(Some(2.0)), "rgb(26, 152, 80)");
    }

    #[test]
    fn single_segment_scale() {
        let scale = ColorScale::new(&[0.0, 10.0], &[Rgb::from_hex(0x000000), Rgb::from_hex(0xffffff)]);
        assert_eq!(scale.apply(5.0), "rgb(128, 128, 128)");
    }
}
