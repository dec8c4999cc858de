//! Spherical Mercator projection and SVG path generation for boundaries.

use crate::config::{PROJECTION_SCALE, PROJECTION_TRANSLATE};
use crate::geo_feature::{GeoFeature, LonLat};
use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt::Write;

/// Mercator projection with a uniform scale and a pixel translate.
///
/// Projected y is limited to `±π` (about ±85.05° latitude) so polar rings
/// stay finite, matching the square clip extent of a default web Mercator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            scale: PROJECTION_SCALE,
            translate: PROJECTION_TRANSLATE,
        }
    }
}

impl Projection {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        Self { scale, translate }
    }

    /// Project `[lon, lat]` degrees to canvas coordinates.
    pub fn project(&self, [lon, lat]: LonLat) -> (f64, f64) {
        let lambda = lon.to_radians();
        let phi = lat.to_radians();
        let y = (FRAC_PI_4 + phi / 2.0).tan().ln().clamp(-PI, PI);
        (
            self.translate.0 + self.scale * lambda,
            self.translate.1 - self.scale * y,
        )
    }

    /// Inverse of [`project`](Self::project) within the clipped band.
    pub fn invert(&self, (x, y): (f64, f64)) -> LonLat {
        let lambda = (x - self.translate.0) / self.scale;
        let my = (self.translate.1 - y) / self.scale;
        let phi = 2.0 * my.exp().atan() - PI / 2.0;
        [lambda.to_degrees(), phi.to_degrees()]
    }

    /// SVG path data for a feature: `Mx,yLx,y…Z` per ring.
    ///
    /// Closing positions that repeat the first are dropped before `Z`.
    /// Coordinates are rounded to three decimals. Features without
    /// polygons produce an empty string.
    pub fn path(&self, feature: &GeoFeature) -> String {
        let mut d = String::new();
        for polygon in &feature.polygons {
            for ring in polygon {
                let points = match (ring.first(), ring.last()) {
                    (Some(first), Some(last)) if ring.len() > 1 && first == last => {
                        &ring[..ring.len() - 1]
                    }
                    _ => &ring[..],
                };
                if points.is_empty() {
                    continue;
                }
                for (i, &position) in points.iter().enumerate() {
                    let (x, y) = self.project(position);
                    let command = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(d, "{}{},{}", command, fmt_coord(x), fmt_coord(y));
                }
                d.push('Z');
            }
        }
        d
    }
}

/// Shortest decimal form rounded to three places, without negative zero.
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
