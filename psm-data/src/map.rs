//! Choropleth map model: one projected, colored shape per boundary feature.

use psm_core::config::{HEIGHT, STROKE, WIDTH};
use psm_core::{ColorScale, GeoFeature, Projection, ZoomTransform};
use psm_db::Database;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

/// A country polygon ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryShape {
    pub name: String,
    /// SVG path data, empty for features without polygons.
    pub path: String,
    pub fill: String,
    /// Stability value behind `fill`, if any.
    pub stability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethMap {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<CountryShape>,
}

impl ChoroplethMap {
    /// Color each feature by the stability of its first matching row.
    ///
    /// `first_stability` maps country name to the stability of that country's
    /// first row in source order. The join is by exact name; features without
    /// a match, or whose first row has no value, get the neutral fill.
    pub fn build(
        features: &[GeoFeature],
        first_stability: &HashMap<String, Option<f64>>,
        scale: &ColorScale,
        projection: &Projection,
    ) -> Self {
        let shapes: Vec<CountryShape> = features
            .iter()
            .map(|feature| {
                let stability = first_stability
                    .get(&feature.name)
                    .copied()
                    .flatten()
                    .filter(|v| !v.is_nan());
                CountryShape {
                    name: feature.name.clone(),
                    path: projection.path(feature),
                    fill: scale.fill(stability),
                    stability,
                }
            })
            .collect();

        let unmatched = shapes
            .iter()
            .filter(|s| !first_stability.contains_key(&s.name))
            .count();
        if unmatched > 0 {
            log::info!(
                "map: {} of {} features have no matching country rows",
                unmatched,
                shapes.len()
            );
        }

        Self {
            width: WIDTH,
            height: HEIGHT,
            shapes,
        }
    }

    /// Build with the default palette and projection from the store.
    pub fn from_database(features: &[GeoFeature], db: &Database) -> anyhow::Result<Self> {
        let first = db.query_first_stability()?;
        Ok(Self::build(
            features,
            &first,
            &ColorScale::stability(),
            &Projection::default(),
        ))
    }

    pub fn shape(&self, name: &str) -> Option<&CountryShape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Standalone SVG document with a hover title on each country.
    pub fn to_svg(&self, transform: ZoomTransform) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        let _ = writeln!(svg, r#"<g transform="{}">"#, transform);
        for shape in &self.shapes {
            if shape.path.is_empty() {
                continue;
            }
            let _ = writeln!(
                svg,
                r#"<path d="{}" fill="{}" stroke="{}"><title>{}</title></path>"#,
                shape.path,
                shape.fill,
                STROKE,
                escape_xml(&shape.name)
            );
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
