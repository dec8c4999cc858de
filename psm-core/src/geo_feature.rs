use crate::error::LoadError;
use geojson::{GeoJson, Value};
use serde::Serialize;

/// A `[longitude, latitude]` pair in degrees.
pub type LonLat = [f64; 2];

/// A closed ring of positions; the first ring of a polygon is its exterior.
pub type Ring = Vec<LonLat>;

/// One polygon: exterior ring followed by holes.
pub type Polygon = Vec<Ring>;

/// A named country boundary.
///
/// `name` is the join key against `ObservationRow::country`, matched exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFeature {
    pub name: String,
    pub polygons: Vec<Polygon>,
}

impl GeoFeature {
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    /// Parse a GeoJSON FeatureCollection into named boundaries.
    ///
    /// `Polygon` and `MultiPolygon` geometries are kept; any other geometry
    /// (or none) yields a feature with no polygons so it still takes part in
    /// hover and click handling. A missing `name` property becomes `""`.
    pub fn parse_collection(geojson_data: &str) -> Result<Vec<GeoFeature>, LoadError> {
        let collection = match geojson_data.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(LoadError::NotFeatureCollection),
        };

        let mut unsupported = 0usize;
        let features: Vec<GeoFeature> = collection
            .features
            .into_iter()
            .map(|feature| {
                let name = feature
                    .property("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                let polygons = match feature.geometry.map(|g| g.value) {
                    Some(Value::Polygon(rings)) => vec![convert_polygon(rings)],
                    Some(Value::MultiPolygon(polygons)) => {
                        polygons.into_iter().map(convert_polygon).collect()
                    }
                    _ => {
                        unsupported += 1;
                        Vec::new()
                    }
                };
                GeoFeature { name, polygons }
            })
            .collect();

        if unsupported > 0 {
            log::warn!(
                "boundaries: {} features without polygon geometry",
                unsupported
            );
        }
        log::info!("boundaries: parsed {} features", features.len());
        Ok(features)
    }
}

fn convert_polygon(rings: Vec<Vec<Vec<f64>>>) -> Polygon {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter(|position| position.len() >= 2)
                .map(|position| [position[0], position[1]])
                .collect()
        })
        .collect()
}
