//! Rendering parameters and default data sources.

/// Logical canvas width of the map.
pub const WIDTH: f64 = 960.0;

/// Logical canvas height of the map.
pub const HEIGHT: f64 = 600.0;

/// Mercator projection scale.
pub const PROJECTION_SCALE: f64 = 130.0;

/// Projection translate, `(width / 2, height / 1.5)`.
pub const PROJECTION_TRANSLATE: (f64, f64) = (WIDTH / 2.0, HEIGHT / 1.5);

/// Minimum and maximum zoom factor.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 8.0);

/// Fill for countries with no data or a missing stability value.
pub const NEUTRAL_FILL: &str = "#f0f0f0";

/// Country border color.
pub const STROKE: &str = "#d3d3d3";

/// Stability domain stops, red (unstable) to green (stable).
pub const STABILITY_DOMAIN: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

/// Diverging palette, red -> yellow -> green, as packed `0xRRGGBB`.
pub const STABILITY_PALETTE: [u32; 6] = [
    0xd73027, 0xfc8d59, 0xfee08b, 0xd9ef8b, 0x91cf60, 0x1a9850,
];

/// Fixed y-axis range of the stability charts.
pub const STABILITY_RANGE: (f64, f64) = (-3.0, 3.0);

/// Comparison dropdown defaults.
pub const DEFAULT_COMPARISON: (&str, &str) = ("United States", "Russia");

/// Observation CSV, served next to the app.
pub const DEFAULT_OBSERVATIONS_SOURCE: &str = "updated_combined_data_with_russia.csv";

/// World boundaries, one feature per country with `properties.name`.
pub const DEFAULT_GEOJSON_SOURCE: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

/// Tooltip offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -20.0);
