//! Core types for the political stability map.
//!
//! This crate holds everything that does not depend on a storage backend
//! or a UI toolkit:
//! - `observation`: per-country, per-year rows parsed from the source CSV
//! - `geo_feature`: named country boundaries parsed from a GeoJSON FeatureCollection
//! - `color_scale`: the fixed diverging stability palette
//! - `projection`: Mercator projection and SVG path generation
//! - `zoom`: pan/zoom transform with scale and translate extents
//! - `config`: canvas size, palette stops, default sources
//! - `error`: typed load/lookup errors

pub mod color_scale;
pub mod config;
pub mod error;
pub mod geo_feature;
pub mod observation;
pub mod projection;
pub mod zoom;

pub use color_scale::ColorScale;
pub use error::{LoadError, NotFoundError, SelectionError};
pub use geo_feature::GeoFeature;
pub use observation::ObservationRow;
pub use projection::Projection;
pub use zoom::ZoomTransform;
