//! Error types shared by the loaders and the view layer.

use thiserror::Error;

/// Failure to load either input. Fatal to initialization: no partial map is drawn.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {what}: {reason}")]
    Fetch { what: String, reason: String },

    #[error("failed to parse observations CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("observations CSV is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("failed to parse boundaries: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("boundaries are not a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    #[error("failed to store observations: {0}")]
    Storage(String),
}

impl LoadError {
    pub fn fetch(what: impl Into<String>, reason: impl ToString) -> Self {
        LoadError::Fetch {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}

/// A selected country has no rows in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Data not available for {country}")]
pub struct NotFoundError {
    pub country: String,
}

/// A comparison selection outside the populated country list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("`{0}` is not one of the selectable countries")]
    UnknownCountry(String),
}
