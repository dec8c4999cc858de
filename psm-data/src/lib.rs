//! View models for the stability map.
//!
//! Turns the observation store and the boundary features into forms the
//! renderers consume directly: a colored map, chart specs for one country,
//! paired series for two countries, and the map interaction state machine.

pub mod chart;
pub mod comparison;
pub mod map;
pub mod session;

use psm_core::{NotFoundError, SelectionError};
use thiserror::Error;

pub use chart::{ChartSpec, DetailCharts, Metric, Series};
pub use comparison::{ComparisonCharts, ComparisonView};
pub use map::{ChoroplethMap, CountryShape};
pub use session::{MapEvent, Outcome, Session, Tooltip, ViewState};

/// Failure of a view operation.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("dataset query failed: {0}")]
    Query(String),
}

impl From<anyhow::Error> for ViewError {
    fn from(e: anyhow::Error) -> Self {
        ViewError::Query(e.to_string())
    }
}
