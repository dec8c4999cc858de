//! Time-series chart specs.
//!
//! All structs derive `Serialize` so they can be handed to the D3 chart
//! bridge as JSON. Missing values serialize as `null` and render as gaps.

use crate::ViewError;
use psm_core::config::STABILITY_RANGE;
use psm_core::{NotFoundError, ObservationRow};
use psm_db::Database;
use serde::Serialize;

/// Series color of the arms chart on the detail view.
pub const ARMS_COLOR: &str = "#ff7f0e";
/// Series color of the stability chart on the detail view.
pub const STABILITY_COLOR: &str = "#1f77b4";
/// Every trace draws lines with point markers.
pub const LINES_AND_MARKERS: &str = "lines+markers";

/// Which metric a series plots against year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    ArmsDeliveries,
    StabilityEstimate,
}

impl Metric {
    pub fn value(self, row: &ObservationRow) -> Option<f64> {
        match self {
            Metric::ArmsDeliveries => row.arms_deliveries,
            Metric::StabilityEstimate => row.stability_estimate,
        }
    }
}

/// One line on a chart: `x` years against `y` values, same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub mode: &'static str,
    pub x: Vec<i32>,
    pub y: Vec<Option<f64>>,
}

impl Series {
    /// Plot `metric` for `rows`, in the order given. Rows without a year
    /// have no x position and are left out.
    pub fn from_rows(name: impl Into<String>, rows: &[ObservationRow], metric: Metric) -> Self {
        let (x, y): (Vec<i32>, Vec<Option<f64>>) = rows
            .iter()
            .filter_map(|r| r.year.map(|year| (year, metric.value(r))))
            .unzip();
        Self {
            name: name.into(),
            color: None,
            mode: LINES_AND_MARKERS,
            x,
            y,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Title, axes and series of one chart pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Fixed y-axis domain; `None` lets the chart fit the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, series: Vec<Series>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: None,
            y_range: None,
            series,
        }
    }

    pub fn labels(mut self, x: &str, y: &str) -> Self {
        self.x_label = Some(x.to_string());
        self.y_label = Some(y.to_string());
        self
    }

    pub fn y_range(mut self, (min, max): (f64, f64)) -> Self {
        self.y_range = Some([min, max]);
        self
    }

    /// JSON handed to the chart bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The two charts shown for a clicked country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailCharts {
    pub country: String,
    pub arms: ChartSpec,
    pub stability: ChartSpec,
}

impl DetailCharts {
    /// Build the detail charts from the country's rows.
    ///
    /// Rows are sorted by year here (stable, so same-year rows keep their
    /// order). No rows means the country has no data; rows that all lack a
    /// year still make a country with empty charts.
    pub fn from_rows(country: &str, rows: &[ObservationRow]) -> Result<Self, NotFoundError> {
        if rows.is_empty() {
            return Err(NotFoundError {
                country: country.to_string(),
            });
        }
        let mut sorted = rows.to_vec();
        sorted.sort_by_key(|r| r.year);

        let arms = ChartSpec::new(
            format!("{} - Arms Export Over Time", country),
            vec![Series::from_rows("Arms Export", &sorted, Metric::ArmsDeliveries)
                .with_color(ARMS_COLOR)],
        )
        .labels("Year", "Arms Export Value");

        let stability = ChartSpec::new(
            format!("{} - Political Stability Over Time", country),
            vec![
                Series::from_rows("Political Stability", &sorted, Metric::StabilityEstimate)
                    .with_color(STABILITY_COLOR),
            ],
        )
        .labels("Year", "Stability Level")
        .y_range(STABILITY_RANGE);

        Ok(Self {
            country: country.to_string(),
            arms,
            stability,
        })
    }

    /// Look up `country` in the store and build its charts.
    pub fn load(db: &Database, country: &str) -> Result<Self, ViewError> {
        let rows = db.query_country(country)?;
        Ok(Self::from_rows(country, &rows)?)
    }
}
