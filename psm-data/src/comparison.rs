//! Two-country comparison view.
//!
//! The dropdowns list every distinct country in the dataset; the view keeps
//! the two current selections and rebuilds both paired charts on demand.

use crate::chart::{ChartSpec, Metric, Series};
use crate::ViewError;
use psm_core::config::DEFAULT_COMPARISON;
use psm_core::{ObservationRow, SelectionError};
use psm_db::Database;
use serde::Serialize;

/// Arms and stability charts with one series per selected country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCharts {
    pub arms: ChartSpec,
    pub stability: ChartSpec,
}

impl ComparisonCharts {
    /// Pair two countries' rows. A country without rows gets an empty series.
    pub fn from_rows(
        (first, first_rows): (&str, &[ObservationRow]),
        (second, second_rows): (&str, &[ObservationRow]),
    ) -> Self {
        let first_rows = sorted_by_year(first_rows);
        let second_rows = sorted_by_year(second_rows);
        let paired = |metric| {
            vec![
                Series::from_rows(first, &first_rows, metric),
                Series::from_rows(second, &second_rows, metric),
            ]
        };
        Self {
            arms: ChartSpec::new("Arms Export Comparison", paired(Metric::ArmsDeliveries)),
            stability: ChartSpec::new(
                "Political Stability Comparison",
                paired(Metric::StabilityEstimate),
            ),
        }
    }
}

fn initial_selection(countries: &[String], default: &str) -> String {
    if countries.iter().any(|c| c == default) {
        return default.to_string();
    }
    match countries.first() {
        Some(first) => {
            log::info!("comparison: {} not in dataset, selecting {}", default, first);
            first.clone()
        }
        None => default.to_string(),
    }
}

fn sorted_by_year(rows: &[ObservationRow]) -> Vec<ObservationRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|r| r.year);
    sorted
}

/// State of the two comparison dropdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    countries: Vec<String>,
    first: String,
    second: String,
}

impl ComparisonView {
    /// Populate from the distinct country list and select the default pair.
    ///
    /// A default missing from the list falls back to the first listed
    /// country, which is what a dropdown without a matching option shows.
    /// With an empty list the defaults are kept and chart as empty series.
    pub fn new(countries: Vec<String>) -> Self {
        let mut countries = countries;
        countries.sort();
        countries.dedup();
        let first = initial_selection(&countries, DEFAULT_COMPARISON.0);
        let second = initial_selection(&countries, DEFAULT_COMPARISON.1);
        Self {
            countries,
            first,
            second,
        }
    }

    /// Whether `country` is one of the dropdown options.
    pub fn is_listed(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// Populate the dropdowns from the store.
    pub fn load(db: &Database) -> anyhow::Result<Self> {
        let countries = db.query_countries()?;
        log::info!("comparison: {} selectable countries", countries.len());
        Ok(Self::new(countries))
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    fn check(&self, country: &str) -> Result<String, SelectionError> {
        if self.is_listed(country) {
            Ok(country.to_string())
        } else {
            Err(SelectionError::UnknownCountry(country.to_string()))
        }
    }

    pub fn select_first(&mut self, country: &str) -> Result<(), SelectionError> {
        self.first = self.check(country)?;
        Ok(())
    }

    pub fn select_second(&mut self, country: &str) -> Result<(), SelectionError> {
        self.second = self.check(country)?;
        Ok(())
    }

    /// Both charts for the current selections, each country filtered independently.
    pub fn charts(&self, db: &Database) -> Result<ComparisonCharts, ViewError> {
        let first_rows = db.query_country(&self.first)?;
        let second_rows = db.query_country(&self.second)?;
        Ok(ComparisonCharts::from_rows(
            (&self.first, &first_rows),
            (&self.second, &second_rows),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        Database::from_csv(
            "\
Country,Year,StabilityEstimate,ArmsDeliveries
Russia,2021,-0.8,900
United States,2021,0.0,1100
United States,2020,0.1,1000
Russia,2020,-0.7,800
France,2020,1.2,50
",
        )
        .unwrap()
    }

    #[test]
    fn dropdowns_are_sorted_unique() {
        let view = ComparisonView::load(&sample_db()).unwrap();
        assert_eq!(view.countries(), ["France", "Russia", "United States"]);
        let view = ComparisonView::new(vec!["b".into(), "a".into(), "b".into()]);
        assert_eq!(view.countries(), ["a", "b"]);
    }

    #[test]
    fn defaults_to_configured_pair() {
        let view = ComparisonView::load(&sample_db()).unwrap();
        assert_eq!(view.first(), "United States");
        assert_eq!(view.second(), "Russia");
    }

    #[test]
    fn charts_have_two_series_per_pane() {
        let db = sample_db();
        let view = ComparisonView::load(&db).unwrap();
        let charts = view.charts(&db).unwrap();

        assert_eq!(charts.arms.series.len(), 2);
        assert_eq!(charts.stability.series.len(), 2);
        assert_eq!(charts.arms.title, "Arms Export Comparison");
        assert_eq!(charts.stability.title, "Political Stability Comparison");

        let us = &charts.arms.series[0];
        assert_eq!(us.name, "United States");
        assert_eq!(us.x, vec![2020, 2021]);
        assert_eq!(us.y, vec![Some(1000.0), Some(1100.0)]);

        let ru = &charts.stability.series[1];
        assert_eq!(ru.name, "Russia");
        assert_eq!(ru.y, vec![Some(-0.7), Some(-0.8)]);
    }

    #[test]
    fn selection_changes_are_validated() {
        let db = sample_db();
        let mut view = ComparisonView::load(&db).unwrap();
        view.select_second("France").unwrap();
        assert_eq!(view.second(), "France");

        let err = view.select_first("Atlantis").unwrap_err();
        assert_eq!(err, SelectionError::UnknownCountry("Atlantis".to_string()));
        assert_eq!(view.first(), "United States");

        let charts = view.charts(&db).unwrap();
        assert_eq!(charts.arms.series[1].name, "France");
        assert_eq!(charts.arms.series[1].x, vec![2020]);
    }

    #[test]
    fn absent_defaults_fall_back_to_first_listed() {
        let db = Database::from_csv(
            "\
Country,Year,StabilityEstimate,ArmsDeliveries
Germany,2020,0.6,20
France,2020,1.2,50
",
        )
        .unwrap();
        let view = ComparisonView::load(&db).unwrap();
        assert_eq!(view.first(), "France");
        assert_eq!(view.second(), "France");
        assert!(view.is_listed(view.first()));

        let charts = view.charts(&db).unwrap();
        let names: Vec<&str> = charts.arms.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["France", "France"]);
        assert_eq!(charts.arms.series[0].y, vec![Some(50.0)]);
    }

    #[test]
    fn one_default_present_keeps_it() {
        let view = ComparisonView::new(vec!["Russia".into(), "Chad".into()]);
        assert_eq!(view.first(), "Chad");
        assert_eq!(view.second(), "Russia");
    }

    #[test]
    fn empty_dataset_keeps_defaults_with_empty_series() {
        let db = Database::new().unwrap();
        let view = ComparisonView::load(&db).unwrap();
        assert_eq!(view.first(), "United States");
        assert!(!view.is_listed(view.first()));
        let charts = view.charts(&db).unwrap();
        assert!(charts.arms.series.iter().all(Series::is_empty));
    }

    #[test]
    fn same_country_twice() {
        let db = sample_db();
        let mut view = ComparisonView::load(&db).unwrap();
        view.select_second("United States").unwrap();
        let charts = view.charts(&db).unwrap();
        assert_eq!(charts.stability.series[0], charts.stability.series[1]);
    }
}
