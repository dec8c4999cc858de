//! Dataset inspection: country list, one country's charts, two-country comparison.
//!
//! Chart output is the same JSON the web app hands to the D3 renderer.

use crate::source::load_database;
use log::info;
use psm_data::{ComparisonView, DetailCharts, ViewError};
use psm_db::Database;

pub async fn run_countries(csv: &str) -> anyhow::Result<()> {
    let db = load_database(csv).await?;
    for country in db.query_countries()? {
        println!("{}", country);
    }
    Ok(())
}

/// An unknown country fails with the not-available message, which the
/// binary reports on stderr with a non-zero exit.
pub async fn run_country(csv: &str, name: &str) -> anyhow::Result<()> {
    let db = load_database(csv).await?;
    println!("{}", country_json(&db, name)?);
    Ok(())
}

pub async fn run_compare(csv: &str, first: &str, second: &str) -> anyhow::Result<()> {
    let db = load_database(csv).await?;
    println!("{}", compare_json(&db, first, second)?);
    Ok(())
}

/// Detail chart specs for one country, pretty-printed.
pub fn country_json(db: &Database, name: &str) -> Result<String, ViewError> {
    let charts = DetailCharts::load(db, name)?;
    info!(
        "{}: {} years of observations",
        name,
        charts.arms.series.first().map_or(0, |s| s.x.len())
    );
    serde_json::to_string_pretty(&charts).map_err(|e| ViewError::Query(e.to_string()))
}

/// Paired comparison chart specs. Both names must be in the dataset.
pub fn compare_json(db: &Database, first: &str, second: &str) -> anyhow::Result<String> {
    let mut view = ComparisonView::load(db)?;
    view.select_first(first)?;
    view.select_second(second)?;
    let charts = view.charts(db)?;
    Ok(serde_json::to_string_pretty(&charts)?)
}
