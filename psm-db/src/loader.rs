//! Populates the store from the observations CSV.
//!
//! Expected format (with headers, any column order, extra columns ignored):
//! `Country,Year,StabilityEstimate,ArmsDeliveries`

use crate::Database;
use psm_core::{LoadError, ObservationRow};
use rusqlite::params;

fn storage(e: rusqlite::Error) -> LoadError {
    LoadError::Storage(e.to_string())
}

impl Database {
    /// Parse and insert the observations CSV. Returns the number of rows stored.
    ///
    /// Non-numeric metrics and years are stored as `NULL`; every row is kept.
    /// A malformed CSV or a missing required column fails the
    /// whole load and leaves the store untouched.
    pub fn load_observations(&self, csv_data: &str) -> Result<usize, LoadError> {
        let parsed = ObservationRow::parse_csv(csv_data)?;
        let count = self.insert_rows(&parsed.rows).map_err(storage)?;
        log::info!(
            "loader: Loaded {} observations, {} without a year",
            count,
            parsed.without_year
        );
        Ok(count)
    }

    /// Insert rows in order inside a single transaction.
    pub fn insert_rows(&self, rows: &[ObservationRow]) -> rusqlite::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO observations (country, year, stability_estimate, arms_deliveries)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.country,
                    row.year,
                    row.stability_estimate,
                    row.arms_deliveries
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }
}
