//! Typed lookups over the observation store.

use crate::Database;
use psm_core::ObservationRow;
use rusqlite::params;
use std::collections::HashMap;

fn row_to_observation(row: &rusqlite::Row<'_>) -> rusqlite::Result<ObservationRow> {
    Ok(ObservationRow {
        country: row.get(0)?,
        year: row.get(1)?,
        stability_estimate: row.get(2)?,
        arms_deliveries: row.get(3)?,
    })
}

impl Database {
    /// All rows for `country` (exact match), ordered by year.
    ///
    /// Rows sharing a year keep their source order; rows without a year
    /// come first.
    pub fn query_country(&self, country: &str) -> anyhow::Result<Vec<ObservationRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, year, stability_estimate, arms_deliveries
             FROM observations
             WHERE country = ?1
             ORDER BY year, rowid",
        )?;
        let rows = stmt
            .query_map(params![country], row_to_observation)?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "query: query_country({}) returned {} records",
            country,
            rows.len()
        );
        Ok(rows)
    }

    /// Sorted set of distinct country names (byte order, no duplicates).
    pub fn query_countries(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT country FROM observations ORDER BY country",
        )?;
        let countries = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(countries)
    }

    /// Stability value of each country's first row in source order.
    ///
    /// The first row decides the map fill even when its value is missing
    /// and later years have one, so the value is `None` in that case.
    pub fn query_first_stability(&self) -> anyhow::Result<HashMap<String, Option<f64>>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT o.country, o.stability_estimate
             FROM observations o
             WHERE o.rowid = (
                 SELECT MIN(rowid) FROM observations WHERE country = o.country
             )",
        )?;
        let map = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<HashMap<String, Option<f64>>, _>>()?;
        Ok(map)
    }

    /// Whether any row exists for `country`.
    pub fn has_country(&self, country: &str) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM observations WHERE country = ?1)",
            params![country],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Total number of stored rows.
    pub fn row_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn sample_db() -> Database {
        Database::from_csv(
            "\
Country,Year,StabilityEstimate,ArmsDeliveries
Russia,2021,-0.8,900
France,2021,-0.5,75
United States,2020,0.1,1000
France,2020,1.2,50
Chad,2020,,3
Chad,2021,-1.3,4
",
        )
        .unwrap()
    }

    #[test]
    fn query_country_sorts_by_year() {
        let db = sample_db();
        let rows = db.query_country("France").unwrap();
        let years: Vec<Option<i32>> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![Some(2020), Some(2021)]);
        assert_eq!(rows[0].stability_estimate, Some(1.2));
        assert_eq!(rows[1].arms_deliveries, Some(75.0));
        assert!(rows.iter().all(|r| r.country == "France"));
    }

    #[test]
    fn query_country_is_exact_match() {
        let db = sample_db();
        assert!(db.query_country("france").unwrap().is_empty());
        assert!(db.query_country("USA").unwrap().is_empty());
        assert!(db.query_country("Atlantis").unwrap().is_empty());
    }

    #[test]
    fn query_countries_sorted_unique() {
        let db = sample_db();
        assert_eq!(
            db.query_countries().unwrap(),
            vec!["Chad", "France", "Russia", "United States"]
        );
    }

    #[test]
    fn first_stability_uses_source_order() {
        let db = sample_db();
        let first = db.query_first_stability().unwrap();
        assert_eq!(first.len(), 4);
        // 2021 row comes first in the file
        assert_eq!(first["France"], Some(-0.5));
        // first Chad row has no value even though 2021 does
        assert_eq!(first["Chad"], None);
    }

    #[test]
    fn rows_without_year_still_count() {
        let db = Database::from_csv(
            "\
Country,Year,StabilityEstimate,ArmsDeliveries
France,2020,1.2,50
Tuvalu,,0.9,1
Chad,n/a,-1.3,4
Chad,2020,,3
",
        )
        .unwrap();
        assert_eq!(db.query_countries().unwrap(), vec!["Chad", "France", "Tuvalu"]);

        let first = db.query_first_stability().unwrap();
        assert_eq!(first["Chad"], Some(-1.3));
        assert_eq!(first["Tuvalu"], Some(0.9));

        let chad = db.query_country("Chad").unwrap();
        assert_eq!(chad[0].year, None);
        assert_eq!(chad[1].year, Some(2020));
        assert!(db.has_country("Tuvalu").unwrap());
    }

    #[test]
    fn has_country_and_row_count() {
        let db = sample_db();
        assert!(db.has_country("Russia").unwrap());
        assert!(!db.has_country("Atlantis").unwrap());
        assert_eq!(db.row_count().unwrap(), 6);
    }

    #[test]
    fn empty_database_queries() {
        let db = Database::new().unwrap();
        assert!(db.query_countries().unwrap().is_empty());
        assert!(db.query_first_stability().unwrap().is_empty());
    }
}
