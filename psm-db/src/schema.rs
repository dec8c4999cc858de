//! SQL schema for the in-memory observation store.

/// Returns the full SQL schema as a single batch string.
///
/// - `observations` - one row per country-year in source order. The implicit
///   `rowid` preserves CSV order, which decides map coloring. Missing metrics
///   and unparseable years are `NULL`. Duplicate country-years are kept as-is.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS observations (
        country TEXT NOT NULL,
        year INTEGER,
        stability_estimate REAL,
        arms_deliveries REAL
    );
    CREATE INDEX IF NOT EXISTS idx_obs_country ON observations(country);
    "#
}
