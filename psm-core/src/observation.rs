use crate::error::LoadError;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Header of the country column, also the join key against boundary names.
pub const COUNTRY_COLUMN: &str = "Country";
pub const YEAR_COLUMN: &str = "Year";
pub const STABILITY_COLUMN: &str = "StabilityEstimate";
pub const ARMS_COLUMN: &str = "ArmsDeliveries";

/// One country-year observation.
///
/// Missing or non-numeric fields are `None`; they are never an error. A row
/// without a year still counts toward its country's existence and map fill,
/// it just has no place on a year axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    pub country: String,
    pub year: Option<i32>,
    /// Political stability estimate, roughly within [-3, 3].
    pub stability_estimate: Option<f64>,
    /// Arms deliveries volume.
    pub arms_deliveries: Option<f64>,
}

/// Rows parsed from a CSV body plus how many of them lack a usable year.
#[derive(Debug, Clone, Default)]
pub struct ParsedRows {
    pub rows: Vec<ObservationRow>,
    pub without_year: usize,
}

impl ObservationRow {
    /// Parse the observations CSV.
    ///
    /// Columns are located by header name, so extra columns and any column
    /// order are accepted. Row order is preserved; map coloring depends on it.
    ///
    /// # Example CSV
    /// ```text
    /// Country,Year,StabilityEstimate,ArmsDeliveries
    /// France,2020,1.2,50
    /// France,2021,-0.5,75
    /// ```
    pub fn parse_csv(csv_data: &str) -> Result<ParsedRows, LoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let country_idx = column(COUNTRY_COLUMN)?;
        let year_idx = column(YEAR_COLUMN)?;
        let stability_idx = column(STABILITY_COLUMN)?;
        let arms_idx = column(ARMS_COLUMN)?;

        let mut parsed = ParsedRows::default();
        for result in rdr.records() {
            let record = result?;
            let year = record.get(year_idx).and_then(parse_year);
            if year.is_none() {
                parsed.without_year += 1;
            }
            parsed.rows.push(ObservationRow {
                country: record.get(country_idx).unwrap_or("").to_string(),
                year,
                stability_estimate: record.get(stability_idx).and_then(parse_float),
                arms_deliveries: record.get(arms_idx).and_then(parse_float),
            });
        }

        if parsed.without_year > 0 {
            log::warn!(
                "observations: {} rows have no numeric year and stay off the charts",
                parsed.without_year
            );
        }
        log::info!("observations: parsed {} rows", parsed.rows.len());
        Ok(parsed)
    }
}

/// Lenient float parsing: leading whitespace is ignored and the longest
/// numeric prefix wins, so `"1.2abc"` is `1.2` and `"n/a"` is missing.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let infinity = if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Strict year parsing: the whole trimmed field must be an integral number.
pub fn parse_year(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Some(year);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_plain_values() {
        assert_eq!(parse_float("1.2"), Some(1.2));
        assert_eq!(parse_float("-0.5"), Some(-0.5));
        assert_eq!(parse_float("75"), Some(75.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
    }

    #[test]
    fn parse_float_takes_numeric_prefix() {
        assert_eq!(parse_float("  42"), Some(42.0));
        assert_eq!(parse_float("1.2abc"), Some(1.2));
        assert_eq!(parse_float("12e"), Some(12.0));
        assert_eq!(parse_float("7e+x"), Some(7.0));
        assert_eq!(parse_float("1,000"), Some(1.0));
    }

    #[test]
    fn parse_float_missing_values() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("n/a"), None);
        assert_eq!(parse_float(".."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("inf"), None);
    }

    #[test]
    fn parse_year_requires_whole_number() {
        assert_eq!(parse_year("2020"), Some(2020));
        assert_eq!(parse_year(" 2021 "), Some(2021));
        assert_eq!(parse_year("2020.0"), Some(2020));
        assert_eq!(parse_year("2020.5"), None);
        assert_eq!(parse_year("2020a"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn parse_csv_by_header_name() {
        let csv = "\
Year,ArmsDeliveries,Region,Country,StabilityEstimate
2020,50,Europe,France,1.2
2021,75,Europe,France,-0.5
";
        let parsed = ObservationRow::parse_csv(csv).unwrap();
        assert_eq!(parsed.without_year, 0);
        assert_eq!(
            parsed.rows,
            vec![
                ObservationRow {
                    country: "France".to_string(),
                    year: Some(2020),
                    stability_estimate: Some(1.2),
                    arms_deliveries: Some(50.0),
                },
                ObservationRow {
                    country: "France".to_string(),
                    year: Some(2021),
                    stability_estimate: Some(-0.5),
                    arms_deliveries: Some(75.0),
                },
            ]
        );
    }

    #[test]
    fn parse_csv_non_numeric_metrics_are_missing() {
        let csv = "\
Country,Year,StabilityEstimate,ArmsDeliveries
Chad,2019,..,
Chad,2020,-1.4,n/a
";
        let parsed = ObservationRow::parse_csv(csv).unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].stability_estimate, None);
        assert_eq!(parsed.rows[0].arms_deliveries, None);
        assert_eq!(parsed.rows[1].stability_estimate, Some(-1.4));
        assert_eq!(parsed.rows[1].arms_deliveries, None);
    }

    #[test]
    fn parse_csv_keeps_rows_without_year() {
        let csv = "\
Country,Year,StabilityEstimate,ArmsDeliveries
Peru,,0.1,3
Peru,2018,0.2,4
Tuvalu,n/a,0.9,1
";
        let parsed = ObservationRow::parse_csv(csv).unwrap();
        assert_eq!(parsed.without_year, 2);
        assert_eq!(parsed.rows.len(), 3);
        assert_eq!(parsed.rows[0].year, None);
        assert_eq!(parsed.rows[0].stability_estimate, Some(0.1));
        assert_eq!(parsed.rows[1].year, Some(2018));
        assert_eq!(parsed.rows[2].country, "Tuvalu");
        assert_eq!(parsed.rows[2].year, None);
    }

    #[test]
    fn parse_csv_missing_column_is_error() {
        let csv = "Country,Year,StabilityEstimate\nFrance,2020,1.2\n";
        match ObservationRow::parse_csv(csv) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, ARMS_COLUMN),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn parse_csv_keeps_country_names_verbatim() {
        let csv = "Country,Year,StabilityEstimate,ArmsDeliveries\nUSA,2020,0.3,1\n";
        let parsed = ObservationRow::parse_csv(csv).unwrap();
        assert_eq!(parsed.rows[0].country, "USA");
    }
}
