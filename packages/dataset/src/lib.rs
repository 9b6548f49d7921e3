#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Startup CSV loading for the H1B petition map.
//!
//! Loads the city-aggregate and per-employer datasets once, before the
//! server starts serving. Any unreadable file or missing required column is
//! fatal; there is no partial-load recovery because both files are
//! build-time artifacts, not runtime dependencies.
//!
//! The employer dataset is projected onto the fixed column allow-list in
//! [`h1b_map_petition_models::columns`] (extra source columns are dropped
//! silently) and pre-sorted by (fiscal year desc, total approvals desc,
//! tax id desc) as the detail table's display contract.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use h1b_map_petition_models::{CityAggregate, EmployerRecord, columns};

/// Default file name of the city-aggregate dataset.
pub const AGGREGATE_FILE: &str = "fl_city_counts.csv";
/// Default file name of the per-employer dataset.
pub const EMPLOYER_FILE: &str = "h1b_employer_records.csv";

/// Errors that can occur while loading the datasets.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("{file}: missing required column '{column}'")]
    MissingColumn {
        /// Label of the offending file.
        file: String,
        /// The column that was expected.
        column: String,
    },
}

/// Both datasets, loaded and ready to share read-only across requests.
#[derive(Debug, Clone)]
pub struct Datasets {
    /// One row per city, for the bubble map.
    pub cities: Vec<CityAggregate>,
    /// One row per employer submission, pre-sorted for display.
    pub records: Vec<EmployerRecord>,
}

/// Loads both datasets from the given paths.
///
/// # Errors
///
/// Returns [`LoadError`] if either file is unreadable, fails CSV parsing,
/// or is missing a required column.
pub fn load(aggregate_path: &Path, records_path: &Path) -> Result<Datasets, LoadError> {
    let cities = load_city_aggregates(aggregate_path)?;
    let records = load_employer_records(records_path)?;
    log::info!(
        "Loaded {} city aggregates and {} employer records",
        cities.len(),
        records.len()
    );
    Ok(Datasets { cities, records })
}

/// Loads the city-aggregate dataset from `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is unreadable, fails CSV parsing, or
/// is missing a required column.
pub fn load_city_aggregates(path: &Path) -> Result<Vec<CityAggregate>, LoadError> {
    let file = File::open(path)?;
    parse_city_aggregates(file, &path.display().to_string())
}

/// Loads the per-employer dataset from `path`, projected and sorted.
///
/// # Errors
///
/// Returns [`LoadError`] if the file is unreadable, fails CSV parsing, or
/// is missing a required column.
pub fn load_employer_records(path: &Path) -> Result<Vec<EmployerRecord>, LoadError> {
    let file = File::open(path)?;
    parse_employer_records(file, &path.display().to_string())
}

fn parse_city_aggregates<R: Read>(reader: R, label: &str) -> Result<Vec<CityAggregate>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_owned()).collect();
    let city_idx = find_column(&headers, columns::CITY, label)?;
    let lat_idx = find_column(&headers, columns::LATITUDE, label)?;
    let lon_idx = find_column(&headers, columns::LONGITUDE, label)?;
    let count_idx = find_column(&headers, columns::PETITION_COUNT, label)?;

    let mut cities = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let city = cell(&record, city_idx);
        let (Some(latitude), Some(longitude), Some(petition_count)) = (
            parse_cell::<f64>(&record, lat_idx),
            parse_cell::<f64>(&record, lon_idx),
            parse_cell::<u64>(&record, count_idx),
        ) else {
            log::warn!("{label}: skipping row {} ('{city}'): unparseable numeric cell", row + 2);
            continue;
        };
        cities.push(CityAggregate {
            city,
            latitude,
            longitude,
            petition_count,
        });
    }

    Ok(cities)
}

fn parse_employer_records<R: Read>(
    reader: R,
    label: &str,
) -> Result<Vec<EmployerRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_owned()).collect();

    // Resolve the full allow-list up front so a missing column fails the
    // load before any row is parsed.
    let mut idx = [0usize; columns::EMPLOYER_DISPLAY_COLUMNS.len()];
    for (i, column) in columns::EMPLOYER_DISPLAY_COLUMNS.iter().enumerate() {
        idx[i] = find_column(&headers, column, label)?;
    }
    let [
        fiscal_year_idx,
        employer_idx,
        tax_id_idx,
        industry_idx,
        city_idx,
        state_idx,
        zip_idx,
        new_emp_app_idx,
        new_emp_den_idx,
        cont_app_idx,
        cont_den_idx,
        same_emp_app_idx,
        same_emp_den_idx,
        concurrent_app_idx,
        concurrent_den_idx,
        change_emp_app_idx,
        change_emp_den_idx,
        amended_app_idx,
        amended_den_idx,
        total_app_idx,
    ] = idx;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let employer_name = cell(&record, employer_idx);
        let (Some(fiscal_year), Some(tax_id)) = (
            parse_cell::<u16>(&record, fiscal_year_idx),
            parse_cell::<u32>(&record, tax_id_idx),
        ) else {
            log::warn!(
                "{label}: skipping row {} ('{employer_name}'): unparseable fiscal year or tax id",
                row + 2
            );
            continue;
        };

        records.push(EmployerRecord {
            fiscal_year,
            employer_name,
            tax_id,
            industry_code: cell(&record, industry_idx),
            city: cell(&record, city_idx),
            state: cell(&record, state_idx),
            zip_code: cell(&record, zip_idx),
            new_employment_approval: counter(&record, new_emp_app_idx),
            new_employment_denial: counter(&record, new_emp_den_idx),
            continuation_approval: counter(&record, cont_app_idx),
            continuation_denial: counter(&record, cont_den_idx),
            change_same_employer_approval: counter(&record, same_emp_app_idx),
            change_same_employer_denial: counter(&record, same_emp_den_idx),
            new_concurrent_approval: counter(&record, concurrent_app_idx),
            new_concurrent_denial: counter(&record, concurrent_den_idx),
            change_of_employer_approval: counter(&record, change_emp_app_idx),
            change_of_employer_denial: counter(&record, change_emp_den_idx),
            amended_approval: counter(&record, amended_app_idx),
            amended_denial: counter(&record, amended_den_idx),
            total_approvals: counter(&record, total_app_idx),
        });
    }

    // Display contract: fiscal year desc, total approvals desc, tax id desc.
    records.sort_by(|a, b| {
        b.fiscal_year
            .cmp(&a.fiscal_year)
            .then_with(|| b.total_approvals.cmp(&a.total_approvals))
            .then_with(|| b.tax_id.cmp(&a.tax_id))
    });

    Ok(records)
}

fn find_column(headers: &[String], column: &str, label: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.as_str() == column)
        .ok_or_else(|| LoadError::MissingColumn {
            file: label.to_owned(),
            column: column.to_owned(),
        })
}

fn cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_owned()
}

fn parse_cell<T: std::str::FromStr>(record: &csv::StringRecord, idx: usize) -> Option<T> {
    record.get(idx)?.trim().parse().ok()
}

/// Counter cells default to zero when blank; suppressed small counts appear
/// as empty cells in the source data.
fn counter(record: &csv::StringRecord, idx: usize) -> u32 {
    parse_cell(record, idx).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGGREGATE_CSV: &str = "\
Petitioner City,Latitude,Longitude,Petition Count
Miami,25.7617,-80.1918,1200
Orlando,28.5384,-81.3789,412
Tampa,27.9506,-82.4572,389
";

    fn employer_csv(rows: &str) -> String {
        let headers = columns::EMPLOYER_DISPLAY_COLUMNS.join(",");
        format!("{headers}\n{rows}")
    }

    #[test]
    fn parses_city_aggregates() {
        let cities = parse_city_aggregates(AGGREGATE_CSV.as_bytes(), "test").unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0].city, "Miami");
        assert!((cities[0].latitude - 25.7617).abs() < f64::EPSILON);
        assert!((cities[0].longitude - -80.1918).abs() < f64::EPSILON);
        assert_eq!(cities[0].petition_count, 1200);
    }

    #[test]
    fn missing_aggregate_column_is_fatal() {
        let csv = "Petitioner City,Latitude,Longitude\nMiami,25.76,-80.19\n";
        let err = parse_city_aggregates(csv.as_bytes(), "test").unwrap_err();
        match err {
            LoadError::MissingColumn { column, .. } => {
                assert_eq!(column, "Petition Count");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn skips_aggregate_rows_with_unparseable_numbers() {
        let csv = "\
Petitioner City,Latitude,Longitude,Petition Count
Miami,25.7617,-80.1918,1200
Nowhere,not-a-number,-80.0,5
";
        let cities = parse_city_aggregates(csv.as_bytes(), "test").unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city, "Miami");
    }

    #[test]
    fn extra_aggregate_columns_are_ignored() {
        let csv = "\
Petitioner City,Latitude,Longitude,Petition Count,Notes
Miami,25.7617,-80.1918,1200,left over
";
        let cities = parse_city_aggregates(csv.as_bytes(), "test").unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].petition_count, 1200);
    }

    #[test]
    fn parses_and_sorts_employer_records() {
        let csv = employer_csv(
            "\
2022,Beta LLC,222222222,54,Orlando,FL,32801,1,0,2,0,0,0,0,0,0,0,0,0,3
2023,Acme Corp,111111111,54,Miami,FL,33101,5,1,10,0,2,0,0,0,3,1,1,0,21
2023,Gamma Inc,333333333,62,Miami,FL,33130,8,2,20,1,4,0,0,0,5,0,2,0,39
2023,Delta Co,444444444,62,Tampa,FL,33601,8,2,20,1,4,0,0,0,5,0,2,0,39
",
        );
        let records = parse_employer_records(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 4);
        // Fiscal year desc first, then total approvals desc, then tax id desc.
        assert_eq!(records[0].employer_name, "Delta Co");
        assert_eq!(records[1].employer_name, "Gamma Inc");
        assert_eq!(records[2].employer_name, "Acme Corp");
        assert_eq!(records[3].employer_name, "Beta LLC");
    }

    #[test]
    fn blank_counter_cells_default_to_zero() {
        let csv = employer_csv("2023,Acme Corp,111111111,54,Miami,FL,33101,,,,,,,,,,,,,7\n");
        let records = parse_employer_records(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].new_employment_approval, 0);
        assert_eq!(records[0].amended_denial, 0);
        assert_eq!(records[0].total_approvals, 7);
    }

    #[test]
    fn missing_employer_column_is_fatal() {
        let headers: Vec<&str> = columns::EMPLOYER_DISPLAY_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != columns::TAX_ID)
            .collect();
        let csv = format!("{}\n", headers.join(","));
        let err = parse_employer_records(csv.as_bytes(), "test").unwrap_err();
        match err {
            LoadError::MissingColumn { column, .. } => assert_eq!(column, "Tax ID"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn skips_employer_rows_with_unparseable_keys() {
        let csv = employer_csv(
            "\
not-a-year,Acme Corp,111111111,54,Miami,FL,33101,1,0,0,0,0,0,0,0,0,0,0,0,1
2023,Beta LLC,222222222,54,Orlando,FL,32801,1,0,0,0,0,0,0,0,0,0,0,0,1
",
        );
        let records = parse_employer_records(csv.as_bytes(), "test").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employer_name, "Beta LLC");
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_city_aggregates(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
