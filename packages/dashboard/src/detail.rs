//! Click-through employer detail view.
//!
//! Resolves a clicked city into the rows of the employer dataset for that
//! city, preserving the load-time sort and the fixed column order. "Nothing
//! clicked yet" and "clicked a city with no records" are distinct views: the
//! first is a placeholder message, the second an empty table with headers.

use h1b_map_petition_models::{EmployerRecord, columns};
use serde::Serialize;

/// Instructional message shown before the first click.
pub const PLACEHOLDER_MESSAGE: &str =
    "Click a bubble on the map to see employer petitions for that city.";

/// The detail panel's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailView {
    /// No selection yet: a fixed instructional message.
    Placeholder {
        /// The message to display.
        message: &'static str,
    },
    /// A selected city's records (possibly zero rows).
    Table {
        /// Column headers, in fixed display order.
        columns: Vec<&'static str>,
        /// One pre-formatted cell row per matching record, in dataset order.
        rows: Vec<Vec<String>>,
    },
}

/// Resolves the detail view for an optional clicked city.
///
/// `None` means no click has happened (or the click payload was malformed)
/// and yields the placeholder. `Some(city)` yields a table of the records
/// whose petitioner city matches exactly, in the dataset's pre-sorted order;
/// zero matches still yield the table variant so callers can tell "empty"
/// from "unclicked".
#[must_use]
pub fn resolve(records: &[EmployerRecord], city: Option<&str>) -> DetailView {
    let Some(city) = city else {
        return DetailView::Placeholder {
            message: PLACEHOLDER_MESSAGE,
        };
    };

    DetailView::Table {
        columns: columns::EMPLOYER_DISPLAY_COLUMNS.to_vec(),
        rows: records
            .iter()
            .filter(|r| r.city == city)
            .map(EmployerRecord::display_cells)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fiscal_year: u16, employer: &str, city: &str, total: u32) -> EmployerRecord {
        EmployerRecord {
            fiscal_year,
            employer_name: employer.to_owned(),
            tax_id: 111_111_111,
            industry_code: "54".to_owned(),
            city: city.to_owned(),
            state: "FL".to_owned(),
            zip_code: "33101".to_owned(),
            new_employment_approval: 0,
            new_employment_denial: 0,
            continuation_approval: 0,
            continuation_denial: 0,
            change_same_employer_approval: 0,
            change_same_employer_denial: 0,
            new_concurrent_approval: 0,
            new_concurrent_denial: 0,
            change_of_employer_approval: 0,
            change_of_employer_denial: 0,
            amended_approval: 0,
            amended_denial: 0,
            total_approvals: total,
        }
    }

    #[test]
    fn no_click_yields_the_placeholder() {
        let records = vec![record(2023, "Acme Corp", "Miami", 21)];
        assert_eq!(
            resolve(&records, None),
            DetailView::Placeholder {
                message: PLACEHOLDER_MESSAGE,
            }
        );
    }

    #[test]
    fn clicked_city_yields_its_rows_in_dataset_order() {
        // Records arrive pre-sorted from the dataset store; resolution must
        // preserve that order, not re-sort.
        let records = vec![
            record(2023, "Gamma Inc", "Orlando", 39),
            record(2023, "Acme Corp", "Orlando", 21),
            record(2022, "Beta LLC", "Orlando", 3),
            record(2023, "Delta Co", "Miami", 50),
        ];
        let view = resolve(&records, Some("Orlando"));
        let DetailView::Table { columns, rows } = view else {
            panic!("expected a table");
        };
        assert_eq!(columns.len(), 20);
        assert_eq!(columns[0], "Fiscal Year");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][1], "Gamma Inc");
        assert_eq!(rows[1][1], "Acme Corp");
        assert_eq!(rows[2][1], "Beta LLC");
    }

    #[test]
    fn city_match_is_exact_and_case_sensitive() {
        let records = vec![record(2023, "Acme Corp", "Miami", 21)];
        let DetailView::Table { rows, .. } = resolve(&records, Some("miami")) else {
            panic!("expected a table");
        };
        assert!(rows.is_empty());
    }

    #[test]
    fn recordless_city_yields_empty_table_not_placeholder() {
        let records = vec![record(2023, "Acme Corp", "Miami", 21)];
        let view = resolve(&records, Some("Key West"));
        let DetailView::Table { columns, rows } = view else {
            panic!("an empty table must stay distinguishable from the placeholder");
        };
        assert_eq!(columns.len(), 20);
        assert!(rows.is_empty());
    }
}
