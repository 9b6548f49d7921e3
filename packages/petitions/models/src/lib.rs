#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Domain types for the H1B petition map.
//!
//! Defines the two dataset row types ([`CityAggregate`] and
//! [`EmployerRecord`]), the dropdown filter state ([`FilterState`]), and the
//! typed click selection ([`ClickSelection`]) extracted from the map's click
//! payload. Both row types are immutable after load; nothing in the system
//! mutates them once the server is serving.

pub mod columns;

use serde::{Deserialize, Serialize};

/// Reserved filter value meaning "no city restriction".
pub const ALL_SENTINEL: &str = "ALL";

/// One row of the city-aggregate dataset: a city and its total petition
/// metric, positioned for the bubble map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAggregate {
    /// City name (unique key within the dataset).
    pub city: String,
    /// Latitude of the city marker.
    pub latitude: f64,
    /// Longitude of the city marker.
    pub longitude: f64,
    /// Total H1B petitions filed from this city.
    pub petition_count: u64,
}

/// One row of the full per-employer dataset: a single employer's petition
/// outcome counters for one fiscal year.
///
/// Field order matches the display column order fixed in [`columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRecord {
    /// Federal fiscal year of the submissions.
    pub fiscal_year: u16,
    /// Petitioning employer's name.
    pub employer_name: String,
    /// Employer tax identifier.
    pub tax_id: u32,
    /// Industry (NAICS) code, kept verbatim from the source.
    pub industry_code: String,
    /// City of the petitioning employer. Foreign key (unenforced) into
    /// [`CityAggregate::city`].
    pub city: String,
    /// State abbreviation of the petitioning employer.
    pub state: String,
    /// Zip code of the petitioning employer, kept verbatim (leading zeros).
    pub zip_code: String,
    /// Approvals for new-employment petitions.
    pub new_employment_approval: u32,
    /// Denials for new-employment petitions.
    pub new_employment_denial: u32,
    /// Approvals for continuation petitions.
    pub continuation_approval: u32,
    /// Denials for continuation petitions.
    pub continuation_denial: u32,
    /// Approvals for change-with-same-employer petitions.
    pub change_same_employer_approval: u32,
    /// Denials for change-with-same-employer petitions.
    pub change_same_employer_denial: u32,
    /// Approvals for new-concurrent petitions.
    pub new_concurrent_approval: u32,
    /// Denials for new-concurrent petitions.
    pub new_concurrent_denial: u32,
    /// Approvals for change-of-employer petitions.
    pub change_of_employer_approval: u32,
    /// Denials for change-of-employer petitions.
    pub change_of_employer_denial: u32,
    /// Approvals for amended petitions.
    pub amended_approval: u32,
    /// Denials for amended petitions.
    pub amended_denial: u32,
    /// Total approvals across all petition categories.
    pub total_approvals: u32,
}

impl EmployerRecord {
    /// Formats this record as display cells, one per column in
    /// [`columns::EMPLOYER_DISPLAY_COLUMNS`] order.
    #[must_use]
    pub fn display_cells(&self) -> Vec<String> {
        vec![
            self.fiscal_year.to_string(),
            self.employer_name.clone(),
            self.tax_id.to_string(),
            self.industry_code.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip_code.clone(),
            self.new_employment_approval.to_string(),
            self.new_employment_denial.to_string(),
            self.continuation_approval.to_string(),
            self.continuation_denial.to_string(),
            self.change_same_employer_approval.to_string(),
            self.change_same_employer_denial.to_string(),
            self.new_concurrent_approval.to_string(),
            self.new_concurrent_denial.to_string(),
            self.change_of_employer_approval.to_string(),
            self.change_of_employer_denial.to_string(),
            self.amended_approval.to_string(),
            self.amended_denial.to_string(),
            self.total_approvals.to_string(),
        ]
    }
}

/// The current dropdown selection: a specific city or the all-sentinel.
///
/// Always resolves to a valid selection; anything absent or empty collapses
/// to [`FilterState::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No city restriction (the `ALL` sentinel).
    #[default]
    All,
    /// Restrict to one city, matched exactly and case-sensitively.
    City(String),
}

impl FilterState {
    /// Builds a filter state from an optional query-parameter value.
    ///
    /// `None`, the empty string, and the literal sentinel `ALL` all mean no
    /// restriction.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_SENTINEL) => Self::All,
            Some(city) => Self::City(city.to_owned()),
        }
    }

    /// Whether the given city passes this filter.
    #[must_use]
    pub fn matches(&self, city: &str) -> bool {
        match self {
            Self::All => true,
            Self::City(selected) => selected == city,
        }
    }
}

/// The city and metric value extracted from the last map click.
///
/// Resolved once at the UI boundary from the raw Plotly click payload; the
/// rest of the system never sees the untyped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickSelection {
    /// Name of the clicked city (the bubble's hover label).
    pub city: String,
    /// Metric value carried on the bubble (petition count).
    pub metric: u64,
}

impl ClickSelection {
    /// Extracts a selection from a Plotly click payload.
    ///
    /// Expects `points[0].hovertext` (city name) and `points[0].customdata`
    /// (metric). Returns `None` for anything malformed or missing, which
    /// callers treat as "no selection" rather than an error.
    #[must_use]
    pub fn from_click_payload(payload: &serde_json::Value) -> Option<Self> {
        let point = payload.get("points")?.get(0)?;
        let city = point.get("hovertext")?.as_str()?;
        let metric = point.get("customdata")?.as_u64()?;
        Some(Self {
            city: city.to_owned(),
            metric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_defaults_to_all() {
        assert_eq!(FilterState::default(), FilterState::All);
    }

    #[test]
    fn absent_empty_and_sentinel_params_mean_all() {
        assert_eq!(FilterState::from_param(None), FilterState::All);
        assert_eq!(FilterState::from_param(Some("")), FilterState::All);
        assert_eq!(FilterState::from_param(Some("ALL")), FilterState::All);
    }

    #[test]
    fn city_param_restricts_to_that_city() {
        let filter = FilterState::from_param(Some("Miami"));
        assert_eq!(filter, FilterState::City("Miami".to_owned()));
        assert!(filter.matches("Miami"));
        assert!(!filter.matches("Orlando"));
        // Exact, case-sensitive match only.
        assert!(!filter.matches("miami"));
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(FilterState::All.matches("Miami"));
        assert!(FilterState::All.matches(""));
    }

    #[test]
    fn extracts_selection_from_click_payload() {
        let payload = json!({
            "points": [{ "hovertext": "Orlando", "customdata": 412 }]
        });
        let selection = ClickSelection::from_click_payload(&payload).unwrap();
        assert_eq!(selection.city, "Orlando");
        assert_eq!(selection.metric, 412);
    }

    #[test]
    fn malformed_click_payloads_yield_no_selection() {
        assert!(ClickSelection::from_click_payload(&json!(null)).is_none());
        assert!(ClickSelection::from_click_payload(&json!({})).is_none());
        assert!(ClickSelection::from_click_payload(&json!({ "points": [] })).is_none());
        assert!(
            ClickSelection::from_click_payload(&json!({
                "points": [{ "customdata": 412 }]
            }))
            .is_none()
        );
        assert!(
            ClickSelection::from_click_payload(&json!({
                "points": [{ "hovertext": "Orlando" }]
            }))
            .is_none()
        );
    }

    #[test]
    fn display_cells_cover_every_column() {
        let record = EmployerRecord {
            fiscal_year: 2023,
            employer_name: "Acme Corp".to_owned(),
            tax_id: 123_456_789,
            industry_code: "54".to_owned(),
            city: "Miami".to_owned(),
            state: "FL".to_owned(),
            zip_code: "33101".to_owned(),
            new_employment_approval: 5,
            new_employment_denial: 1,
            continuation_approval: 10,
            continuation_denial: 0,
            change_same_employer_approval: 2,
            change_same_employer_denial: 0,
            new_concurrent_approval: 0,
            new_concurrent_denial: 0,
            change_of_employer_approval: 3,
            change_of_employer_denial: 1,
            amended_approval: 1,
            amended_denial: 0,
            total_approvals: 21,
        };
        let cells = record.display_cells();
        assert_eq!(cells.len(), columns::EMPLOYER_DISPLAY_COLUMNS.len());
        assert_eq!(cells[0], "2023");
        assert_eq!(cells[1], "Acme Corp");
        assert_eq!(cells[4], "Miami");
        assert_eq!(cells[19], "21");
    }
}
