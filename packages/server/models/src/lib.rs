#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the H1B petition map server.
//!
//! These types are serialized to JSON for the dashboard frontend. They are
//! separate from the domain row types to allow independent evolution of the
//! API contract.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// One option of the city dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityOption {
    /// Label shown to the user.
    pub label: String,
    /// Value submitted on selection (a city name or the `ALL` sentinel).
    pub value: String,
}

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Selected city, or the `ALL` sentinel. Absent means all cities.
    pub city: Option<String>,
}
