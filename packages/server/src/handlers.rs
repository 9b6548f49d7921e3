//! HTTP handler functions for the dashboard.
//!
//! Each handler is one of the explicit reactive edges of the UI: the map
//! endpoint reacts to dropdown changes, the detail endpoint to map clicks.
//! Both are idempotent pure reads over the shared datasets and return a
//! fully-formed view object.

use actix_web::{HttpResponse, web};
use h1b_map_petition_models::{ALL_SENTINEL, ClickSelection, FilterState};
use h1b_map_server_models::{ApiHealth, CityOption, MapQueryParams};

use crate::AppState;

/// Label of the dropdown option mapped to the `ALL` sentinel.
const ALL_OPTION_LABEL: &str = "All States";

const INDEX_HTML: &str = include_str!("index.html");

/// `GET /`
///
/// The single-page dashboard shell.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/cities`
///
/// Dropdown options: the `All States` sentinel first, then every city in
/// the aggregate dataset in load order.
pub async fn cities(state: web::Data<AppState>) -> HttpResponse {
    let mut options = vec![CityOption {
        label: ALL_OPTION_LABEL.to_owned(),
        value: ALL_SENTINEL.to_owned(),
    }];
    options.extend(state.datasets.cities.iter().map(|c| CityOption {
        label: c.city.clone(),
        value: c.city.clone(),
    }));

    HttpResponse::Ok().json(options)
}

/// `GET /api/map`
///
/// Re-renders the bubble-map figure for the selected city filter. A missing
/// or empty `city` parameter means no restriction.
pub async fn map(state: web::Data<AppState>, params: web::Query<MapQueryParams>) -> HttpResponse {
    let filter = FilterState::from_param(params.city.as_deref());
    let figure = h1b_map_dashboard::map_figure::render(&state.datasets.cities, &filter);

    HttpResponse::Ok().json(figure)
}

/// `POST /api/detail`
///
/// Resolves a raw map click payload into the employer detail view. An
/// absent, unparseable, or malformed payload counts as "no selection" and
/// yields the placeholder; a real city with zero records yields an empty
/// table.
pub async fn detail(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    let selection = ClickSelection::from_click_payload(&payload);
    if let Some(selection) = &selection {
        log::debug!(
            "Map click: city='{}' metric={}",
            selection.city,
            selection.metric
        );
    }

    let view = h1b_map_dashboard::detail::resolve(
        &state.datasets.records,
        selection.as_ref().map(|s| s.city.as_str()),
    );

    HttpResponse::Ok().json(view)
}
