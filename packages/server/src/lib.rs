#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the H1B petition map dashboard.
//!
//! Loads both CSV datasets once at startup into read-only shared state,
//! then serves the single-page dashboard shell at `/` and the view API
//! under `/api`. Every handler is a synchronous pure read over the shared
//! datasets; per-session filter and click state live entirely client-side.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use h1b_map_dataset::Datasets;
use std::path::PathBuf;

/// Default bind address (all interfaces, as the reference deployment).
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8050;
/// Default directory holding the two dataset CSV files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Shared application state.
pub struct AppState {
    /// Both datasets, loaded once and never mutated.
    pub datasets: Datasets,
}

/// Starts the dashboard server.
///
/// Initializes logging, loads the datasets (fatal on any load error — the
/// server refuses to start on a missing file or column), and binds the HTTP
/// server. `BIND_ADDR`, `PORT`, and `DATA_DIR` environment variables
/// override the defaults.
///
/// # Errors
///
/// Returns an error if the datasets fail to load or the HTTP server fails
/// to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_dir =
        PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()));

    log::info!("Loading datasets from {}...", data_dir.display());
    let datasets = h1b_map_dataset::load(
        &data_dir.join(h1b_map_dataset::AGGREGATE_FILE),
        &data_dir.join(h1b_map_dataset::EMPLOYER_FILE),
    )
    .map_err(|e| {
        log::error!("Failed to load datasets: {e}");
        std::io::Error::other(e)
    })?;

    let state = web::Data::new(AppState { datasets });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/cities", web::get().to(handlers::cities))
                    .route("/map", web::get().to(handlers::map))
                    .route("/detail", web::post().to(handlers::detail)),
            )
            .route("/", web::get().to(handlers::index))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
