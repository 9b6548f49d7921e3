#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure view renderers for the H1B petition map dashboard.
//!
//! Two functions, both deterministic and side-effect free over the shared
//! read-only datasets: [`map_figure::render`] produces the declarative
//! bubble-map specification for the current filter, and [`detail::resolve`]
//! produces the click-through employer detail view. The UI shell re-invokes
//! them on each interaction event and replaces the corresponding panel
//! wholesale; nothing here holds state.

pub mod detail;
pub mod map_figure;
