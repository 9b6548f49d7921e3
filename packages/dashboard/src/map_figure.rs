//! Bubble-map figure rendering.
//!
//! Builds a declarative, Plotly-compatible figure specification (one
//! `scattermap` trace plus a fixed-view layout) from the city aggregates and
//! the current filter. The frontend feeds the serialized spec straight to
//! `Plotly.react`.

use h1b_map_petition_models::{CityAggregate, FilterState};
use serde::Serialize;

/// Figure title.
pub const MAP_TITLE: &str = "H1B Petition Counts by City in Florida";
/// Base-map style.
pub const MAP_STYLE: &str = "open-street-map";
/// Continuous color scale for the petition-count metric.
pub const COLOR_SCALE: &str = "Plasma";
/// Fixed map center, tuned to Florida (not derived from the data).
pub const CENTER: (f64, f64) = (28.0, -82.0);
/// Fixed zoom level for the Florida view.
pub const ZOOM: f64 = 6.5;
/// Diameter in pixels that the largest bubble of the filtered subset reaches.
pub const MAX_BUBBLE_PX: f64 = 80.0;

/// A complete map-figure specification: one trace and a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFigure {
    /// Trace list (always exactly one bubble trace).
    pub data: Vec<ScatterMapTrace>,
    /// Fixed-view layout.
    pub layout: MapLayout,
}

/// The bubble trace: one marker per included city.
///
/// Every per-point array is in city load order, so identical inputs yield an
/// identical spec. `hovertext` and `customdata` carry the (city, metric)
/// pair that the click handler recovers from the event payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMapTrace {
    /// Plotly trace type (`scattermap`).
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    /// Drawing mode (`markers`).
    pub mode: &'static str,
    /// Marker latitudes.
    pub lat: Vec<f64>,
    /// Marker longitudes.
    pub lon: Vec<f64>,
    /// Hover label per marker: the city name.
    pub hovertext: Vec<String>,
    /// Hover content selector (`text`).
    pub hoverinfo: &'static str,
    /// Metric value per marker, recoverable from click events.
    pub customdata: Vec<u64>,
    /// Marker styling.
    pub marker: Marker,
}

/// Marker sizing and coloring, both driven by the petition count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Raw metric values used for sizing.
    pub size: Vec<u64>,
    /// Plotly size mode (`area`).
    pub sizemode: &'static str,
    /// Area scale factor; relative to the filtered subset's maximum.
    pub sizeref: f64,
    /// Raw metric values used for coloring.
    pub color: Vec<u64>,
    /// Named continuous color scale.
    pub colorscale: &'static str,
    /// Whether to show the color bar.
    pub showscale: bool,
    /// Color bar labeling.
    pub colorbar: ColorBar,
}

/// Color bar configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    /// Color bar title.
    pub title: Title,
}

/// A Plotly title object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    /// Title text.
    pub text: &'static str,
}

/// Figure layout: title, fixed map view, and tight margins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayout {
    /// Figure title.
    pub title: Title,
    /// Base map view parameters.
    pub map: MapView,
    /// Plot margins.
    pub margin: Margin,
}

/// Base map style, center, and zoom. Fixed; never derived from the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Base-map style name.
    pub style: &'static str,
    /// Map center.
    pub center: Center,
    /// Zoom level.
    pub zoom: f64,
}

/// A latitude/longitude center point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    /// Center latitude.
    pub lat: f64,
    /// Center longitude.
    pub lon: f64,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    /// Right margin.
    pub r: u32,
    /// Top margin.
    pub t: u32,
    /// Left margin.
    pub l: u32,
    /// Bottom margin.
    pub b: u32,
}

/// Renders the bubble-map figure for the given filter.
///
/// Includes every city under [`FilterState::All`], otherwise only exact
/// (case-sensitive) matches of the selected name. Bubble area is scaled so
/// the largest value in the *filtered* subset reaches [`MAX_BUBBLE_PX`];
/// sizes are therefore not comparable across different filter selections.
#[must_use]
pub fn render(cities: &[CityAggregate], filter: &FilterState) -> MapFigure {
    let included: Vec<&CityAggregate> = cities.iter().filter(|c| filter.matches(&c.city)).collect();

    let counts: Vec<u64> = included.iter().map(|c| c.petition_count).collect();
    let max_count = counts.iter().copied().max().unwrap_or(0);

    MapFigure {
        data: vec![ScatterMapTrace {
            trace_type: "scattermap",
            mode: "markers",
            lat: included.iter().map(|c| c.latitude).collect(),
            lon: included.iter().map(|c| c.longitude).collect(),
            hovertext: included.iter().map(|c| c.city.clone()).collect(),
            hoverinfo: "text",
            customdata: counts.clone(),
            marker: Marker {
                size: counts.clone(),
                sizemode: "area",
                sizeref: sizeref(max_count),
                color: counts,
                colorscale: COLOR_SCALE,
                showscale: true,
                colorbar: ColorBar {
                    title: Title {
                        text: "Petition Count",
                    },
                },
            },
        }],
        layout: MapLayout {
            title: Title { text: MAP_TITLE },
            map: MapView {
                style: MAP_STYLE,
                center: Center {
                    lat: CENTER.0,
                    lon: CENTER.1,
                },
                zoom: ZOOM,
            },
            margin: Margin {
                r: 0,
                t: 40,
                l: 0,
                b: 0,
            },
        },
    }
}

/// Plotly area-mode scale factor: the subset maximum maps to a marker of
/// [`MAX_BUBBLE_PX`] diameter. An all-zero (or empty) subset falls back to a
/// neutral factor so the spec stays well-formed.
fn sizeref(max_count: u64) -> f64 {
    if max_count == 0 {
        1.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let max = max_count as f64;
        2.0 * max / (MAX_BUBBLE_PX * MAX_BUBBLE_PX)
    }
}
