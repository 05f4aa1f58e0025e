//! Marathon Map Library - Route Markers and POI Filtering
//!
//! This library provides the data core behind marathon event map pages: it
//! places kilometer markers along a race route and computes which points of
//! interest are visible for the active filter and zoom level. The rendering
//! shell (map widget, popups, filter dropdowns) consumes the results; it owns
//! no logic of its own.
//!
//! # Architecture
//!
//! - **[`Route`]**: Immutable polyline of WGS84 points with cached total distance
//! - **[`place_markers`]**: Interpolated distance markers at fixed intervals
//! - **[`Poi`] / [`FilterState`]**: Typed POI categories and the active filter pair
//! - **[`PoiDataset`]**: POIs bundled with their cuisine index
//! - **[`PoiLayerState`]**: Zoom-driven attach/detach decisions for the POI layer
//! - **[`EventInfo`]**: Static registry of marathon events and their data files
//!
//! All core operations are synchronous pure functions over immutable inputs;
//! the only I/O lives in the [`loader`] boundary.

mod carousel;
mod event;
mod filter;
mod layer;
mod loader;
mod markers;
mod poi;
mod route;

// Public API exports
pub use carousel::{Carousel, CarouselLayout, ScrollDirection};
pub use event::{Continent, EventInfo, EventStatus};
pub use filter::{
    CategorySelection, CuisineIndex, CuisineSelection, FilterState, PoiDataset, filter_pois,
};
pub use layer::{LayerTransition, POI_ZOOM_THRESHOLD, PoiLayerState, should_show_poi_layer};
pub use loader::{EventData, load_feature_collection, load_pois, load_route};
pub use markers::{KmMarker, MARKER_INTERVAL_METERS, place_markers};
pub use poi::{Poi, PoiCategory};
pub use route::Route;

/// Error types for the map data core
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
