//! GeoJSON data loading boundary
//!
//! Reads route and POI feature collections from disk and converts them into
//! the in-memory model. Fetching policy (retries, caching, timeouts) belongs
//! to the surrounding shell; this module only opens, parses, and converts.

use crate::event::{EventInfo, EventStatus};
use crate::filter::PoiDataset;
use crate::markers::{KmMarker, MARKER_INTERVAL_METERS, place_markers};
use crate::poi::Poi;
use crate::route::Route;
use crate::Result;
use geojson::{FeatureCollection, GeoJson};
use rayon::prelude::*;
use std::path::Path;

/// Read and parse a GeoJSON feature collection from a file
///
/// Missing files surface as IO errors, malformed JSON as parse errors, and
/// valid JSON that is not a feature collection as a GeoJSON error.
pub fn load_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    #[cfg(feature = "profiling")]
    profiling::scope!("loader::load_feature_collection");

    let file = std::fs::File::open(path.as_ref())?;
    let reader = std::io::BufReader::new(file);
    let geojson: GeoJson = serde_json::from_reader(reader)?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// Load a route file and flatten its line geometry into a single polyline
pub fn load_route<P: AsRef<Path>>(path: P) -> Result<Route> {
    let collection = load_feature_collection(path)?;
    Route::from_feature_collection(&collection)
}

/// Load a POI file, skipping features without usable point geometry
pub fn load_pois<P: AsRef<Path>>(path: P) -> Result<Vec<Poi>> {
    let collection = load_feature_collection(path)?;
    Ok(collection
        .features
        .iter()
        .filter_map(Poi::from_feature)
        .collect())
}

/// Everything the map page needs for one published event
pub struct EventData {
    pub event: &'static EventInfo,
    pub route: Route,
    pub markers: Vec<KmMarker>,
    pub pois: PoiDataset,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl EventData {
    /// Load the route and POI files for one event
    ///
    /// Coming-soon events have no data files and load as `None`. The route is
    /// required; POI data is optional, matching the page behavior of showing
    /// the route with the filter controls hidden when POIs are unavailable.
    pub fn load(event: &'static EventInfo, data_dir: &Path) -> Result<Option<Self>> {
        let EventStatus::Open {
            route_file,
            pois_file,
            ..
        } = event.status
        else {
            return Ok(None);
        };

        let route = load_route(data_dir.join(route_file))?;
        let markers = place_markers(&route, MARKER_INTERVAL_METERS);

        let pois = match load_pois(data_dir.join(pois_file)) {
            Ok(pois) => PoiDataset::new(pois),
            Err(error) => {
                tracing::warn!("No POI data for {}: {}", event.id, error);
                PoiDataset::default()
            }
        };

        tracing::debug!(
            "Loaded {}: {} route points, {} markers, {} POIs",
            event.id,
            route.len(),
            markers.len(),
            pois.len()
        );

        Ok(Some(Self {
            event,
            route,
            markers,
            pois,
        }))
    }

    /// Load multiple events in parallel
    ///
    /// Parsing and conversion parallelize per event; coming-soon entries are
    /// skipped. The first hard failure aborts the whole load.
    pub fn load_many(events: &[&'static EventInfo], data_dir: &Path) -> Result<Vec<Self>> {
        #[cfg(feature = "profiling")]
        profiling::scope!("loader::load_many");

        let results: Result<Vec<Option<Self>>> = events
            .par_iter()
            .map(|event| Self::load(event, data_dir))
            .collect();

        Ok(results?.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("marathon-map-lib-{}-{}", std::process::id(), name))
    }

    fn write_file(name: &str, contents: &str) -> PathBuf {
        let path = temp_path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    const ROUTE_GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[0.0, 0.0], [0.05, 0.0], [0.1, 0.0]]
            },
            "properties": {}
        }]
    }"#;

    const POIS_GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.01, 0.0] },
                "properties": { "type": 4, "name": "cafe", "cuisine": "Coffee" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.02, 0.0] },
                "properties": { "type": 1, "name": "gallery" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[0.0, 0.0], [1.0, 1.0]]
                },
                "properties": { "type": 2, "name": "not a point" }
            }
        ]
    }"#;

    #[test]
    fn test_load_route_from_file() {
        let path = write_file("route.geojson", ROUTE_GEOJSON);
        let route = load_route(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(route.len(), 3);
        assert!(route.total_distance() > 10_000.0);
    }

    #[test]
    fn test_load_pois_skips_non_points() {
        let path = write_file("pois.geojson", POIS_GEOJSON);
        let pois = load_pois(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name.as_deref(), Some("cafe"));
        assert_eq!(pois[1].name.as_deref(), Some("gallery"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_feature_collection(temp_path("does-not-exist.geojson"));
        assert!(matches!(result, Err(MapError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let path = write_file("broken.geojson", "{ not json");
        let result = load_feature_collection(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(MapError::Json(_))));
    }

    #[test]
    fn test_non_collection_document_is_geojson_error() {
        let path = write_file(
            "geometry-only.geojson",
            r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#,
        );
        let result = load_feature_collection(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(MapError::GeoJson(_))));
    }

    #[test]
    fn test_event_data_load_coming_soon_is_none() {
        let event = EventInfo::find("almaty").unwrap();
        let loaded = EventData::load(event, &std::env::temp_dir()).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_event_data_load_with_data_dir() {
        // Lay out the on-disk structure an open event expects
        let data_dir = temp_path("event-data");
        let europe = data_dir.join("data/europe");
        std::fs::create_dir_all(&europe).unwrap();
        std::fs::write(europe.join("london-route.geojson"), ROUTE_GEOJSON).unwrap();
        std::fs::write(europe.join("london-pois.geojson"), POIS_GEOJSON).unwrap();

        let event = EventInfo::find("london").unwrap();
        let loaded = EventData::load(event, &data_dir).unwrap().unwrap();
        std::fs::remove_dir_all(&data_dir).unwrap();

        assert_eq!(loaded.event.id, "london");
        assert_eq!(loaded.route.len(), 3);
        // ~11 km of route: markers at 5 and 10 km
        assert_eq!(loaded.markers.len(), 2);
        assert_eq!(loaded.pois.len(), 2);
        assert!(loaded.pois.cuisines().contains("Coffee"));
    }

    #[test]
    fn test_event_data_load_tolerates_missing_pois() {
        let data_dir = temp_path("event-data-no-pois");
        let europe = data_dir.join("data/europe");
        std::fs::create_dir_all(&europe).unwrap();
        std::fs::write(europe.join("berlin-route.geojson"), ROUTE_GEOJSON).unwrap();

        let event = EventInfo::find("berlin").unwrap();
        let loaded = EventData::load(event, &data_dir).unwrap().unwrap();
        std::fs::remove_dir_all(&data_dir).unwrap();

        assert_eq!(loaded.route.len(), 3);
        assert!(loaded.pois.is_empty());
    }

    #[test]
    fn test_event_data_load_requires_route() {
        let data_dir = temp_path("event-data-empty");
        std::fs::create_dir_all(&data_dir).unwrap();

        let event = EventInfo::find("tokyo").unwrap();
        let result = EventData::load(event, &data_dir);
        std::fs::remove_dir_all(&data_dir).unwrap();

        assert!(matches!(result, Err(MapError::Io(_))));
    }
}
