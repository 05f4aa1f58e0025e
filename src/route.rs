//! Route storage and GeoJSON extraction
//!
//! This module provides the `Route` struct for storing a race course as a
//! single ordered polyline with precomputed total distance.

use crate::{MapError, Result};
use geo::Point;
use geojson::{FeatureCollection, Value};

/// A race route as an ordered sequence of WGS84 points (x = lon, y = lat)
///
/// Multi-part source geometry is flattened into one sequence at construction;
/// distance accumulates across part boundaries as if the line were continuous.
#[derive(Clone, Debug)]
pub struct Route {
    points: Vec<Point<f64>>,
    /// Cached total distance in meters (computed once during construction)
    cached_total_distance: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Route {
    /// Create a new Route from an ordered sequence of points
    ///
    /// Coordinates must be finite; a route containing NaN or infinite values
    /// is rejected rather than silently propagated into marker positions.
    /// Routes with fewer than two points are valid but yield no markers.
    pub fn new(points: Vec<Point<f64>>) -> Result<Self> {
        #[cfg(feature = "profiling")]
        profiling::scope!("route::new");

        for (index, point) in points.iter().enumerate() {
            if !point.x().is_finite() || !point.y().is_finite() {
                return Err(MapError::InvalidRoute(format!(
                    "non-finite coordinate at index {index}: ({}, {})",
                    point.x(),
                    point.y()
                )));
            }
        }

        let cached_total_distance = points
            .windows(2)
            .map(|pair| haversine_distance(&pair[0], &pair[1]))
            .sum();

        Ok(Route {
            points,
            cached_total_distance,
        })
    }

    /// Create a Route from a multi-part line, discarding part boundaries
    pub fn from_parts(parts: Vec<Vec<Point<f64>>>) -> Result<Self> {
        Self::new(parts.into_iter().flatten().collect())
    }

    /// Extract the route polyline from a GeoJSON feature collection
    ///
    /// All `LineString` and `MultiLineString` geometries in the collection are
    /// flattened, in feature order, into one sequence. Non-line geometries are
    /// ignored with a warning. A collection containing no line geometry at all
    /// is an error.
    pub fn from_feature_collection(collection: &FeatureCollection) -> Result<Self> {
        #[cfg(feature = "profiling")]
        profiling::scope!("route::from_feature_collection");

        let mut parts: Vec<Vec<Point<f64>>> = Vec::new();
        for feature in &collection.features {
            if let Some(geometry) = feature.geometry.as_ref() {
                collect_line_parts(&geometry.value, &mut parts);
            }
        }

        if parts.is_empty() {
            return Err(MapError::UnsupportedGeometry(
                "no line geometry in route collection".to_string(),
            ));
        }

        Self::from_parts(parts)
    }

    /// Get the route points
    #[inline]
    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    /// Get the number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the route has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total route distance in meters
    ///
    /// This is O(1) as the value is cached during construction.
    /// Uses the Haversine formula for distance calculation on a sphere.
    #[inline]
    pub fn total_distance(&self) -> f64 {
        self.cached_total_distance
    }
}

/// Recursively collect line parts from a GeoJSON geometry value
fn collect_line_parts(value: &Value, parts: &mut Vec<Vec<Point<f64>>>) {
    match value {
        Value::LineString(line) => parts.push(positions_to_points(line)),
        Value::MultiLineString(lines) => {
            parts.extend(lines.iter().map(|line| positions_to_points(line)));
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_line_parts(&geometry.value, parts);
            }
        }
        other => {
            tracing::warn!(
                "Ignoring non-line geometry in route data: {}",
                geometry_type_name(other)
            );
        }
    }
}

/// GeoJSON type name of a geometry value, for diagnostics
pub(crate) fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn positions_to_points(positions: &[Vec<f64>]) -> Vec<Point<f64>> {
    positions
        .iter()
        .filter_map(|position| {
            if position.len() < 2 {
                tracing::warn!(
                    "Skipping malformed position with {} ordinates",
                    position.len()
                );
                return None;
            }
            // GeoJSON positions are [lon, lat, ...]
            Some(Point::new(position[0], position[1]))
        })
        .collect()
}

/// Calculate the Haversine distance between two WGS84 points in meters
///
/// This is the same metric the map layer uses to draw the route, so marker
/// placement lines up with the rendered polyline.
#[inline]
pub(crate) fn haversine_distance(p1: &Point<f64>, p2: &Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lon = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    // Earth's radius in meters
    const EARTH_RADIUS_M: f64 = 6371000.0;
    EARTH_RADIUS_M * c
}
