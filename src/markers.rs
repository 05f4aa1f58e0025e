//! Kilometer marker placement along a route
//!
//! Walks the route polyline, accumulates distance, and emits an interpolated
//! marker at every multiple of the configured interval.

use crate::route::{Route, haversine_distance};
use geo::Point;

/// Spacing between consecutive distance markers in meters
pub const MARKER_INTERVAL_METERS: f64 = 5000.0;

/// A distance marker placed along the route
#[derive(Clone, Debug, PartialEq)]
pub struct KmMarker {
    /// Interpolated position; not necessarily an original route vertex
    pub position: Point<f64>,
    /// 1-based ordinal of the interval multiple this marker sits at
    pub label: u32,
    /// Distance from the route start in meters, an exact multiple of the interval
    pub distance: f64,
}

impl KmMarker {
    /// Kilometer count for display ("kilometer 5" popups)
    #[inline]
    pub fn kilometers(&self) -> f64 {
        self.distance / 1000.0
    }
}

/// Place markers at every `interval` meters along the route
///
/// Marker positions are planar linear interpolations of the coordinate values
/// between the two bracketing route points. At the interval sizes used here
/// the deviation from a geodesic interpolation is negligible.
///
/// A route with fewer than two points yields no markers, as does a route
/// shorter than one interval. Leftover distance short of the next interval is
/// dropped. A non-positive interval yields no markers.
pub fn place_markers(route: &Route, interval: f64) -> Vec<KmMarker> {
    #[cfg(feature = "profiling")]
    profiling::scope!("markers::place_markers");

    let points = route.points();
    if points.len() < 2 || !(interval > 0.0) {
        return Vec::new();
    }

    let mut markers = Vec::new();
    let mut total_distance: f64 = 0.0;
    let mut next_marker_distance = interval;

    for pair in points.windows(2) {
        let (p1, p2) = (&pair[0], &pair[1]);
        let segment_distance = haversine_distance(p1, p2);

        while total_distance + segment_distance >= next_marker_distance {
            let remaining = next_marker_distance - total_distance;
            // A zero-length segment can only satisfy the loop condition when
            // the accumulated distance already sits exactly on the marker;
            // the ratio is 0 in that case, never a division by zero.
            let ratio = if segment_distance == 0.0 {
                0.0
            } else {
                remaining / segment_distance
            };

            let lng = p1.x() + (p2.x() - p1.x()) * ratio;
            let lat = p1.y() + (p2.y() - p1.y()) * ratio;

            markers.push(KmMarker {
                position: Point::new(lng, lat),
                label: (next_marker_distance / interval).round() as u32,
                distance: next_marker_distance,
            });

            next_marker_distance += interval;
        }

        total_distance += segment_distance;
    }

    markers
}
