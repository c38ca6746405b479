//! Geographic utilities: great-circle distance, path length, bounds and the
//! line geometry handed to the map.

use geo::{BoundingRect, Coord, LineString};

use crate::{Bounds, GeoSample};

/// Mean Earth radius used for haversine distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two samples in kilometers (haversine).
///
/// # Example
/// ```
/// use route_profile::GeoSample;
/// use route_profile::geo_utils::great_circle_distance_km;
///
/// let a = GeoSample::new(0.0, 0.0);
/// let b = GeoSample::new(0.0, 1.0);
/// let d = great_circle_distance_km(&a, &b);
/// assert!((d - 111.19).abs() < 0.5);
/// ```
pub fn great_circle_distance_km(a: &GeoSample, b: &GeoSample) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length of a path in kilometers.
pub fn polyline_length_km(samples: &[GeoSample]) -> f64 {
    samples
        .windows(2)
        .map(|w| great_circle_distance_km(&w[0], &w[1]))
        .sum()
}

/// Line geometry for the map, elevation dropped.
///
/// Coordinates follow the `geo` convention: `x` is longitude, `y` latitude.
pub fn line_geometry(samples: &[GeoSample]) -> LineString<f64> {
    samples
        .iter()
        .map(|s| Coord {
            x: s.longitude,
            y: s.latitude,
        })
        .collect()
}

/// Bounding box of a route, `None` when the route is empty.
pub fn compute_bounds(samples: &[GeoSample]) -> Option<Bounds> {
    let rect = line_geometry(samples).bounding_rect()?;
    Some(Bounds {
        min_lat: rect.min().y,
        max_lat: rect.max().y,
        min_lng: rect.min().x,
        max_lng: rect.max().x,
    })
}
