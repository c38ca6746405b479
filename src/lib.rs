//! # Route Profile
//!
//! Elevation profiles and map/chart view binding for recorded GPS routes.
//!
//! This library provides:
//! - Route payload decoding (`[lat, lon(, ele)]` tuples, bare or wrapped)
//! - Distance-indexed elevation profiles using haversine distances
//! - A route view component that drives an external map widget and an
//!   external chart widget, keeping both in sync on hover
//!
//! ## Quick Start
//!
//! ```rust
//! use route_profile::{parse_route, ElevationProfile};
//!
//! let route = parse_route("[[45.0,25.0,100],[45.001,25.001,110],[45.002,25.002,90]]").unwrap();
//! let profile = ElevationProfile::from_samples(&route);
//!
//! assert_eq!(profile.len(), 3);
//! assert_eq!(profile.points[0].cumulative_distance_km, 0.0);
//! println!("{:.2} km, +{} m", profile.total_distance_km, profile.ascent_meters);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{ProfileError, Result};

// Geographic utilities (distance, bounds, line geometry)
pub mod geo_utils;
pub use geo_utils::{great_circle_distance_km, EARTH_RADIUS_KM};

// Route payload decoding
pub mod payload;
pub use payload::parse_route;

// Elevation profile derivation
pub mod profile;
pub use profile::{derive, ElevationProfile, ProfilePoint};

// Nearest-sample lookup for map hover
pub mod spatial;
pub use spatial::SampleIndex;

// Map and chart view lifecycle
pub mod view;
pub use view::{
    ChartSurface, LineStyle, MapSurface, PositionMarkerStyle, RouteView, TileLayer, ViewOptions,
    WidgetFactory,
};

// ============================================================================
// Core Types
// ============================================================================

/// One recorded route position, optionally with elevation in meters.
///
/// # Example
/// ```
/// use route_profile::GeoSample;
/// let summit = GeoSample::with_elevation(45.8326, 6.8652, 4806.0);
/// assert!(summit.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoSample {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
}

impl GeoSample {
    /// Create a sample without elevation.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Create a sample with elevation.
    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: Some(elevation),
        }
    }

    /// Check if the sample has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box for a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from route samples.
    pub fn from_samples(samples: &[GeoSample]) -> Option<Self> {
        geo_utils::compute_bounds(samples)
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GeoSample {
        GeoSample::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_validation() {
        assert!(GeoSample::new(51.5074, -0.1278).is_valid());
        assert!(!GeoSample::new(91.0, 0.0).is_valid());
        assert!(!GeoSample::new(0.0, 181.0).is_valid());
        assert!(!GeoSample::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_bounds_center() {
        let bounds = Bounds::from_samples(&[GeoSample::new(10.0, 20.0), GeoSample::new(12.0, 24.0)])
            .unwrap();
        let center = bounds.center();
        assert_eq!(center.latitude, 11.0);
        assert_eq!(center.longitude, 22.0);
    }

    #[test]
    fn test_parse_then_profile() {
        let route = parse_route(r#"{"coordinates":[[0,0,5],[0,1]]}"#).unwrap();
        let profile = ElevationProfile::from_samples(&route);
        assert_eq!(profile.points[1].elevation_meters, 0.0);
        assert!((profile.total_distance_km - 111.19).abs() < 0.5);
    }
}
