//! Elevation profile derivation.
//!
//! Turns an ordered route into distance-indexed elevation samples for a
//! chart. Each [`ProfilePoint`] keeps the index of the sample it came from so
//! a chart hover can be mapped back to a map position.
//!
//! ## Example
//! ```rust
//! use route_profile::{GeoSample, profile::derive};
//!
//! let route = vec![
//!     GeoSample::with_elevation(45.0, 25.0, 100.0),
//!     GeoSample::with_elevation(45.001, 25.001, 110.0),
//!     GeoSample::new(45.002, 25.002),
//! ];
//! let points = derive(&route);
//! assert_eq!(points.len(), 3);
//! assert_eq!(points[0].cumulative_distance_km, 0.0);
//! assert_eq!(points[2].elevation_meters, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo_utils::great_circle_distance_km;
use crate::GeoSample;

/// One chart sample: distance along the route paired with elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Distance from the route start in kilometers (non-decreasing)
    pub cumulative_distance_km: f64,
    /// Elevation in meters, `0.0` when the sample had none
    pub elevation_meters: f64,
    /// Index of the originating sample in the route
    pub source_index: usize,
}

/// Derive one profile point per route sample.
///
/// The first point sits at distance 0; each following point adds the
/// haversine distance from its predecessor. An empty route yields an empty
/// profile.
pub fn derive(samples: &[GeoSample]) -> Vec<ProfilePoint> {
    let mut distance_km = 0.0;
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            if i > 0 {
                distance_km += great_circle_distance_km(&samples[i - 1], sample);
            }
            ProfilePoint {
                cumulative_distance_km: distance_km,
                elevation_meters: sample.elevation.unwrap_or(0.0),
                source_index: i,
            }
        })
        .collect()
}

/// Chart-ready `{x, y}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct ChartDatum {
    x: f64,
    y: f64,
}

/// A derived profile plus the summary values a chart needs for its axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevationProfile {
    pub points: Vec<ProfilePoint>,
    /// Distance of the last point, 0 for empty routes
    pub total_distance_km: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
    /// Sum of positive elevation changes between consecutive samples
    pub ascent_meters: f64,
    /// Sum of negative elevation changes, as a positive number
    pub descent_meters: f64,
}

impl ElevationProfile {
    /// Derive the profile of a route.
    pub fn from_samples(samples: &[GeoSample]) -> Self {
        let points = derive(samples);

        let total_distance_km = points
            .last()
            .map(|p| p.cumulative_distance_km)
            .unwrap_or(0.0);

        let (min_elevation, max_elevation) = if points.is_empty() {
            (0.0, 0.0)
        } else {
            points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
                (lo.min(p.elevation_meters), hi.max(p.elevation_meters))
            })
        };

        let mut ascent_meters = 0.0;
        let mut descent_meters = 0.0;
        for w in points.windows(2) {
            let delta = w[1].elevation_meters - w[0].elevation_meters;
            if delta > 0.0 {
                ascent_meters += delta;
            } else {
                descent_meters -= delta;
            }
        }

        Self {
            points,
            total_distance_km,
            min_elevation,
            max_elevation,
            ascent_meters,
            descent_meters,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at a chart index.
    pub fn point_at(&self, index: usize) -> Option<&ProfilePoint> {
        self.points.get(index)
    }

    /// Point closest to a distance along the route.
    ///
    /// Distances are sorted, so this is a binary search. When two points are
    /// equally close the earlier one wins.
    pub fn nearest_to_distance(&self, distance_km: f64) -> Option<&ProfilePoint> {
        if self.points.is_empty() || distance_km.is_nan() {
            return None;
        }

        let idx = self
            .points
            .partition_point(|p| p.cumulative_distance_km < distance_km);

        if idx == 0 {
            return self.points.first();
        }
        if idx >= self.points.len() {
            return self.points.last();
        }

        let before = &self.points[idx - 1];
        let after = &self.points[idx];
        if distance_km - before.cumulative_distance_km <= after.cumulative_distance_km - distance_km
        {
            Some(before)
        } else {
            Some(after)
        }
    }

    /// Serialize as the chart dataset: `[{"x": km, "y": m}, ...]`.
    pub fn to_chart_json(&self) -> Result<String> {
        let data: Vec<ChartDatum> = self
            .points
            .iter()
            .map(|p| ChartDatum {
                x: p.cumulative_distance_km,
                y: p.elevation_meters,
            })
            .collect();
        Ok(serde_json::to_string(&data)?)
    }
}
