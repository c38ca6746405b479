//! Route payload decoding.
//!
//! A route arrives as a JSON string in one of two shapes:
//! - a flat list of `[lat, lon]` or `[lat, lon, ele]` tuples
//! - an object wrapping such a list under `coordinates`
//!
//! Decoding is all-or-nothing: the first malformed tuple fails the whole
//! payload so that no partial route is ever rendered.
//!
//! # Example
//! ```
//! use route_profile::payload::parse_route;
//!
//! let flat = parse_route("[[45.0, 25.0, 100], [45.001, 25.001]]").unwrap();
//! let wrapped = parse_route(r#"{"coordinates": [[45.0, 25.0, 100], [45.001, 25.001]]}"#).unwrap();
//! assert_eq!(flat, wrapped);
//! assert_eq!(flat[1].elevation, None);
//! ```

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProfileError, Result};
use crate::GeoSample;

/// Accepted top-level payload shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoutePayload {
    Flat(Vec<RawPoint>),
    Wrapped { coordinates: Vec<RawPoint> },
}

impl RoutePayload {
    fn into_points(self) -> Vec<RawPoint> {
        match self {
            RoutePayload::Flat(points) => points,
            RoutePayload::Wrapped { coordinates } => coordinates,
        }
    }
}

/// One coordinate tuple before validation.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawPoint(Vec<Value>);

impl RawPoint {
    fn into_sample(self, index: usize) -> Result<GeoSample> {
        let values = self.0;
        if values.len() < 2 || values.len() > 3 {
            return Err(ProfileError::InvalidCoordinates {
                index,
                message: format!("expected 2 or 3 values, got {}", values.len()),
            });
        }

        let latitude = number_at(&values, 0, "latitude", index)?;
        let longitude = number_at(&values, 1, "longitude", index)?;

        let elevation = match values.get(2) {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_f64().ok_or_else(|| ProfileError::InvalidCoordinates {
                index,
                message: format!("elevation is not a number: {}", v),
            })?),
        };

        let sample = GeoSample {
            latitude,
            longitude,
            elevation,
        };
        if !sample.is_valid() {
            return Err(ProfileError::InvalidCoordinates {
                index,
                message: format!("({}, {}) is out of range", latitude, longitude),
            });
        }
        Ok(sample)
    }
}

fn number_at(values: &[Value], pos: usize, name: &str, index: usize) -> Result<f64> {
    values[pos]
        .as_f64()
        .ok_or_else(|| ProfileError::InvalidCoordinates {
            index,
            message: format!("{} is not a number: {}", name, values[pos]),
        })
}

/// Decode a serialized route into geographic samples.
///
/// Blank input decodes to an empty route (nothing to render, not an error).
pub fn parse_route(json: &str) -> Result<Vec<GeoSample>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    // Surface JSON syntax errors with their position before trying shapes
    let value: Value = serde_json::from_str(json)?;

    let payload = RoutePayload::deserialize(value).map_err(|_| ProfileError::Parse {
        message: "expected a list of [lat, lon] / [lat, lon, ele] tuples or an object with a `coordinates` list".to_string(),
    })?;

    let samples = payload
        .into_points()
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_sample(i))
        .collect::<Result<Vec<_>>>()?;

    debug!("[RouteProfile] Decoded {} route points", samples.len());
    Ok(samples)
}
