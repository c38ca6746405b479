//! R-tree over route samples for map-position lookups.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::GeoSample;

/// A route sample position with its index for R-tree queries
#[derive(Debug, Clone, Copy)]
pub struct IndexedSample {
    pub idx: usize,
    pub lat: f64,
    pub lng: f64,
}

impl RTreeObject for IndexedSample {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.lat, self.lng])
    }
}

impl PointDistance for IndexedSample {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.lat - point[0];
        let dlng = self.lng - point[1];
        dlat * dlat + dlng * dlng
    }
}

/// Nearest-sample index for one route.
///
/// Distances are planar in degree space, which is enough to pick the sample
/// under a pointer.
#[derive(Debug, Default)]
pub struct SampleIndex {
    tree: RTree<IndexedSample>,
}

impl SampleIndex {
    pub fn build(samples: &[GeoSample]) -> Self {
        let indexed: Vec<IndexedSample> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| IndexedSample {
                idx: i,
                lat: s.latitude,
                lng: s.longitude,
            })
            .collect();
        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Source index of the sample closest to a map position.
    ///
    /// Non-finite positions match nothing.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<usize> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        self.tree
            .nearest_neighbor(&[latitude, longitude])
            .map(|s| s.idx)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
