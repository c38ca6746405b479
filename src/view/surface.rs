//! Seams to the external map and chart widgets.
//!
//! The mapping and charting libraries are supplied by the host. These traits
//! describe only what the route view asks of them; [`MapHandle`] and
//! [`ChartHandle`] tie each widget's release to the owning view.

use std::ops::{Deref, DerefMut};

use geo::LineString;

use super::options::{ChartLabels, ControlPosition, LineStyle, PositionMarkerStyle, TileLayer};
use crate::profile::ElevationProfile;
use crate::{Bounds, GeoSample};

/// Start or finish of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    Finish,
}

impl MarkerKind {
    /// Popup text for the marker.
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Start => "Start",
            MarkerKind::Finish => "Finish",
        }
    }
}

/// Parameters for creating a map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInit {
    pub center: GeoSample,
    pub zoom: u8,
    pub base_layer: TileLayer,
    pub scroll_wheel_zoom: bool,
    pub dragging: bool,
}

/// An interactive map widget.
pub trait MapSurface {
    fn add_layer_switcher(&mut self, layers: &[TileLayer]);
    fn add_zoom_control(&mut self, position: ControlPosition);
    fn add_scale_control(&mut self);
    fn draw_route(&mut self, line: &LineString<f64>, style: &LineStyle);
    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32);
    fn add_marker(&mut self, kind: MarkerKind, position: &GeoSample);
    /// Create the hidden hover position marker.
    fn add_position_marker(&mut self, style: &PositionMarkerStyle);
    /// Move the hover position marker, or hide it with `None`.
    fn show_position(&mut self, position: Option<&GeoSample>);
    /// Recompute the widget size after its container changed.
    fn invalidate_size(&mut self);
    fn remove(&mut self);
}

/// An elevation chart widget.
pub trait ChartSurface {
    fn render(&mut self, profile: &ElevationProfile, labels: &ChartLabels);
    /// Highlight a profile index, or clear the highlight with `None`.
    fn highlight(&mut self, index: Option<usize>);
    fn destroy(&mut self);
}

/// Creates widgets for one view element.
pub trait WidgetFactory {
    type Map: MapSurface;
    type Chart: ChartSurface;

    fn create_map(&mut self, init: &MapInit) -> Self::Map;

    /// `None` when the element has no chart canvas.
    fn create_chart(&mut self) -> Option<Self::Chart>;
}

/// Owned map widget, removed when dropped.
pub struct MapHandle<M: MapSurface>(M);

impl<M: MapSurface> MapHandle<M> {
    pub fn new(map: M) -> Self {
        Self(map)
    }
}

impl<M: MapSurface> Deref for MapHandle<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.0
    }
}

impl<M: MapSurface> DerefMut for MapHandle<M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut self.0
    }
}

impl<M: MapSurface> Drop for MapHandle<M> {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Owned chart widget, destroyed when dropped.
pub struct ChartHandle<C: ChartSurface>(C);

impl<C: ChartSurface> ChartHandle<C> {
    pub fn new(chart: C) -> Self {
        Self(chart)
    }
}

impl<C: ChartSurface> Deref for ChartHandle<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C: ChartSurface> DerefMut for ChartHandle<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.0
    }
}

impl<C: ChartSurface> Drop for ChartHandle<C> {
    fn drop(&mut self) {
        self.0.destroy();
    }
}
