//! # Route View
//!
//! Binds one route payload to a map widget and an optional elevation chart.
//!
//! ## Lifecycle
//!
//! - `mount` renders the route for a freshly attached element
//! - `update` refreshes layout when the payload is unchanged, otherwise
//!   discards both widgets and renders again
//! - `destroy` releases both widgets; dropping the view does the same
//!
//! A malformed payload is logged and nothing is rendered. An empty route is a
//! no-op.
//!
//! ## Hover sync
//!
//! Chart hover moves a position marker on the map to the hovered sample.
//! Map hover highlights the nearest sample on the chart.

mod options;
mod surface;

pub use options::{
    ChartLabels, ControlPosition, LineStyle, PositionMarkerStyle, TileLayer, ViewOptions,
};
pub use surface::{
    ChartHandle, ChartSurface, MapHandle, MapInit, MapSurface, MarkerKind, WidgetFactory,
};

use log::{debug, error, info};

use crate::error::Result;
use crate::geo_utils::{compute_bounds, line_geometry};
use crate::payload::parse_route;
use crate::profile::ElevationProfile;
use crate::spatial::SampleIndex;
use crate::GeoSample;

/// What a render request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Widgets were created for the route
    Rendered,
    /// The route had no points; nothing is shown
    Empty,
    /// Payload unchanged; the existing map was resized
    Refreshed,
}

/// Route data derived for the current rendering cycle.
struct RenderedRoute {
    payload: String,
    samples: Vec<GeoSample>,
    profile: ElevationProfile,
    index: SampleIndex,
}

/// Map and chart view for one route element.
///
/// Owns its widgets; nothing is shared between views.
pub struct RouteView<F: WidgetFactory> {
    factory: F,
    options: ViewOptions,
    map: Option<MapHandle<F::Map>>,
    chart: Option<ChartHandle<F::Chart>>,
    route: Option<RenderedRoute>,
}

impl<F: WidgetFactory> RouteView<F> {
    pub fn new(factory: F, options: ViewOptions) -> Self {
        Self {
            factory,
            options,
            map: None,
            chart: None,
            route: None,
        }
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn is_rendered(&self) -> bool {
        self.map.is_some()
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    /// Profile of the currently rendered route.
    pub fn profile(&self) -> Option<&ElevationProfile> {
        self.route.as_ref().map(|r| &r.profile)
    }

    /// Render the route for a newly attached element.
    pub fn mount(&mut self, payload: &str) -> Result<RenderOutcome> {
        self.render(payload)
    }

    /// Re-render after the element was patched.
    pub fn update(&mut self, payload: &str) -> Result<RenderOutcome> {
        let unchanged = self
            .route
            .as_ref()
            .is_some_and(|r| r.payload == payload);

        if unchanged {
            if let Some(map) = self.map.as_mut() {
                map.invalidate_size();
                return Ok(RenderOutcome::Refreshed);
            }
        }

        self.render(payload)
    }

    /// Release both widgets. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.map.is_some() || self.chart.is_some() {
            debug!("[RouteView] Releasing widgets");
        }
        self.map = None;
        self.chart = None;
        self.route = None;
    }

    /// Chart hover: move the map position marker to the hovered sample, or
    /// hide it when `index` is `None` or out of range.
    pub fn chart_hover(&mut self, index: Option<usize>) {
        let (Some(map), Some(route)) = (self.map.as_mut(), self.route.as_ref()) else {
            return;
        };

        let position = index
            .and_then(|i| route.profile.point_at(i))
            .and_then(|p| route.samples.get(p.source_index));
        map.show_position(position);
    }

    /// Map hover: highlight the nearest profile sample on the chart.
    ///
    /// Returns the highlighted index.
    pub fn map_hover(&mut self, latitude: f64, longitude: f64) -> Option<usize> {
        let route = self.route.as_ref()?;
        let idx = route.index.nearest(latitude, longitude)?;

        if let Some(chart) = self.chart.as_mut() {
            chart.highlight(Some(idx));
        }
        if let Some(map) = self.map.as_mut() {
            map.show_position(route.samples.get(idx));
        }
        Some(idx)
    }

    fn render(&mut self, payload: &str) -> Result<RenderOutcome> {
        self.destroy();

        let samples = match parse_route(payload) {
            Ok(samples) => samples,
            Err(e) => {
                error!("[RouteView] Route parse error: {}", e);
                return Err(e);
            }
        };

        let Some(bounds) = compute_bounds(&samples) else {
            debug!("[RouteView] Empty route, nothing to render");
            return Ok(RenderOutcome::Empty);
        };

        let opts = &self.options;
        let mut map = MapHandle::new(self.factory.create_map(&MapInit {
            center: samples[0],
            zoom: opts.initial_zoom,
            base_layer: opts.base_layer(),
            scroll_wheel_zoom: opts.scroll_wheel_zoom(),
            dragging: true,
        }));

        if opts.expanded {
            map.add_layer_switcher(&TileLayer::presets());
            map.add_zoom_control(opts.zoom_control_position);
            map.add_scale_control();
        }

        map.draw_route(&line_geometry(&samples), &opts.line_style());
        map.fit_bounds(&bounds, opts.fit_padding_px());

        let profile = ElevationProfile::from_samples(&samples);

        let mut chart = None;
        if opts.expanded {
            let first = &samples[0];
            let last = &samples[samples.len() - 1];
            map.add_marker(MarkerKind::Start, first);
            map.add_marker(MarkerKind::Finish, last);

            if let Some(surface) = self.factory.create_chart() {
                let mut handle = ChartHandle::new(surface);
                handle.render(&profile, &opts.chart_labels);
                map.add_position_marker(&opts.position_marker);
                map.show_position(None);
                chart = Some(handle);
            } else {
                debug!("[RouteView] No chart canvas, map only");
            }
        }

        info!(
            "[RouteView] Rendered {} points ({:.2} km, chart: {})",
            samples.len(),
            profile.total_distance_km,
            chart.is_some()
        );

        self.map = Some(map);
        self.chart = chart;
        self.route = Some(RenderedRoute {
            payload: payload.to_string(),
            index: SampleIndex::build(&samples),
            samples,
            profile,
        });

        Ok(RenderOutcome::Rendered)
    }
}
