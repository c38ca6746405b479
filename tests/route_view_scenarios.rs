//! End-to-end scenarios: payload in, map and chart calls out.
//!
//! Uses recording widgets in place of the host's map and chart libraries.
//!
//! Run with: `cargo test --test route_view_scenarios -- --nocapture`

use std::cell::RefCell;
use std::rc::Rc;

use geo::LineString;
use route_profile::view::{ChartLabels, ControlPosition, MapInit, MarkerKind, RenderOutcome};
use route_profile::{
    parse_route, Bounds, ChartSurface, ElevationProfile, GeoSample, LineStyle, MapSurface,
    PositionMarkerStyle, ProfileError, RouteView, TileLayer, ViewOptions, WidgetFactory,
};

#[derive(Debug, Default)]
struct Recorded {
    maps_created: usize,
    maps_removed: usize,
    charts_created: usize,
    charts_destroyed: usize,
    route_lines: Vec<LineString<f64>>,
    line_styles: Vec<LineStyle>,
    position_marker: Option<PositionMarkerStyle>,
    markers: Vec<(MarkerKind, GeoSample)>,
    position: Option<GeoSample>,
    chart_series: Vec<(f64, f64)>,
    highlighted: Option<usize>,
}

type Shared = Rc<RefCell<Recorded>>;

struct RecordingMap(Shared);

impl MapSurface for RecordingMap {
    fn add_layer_switcher(&mut self, _layers: &[TileLayer]) {}
    fn add_zoom_control(&mut self, _position: ControlPosition) {}
    fn add_scale_control(&mut self) {}
    fn draw_route(&mut self, line: &LineString<f64>, style: &LineStyle) {
        let mut rec = self.0.borrow_mut();
        rec.route_lines.push(line.clone());
        rec.line_styles.push(style.clone());
    }
    fn fit_bounds(&mut self, _bounds: &Bounds, _padding_px: u32) {}
    fn add_marker(&mut self, kind: MarkerKind, position: &GeoSample) {
        self.0.borrow_mut().markers.push((kind, *position));
    }
    fn add_position_marker(&mut self, style: &PositionMarkerStyle) {
        self.0.borrow_mut().position_marker = Some(style.clone());
    }
    fn show_position(&mut self, position: Option<&GeoSample>) {
        self.0.borrow_mut().position = position.copied();
    }
    fn invalidate_size(&mut self) {}
    fn remove(&mut self) {
        self.0.borrow_mut().maps_removed += 1;
    }
}

struct RecordingChart(Shared);

impl ChartSurface for RecordingChart {
    fn render(&mut self, profile: &ElevationProfile, _labels: &ChartLabels) {
        self.0.borrow_mut().chart_series = profile
            .points
            .iter()
            .map(|p| (p.cumulative_distance_km, p.elevation_meters))
            .collect();
    }
    fn highlight(&mut self, index: Option<usize>) {
        self.0.borrow_mut().highlighted = index;
    }
    fn destroy(&mut self) {
        self.0.borrow_mut().charts_destroyed += 1;
    }
}

struct RecordingFactory(Shared);

impl WidgetFactory for RecordingFactory {
    type Map = RecordingMap;
    type Chart = RecordingChart;

    fn create_map(&mut self, _init: &MapInit) -> RecordingMap {
        self.0.borrow_mut().maps_created += 1;
        RecordingMap(self.0.clone())
    }

    fn create_chart(&mut self) -> Option<RecordingChart> {
        self.0.borrow_mut().charts_created += 1;
        Some(RecordingChart(self.0.clone()))
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn expanded_view() -> (RouteView<RecordingFactory>, Shared) {
    init_logging();
    let shared: Shared = Rc::default();
    let view = RouteView::new(RecordingFactory(shared.clone()), ViewOptions::expanded());
    (view, shared)
}

/// A short climb with a gap in the elevation data.
fn climb_payload() -> String {
    serde_json::json!({
        "name": "Morning climb",
        "coordinates": [
            [46.0000, 7.0000, 500.0],
            [46.0010, 7.0010, 520.0],
            [46.0020, 7.0020, null],
            [46.0030, 7.0030, 560.0],
            [46.0040, 7.0040],
            [46.0050, 7.0050, 540.0]
        ]
    })
    .to_string()
}

#[test]
fn test_expanded_view_full_cycle() {
    let (mut view, shared) = expanded_view();

    assert_eq!(view.mount(&climb_payload()).unwrap(), RenderOutcome::Rendered);
    {
        let rec = shared.borrow();
        assert_eq!(rec.maps_created, 1);
        assert_eq!(rec.charts_created, 1);
        assert_eq!(rec.route_lines[0].0.len(), 6);
        assert_eq!(rec.markers.len(), 2);
        assert_eq!(rec.markers[0].0, MarkerKind::Start);
        assert_eq!(rec.markers[1].1.latitude, 46.0050);
        assert!(rec.position.is_none());
        assert_eq!(rec.line_styles[0].line_join, "round");
        assert_eq!(rec.position_marker, Some(PositionMarkerStyle::default()));

        let elevations: Vec<f64> = rec.chart_series.iter().map(|(_, y)| *y).collect();
        assert_eq!(elevations, vec![500.0, 520.0, 0.0, 560.0, 0.0, 540.0]);
        assert_eq!(rec.chart_series[0].0, 0.0);
        for w in rec.chart_series.windows(2) {
            assert!(w[1].0 > w[0].0);
        }
    }

    view.chart_hover(Some(3));
    assert_eq!(shared.borrow().position.unwrap().latitude, 46.0030);

    assert_eq!(view.map_hover(46.0011, 7.0009), Some(1));
    assert_eq!(shared.borrow().highlighted, Some(1));

    assert_eq!(view.map_hover(f64::NAN, 0.0), None);
    assert_eq!(shared.borrow().highlighted, Some(1));
    assert_eq!(shared.borrow().position.unwrap().latitude, 46.0010);

    view.destroy();
    let rec = shared.borrow();
    assert_eq!(rec.maps_removed, 1);
    assert_eq!(rec.charts_destroyed, 1);
}

#[test]
fn test_rerender_releases_previous_widgets() {
    let (mut view, shared) = expanded_view();

    view.mount(&climb_payload()).unwrap();
    view.update("[[10.0,10.0,1],[10.0,10.01,2]]").unwrap();
    view.update("[[10.0,10.0,1],[10.0,10.01,2]]").unwrap();

    let rec = shared.borrow();
    assert_eq!(rec.maps_created, 2);
    assert_eq!(rec.maps_removed, 1);
    assert_eq!(rec.charts_destroyed, 1);
    assert_eq!(rec.chart_series.len(), 2);
}

#[test]
fn test_bad_update_clears_previous_route() {
    let (mut view, shared) = expanded_view();

    view.mount(&climb_payload()).unwrap();
    let err = view.update("{not json").unwrap_err();
    assert!(matches!(err, ProfileError::Parse { .. }));

    assert!(!view.is_rendered());
    let rec = shared.borrow();
    assert_eq!(rec.maps_created, 1);
    assert_eq!(rec.maps_removed, 1);
}

#[test]
fn test_profile_from_payload_matches_view() {
    let (mut view, _shared) = expanded_view();
    view.mount(&climb_payload()).unwrap();

    let samples = parse_route(&climb_payload()).unwrap();
    let expected = ElevationProfile::from_samples(&samples);
    assert_eq!(view.profile(), Some(&expected));
    assert_eq!(expected.ascent_meters, 20.0 + 560.0 + 540.0);
    assert_eq!(expected.max_elevation, 560.0);
    assert_eq!(expected.min_elevation, 0.0);
}
