//! Presentation options for the route map and elevation chart.

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// A base map tile layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    /// Name shown in the layer switcher
    pub name: String,
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn standard() -> Self {
        Self {
            name: "Standard".to_string(),
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap".to_string(),
        }
    }

    pub fn terrain() -> Self {
        Self {
            name: "Terrain".to_string(),
            url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; OpenTopoMap (CC-BY-SA)".to_string(),
        }
    }

    pub fn satellite() -> Self {
        Self {
            name: "Satellite".to_string(),
            url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".to_string(),
            attribution: "Tiles &copy; Esri".to_string(),
        }
    }

    /// Layers offered by the switcher, in display order.
    pub fn presets() -> Vec<TileLayer> {
        vec![Self::standard(), Self::terrain(), Self::satellite()]
    }
}

/// Stroke style of the route polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    /// Corner shape where segments meet, e.g. "round"
    pub line_join: String,
}

/// Style of the hover position marker drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionMarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub border_color: String,
    pub border_weight: f64,
}

impl Default for PositionMarkerStyle {
    fn default() -> Self {
        Self {
            radius: 8.0,
            fill_color: "#2563eb".to_string(),
            border_color: "#fff".to_string(),
            border_weight: 3.0,
        }
    }
}

/// Where a map control is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Axis and tooltip text for the elevation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            x_axis_title: "Distance (km)".to_string(),
            y_axis_title: "Elevation (m)".to_string(),
        }
    }
}

impl ChartLabels {
    /// Tooltip title for a hovered distance, e.g. `"12.3km"`.
    pub fn tooltip_title(&self, distance_km: f64) -> String {
        format!("{:.1}km", distance_km)
    }

    /// Tooltip body for a hovered elevation, rounded half up, e.g. `"415m"`.
    pub fn tooltip_label(&self, elevation_meters: f64) -> String {
        format!("{}m", (elevation_meters + 0.5).floor() as i64)
    }
}

/// Configuration for one route view.
///
/// All fields have defaults, so a partial JSON object is enough:
/// ```
/// use route_profile::ViewOptions;
/// let opts = ViewOptions::from_json(r#"{"expanded": true}"#).unwrap();
/// assert!(opts.expanded);
/// assert_eq!(opts.initial_zoom, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Lightbox rendering: layer switcher, markers and elevation chart.
    /// Default: false (inline thumbnail map)
    pub expanded: bool,

    /// Zoom level before the map is fitted to the route.
    /// Default: 13
    pub initial_zoom: u8,

    /// Route line color. Default: "#2563eb"
    pub line_color: String,

    /// Route line opacity. Default: 0.8
    pub line_opacity: f64,

    /// Route line join. Default: "round"
    pub line_join: String,

    /// Line weight in pixels (inline / expanded). Default: 3 / 4
    pub inline_line_weight: f64,
    pub expanded_line_weight: f64,

    /// Padding around the route when fitting bounds (inline / expanded).
    /// Default: 20 / 50 pixels
    pub inline_padding_px: u32,
    pub expanded_padding_px: u32,

    /// Zoom control anchor in the expanded view. Default: top right
    pub zoom_control_position: ControlPosition,

    pub position_marker: PositionMarkerStyle,

    pub chart_labels: ChartLabels,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            expanded: false,
            initial_zoom: 13,
            line_color: "#2563eb".to_string(),
            line_opacity: 0.8,
            line_join: "round".to_string(),
            inline_line_weight: 3.0,
            expanded_line_weight: 4.0,
            inline_padding_px: 20,
            expanded_padding_px: 50,
            zoom_control_position: ControlPosition::TopRight,
            position_marker: PositionMarkerStyle::default(),
            chart_labels: ChartLabels::default(),
        }
    }
}

impl ViewOptions {
    /// Default options for the expanded (lightbox) view.
    pub fn expanded() -> Self {
        Self {
            expanded: true,
            ..Self::default()
        }
    }

    /// Parse options from a JSON object; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProfileError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Base layer shown when the map is created.
    pub fn base_layer(&self) -> TileLayer {
        if self.expanded {
            TileLayer::terrain()
        } else {
            TileLayer::standard()
        }
    }

    pub fn line_style(&self) -> LineStyle {
        LineStyle {
            color: self.line_color.clone(),
            weight: if self.expanded {
                self.expanded_line_weight
            } else {
                self.inline_line_weight
            },
            opacity: self.line_opacity,
            line_join: self.line_join.clone(),
        }
    }

    pub fn fit_padding_px(&self) -> u32 {
        if self.expanded {
            self.expanded_padding_px
        } else {
            self.inline_padding_px
        }
    }

    /// Scroll-wheel zoom is only enabled in the expanded view.
    pub fn scroll_wheel_zoom(&self) -> bool {
        self.expanded
    }
}
