//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke settings applied to every new polyline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_thickness: default_stroke_thickness(),
        }
    }
}

/// Polyline editing limits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PolylineConfig {
    /// Maximum number of committed points per polyline (valid range: 2 - 1000).
    /// Clicks beyond this limit are ignored until the line is committed or cancelled.
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Maximum number of finished polylines kept on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for PolylineConfig {
    fn default() -> Self {
        Self {
            max_points: default_max_points(),
            max_shapes: 0,
        }
    }
}

/// Canvas window settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial window width in pixels (valid range: 100 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Initial window height in pixels (valid range: 100 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Canvas background color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background_color: default_background_color(),
        }
    }
}

/// Performance tuning options.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shm buffers (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar displaying editor state, point count, and stroke
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar screen position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Mark committed vertices of the polyline being drawn
    #[serde(default = "default_show_vertices")]
    pub show_vertices: bool,

    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            show_vertices: default_show_vertices(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color indicator dot radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_stroke_thickness() -> f64 {
    2.0
}

fn default_max_points() -> usize {
    10
}

fn default_canvas_width() -> u32 {
    400
}

fn default_canvas_height() -> u32 {
    400
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

fn default_show_vertices() -> bool {
    true
}

fn default_status_font_size() -> f64 {
    14.0
}

fn default_status_padding() -> f64 {
    10.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_status_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    4.0
}

fn default_help_font_size() -> f64 {
    13.0
}

fn default_help_line_height() -> f64 {
    18.0
}

fn default_help_padding() -> f64 {
    14.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
