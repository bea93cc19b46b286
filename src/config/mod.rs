//! Configuration file support for polyscribe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/polyscribe/config.toml`. Settings include the stroke style,
//! polyline limits, canvas size, performance tuning, UI preferences, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::{ColorSpec, StatusPosition};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, HelpOverlayStyle, PerformanceConfig, PolylineConfig,
    StatusBarStyle, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used under the user's config directory.
const CONFIG_DIR_NAME: &str = "polyscribe";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "red"
/// stroke_thickness = 2.0
///
/// [polyline]
/// max_points = 10
///
/// [canvas]
/// width = 400
/// height = 400
/// background_color = "white"
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub drawing: DrawingConfig,

    #[serde(default)]
    pub polyline: PolylineConfig,

    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 20.0
    /// - `max_points`: 2 - 1000
    /// - `canvas.width` / `canvas.height`: 100 - 8192
    /// - `buffer_count`: 2 - 4
    /// - UI RGBA components: 0.0 - 1.0
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_thickness) {
            warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_thickness
            );
            self.drawing.stroke_thickness = if self.drawing.stroke_thickness.is_nan() {
                1.0
            } else {
                self.drawing.stroke_thickness.clamp(1.0, 20.0)
            };
        }

        if !(2..=1000).contains(&self.polyline.max_points) {
            warn!(
                "Invalid max_points {}, clamping to 2-1000 range",
                self.polyline.max_points
            );
            self.polyline.max_points = self.polyline.max_points.clamp(2, 1000);
        }

        if !(100..=8192).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 100-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(100, 8192);
        }

        if !(100..=8192).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 100-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(100, 8192);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        let style = &mut self.ui.status_bar_style;
        clamp_rgba("status_bar_style.bg_color", &mut style.bg_color);
        clamp_rgba("status_bar_style.text_color", &mut style.text_color);

        let help = &mut self.ui.help_overlay_style;
        clamp_rgba("help_overlay_style.bg_color", &mut help.bg_color);
        clamp_rgba("help_overlay_style.border_color", &mut help.border_color);
        clamp_rgba("help_overlay_style.text_color", &mut help.text_color);
    }

    /// Builds the keybinding lookup map, falling back to the default bindings
    /// when the configured ones are invalid.
    pub fn action_map(&self) -> HashMap<KeyBinding, Action> {
        match self.keybindings.build_action_map() {
            Ok(map) => map,
            Err(err) => {
                warn!("Invalid keybindings ({}), using defaults", err);
                KeybindingsConfig::default()
                    .build_action_map()
                    .unwrap_or_default()
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/polyscribe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration TOML without validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_rgba(name: &str, color: &mut [f64; 4]) {
    for (i, component) in color.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(component) {
            warn!(
                "Invalid {}[{}] = {:.3}, clamping to 0.0-1.0",
                name, i, component
            );
            *component = component.clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.polyline.max_points, 10);
        assert_eq!(config.polyline.max_shapes, 0);
        assert_eq!(config.canvas.width, 400);
        assert_eq!(config.canvas.height, 400);
        assert_eq!(config.drawing.stroke_thickness, 2.0);
        assert_eq!(config.keybindings.commit, vec!["Return"]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [polyline]
            max_points = 4

            [ui]
            status_bar_position = "top-right"
            "#,
        )
        .unwrap();
        assert_eq!(config.polyline.max_points, 4);
        assert_eq!(config.ui.status_bar_position, StatusPosition::TopRight);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.performance.buffer_count, 3);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.drawing.stroke_thickness = 50.0;
        config.polyline.max_points = 1;
        config.canvas.width = 10;
        config.canvas.height = 100_000;
        config.performance.buffer_count = 9;
        config.ui.status_bar_style.bg_color = [1.5, -0.5, 0.5, 1.0];

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_thickness, 20.0);
        assert_eq!(config.polyline.max_points, 2);
        assert_eq!(config.canvas.width, 100);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.performance.buffer_count, 4);
        assert_eq!(config.ui.status_bar_style.bg_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[polyline\nmax_points = ").is_err());
        assert!(Config::from_toml_str("[polyline]\nmax_points = \"ten\"").is_err());
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\nstroke_thickness = 0.1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.stroke_thickness, 1.0);

        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn action_map_falls_back_on_duplicates() {
        let mut config = Config::default();
        config.keybindings.cancel = vec!["Return".to_string()];

        let map = config.action_map();
        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Cancel));
    }

    #[test]
    fn json_schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("max_points"));
        assert!(schema.contains("keybindings"));
    }
}
