//! Host-provided widget configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Mark text size used when the host does not provide one, in pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 48.0;

/// Grid stroke width per unit of display density.
pub const GRID_STROKE_PER_DENSITY: f64 = 3.0;

/// Default width of the win line, in pixels.
pub const DEFAULT_WIN_LINE_WIDTH: f64 = 5.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    /// Soft amber fill behind the touched cell.
    pub const fn highlight() -> Self {
        Self::new(255, 224, 130, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

fn default_highlight_color() -> SerializableColor {
    SerializableColor::highlight()
}

fn default_win_line_color() -> SerializableColor {
    SerializableColor::red()
}

fn default_win_line_width() -> f64 {
    DEFAULT_WIN_LINE_WIDTH
}

fn default_density() -> f64 {
    1.0
}

/// Visual configuration for the board widget.
///
/// `stroke_color` and `text_size` are optional; unset values fall back to
/// black and [`DEFAULT_TEXT_SIZE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Grid line and mark color.
    #[serde(default)]
    pub stroke_color: Option<SerializableColor>,
    /// Mark glyph size in pixels.
    #[serde(default)]
    pub text_size: Option<f64>,
    /// Fill behind the touched cell.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: SerializableColor,
    /// Win line color.
    #[serde(default = "default_win_line_color")]
    pub win_line_color: SerializableColor,
    /// Win line stroke width in pixels.
    #[serde(default = "default_win_line_width")]
    pub win_line_width: f64,
    /// Device pixel ratio; scales the grid stroke.
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            stroke_color: None,
            text_size: None,
            highlight_color: default_highlight_color(),
            win_line_color: default_win_line_color(),
            win_line_width: default_win_line_width(),
            density: default_density(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject sizes that cannot be drawn.
    pub fn validate(&self) -> ConfigResult<()> {
        check_positive("text_size", self.text_size.unwrap_or(DEFAULT_TEXT_SIZE))?;
        check_positive("win_line_width", self.win_line_width)?;
        check_positive("density", self.density)?;
        Ok(())
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Grid/mark color, black if unset.
    pub fn stroke(&self) -> Color {
        self.stroke_color.unwrap_or(SerializableColor::black()).into()
    }

    /// Mark text size, [`DEFAULT_TEXT_SIZE`] if unset.
    pub fn mark_text_size(&self) -> f64 {
        self.text_size.unwrap_or(DEFAULT_TEXT_SIZE)
    }

    pub fn highlight(&self) -> Color {
        self.highlight_color.into()
    }

    pub fn win_line(&self) -> Color {
        self.win_line_color.into()
    }

    /// Grid stroke width scaled by density.
    pub fn grid_stroke_width(&self) -> f64 {
        GRID_STROKE_PER_DENSITY * self.density
    }
}

fn check_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(SerializableColor::from(config.stroke()), SerializableColor::black());
        assert!((config.mark_text_size() - DEFAULT_TEXT_SIZE).abs() < f64::EPSILON);
        assert!((config.grid_stroke_width() - 3.0).abs() < f64::EPSILON);
        assert!((config.win_line_width - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = WidgetConfig::from_json(
            r#"{ "stroke_color": { "r": 10, "g": 20, "b": 30, "a": 255 }, "density": 2.0 }"#,
        )
        .unwrap();
        assert_eq!(config.stroke_color, Some(SerializableColor::new(10, 20, 30, 255)));
        assert!((config.grid_stroke_width() - 6.0).abs() < f64::EPSILON);
        assert_eq!(config.text_size, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = WidgetConfig::from_json(r#"{ "text_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "text_size", .. }));

        let err = WidgetConfig::from_json(r#"{ "density": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "density", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = WidgetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = WidgetConfig::default().with_text_size(64.0);
        file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

        let loaded = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WidgetConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
