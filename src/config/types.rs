//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tool selection settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Name of the tool created at startup (currently only "line")
    #[serde(default = "default_tool_name")]
    pub default_tool: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool_name(),
        }
    }
}

/// Line appearance settings.
///
/// `point_radius` is the visual radius of the interaction circles; pointer
/// hit-testing uses twice this value.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Stroke width of the polyline in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Radius of vertex/midpoint circles in pixels (valid range: 1.0 - 30.0)
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            point_radius: default_point_radius(),
        }
    }
}

/// Colors used when rendering the line and its editing widgets.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColorsConfig {
    /// Stroke color of the polyline
    #[serde(default = "default_line_color")]
    pub line: ColorSpec,

    /// Fill of vertex circles
    #[serde(default = "default_vertex_color")]
    pub vertex: ColorSpec,

    /// Fill of midpoint circles
    #[serde(default = "default_midpoint_color")]
    pub midpoint: ColorSpec,

    /// Fill of the currently selected point
    #[serde(default = "default_selected_color")]
    pub selected: ColorSpec,

    /// Fill of the pointer marker shown while drawing
    #[serde(default = "default_preview_color")]
    pub preview: ColorSpec,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            line: default_line_color(),
            vertex: default_vertex_color(),
            midpoint: default_midpoint_color(),
            selected: default_selected_color(),
            preview: default_preview_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool_name() -> String {
    "line".to_string()
}

fn default_line_width() -> f64 {
    2.0
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_vertex_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_midpoint_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_selected_color() -> ColorSpec {
    ColorSpec::Name("yellow".to_string())
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}
