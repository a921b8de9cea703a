//! Fixed drawing constants (all in canvas pixels)

pub const STROKE: &str = "black";
pub const STROKE_WIDTH: f64 = 2.0;
pub const DASH_PATTERN: &str = "4,4";
/// Written for solid strokes; a zero-length dash draws a continuous line.
pub const SOLID_PATTERN: &str = "0";

pub const LABEL_FILL: &str = "black";
pub const LABEL_FONT_SIZE: &str = "12px";
pub const LABEL_FONT_FAMILY: &str = "Arial";
pub const LABEL_DX: f64 = 5.0;
pub const LABEL_DY: f64 = -5.0;

/// Shading steps per face role
pub const SIDE_DARKEN: f64 = 1.2;
pub const SIDE_BRIGHTEN: f64 = 1.2;
pub const TOP_BRIGHTEN: f64 = 0.6;

pub const HIDDEN_OPACITY: f64 = 1.0;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
