//! Isometric cube diagrams rendered to SVG.
//!
//! A diagram is a set of nested cubes whose edges are the cube roots of
//! nominal volumes, fitted into a share of the viewport and drawn with an
//! oblique skew: shaded visible faces, then a dashed back face and dashed
//! connecting edges on top.
//!
//! ```
//! let svg = isocube::render(&isocube::DiagramConfig::single_cube()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use config::{CubeLayer, DiagramConfig};
pub use errors::RenderError;
pub use render::{BackOffset, Canvas, CubeStyle, Projection};
pub use types::{Color, Viewport};

/// Render a diagram to an SVG document.
///
/// Returns the SVG string on success, or a diagnostic naming the input that
/// could not be drawn.
pub fn render(config: &DiagramConfig) -> Result<String, miette::Report> {
    let mut canvas = Canvas::new(config.viewport);
    render::draw_diagram(&mut canvas, config)?;
    Ok(canvas.to_svg())
}
