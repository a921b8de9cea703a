//! SVG rendering for cube diagrams
//!
//! This module is organized into submodules:
//! - `defaults`: fixed stroke, dash and label constants
//! - `types`: projection, cube style and face records
//! - `scale`: fitting cube volumes to the viewport
//! - `geometry`: the eight skewed vertices of a cube and its face outlines
//! - `faces`: turning faces and labels into canvas elements
//! - `canvas`: element records and SVG serialization

pub mod canvas;
pub mod defaults;
pub mod faces;
pub mod geometry;
pub mod scale;
pub mod types;

pub use canvas::Canvas;
pub use geometry::{CubeSpec, CubeVertices, Vertex};
pub use scale::CubeScale;
pub use types::*;

use glam::dvec2;

use crate::config::DiagramConfig;
use crate::errors::RenderError;
use crate::types::Point;
use faces::{cube_faces, draw_face, draw_labels};

/// Draw one cube: visible faces, then its hidden back face and edges.
///
/// Returns the computed vertices so callers can label them.
pub fn draw_cube(canvas: &mut Canvas, cube: &CubeSpec, style: &CubeStyle) -> CubeVertices {
    let vertices = cube.vertices();
    if cube.size <= 0.0 {
        crate::log::warn!(size = cube.size, "degenerate cube edge");
    }
    crate::log::debug!(
        anchor_x = cube.anchor.x,
        anchor_y = cube.anchor.y,
        size = cube.size,
        "draw cube"
    );
    for face in cube_faces(&vertices, style) {
        draw_face(canvas, &face);
    }
    vertices
}

/// Anchor shared by every cube of a diagram: horizontally centered, pushed
/// down in proportion to the outer cube so the skewed drawing stays on
/// screen.
pub fn diagram_anchor(config: &DiagramConfig, outer: f64) -> Point {
    let center = config.viewport.center();
    dvec2(center.x, center.y + outer * config.anchor_lift)
}

/// Clear the canvas and draw a whole diagram onto it.
pub fn draw_diagram(canvas: &mut Canvas, config: &DiagramConfig) -> Result<CubeScale, RenderError> {
    config.validate()?;

    let scale = CubeScale::fit(&config.volumes(), config.viewport, config.fraction);
    if !scale.factor.is_finite() {
        return Err(RenderError::InvalidScale {
            value: scale.factor,
        });
    }

    canvas.clear();
    let anchor = diagram_anchor(config, scale.outer());

    let mut outer_vertices = None;
    for (layer, &size) in config.cubes.iter().zip(&scale.scaled) {
        let cube = CubeSpec::new(anchor, size, config.projection);
        let vertices = draw_cube(canvas, &cube, &layer.style);
        if outer_vertices.is_none() {
            outer_vertices = Some(vertices);
        }
    }

    if config.labels {
        if let Some(vertices) = outer_vertices {
            draw_labels(canvas, vertices.iter().map(|(v, p)| (v.name(), p)));
        }
    }

    crate::log::debug!(elements = canvas.len(), "diagram drawn");
    Ok(scale)
}
