//! Face and label drawing

use super::canvas::{Canvas, Polygon, Text};
use super::defaults;
use super::geometry::CubeVertices;
use super::types::{CubeStyle, FaceRole, FaceSpec};
use crate::types::{Color, Point};

/// Append one polygon for a face or edge.
///
/// Stroke-only faces get `fill="none"` whatever their color; unknown color
/// text is written as given.
pub fn draw_face(canvas: &mut Canvas, face: &FaceSpec) {
    let fill = if face.stroke_only {
        Color::None.to_string()
    } else {
        face.color.to_string()
    };
    let dash = if face.dashed {
        defaults::DASH_PATTERN
    } else {
        defaults::SOLID_PATTERN
    };

    canvas.push(Polygon {
        points: face.outline.points().to_vec(),
        fill,
        stroke: defaults::STROKE.to_string(),
        stroke_width: defaults::STROKE_WIDTH,
        stroke_dasharray: dash.to_string(),
        opacity: face.opacity,
    });
}

/// The faces of one cube in paint order: visible faces first, then the
/// dashed back face and connecting edges on top.
pub fn cube_faces(vertices: &CubeVertices, style: &CubeStyle) -> Vec<FaceSpec> {
    let mut visible = vec![
        (FaceRole::Front, style.color.clone()),
        (FaceRole::Right, style.color.darker(defaults::SIDE_DARKEN)),
        (FaceRole::Left, style.color.brighter(defaults::SIDE_BRIGHTEN)),
    ];
    if style.top_face {
        visible.push((FaceRole::Top, style.color.brighter(defaults::TOP_BRIGHTEN)));
    }

    let mut faces: Vec<FaceSpec> = visible
        .into_iter()
        .map(|(role, color)| FaceSpec {
            role,
            outline: vertices.face(role),
            color,
            opacity: style.opacity,
            stroke_only: style.stroke_only,
            dashed: false,
        })
        .collect();

    let hidden = |role, outline| FaceSpec {
        role,
        outline,
        color: Color::None,
        opacity: defaults::HIDDEN_OPACITY,
        stroke_only: true,
        dashed: true,
    };
    faces.push(hidden(FaceRole::Back, vertices.face(FaceRole::Back)));
    faces.extend(
        vertices
            .connectors()
            .into_iter()
            .map(|outline| hidden(FaceRole::Connector, outline)),
    );

    faces
}

/// Write one label per entry, nudged up and to the right of its point.
///
/// Labels are emitted in iteration order.
pub fn draw_labels<'a>(canvas: &mut Canvas, labels: impl IntoIterator<Item = (&'a str, Point)>) {
    for (name, p) in labels {
        canvas.push(Text {
            x: p.x + defaults::LABEL_DX,
            y: p.y + defaults::LABEL_DY,
            fill: defaults::LABEL_FILL.to_string(),
            font_size: defaults::LABEL_FONT_SIZE.to_string(),
            font_family: defaults::LABEL_FONT_FAMILY.to_string(),
            content: name.to_string(),
        });
    }
}
