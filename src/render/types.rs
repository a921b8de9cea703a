//! Core types for cube rendering

use std::f64::consts::PI;

use crate::types::{Color, Point};

/// Shift of the back face relative to the front face, as fractions of the
/// edge length.
///
/// The back face moves left by `dx_ratio * size` and up by
/// `dy_ratio * size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackOffset {
    pub dx_ratio: f64,
    pub dy_ratio: f64,
}

impl BackOffset {
    /// Same shift on both axes
    pub const fn uniform(ratio: f64) -> Self {
        BackOffset {
            dx_ratio: ratio,
            dy_ratio: ratio,
        }
    }

    pub const fn new(dx_ratio: f64, dy_ratio: f64) -> Self {
        BackOffset { dx_ratio, dy_ratio }
    }
}

impl Default for BackOffset {
    fn default() -> Self {
        BackOffset::new(0.25, 0.5)
    }
}

/// The oblique projection shared by every cube in a diagram.
///
/// Angles are only used through their cosines, as horizontal and vertical
/// skew factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub angle_x: f64,
    pub angle_y: f64,
    pub back: BackOffset,
}

impl Projection {
    pub fn with_back(mut self, back: BackOffset) -> Self {
        self.back = back;
        self
    }

    pub fn with_angles(mut self, angle_x: f64, angle_y: f64) -> Self {
        self.angle_x = angle_x;
        self.angle_y = angle_y;
        self
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection {
            angle_x: PI / 5.0,
            angle_y: PI / 5.0,
            back: BackOffset::default(),
        }
    }
}

/// Paint settings for one cube
#[derive(Debug, Clone, PartialEq)]
pub struct CubeStyle {
    pub color: Color,
    pub opacity: f64,
    /// Outline only; visible faces get no fill
    pub stroke_only: bool,
    /// Also draw the top face
    pub top_face: bool,
}

impl CubeStyle {
    pub fn new(color: impl Into<Color>, opacity: f64) -> Self {
        Self {
            color: color.into(),
            opacity,
            stroke_only: false,
            top_face: false,
        }
    }

    pub fn stroke_only(mut self) -> Self {
        self.stroke_only = true;
        self
    }

    pub fn with_top_face(mut self) -> Self {
        self.top_face = true;
        self
    }
}

impl Default for CubeStyle {
    fn default() -> Self {
        CubeStyle::new("red", 1.0)
    }
}

/// Which part of the cube a face or edge stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRole {
    Front,
    Right,
    Left,
    Top,
    /// The occluded rear face
    Back,
    /// One of the four occluded front-to-back edges
    Connector,
}

impl FaceRole {
    pub fn is_hidden(self) -> bool {
        matches!(self, FaceRole::Back | FaceRole::Connector)
    }
}

/// The vertices of a face or connecting edge, in drawing order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Quad([Point; 4]),
    Segment([Point; 2]),
}

impl Outline {
    pub fn points(&self) -> &[Point] {
        match self {
            Outline::Quad(p) => p,
            Outline::Segment(p) => p,
        }
    }
}

/// Everything needed to draw one polygon
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSpec {
    pub role: FaceRole,
    pub outline: Outline,
    pub color: Color,
    pub opacity: f64,
    pub stroke_only: bool,
    pub dashed: bool,
}
