//! Cube geometry: the eight skewed vertices of a cube and the outlines
//! of its faces

use glam::dvec2;

use super::types::{FaceRole, Outline, Projection};
use crate::types::Point;

/// Named cube corners.
///
/// Declaration order is the canonical order used for iteration and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    FrontTopLeft,
    FrontTopRight,
    FrontBottomLeft,
    FrontBottomRight,
    BackTopLeft,
    BackTopRight,
    BackBottomLeft,
    BackBottomRight,
}

impl Vertex {
    pub const ALL: [Vertex; 8] = [
        Vertex::FrontTopLeft,
        Vertex::FrontTopRight,
        Vertex::FrontBottomLeft,
        Vertex::FrontBottomRight,
        Vertex::BackTopLeft,
        Vertex::BackTopRight,
        Vertex::BackBottomLeft,
        Vertex::BackBottomRight,
    ];

    /// Label text
    pub fn name(self) -> &'static str {
        match self {
            Vertex::FrontTopLeft => "frontTopLeft",
            Vertex::FrontTopRight => "frontTopRight",
            Vertex::FrontBottomLeft => "frontBottomLeft",
            Vertex::FrontBottomRight => "frontBottomRight",
            Vertex::BackTopLeft => "backTopLeft",
            Vertex::BackTopRight => "backTopRight",
            Vertex::BackBottomLeft => "backBottomLeft",
            Vertex::BackBottomRight => "backBottomRight",
        }
    }

    /// The back corner a front corner connects to (and vice versa)
    pub fn opposite(self) -> Vertex {
        match self {
            Vertex::FrontTopLeft => Vertex::BackTopLeft,
            Vertex::FrontTopRight => Vertex::BackTopRight,
            Vertex::FrontBottomLeft => Vertex::BackBottomLeft,
            Vertex::FrontBottomRight => Vertex::BackBottomRight,
            Vertex::BackTopLeft => Vertex::FrontTopLeft,
            Vertex::BackTopRight => Vertex::FrontTopRight,
            Vertex::BackBottomLeft => Vertex::FrontBottomLeft,
            Vertex::BackBottomRight => Vertex::FrontBottomRight,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A cube to be projected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSpec {
    /// Anchor point; the front face sits above and around it
    pub anchor: Point,
    /// Edge length in pixels
    pub size: f64,
    pub projection: Projection,
}

impl CubeSpec {
    pub fn new(anchor: Point, size: f64, projection: Projection) -> Self {
        Self {
            anchor,
            size,
            projection,
        }
    }

    /// Compute the eight corners.
    ///
    /// Pure: the same cube always yields bit-identical vertices. Negative or
    /// zero sizes give inverted or collapsed geometry.
    pub fn vertices(&self) -> CubeVertices {
        let Self {
            anchor,
            size,
            projection,
        } = *self;
        let dx = size * projection.angle_x.cos();
        let dy = size * projection.angle_y.cos();
        let kx = size * projection.back.dx_ratio;
        let ky = size * projection.back.dy_ratio;

        let top = anchor.y - dy - size;
        let bottom = anchor.y - dy;
        let left = anchor.x - dx;
        let right = anchor.x + dx;

        CubeVertices {
            points: [
                dvec2(left, top),
                dvec2(right, top),
                dvec2(left, bottom),
                dvec2(right, bottom),
                dvec2(left - kx, top - ky),
                dvec2(right - kx, top - ky),
                dvec2(left - kx, bottom - ky),
                dvec2(right - kx, bottom - ky),
            ],
        }
    }
}

/// The eight projected corners of one cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeVertices {
    points: [Point; 8],
}

impl CubeVertices {
    pub fn get(&self, v: Vertex) -> Point {
        self.points[v.index()]
    }

    /// Corners in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Point)> + '_ {
        Vertex::ALL.iter().map(move |&v| (v, self.get(v)))
    }

    fn quad(&self, vs: [Vertex; 4]) -> Outline {
        Outline::Quad(vs.map(|v| self.get(v)))
    }

    /// Outline of a face, traced around its boundary.
    ///
    /// For `FaceRole::Connector` use [`CubeVertices::connectors`].
    pub fn face(&self, role: FaceRole) -> Outline {
        use Vertex::*;
        match role {
            FaceRole::Front => self.quad([FrontTopLeft, FrontTopRight, FrontBottomRight, FrontBottomLeft]),
            FaceRole::Right => self.quad([FrontTopRight, BackTopRight, BackBottomRight, FrontBottomRight]),
            FaceRole::Left => self.quad([FrontTopLeft, BackTopLeft, BackBottomLeft, FrontBottomLeft]),
            FaceRole::Top => self.quad([FrontTopLeft, FrontTopRight, BackTopRight, BackTopLeft]),
            FaceRole::Back => self.quad([BackTopLeft, BackTopRight, BackBottomRight, BackBottomLeft]),
            FaceRole::Connector => Outline::Segment([self.get(FrontTopLeft), self.get(BackTopLeft)]),
        }
    }

    /// The four front-to-back edges, in the order they are drawn
    pub fn connectors(&self) -> [Outline; 4] {
        use Vertex::*;
        [FrontTopLeft, FrontTopRight, FrontBottomLeft, FrontBottomRight]
            .map(|v| Outline::Segment([self.get(v), self.get(v.opposite())]))
    }
}
