//! Diagram configuration and presets

use crate::errors::RenderError;
use crate::render::types::{BackOffset, CubeStyle, Projection};
use crate::types::{Viewport, check_finite};

/// One cube of a nested diagram
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLayer {
    /// Nominal volume in cubic units
    pub volume: f64,
    pub style: CubeStyle,
}

impl CubeLayer {
    pub fn new(volume: f64, style: CubeStyle) -> Self {
        Self { volume, style }
    }

    /// A layer whose volume is `edge³`
    pub fn with_edge(edge: f64, style: CubeStyle) -> Self {
        Self::new(edge.powi(3), style)
    }
}

/// Everything a render needs.
///
/// The first cube is the outer one: it is fitted to the viewport and every
/// other cube keeps its size ratio to it. All cubes share one anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    pub viewport: Viewport,
    /// Share of the smaller viewport dimension spanned by the outer edge
    pub fraction: f64,
    pub projection: Projection,
    /// Anchor sits this many outer edges below the viewport center
    pub anchor_lift: f64,
    pub cubes: Vec<CubeLayer>,
    /// Label the outer cube's corners
    pub labels: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::single_cube()
    }
}

impl DiagramConfig {
    /// One 100³ wireframe cube
    pub fn single_cube() -> Self {
        Self {
            viewport: Viewport::default(),
            fraction: 0.5,
            projection: Projection::default(),
            anchor_lift: 1.0 / 0.75,
            cubes: vec![CubeLayer::with_edge(
                100.0,
                CubeStyle::new("red", 0.9).stroke_only(),
            )],
            labels: false,
        }
    }

    /// A 494.7³ wireframe around a solid 10³ cube, corners labelled
    pub fn nested_cubes() -> Self {
        Self {
            viewport: Viewport::default(),
            fraction: 0.5,
            projection: Projection::default().with_back(BackOffset::uniform(0.5)),
            anchor_lift: 1.0 / 0.75,
            cubes: vec![
                CubeLayer::with_edge(494.7, CubeStyle::new("red", 0.9).stroke_only().with_top_face()),
                CubeLayer::with_edge(10.0, CubeStyle::new("red", 1.0).with_top_face()),
            ],
            labels: true,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_cubes(mut self, cubes: Vec<CubeLayer>) -> Self {
        self.cubes = cubes;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.cubes.iter().map(|c| c.volume).collect()
    }

    /// Reject inputs that would print as non-numbers.
    ///
    /// Zero and negative sizes are allowed; they draw degenerate shapes.
    pub fn validate(&self) -> Result<(), RenderError> {
        let Viewport { width, height } = self.viewport;
        Viewport::try_new(width, height)
            .map_err(|reason| RenderError::InvalidViewport { width, height, reason })?;

        let params = [
            ("fraction", self.fraction),
            ("anchor lift", self.anchor_lift),
            ("x angle", self.projection.angle_x),
            ("y angle", self.projection.angle_y),
            ("back x offset", self.projection.back.dx_ratio),
            ("back y offset", self.projection.back.dy_ratio),
        ];
        for (what, value) in params {
            check_finite(value).map_err(|reason| RenderError::InvalidParameter { what, reason })?;
        }

        if self.cubes.is_empty() {
            return Err(RenderError::EmptyDiagram);
        }
        for (index, layer) in self.cubes.iter().enumerate() {
            check_finite(layer.volume).map_err(|reason| RenderError::InvalidVolume { index, reason })?;
            check_finite(layer.style.opacity).map_err(|reason| RenderError::InvalidParameter {
                what: "opacity",
                reason,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn presets_validate() {
        assert_eq!(DiagramConfig::single_cube().validate(), Ok(()));
        assert_eq!(DiagramConfig::nested_cubes().validate(), Ok(()));
    }

    #[test]
    fn rejects_nan_viewport() {
        let cfg = DiagramConfig::default().with_viewport(Viewport::new(f64::NAN, 10.0));
        assert!(matches!(
            cfg.validate(),
            Err(RenderError::InvalidViewport { reason: NumericError::NaN, .. })
        ));
    }

    #[test]
    fn rejects_negative_viewport() {
        let cfg = DiagramConfig::default().with_viewport(Viewport::new(10.0, -1.0));
        assert!(matches!(
            cfg.validate(),
            Err(RenderError::InvalidViewport { reason: NumericError::Negative, .. })
        ));
    }

    #[test]
    fn rejects_infinite_fraction() {
        let cfg = DiagramConfig::default().with_fraction(f64::INFINITY);
        assert_eq!(
            cfg.validate(),
            Err(RenderError::InvalidParameter {
                what: "fraction",
                reason: NumericError::Infinite
            })
        );
    }

    #[test]
    fn rejects_empty_and_bad_volumes() {
        let cfg = DiagramConfig::default().with_cubes(Vec::new());
        assert_eq!(cfg.validate(), Err(RenderError::EmptyDiagram));

        let cfg = DiagramConfig::default().with_cubes(vec![
            CubeLayer::new(1000.0, CubeStyle::default()),
            CubeLayer::new(f64::NAN, CubeStyle::default()),
        ]);
        assert_eq!(
            cfg.validate(),
            Err(RenderError::InvalidVolume {
                index: 1,
                reason: NumericError::NaN
            })
        );
    }

    #[test]
    fn allows_degenerate_sizes() {
        let cfg = DiagramConfig::default()
            .with_viewport(Viewport::new(0.0, 0.0))
            .with_cubes(vec![CubeLayer::new(-8.0, CubeStyle::default())]);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn with_edge_cubes_the_edge() {
        assert_eq!(CubeLayer::with_edge(10.0, CubeStyle::default()).volume, 1000.0);
    }
}
