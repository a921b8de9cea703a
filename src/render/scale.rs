//! Fitting cube volumes onto the viewport

use crate::types::Viewport;

/// Edge lengths of a set of cubes, before and after fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeScale {
    /// Multiplier applied to every edge
    pub factor: f64,
    /// Unscaled edges (cube roots of the volumes), outer cube first
    pub edges: Vec<f64>,
    /// Edges after scaling, outer cube first
    pub scaled: Vec<f64>,
}

impl CubeScale {
    /// Scale so that the first (outer) cube's edge spans `fraction` of the
    /// viewport's smaller dimension; all other cubes keep their proportion
    /// to it.
    ///
    /// No validation happens here: a zero-size viewport gives zero-size
    /// cubes and a zero outer volume gives a non-finite factor.
    pub fn fit(volumes: &[f64], viewport: Viewport, fraction: f64) -> Self {
        let edges: Vec<f64> = volumes.iter().map(|v| v.cbrt()).collect();
        let outer = edges.first().copied().unwrap_or(0.0);
        let factor = (fraction * viewport.min_dim()) / outer;
        let scaled = edges.iter().map(|e| e * factor).collect();

        crate::log::debug!(outer, factor, fraction, "cube scale");

        CubeScale {
            factor,
            edges,
            scaled,
        }
    }

    /// Scaled edge of the outer cube
    pub fn outer(&self) -> f64 {
        self.scaled.first().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn volume_to_edge_is_cube_root() {
        for v in [1.0, 8.0, 27.0, 1_000_000.0, 494.7_f64.powi(3), 0.125] {
            let s = CubeScale::fit(&[v], Viewport::default(), 0.5);
            assert!((s.edges[0].powi(3) - v).abs() <= v * 1e-12, "volume {}", v);
        }
    }

    #[test]
    fn hundred_cubed_on_1000x800() {
        let s = CubeScale::fit(&[100.0_f64.powi(3)], Viewport::new(1000.0, 800.0), 0.5);
        assert!((s.edges[0] - 100.0).abs() < EPS);
        assert!((s.factor - 4.0).abs() < EPS);
        assert!((s.outer() - 400.0).abs() < EPS);
    }

    #[test]
    fn nested_ratio_is_preserved() {
        let s = CubeScale::fit(
            &[494.7_f64.powi(3), 10.0_f64.powi(3)],
            Viewport::new(1280.0, 720.0),
            0.3,
        );
        let raw = s.edges[1] / s.edges[0];
        let scaled = s.scaled[1] / s.scaled[0];
        assert!((raw - 10.0 / 494.7).abs() < 1e-9);
        assert!((scaled - raw).abs() < 1e-12);
        assert!((raw - 0.0202).abs() < 1e-4);
    }

    #[test]
    fn scaled_edge_grows_with_viewport() {
        let vol = [1000.0];
        let small = CubeScale::fit(&vol, Viewport::new(400.0, 300.0), 0.5).outer();
        let large = CubeScale::fit(&vol, Viewport::new(800.0, 600.0), 0.5).outer();
        assert!(large > small);
        assert!((large / small - 2.0).abs() < EPS);
    }

    #[test]
    fn zero_viewport_gives_zero_cubes() {
        let s = CubeScale::fit(&[1000.0, 8.0], Viewport::new(0.0, 600.0), 0.5);
        assert_eq!(s.factor, 0.0);
        assert!(s.scaled.iter().all(|&e| e == 0.0));
    }

    #[test]
    fn zero_outer_volume_gives_non_finite_factor() {
        let s = CubeScale::fit(&[0.0], Viewport::default(), 0.5);
        assert!(!s.factor.is_finite());
    }
}
