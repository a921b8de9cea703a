//! Error types with diagnostics using miette
//!
//! Drawing itself never fails; these guard the inputs of a render so that
//! non-finite numbers never reach the serialized SVG.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while validating a diagram before drawing
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid viewport {width}x{height}: {reason}")]
    #[diagnostic(
        code(isocube::render::invalid_viewport),
        help("viewport dimensions must be finite and non-negative")
    )]
    InvalidViewport {
        width: f64,
        height: f64,
        reason: NumericError,
    },

    #[error("invalid {what}: {reason}")]
    #[diagnostic(code(isocube::render::invalid_parameter))]
    InvalidParameter {
        what: &'static str,
        reason: NumericError,
    },

    #[error("invalid volume for cube #{index}: {reason}")]
    #[diagnostic(code(isocube::render::invalid_volume))]
    InvalidVolume { index: usize, reason: NumericError },

    #[error("scale factor is not finite ({value})")]
    #[diagnostic(
        code(isocube::render::invalid_scale),
        help("the outer cube volume must be non-zero")
    )]
    InvalidScale { value: f64 },

    #[error("empty diagram")]
    #[diagnostic(
        code(isocube::render::empty_diagram),
        help("add at least one cube layer; the first one sets the scale")
    )]
    EmptyDiagram,
}
