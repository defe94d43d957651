//! Error types for the Trellis layout engine.

use thiserror::Error;

use crate::geometry::Axis;

/// Errors raised by validated sizer construction.
///
/// The layout pass itself never fails; these only come from the checked
/// `try_*` entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Conflicting alignment flags on the {axis:?} axis")]
    ConflictingAlignment { axis: Axis },

    #[error("Invalid proportion {value}: must be finite and non-negative")]
    InvalidProportion { value: f32 },

    #[error("Invalid border inset {value}: must be finite and non-negative")]
    InvalidBorder { value: f32 },

    #[error("Invalid gap {value}: must be finite and non-negative")]
    InvalidGap { value: f32 },
}
