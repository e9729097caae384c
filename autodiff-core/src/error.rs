use thiserror::Error;

/// Custom error type for the autodiff crate.
///
/// Variants fall into two kinds: a *type* error when an operand is not a
/// usable number, and *value* errors when shapes, ranks or coordinate systems
/// do not line up. See [`AutoDiffError::is_type_error`] and
/// [`AutoDiffError::is_value_error`].
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutoDiffError {
    #[error("Type error in {operation}: expected a numeric value or AutoDiff, got {found}")]
    TypeError { operation: String, found: String },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Dimension mismatch: expected at most {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Derivative widths differ, i.e. the operands were seeded over different
    /// sets of independent variables.
    #[error("Incompatible shapes for operation: {shape1:?} and {shape2:?}")]
    IncompatibleShapes {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Cannot build AD values from an empty list")]
    EmptyList,
}

impl AutoDiffError {
    /// `true` for errors caused by a non-numeric operand.
    pub fn is_type_error(&self) -> bool {
        matches!(self, AutoDiffError::TypeError { .. })
    }

    /// `true` for shape, rank and coordinate-system errors.
    pub fn is_value_error(&self) -> bool {
        !self.is_type_error()
    }
}
