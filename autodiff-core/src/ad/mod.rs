// src/ad/mod.rs

use crate::error::AutoDiffError;
use crate::operand::{numeric_slice_to_array, numeric_to_f64};
use log::trace;
use ndarray::{Array1, Array2, ArrayD};
use num_traits::ToPrimitive;

// --- Implementation modules ---
pub mod broadcast_utils;
pub mod create;
mod debug;
mod math_methods;
mod traits;

// Re-export creation functions
pub use create::ad_create;

/// A forward-mode automatic differentiation value.
///
/// Holds a value vector `val` of length `n >= 1` and a derivative matrix `der`
/// of shape `[n, N]`, where `N` is the number of independent variables being
/// tracked. `der[[i, j]]` is the partial derivative of `val[i]` with respect to
/// independent variable `j`.
///
/// `AutoDiff` is immutable: every operation borrows its operands and returns a
/// new value.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoDiff {
    pub(crate) val: Array1<f64>,
    pub(crate) der: Array2<f64>,
}

impl AutoDiff {
    /// Creates a new AD value from numeric data and an optional derivative.
    ///
    /// With `derivative = None` every component is seeded as its own
    /// independent variable (identity derivative, `[[1]]` for a scalar).
    ///
    /// A supplied derivative may be:
    /// * rank 0, for a single-component value;
    /// * rank 1, read as the gradient row of a single-component value, or as one
    ///   derivative column when its length equals the value length;
    /// * rank 2, with exactly one row per value component.
    ///
    /// # Errors
    /// * `TypeError` if a value cannot be represented as `f64`.
    /// * `ShapeMismatch` if the value is empty or the derivative rows do not match it.
    /// * `DimensionMismatch` if the derivative has rank greater than 2.
    pub fn new<T: ToPrimitive>(
        value: &[T],
        derivative: Option<ArrayD<f64>>,
    ) -> Result<Self, AutoDiffError> {
        let val = numeric_slice_to_array(value, "AutoDiff::new")?;
        let der = match derivative {
            None => Array2::eye(val.len()),
            Some(d) => validate_derivative(d, val.len())?,
        };
        trace!("AutoDiff::new: shape {:?}", der.shape());
        Ok(AutoDiff { val, der })
    }

    /// Creates a single-component AD value seeded as the only independent
    /// variable: `val = [value]`, `der = [[1]]`.
    pub fn scalar<T: ToPrimitive>(value: T) -> Result<Self, AutoDiffError> {
        let v = numeric_to_f64(&value, "AutoDiff::scalar")?;
        Ok(AutoDiff::from_parts_unchecked(
            Array1::from_elem(1, v),
            Array2::eye(1),
        ))
    }

    /// Creates an AD value from nested derivative rows.
    ///
    /// # Errors
    /// `ShapeMismatch` if the row count differs from the value length or the
    /// rows are ragged.
    pub fn from_rows<T: ToPrimitive>(value: &[T], rows: &[Vec<f64>]) -> Result<Self, AutoDiffError> {
        let val = numeric_slice_to_array(value, "AutoDiff::from_rows")?;
        let width = rows.first().map_or(0, Vec::len);
        if rows.len() != val.len() {
            return Err(AutoDiffError::ShapeMismatch {
                expected: vec![val.len(), width],
                actual: vec![rows.len(), width],
                operation: "AutoDiff::from_rows".to_string(),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(AutoDiffError::ShapeMismatch {
                expected: vec![width],
                actual: vec![bad.len()],
                operation: "AutoDiff::from_rows".to_string(),
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let der = Array2::from_shape_vec((val.len(), width), flat).map_err(|_| {
            AutoDiffError::ShapeMismatch {
                expected: vec![val.len(), width],
                actual: vec![rows.len(), width],
                operation: "AutoDiff::from_rows".to_string(),
            }
        })?;
        Ok(AutoDiff { val, der })
    }

    /// Creates an AD value from an existing value vector and derivative matrix.
    ///
    /// # Errors
    /// `ShapeMismatch` if `val` is empty or `der` does not have one row per
    /// component of `val`.
    pub fn from_parts(val: Array1<f64>, der: Array2<f64>) -> Result<Self, AutoDiffError> {
        if val.is_empty() || der.nrows() != val.len() {
            return Err(AutoDiffError::ShapeMismatch {
                expected: vec![val.len().max(1), der.ncols()],
                actual: der.shape().to_vec(),
                operation: "AutoDiff::from_parts".to_string(),
            });
        }
        Ok(AutoDiff { val, der })
    }

    /// Builds an AD value whose shapes are already known to agree.
    pub(crate) fn from_parts_unchecked(val: Array1<f64>, der: Array2<f64>) -> Self {
        debug_assert_eq!(val.len(), der.nrows());
        AutoDiff { val, der }
    }

    // --- Accessors ---

    /// The value vector.
    pub fn val(&self) -> &Array1<f64> {
        &self.val
    }

    /// The derivative matrix, one row per value component.
    pub fn der(&self) -> &Array2<f64> {
        &self.der
    }

    /// Number of value components.
    pub fn len(&self) -> usize {
        self.val.len()
    }

    /// Always `false`: an AD value has at least one component.
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }

    /// Number of independent variables tracked by the derivative.
    pub fn num_vars(&self) -> usize {
        self.der.ncols()
    }

    /// `[len, num_vars]`, the shape of the derivative matrix.
    pub fn shape(&self) -> [usize; 2] {
        [self.der.nrows(), self.der.ncols()]
    }

    /// Gradient of the first value component.
    pub fn gradient(&self) -> Array1<f64> {
        self.der.row(0).to_owned()
    }

    /// An owned copy of the full derivative matrix.
    pub fn jacobian(&self) -> Array2<f64> {
        self.der.clone()
    }

    /// Consumes the value and returns `(val, der)`.
    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
        (self.val, self.der)
    }
}

/// Checks a caller-supplied derivative against a value of length `len` and
/// brings it to rank 2.
fn validate_derivative(derivative: ArrayD<f64>, len: usize) -> Result<Array2<f64>, AutoDiffError> {
    let shape = derivative.shape().to_vec();
    let (rows, cols) = match shape.as_slice() {
        [] if len == 1 => (1, 1),
        [m] if len == 1 => (1, *m),
        [m] if *m == len => (len, 1),
        [rows, cols] if *rows == len => (*rows, *cols),
        [] | [_] | [_, _] => {
            log::debug!("AutoDiff::new: derivative shape {:?} does not match value length {}", shape, len);
            return Err(AutoDiffError::ShapeMismatch {
                expected: vec![len],
                actual: shape,
                operation: "AutoDiff::new".to_string(),
            });
        }
        _ => {
            return Err(AutoDiffError::DimensionMismatch {
                expected: 2,
                actual: shape.len(),
            })
        }
    };
    let data: Vec<f64> = derivative.iter().copied().collect();
    Array2::from_shape_vec((rows, cols), data).map_err(|_| AutoDiffError::ShapeMismatch {
        expected: vec![rows, cols],
        actual: shape,
        operation: "AutoDiff::new".to_string(),
    })
}

#[cfg(test)]
#[path = "ad_test.rs"]
mod tests;
