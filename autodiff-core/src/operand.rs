// autodiff-core/src/operand.rs

use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use ndarray::{Array1, Array2};
use num_traits::ToPrimitive;
use std::borrow::Cow;

/// The right-hand (or, for reflected operations, left-hand) side of a binary
/// operation: either a plain number or a borrowed AD value.
///
/// Only numbers and AD values can be turned into an `Operand`, so a text
/// operand is rejected by the compiler. Numeric types whose conversion to
/// `f64` fails go through [`Operand::number`], which reports a type error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    Ad(&'a AutoDiff),
}

impl<'a> Operand<'a> {
    /// Builds a scalar operand from any numeric type.
    ///
    /// # Errors
    /// `AutoDiffError::TypeError` if `value` has no `f64` representation.
    pub fn number<T: ToPrimitive>(value: T) -> Result<Operand<'static>, AutoDiffError> {
        Ok(Operand::Scalar(numeric_to_f64(&value, "Operand::number")?))
    }

    /// Turns the operand into an AD value that can be aligned with `like`.
    ///
    /// A scalar becomes a constant: one value component and a zero derivative
    /// row as wide as `like`'s coordinate system. AD operands are borrowed
    /// unchanged.
    pub(crate) fn lift(self, like: &AutoDiff) -> Cow<'a, AutoDiff> {
        match self {
            Operand::Scalar(c) => Cow::Owned(AutoDiff::from_parts_unchecked(
                Array1::from_elem(1, c),
                Array2::zeros((1, like.num_vars())),
            )),
            Operand::Ad(ad) => Cow::Borrowed(ad),
        }
    }
}

impl<'a> From<f64> for Operand<'a> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<i32> for Operand<'a> {
    fn from(value: i32) -> Self {
        Operand::Scalar(f64::from(value))
    }
}

impl<'a> From<&'a AutoDiff> for Operand<'a> {
    fn from(value: &'a AutoDiff) -> Self {
        Operand::Ad(value)
    }
}

/// Converts one numeric input to `f64`, reporting a type error on failure.
pub(crate) fn numeric_to_f64<T: ToPrimitive>(value: &T, operation: &str) -> Result<f64, AutoDiffError> {
    value.to_f64().ok_or_else(|| {
        log::debug!("{}: value of type {} has no f64 representation", operation, std::any::type_name::<T>());
        AutoDiffError::TypeError {
            operation: operation.to_string(),
            found: std::any::type_name::<T>().to_string(),
        }
    })
}

/// Converts a numeric slice to a value vector. The slice must not be empty.
pub(crate) fn numeric_slice_to_array<T: ToPrimitive>(
    values: &[T],
    operation: &str,
) -> Result<Array1<f64>, AutoDiffError> {
    if values.is_empty() {
        return Err(AutoDiffError::ShapeMismatch {
            expected: vec![1],
            actual: vec![0],
            operation: operation.to_string(),
        });
    }
    values
        .iter()
        .map(|v| numeric_to_f64(v, operation))
        .collect::<Result<Vec<f64>, _>>()
        .map(Array1::from)
}
