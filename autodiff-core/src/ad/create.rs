// src/ad/create.rs

use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::numeric_slice_to_array;
use log::trace;
use ndarray::{Array1, Array2};
use num_traits::ToPrimitive;

/// Creates `N` independent AD values from `N` numbers.
///
/// The k-th result has value `[values[k]]` and derivative row `e_k`, the k-th
/// row of the `N x N` identity. All results share one coordinate system, so
/// any combination of them produces aligned gradients.
///
/// # Errors
/// * `EmptyList` if `values` is empty.
/// * `TypeError` if a value cannot be represented as `f64`.
pub fn ad_create<T: ToPrimitive>(values: &[T]) -> Result<Vec<AutoDiff>, AutoDiffError> {
    if values.is_empty() {
        return Err(AutoDiffError::EmptyList);
    }
    let vals = numeric_slice_to_array(values, "ad_create")?;
    let num_vars = vals.len();
    trace!("ad_create: seeding {} independent variables", num_vars);
    vals.iter()
        .enumerate()
        .map(|(k, &v)| AutoDiff::variable(v, k, num_vars))
        .collect()
}

impl AutoDiff {
    /// A constant in a coordinate system of `num_vars` independent variables:
    /// one component with an all-zero derivative row.
    pub fn constant(value: f64, num_vars: usize) -> Self {
        AutoDiff::from_parts_unchecked(Array1::from_elem(1, value), Array2::zeros((1, num_vars)))
    }

    /// Independent variable number `index` out of `num_vars`.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `index >= num_vars`.
    pub fn variable(value: f64, index: usize, num_vars: usize) -> Result<Self, AutoDiffError> {
        if index >= num_vars {
            return Err(AutoDiffError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![num_vars],
            });
        }
        let mut der = Array2::zeros((1, num_vars));
        der[[0, index]] = 1.0;
        Ok(AutoDiff::from_parts_unchecked(Array1::from_elem(1, value), der))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
