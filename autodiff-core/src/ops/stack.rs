use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use log::trace;
use ndarray::{concatenate, ArrayView1, ArrayView2, Axis};

/// Stacks several AD values into one batched AD value.
///
/// The result's value is the concatenation of the input values, in order, and
/// its derivative is the vertical stack of the input derivative matrices, in
/// order. All inputs must share one coordinate system (same number of
/// independent variables), e.g. values coming from one `ad_create` call.
///
/// # Arguments
/// * `ads` - The AD values to stack.
///
/// # Errors
/// * `EmptyList` if `ads` is empty.
/// * `IncompatibleShapes` if the derivative widths differ.
pub fn ad_stack(ads: &[AutoDiff]) -> Result<AutoDiff, AutoDiffError> {
    let first = ads.first().ok_or(AutoDiffError::EmptyList)?;
    let width = first.num_vars();

    // Validate that every input uses the same coordinate system
    if let Some(bad) = ads.iter().find(|ad| ad.num_vars() != width) {
        log::debug!(
            "ad_stack: derivative width {} does not match {}",
            bad.num_vars(),
            width
        );
        return Err(AutoDiffError::IncompatibleShapes {
            shape1: first.shape().to_vec(),
            shape2: bad.shape().to_vec(),
        });
    }

    let vals: Vec<ArrayView1<'_, f64>> = ads.iter().map(|ad| ad.val().view()).collect();
    let ders: Vec<ArrayView2<'_, f64>> = ads.iter().map(|ad| ad.der().view()).collect();
    let shape_error = |_| AutoDiffError::ShapeMismatch {
        expected: vec![width],
        actual: first.shape().to_vec(),
        operation: "ad_stack".to_string(),
    };
    let val = concatenate(Axis(0), &vals).map_err(shape_error)?;
    let der = concatenate(Axis(0), &ders).map_err(shape_error)?;

    trace!("ad_stack: stacked {} values into shape {:?}", ads.len(), der.shape());
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

#[cfg(test)]
#[path = "stack_test.rs"]
mod tests;
