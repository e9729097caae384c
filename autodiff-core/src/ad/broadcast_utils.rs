// src/ad/broadcast_utils.rs

use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// Two operands brought to a common value length and derivative width.
///
/// The views borrow the original operands; a length-1 operand is broadcast
/// across the other operand's components without copying.
#[derive(Debug)]
pub struct AlignedPair<'a> {
    pub a_val: ArrayView1<'a, f64>,
    pub a_der: ArrayView2<'a, f64>,
    pub b_val: ArrayView1<'a, f64>,
    pub b_der: ArrayView2<'a, f64>,
}

/// Resulting length when combining value vectors of length `a` and `b`.
///
/// Equal lengths combine directly, and a length-1 side is repeated.
pub fn broadcast_len(a: usize, b: usize) -> Option<usize> {
    match (a, b) {
        _ if a == b => Some(a),
        (1, n) | (n, 1) => Some(n),
        _ => None,
    }
}

/// Aligns two AD operands for an elementwise binary operation.
///
/// # Errors
/// * `IncompatibleShapes` if the operands track a different number of
///   independent variables.
/// * `BroadcastError` if the value lengths cannot be broadcast together.
pub fn align_operands<'a>(
    a: &'a AutoDiff,
    b: &'a AutoDiff,
    operation: &str,
) -> Result<AlignedPair<'a>, AutoDiffError> {
    if a.num_vars() != b.num_vars() {
        log::debug!(
            "{}: derivative widths differ ({} vs {})",
            operation,
            a.num_vars(),
            b.num_vars()
        );
        return Err(AutoDiffError::IncompatibleShapes {
            shape1: a.shape().to_vec(),
            shape2: b.shape().to_vec(),
        });
    }
    let broadcast_error = || AutoDiffError::BroadcastError {
        shape1: vec![a.len()],
        shape2: vec![b.len()],
    };
    let len = broadcast_len(a.len(), b.len()).ok_or_else(|| {
        log::debug!("{}: cannot broadcast lengths {} and {}", operation, a.len(), b.len());
        broadcast_error()
    })?;
    let width = a.num_vars();

    Ok(AlignedPair {
        a_val: a.val.broadcast(len).ok_or_else(broadcast_error)?,
        a_der: a.der.broadcast((len, width)).ok_or_else(broadcast_error)?,
        b_val: b.val.broadcast(len).ok_or_else(broadcast_error)?,
        b_der: b.der.broadcast((len, width)).ok_or_else(broadcast_error)?,
    })
}

/// Multiplies row `i` of `der` by `factor[i]`.
pub fn scale_rows(der: ArrayView2<'_, f64>, factor: ArrayView1<'_, f64>) -> Array2<f64> {
    &der * &factor.insert_axis(Axis(1))
}

/// Divides row `i` of `der` by `divisor[i]`.
pub fn divide_rows(der: ArrayView2<'_, f64>, divisor: ArrayView1<'_, f64>) -> Array2<f64> {
    &der / &divisor.insert_axis(Axis(1))
}
