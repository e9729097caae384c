// autodiff-core/src/ops/arithmetic/sub.rs

use crate::ad::broadcast_utils::align_operands;
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::Operand;

/// Subtracts `b` from `a`: value `a.val - b.val`, derivative `a.der - b.der`.
///
/// # Errors
/// `IncompatibleShapes` or `BroadcastError` when the operands cannot be aligned.
pub fn sub_op<'a>(a: &AutoDiff, b: impl Into<Operand<'a>>) -> Result<AutoDiff, AutoDiffError> {
    let b: Operand<'a> = b.into();
    let b = b.lift(a);
    let pair = align_operands(a, &b, "sub_op")?;
    let val = &pair.a_val - &pair.b_val;
    let der = &pair.a_der - &pair.b_der;
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

/// Reflected subtraction `a - b` with `b` the AD value.
///
/// For a number `c`: value `c - b.val`, derivative `-b.der`.
pub fn rsub_op<'a>(a: impl Into<Operand<'a>>, b: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
    let a: Operand<'a> = a.into();
    match a {
        Operand::Scalar(c) => Ok(AutoDiff::from_parts_unchecked(
            b.val().mapv(|v| c - v),
            -b.der(),
        )),
        Operand::Ad(a) => sub_op(a, b),
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
