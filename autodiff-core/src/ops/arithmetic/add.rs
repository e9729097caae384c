// autodiff-core/src/ops/arithmetic/add.rs

use crate::ad::broadcast_utils::align_operands;
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::Operand;

/// Adds `b` to `a`.
///
/// Value `a.val + b.val`, derivative `a.der + b.der`. A plain number is a
/// constant with zero derivative.
///
/// # Errors
/// `IncompatibleShapes` or `BroadcastError` when the operands cannot be aligned.
pub fn add_op<'a>(a: &AutoDiff, b: impl Into<Operand<'a>>) -> Result<AutoDiff, AutoDiffError> {
    let b: Operand<'a> = b.into();
    let b = b.lift(a);
    let pair = align_operands(a, &b, "add_op")?;
    let val = &pair.a_val + &pair.b_val;
    let der = &pair.a_der + &pair.b_der;
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

/// Reflected addition `a + b` where `a` is the left operand.
///
/// Addition commutes, so this is `add_op(b, a)`.
pub fn radd_op<'a>(a: impl Into<Operand<'a>>, b: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
    add_op(b, a)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
