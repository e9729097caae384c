// autodiff-core/src/ops/arithmetic/mul.rs

use crate::ad::broadcast_utils::{align_operands, scale_rows};
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::Operand;

/// Multiplies `a` by `b` using the product rule.
///
/// Value `a.val * b.val`, derivative `a.der * b.val + a.val * b.der`.
///
/// # Errors
/// `IncompatibleShapes` or `BroadcastError` when the operands cannot be aligned.
pub fn mul_op<'a>(a: &AutoDiff, b: impl Into<Operand<'a>>) -> Result<AutoDiff, AutoDiffError> {
    let b: Operand<'a> = b.into();
    let b = b.lift(a);
    let pair = align_operands(a, &b, "mul_op")?;
    let val = &pair.a_val * &pair.b_val;
    let der = scale_rows(pair.a_der.view(), pair.b_val.view()) + scale_rows(pair.b_der.view(), pair.a_val.view());
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

/// Reflected multiplication `a * b`; multiplication commutes so this is `mul_op(b, a)`.
pub fn rmul_op<'a>(a: impl Into<Operand<'a>>, b: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
    mul_op(b, a)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
