// autodiff-core/src/ops/arithmetic/div.rs

use crate::ad::broadcast_utils::{align_operands, divide_rows, scale_rows};
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::Operand;

/// Divides `a` by `b` using the quotient rule.
///
/// Value `a.val / b.val`, derivative `(a.der * b.val - a.val * b.der) / b.val^2`.
/// Division by zero follows IEEE-754 and yields `inf`/`NaN` components.
///
/// # Errors
/// `IncompatibleShapes` or `BroadcastError` when the operands cannot be aligned.
pub fn div_op<'a>(a: &AutoDiff, b: impl Into<Operand<'a>>) -> Result<AutoDiff, AutoDiffError> {
    let b: Operand<'a> = b.into();
    let b = b.lift(a);
    let pair = align_operands(a, &b, "div_op")?;
    let val = &pair.a_val / &pair.b_val;
    let numerator = scale_rows(pair.a_der.view(), pair.b_val.view()) - scale_rows(pair.b_der.view(), pair.a_val.view());
    let b_squared = pair.b_val.mapv(|v| v * v);
    let der = divide_rows(numerator.view(), b_squared.view());
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

/// Reflected division `a / b` with `b` the AD value.
///
/// For a number `c`: value `c / b.val`, derivative `-c * b.der / b.val^2`.
pub fn rdiv_op<'a>(a: impl Into<Operand<'a>>, b: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
    let a: Operand<'a> = a.into();
    match a {
        Operand::Scalar(c) => {
            let val = b.val().mapv(|v| c / v);
            let b_squared = b.val().mapv(|v| v * v);
            let der = divide_rows((b.der() * -c).view(), b_squared.view());
            Ok(AutoDiff::from_parts_unchecked(val, der))
        }
        Operand::Ad(a) => div_op(a, b),
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
