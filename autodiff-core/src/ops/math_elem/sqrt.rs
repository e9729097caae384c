use crate::ad::AutoDiff;
use crate::ops::apply_unary_op;

/// Element-wise square root: derivative `x.der / (2 sqrt(x))`.
///
/// Negative components give `NaN`; the derivative is infinite at zero.
pub fn sqrt_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::sqrt, |v| 0.5 / v.sqrt(), "sqrt_op")
}
