use crate::ad::AutoDiff;
use crate::ops::apply_unary_op;

/// Element-wise `e^x`; the derivative factor is the value itself.
pub fn exp_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::exp, f64::exp, "exp_op")
}
