// autodiff-core/src/ops/math_elem/trig.rs

use crate::ad::AutoDiff;
use crate::ops::apply_unary_op;

/// Elementwise sine: value `sin(x)`, derivative `cos(x) * x.der`.
pub fn sin_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::sin, f64::cos, "sin_op")
}

/// Elementwise cosine: value `cos(x)`, derivative `-sin(x) * x.der`.
pub fn cos_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::cos, |v| -v.sin(), "cos_op")
}

/// Elementwise tangent: value `tan(x)`, derivative `x.der / cos(x)^2`.
pub fn tan_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::tan, |v| v.cos().powi(-2), "tan_op")
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
