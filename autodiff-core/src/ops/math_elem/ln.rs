// autodiff-core/src/ops/math_elem/ln.rs

use crate::ad::AutoDiff;
use crate::ops::apply_unary_op;

/// Computes the element-wise natural logarithm of an AD value.
///
/// Value `ln(x)`, derivative `x.der / x`.
///
/// # Domain Considerations
/// Non-positive components give `NaN` or `-inf` values, following IEEE-754;
/// the derivative `1/x` is likewise undefined at `x = 0`.
pub fn ln_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::ln, f64::recip, "ln_op")
}

/// Logarithm in an arbitrary `base`: value `log_b(x)`, derivative `x.der / (x ln b)`.
pub fn log_base_op(x: &AutoDiff, base: f64) -> AutoDiff {
    let ln_base = base.ln();
    apply_unary_op(x, |v| v.ln() / ln_base, |v| 1.0 / (v * ln_base), "log_base_op")
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
