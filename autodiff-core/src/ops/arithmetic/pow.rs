// autodiff-core/src/ops/arithmetic/pow.rs

use crate::ad::broadcast_utils::{align_operands, scale_rows};
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::operand::Operand;
use ndarray::Array2;

/// Raises each component of `base` to the constant power `exponent` (power rule).
///
/// Value `base.val^c`, derivative `c * base.val^(c-1) * base.der`. For `c == 0`
/// the result is constant and the derivative is zero.
pub fn pow_scalar(base: &AutoDiff, exponent: f64) -> AutoDiff {
    let val = base.val().mapv(|v| v.powf(exponent));
    let factor = if exponent == 0.0 {
        base.val().mapv(|_| 0.0)
    } else {
        base.val().mapv(|v| exponent * v.powf(exponent - 1.0))
    };
    AutoDiff::from_parts_unchecked(val, scale_rows(base.der().view(), factor.view()))
}

/// Raises the constant `base` to each component of `exponent` (exponential rule).
///
/// Value `c^x.val`, derivative `c^x.val * ln(c) * x.der`. A non-positive base
/// produces `NaN` derivatives, following IEEE-754.
pub fn rpow_scalar(base: f64, exponent: &AutoDiff) -> AutoDiff {
    let val = exponent.val().mapv(|v| base.powf(v));
    let factor = val.mapv(|p| p * base.ln());
    let der = scale_rows(exponent.der().view(), factor.view());
    AutoDiff::from_parts_unchecked(val, der)
}

/// Raises `base` to the power `exponent`.
///
/// A plain-number exponent uses the power rule ([`pow_scalar`]). An AD
/// exponent differentiates through both operands:
/// `d(x^y) = y * x^(y-1) * dx + x^y * ln(x) * dy`.
/// Terms whose operand derivative is zero are skipped, so `ln(x)` of a
/// non-positive base only shows up where the exponent actually varies.
///
/// # Errors
/// `IncompatibleShapes` or `BroadcastError` when the operands cannot be aligned.
pub fn pow_op<'a>(base: &AutoDiff, exponent: impl Into<Operand<'a>>) -> Result<AutoDiff, AutoDiffError> {
    let exponent: Operand<'a> = exponent.into();
    let exponent = match exponent {
        Operand::Scalar(c) => return Ok(pow_scalar(base, c)),
        Operand::Ad(e) => e,
    };
    let pair = align_operands(base, exponent, "pow_op")?;
    let val = ndarray::Zip::from(&pair.a_val)
        .and(&pair.b_val)
        .map_collect(|&x, &y| x.powf(y));

    let (len, width) = pair.a_der.dim();
    let der = Array2::from_shape_fn((len, width), |(i, j)| {
        let (x, y) = (pair.a_val[i], pair.b_val[i]);
        let dx = pair.a_der[[i, j]];
        let dy = pair.b_der[[i, j]];
        let base_term = if dx == 0.0 || y == 0.0 { 0.0 } else { y * x.powf(y - 1.0) * dx };
        let exponent_term = if dy == 0.0 { 0.0 } else { val[i] * x.ln() * dy };
        base_term + exponent_term
    });
    Ok(AutoDiff::from_parts_unchecked(val, der))
}

/// Reflected power `base ^ exponent` with `exponent` the AD value.
///
/// For a number base this is the exponential rule ([`rpow_scalar`]).
pub fn rpow_op<'a>(base: impl Into<Operand<'a>>, exponent: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
    let base_operand: Operand<'a> = base.into();
    match base_operand {
        Operand::Scalar(c) => Ok(rpow_scalar(c, exponent)),
        Operand::Ad(b) => pow_op(b, exponent),
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
