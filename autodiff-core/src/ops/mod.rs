// Elementwise operations on AD values.
pub mod arithmetic;
pub mod math_elem;
pub mod stack;

use crate::ad::broadcast_utils::scale_rows;
use crate::ad::AutoDiff;
use log::trace;

/// Applies an elementwise function `f` with derivative `df` to an AD value.
///
/// The result has value `f(x.val)` and derivative `df(x.val) * x.der`, where
/// each derivative row is scaled by the factor of its own component.
pub(crate) fn apply_unary_op<F, DF>(x: &AutoDiff, f: F, df: DF, op_name: &str) -> AutoDiff
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    trace!("{}: shape {:?}", op_name, x.shape());
    let val = x.val().mapv(f);
    let factor = x.val().mapv(df);
    let der = scale_rows(x.der().view(), factor.view());
    AutoDiff::from_parts_unchecked(val, der)
}
