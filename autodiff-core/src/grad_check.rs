use crate::ad::create::ad_create;
use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use approx::relative_eq;
use log::{debug, warn};
use thiserror::Error;

/// Default step for the central differences.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default absolute/relative tolerance when comparing derivatives.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Error type specifically for derivative checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Derivative check failed for row {row}, variable {var}: analytical {analytical:?} != numerical {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        row: usize,
        var: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical derivative is NaN or infinite for row {row}, variable {var}. Details: f+: {value_plus:?}, f-: {value_minus:?}")]
    NumericalNaNOrInfinite {
        row: usize,
        var: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Function output length changed from {expected} to {actual} under perturbation")]
    OutputLengthChanged { expected: usize, actual: usize },

    #[error("AD error during derivative check: {0}")]
    AutoDiff(#[from] AutoDiffError),
}

/// Cross-checks the derivatives propagated through `f` against central
/// finite differences.
///
/// `f` receives the independent variables produced by `ad_create(point)`. For
/// each variable `j` the function is re-evaluated at `point ± epsilon * e_j`
/// and every `der[[i, j]]` of the result is compared to
/// `(f_i(p + eps e_j) - f_i(p - eps e_j)) / (2 eps)`.
///
/// # Errors
/// The first mismatching entry, a non-finite numerical estimate, or any
/// `AutoDiffError` returned by `f`. An output whose derivative width is not
/// `point.len()` is reported as `IncompatibleShapes`.
pub fn check_derivative<F>(f: F, point: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[AutoDiff]) -> Result<AutoDiff, AutoDiffError>,
{
    let analytical = f(&ad_create(point)?)?;
    if analytical.num_vars() != point.len() {
        return Err(GradCheckError::AutoDiff(AutoDiffError::IncompatibleShapes {
            shape1: vec![analytical.len(), point.len()],
            shape2: analytical.shape().to_vec(),
        }));
    }
    let rows = analytical.len();
    debug!(
        "check_derivative: {} outputs over {} variables",
        rows,
        analytical.num_vars()
    );

    let evaluate = |shifted: &[f64]| -> Result<Vec<f64>, GradCheckError> {
        let out = f(&ad_create(shifted)?)?;
        if out.len() != rows {
            return Err(GradCheckError::OutputLengthChanged {
                expected: rows,
                actual: out.len(),
            });
        }
        Ok(out.val().to_vec())
    };

    for var in 0..point.len() {
        let mut plus = point.to_vec();
        plus[var] += epsilon;
        let mut minus = point.to_vec();
        minus[var] -= epsilon;
        let f_plus = evaluate(&plus)?;
        let f_minus = evaluate(&minus)?;

        for row in 0..rows {
            let numerical = (f_plus[row] - f_minus[row]) / (2.0 * epsilon);
            if !numerical.is_finite() {
                return Err(GradCheckError::NumericalNaNOrInfinite {
                    row,
                    var,
                    value_plus: f_plus[row],
                    value_minus: f_minus[row],
                });
            }
            let analytical_value = analytical.der()[[row, var]];
            if !relative_eq!(analytical_value, numerical, epsilon = tolerance, max_relative = tolerance) {
                let difference = (analytical_value - numerical).abs();
                warn!(
                    "check_derivative: mismatch at [{}, {}]: analytical {} vs numerical {}",
                    row, var, analytical_value, numerical
                );
                return Err(GradCheckError::GradientMismatch {
                    row,
                    var,
                    analytical: analytical_value,
                    numerical,
                    difference,
                });
            }
        }
    }
    Ok(())
}
