use crate::ad::AutoDiff;

/// Checks that an AD value matches the expected value vector and derivative
/// rows within `tolerance` (absolute).
/// Panics if shapes differ or any component differs by more than `tolerance`.
pub fn check_ad_near(
    actual: &AutoDiff,
    expected_val: &[f64],
    expected_der: &[Vec<f64>],
    tolerance: f64,
) {
    assert_eq!(actual.len(), expected_val.len(), "Value length mismatch");
    assert_eq!(actual.der().nrows(), expected_der.len(), "Derivative row count mismatch");

    for (i, (a, e)) in actual.val().iter().zip(expected_val.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }

    for (i, (row, expected_row)) in actual.der().rows().into_iter().zip(expected_der.iter()).enumerate() {
        assert_eq!(row.len(), expected_row.len(), "Derivative width mismatch in row {}", i);
        for (j, (a, e)) in row.iter().zip(expected_row.iter()).enumerate() {
            let diff = (a - e).abs();
            if diff > tolerance || diff.is_nan() {
                panic!(
                    "Derivative mismatch at [{}, {}]: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                    i, j, a, e, diff, tolerance
                );
            }
        }
    }
}
