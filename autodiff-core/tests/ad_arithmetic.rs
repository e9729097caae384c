use approx::assert_relative_eq;
use autodiff_core::utils::testing::check_ad_near;
use autodiff_core::{ad_stack, rpow_op, AutoDiff, AutoDiffError};
use rand::Rng;

mod common;
use common::vars;

#[test]
fn test_add_all_directions() {
    let v = vars(&[5.0, 7.0]);
    let (x, y) = (&v[0], &v[1]);
    check_ad_near(&(x + y), &[12.0], &[vec![1.0, 1.0]], 0.0);
    check_ad_near(&(x + 3.0), &[8.0], &[vec![1.0, 0.0]], 0.0);
    check_ad_near(&(3.0 + y), &[10.0], &[vec![0.0, 1.0]], 0.0);
}

#[test]
fn test_sub_all_directions() {
    let v = vars(&[5.0, 7.0]);
    let (x, y) = (&v[0], &v[1]);
    check_ad_near(&(y - x), &[2.0], &[vec![-1.0, 1.0]], 0.0);
    check_ad_near(&(x - 3.0), &[2.0], &[vec![1.0, 0.0]], 0.0);
    check_ad_near(&(10.0 - x), &[5.0], &[vec![-1.0, 0.0]], 0.0);
}

#[test]
fn test_mul_all_directions() {
    let v = vars(&[5.0, 7.0]);
    let (x, y) = (&v[0], &v[1]);
    check_ad_near(&(x * y), &[35.0], &[vec![7.0, 5.0]], 0.0);
    check_ad_near(&(x * 3.0), &[15.0], &[vec![3.0, 0.0]], 0.0);
    check_ad_near(&(3.0 * y), &[21.0], &[vec![0.0, 3.0]], 0.0);
}

#[test]
fn test_div_all_directions() {
    let v = vars(&[4.0, 8.0]);
    let (x, y) = (&v[0], &v[1]);
    check_ad_near(&(y / x), &[2.0], &[vec![-0.5, 0.25]], 0.0);
    check_ad_near(&(x / 2.0), &[2.0], &[vec![0.5, 0.0]], 0.0);
    check_ad_near(&(2.0 / y), &[0.25], &[vec![0.0, -0.03125]], 0.0);
}

#[test]
fn test_pow_both_directions() {
    let v = vars(&[2.0, 3.0]);
    let power = (&v[0] * &v[1]).powf(5.0);
    check_ad_near(&power, &[7776.0], &[vec![19440.0, 12960.0]], 1e-9);

    let w = vars(&[1.0, 2.0]);
    let exp_power = rpow_op(5.0, &(&w[0] * &w[1])).unwrap();
    assert_eq!(exp_power.val()[0], 25.0);
    assert_relative_eq!(exp_power.der()[[0, 0]], 80.47189562, epsilon = 1e-6);
    assert_relative_eq!(exp_power.der()[[0, 1]], 40.23594781, epsilon = 1e-6);
}

#[test]
fn test_neg() {
    let v = vars(&[2.0, 8.0]);
    let (x, y) = (&v[0], &v[1]);
    check_ad_near(&(-x), &[-2.0], &[vec![-1.0, 0.0]], 0.0);
    check_ad_near(&(-(x / y)), &[-0.25], &[vec![-0.125, 0.03125]], 0.0);
}

#[test]
fn test_operands_are_not_mutated() {
    let v = vars(&[3.0, 4.0]);
    let before = v.clone();
    let _ = (&v[0] * &v[1] - 2.0 / &v[0]).sin();
    assert_eq!(v, before);
}

#[test]
fn test_commutativity_random_operands() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let a: f64 = rng.gen_range(-10.0..10.0);
        let b: f64 = rng.gen_range(-10.0..10.0);
        let c: f64 = rng.gen_range(-10.0..10.0);
        let v = vars(&[a, b]);
        let (x, y) = (&v[0], &v[1]);
        assert_eq!(x + y, y + x);
        assert_eq!(x * y, y * x);
        assert_eq!(x + c, c + x);
        assert_eq!(x * c, c * x);
    }
}

#[test]
fn test_vector_expression_on_stacked_values() {
    let v = vars(&[1.0, 2.0, 3.0]);
    let stacked = ad_stack(&v).unwrap();
    // Each component squared: d/dx_i (x_i^2) = 2 x_i on the diagonal.
    let squares = &stacked * &stacked;
    check_ad_near(
        &squares,
        &[1.0, 4.0, 9.0],
        &[vec![2.0, 0.0, 0.0], vec![0.0, 4.0, 0.0], vec![0.0, 0.0, 6.0]],
        0.0,
    );
}

#[test]
fn test_mismatched_coordinate_systems_are_errors() {
    let two = vars(&[1.0, 2.0]);
    let three = vars(&[1.0, 2.0, 3.0]);
    let result = autodiff_core::mul_op(&two[0], &three[1]);
    assert!(matches!(result, Err(AutoDiffError::IncompatibleShapes { .. })));

    let lone = AutoDiff::scalar(1.0).unwrap();
    let result = autodiff_core::div_op(&lone, &two[0]);
    assert!(result.unwrap_err().is_value_error());
}
