use crate::ad::create::ad_create;
use crate::error::AutoDiffError;
use crate::ops::arithmetic::{add_op, radd_op};
use crate::ops::stack::ad_stack;
use crate::utils::testing::check_ad_near;

#[test]
fn test_add_ad_ad() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let sum = add_op(&vars[0], &vars[1]).unwrap();
    check_ad_near(&sum, &[12.0], &[vec![1.0, 1.0]], 0.0);
}

#[test]
fn test_add_ad_number() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let sum = add_op(&vars[0], 3.0).unwrap();
    check_ad_near(&sum, &[8.0], &[vec![1.0, 0.0]], 0.0);
}

#[test]
fn test_radd_number_ad() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let sum = radd_op(3.0, &vars[1]).unwrap();
    check_ad_near(&sum, &[10.0], &[vec![0.0, 1.0]], 0.0);
}

#[test]
fn test_add_integer_operand() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let sum = add_op(&vars[0], 2_i32).unwrap();
    check_ad_near(&sum, &[7.0], &[vec![1.0, 0.0]], 0.0);
}

#[test]
fn test_add_broadcasts_single_component() {
    let vars = ad_create(&[1.0, 2.0, 3.0]).unwrap();
    let stacked = ad_stack(&vars).unwrap();
    let sum = add_op(&stacked, &vars[0]).unwrap();
    check_ad_near(
        &sum,
        &[2.0, 3.0, 4.0],
        &[vec![2.0, 0.0, 0.0], vec![1.0, 1.0, 0.0], vec![1.0, 0.0, 1.0]],
        0.0,
    );
}

#[test]
fn test_add_width_mismatch() {
    let two = ad_create(&[1.0, 2.0]).unwrap();
    let three = ad_create(&[1.0, 2.0, 3.0]).unwrap();
    let result = add_op(&two[0], &three[0]);
    assert!(matches!(result, Err(AutoDiffError::IncompatibleShapes { .. })));
}
