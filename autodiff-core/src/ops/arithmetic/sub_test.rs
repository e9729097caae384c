use crate::ad::create::ad_create;
use crate::error::AutoDiffError;
use crate::ops::arithmetic::{rsub_op, sub_op};
use crate::ops::stack::ad_stack;
use crate::utils::testing::check_ad_near;

#[test]
fn test_sub_ad_ad() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let diff = sub_op(&vars[1], &vars[0]).unwrap();
    check_ad_near(&diff, &[2.0], &[vec![-1.0, 1.0]], 0.0);
}

#[test]
fn test_sub_ad_number() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let diff = sub_op(&vars[0], 3.0).unwrap();
    check_ad_near(&diff, &[2.0], &[vec![1.0, 0.0]], 0.0);
}

#[test]
fn test_rsub_number_ad() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let diff = rsub_op(10.0, &vars[0]).unwrap();
    check_ad_near(&diff, &[5.0], &[vec![-1.0, 0.0]], 0.0);
}

#[test]
fn test_rsub_ad_operand_matches_forward() {
    let vars = ad_create(&[5.0, 7.0]).unwrap();
    let reflected = rsub_op(&vars[1], &vars[0]).unwrap();
    let forward = sub_op(&vars[1], &vars[0]).unwrap();
    assert_eq!(reflected, forward);
}

#[test]
fn test_rsub_keeps_vector_length() {
    let vars = ad_create(&[1.0, 4.0]).unwrap();
    let stacked = ad_stack(&vars).unwrap();
    let diff = rsub_op(10.0, &stacked).unwrap();
    check_ad_near(&diff, &[9.0, 6.0], &[vec![-1.0, 0.0], vec![0.0, -1.0]], 0.0);
}

#[test]
fn test_sub_length_mismatch() {
    let vars = ad_create(&[1.0, 2.0, 3.0]).unwrap();
    let pair = ad_stack(&vars[..2]).unwrap();
    let triple = ad_stack(&vars).unwrap();
    let result = sub_op(&pair, &triple);
    assert!(matches!(result, Err(AutoDiffError::BroadcastError { .. })));
}
