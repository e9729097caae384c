// autodiff-core/src/ops/arithmetic/operators.rs
//
// `std::ops` impls for AutoDiff. Each operator forwards to the fallible `*_op`
// function and panics with the error message when the operands cannot be
// aligned (different derivative widths or non-broadcastable lengths).
// Use the `*_op` functions directly to handle those cases as `Result`s.

use crate::ad::AutoDiff;
use crate::ops::arithmetic::{
    add_op, div_op, mul_op, neg_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $forward:ident, $reflected:ident, $name:literal) => {
        impl<'a, 'b> $trait<&'b AutoDiff> for &'a AutoDiff {
            type Output = AutoDiff;

            /// # Panics
            /// Panics if the operands track different independent variables or
            /// their lengths cannot be broadcast together.
            fn $method(self, other: &'b AutoDiff) -> AutoDiff {
                $forward(self, other)
                    .unwrap_or_else(|e| panic!("AutoDiff {} failed: {}", $name, e))
            }
        }

        impl $trait<AutoDiff> for AutoDiff {
            type Output = AutoDiff;

            fn $method(self, other: AutoDiff) -> AutoDiff {
                (&self).$method(&other)
            }
        }

        impl<'b> $trait<&'b AutoDiff> for AutoDiff {
            type Output = AutoDiff;

            fn $method(self, other: &'b AutoDiff) -> AutoDiff {
                (&self).$method(other)
            }
        }

        impl<'a> $trait<AutoDiff> for &'a AutoDiff {
            type Output = AutoDiff;

            fn $method(self, other: AutoDiff) -> AutoDiff {
                self.$method(&other)
            }
        }

        impl<'a> $trait<f64> for &'a AutoDiff {
            type Output = AutoDiff;

            fn $method(self, other: f64) -> AutoDiff {
                $forward(self, other)
                    .unwrap_or_else(|e| panic!("AutoDiff {} failed: {}", $name, e))
            }
        }

        impl $trait<f64> for AutoDiff {
            type Output = AutoDiff;

            fn $method(self, other: f64) -> AutoDiff {
                (&self).$method(other)
            }
        }

        impl<'b> $trait<&'b AutoDiff> for f64 {
            type Output = AutoDiff;

            fn $method(self, other: &'b AutoDiff) -> AutoDiff {
                $reflected(self, other)
                    .unwrap_or_else(|e| panic!("AutoDiff {} failed: {}", $name, e))
            }
        }

        impl $trait<AutoDiff> for f64 {
            type Output = AutoDiff;

            fn $method(self, other: AutoDiff) -> AutoDiff {
                self.$method(&other)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op, radd_op, "addition");
impl_binary_operator!(Sub, sub, sub_op, rsub_op, "subtraction");
impl_binary_operator!(Mul, mul, mul_op, rmul_op, "multiplication");
impl_binary_operator!(Div, div, div_op, rdiv_op, "division");

impl<'a> Neg for &'a AutoDiff {
    type Output = AutoDiff;

    fn neg(self) -> AutoDiff {
        neg_op(self)
    }
}

impl Neg for AutoDiff {
    type Output = AutoDiff;

    fn neg(self) -> AutoDiff {
        neg_op(&self)
    }
}

#[cfg(test)]
mod tests {
    use crate::ad::create::ad_create;
    use crate::utils::testing::check_ad_near;

    #[test]
    fn test_operators_all_directions() {
        let vars = ad_create(&[5.0, 7.0]).unwrap();
        let (x, y) = (&vars[0], &vars[1]);

        check_ad_near(&(x + y), &[12.0], &[vec![1.0, 1.0]], 0.0);
        check_ad_near(&(3.0 + y), &[10.0], &[vec![0.0, 1.0]], 0.0);
        check_ad_near(&(10.0 - x), &[5.0], &[vec![-1.0, 0.0]], 0.0);
        check_ad_near(&(x * 3.0), &[15.0], &[vec![3.0, 0.0]], 0.0);
        check_ad_near(&(2.0 / y), &[2.0 / 7.0], &[vec![0.0, -2.0 / 49.0]], 1e-15);
        check_ad_near(&(-x), &[-5.0], &[vec![-1.0, 0.0]], 0.0);
    }

    #[test]
    fn test_operators_owned_chain() {
        let vars = ad_create(&[2.0, 3.0]).unwrap();
        let (x, y) = (vars[0].clone(), vars[1].clone());
        // f = (x + 1) * y - x / y
        let f = (x.clone() + 1.0) * y.clone() - x / y;
        let expected_val = 3.0 * 3.0 - 2.0 / 3.0;
        let expected_dx = 3.0 - 1.0 / 3.0;
        let expected_dy = 3.0 + 2.0 / 9.0;
        check_ad_near(&f, &[expected_val], &[vec![expected_dx, expected_dy]], 1e-12);
    }

    #[test]
    #[should_panic(expected = "AutoDiff addition failed")]
    fn test_operator_panics_on_width_mismatch() {
        let two = ad_create(&[1.0, 2.0]).unwrap();
        let three = ad_create(&[1.0, 2.0, 3.0]).unwrap();
        let _ = &two[0] + &three[0];
    }
}
