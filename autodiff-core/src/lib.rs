//! Forward-mode automatic differentiation.
//!
//! An [`AutoDiff`] value carries a value vector together with the derivative
//! of every component with respect to a fixed set of independent variables.
//! Arithmetic and elementary functions propagate both at once:
//!
//! ```
//! use autodiff_core::{ad_create, AutoDiff};
//!
//! let vars = ad_create(&[4.0, 8.0]).unwrap();
//! let (x, y) = (&vars[0], &vars[1]);
//! let q = y / x;
//! assert_eq!(q.val().to_vec(), vec![2.0]);
//! assert_eq!(q.der().row(0).to_vec(), vec![-0.5, 0.25]);
//!
//! let s: AutoDiff = (x * y).sin();
//! assert!((s.val()[0] - 32.0_f64.sin()).abs() < 1e-12);
//! ```

pub mod ad;
pub mod error;
pub mod grad_check;
pub mod operand;
pub mod ops;
pub mod utils;

// Re-export the AD type so it is reachable as `autodiff_core::AutoDiff`
pub use ad::{ad_create, AutoDiff};
pub use error::AutoDiffError;
pub use operand::Operand;
pub use ops::arithmetic::{
    add_op, div_op, mul_op, neg_op, pow_op, pow_scalar, radd_op, rdiv_op, rmul_op, rpow_op,
    rpow_scalar, rsub_op, sub_op,
};
pub use ops::math_elem::{cos_op, exp_op, ln_op, log_base_op, sin_op, sqrt_op, tan_op, tanh_op};
pub use ops::stack::ad_stack;
// Re-export traits required by public functions/structs
pub use ndarray;
pub use num_traits;
