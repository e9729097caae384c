// Elementary functions: value f(x), derivative f'(x) * x.der, row by row.
pub mod exp;
pub mod ln;
pub mod sqrt;
pub mod tanh;
pub mod trig;

// Re-export the public functions
pub use exp::exp_op;
pub use ln::{ln_op, log_base_op};
pub use sqrt::sqrt_op;
pub use tanh::tanh_op;
pub use trig::{cos_op, sin_op, tan_op};
