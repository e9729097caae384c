// src/ad/math_methods.rs

use crate::ad::AutoDiff;
use crate::error::AutoDiffError;
use crate::ops::arithmetic::{pow_op, pow_scalar, rpow_scalar};
use crate::ops::math_elem::{cos_op, exp_op, ln_op, log_base_op, sin_op, sqrt_op, tan_op, tanh_op};

// Method forms of the elementary functions, so expressions read `(a * b).sin()`.
impl AutoDiff {
    pub fn sin(&self) -> AutoDiff {
        sin_op(self)
    }

    pub fn cos(&self) -> AutoDiff {
        cos_op(self)
    }

    pub fn tan(&self) -> AutoDiff {
        tan_op(self)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> AutoDiff {
        ln_op(self)
    }

    /// Alias of [`AutoDiff::ln`].
    pub fn log(&self) -> AutoDiff {
        ln_op(self)
    }

    pub fn log_base(&self, base: f64) -> AutoDiff {
        log_base_op(self, base)
    }

    pub fn exp(&self) -> AutoDiff {
        exp_op(self)
    }

    pub fn sqrt(&self) -> AutoDiff {
        sqrt_op(self)
    }

    pub fn tanh(&self) -> AutoDiff {
        tanh_op(self)
    }

    /// Raises every component to the constant power `exponent`.
    pub fn powf(&self, exponent: f64) -> AutoDiff {
        pow_scalar(self, exponent)
    }

    /// `base ^ self`, with `self` as the exponent.
    pub fn exp_base(&self, base: f64) -> AutoDiff {
        rpow_scalar(base, self)
    }

    /// Raises `self` to an AD-valued power, differentiating through both base
    /// and exponent.
    pub fn pow(&self, exponent: &AutoDiff) -> Result<AutoDiff, AutoDiffError> {
        pow_op(self, exponent)
    }
}
