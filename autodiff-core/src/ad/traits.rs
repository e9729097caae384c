// src/ad/traits.rs

use crate::ad::AutoDiff;
use approx::{AbsDiffEq, RelativeEq};

// --- Approximate comparisons ---
// Values and derivatives are compared elementwise; differing shapes never compare equal.

impl AbsDiffEq for AutoDiff {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.val.abs_diff_eq(&other.val, epsilon) && self.der.abs_diff_eq(&other.der, epsilon)
    }
}

impl RelativeEq for AutoDiff {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.val.relative_eq(&other.val, epsilon, max_relative)
            && self.der.relative_eq(&other.der, epsilon, max_relative)
    }
}
