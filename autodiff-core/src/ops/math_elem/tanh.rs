use crate::ad::AutoDiff;
use crate::ops::apply_unary_op;

/// Element-wise hyperbolic tangent: derivative `(1 - tanh(x)^2) * x.der`.
pub fn tanh_op(x: &AutoDiff) -> AutoDiff {
    apply_unary_op(x, f64::tanh, |v| 1.0 - v.tanh().powi(2), "tanh_op")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::create::ad_create;
    use crate::utils::testing::check_ad_near;

    #[test]
    fn test_tanh() {
        let vars = ad_create(&[0.0, 2.0]).unwrap();
        check_ad_near(&tanh_op(&vars[0]), &[0.0], &[vec![1.0, 0.0]], 1e-12);
        let t = 2.0_f64.tanh();
        check_ad_near(&tanh_op(&vars[1]), &[t], &[vec![0.0, 1.0 - t * t]], 1e-12);
    }
}
