use crate::ad::AutoDiff;

/// Negates an AD value: value `-x.val`, derivative `-x.der`.
pub fn neg_op(x: &AutoDiff) -> AutoDiff {
    AutoDiff::from_parts_unchecked(-x.val(), -x.der())
}
