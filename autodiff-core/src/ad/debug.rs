// src/ad/debug.rs
use crate::ad::AutoDiff;
use std::fmt;

/// Row-major rendering: `AutoDiff(val=[..], der=[[..], ..])`.
impl fmt::Display for AutoDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AutoDiff(val={:?}, der=[", self.val.to_vec())?;
        for (i, row) in self.der.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", row.to_vec())?;
        }
        write!(f, "])")
    }
}
