use autodiff_core::{ad_create, AutoDiff};

// Shared helpers for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeds `values` as independent variables, panicking on failure.
#[allow(dead_code)]
pub fn vars(values: &[f64]) -> Vec<AutoDiff> {
    init_logger();
    ad_create(values).expect("Test variable creation failed")
}
