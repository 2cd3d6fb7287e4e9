use crate::domain::parameters::ModelParameters;

/// Default parameters with the given hiring plan and a matching horizon.
pub fn params_with_plan(hiring_plan: Vec<u32>) -> ModelParameters {
    ModelParameters::with_hiring_plan(hiring_plan)
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected}, but got {actual}"
    );
}
