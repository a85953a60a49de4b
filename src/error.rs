use crate::tables::TableError;

/// Errors raised while building or evaluating an attenuation model.
///
/// All of them are local evaluation failures: nothing is retried internally
/// and the caller (typically a fitting loop) decides what to do next.
#[derive(Debug, thiserror::Error)]
pub enum AttenuationError {
    #[error(
        "input {quantity} outside of range defined for {model} [{min} <= {quantity} <= {max}, {quantity} has units {unit}]: offending values {offending:?}"
    )]
    OutOfRange {
        model: String,
        quantity: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        offending: Vec<f64>,
    },

    #[error("parameter {name} must be {requirement} (got {value})")]
    InvalidParameter {
        name: &'static str,
        requirement: String,
        value: f64,
    },

    #[error("unsupported {key} '{value}', expected one of: {}", .choices.join(", "))]
    UnsupportedConfiguration {
        key: &'static str,
        value: String,
        choices: Vec<&'static str>,
    },

    #[error("{model} takes {expected} parameters, got {got}")]
    ParameterCount {
        model: String,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}
