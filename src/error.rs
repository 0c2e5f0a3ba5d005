use thiserror::Error;

/// Internal failures of the gate.
///
/// None of these ever reach the host: [`crate::hook::run`] resolves every
/// variant to [`crate::eval::Verdict::Allow`].
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to read hook input: {0}")]
    ReadInput(#[from] std::io::Error),

    #[error("hook input is not valid JSON: {0}")]
    ParseEnvelope(#[from] serde_json::Error),

    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("config error: {0}")]
    Config(String),
}
