//! gitgate: a PreToolUse hook that vets a shell command before the agent runs it.
//!
//! The hook reads a JSON envelope, pulls out `tool_input.command`, and runs it
//! through an ordered list of rules. The first rule that fires blocks the
//! command (exit 2, diagnostic on stderr); otherwise it is allowed (exit 0).
//! Anything that goes wrong inside the gate allows.
//!
//! # Rules
//!
//! 1. **`hard-reset`**: `git reset --hard` is blocked everywhere, always.
//! 2. **`wrapper-required`**: once the project wrapper (default `./runner`)
//!    exists in the working directory, git must be called as `./runner git ...`.
//!
//! # Architecture
//!
//! - **[`envelope`]**: Hook input: JSON envelope → candidate command.
//! - **[`eval`]**: Policy evaluator, verdict and exit codes.
//! - **[`rules`]**: The rules themselves.
//! - **[`probe`]**: Injectable check for the wrapper entry point.
//! - **[`hook`]**: Fail-open runner tying the above together.
//! - **[`parse`]**: Compound-command splitting for strict wrapper mode.
//! - **[`config`]**: Embedded defaults + user overlay merge.
//! - **[`logging`]**: Decision logging to `~/.local/share/gitgate/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Hook envelope parsing.
pub mod envelope;
/// Internal error type.
pub mod error;
/// Policy evaluator: ordered rules, verdicts, per-command context.
pub mod eval;
/// Fail-open hook runner and diagnostic output.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Shell command splitting and tokenizing.
pub mod parse;
/// Wrapper entry point probe.
pub mod probe;
/// Policy rules.
pub mod rules;

use eval::{PolicyEvaluator, Verdict};

/// Evaluate a command against the default config with a fixed probe answer.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with user config, build the evaluator directly.
pub fn evaluate(command: &str, wrapper_present: bool) -> Verdict {
    let config = config::Config::default_config();
    let probe = move || wrapper_present;
    hook::fail_open(
        PolicyEvaluator::from_config(&config).map(|evaluator| evaluator.evaluate(command, &probe)),
    )
}
