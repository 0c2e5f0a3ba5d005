//! Policy rules, evaluated in a fixed order by [`crate::eval::PolicyEvaluator`].

/// Unconditional block on `git reset --hard`.
pub mod hard_reset;
/// Git must go through the project wrapper once it exists.
pub mod wrapper;

pub use hard_reset::HardResetRule;
pub use wrapper::WrapperRule;

use crate::eval::{CommandContext, Diagnostic, Verdict};

/// A single policy rule: a predicate plus the diagnostic shown when it fires.
///
/// Every rule blocks on match; a command no rule matches is allowed.
pub trait Rule: Send + Sync {
    /// Stable identifier, shown in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the rule fires for this command.
    fn matches(&self, ctx: &CommandContext) -> bool;

    /// The diagnostic for a command this rule matched.
    fn diagnostic(&self, ctx: &CommandContext) -> Diagnostic;

    /// `Some(Block)` if the rule fires, `None` to fall through.
    fn check(&self, ctx: &CommandContext) -> Option<Verdict> {
        self.matches(ctx).then(|| Verdict::Block(self.diagnostic(ctx)))
    }
}
