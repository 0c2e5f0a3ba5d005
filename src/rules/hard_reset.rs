use regex::Regex;

use crate::eval::{CommandContext, Diagnostic};
use crate::rules::Rule;

/// `git reset --hard` anywhere in the string, any whitespace between words.
const HARD_RESET_PATTERN: &str = r"\bgit\s+reset\s+--hard\b";

/// Blocks `git reset --hard` everywhere, wrapper or not.
///
/// Never consults the environment probe and has no configuration.
pub struct HardResetRule {
    pattern: Regex,
}

impl HardResetRule {
    pub const NAME: &'static str = "hard-reset";

    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(HARD_RESET_PATTERN)?,
        })
    }
}

impl Rule for HardResetRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn matches(&self, ctx: &CommandContext) -> bool {
        self.pattern.is_match(ctx.raw)
    }

    fn diagnostic(&self, ctx: &CommandContext) -> Diagnostic {
        Diagnostic {
            rule: Self::NAME,
            reason: "git reset --hard is NEVER allowed for AI agents".into(),
            attempted: ctx.raw.to_string(),
            hint: "Only the user can run this command directly.".into(),
        }
    }
}
