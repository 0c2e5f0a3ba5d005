pub mod context;
pub mod verdict;

pub use context::CommandContext;
pub use verdict::{Diagnostic, EXIT_ALLOW, EXIT_BLOCK, Verdict};

use crate::config::Config;
use crate::error::GateError;
use crate::probe::Probe;
use crate::rules::{HardResetRule, Rule, WrapperRule};

/// Ordered rule list. The first rule that fires decides; none firing allows.
pub struct PolicyEvaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl PolicyEvaluator {
    /// Build the evaluator from configuration.
    ///
    /// `hard-reset` always comes first; nothing after it can override it.
    pub fn from_config(config: &Config) -> Result<Self, GateError> {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(HardResetRule::new()?),
            Box::new(WrapperRule::from_config(&config.wrapper)?),
        ];
        Ok(Self { rules })
    }

    /// Append a rule after all existing ones.
    pub fn push(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Rule identifiers in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate one candidate command.
    pub fn evaluate(&self, command: &str, probe: &dyn Probe) -> Verdict {
        if command.trim().is_empty() {
            return Verdict::Allow;
        }

        let ctx = CommandContext::new(command, probe);
        for rule in &self.rules {
            if let Some(verdict) = rule.check(&ctx) {
                log::debug!("rule {} matched: {}", rule.name(), command);
                return verdict;
            }
        }
        Verdict::Allow
    }
}

impl std::fmt::Debug for PolicyEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEvaluator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
