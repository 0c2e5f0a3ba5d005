use regex::Regex;

use crate::config::WrapperConfig;
use crate::error::GateError;
use crate::eval::{CommandContext, Diagnostic};
use crate::parse;
use crate::rules::Rule;

/// The word `git` followed by whitespace.
const GIT_TOKEN_PATTERN: &str = r"\bgit\s+";

/// Requires git to be invoked through the project wrapper, once the wrapper
/// exists in the working directory.
///
/// Default mode looks at the whole string: a command that mentions git is
/// exempt as soon as it contains one `<wrapper> git` call anywhere, so
/// `./runner git status; git push` passes. Strict mode additionally checks
/// every segment on its own, subshells and substitutions included, so it
/// blocks everything default mode blocks and more.
pub struct WrapperRule {
    entry_point: String,
    name: String,
    strict: bool,
    git_token: Regex,
    wrapper_call: Regex,
}

impl WrapperRule {
    pub const NAME: &'static str = "wrapper-required";

    /// Fails when the entry point has no file name (`.`, `./`, empty): there
    /// is no word the wrapper could be called by.
    pub fn from_config(config: &WrapperConfig) -> Result<Self, GateError> {
        let name = config
            .name()
            .ok_or_else(|| {
                GateError::Config(format!(
                    "wrapper entry point has no file name: {:?}",
                    config.entry_point
                ))
            })?
            .to_string();
        let wrapper_call = Regex::new(&format!(
            r"(?:^|[\s/;&|(]){}\s+git\b",
            regex::escape(&name)
        ))?;
        Ok(Self {
            entry_point: config.entry_point.clone(),
            name,
            strict: config.strict,
            git_token: Regex::new(GIT_TOKEN_PATTERN)?,
            wrapper_call,
        })
    }

    /// Whole-string check: mentions git and never calls the wrapper with git.
    fn bypasses_wrapper(&self, command: &str) -> bool {
        self.git_token.is_match(command) && !self.wrapper_call.is_match(command)
    }

    /// Per-segment check: some segment runs git other than as `<wrapper> git`.
    fn any_segment_bypasses(&self, command: &str) -> bool {
        parse::split_compound_command(command)
            .iter()
            .any(|segment| self.segment_bypasses(segment))
    }

    fn segment_bypasses(&self, segment: &str) -> bool {
        let words = parse::command_words(segment);
        let is_wrapper_call = words
            .first()
            .is_some_and(|w| parse::basename(w) == self.name)
            && words.get(1).is_some_and(|w| w == "git");
        !is_wrapper_call && self.git_token.is_match(segment)
    }
}

impl Rule for WrapperRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn matches(&self, ctx: &CommandContext) -> bool {
        let bypasses = self.bypasses_wrapper(ctx.raw)
            || (self.strict && self.any_segment_bypasses(ctx.raw));
        // Probe last: commands that never touch git don't hit the filesystem
        bypasses && ctx.wrapper_present()
    }

    fn diagnostic(&self, ctx: &CommandContext) -> Diagnostic {
        Diagnostic {
            rule: Self::NAME,
            reason: format!(
                "All git commands must use {} in this project",
                self.entry_point
            ),
            attempted: ctx.raw.to_string(),
            hint: format!("Use: {} git <subcommand>", self.entry_point),
        }
    }
}
