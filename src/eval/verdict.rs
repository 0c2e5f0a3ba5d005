use std::fmt;

/// Exit status telling the host to run the command.
pub const EXIT_ALLOW: i32 = 0;
/// Exit status telling the host to refuse the command.
pub const EXIT_BLOCK: i32 = 2;

/// The gate's decision for one candidate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block(Diagnostic),
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Block(_) => "block",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Allow => EXIT_ALLOW,
            Verdict::Block(_) => EXIT_BLOCK,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Verdict::Block(_))
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Verdict::Allow => None,
            Verdict::Block(d) => Some(d),
        }
    }
}

/// Why a command was blocked, rendered as the three lines the agent sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Identifier of the rule that fired.
    pub rule: &'static str,
    /// Text after `BLOCKED: `.
    pub reason: String,
    /// The command exactly as the agent sent it.
    pub attempted: String,
    /// One-line remediation.
    pub hint: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BLOCKED: {}", self.reason)?;
        writeln!(f, "Attempted: {}", self.attempted)?;
        write!(f, "{}", self.hint)
    }
}
