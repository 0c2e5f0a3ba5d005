use std::cell::OnceCell;

use crate::probe::Probe;

/// Everything a rule may look at for one candidate command.
///
/// The environment probe runs at most once, and only if a rule asks.
pub struct CommandContext<'a> {
    /// The candidate command, verbatim.
    pub raw: &'a str,
    probe: &'a dyn Probe,
    wrapper_present: OnceCell<bool>,
}

impl<'a> CommandContext<'a> {
    pub fn new(raw: &'a str, probe: &'a dyn Probe) -> Self {
        Self {
            raw,
            probe,
            wrapper_present: OnceCell::new(),
        }
    }

    /// Whether the project wrapper entry point exists.
    pub fn wrapper_present(&self) -> bool {
        *self
            .wrapper_present
            .get_or_init(|| self.probe.wrapper_present())
    }
}

impl std::fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("raw", &self.raw)
            .field("wrapper_present", &self.wrapper_present.get())
            .finish()
    }
}
