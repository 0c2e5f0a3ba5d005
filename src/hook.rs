//! One hook invocation: envelope in, verdict out.
//!
//! The gate fails open. Any error before a rule gets to decide (unreadable
//! stdin, bad JSON) resolves to [`Verdict::Allow`] here, explicitly, rather
//! than escaping to the host.

use std::io::{Read, Write};

use crate::envelope;
use crate::error::GateError;
use crate::eval::{PolicyEvaluator, Verdict};
use crate::logging;
use crate::probe::Probe;

/// Read the envelope from `reader` and evaluate it. Never fails.
pub fn run<R: Read>(reader: R, evaluator: &PolicyEvaluator, probe: &dyn Probe) -> Verdict {
    fail_open(try_run(reader, evaluator, probe))
}

/// Read the envelope, evaluate it and log the decision.
pub fn try_run<R: Read>(
    reader: R,
    evaluator: &PolicyEvaluator,
    probe: &dyn Probe,
) -> Result<Verdict, GateError> {
    let command = envelope::read_command(reader)?;
    let verdict = evaluator.evaluate(&command, probe);
    logging::log_decision(&command, &verdict);
    Ok(verdict)
}

/// Map any gate failure to `Allow`.
pub fn fail_open(result: Result<Verdict, GateError>) -> Verdict {
    result.unwrap_or_else(|e| {
        log::warn!("failing open: {e}");
        Verdict::Allow
    })
}

/// Write the diagnostic for a blocked command. Writes nothing on `Allow`.
pub fn emit<W: Write>(verdict: &Verdict, out: &mut W) -> std::io::Result<()> {
    if let Some(d) = verdict.diagnostic() {
        writeln!(out, "{d}")?;
    }
    Ok(())
}
