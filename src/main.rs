//! gitgate: PreToolUse hook.
//!
//! Reads the tool-call envelope from stdin. Exits 2 with a diagnostic on
//! stderr when a rule blocks the command, 0 otherwise, including when the
//! gate itself fails.

use gitgate::config::Config;
use gitgate::eval::{EXIT_ALLOW, PolicyEvaluator};
use gitgate::probe::FsProbe;
use gitgate::{hook, logging};

fn main() {
    // A panic is a gate failure like any other: allow, and keep stderr clean
    std::panic::set_hook(Box::new(|info| log::error!("panic: {info}")));
    let code = std::panic::catch_unwind(run).unwrap_or(EXIT_ALLOW);
    std::process::exit(code);
}

fn run() -> i32 {
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default_config(), Some(e)),
    };
    logging::init(&config.settings);
    if let Some(e) = config_err {
        log::warn!("ignoring user config: {e}");
    }

    let evaluator = match PolicyEvaluator::from_config(&config) {
        Ok(evaluator) => evaluator,
        Err(e) => {
            log::warn!("failing open: {e}");
            return EXIT_ALLOW;
        }
    };
    let probe = FsProbe::from_config(&config.wrapper);

    let verdict = hook::run(std::io::stdin().lock(), &evaluator, &probe);
    if let Err(e) = hook::emit(&verdict, &mut std::io::stderr().lock()) {
        log::debug!("cannot write diagnostic: {e}");
    }
    verdict.exit_code()
}
