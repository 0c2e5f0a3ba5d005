use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;
use crate::eval::Verdict;

/// Decision log location, relative to `$HOME`.
const LOG_DIR: &str = ".local/share/gitgate";
const LOG_FILE: &str = "decisions.log";

/// Route `log` records to ~/.local/share/gitgate/decisions.log.
///
/// Best-effort: failures leave logging disabled (logging must never block
/// the hook). Nothing is ever written to stderr, which belongs to the
/// diagnostic the agent reads.
pub fn init(settings: &Settings) {
    if !settings.log_decisions {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let Some(file) = open_log(&log_path(Path::new(&home))) else {
        return;
    };

    // A bad level in the overlay still logs, at info, so the mistake is visible
    let (level, level_err) = match settings.level() {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Info, Some(e)),
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_format_rfc3339()
        .build();
    if WriteLogger::init(level, config, file).is_err() {
        return;
    }
    if let Some(e) = level_err {
        log::warn!("{e}");
    }
}

/// Where decisions are logged under the given home directory.
pub fn log_path(home: &Path) -> PathBuf {
    home.join(LOG_DIR).join(LOG_FILE)
}

fn open_log(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Record one decision as a single tab-separated line.
pub fn log_decision(command: &str, verdict: &Verdict) {
    log::info!("{}", format_decision(command, verdict));
}

/// `decision<TAB>command<TAB>rule: reason`, command capped at 200 chars.
pub fn format_decision(command: &str, verdict: &Verdict) -> String {
    let cmd: String = command
        .chars()
        .take(200)
        .collect::<String>()
        .replace(['\n', '\t'], " ");
    let reason = match verdict.diagnostic() {
        Some(d) => format!("{}: {}", d.rule, d.reason),
        None => "no rule matched".to_string(),
    };
    format!("{}\t{cmd}\t{reason}", verdict.as_str())
}
