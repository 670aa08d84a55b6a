use std::env;

use log::{LevelFilter, Metadata, Record};

/// Variable read by [`init_logging`].
pub const LOG_ENV: &str = "BINGO_LOG";

/// Writes `LEVEL [module] message` lines to stderr, leaving stdout to the
/// card display and the simulator's JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("bingo::").unwrap_or(target);
        eprintln!("{:<5} [{}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`; `info` when missing or unparsable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level given by `BINGO_LOG`
/// (`off`, `error`, `warn`, `info`, `debug`, `trace`).
///
/// Calling it twice keeps the first logger. Returns the level in effect.
pub fn init_logging() -> LevelFilter {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    log::max_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
        assert_eq!(level_from(Some(" debug ")), LevelFilter::Debug);
        assert_eq!(level_from(Some("OFF")), LevelFilter::Off);
    }
}
