// Console logging for the runner (log4rs, ISO 8601 timestamps, colored level tag)

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

/// Install the global logger. Fails only if a logger is already installed or
/// the configuration is rejected.
pub fn init(level: LevelFilter) -> Result<(), String> {
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("failed to build log config: {e}"))?;
    log4rs::init_config(config).map_err(|e| format!("failed to install logger: {e}"))?;
    Ok(())
}
