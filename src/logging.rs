use std::path::Path;

use log::{info, LevelFilter};
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::{Error, Result};

pub const LOG_FILE: &str = "wallpaper.log";
const LOG_ENV: &str = "WALLPAPER_LOG";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;
const ROLL_COUNT: u32 = 5;

/// Send log records to `wallpaper.log` in `log_dir`, appending across runs.
///
/// The level defaults to INFO and can be changed through `WALLPAPER_LOG`.
/// Nothing goes to the console, that is reserved for the run summary.
pub fn init_logger(log_dir: &Path) -> Result<()> {
    let log_file = log_dir.join(LOG_FILE);
    let archive_pattern = log_dir.join("wallpaper.{}.log");

    let roller = FixedWindowRoller::builder()
        .build(&archive_pattern.to_string_lossy(), ROLL_COUNT)
        .map_err(|e| Error::Logging(format!("log roller: {e}")))?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(ROLL_SIZE)),
        Box::new(roller),
    );

    let appender = RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}",
        )))
        .build(&log_file, Box::new(policy))
        .map_err(|e| Error::Logging(format!("log file {}: {e}", log_file.display())))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level_from_env()))
        .map_err(|e| Error::Logging(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| Error::Logging(e.to_string()))?;

    info!("Logging to {}", log_file.display());
    Ok(())
}

fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
