use chrono::{DateTime, Local, TimeZone};
use colored::Colorize;
use log::LevelFilter;

use crate::prelude::eprintln;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ZONE_FORMAT: &str = "[%Z]";

/// Install the `env_logger` backend
///
/// Progress is logged at `info`, shown with `--verbose`. `RUST_LOG` overrides
/// the level either way.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .try_init();
}

/// `2024-01-31 12:34:56.7890 [+00:00]`, with four fractional digits
///
/// chrono only offers 3, 6 or 9 digit fractions, so the fraction is built from
/// the sub-second microseconds.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // Leap seconds report more than a second's worth of microseconds
    let fraction = (time.timestamp_subsec_micros() / 100).min(9999);
    format!(
        "{}.{:04} {}",
        time.format(TIME_FORMAT),
        fraction,
        time.format(ZONE_FORMAT)
    )
}

pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Print a timestamped error line to stderr
pub fn report_error(context: &str, err: &dyn std::fmt::Display) {
    let label = format!("[ERROR {context}]");
    eprintln!("{} {}: {}", timestamp(), label.as_str().red().bold(), err);
}
