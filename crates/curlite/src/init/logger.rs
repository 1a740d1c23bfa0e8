use core::fmt::Display;

use anyhow::Result;
use chrono::SecondsFormat;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logs go to stderr; stdout is reserved for the request summary and the raw
/// response.
///
/// `level` applies to this crate. Dependencies never log below `warn`.
pub fn init(level: LevelFilter, colored: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let line = if colored {
                format_line(&timestamp(), colors.color(record.level()), record.target(), message)
            } else {
                format_line(&timestamp(), record.level(), record.target(), message)
            };
            out.finish(format_args!("{line}"))
        })
        .level(level.min(LevelFilter::Warn))
        .level_for(env!("CARGO_CRATE_NAME"), level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `<time> <LEVEL> <target>: <message>`, one line per record.
fn format_line(time: &str, level: impl Display, target: &str, message: impl Display) -> String {
    format!("{time} {level} {target}: {message}")
}
