use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// `level` is parsed as a [`LevelFilter`]; anything unrecognised falls back to INFO.
/// Format: `[YYYY-mm-dd HH:MM:SS] [LEVEL] message`
pub fn init_logger(level: &str) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(parse_level(level))
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
