//! Logger setup.

use std::path::Path;

use log::LevelFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "GLLAB_LOG";

/// Picks the level: a valid `GLLAB_LOG` value wins over the configured one.
pub fn effective_level(configured: LevelFilter, env_value: Option<&str>) -> LevelFilter {
    env_value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(configured)
}

/// Installs the global logger, writing to stderr and, if given, appending to `file`.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), fern::InitError> {
    let level = effective_level(level, std::env::var(LOG_ENV).ok().as_deref());

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{:<5}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    log::debug!("Logging at {} level", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_level() {
        assert_eq!(
            effective_level(LevelFilter::Info, Some("debug")),
            LevelFilter::Debug
        );
        assert_eq!(effective_level(LevelFilter::Warn, None), LevelFilter::Warn);
        assert_eq!(
            effective_level(LevelFilter::Warn, Some("nonsense")),
            LevelFilter::Warn
        );
    }
}
