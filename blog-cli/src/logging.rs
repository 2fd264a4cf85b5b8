use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Уровень, если LOG_LEVEL и RUST_LOG не заданы или не разбираются.
pub const FALLBACK_LEVEL: &str = "warn";

/// Фильтр строится только из уже разрешённого уровня: порядок LOG_LEVEL,
/// затем RUST_LOG задаёт `Settings::from_env`.
fn level_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        return EnvFilter::new(FALLBACK_LEVEL);
    }
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Логи идут в stderr, чтобы не смешиваться с выводом команд.
pub fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(level_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
