use crate::error::CaseforgeError;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Initialize console logging
///
/// # Arguments
/// * `log_level` - Log level (trace, debug, info, warn, error);
///   the RUST_LOG env var takes precedence
pub fn setup_logging(log_level: &str) -> Result<(), CaseforgeError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| {
            CaseforgeError::config(format!("Failed to initialize logging: {}", e))
        })?;

    tracing::info!("Console logging initialized: level={}", log_level);

    Ok(())
}
