//! Logging subscriber initialisation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::ServerConfig, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_subscriber(config: &ServerConfig) -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(true))
        .with(build_env_filter(config)?)
        .try_init()?;

    Ok(())
}

fn build_env_filter(config: &ServerConfig) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(format!(
            "{},hyper=warn,tower_http=warn",
            config.log_level
        ))?),
    }
}
