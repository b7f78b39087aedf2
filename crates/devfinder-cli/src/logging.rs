use devfinder_core::Environment;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the configured
/// level. Output goes to stderr so stdout only carries rendered profiles;
/// production logs are JSON.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive.
pub fn init_logging(env: Environment, log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(env != Environment::Production);

    if env == Environment::Production {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::debug!(%env, "logging initialized");
    Ok(())
}
