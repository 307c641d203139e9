use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Process-wide log settings, applied once by [`init`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl LogConfig {
    pub fn level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::INFO }
    }
}

/// Install the global subscriber: timestamped lines on stderr.
///
/// `RUST_LOG` directives are applied on top of the configured level.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.level().into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
