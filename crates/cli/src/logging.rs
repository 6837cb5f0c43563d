use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Events go to stderr so they never mix with command output. An invalid
/// filter directive is reported and replaced by the default.
pub fn init(filter: &str) -> eyre::Result<()> {
    let (filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::try_new("warn")?, Some(e)),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    if let Some(e) = rejected {
        tracing::warn!("ignoring invalid log filter: {e}");
    }

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
