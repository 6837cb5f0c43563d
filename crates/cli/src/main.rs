use clap::Parser;
use presence::{logging, Cli, Config};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    logging::init(&config.log_filter)?;
    tracing::debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.command.execute(&config, &mut out)
}
