use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = taskview::cli::Cli::parse();
    taskview::logging::init_tracing(cli.log_filter.clone())?;

    let config = taskview::config::from_cli(&cli)?;
    tracing::debug!(data_dir = %config.data_dir().display(), "resolved configuration");

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    taskview::commands::execute(&config, cli.command_or_default(), &mut handle)?;

    Ok(())
}
