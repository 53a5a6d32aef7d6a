use anyhow::Context;
use clap::Parser;
use std::io;
use strand::{Config, EditorSession};
use strand_bin::{cli::Cli, repl};
use strand_log::LogConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_guard = strand_log::init(LogConfig {
        log_file_path: cli.log_file,
    })
    .map_err(|e| anyhow::anyhow!(e))?;

    let config = match &cli.config {
        Some(path) => Config::load(path).context("loading config")?,
        None => Config::default(),
    };

    tracing::info!(log_file = %log_guard.log_file.display(), "strand starting");

    let mut session =
        EditorSession::with_text(cli.text.as_deref().unwrap_or("")).with_marker(config.marker());

    let stdin = io::stdin();
    repl::run(
        &mut session,
        &config.prompt.text,
        stdin.lock(),
        io::stdout(),
    )
    .context("prompt loop")?;

    tracing::info!("strand exiting");
    Ok(())
}
