use anyhow::Result;
use clap::Parser;
use console::style;
use log::{error, info};
use random_album::cli::Cli;
use random_album::component::RandomAlbum;
use random_album::component::random_album::RunOutcome;
use random_album::config::Config;
use random_album::init;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let outcome = RandomAlbum::new(config).run()?;
    if !matches!(outcome, RunOutcome::Archived(_)) {
        info!("未產生封存檔");
    }

    Ok(())
}
