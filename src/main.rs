use std::process::ExitCode;

use clap::Parser;

use shadesync::app;
use shadesync::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match app::run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::warn!("{failed} setting(s) failed; see the messages above");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(2)
        }
    }
}
