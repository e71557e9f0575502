mod app;
mod cli;
mod prompt;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    cloud_logging::initialize(&args.log_settings());

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cloud_logging::cloud_error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
