use clap::Parser;
use std::process::ExitCode;
use unistyle_bin::{cli::Cli, commands};
use unistyle_log::LogConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match unistyle_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        },
    };

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}
