//! Main application entry point.

use clap::Parser;
use scribboard_app::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Scribboard");

    let args = Args::parse();
    let stdout = std::io::stdout();
    match scribboard_app::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session failed: {e}");
            eprintln!("scribboard: {e}");
            ExitCode::FAILURE
        }
    }
}
