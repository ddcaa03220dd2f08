use std::process::ExitCode;

use clap::Parser;
use chore::cli::commands::Cli;
use chore::cli::handlers;
use chore::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = match Session::open(cli.config.as_deref(), cli.data_dir.as_deref(), cli.ephemeral)
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        // No subcommand → launch TUI
        None => chore::tui::run(&session),
        Some(command) => handlers::dispatch(command, &session, cli.json),
    };

    // The session has to drop before exit so buffered log records get flushed
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
