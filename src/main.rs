//! Slate CLI - minimal in-memory task list for the terminal

use std::process::ExitCode;

use slate_cli::TaskError;

fn main() -> ExitCode {
    if let Err(e) = slate_cli::cli::run() {
        if e.downcast_ref::<TaskError>().is_some() {
            eprintln!("Error: {:#}", e);
        } else {
            eprintln!("Unexpected error: {:#}", e);
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
