#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match rulecast_cli::run_from_env() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", rulecast_cli::error_line(&error));
            ExitCode::FAILURE
        }
    }
}
