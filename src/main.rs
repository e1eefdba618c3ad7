//! Binary entry point for `circ`.
//!
//! Thin shim: all argument parsing and dispatch lives in [`circulate::cli`].

use std::process::ExitCode;

fn main() -> ExitCode {
    match circulate::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            circulate::ui::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
