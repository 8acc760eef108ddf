use std::process::ExitCode;

use chess_rules::shell;

fn main() -> ExitCode {
    env_logger::init();
    match shell::run_shell_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
