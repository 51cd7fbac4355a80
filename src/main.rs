use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = keep_writing::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
