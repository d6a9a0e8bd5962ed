//! slowlog-advisor binary
//!
//! Exit codes: 0 success, 1 failure, 2 configuration or data_root error.

use clap::Parser;

use slowlog_advisor::cli::{self, Args, ExitCode};

fn main() {
    let args = Args::parse();
    let exit_code = run(args);
    std::process::exit(exit_code);
}

/// Everything that must be dropped before `exit` (the log guard) lives here
fn run(args: Args) -> ExitCode {
    let session = match cli::prepare(&args) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    let log_dir = session.config.log_dir(&session.data_root);
    let _guard = match cli::init_logging(args.verbose, log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    cli::run_command(&args.command, &session, args.json)
}
