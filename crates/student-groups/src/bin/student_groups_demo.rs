//! Demo binary printing sample departments of students.
//!
//! This binary delegates to `student_groups::demo` for configuration and the
//! demonstration flow, keeping the behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use student_groups::demo::{DemoError, DemoSettings, run};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), DemoError> {
    let settings = DemoSettings::from_args(env::args_os())?;
    let report = run(&settings, &mut io::stdout().lock())?;
    info!(
        drawn = report.drawn,
        groups = report.groups,
        origin = ?report.name_origin,
        "demo finished"
    );
    Ok(())
}
