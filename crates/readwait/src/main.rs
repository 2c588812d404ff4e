use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use readwait_core::{
    run_filter, spawn_traced, FileSizeOracle, FilterOutcome, StallPolicy, TargetState, TracedProcess,
};
use readwait_utils::{error, info, init_logging};

/// Everything worked: the watched file was closed, or the monitor gave up
/// cleanly and left the target running.
const EXIT_SUCCESS: i32 = 0;
/// The command line could not be parsed.
const EXIT_USAGE: i32 = 1;
/// The traced child could not be created.
const EXIT_SPAWN: i32 = 2;
/// The monitoring loop failed, most commonly because the target exited
/// while still being traced.
const EXIT_TRACE: i32 = 4;

/// Run a program and make its reads of one file wait for the file to grow.
#[derive(Parser, Debug)]
#[command(name = "readwait")]
#[command(version)]
#[command(about = "Run a program whose reads of one file wait for the file to grow", long_about = None)]
struct Cli
{
    /// Path of the file whose reads should wait for growth.
    /// Matched byte-for-byte against the paths the target opens.
    file: OsString,

    /// Program to run under the monitor
    command: OsString,

    /// Arguments passed to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,

    /// Seconds to sleep between growth re-checks while a read is held
    #[arg(long, default_value_t = 10)]
    stall_delay: u64,

    /// How many delayed growth re-checks to attempt before giving up
    #[arg(long, default_value_t = 1)]
    stall_retries: u32,
}

fn main()
{
    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to INFO level and Pretty format if not set
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_TRACE);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = err.print();
            process::exit(code);
        }
    };

    process::exit(run(cli));
}

fn run(cli: Cli) -> i32
{
    let policy = StallPolicy {
        delay: Duration::from_secs(cli.stall_delay),
        max_retries: cli.stall_retries,
    };

    let pid = match spawn_traced(&cli.command, &cli.args) {
        Ok(pid) => pid,
        Err(err) => {
            error!("could not create traced child: {}", err);
            return EXIT_SPAWN;
        }
    };
    info!("running {} as pid {}", cli.command.to_string_lossy(), pid);

    let mut target = TracedProcess::new(pid);
    if let Err(err) = target.wait_initial_stop() {
        error!("target never reached its first stop: {}", err);
        return EXIT_TRACE;
    }

    let mut state = TargetState::new(cli.file.as_bytes().to_vec());
    let mut oracle = FileSizeOracle::new(PathBuf::from(&cli.file));

    match run_filter(&mut target, &mut oracle, &mut state, &policy) {
        Ok(FilterOutcome::FileClosed) => {
            info!(
                consumed = state.bytes_consumed(),
                "watched file closed; monitoring complete"
            );
            EXIT_SUCCESS
        }
        Ok(FilterOutcome::GaveUp) => {
            info!(
                consumed = state.bytes_consumed(),
                "gave up waiting for growth; target continues untraced"
            );
            EXIT_SUCCESS
        }
        Err(err) => {
            error!("monitoring failed: {}", err);
            EXIT_TRACE
        }
    }
}
