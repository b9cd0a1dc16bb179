//! cscan CLI
//!
//! `cscan` scans standard input line by line; `cscan <path>` dumps a file.

use std::io::{self, Write};

use cscan::{init_tracing, parse_args, run_file, run_repl, usage, CliError, Command};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            out.write_all(usage().as_bytes())?;
            out.flush()?;
        }
        Command::Dump(path) => {
            run_file(&path, &mut out)?;
        }
        Command::Repl => {
            run_repl(io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}
