//! Command-line parsing.

use std::path::PathBuf;

use crate::CliError;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// No arguments: scan standard input line by line.
    Repl,
    /// One path argument: dump every token in the file.
    Dump(PathBuf),
    /// `-h` or `--help`.
    Help,
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [] => Ok(Command::Repl),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [path] => Ok(Command::Dump(PathBuf::from(path))),
        _ => Err(CliError::Usage),
    }
}

/// Long-form usage text for `--help`.
pub fn usage() -> &'static str {
    "Usage: cscan [path]\n\
     \n\
     Scan a C-like source file and print one line per token.\n\
     With no path, read standard input and scan each line as it arrives.\n\
     \n\
     Options:\n  \
       -h, --help    Print this message\n\
     \n\
     Set RUST_LOG (for example RUST_LOG=cscan=debug) to log to stderr.\n"
}
