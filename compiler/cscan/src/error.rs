//! Driver errors.
//!
//! Lexical problems never show up here; they are ordinary tokens in the
//! dump. These cover the command line and file I/O only.

use std::io;
use std::path::PathBuf;

/// Error returned by the `cscan` driver entry points.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrong number of command-line arguments.
    #[error("Usage: cscan [path]")]
    Usage,

    /// The file could not be opened (missing, permissions, not a file).
    #[error("Could not open file \"{}\".", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but could not be read in full, or is too large to scan.
    #[error("Could not read file \"{}\".", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the dump or reading interactive input failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage
            | CliError::OpenFile { .. }
            | CliError::ReadFile { .. }
            | CliError::Io(_) => 1,
        }
    }
}
