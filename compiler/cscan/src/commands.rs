//! Driver entry points: dump a file, or scan standard input line by line.

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use cscan_lexer::SourceBuffer;
use tracing::debug;

use crate::dump::{dump_tokens, DumpStats};
use crate::CliError;

/// Read a whole source file as raw bytes.
///
/// Failing to open maps to [`CliError::OpenFile`]; a failed read or a file
/// longer than [`SourceBuffer::MAX_LEN`] maps to [`CliError::ReadFile`].
/// The contents need not be UTF-8.
pub fn read_source(path: &Path) -> Result<Vec<u8>, CliError> {
    let read_error = |source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(|source| CliError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    if let Ok(meta) = file.metadata() {
        check_source_len(meta.len()).map_err(read_error)?;
    }

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(read_error)?;
    check_source_len(bytes.len() as u64).map_err(read_error)?;
    Ok(bytes)
}

/// Reject sources the scanner would have to truncate.
fn check_source_len(len: u64) -> io::Result<()> {
    if len > SourceBuffer::MAX_LEN as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "source is {len} bytes, limit is {} bytes",
                SourceBuffer::MAX_LEN
            ),
        ));
    }
    Ok(())
}

/// Dump every token of the file at `path` to `out`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn run_file<W: Write>(path: &Path, out: &mut W) -> Result<DumpStats, CliError> {
    let content = read_source(path)?;
    let source = SourceBuffer::from_bytes(&content);
    if !source.interior_nulls().is_empty() {
        debug!(
            count = source.interior_nulls().len(),
            "source contains NUL bytes"
        );
    }

    let stats = dump_tokens(&source, out)?;
    out.flush()?;
    debug!(
        bytes = source.len(),
        tokens = stats.tokens,
        errors = stats.errors,
        keywords = stats.keywords,
        literals = stats.literals,
        operators = stats.operators,
        lines = stats.last_line,
        "scanned file"
    );
    Ok(stats)
}

/// Scan `input` one line at a time, dumping each line with a fresh scanner.
///
/// Each line keeps its trailing newline, so its dump ends with `Eof` on
/// line 2. Lines are scanned as raw bytes, exactly as in file mode. At end
/// of input a single newline is written.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_repl<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<(), CliError> {
    let mut bytes = Vec::new();
    let mut lines = 0u32;

    loop {
        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(out)?;
            out.flush()?;
            debug!(lines, "end of input");
            return Ok(());
        }
        lines += 1;

        let source = SourceBuffer::from_bytes(&bytes);
        let stats = dump_tokens(&source, out)?;
        out.flush()?;
        debug!(
            line = lines,
            tokens = stats.tokens,
            errors = stats.errors,
            "scanned line"
        );
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
