//! Per-species output targets.
//!
//! The validate pass talks to the operator on the console; the commit pass
//! appends the same narrative to the species' own log file, which later
//! becomes part of that player's turn report.

use crate::error::TurnError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Which pass of a run is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Validate,
    Commit,
}

/// Output target for one species' production narrative.
pub enum TurnLog {
    Console,
    File(BufWriter<File>),
}

impl TurnLog {
    pub fn console() -> Self {
        TurnLog::Console
    }

    /// Open a species log for append, creating it if absent. Failure here
    /// is fatal to the run: a commit pass that cannot record what it did
    /// must not do it.
    pub fn append_file(path: &Path) -> Result<Self, TurnError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| TurnError::LogOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(TurnLog::File(BufWriter::new(file)))
    }

    /// Write the per-species banner that opens every production narrative.
    pub fn write_banner(&mut self, econ_units: u32) -> io::Result<()> {
        writeln!(self, "\nProduction orders:")?;
        writeln!(
            self,
            "\n  Number of economic units at start of turn: {econ_units}\n"
        )
    }
}

impl Write for TurnLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            TurnLog::Console => io::stdout().write(buf),
            TurnLog::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            TurnLog::Console => io::stdout().flush(),
            TurnLog::File(file) => file.flush(),
        }
    }
}
