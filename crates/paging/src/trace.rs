use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use log::warn;
use pagesim_error::{errdata, Error};

use crate::typedef::{ProcessId, VirtualAddress};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn is_write(&self) -> bool {
        matches!(self, Operation::Write)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => f.write_str("R"),
            Operation::Write => f.write_str("W"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "R" => Ok(Operation::Read),
            "W" => Ok(Operation::Write),
            _ => errdata!("invalid operation {s:?}, expected R or W"),
        }
    }
}

/// One memory access from the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    pub process: ProcessId,
    pub address: VirtualAddress,
    pub operation: Operation,
}

impl AccessRecord {
    pub fn new(process: ProcessId, address: VirtualAddress, operation: Operation) -> Self {
        Self {
            process,
            address,
            operation,
        }
    }
}

impl FromStr for AccessRecord {
    type Err = Error;

    /// Parses `<pid> <address> <R|W>`.
    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return errdata!("expected 3 fields, got {}", fields.len());
        }

        let process = fields[0]
            .parse()
            .map_err(|_| Error::InvalidData(format!("invalid process id {:?}", fields[0])))?;
        let address = fields[1]
            .parse()
            .map_err(|_| Error::InvalidData(format!("invalid address {:?}", fields[1])))?;
        let operation = fields[2].parse()?;

        Ok(AccessRecord::new(process, address, operation))
    }
}

/// Yields access records from a line-oriented trace.
///
/// Blank lines are ignored. Malformed lines are logged and skipped; only a
/// failure to read from the source is surfaced as an error.
pub struct TraceReader<R> {
    lines: Lines<R>,
    line_number: usize,
    skipped: usize,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl TraceReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::IO(format!("unable to open trace {}: {e}", path.display())))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<AccessRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            match line.parse() {
                Ok(record) => return Some(Ok(record)),
                Err(err) => {
                    warn!("skipping trace line {}: {}", self.line_number, err);
                    self.skipped += 1;
                }
            }
        }
    }
}
