//! Access traces.
//!
//! A [`Trace`] is the unit of work for the simulator: a raw header of
//! three integers and the ordered list of [`AccessRecord`]s. The header is
//! kept unvalidated here; [`Trace::config`] turns it into a
//! [`SimConfig`] so that parameter errors are reported per trace.

mod parser;
mod record;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub use record::AccessRecord;

use crate::common::{Result, SimConfig};

/// The three leading integers of a trace file, as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceHeader {
    /// `p`: total distinct pages.
    pub total_pages: i64,
    /// `m`: frame capacity.
    pub frames: i64,
    /// `c`: working-set age threshold.
    pub ws_threshold: i64,
}

/// A parsed access trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub header: TraceHeader,
    pub accesses: Vec<AccessRecord>,
}

impl Trace {
    /// Build a trace from already-typed parts.
    pub fn new(header: TraceHeader, accesses: Vec<AccessRecord>) -> Self {
        Self { header, accesses }
    }

    /// Parse a trace from its text form.
    ///
    /// # Example
    /// ```
    /// use pagesim::Trace;
    ///
    /// let trace = Trace::parse("4\n2\n1\n1 1 R\n2 2 W\n").unwrap();
    /// assert_eq!(trace.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_reader(text.as_bytes())
    }

    /// Parse a trace from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        parser::parse_reader(reader)
    }

    /// Open and parse a trace file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        parser::parse_reader(BufReader::new(file))
    }

    /// Validate the header into simulation parameters.
    pub fn config(&self) -> Result<SimConfig> {
        SimConfig::new(
            self.header.total_pages,
            self.header.frames,
            self.header.ws_threshold,
        )
    }

    /// Number of access records.
    #[inline]
    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }
}
