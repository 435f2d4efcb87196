//! Text trace format.
//!
//! ```text
//! 8        <- p: total pages
//! 3        <- m: frames
//! 2        <- c: working-set threshold
//! 1 1 R    <- page time mode
//! 2 2 W
//! ```
//!
//! Blank lines are skipped everywhere. Line numbers in errors are 1-based
//! and count blank lines.

use std::io::BufRead;

use crate::common::{Error, PageId, Result};
use crate::trace::{AccessRecord, Trace, TraceHeader};

/// Parse a complete trace from a buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Trace> {
    let mut header = [0i64; 3];
    let mut header_len = 0;
    let mut accesses = Vec::new();
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if header_len < header.len() {
            header[header_len] = parse_header_value(text, line_no)?;
            header_len += 1;
        } else {
            accesses.push(parse_access(text, line_no)?);
        }
    }

    if header_len < header.len() {
        return Err(Error::MalformedHeader {
            line: last_line + 1,
            reason: format!("expected 3 header values, found {}", header_len),
        });
    }

    Ok(Trace {
        header: TraceHeader {
            total_pages: header[0],
            frames: header[1],
            ws_threshold: header[2],
        },
        accesses,
    })
}

fn parse_header_value(text: &str, line: usize) -> Result<i64> {
    text.parse::<i64>().map_err(|_| Error::MalformedHeader {
        line,
        reason: format!("expected an integer, found '{}'", text),
    })
}

/// Parse one `page time mode` line.
pub(crate) fn parse_access(text: &str, line: usize) -> Result<AccessRecord> {
    let malformed = |reason: String| Error::MalformedAccess { line, reason };

    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 fields (page time mode), found {}",
            fields.len()
        )));
    }

    let page = fields[0].parse::<u64>().map_err(|_| {
        malformed(format!(
            "invalid page '{}' (expected an integer in 0..={})",
            fields[0],
            u64::MAX
        ))
    })?;
    let time = fields[1]
        .parse::<i64>()
        .map_err(|_| malformed(format!("invalid time '{}'", fields[1])))?;
    let is_write = match fields[2] {
        "W" => true,
        "R" => false,
        other => return Err(malformed(format!("unknown mode '{}'", other))),
    };

    Ok(AccessRecord {
        page: PageId::new(page),
        time,
        is_write,
    })
}
