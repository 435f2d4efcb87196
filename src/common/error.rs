//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Errors are reported per trace. A failing trace never affects the
/// results of other traces in the same batch.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a trace or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One of the three leading parameter lines is missing or not an integer.
    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },

    /// An access line has a bad page, time or mode field.
    #[error("Malformed access at line {line}: {reason}")]
    MalformedAccess { line: usize, reason: String },

    /// A simulation parameter is out of range (e.g. zero frames).
    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: i64 },
}
