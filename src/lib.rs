//! Scans lines of text for the fixed pattern `foo`.
//!
//! The `foogrep` binary wires standard input through [`scan_reader`] and
//! reports the result via its exit status alone.

pub mod scanner;

pub use scanner::{scan_lines, scan_reader, MatchState, PATTERN};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read line from input: {0}")]
    ReadLine(#[from] std::io::Error),
}
