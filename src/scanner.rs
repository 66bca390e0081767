//! Line scanner: feeds lines through a two-state accumulator.

use std::io::BufRead;

use crate::Error;

/// The fixed literal pattern every line is tested against.
pub const PATTERN: &str = "foo";

/// Scan accumulator. `Found` is absorbing: once a line matches, later lines
/// cannot revert the state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MatchState {
    #[default]
    NotFound,
    Found,
}

impl MatchState {
    /// Feeds one line through the state machine.
    pub fn observe(self, line: &str) -> Self {
        match self {
            Self::Found => Self::Found,
            Self::NotFound if line.contains(PATTERN) => Self::Found,
            Self::NotFound => Self::NotFound,
        }
    }

    pub fn found(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Scans a sequence of lines, returning whether any line contains the
/// pattern. An empty sequence yields `false`. Stops consuming the sequence at
/// the first match.
pub fn scan_lines<I, S>(lines: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = MatchState::default();
    for line in lines {
        state = state.observe(line.as_ref());
        if state.found() {
            break;
        }
    }
    state.found()
}

/// Scans a buffered reader one line at a time, never holding more than the
/// current line in memory. Returns an error if the reader fails mid-stream,
/// including lines that are not valid UTF-8.
pub fn scan_reader(reader: impl BufRead) -> Result<bool, Error> {
    let mut state = MatchState::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        state = state.observe(&line);
        if state.found() {
            tracing::debug!("pattern `{PATTERN}` matched on line {}", index + 1);
            break;
        }
    }
    Ok(state.found())
}
