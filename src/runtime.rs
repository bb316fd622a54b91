//! Stream driver connecting the parser, matcher, and output.
//!
//! One parser instance per input stream, one output line per completed
//! record, counters for the end-of-run stats line. Reads are blocking and
//! records are processed strictly one at a time; a second stream gets its
//! own driver with nothing shared but the static catalog.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::matcher;
use crate::report_parse::{ReportParseError, ReportParser};

/// Counters for one classification run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input lines consumed (including noise and partial records).
    pub lines_read: u64,
    /// Fully parsed records classified.
    pub records: u64,
    /// Records attributed to a known family.
    pub matched: u64,
    /// Records with no catalog match.
    pub unmatched: u64,
}

/// Errors from driving a report stream.
#[derive(Debug)]
#[non_exhaustive]
pub enum ClassifyError {
    /// Reading input or writing a classification line failed.
    Io(io::Error),
    /// The report violated the grammar; processing stopped.
    Parse(ReportParseError),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Parse(err) => write!(f, "malformed report: {err}"),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ClassifyError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReportParseError> for ClassifyError {
    fn from(err: ReportParseError) -> Self {
        Self::Parse(err)
    }
}

/// Classifies every record of a report stream, writing one line per record.
///
/// Lines are read until end of input; a partial record at that point is
/// discarded without output. Output lines are exactly those of
/// [`Classification`]'s `Display`.
///
/// # Errors
/// Returns `ClassifyError` on the first I/O failure or fatal grammar
/// violation; records classified before the error have already been
/// written.
pub fn classify_stream<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
) -> Result<RunStats, ClassifyError> {
    let mut parser = ReportParser::new();
    let mut stats = RunStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        stats.lines_read += 1;

        let Some(record) = parser.push_line(&line)? else {
            continue;
        };
        let classification = matcher::classify(record);
        if classification.is_known() {
            stats.matched += 1;
        } else {
            stats.unmatched += 1;
        }
        stats.records += 1;
        writeln!(out, "{classification}")?;
    }

    Ok(stats)
}
