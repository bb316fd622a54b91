//! Parser for detectcoll collision reports.
//!
//! This module provides streaming, line-oriented parsing of collision
//! reports to extract the block number, message-difference tokens, and the
//! two intermediate hash values of each reported collision.
//!
//! # Report Format
//! ```text
//! Found collision in block <n>[:] [extra fields]\n
//! dm: dm<i>=<hex> dm<j>=<hex> ...\n
//! ihv1=<hex>\n
//! ihv2=<hex>\n
//! ```
//!
//! # Parsing Assumptions
//! - The four grammar lines of a record appear in the order above. Lines
//!   not matching the prefix expected next (blank lines, progress output,
//!   unrelated log noise) are skipped without advancing the parser.
//! - The block number is the 5th whitespace-separated token of the header;
//!   the SHA-1 report variant suffixes it with `:` and appends more fields,
//!   so one trailing colon is tolerated.
//! - `ihv1`/`ihv2` values are hex strings of whole 32-bit words, equal in
//!   length. The upstream tool guarantees this; a violation means the
//!   report is fundamentally malformed and parsing stops. There is no
//!   per-record recovery.
//! - End of input mid-record discards the partial record silently.
//!
//! # Complexity
//! - Per line: O(line length). One `String` is held per in-flight record
//!   for the cached message signature plus one for `ihv1`; nothing is
//!   retained across records.

use std::fmt;

use crate::api::BlockSignatures;
use crate::signature::{self, SignatureError};

/// Header prefix of every collision record.
pub const HEADER_PREFIX: &str = "Found collision in block ";
/// Prefix of the message-difference line.
pub const DM_PREFIX: &str = "dm:";
/// Prefix of the first intermediate-hash-value line.
pub const IHV1_PREFIX: &str = "ihv1";
/// Prefix of the second intermediate-hash-value line.
pub const IHV2_PREFIX: &str = "ihv2";

/// Errors from report parsing.
///
/// All variants are fatal: the grammar is guaranteed by the producing
/// tool, so a violation indicates a malformed report rather than a bad
/// record, and the stream must not be processed further.
#[derive(Debug)]
#[non_exhaustive]
pub enum ReportParseError {
    /// Header block token missing or not a non-negative integer.
    MalformedHeader { token: String },
    /// An ihv line carried no `=` separator.
    MissingIhvValue { field: &'static str },
    /// An ihv value is not a whole number of 32-bit words.
    UnalignedIhv { len: usize },
    /// The two ihv values of one record differ in length.
    IhvLengthMismatch { ihv1_len: usize, ihv2_len: usize },
    /// Non-hex byte inside an ihv word.
    InvalidHex { byte: u8 },
}

impl fmt::Display for ReportParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { token } => {
                write!(f, "malformed header: block token {token:?} is not a non-negative integer")
            }
            Self::MissingIhvValue { field } => {
                write!(f, "malformed {field} line: missing `=` separator")
            }
            Self::UnalignedIhv { len } => {
                write!(f, "ihv length {len} is not a whole number of 32-bit words")
            }
            Self::IhvLengthMismatch { ihv1_len, ihv2_len } => {
                write!(f, "ihv length mismatch: ihv1 has {ihv1_len} hex chars, ihv2 has {ihv2_len}")
            }
            Self::InvalidHex { byte } => {
                write!(f, "invalid hex byte in ihv: 0x{byte:02x}")
            }
        }
    }
}

impl std::error::Error for ReportParseError {}

impl From<SignatureError> for ReportParseError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidHex { byte } => Self::InvalidHex { byte },
            SignatureError::LengthMismatch { left, right } => Self::IhvLengthMismatch {
                ihv1_len: left,
                ihv2_len: right,
            },
            SignatureError::UnalignedLength { len } => Self::UnalignedIhv { len },
        }
    }
}

/// Which grammar line the parser expects next.
///
/// Fields collected so far ride along in the state, so a completed record
/// is moved out without cloning and a discarded partial record frees its
/// buffers when the state is replaced.
enum State {
    AwaitHeader,
    AwaitDm {
        block: u64,
    },
    AwaitIhv1 {
        block: u64,
        dm_sig: String,
    },
    AwaitIhv2 {
        block: u64,
        dm_sig: String,
        ihv1: String,
    },
}

/// Streaming parser for one report stream.
///
/// Feed lines in order with [`push_line`](Self::push_line); a
/// [`BlockSignatures`] is returned for each completed record. The parser
/// holds no state across records, so one instance per stream is all that
/// is ever needed; after an error the parser is mid-record and must not be
/// fed further lines.
pub struct ReportParser {
    state: State,
}

impl ReportParser {
    /// Creates a parser expecting a record header.
    pub fn new() -> Self {
        Self {
            state: State::AwaitHeader,
        }
    }

    /// Feeds one line; returns the completed record when this line closes one.
    ///
    /// Leading and trailing whitespace is stripped before matching. A line
    /// that does not start with the prefix expected in the current state is
    /// ignored and the state is unchanged.
    ///
    /// # Errors
    /// Returns `ReportParseError` when a recognized grammar line violates
    /// the format contract (see the module docs); such errors are fatal.
    pub fn push_line(&mut self, line: &str) -> Result<Option<BlockSignatures>, ReportParseError> {
        let line = line.trim();
        match &mut self.state {
            State::AwaitHeader => {
                if !line.starts_with(HEADER_PREFIX) {
                    return Ok(None);
                }
                let token = line.split_whitespace().nth(4).unwrap_or("");
                // SHA-1 report headers carry more fields; the block token
                // then ends with a colon.
                let token = token.strip_suffix(':').unwrap_or(token);
                let block = token.parse::<u64>().map_err(|_| {
                    ReportParseError::MalformedHeader {
                        token: token.to_string(),
                    }
                })?;
                self.state = State::AwaitDm { block };
                Ok(None)
            }
            State::AwaitDm { block } => {
                if !line.starts_with(DM_PREFIX) {
                    return Ok(None);
                }
                // The signature is derived here and cached; the raw tokens
                // are never stored.
                let dm_sig = signature::message_diff_signature(line.split_whitespace().skip(1));
                let block = *block;
                self.state = State::AwaitIhv1 { block, dm_sig };
                Ok(None)
            }
            State::AwaitIhv1 { block, dm_sig } => {
                if !line.starts_with(IHV1_PREFIX) {
                    return Ok(None);
                }
                let Some((_, value)) = line.split_once('=') else {
                    return Err(ReportParseError::MissingIhvValue { field: "ihv1" });
                };
                if value.len() % 8 != 0 {
                    return Err(ReportParseError::UnalignedIhv { len: value.len() });
                }
                let block = *block;
                let dm_sig = std::mem::take(dm_sig);
                self.state = State::AwaitIhv2 {
                    block,
                    dm_sig,
                    ihv1: value.to_string(),
                };
                Ok(None)
            }
            State::AwaitIhv2 { block, dm_sig, ihv1 } => {
                if !line.starts_with(IHV2_PREFIX) {
                    return Ok(None);
                }
                let Some((_, value)) = line.split_once('=') else {
                    return Err(ReportParseError::MissingIhvValue { field: "ihv2" });
                };
                if value.len() != ihv1.len() {
                    return Err(ReportParseError::IhvLengthMismatch {
                        ihv1_len: ihv1.len(),
                        ihv2_len: value.len(),
                    });
                }
                let ihv_sig = signature::diff_signature(ihv1, value)?;
                let record = BlockSignatures {
                    block: *block,
                    dm_sig: std::mem::take(dm_sig),
                    ihv_sig,
                };
                self.state = State::AwaitHeader;
                Ok(Some(record))
            }
        }
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
