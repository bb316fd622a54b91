//! Classifier for hash-collision search reports.
//!
//! ## Scope
//! This crate reads the textual report emitted by collision-search tools
//! (detectcoll and friends) for broken hash functions such as MD5 and
//! SHA-1, derives two bit-level fingerprints per reported block (the
//! message-difference signature and the intermediate-hash-value difference
//! signature) and matches the pair against a catalog of published
//! collision-attack families (Wang, FastColl, SHAttered, Shambles, …).
//! It interprets logs; it does not hash, search for collisions, or verify
//! that a report describes a genuine collision.
//!
//! ## Key invariants
//! - Ihv bit positions are numbered per 32-bit word (31 = MSB), never
//!   globally offset across words; the catalog depends on this convention.
//! - The report grammar is four fixed lines per record; lines not matching
//!   the prefix expected next are skipped silently, but a recognized line
//!   that violates the format is fatal for the whole stream.
//! - The catalog is static and scanned in declaration order; the first
//!   matching family wins.
//!
//! ## Flow (single record)
//! 1) Header line: block number.
//! 2) `dm:` line: message-difference signature (derived immediately).
//! 3) `ihv1=`/`ihv2=` lines: ihv-difference signature.
//! 4) Catalog scan, one classification line out, parser resets.
//!
//! ## Notable entry points
//! - [`runtime::classify_stream`]: whole-stream driver (what the binary runs).
//! - [`report_parse::ReportParser`]: line-at-a-time parsing.
//! - [`signature::diff_signature`] / [`signature::message_diff_signature`]:
//!   the two encoders.
//! - [`catalog::KNOWN_FAMILIES`]: the attack-family table.

pub mod api;
pub mod catalog;
pub mod matcher;
pub mod report_parse;
pub mod runtime;
pub mod signature;

pub use api::{BlockSignatures, Classification, FamilySpec};
pub use catalog::KNOWN_FAMILIES;
pub use matcher::{classify, find_family};
pub use report_parse::{ReportParseError, ReportParser};
pub use runtime::{classify_stream, ClassifyError, RunStats};
pub use signature::{diff_signature, message_diff_signature, SignatureError};
