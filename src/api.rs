use std::fmt;

// --------------------------
// Public API types
// --------------------------

/// Static description of a published collision-attack family.
///
/// A family is identified by the pair of signatures its collisions leave in
/// a detectcoll report: the message-difference signature (which message
/// words differ) and, optionally, the intermediate-hash-value difference
/// signature (which state bits differ after the colliding block).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilySpec {
    /// Family name as printed in classification output.
    pub name: &'static str,
    /// Expected message-difference signature (exact match).
    pub dm_sig: &'static str,
    /// Expected ihv-difference signature.
    ///
    /// `None` is a wildcard: the family matches on the message-difference
    /// signature alone. `Some("")` is a concrete value and only matches
    /// records whose ihvs are bit-identical.
    pub ihv_sig: Option<&'static str>,
}

/// Signatures derived from one fully parsed report block.
///
/// Produced by [`ReportParser`](crate::report_parse::ReportParser) when the
/// fourth grammar line of a record completes, consumed by the matcher, and
/// not retained afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockSignatures {
    /// Block index from the report header.
    pub block: u64,
    /// Message-difference signature (comma-joined word indices).
    pub dm_sig: String,
    /// Ihv-difference signature (comma-joined per-word bit positions).
    pub ihv_sig: String,
}

/// Outcome of classifying one report block against the catalog.
///
/// `Display` renders the exact one-line output shape for each case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The signature pair matched a known family.
    Known {
        /// Block index from the report header.
        block: u64,
        /// Matched family name.
        family: &'static str,
    },
    /// No catalog family matched; carries the raw signatures for display.
    Unknown {
        /// Block index from the report header.
        block: u64,
        /// Computed message-difference signature.
        dm_sig: String,
        /// Computed ihv-difference signature.
        ihv_sig: String,
    },
}

impl Classification {
    /// Returns true when the block matched a known family.
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known { block, family } => write!(f, "block: {block}, collision: {family}"),
            // Ihv signature first, then message signature, both quoted so an
            // empty signature stays visible in the diagnostic.
            Self::Unknown {
                dm_sig, ihv_sig, ..
            } => write!(f, "Nothing found: {ihv_sig:?} {dm_sig:?}"),
        }
    }
}
