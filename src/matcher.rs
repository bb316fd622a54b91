//! Catalog lookup for derived signature pairs.

use crate::api::{BlockSignatures, Classification, FamilySpec};
use crate::catalog::KNOWN_FAMILIES;

/// Finds the first catalog family matching a signature pair.
///
/// A family is a candidate when its message-difference signature equals
/// `dm_sig` exactly; it matches when its ihv signature is a wildcard or
/// string-equal to `ihv_sig`. The catalog is scanned in declaration order
/// and the scan stops at the first match, so table order decides between
/// ambiguous entries.
pub fn find_family(dm_sig: &str, ihv_sig: &str) -> Option<&'static FamilySpec> {
    KNOWN_FAMILIES
        .iter()
        .find(|family| family.dm_sig == dm_sig && family.ihv_sig.map_or(true, |sig| sig == ihv_sig))
}

/// Classifies one parsed block against the catalog.
pub fn classify(record: BlockSignatures) -> Classification {
    match find_family(&record.dm_sig, &record.ihv_sig) {
        Some(family) => Classification::Known {
            block: record.block,
            family: family.name,
        },
        None => Classification::Unknown {
            block: record.block,
            dm_sig: record.dm_sig,
            ihv_sig: record.ihv_sig,
        },
    }
}
