//! Static catalog of known collision-attack families.
//!
//! Signature pairs collected from published attacks and from detectcoll
//! runs over their public artifacts. Scan order is declaration order and
//! is load-bearing: distinct families may share a message-difference
//! signature (Wang/FastColl, the full-block SHA-1 attacks), and ihv
//! signatures from different attacks can in principle collide, so the
//! first entry that matches a record wins.

use crate::api::FamilySpec;

/// Message-difference signature of the full-block SHA-1 attacks: every one
/// of the 16 message words carries a difference.
const FULL_BLOCK_DM: &str = "0,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15";

/// Known families, in match order.
///
/// `ihv_sig` semantics: `None` matches any ihv signature, `Some("")`
/// matches only bit-identical ihvs.
pub const KNOWN_FAMILIES: &[FamilySpec] = &[
    // MD5, den Boer/Bosselaers-style pseudo-collision (APOP attacks):
    // identical message, ihvs differing in the top bit of all four words.
    FamilySpec {
        name: "APop",
        dm_sig: "",
        ihv_sig: Some("31,31,31,31"),
    },
    // MD5 identical-prefix, Wang et al. message differentials on words
    // 4/11/14. Wang and FastColl share the dm signature and are told apart
    // by the ihv differential after the first colliding block.
    FamilySpec {
        name: "Wang",
        dm_sig: "4,11,14",
        ihv_sig: Some("31,31,25,31,26,25,31,25"),
    },
    FamilySpec {
        name: "FastColl",
        dm_sig: "4,11,14",
        ihv_sig: Some("31,31,25,31,25,31,25"),
    },
    // HashClash chosen-prefix/unicoll variants: single-word message
    // differentials, ihv differential varies per run.
    FamilySpec {
        name: "Unicoll1",
        dm_sig: "2",
        ihv_sig: None,
    },
    FamilySpec {
        name: "Unicoll3",
        dm_sig: "6,9,15",
        ihv_sig: None,
    },
    FamilySpec {
        name: "HashClashCPC",
        dm_sig: "11",
        ihv_sig: None,
    },
    FamilySpec {
        name: "SingleCPC",
        dm_sig: "2,4,11,14",
        ihv_sig: Some(
            "10,9,8,7,6,5,30,29,28,26,24,22,20,17,14,11,5,26,25,23,22,5,25,9,8,7,6,5",
        ),
    },
    FamilySpec {
        name: "SingleIPC",
        dm_sig: "8,13",
        ihv_sig: Some(""),
    },
    // SHA-1 full-block attacks. SHAttered block 0 leaves identical ihvs
    // (the near-collision closes), block 1 and Shambles carry distinct
    // residual differentials.
    FamilySpec {
        name: "SHAttered0",
        dm_sig: FULL_BLOCK_DM,
        ihv_sig: Some(""),
    },
    FamilySpec {
        name: "SHAttered1",
        dm_sig: FULL_BLOCK_DM,
        ihv_sig: Some("12,11,10,9,5,4,2,1,8,7,5,4,1,31"),
    },
    FamilySpec {
        name: "Shambles",
        dm_sig: FULL_BLOCK_DM,
        ihv_sig: Some("12,9,7,6,5,4,1,8,7,5,4,1,1,31"),
    },
];
