//! Properties of the two signature encoders.

use collsig_rs::signature::{diff_signature, message_diff_signature};
use proptest::prelude::*;

/// Renders words as the concatenated big-endian hex string detectcoll emits.
fn to_hex(words: &[u32]) -> String {
    words.iter().map(|w| format!("{w:08x}")).collect()
}

/// Two word vectors of equal length (ihv pairs are always equal-length).
fn word_pair() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    (0usize..8).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<u32>(), len),
            prop::collection::vec(any::<u32>(), len),
        )
    })
}

proptest! {
    #[test]
    fn self_difference_is_empty(words in prop::collection::vec(any::<u32>(), 0..8)) {
        let hex = to_hex(&words);
        prop_assert_eq!(diff_signature(&hex, &hex).unwrap(), "");
    }

    #[test]
    fn difference_is_symmetric((a, b) in word_pair()) {
        let left = diff_signature(&to_hex(&a), &to_hex(&b)).unwrap();
        let right = diff_signature(&to_hex(&b), &to_hex(&a)).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn positions_are_per_word_and_count_is_hamming_distance((a, b) in word_pair()) {
        let sig = diff_signature(&to_hex(&a), &to_hex(&b)).unwrap();
        let hamming: u32 = a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum();

        if sig.is_empty() {
            prop_assert_eq!(hamming, 0);
        } else {
            let positions: Vec<u32> = sig
                .split(',')
                .map(|p| p.parse().unwrap())
                .collect();
            prop_assert_eq!(positions.len() as u32, hamming);
            for pos in positions {
                prop_assert!(pos <= 31);
            }
        }
    }

    #[test]
    fn case_of_hex_digits_is_irrelevant((a, b) in word_pair()) {
        let lower = diff_signature(&to_hex(&a), &to_hex(&b)).unwrap();
        let upper = diff_signature(
            &to_hex(&a).to_uppercase(),
            &to_hex(&b).to_uppercase(),
        )
        .unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn dm_extraction_preserves_order(indices in prop::collection::vec(0u32..16, 0..16)) {
        let tokens: Vec<String> = indices
            .iter()
            .map(|i| format!("dm{i}=80000000"))
            .collect();
        let sig = message_diff_signature(tokens.iter().map(String::as_str));
        let expected = indices
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(sig, expected);
    }

    #[test]
    fn dm_extraction_ignores_everything_after_the_separator(
        indices in prop::collection::vec(0u32..16, 1..16),
        junk in "[0-9a-f=]{0,12}",
    ) {
        let plain: Vec<String> = indices.iter().map(|i| format!("dm{i}=0")).collect();
        let noisy: Vec<String> = indices.iter().map(|i| format!("dm{i}={junk}")).collect();
        prop_assert_eq!(
            message_diff_signature(plain.iter().map(String::as_str)),
            message_diff_signature(noisy.iter().map(String::as_str))
        );
    }
}
