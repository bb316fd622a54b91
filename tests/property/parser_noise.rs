//! Parser insensitivity to interleaved log noise.

use collsig_rs::ReportParser;
use proptest::prelude::*;

const RECORD: [&str; 4] = [
    "Found collision in block 2",
    "dm: dm4=80000000 dm11=00008000 dm14=80000000",
    "ihv1=0123456789abcdeffedcba9876543210",
    "ihv2=812345670babcdef78dcba98f4543210",
];

/// Printable lines that cannot be mistaken for a grammar line.
fn noise_line() -> impl Strategy<Value = String> {
    "[ -~]{0,40}".prop_filter("must not look like a grammar line", |s| {
        let t = s.trim();
        !t.starts_with("Found collision in block")
            && !t.starts_with("dm:")
            && !t.starts_with("ihv1")
            && !t.starts_with("ihv2")
    })
}

proptest! {
    #[test]
    fn noise_between_grammar_lines_changes_nothing(
        noise in prop::collection::vec(noise_line(), 5),
    ) {
        // Reference: the record with no noise at all.
        let mut clean = ReportParser::new();
        let mut expected = None;
        for line in RECORD {
            if let Some(record) = clean.push_line(line).unwrap() {
                expected = Some(record);
            }
        }
        let expected = expected.unwrap();

        // Same record with a noise line around every grammar line.
        let mut parser = ReportParser::new();
        let mut produced = Vec::new();
        for (noise_line, record_line) in noise.iter().zip(RECORD.iter()) {
            prop_assert_eq!(parser.push_line(noise_line).unwrap(), None);
            if let Some(record) = parser.push_line(record_line).unwrap() {
                produced.push(record);
            }
        }
        prop_assert_eq!(parser.push_line(&noise[4]).unwrap(), None);

        prop_assert_eq!(produced.len(), 1);
        prop_assert_eq!(&produced[0], &expected);

        // The parser is back in its initial state: the same record parses again.
        let mut again = Vec::new();
        for line in RECORD {
            if let Some(record) = parser.push_line(line).unwrap() {
                again.push(record);
            }
        }
        prop_assert_eq!(again.len(), 1);
        prop_assert_eq!(&again[0], &expected);
    }
}
