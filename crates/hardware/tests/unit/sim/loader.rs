//! # Loader Tests
//!
//! Verifies program image parsing, sequencing, bounds, and file access.

use std::io::Write as _;

use crate::common::harness::image_text;
use e20sim_core::common::error::LoadError;
use e20sim_core::sim::loader::{load_file, load_image, parse_image};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn parses_well_formed_image() {
    let text = "ram[0] = 16'b0010000010000101;\nram[1] = 16'b0100000000000001;\n";
    assert_eq!(parse_image(text).unwrap(), vec![0x2085, 0x4001]);
}

#[test]
fn empty_image_is_valid() {
    assert_eq!(parse_image("").unwrap(), Vec::<u16>::new());
}

#[test]
fn text_after_semicolon_is_ignored() {
    let text = "ram[0] = 16'b0100000000000000;\t\t// j 0\n";
    assert_eq!(parse_image(text).unwrap(), vec![0x4000]);
}

#[test]
fn short_literal_is_accepted() {
    assert_eq!(parse_image("ram[0] = 16'b101;").unwrap(), vec![5]);
}

#[test]
fn address_gap_is_out_of_sequence() {
    let text = "ram[0] = 16'b0;\nram[1] = 16'b0;\nram[3] = 16'b0;\n";
    let err = parse_image(text).unwrap_err();
    assert!(matches!(
        err,
        LoadError::OutOfSequence {
            expected: 2,
            found: 3
        }
    ));
    assert_eq!(err.to_string(), "Memory addresses out of sequence: 3");
}

#[test]
fn image_must_start_at_zero() {
    let err = parse_image("ram[1] = 16'b0;\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::OutOfSequence {
            expected: 0,
            found: 1
        }
    ));
}

#[rstest]
#[case("hello")]
#[case("")]
#[case("ram[0] = 16'b0101")]
#[case("ram[] = 16'b0;")]
#[case("ram[x] = 16'b0;")]
#[case("ram[0] = 16'b;")]
#[case("ram[0] = 16'b0102;")]
#[case("ram[0] = 16'b10000000000000000;")]
#[case(" ram[0] = 16'b0;")]
#[case("ram[0]=16'b0;")]
fn malformed_lines_are_rejected(#[case] line: &str) {
    let text = format!("{line}\n");
    let err = parse_image(&text).unwrap_err();
    let LoadError::InvalidLine { line_no, line: got } = &err else {
        panic!("expected InvalidLine, got {err:?}");
    };
    assert_eq!(*line_no, 1);
    assert_eq!(got, line);
    assert_eq!(err.to_string(), format!("Invalid line format: {line}"));
}

#[test]
fn invalid_line_reports_its_line_number() {
    let text = "ram[0] = 16'b0;\nbogus\n";
    let err = parse_image(text).unwrap_err();
    assert!(matches!(err, LoadError::InvalidLine { line_no: 2, .. }));
}

#[test]
fn image_filling_memory_is_accepted() {
    let text = image_text(&vec![1; 8192]);
    let mem = load_image(text.as_bytes()).unwrap();
    assert_eq!(mem.read(8191), 1);
}

#[test]
fn image_beyond_memory_is_too_large() {
    let text = image_text(&vec![0; 8193]);
    let err = parse_image(&text).unwrap_err();
    assert!(matches!(err, LoadError::TooLarge { address: 8192 }));
    assert_eq!(err.to_string(), "Program too large for memory: 8192");
}

#[test]
fn load_image_places_words_and_zeroes_the_rest() {
    let mem = load_image(image_text(&[0xAAAA, 0x5555]).as_bytes()).unwrap();
    assert_eq!(&mem.as_slice()[..3], &[0xAAAA, 0x5555, 0]);
}

#[test]
fn load_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(image_text(&[0x4000]).as_bytes()).unwrap();
    let mem = load_file(file.path()).unwrap();
    assert_eq!(mem.read(0), 0x4000);
}

#[test]
fn load_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
