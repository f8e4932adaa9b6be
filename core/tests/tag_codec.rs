//! Tag codec and tag pattern behavior as seen by dependents of the crate.

use dicom_dictionary_core::dictionary::TagPattern;
use dicom_dictionary_core::header::ParseTagError;
use dicom_dictionary_core::Tag;
use rstest::rstest;

#[rstest]
#[case("0010,0010", Tag(0x0010, 0x0010))]
#[case("(0010,0010)", Tag(0x0010, 0x0010))]
#[case("7fe0,0010", Tag(0x7FE0, 0x0010))]
#[case("FFFE,E0DD", Tag(0xFFFE, 0xE0DD))]
#[case("0000,0000", Tag(0x0000, 0x0000))]
#[case("ffff,ffff", Tag(0xFFFF, 0xFFFF))]
fn parses_valid_tags(#[case] text: &str, #[case] expected: Tag) {
    assert_eq!(text.parse::<Tag>(), Ok(expected));
}

#[rstest]
#[case("")]
#[case("0010")]
#[case("00100010")]
#[case("0010,001")]
#[case("0010 0010")]
#[case("0010,00 0")]
#[case("-010,0010")]
#[case("00x0,0010")]
#[case("0010,0010 ")]
#[case("ÅÅ10,0010")]
fn rejects_malformed_tags(#[case] text: &str) {
    assert!(text.parse::<Tag>().is_err(), "{:?} should not parse", text);
}

#[test]
fn canonical_form_round_trips() {
    for text in ["0008,0018", "60CC,0011", "FFFE,E000", "1111,2222"] {
        let tag: Tag = text.parse().unwrap();
        assert_eq!(tag.canonical(), text);
    }
    // lower case input is canonicalized to upper case
    let tag: Tag = "abcd,ef01".parse().unwrap();
    assert_eq!(tag.canonical(), "ABCD,EF01");
}

#[test]
fn error_reports_the_issue() {
    assert!(matches!(
        "0010;0010".parse::<Tag>(),
        Err(ParseTagError::MissingSeparator)
    ));
    let err = "0010,00G0".parse::<Tag>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid character at position 7, expected a hexadecimal digit"
    );
}

#[rstest]
#[case("(0028,04x3)", Tag(0x0028, 0x0453), true)]
#[case("(0028,04x3)", Tag(0x0028, 0x0454), false)]
#[case("(0028,08x8)", Tag(0x0028, 0x08A8), true)]
#[case("(1000,xxx0)", Tag(0x1000, 0xABC0), true)]
#[case("(1000,xxx5)", Tag(0x1000, 0xDEF5), true)]
#[case("(1010,xxxx)", Tag(0x1010, 0x1234), true)]
#[case("(50xx,2600)", Tag(0x5012, 0x2600), true)]
#[case("(60xx,0011)", Tag(0x60CC, 0x0011), true)]
#[case("(60xx,0110)", Tag(0x60EE, 0x0110), true)]
#[case("(7Fxx,0020)", Tag(0x7FAA, 0x0020), true)]
#[case("(7Fxx,0020)", Tag(0x7EAA, 0x0020), false)]
fn patterns_match_tags(#[case] pattern: &str, #[case] tag: Tag, #[case] expected: bool) {
    let pattern: TagPattern = pattern.parse().unwrap();
    assert_eq!(pattern.matches(tag), expected);
}
