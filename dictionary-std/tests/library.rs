//! Behavior of the standard dictionary library.

use dicom_dictionary_core::dictionary::{TagPattern, UidType};
use dicom_dictionary_core::Tag;
use dicom_dictionary_std::{standard, Resolution, ResolvedUid};
use matches::assert_matches;
use rstest::rstest;

const UNKNOWN_UID: &str = "1.999.9999.1234.56789.999999";

#[test]
fn element_is_resolved_exactly() {
    let element = standard().element("0010,0010");
    assert_eq!(element.tag, Some(Tag(0x0010, 0x0010)));
    assert_eq!(element.name, "Patient's Name");
    assert!(!element.retired);
    assert_eq!(element.resolution, Resolution::Exact);
}

#[test]
fn retired_element_is_resolved_exactly() {
    let element = standard().element("0000,51B0");
    assert_eq!(element.tag, Some(Tag(0x0000, 0x51B0)));
    assert_eq!(element.name, "Overlays");
    assert!(element.retired);
}

#[rstest]
#[case("0010,0000")]
#[case("0011,0000")]
#[case("0008,0000")]
#[case("7FE0,0000")]
#[case("1111,0000")]
#[case("1010,0000")]
fn group_length_is_synthesized(#[case] tag: &str) {
    let element = standard().element(tag);
    assert_eq!(element.name, "Group Length");
    assert_eq!(element.vr_code(), "UL");
    assert!(!element.retired);
    assert_eq!(element.resolution, Resolution::GroupLength);
}

#[rstest]
#[case("0011,ABCD")]
#[case("1111,2222")]
#[case("0009,0010")]
fn private_element_is_synthesized(#[case] tag: &str) {
    let element = standard().element(tag);
    assert_eq!(element.name, "Private");
    assert_eq!(element.vr_code(), "UN");
    assert!(!element.retired);
    assert_eq!(element.resolution, Resolution::Private);
}

#[rstest]
#[case("EEEE,ABCD")]
#[case("AAAA,FFFF")]
fn unknown_element_is_synthesized(#[case] tag: &str) {
    let element = standard().element(tag);
    assert_eq!(element.name, "Unknown");
    assert_eq!(element.vr_code(), "UN");
    assert!(!element.retired);
    assert_eq!(element.resolution, Resolution::Unknown);
}

#[rstest]
#[case("")]
#[case("GGGG,EEEE")]
#[case("0010-0010")]
#[case("0010,0010,")]
#[case("60xx,0011")]
fn malformed_tag_is_unknown(#[case] tag: &str) {
    let element = standard().element(tag);
    assert_eq!(element.tag, None);
    assert_eq!(standard().name_and_vr(tag), ("Unknown", "UN"));
}

// command elements
#[rstest]
#[case("0000,0000", "Command Group Length", "UL")]
#[case("0000,1005", "Attribute Identifier List", "AT")]
#[case("0000,51B0", "Overlays", "US")]
// file meta elements
#[case("0002,0000", "File Meta Information Group Length", "UL")]
#[case("0002,0010", "Transfer Syntax UID", "UI")]
#[case("0002,0102", "Private Information", "OB")]
// directory structuring elements
#[case("0004,1130", "File-set ID", "CS")]
#[case("0004,1220", "Directory Record Sequence", "SQ")]
#[case("0004,1600", "Number of References", "UL")]
// data elements
#[case("0008,0001", "Length to End", "UL")]
#[case("0008,0018", "SOP Instance UID", "UI")]
#[case("0008,0034", "Overlay Time", "TM")]
#[case("0018,9511", "Secondary Positioner Scan Start Angle", "FL")]
#[case("0054,0039", "Phase Description", "CS")]
#[case("3002,0022", "Radiation Machine SAD", "DS")]
#[case("0014,4056", "Coupling Medium", "ST")]
#[case("7FE0,0010", "Pixel Data", "OW")]
#[case("0028,0106", "Smallest Image Pixel Value", "US")]
#[case("0028,3006", "LUT Data", "OW")]
#[case("0010,0010", "Patient's Name", "PN")]
#[case("0020,000d", "Study Instance UID", "UI")]
// item and delimitation markers
#[case("FFFE,E000", "Item", "  ")]
#[case("FFFE,E00D", "Item Delimitation Item", "  ")]
#[case("FFFE,E0DD", "Sequence Delimitation Item", "  ")]
// group length
#[case("0008,0000", "Group Length", "UL")]
#[case("7FE0,0000", "Group Length", "UL")]
#[case("1111,0000", "Group Length", "UL")]
// fallbacks
#[case("AAAA,FFFF", "Unknown", "UN")]
#[case("1111,2222", "Private", "UN")]
fn name_and_vr(#[case] tag: &str, #[case] name: &str, #[case] vr: &str) {
    assert_eq!(standard().name_and_vr(tag), (name, vr));
}

#[rstest]
#[case("0028,0453", "(0028,04x3)", "Coefficient Coding Pointers", "AT")]
#[case("0028,08A8", "(0028,08x8)", "Image Data Location", "AT")]
#[case("1000,ABC0", "(1000,xxx0)", "Escape Triplet", "US")]
#[case("1000,DEF5", "(1000,xxx5)", "Shift Table Triplet", "US")]
#[case("1010,1234", "(1010,xxxx)", "Zonal Map", "US")]
#[case("5012,2600", "(50xx,2600)", "Curve Referenced Overlay Sequence", "SQ")]
#[case("60CC,0011", "(60xx,0011)", "Overlay Columns", "US")]
#[case("60EE,0110", "(60xx,0110)", "Overlay Format", "CS")]
#[case("7FAA,0020", "(7Fxx,0020)", "Variable Coefficients SDVN", "OW")]
#[case("6002,3000", "(60xx,3000)", "Overlay Data", "OW")]
#[case("0020,3105", "(0020,31xx)", "Source Image IDs", "CS")]
fn repeating_elements(
    #[case] tag: &str,
    #[case] pattern: &str,
    #[case] name: &str,
    #[case] vr: &str,
) {
    let element = standard().element(tag);
    assert_eq!(element.name, name);
    assert_eq!(element.vr_code(), vr);
    assert_eq!(
        element.resolution,
        Resolution::Pattern(pattern.parse::<TagPattern>().unwrap())
    );
}

#[test]
fn exact_entries_shadow_repeating_ones() {
    // (7FE0,0020) is declared on its own, and also matches (7Fxx,0020)
    let element = standard().element("7FE0,0020");
    assert_eq!(element.name, "Coefficients SDVN");
    assert_eq!(element.resolution, Resolution::Exact);
}

#[test]
fn queries_are_idempotent() {
    let library = standard();
    for tag in ["0010,0010", "0011,0000", "60CC,0011", "1111,2222", "EEEE,ABCD", "bogus"] {
        assert_eq!(library.element(tag), library.element(tag));
    }
    for uid in ["1.2.840.10008.1.2", "1.2.840.10008.1.1", UNKNOWN_UID] {
        assert_eq!(library.uid(uid), library.uid(uid));
        assert_eq!(library.check_ts_validity(uid), library.check_ts_validity(uid));
    }
}

#[test]
fn text_and_binary_tags_agree() {
    let library = standard();
    for (text, tag) in [
        ("0008,0018", Tag(0x0008, 0x0018)),
        ("0028,0453", Tag(0x0028, 0x0453)),
        ("0011,0000", Tag(0x0011, 0x0000)),
        ("0011,ABCD", Tag(0x0011, 0xABCD)),
        ("EEEE,ABCD", Tag(0xEEEE, 0xABCD)),
    ] {
        assert_eq!(library.element(text), library.element_by_tag(tag));
    }
}

#[test]
fn every_table_entry_resolves_to_itself() {
    let library = standard();
    for entry in dicom_dictionary_std::tags::ENTRIES {
        let tag = entry.tag.tag();
        if tag.is_group_length() && !entry.tag.is_single() {
            // e.g. (1000,xxx0) at (1000,0000) is a group length
            continue;
        }
        let element = library.element(&tag.canonical());
        assert_eq!(element.name, entry.name, "{}", tag);
        assert_eq!(element.retired, entry.retired, "{}", tag);
        assert_eq!(element.vr, entry.vr, "{}", tag);
    }
}

#[rstest]
#[case("1.2.840.10008.1.2", true)]
#[case("1.2.840.10008.1.2.6.2", true)]
#[case("1.2.840.10008.1.2.4.201", true)]
#[case("1.2.840.10008.1.1", false)]
#[case(UNKNOWN_UID, false)]
#[case("", false)]
fn check_ts_validity(#[case] uid: &str, #[case] valid: bool) {
    assert_eq!(standard().check_ts_validity(uid), valid);
}

#[rstest]
#[case("1.2.840.10008.1.2", false)]
#[case("1.2.840.10008.1.2.1", false)]
#[case("1.2.840.10008.1.2.1.99", false)]
#[case("1.2.840.10008.1.2.4.64", true)]
#[case("1.2.840.10008.1.2.4.50", true)]
#[case("1.2.840.10008.1.2.5", true)]
#[case("1.2.840.10008.1.1", false)]
#[case(UNKNOWN_UID, false)]
fn get_compression(#[case] uid: &str, #[case] compressed: bool) {
    assert_eq!(standard().get_compression(uid), compressed);
}

#[rstest]
#[case("1.2.840.10008.1.2", "Implicit VR Little Endian: Default Transfer Syntax for DICOM")]
#[case("1.2.840.10008.1.2.4.52", "JPEG Extended (Process 3 & 5) (Retired)")]
#[case("1.2.840.10008.1.2.6.2", "XML Encoding")]
fn get_syntax_description(#[case] uid: &str, #[case] name: &str) {
    assert_eq!(standard().get_syntax_description(uid), Some(name));
}

#[cfg(feature = "sop-class")]
#[rstest]
#[case("1.2.840.10008.1.1", "Verification SOP Class")]
#[case("1.2.840.10008.5.1.1.4.2", "Referenced Image Box SOP Class (Retired)")]
#[case("1.2.840.10008.5.1.4.1.1.481.8", "RT Ion Plan Storage")]
fn get_sop_class_description(#[case] uid: &str, #[case] name: &str) {
    assert_eq!(standard().get_syntax_description(uid), Some(name));
}

#[cfg(feature = "ldap-oid")]
#[test]
fn get_ldap_oid_description() {
    assert_eq!(
        standard().get_syntax_description("1.2.840.10008.15.0.4.8"),
        Some("dicomTransferCapability")
    );
}

#[cfg(feature = "synchronization-frame-of-reference")]
#[test]
fn get_synchronization_frame_of_reference_description() {
    assert_eq!(
        standard().get_syntax_description("1.2.840.10008.15.1.1"),
        Some("Universal Coordinated Time")
    );
}

#[test]
fn unknown_uid_has_no_description() {
    assert_eq!(standard().get_syntax_description(UNKNOWN_UID), None);
}

#[test]
fn transfer_syntax_uid_lookup() {
    let library = standard();

    assert_eq!(library.uid(UNKNOWN_UID), None);

    let uid = library.uid("1.2.840.10008.1.2.4.52").unwrap();
    assert_eq!(uid.value, "1.2.840.10008.1.2.4.52");
    assert_eq!(uid.name, "JPEG Extended (Process 3 & 5) (Retired)");
    assert_eq!(uid.uid_type, UidType::TransferSyntax);
    assert!(uid.retired);
    assert!(uid.compressed);

    assert_matches!(
        library.uid("1.2.840.10008.1.2.1"),
        Some(ResolvedUid {
            uid_type: UidType::TransferSyntax,
            retired: false,
            compressed: false,
            ..
        })
    );
}

#[cfg(feature = "sop-class")]
#[test]
fn sop_class_uid_lookup() {
    let uid = standard().uid("1.2.840.10008.1.1").unwrap();
    assert_eq!(uid.value, "1.2.840.10008.1.1");
    assert_eq!(uid.name, "Verification SOP Class");
    assert!(!uid.retired);
    assert!(!uid.compressed);
    assert_eq!(uid.uid_type, UidType::SopClass);
}

#[cfg(not(feature = "sop-class"))]
#[test]
fn sop_classes_are_left_out_without_feature() {
    assert_eq!(standard().uid("1.2.840.10008.1.1"), None);
    assert_eq!(standard().get_syntax_description("1.2.840.10008.1.1"), None);
}

#[cfg(feature = "synchronization-frame-of-reference")]
#[test]
fn synchronization_frame_of_reference_uid_lookup() {
    assert_matches!(
        standard().uid("1.2.840.10008.15.1.1"),
        Some(ResolvedUid {
            name: "Universal Coordinated Time",
            retired: false,
            uid_type: UidType::SynchronizationFrameOfReference,
            ..
        })
    );
}

#[test]
fn concurrent_readers_agree() {
    let expected = standard().element("60CC,0011");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let library = standard();
                    for _ in 0..100 {
                        assert_eq!(library.element("60CC,0011"), expected);
                        assert!(library.get_compression("1.2.840.10008.1.2.4.64"));
                    }
                    library.element_by_tag(Tag(0x0011, i)).name
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let name = handle.join().unwrap();
            if i == 0 {
                assert_eq!(name, "Group Length");
            } else {
                assert_eq!(name, "Private");
            }
        }
    });
}
