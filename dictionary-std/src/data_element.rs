//! Data element dictionary registry and tag resolution.
//!
//! The [`DataElementRegistry`] indexes tables of attribute entries
//! and resolves any tag to a [`ResolvedTag`],
//! synthesizing group length, private and unknown entries
//! for tags not covered by the tables.
//! [`StandardDataDictionary`] exposes the registry of the standard library
//! through the [`DataDictionary`] trait.

use std::cmp::Reverse;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::fmt;

use dicom_dictionary_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, TagPattern, VirtualVr,
};
use dicom_dictionary_core::{Tag, VR};
use snafu::ensure;
use tracing::{debug, trace, warn};

use crate::error::{DuplicatePatternSnafu, DuplicateTagSnafu, OpenPatternSnafu, Result};

type E = DataDictionaryEntryRef<'static>;

/// Generic group length dictionary entry, matching `(xxxx,0000)`.
static GROUP_LENGTH_ENTRY: E = E::new(
    TagPattern::masked(Tag(0x0000, 0x0000), 0x0000, 0xFFFF),
    "GenericGroupLength",
    "Group Length",
    VirtualVr::Exact(VR::UL),
    false,
);

const PRIVATE_NAME: &str = "Private";
const UNKNOWN_NAME: &str = "Unknown";

/// Retrieve the data element registry of the standard library.
///
/// The registry is built on first use, see [`standard`](crate::standard).
#[inline]
pub fn registry() -> &'static DataElementRegistry {
    crate::standard().elements()
}

/// The rule which produced a [`ResolvedTag`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The tag is declared as such in the tables.
    Exact,
    /// A group length element without a dedicated entry.
    GroupLength,
    /// The tag matched the wildcard pattern of a repeating attribute.
    Pattern(TagPattern),
    /// A private element (odd group) without an entry.
    Private,
    /// Nothing matched, or the tag text was malformed.
    Unknown,
}

/// The metadata of a data element, as resolved from a tag.
///
/// A tag is always resolved to something:
/// tags not found in the dictionary
/// yield a synthesized `Group Length`, `Private` or `Unknown` record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedTag {
    /// The tag which was resolved,
    /// or `None` if the tag text could not be parsed
    pub tag: Option<Tag>,
    /// The human-readable name of the attribute
    pub name: &'static str,
    /// The value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// Whether the attribute is retired
    pub retired: bool,
    /// How the tag was resolved
    pub resolution: Resolution,
}

impl ResolvedTag {
    fn from_entry(tag: Tag, entry: &E, resolution: Resolution) -> Self {
        ResolvedTag {
            tag: Some(tag),
            name: entry.name,
            vr: entry.vr,
            retired: entry.retired,
            resolution,
        }
    }

    fn synthesized(tag: Option<Tag>, name: &'static str, vr: VR, resolution: Resolution) -> Self {
        ResolvedTag {
            tag,
            name,
            vr: VirtualVr::Exact(vr),
            retired: false,
            resolution,
        }
    }

    /// The two-character VR code of the attribute.
    ///
    /// Context dependent VRs are relaxed (e.g. _Pixel Data_ yields `OW`)
    /// and item or delimitation markers
    /// yield the blank code [`VirtualVr::UNDEFINED_CODE`].
    #[inline]
    pub fn vr_code(&self) -> &'static str {
        self.vr.code()
    }
}

impl fmt::Display for ResolvedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Some(tag) => write!(f, "{} {} {}", tag, self.name, self.vr_code()),
            None => write!(f, "(????,????) {} {}", self.name, self.vr_code()),
        }
    }
}

/// An index of data element dictionary entries.
///
/// Entries without open digits go to a hash map keyed by tag.
/// Repeating attributes are kept in a list
/// sorted by decreasing specificity (number of fixed digits),
/// retaining declaration order between patterns of equal specificity.
///
/// The registry is immutable once built,
/// and can be shared freely across threads.
#[derive(Debug)]
pub struct DataElementRegistry {
    /// mapping: tag → entry, for non-repeating attributes
    exact: HashMap<Tag, &'static E>,
    /// repeating attributes, most specific first
    patterns: Vec<&'static E>,
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static E>,
    /// pairs of overlapping patterns with the same specificity
    ambiguous: Vec<(TagPattern, TagPattern)>,
}

impl DataElementRegistry {
    /// Build a registry from a single table of entries.
    pub fn from_entries(entries: &'static [E]) -> Result<Self> {
        Self::from_tables(std::iter::once(entries))
    }

    /// Build a registry from a sequence of tables.
    ///
    /// Tables are indexed in order,
    /// which also defines declaration order across tables.
    ///
    /// # Errors
    ///
    /// Fails if two non-repeating entries share the same tag,
    /// if two repeating entries declare the same pattern,
    /// or if an entry's pattern has no fixed digits.
    pub fn from_tables<I>(tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static [E]>,
    {
        let mut registry = DataElementRegistry {
            exact: HashMap::new(),
            patterns: Vec::new(),
            by_keyword: HashMap::new(),
            ambiguous: Vec::new(),
        };
        for entry in tables.into_iter().flatten() {
            registry.index(entry)?;
        }
        // stable, so ties keep declaration order
        registry
            .patterns
            .sort_by_key(|entry| Reverse(entry.tag.specificity()));
        registry.audit();

        debug!(
            exact = registry.exact.len(),
            patterns = registry.patterns.len(),
            "Built data element registry"
        );
        Ok(registry)
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static E) -> Result<()> {
        let pattern = entry.tag;
        ensure!(
            !pattern.is_open(),
            OpenPatternSnafu {
                alias: entry.alias
            }
        );

        if pattern.is_single() {
            match self.exact.entry(pattern.tag()) {
                MapEntry::Occupied(previous) => {
                    return DuplicateTagSnafu {
                        tag: pattern.tag(),
                        first: previous.get().alias,
                        second: entry.alias,
                    }
                    .fail();
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        } else {
            if let Some(previous) = self.patterns.iter().find(|e| e.tag == pattern) {
                return DuplicatePatternSnafu {
                    pattern,
                    first: previous.alias,
                    second: entry.alias,
                }
                .fail();
            }
            self.patterns.push(entry);
        }

        self.by_keyword.entry(entry.alias).or_insert(entry);
        Ok(())
    }

    /// Collect the pairs of patterns which would be decided by declaration order.
    fn audit(&mut self) {
        for (i, first) in self.patterns.iter().enumerate() {
            for second in &self.patterns[i + 1..] {
                if first.tag.specificity() != second.tag.specificity() {
                    // sorted by specificity, no more candidates for `first`
                    break;
                }
                if first.tag.overlaps(second.tag) {
                    warn!(
                        "Tag patterns {} ({}) and {} ({}) overlap with the same specificity, \
                         the first one declared takes precedence",
                        first.tag, first.alias, second.tag, second.alias
                    );
                    self.ambiguous.push((first.tag, second.tag));
                }
            }
        }
    }

    /// The pairs of repeating attribute patterns
    /// which have the same specificity and can match a common tag.
    ///
    /// For each pair, the first pattern was declared first
    /// and is the one chosen when both match.
    pub fn ambiguous_patterns(&self) -> &[(TagPattern, TagPattern)] {
        &self.ambiguous
    }

    /// The number of entries in the registry.
    pub fn len(&self) -> usize {
        self.exact.len() + self.patterns.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }

    /// Find the most specific repeating attribute matching the tag.
    fn find_pattern(&self, tag: Tag) -> Option<&'static E> {
        self.patterns
            .iter()
            .copied()
            .find(|entry| entry.tag.matches(tag))
    }

    /// Fetch the dictionary entry describing the given tag.
    ///
    /// This includes the generic group length entry,
    /// but not the synthesized private and unknown records.
    pub fn entry_by_tag(&self, tag: Tag) -> Option<&'static E> {
        if let Some(entry) = self.exact.get(&tag).copied() {
            return Some(entry);
        }
        if tag.is_group_length() {
            return Some(&GROUP_LENGTH_ENTRY);
        }
        self.find_pattern(tag)
    }

    /// Fetch a dictionary entry by its keyword.
    pub fn entry_by_keyword(&self, keyword: &str) -> Option<&'static E> {
        self.by_keyword.get(keyword).copied()
    }

    /// Resolve a tag to its attribute metadata.
    ///
    /// The first of these rules to apply decides the outcome:
    ///
    /// 1. an entry declared for exactly this tag;
    /// 2. a group length element `(gggg,0000)`,
    ///    named `Group Length` with VR `UL` in any group;
    /// 3. the most specific repeating attribute matching the tag,
    ///    the first one declared on a tie;
    /// 4. a private element (odd group), named `Private` with VR `UN`;
    /// 5. otherwise, `Unknown` with VR `UN`.
    pub fn resolve(&self, tag: Tag) -> ResolvedTag {
        if let Some(entry) = self.exact.get(&tag) {
            return ResolvedTag::from_entry(tag, entry, Resolution::Exact);
        }
        if tag.is_group_length() {
            return ResolvedTag::synthesized(
                Some(tag),
                GROUP_LENGTH_ENTRY.name,
                VR::UL,
                Resolution::GroupLength,
            );
        }
        if let Some(entry) = self.find_pattern(tag) {
            return ResolvedTag::from_entry(tag, entry, Resolution::Pattern(entry.tag));
        }
        if tag.is_private() {
            return ResolvedTag::synthesized(Some(tag), PRIVATE_NAME, VR::UN, Resolution::Private);
        }
        ResolvedTag::synthesized(Some(tag), UNKNOWN_NAME, VR::UN, Resolution::Unknown)
    }

    /// Resolve a tag in text form, such as `"0010,0010"`.
    ///
    /// Malformed text resolves to the `Unknown` record
    /// without consulting the index.
    pub fn resolve_str(&self, text: &str) -> ResolvedTag {
        match text.parse::<Tag>() {
            Ok(tag) => self.resolve(tag),
            Err(e) => {
                trace!("Malformed tag `{}`: {}", text, e);
                ResolvedTag::synthesized(None, UNKNOWN_NAME, VR::UN, Resolution::Unknown)
            }
        }
    }
}

impl DataDictionary for DataElementRegistry {
    type Entry = E;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        self.entry_by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        self.entry_by_keyword(name)
    }
}

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    /// Resolve a tag against the standard registry,
    /// as in [`DataElementRegistry::resolve`].
    #[inline]
    pub fn resolve(&self, tag: Tag) -> ResolvedTag {
        registry().resolve(tag)
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = E;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().entry_by_keyword(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        registry().entry_by_tag(tag)
    }
}

impl<'a> DataDictionary for &'a StandardDataDictionary {
    type Entry = E;

    fn by_name(&self, name: &str) -> Option<&'static E> {
        registry().entry_by_keyword(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&'static E> {
        registry().entry_by_tag(tag)
    }
}

impl fmt::Display for StandardDataDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::{DataElementRegistry, Resolution, StandardDataDictionary, E};
    use crate::error::BuildError;
    use dicom_dictionary_core::dictionary::{DataDictionary, TagPattern, VirtualVr::*};
    use dicom_dictionary_core::header::{Tag, VR::*};
    use matches::assert_matches;

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&E::new(
                TagPattern::single(Tag(0x0010, 0x0010)),
                "PatientName",
                "Patient's Name",
                Exact(PN),
                false,
            ))
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&E::new(
                TagPattern::single(Tag(0x0008, 0x0060)),
                "Modality",
                "Modality",
                Exact(CS),
                false,
            ))
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, TagPattern::single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, Px);

        // repeated overlay data
        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, TagPattern::from_notation("(60xx,3000)"));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr, Ox);
    }

    // tests for just a few attributes to make sure that the tag constants
    // were well installed into the crate
    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(OVERLAY_COLUMNS, Tag(0x6000, 0x0011));
        assert_eq!(ESCAPE_TRIPLET, Tag(0x1000, 0x0000));
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(
            dict.parse_tag("OperatorsName"),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
        assert_eq!(dict.parse_tag("0080 0010"), None);
        assert_eq!(dict.parse_tag("(0000.0600)"), None);
        assert_eq!(dict.parse_tag("OPERATORSNAME"), None);
    }

    #[test]
    fn can_query_by_expression() {
        let dict = StandardDataDictionary;

        let entry = dict.by_expr("(0010,0010)").expect("Patient's Name should exist");
        assert_eq!(entry.alias, "PatientName");
        let entry = dict.by_expr("0008,0060").expect("Modality should exist");
        assert_eq!(entry.alias, "Modality");
        let entry = dict.by_expr("OperatorsName").expect("Operators' Name should exist");
        assert_eq!(entry.tag, TagPattern::single(crate::tags::OPERATORS_NAME));
        assert_eq!(entry.name, "Operators' Name");
    }

    #[test]
    fn has_group_length_entries() {
        use crate::tags::*;
        let dict = StandardDataDictionary::default();

        let entry = dict
            .by_tag(FILE_META_INFORMATION_GROUP_LENGTH)
            .expect("File Meta Information Group Length should exist");
        assert_eq!(entry.alias, "FileMetaInformationGroupLength");
        assert_eq!(entry.vr, Exact(UL));

        // generic group length
        let entry = dict
            .by_tag(Tag(0x7FE0, 0x0000))
            .expect("generic group length should be available");
        assert_eq!(entry.alias, "GenericGroupLength");
        assert_eq!(entry.name, "Group Length");
        assert_eq!(entry.vr, Exact(UL));
        assert!(entry.tag.matches(Tag(0x0011, 0x0000)));
    }

    #[test]
    fn private_and_unknown_are_not_entries() {
        let dict = StandardDataDictionary;
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0010)), None);
        assert_eq!(dict.by_tag(Tag(0xEEEE, 0xABCD)), None);

        assert_eq!(dict.resolve(Tag(0x0009, 0x0010)).resolution, Resolution::Private);
        assert_eq!(dict.resolve(Tag(0xEEEE, 0xABCD)).resolution, Resolution::Unknown);
    }

    #[test]
    fn standard_patterns_are_not_ambiguous() {
        assert!(super::registry().ambiguous_patterns().is_empty());
    }

    static CUSTOM: &[E] = &[
        E::new(TagPattern::single(Tag(0x0009, 0x1000)), "VendorThing", "Vendor Thing", Exact(LO), false),
        E::new(TagPattern::single(Tag(0x5000, 0x0000)), "CurveGroupLength", "Curve Group Length", Exact(UL), true),
        E::new(TagPattern::from_notation("(50xx,26xx)"), "CurveBlock", "Curve Block", Exact(OB), true),
        E::new(TagPattern::from_notation("(50xx,2600)"), "CurveOverlays", "Curve Overlays", Exact(SQ), true),
        E::new(TagPattern::from_notation("(60xx,0011)"), "OverlayColumns", "Overlay Columns", Exact(US), false),
        E::new(TagPattern::from_notation("(6xx0,0011)"), "OddColumns", "Odd Columns", Exact(SS), false),
    ];

    #[test]
    fn resolution_precedence() {
        let registry = DataElementRegistry::from_entries(CUSTOM).unwrap();
        assert_eq!(registry.len(), 6);

        // exact entries take precedence over any synthesis
        let resolved = registry.resolve(Tag(0x0009, 0x1000));
        assert_eq!(resolved.name, "Vendor Thing");
        assert_eq!(resolved.resolution, Resolution::Exact);
        let resolved = registry.resolve(Tag(0x5000, 0x0000));
        assert_eq!(resolved.name, "Curve Group Length");
        assert!(resolved.retired);

        // group length comes before patterns
        let resolved = registry.resolve(Tag(0x5002, 0x0000));
        assert_eq!(resolved.name, "Group Length");
        assert_eq!(resolved.vr_code(), "UL");
        assert!(!resolved.retired);
        assert_eq!(resolved.resolution, Resolution::GroupLength);

        // the most specific pattern wins, regardless of declaration order
        let resolved = registry.resolve(Tag(0x5012, 0x2600));
        assert_eq!(resolved.name, "Curve Overlays");
        assert_eq!(
            resolved.resolution,
            Resolution::Pattern(TagPattern::from_notation("(50xx,2600)"))
        );
        let resolved = registry.resolve(Tag(0x5012, 0x2601));
        assert_eq!(resolved.name, "Curve Block");

        // patterns come before the private rule
        let resolved = registry.resolve(Tag(0x5011, 0x2600));
        assert_eq!(resolved.name, "Curve Overlays");

        let resolved = registry.resolve(Tag(0x0009, 0x1001));
        assert_eq!(resolved.name, "Private");
        assert_eq!(resolved.vr, Exact(UN));
        assert_eq!(resolved.resolution, Resolution::Private);

        let resolved = registry.resolve(Tag(0x0008, 0x1001));
        assert_eq!(resolved.name, "Unknown");
        assert_eq!(resolved.vr, Exact(UN));
        assert_eq!(resolved.resolution, Resolution::Unknown);
        assert_eq!(resolved.tag, Some(Tag(0x0008, 0x1001)));
    }

    #[test]
    fn equal_specificity_follows_declaration_order() {
        let registry = DataElementRegistry::from_entries(CUSTOM).unwrap();

        // (6000,0011) matches both (60xx,0011) and (6xx0,0011)
        let resolved = registry.resolve(Tag(0x6000, 0x0011));
        assert_eq!(resolved.name, "Overlay Columns");
        // only the second one matches here
        let resolved = registry.resolve(Tag(0x6110, 0x0011));
        assert_eq!(resolved.name, "Odd Columns");

        assert_eq!(
            registry.ambiguous_patterns(),
            &[(
                TagPattern::from_notation("(60xx,0011)"),
                TagPattern::from_notation("(6xx0,0011)"),
            )]
        );
    }

    #[test]
    fn malformed_text_resolves_to_unknown() {
        let registry = DataElementRegistry::from_entries(CUSTOM).unwrap();
        for text in ["", "0009", "0009,10000", "+009,1000", "0009;1000", "5xxx,2600"] {
            let resolved = registry.resolve_str(text);
            assert_eq!(resolved.tag, None, "{:?}", text);
            assert_eq!(resolved.name, "Unknown");
            assert_eq!(resolved.vr_code(), "UN");
            assert_eq!(resolved.resolution, Resolution::Unknown);
        }
        assert_eq!(registry.resolve_str("0009,1000").name, "Vendor Thing");
        assert_eq!(registry.resolve_str("(0009,1000)").name, "Vendor Thing");
    }

    #[test]
    fn rejects_duplicate_tags() {
        static TABLE: &[E] = &[
            E::new(TagPattern::single(Tag(0x0010, 0x0010)), "PatientName", "Patient's Name", Exact(PN), false),
            E::new(TagPattern::single(Tag(0x0010, 0x0010)), "PatientsName", "Patients Name", Exact(PN), true),
        ];
        let err = DataElementRegistry::from_entries(TABLE).unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateTag {
                tag: Tag(0x0010, 0x0010),
                first: "PatientName",
                second: "PatientsName",
            }
        );
        assert_eq!(
            err.to_string(),
            "duplicate entry for tag (0010,0010): `PatientName` and `PatientsName`"
        );
    }

    #[test]
    fn rejects_duplicate_patterns() {
        static FIRST: &[E] = &[
            E::new(TagPattern::from_notation("(60xx,3000)"), "OverlayData", "Overlay Data", Ox, false),
        ];
        static SECOND: &[E] = &[
            E::new(TagPattern::masked(Tag(0x6000, 0x3000), 0xFF00, 0xFFFF), "OverlayData2", "Overlay Data", Ox, false),
        ];
        let err = DataElementRegistry::from_tables([FIRST, SECOND]).unwrap_err();
        assert_matches!(err, BuildError::DuplicatePattern { first: "OverlayData", second: "OverlayData2", .. });
    }

    #[test]
    fn rejects_open_patterns() {
        static TABLE: &[E] = &[
            E::new(TagPattern::masked(Tag(0x0000, 0x0000), 0x0000, 0x0000), "Everything", "Everything", Exact(UN), false),
        ];
        let err = DataElementRegistry::from_entries(TABLE).unwrap_err();
        assert_eq!(err, BuildError::OpenPattern { alias: "Everything" });
    }
}
