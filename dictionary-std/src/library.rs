//! The dictionary library, combining the data element and UID registries
//! behind a single set of queries.

use dicom_dictionary_core::dictionary::{DataDictionaryEntryRef, UidDictionaryEntryRef};
use dicom_dictionary_core::Tag;
use once_cell::sync::Lazy;

use crate::data_element::{DataElementRegistry, ResolvedTag};
use crate::error::Result;
use crate::uid::{ResolvedUid, UidRegistry};

static STANDARD: Lazy<Library> = Lazy::new(|| match LibraryBuilder::new().build() {
    Ok(library) => library,
    Err(e) => panic!("the standard dictionary tables are malformed: {}", e),
});

/// Retrieve the library of the standard DICOM dictionary.
///
/// The library is built once, on the first call to this function
/// or to [`init`].
///
/// # Panics
///
/// Panics if the built-in tables fail integrity checks.
#[inline]
pub fn standard() -> &'static Library {
    &STANDARD
}

/// Build the standard library now, if it was not built yet.
///
/// Calling this at startup moves the cost of indexing the tables
/// (and any integrity failure) out of the first query.
pub fn init() {
    Lazy::force(&STANDARD);
}

/// A DICOM dictionary of data elements and unique identifiers.
///
/// All queries are infallible:
/// malformed or unknown tags resolve to a synthesized record,
/// and unknown UIDs resolve to `None`.
///
/// # Example
///
/// ```
/// let library = dicom_dictionary_std::standard();
///
/// assert_eq!(library.name_and_vr("0010,0010"), ("Patient's Name", "PN"));
/// assert_eq!(library.name_and_vr("60CC,0011"), ("Overlay Columns", "US"));
/// assert_eq!(library.name_and_vr("0011,ABCD"), ("Private", "UN"));
///
/// assert!(library.check_ts_validity("1.2.840.10008.1.2.1"));
/// assert!(!library.get_compression("1.2.840.10008.1.2.1"));
/// ```
#[derive(Debug)]
pub struct Library {
    elements: DataElementRegistry,
    uids: UidRegistry,
}

impl Library {
    /// Create a builder for a new library,
    /// starting from the standard tables.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    /// The underlying data element registry.
    pub fn elements(&self) -> &DataElementRegistry {
        &self.elements
    }

    /// The underlying UID registry.
    pub fn uids(&self) -> &UidRegistry {
        &self.uids
    }

    /// Resolve a tag in text form (`GGGG,EEEE`) to the attribute metadata.
    pub fn element(&self, tag: &str) -> ResolvedTag {
        self.elements.resolve_str(tag)
    }

    /// Resolve a tag to the attribute metadata.
    pub fn element_by_tag(&self, tag: Tag) -> ResolvedTag {
        self.elements.resolve(tag)
    }

    /// Resolve a tag in text form to the attribute name and VR code.
    pub fn name_and_vr(&self, tag: &str) -> (&'static str, &'static str) {
        let element = self.element(tag);
        (element.name, element.vr_code())
    }

    /// Fetch the tag of an attribute by its keyword.
    ///
    /// For repeating attributes, the lowest tag of the group is returned.
    pub fn tag_for_keyword(&self, keyword: &str) -> Option<Tag> {
        self.elements.entry_by_keyword(keyword).map(|e| e.tag.tag())
    }

    /// Look up a UID.
    pub fn uid(&self, value: &str) -> Option<ResolvedUid> {
        self.uids.uid(value)
    }

    /// Whether the value is a known transfer syntax UID.
    pub fn check_ts_validity(&self, value: &str) -> bool {
        self.uids.is_transfer_syntax(value)
    }

    /// Whether the value is a known transfer syntax UID
    /// with compressed (encapsulated) pixel data.
    pub fn get_compression(&self, value: &str) -> bool {
        self.uids.is_compressed(value)
    }

    /// The name of any known UID.
    pub fn get_syntax_description(&self, value: &str) -> Option<&'static str> {
        self.uids.description(value)
    }
}

/// A builder for a [`Library`] over a custom selection of tables.
///
/// By default, the builder includes the standard tables of this crate,
/// to which other tables may be added, e.g. with private attributes.
///
/// # Example
///
/// ```
/// # use dicom_dictionary_std::LibraryBuilder;
/// use dicom_dictionary_core::dictionary::{DataDictionaryEntryRef, TagPattern};
/// use dicom_dictionary_core::{Tag, VR};
///
/// static VENDOR: &[DataDictionaryEntryRef<'static>] = &[DataDictionaryEntryRef::new(
///     TagPattern::single(Tag(0x0029, 0x1010)),
///     "VendorSeriesNumber",
///     "Vendor Series Number",
///     dicom_dictionary_core::dictionary::VirtualVr::Exact(VR::IS),
///     false,
/// )];
///
/// let library = LibraryBuilder::new().element_table(VENDOR).build()?;
/// assert_eq!(library.name_and_vr("0029,1010"), ("Vendor Series Number", "IS"));
/// assert_eq!(library.name_and_vr("0029,1011"), ("Private", "UN"));
/// # Ok::<(), dicom_dictionary_std::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LibraryBuilder {
    standard: bool,
    element_tables: Vec<&'static [DataDictionaryEntryRef<'static>]>,
    uid_tables: Vec<&'static [UidDictionaryEntryRef<'static>]>,
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        LibraryBuilder::new()
    }
}

impl LibraryBuilder {
    /// Create a builder which includes the standard tables.
    pub fn new() -> Self {
        LibraryBuilder {
            standard: true,
            element_tables: Vec::new(),
            uid_tables: Vec::new(),
        }
    }

    /// Create a builder without any tables.
    pub fn empty() -> Self {
        LibraryBuilder {
            standard: false,
            ..LibraryBuilder::new()
        }
    }

    /// Define whether to include the standard tables,
    /// which are indexed before any other table.
    pub fn standard_tables(mut self, standard: bool) -> Self {
        self.standard = standard;
        self
    }

    /// Add a table of data element entries.
    pub fn element_table(mut self, table: &'static [DataDictionaryEntryRef<'static>]) -> Self {
        self.element_tables.push(table);
        self
    }

    /// Add a table of UID entries.
    pub fn uid_table(mut self, table: &'static [UidDictionaryEntryRef<'static>]) -> Self {
        self.uid_tables.push(table);
        self
    }

    /// Index and validate all tables into a new library.
    ///
    /// # Errors
    ///
    /// Fails with a [`BuildError`](crate::BuildError)
    /// if the tables combined do not pass the integrity checks
    /// of [`DataElementRegistry`] or [`UidRegistry`].
    pub fn build(&self) -> Result<Library> {
        let mut element_tables = Vec::with_capacity(self.element_tables.len() + 1);
        let mut uid_tables = Vec::new();
        if self.standard {
            element_tables.push(crate::tags::ENTRIES);
            uid_tables.extend(crate::uid::standard_tables());
        }
        element_tables.extend(self.element_tables.iter().copied());
        uid_tables.extend(self.uid_tables.iter().copied());

        Ok(Library {
            elements: DataElementRegistry::from_tables(element_tables)?,
            uids: UidRegistry::from_tables(uid_tables)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{standard, LibraryBuilder};
    use crate::data_element::Resolution;
    use crate::error::BuildError;
    use dicom_dictionary_core::dictionary::{
        DataDictionaryEntryRef, TagPattern, UidDictionaryEntryRef, UidType, VirtualVr,
    };
    use dicom_dictionary_core::{Tag, VR};
    use matches::assert_matches;

    #[test]
    fn standard_library_is_a_singleton() {
        super::init();
        assert!(std::ptr::eq(standard(), standard()));
        assert!(!standard().elements().is_empty());
        assert!(!standard().uids().is_empty());
    }

    #[test]
    fn keywords_to_tags() {
        let library = standard();
        assert_eq!(
            library.tag_for_keyword("SOPInstanceUID"),
            Some(crate::tags::SOP_INSTANCE_UID)
        );
        assert_eq!(
            library.tag_for_keyword("OverlayData"),
            Some(Tag(0x6000, 0x3000))
        );
        assert_eq!(library.tag_for_keyword("SopInstanceUid"), None);
    }

    #[test]
    fn empty_library_knows_nothing() {
        let library = LibraryBuilder::empty().build().unwrap();
        assert!(library.elements().is_empty());
        assert!(library.uids().is_empty());

        assert_eq!(library.name_and_vr("0010,0010"), ("Unknown", "UN"));
        assert_eq!(library.name_and_vr("0010,0000"), ("Group Length", "UL"));
        assert_eq!(library.name_and_vr("0011,0010"), ("Private", "UN"));
        assert!(!library.check_ts_validity("1.2.840.10008.1.2"));
        assert_eq!(library.uid("1.2.840.10008.1.2"), None);
    }

    static VENDOR_ELEMENTS: &[DataDictionaryEntryRef<'static>] = &[
        DataDictionaryEntryRef::new(
            TagPattern::from_notation("(0029,xx10)"),
            "VendorBlockLength",
            "Vendor Block Length",
            VirtualVr::Exact(VR::UL),
            false,
        ),
    ];

    static VENDOR_UIDS: &[UidDictionaryEntryRef<'static>] = &[UidDictionaryEntryRef::transfer_syntax(
        "1.2.3.4.5.6.1",
        "Vendor Wavelet Compression",
        "VendorWavelet",
        false,
        true,
    )];

    #[test]
    fn standard_and_custom_tables() {
        let library = LibraryBuilder::new()
            .element_table(VENDOR_ELEMENTS)
            .uid_table(VENDOR_UIDS)
            .build()
            .unwrap();

        let element = library.element("0029,1010");
        assert_eq!(element.name, "Vendor Block Length");
        assert_matches!(element.resolution, Resolution::Pattern(_));
        assert_eq!(library.name_and_vr("0010,0010"), ("Patient's Name", "PN"));

        assert!(library.check_ts_validity("1.2.3.4.5.6.1"));
        assert!(library.get_compression("1.2.3.4.5.6.1"));
        assert_eq!(
            library.uid("1.2.3.4.5.6.1").map(|uid| uid.uid_type),
            Some(UidType::TransferSyntax)
        );
        assert!(library.check_ts_validity("1.2.840.10008.1.2"));
    }

    #[test]
    fn conflicting_tables_fail_to_build() {
        static CLASH: &[DataDictionaryEntryRef<'static>] = &[DataDictionaryEntryRef::new(
            TagPattern::single(Tag(0x0010, 0x0010)),
            "PatientNickname",
            "Patient's Nickname",
            VirtualVr::Exact(VR::PN),
            false,
        )];
        let err = LibraryBuilder::new().element_table(CLASH).build().unwrap_err();
        assert_matches!(
            err,
            BuildError::DuplicateTag {
                first: "PatientName",
                second: "PatientNickname",
                ..
            }
        );

        // without the standard tables, the same table is fine
        let library = LibraryBuilder::new()
            .standard_tables(false)
            .element_table(CLASH)
            .build()
            .unwrap();
        assert_eq!(library.name_and_vr("0010,0010"), ("Patient's Nickname", "PN"));
    }
}
