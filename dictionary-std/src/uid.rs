//! UID dictionary registry, with transfer syntax classification.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::fmt;

use dicom_dictionary_core::dictionary::{
    UidDictionary, UidDictionaryEntry, UidDictionaryEntryRef, UidType,
};
use snafu::ensure;
use tracing::debug;

use crate::error::{CompressedNonTransferSyntaxSnafu, DuplicateUidSnafu, Result};

type E = UidDictionaryEntryRef<'static>;

/// Retrieve the UID registry of the standard library.
///
/// The registry is built on first use, see [`standard`](crate::standard).
#[inline]
pub fn registry() -> &'static UidRegistry {
    crate::standard().uids()
}

/// The UID tables compiled into this crate,
/// depending on the enabled Cargo features.
pub(crate) fn standard_tables() -> Vec<&'static [E]> {
    #[allow(unused_mut)]
    let mut tables: Vec<&'static [E]> = vec![crate::uids::TRANSFER_SYNTAXES];
    #[cfg(feature = "sop-class")]
    tables.push(crate::uids::SOP_CLASSES);
    #[cfg(feature = "meta-sop-class")]
    tables.push(crate::uids::META_SOP_CLASSES);
    #[cfg(feature = "well-known-sop-instance")]
    tables.push(crate::uids::WELL_KNOWN_SOP_INSTANCES);
    #[cfg(feature = "dicom-uid-as-coding-scheme")]
    tables.push(crate::uids::DICOM_UIDS_AS_CODING_SCHEMES);
    #[cfg(feature = "coding-scheme")]
    tables.push(crate::uids::CODING_SCHEMES);
    #[cfg(feature = "application-context-name")]
    tables.push(crate::uids::APPLICATION_CONTEXT_NAMES);
    #[cfg(feature = "service-class")]
    tables.push(crate::uids::SERVICE_CLASSES);
    #[cfg(feature = "application-hosting-model")]
    tables.push(crate::uids::APPLICATION_HOSTING_MODELS);
    #[cfg(feature = "mapping-resource")]
    tables.push(crate::uids::MAPPING_RESOURCES);
    #[cfg(feature = "ldap-oid")]
    tables.push(crate::uids::LDAP_OIDS);
    #[cfg(feature = "synchronization-frame-of-reference")]
    tables.push(crate::uids::SYNCHRONIZATION_FRAME_OF_REFERENCES);
    tables
}

/// The metadata of a known UID.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUid {
    /// The UID proper
    pub value: &'static str,
    /// The full name of the identifier,
    /// including the `(Retired)` annotation where applicable
    pub name: &'static str,
    /// The keyword of the identifier
    pub keyword: &'static str,
    /// The type of UID
    pub uid_type: UidType,
    /// Whether the UID is retired
    pub retired: bool,
    /// Whether this is a transfer syntax with encapsulated pixel data
    pub compressed: bool,
}

impl ResolvedUid {
    fn from_entry(entry: &E) -> Self {
        ResolvedUid {
            value: entry.uid,
            name: entry.name,
            keyword: entry.alias,
            uid_type: entry.r#type,
            retired: entry.retired,
            compressed: entry.is_compressed(),
        }
    }

    /// Whether this UID is a transfer syntax.
    #[inline]
    pub fn is_transfer_syntax(&self) -> bool {
        self.uid_type == UidType::TransferSyntax
    }
}

impl fmt::Display for ResolvedUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}

/// The data struct containing an index of UID dictionary entries.
#[derive(Debug)]
pub struct UidRegistry {
    /// mapping: uid → entry
    by_uid: HashMap<&'static str, &'static E>,
    /// mapping: keyword → entry
    by_keyword: HashMap<&'static str, &'static E>,
}

impl UidRegistry {
    /// Build a registry from a single table of entries.
    pub fn from_entries(entries: &'static [E]) -> Result<Self> {
        Self::from_tables(std::iter::once(entries))
    }

    /// Build a registry from a sequence of tables.
    ///
    /// # Errors
    ///
    /// Fails if two entries share the same UID,
    /// or if an entry other than a transfer syntax
    /// is flagged as compressed.
    pub fn from_tables<I>(tables: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static [E]>,
    {
        let mut registry = UidRegistry {
            by_uid: HashMap::new(),
            by_keyword: HashMap::new(),
        };
        for entry in tables.into_iter().flatten() {
            registry.index(entry)?;
        }
        debug!(uids = registry.by_uid.len(), "Built UID registry");
        Ok(registry)
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static E) -> Result<()> {
        ensure!(
            !entry.compressed || entry.r#type == UidType::TransferSyntax,
            CompressedNonTransferSyntaxSnafu {
                uid: entry.uid,
                uid_type: entry.r#type,
            }
        );
        match self.by_uid.entry(entry.uid) {
            MapEntry::Occupied(previous) => {
                return DuplicateUidSnafu {
                    uid: entry.uid,
                    first: previous.get().alias,
                    second: entry.alias,
                }
                .fail();
            }
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
        self.by_keyword.entry(entry.alias).or_insert(entry);
        Ok(())
    }

    /// The number of UIDs in the registry.
    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }

    /// Look up a UID by exact string comparison.
    pub fn uid(&self, value: &str) -> Option<ResolvedUid> {
        self.by_uid.get(value).map(|e| ResolvedUid::from_entry(e))
    }

    /// Whether the value is a known transfer syntax UID.
    pub fn is_transfer_syntax(&self, value: &str) -> bool {
        self.by_uid
            .get(value)
            .map_or(false, |e| e.uid_type() == UidType::TransferSyntax)
    }

    /// Whether the value is a known transfer syntax UID
    /// in which pixel data is encapsulated.
    pub fn is_compressed(&self, value: &str) -> bool {
        self.by_uid.get(value).map_or(false, |e| e.is_compressed())
    }

    /// The name of the UID, of any type.
    pub fn description(&self, value: &str) -> Option<&'static str> {
        self.by_uid.get(value).map(|e| e.name)
    }
}

impl UidDictionary for UidRegistry {
    type Entry = E;

    #[inline]
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        self.by_keyword.get(keyword).copied()
    }

    #[inline]
    fn by_uid(&self, uid: &str) -> Option<&Self::Entry> {
        self.by_uid.get(uid).copied()
    }
}

/// A UID dictionary which consults
/// the library's global DICOM UID registry.
///
/// This is the type which would generally be used
/// whenever a program needs to translate a UID
/// to its name or from its keyword back to a UID
/// during a program's execution.
/// Note that the [`uids`](crate::uids) module
/// already provides easy to use constants for all of them.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct StandardUidDictionary;

impl UidDictionary for StandardUidDictionary {
    type Entry = E;

    #[inline]
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry> {
        registry().by_keyword(keyword)
    }

    #[inline]
    fn by_uid(&self, uid: &str) -> Option<&Self::Entry> {
        registry().by_uid(uid)
    }
}

#[cfg(test)]
mod tests {
    use super::{ResolvedUid, StandardUidDictionary, UidRegistry, E};
    use crate::error::BuildError;
    use dicom_dictionary_core::dictionary::{UidDictionary, UidType};

    // tests for just a few UIDs to make sure that the entries
    // were well installed into the dictionary index
    #[cfg(feature = "sop-class")]
    #[test]
    fn can_fetch_uids() {
        let dict = StandardUidDictionary::default();

        let entry = dict.by_uid("1.2.840.10008.1.1");
        assert_eq!(
            entry,
            Some(&E::new(
                "1.2.840.10008.1.1",
                "Verification SOP Class",
                "Verification",
                UidType::SopClass,
                false,
            ))
        );

        let entry = dict.by_keyword("ComputedRadiographyImageStorage");
        assert_eq!(
            entry.map(|e| e.uid),
            Some(crate::uids::COMPUTED_RADIOGRAPHY_IMAGE_STORAGE)
        );

        let entry = dict.by_uid(crate::uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            entry,
            Some(&E::transfer_syntax(
                "1.2.840.10008.1.2.1",
                "Explicit VR Little Endian",
                "ExplicitVRLittleEndian",
                false,
                false,
            ))
        );

        assert_eq!(dict.by_uid("1.2.840.10008.1.2.0"), None);
        assert_eq!(dict.by_keyword("explicitVRLittleEndian"), None);
    }

    #[test]
    fn transfer_syntaxes_are_classified() {
        let registry = super::registry();

        let deflated = registry
            .uid(crate::uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN)
            .expect("Deflated Explicit VR Little Endian should exist");
        assert!(deflated.is_transfer_syntax());
        assert!(!deflated.compressed);

        assert!(registry.is_compressed(crate::uids::JPEG_BASELINE8_BIT));
        assert!(registry.is_compressed(crate::uids::RLE_LOSSLESS));
        assert!(registry.is_compressed(crate::uids::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN));
        assert!(!registry.is_compressed(crate::uids::IMPLICIT_VR_LITTLE_ENDIAN));

        // every other transfer syntax has its pixel data encapsulated
        let native = [
            "1.2.840.10008.1.2",
            "1.2.840.10008.1.2.1",
            "1.2.840.10008.1.2.1.99",
            "1.2.840.10008.1.2.2",
            "1.2.840.10008.1.2.6.1",
            "1.2.840.10008.1.2.6.2",
            "1.2.840.10008.1.2.7.1",
            "1.2.840.10008.1.2.7.2",
            "1.2.840.10008.1.2.7.3",
            "1.2.840.10008.1.20",
        ];
        for ts in crate::uids::TRANSFER_SYNTAXES {
            assert_eq!(
                ts.compressed,
                !native.contains(&ts.uid),
                "unexpected classification of {}",
                ts.name
            );
        }
    }

    #[cfg(all(feature = "application-context-name", feature = "ldap-oid"))]
    #[test]
    fn descriptions_cover_every_type() {
        let registry = super::registry();
        assert_eq!(
            registry.description("1.2.840.10008.3.1.1.1"),
            Some("DICOM Application Context Name")
        );
        assert_eq!(
            registry.description("1.2.840.10008.15.0.4.8"),
            Some("dicomTransferCapability")
        );
        assert!(!registry.is_transfer_syntax("1.2.840.10008.3.1.1.1"));
        assert_eq!(registry.description("1.2.3.4"), None);
    }

    static CUSTOM: &[E] = &[
        E::transfer_syntax("1.2.3.1", "Native Syntax", "NativeSyntax", false, false),
        E::transfer_syntax("1.2.3.2", "Packed Syntax", "PackedSyntax", false, true),
        E::new("1.2.3.3", "Sample SOP Class (Retired)", "SampleSOPClass", UidType::SopClass, true),
    ];

    #[test]
    fn custom_registry() {
        let registry = UidRegistry::from_entries(CUSTOM).unwrap();
        assert_eq!(registry.len(), 3);

        assert_eq!(
            registry.uid("1.2.3.3"),
            Some(ResolvedUid {
                value: "1.2.3.3",
                name: "Sample SOP Class (Retired)",
                keyword: "SampleSOPClass",
                uid_type: UidType::SopClass,
                retired: true,
                compressed: false,
            })
        );
        assert!(registry.is_transfer_syntax("1.2.3.1"));
        assert!(!registry.is_compressed("1.2.3.1"));
        assert!(registry.is_compressed("1.2.3.2"));
        assert!(!registry.is_transfer_syntax("1.2.3.3"));
        assert!(!registry.is_compressed("1.2.3.3"));
        // no normalization of any kind
        assert_eq!(registry.uid(" 1.2.3.1"), None);
        assert_eq!(registry.uid("1.2.3.1\0"), None);
    }

    #[test]
    fn rejects_duplicate_uids() {
        static TABLE: &[E] = &[
            E::new("1.2.3.3", "Sample SOP Class", "SampleSOPClass", UidType::SopClass, false),
        ];
        let err = UidRegistry::from_tables([CUSTOM, TABLE]).unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateUid {
                uid: "1.2.3.3",
                first: "SampleSOPClass",
                second: "SampleSOPClass",
            }
        );
    }

    #[test]
    fn rejects_compressed_non_transfer_syntax() {
        static TABLE: &[E] = &[E {
            uid: "1.2.3.4",
            name: "Compressed SOP Class",
            alias: "CompressedSOPClass",
            r#type: UidType::SopClass,
            retired: false,
            compressed: true,
        }];
        let err = UidRegistry::from_entries(TABLE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "UID 1.2.3.4 is a SOP Class and cannot be flagged as compressed"
        );
    }
}
