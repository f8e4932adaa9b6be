//! Core UID dictionary types

use std::fmt;
use std::str::FromStr;

use snafu::Snafu;

/// Type trait for a dictionary of known DICOM unique identifiers (UIDs).
///
/// UID dictionaries provide the means to
/// look up information at run-time about a certain UID.
///
/// The methods herein have no generic parameters,
/// so as to enable being used as a trait object.
pub trait UidDictionary {
    /// The type of the dictionary entry.
    type Entry: UidDictionaryEntry;

    /// Fetch an entry by its usual keyword (e.g. CTImageStorage).
    /// Aliases (or keywords)
    /// are usually in UpperCamelCase,
    /// not separated by spaces,
    /// and are case sensitive.
    fn by_keyword(&self, keyword: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its UID.
    fn by_uid(&self, uid: &str) -> Option<&Self::Entry>;
}

/// UID dictionary entry type
pub trait UidDictionaryEntry {
    /// Get the UID proper.
    fn uid(&self) -> &str;

    /// Get the full name of the identifier.
    fn name(&self) -> &str;

    /// The alias of the UID, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The type of UID.
    fn uid_type(&self) -> UidType;

    /// Get whether the UID is retired.
    fn is_retired(&self) -> bool;

    /// Whether this is a transfer syntax
    /// in which pixel data is encapsulated
    /// instead of being in its native form.
    ///
    /// Always `false` for any other type of UID.
    fn is_compressed(&self) -> bool;
}

/// A data type for a dictionary entry using string slices
/// for its data.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UidDictionaryEntryRef<'a> {
    /// The UID proper
    pub uid: &'a str,
    /// The full name of the identifier,
    /// which may contain spaces
    /// and the `(Retired)` annotation
    pub name: &'a str,
    /// The alias of the identifier,
    /// with no spaces, usually in UpperCamelCase
    pub alias: &'a str,
    /// The type of UID
    pub r#type: UidType,
    /// Whether this UID is retired
    pub retired: bool,
    /// Whether pixel data is encapsulated (compressed).
    /// Only meaningful for transfer syntaxes.
    pub compressed: bool,
}

impl<'a> UidDictionaryEntryRef<'a> {
    /// Create an entry for any type of UID.
    ///
    /// Use [`transfer_syntax`](UidDictionaryEntryRef::transfer_syntax)
    /// to declare a transfer syntax with compressed pixel data.
    pub const fn new(
        uid: &'a str,
        name: &'a str,
        alias: &'a str,
        r#type: UidType,
        retired: bool,
    ) -> Self {
        UidDictionaryEntryRef {
            uid,
            name,
            alias,
            r#type,
            retired,
            compressed: false,
        }
    }

    /// Create a transfer syntax entry.
    ///
    /// `compressed` classifies the transfer syntax
    /// as either native (`false`) or encapsulated (`true`)
    /// pixel data encoding.
    pub const fn transfer_syntax(
        uid: &'a str,
        name: &'a str,
        alias: &'a str,
        retired: bool,
        compressed: bool,
    ) -> Self {
        UidDictionaryEntryRef {
            uid,
            name,
            alias,
            r#type: UidType::TransferSyntax,
            retired,
            compressed,
        }
    }
}

impl<'a> UidDictionaryEntry for UidDictionaryEntryRef<'a> {
    fn uid(&self) -> &str {
        self.uid
    }

    fn name(&self) -> &str {
        self.name
    }

    fn alias(&self) -> &str {
        self.alias
    }

    fn uid_type(&self) -> UidType {
        self.r#type
    }

    fn is_retired(&self) -> bool {
        self.retired
    }

    fn is_compressed(&self) -> bool {
        self.r#type == UidType::TransferSyntax && self.compressed
    }
}

/// Enum for all UID types recognized by the standard.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum UidType {
    /// SOP Class
    SopClass,
    /// Meta SOP Class
    MetaSopClass,
    /// Transfer Syntax
    TransferSyntax,
    /// Well-known SOP Instance
    WellKnownSopInstance,
    /// DICOM UIDs as a Coding Scheme
    DicomUidsAsCodingScheme,
    /// Coding Scheme
    CodingScheme,
    /// Application Context Name
    ApplicationContextName,
    /// Service Class
    ServiceClass,
    /// Application Hosting Model
    ApplicationHostingModel,
    /// Mapping Resource
    MappingResource,
    /// LDAP OID
    LdapOid,
    /// Synchronization Frame of Reference
    SynchronizationFrameOfReference,
}

/// An error returned when a string is not a known UID type.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("unknown UID type `{}`", name))]
pub struct ParseUidTypeError {
    name: String,
}

impl FromStr for UidType {
    type Err = ParseUidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SOP Class" => Ok(UidType::SopClass),
            "Meta SOP Class" => Ok(UidType::MetaSopClass),
            "Transfer Syntax" => Ok(UidType::TransferSyntax),
            "Well-known SOP Instance" => Ok(UidType::WellKnownSopInstance),
            "DICOM UIDs as a Coding Scheme" => Ok(UidType::DicomUidsAsCodingScheme),
            "Coding Scheme" => Ok(UidType::CodingScheme),
            "Application Context Name" => Ok(UidType::ApplicationContextName),
            "Service Class" => Ok(UidType::ServiceClass),
            "Application Hosting Model" => Ok(UidType::ApplicationHostingModel),
            "Mapping Resource" => Ok(UidType::MappingResource),
            "LDAP OID" => Ok(UidType::LdapOid),
            "Synchronization Frame of Reference" => Ok(UidType::SynchronizationFrameOfReference),
            other => Err(ParseUidTypeError {
                name: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for UidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            UidType::SopClass => "SOP Class",
            UidType::MetaSopClass => "Meta SOP Class",
            UidType::TransferSyntax => "Transfer Syntax",
            UidType::WellKnownSopInstance => "Well-known SOP Instance",
            UidType::DicomUidsAsCodingScheme => "DICOM UIDs as a Coding Scheme",
            UidType::CodingScheme => "Coding Scheme",
            UidType::ApplicationContextName => "Application Context Name",
            UidType::ServiceClass => "Service Class",
            UidType::ApplicationHostingModel => "Application Hosting Model",
            UidType::MappingResource => "Mapping Resource",
            UidType::LdapOid => "LDAP OID",
            UidType::SynchronizationFrameOfReference => "Synchronization Frame of Reference",
        };
        f.write_str(str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_type_names_round_trip() {
        for ty in [
            UidType::SopClass,
            UidType::TransferSyntax,
            UidType::ApplicationHostingModel,
            UidType::SynchronizationFrameOfReference,
        ] {
            assert_eq!(ty.to_string().parse::<UidType>(), Ok(ty));
        }
        assert!("Transfer Syntaxes".parse::<UidType>().is_err());
    }

    #[test]
    fn compression_only_applies_to_transfer_syntaxes() {
        let ts = UidDictionaryEntryRef::transfer_syntax(
            "1.2.840.10008.1.2.4.50",
            "JPEG Baseline (Process 1)",
            "JPEGBaseline8Bit",
            false,
            true,
        );
        assert_eq!(ts.uid_type(), UidType::TransferSyntax);
        assert!(ts.is_compressed());

        let mut sop = UidDictionaryEntryRef::new(
            "1.2.840.10008.1.1",
            "Verification SOP Class",
            "Verification",
            UidType::SopClass,
            false,
        );
        assert!(!sop.is_compressed());
        sop.compressed = true;
        assert!(!sop.is_compressed());
    }
}
