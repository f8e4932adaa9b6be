//! This module contains the concept of a DICOM data dictionary.
//!
//! Data element dictionaries translate tags and keywords
//! to a record of the attribute, see [`DataDictionary`].
//! UID dictionaries do the same for unique identifiers,
//! see [`UidDictionary`].

pub mod data_element;
pub mod uid;

pub use data_element::{
    DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, ParsePatternError, TagPattern,
    VirtualVr,
};
pub use uid::{UidDictionary, UidDictionaryEntry, UidDictionaryEntryRef, UidType};
