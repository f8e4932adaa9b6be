#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM dictionary,
//! containing the concepts needed to resolve
//! DICOM tags and unique identifiers to their metadata.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for DICOM tags
//!   and value representations,
//!   including the codec for the textual form of a tag.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute,
//!   and UID dictionaries, which do the same for unique identifiers.
//!
//! The standard dictionary content lives in the `dicom-dictionary-std` crate.

pub mod dictionary;
pub mod header;

pub use dictionary::{DataDictionary, UidDictionary};
pub use header::{Tag, VR};
