//! This crate implements the standard DICOM dictionaries
//! and the resolution of tags and unique identifiers (UIDs)
//! to their metadata.
//!
//! ## Library
//!
//! The [`Library`] is the main entry point,
//! answering every query with usable metadata:
//!
//! - a tag is always resolved to a name and a VR code,
//!   with synthesized records for group length elements,
//!   private elements and unknown tags;
//! - a UID is resolved to its name, type and retirement status,
//!   or to nothing if it is not known.
//!   Transfer syntax UIDs can also be tested for validity
//!   and for whether they imply compressed pixel data.
//!
//! ```
//! use dicom_dictionary_std::standard;
//!
//! let library = standard();
//! let element = library.element("0028,0453");
//! assert_eq!(element.name, "Coefficient Coding Pointers");
//! assert_eq!(element.vr_code(), "AT");
//! assert!(element.retired);
//!
//! assert!(library.get_compression("1.2.840.10008.1.2.4.64"));
//! ```
//!
//! The standard library is built once on first use.
//! Call [`init`] to build it eagerly.
//! Custom libraries, such as with vendor specific attributes,
//! can be composed with a [`LibraryBuilder`].
//!
//! ## Run-time dictionaries
//!
//! The following modules provide dictionaries
//! which can be queried during a program's lifetime:
//!
//! - [`data_element`]: Contains the information about the
//!   DICOM attributes specified in the standard,
//!   including repeating attributes such as _Overlay Data_ `(60xx,3000)`.
//! - [`uid`]: Contains the information about DICOM unique identifiers,
//!   such as SOP classes and transfer syntaxes.
//!   Which types of UIDs are included besides transfer syntaxes
//!   is decided by Cargo features (all of them by default).
//!
//! The records in these dictionaries are collected
//! from [DICOM PS3.6] directly.
//! Each dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod error;
pub mod library;
pub mod tags;
pub mod uid;
pub mod uids;

pub use data_element::{
    DataElementRegistry, Resolution, ResolvedTag, StandardDataDictionary,
};
pub use error::BuildError;
pub use library::{init, standard, Library, LibraryBuilder};
pub use uid::{ResolvedUid, StandardUidDictionary, UidRegistry};
